//! One-shot TCP server for end-to-end tests.
//!
//! Accepts a single connection, captures the request up to its blank-line
//! terminator, replies with a fixed byte sequence, and closes. The captured
//! request comes back through the join handle so tests can assert exact wire
//! bytes.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct StubServer {
    /// `host:port` of the listener, e.g. "127.0.0.1:40123".
    pub addr: String,
    handle: JoinHandle<Vec<u8>>,
}

impl StubServer {
    /// Waits for the exchange to finish and returns the raw request bytes
    /// the server received.
    pub fn received_request(self) -> Vec<u8> {
        self.handle.join().expect("stub server thread panicked")
    }
}

/// Starts a server that answers the first connection with `response` bytes.
pub fn start(response: Vec<u8>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    // Bare-LF and CRLF blank lines both end the headers.
                    if request.windows(2).any(|w| w == b"\n\n")
                        || request.windows(4).any(|w| w == b"\r\n\r\n")
                    {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        stream.write_all(&response).expect("write response");
        let _ = stream.shutdown(Shutdown::Both);
        request
    });

    StubServer {
        addr: addr.to_string(),
        handle,
    }
}
