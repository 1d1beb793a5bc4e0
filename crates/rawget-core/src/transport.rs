//! Connection establishment.
//!
//! Resolves a hostname/port pair and returns a connected blocking
//! `TcpStream`. The port is passed through as a string so numeric ports and
//! service names both work, the way getaddrinfo treats them.

use crate::error::FetchError;
use std::io;
use std::net::{TcpStream, ToSocketAddrs};

/// Resolves `hostname:port` and connects to the first address that accepts.
///
/// Single attempt per candidate address, no timeouts, no retries; the caller
/// owns the returned stream and closing it is its Drop.
pub fn connect(hostname: &str, port: &str) -> Result<TcpStream, FetchError> {
    let authority = format!("{hostname}:{port}");

    let addrs = authority
        .to_socket_addrs()
        .map_err(|source| FetchError::ConnectFailed {
            host: hostname.to_string(),
            port: port.to_string(),
            source,
        })?;

    let mut last_err: Option<io::Error> = None;
    for addr in addrs {
        tracing::debug!(%addr, "attempting connect");
        match TcpStream::connect(addr) {
            Ok(stream) => {
                tracing::info!(%addr, "connected");
                return Ok(stream);
            }
            Err(err) => {
                tracing::debug!(%addr, error = %err, "connect failed");
                last_err = Some(err);
            }
        }
    }

    Err(FetchError::ConnectFailed {
        host: hostname.to_string(),
        port: port.to_string(),
        source: last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "hostname resolved to no addresses")
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn connect_reaches_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port().to_string();
        let stream = connect("127.0.0.1", &port).unwrap();
        assert!(stream.peer_addr().is_ok());
    }

    #[test]
    fn connect_unresolvable_host_is_connect_error() {
        let err = connect("host.invalid", "80").unwrap_err();
        match err {
            FetchError::ConnectFailed { host, port, .. } => {
                assert_eq!(host, "host.invalid");
                assert_eq!(port, "80");
            }
            other => panic!("expected ConnectFailed, got {other:?}"),
        }
    }

    #[test]
    fn connect_bad_port_string_is_connect_error() {
        let err = connect("127.0.0.1", "not-a-port").unwrap_err();
        assert!(matches!(err, FetchError::ConnectFailed { .. }));
    }
}
