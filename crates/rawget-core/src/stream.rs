//! Response streaming.
//!
//! The response is an opaque byte stream: no status line or header parsing,
//! no framing beyond "read until the peer closes". Each chunk is forwarded
//! exactly as received (the original tool printed chunks as C strings with an
//! extra newline, which corrupted binary bodies; here bytes pass through
//! untouched).

use crate::error::FetchError;
use std::io::{ErrorKind, Read, Write};

/// One receive buffer's worth of response data.
pub const CHUNK_SIZE: usize = 4096;

/// Copies response bytes from `transport` to `sink` until orderly close.
///
/// A zero-byte read is the peer closing the connection and ends the loop
/// normally. Every chunk is flushed so output stays unbuffered relative to
/// each receive. Returns the total number of bytes forwarded.
pub fn stream_response<R: Read, W: Write>(
    transport: &mut R,
    sink: &mut W,
) -> Result<u64, FetchError> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match transport.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(FetchError::RecvFailed { source }),
        };

        sink.write_all(&buf[..n])
            .and_then(|()| sink.flush())
            .map_err(|source| FetchError::SinkFailed { source })?;
        total += n as u64;
    }

    tracing::debug!(bytes = total, "response stream closed by peer");
    Ok(total)
}
