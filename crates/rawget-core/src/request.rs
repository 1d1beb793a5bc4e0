//! HTTP request construction and transmission.
//!
//! The request is the only wire format this tool produces: a bare GET with a
//! `Host` header and `Connection: close`, nothing else. The original tool
//! terminated request lines with bare `\n` rather than the standard `\r\n`;
//! most servers tolerate that, and we keep it as the default for wire
//! fidelity. `LineEnding::CrLf` is the opt-in for strict servers.

use crate::error::FetchError;
use crate::target::ParsedTarget;
use std::io::Write;

/// Request line terminator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Bare `\n`, matching the original wire format.
    #[default]
    Lf,
    /// Standard HTTP/1.1 `\r\n`.
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Builds the complete request. Pure; the same target always yields the same
/// bytes. The buffer grows as needed, so an oversized path cannot overflow
/// anything.
pub fn build_request(target: &ParsedTarget, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    format!(
        "GET /{path} HTTP/1.1{eol}Host: {host}:{port}{eol}Connection: close{eol}{eol}",
        path = target.path,
        host = target.hostname,
        port = target.port,
    )
}

/// Builds the request for `target` and writes all of it to `transport`,
/// flushing afterwards. Returns the number of bytes sent.
///
/// `write_all` already loops on partial writes, so a short send is retried
/// rather than truncating the request.
pub fn send_request<W: Write>(
    transport: &mut W,
    target: &ParsedTarget,
    line_ending: LineEnding,
) -> Result<usize, FetchError> {
    let request = build_request(target, line_ending);
    transport
        .write_all(request.as_bytes())
        .and_then(|()| transport.flush())
        .map_err(|source| FetchError::SendFailed { source })?;
    tracing::debug!(bytes = request.len(), "request sent");
    Ok(request.len())
}
