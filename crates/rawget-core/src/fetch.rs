//! One complete GET exchange: connect, send, stream.

use crate::error::FetchError;
use crate::request::{send_request, LineEnding};
use crate::stream::stream_response;
use crate::target::ParsedTarget;
use crate::transport;
use std::io::Write;

/// Per-invocation knobs, resolved from config and CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    pub line_ending: LineEnding,
}

/// Runs the whole exchange against `target`, writing the raw response to
/// `sink`. Returns the number of response bytes forwarded.
///
/// The TCP stream lives exactly as long as this call: whichever way we leave
/// (success, send failure, receive failure), Drop closes it.
pub fn fetch<W: Write>(
    target: &ParsedTarget,
    opts: &FetchOptions,
    sink: &mut W,
) -> Result<u64, FetchError> {
    tracing::info!(
        host = %target.hostname,
        port = %target.port,
        path = %target.path,
        "fetching"
    );

    let mut stream = transport::connect(&target.hostname, &target.port)?;
    send_request(&mut stream, target, opts.line_ending)?;
    let total = stream_response(&mut stream, sink)?;

    tracing::info!(bytes = total, "fetch complete");
    Ok(total)
}
