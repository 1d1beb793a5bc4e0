//! Error taxonomy for a single fetch.
//!
//! Each variant maps to one stage of the invocation so the CLI can pick a
//! distinct exit code: bad argument, failed connect, failed transfer.

use crate::target::MalformedTarget;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The target argument could not be decomposed.
    #[error(transparent)]
    Malformed(#[from] MalformedTarget),

    /// Address resolution or TCP connect failed.
    #[error("could not connect to {host}:{port}: {source}")]
    ConnectFailed {
        host: String,
        port: String,
        #[source]
        source: io::Error,
    },

    /// Writing the request to the peer failed.
    #[error("sending request failed: {source}")]
    SendFailed {
        #[source]
        source: io::Error,
    },

    /// Reading the response from the peer failed.
    #[error("receiving response failed: {source}")]
    RecvFailed {
        #[source]
        source: io::Error,
    },

    /// Writing response bytes to the output sink failed.
    #[error("writing output failed: {source}")]
    SinkFailed {
        #[source]
        source: io::Error,
    },
}
