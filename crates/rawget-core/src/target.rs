//! Target address parsing.
//!
//! The CLI takes a single compact `HOSTNAME:PORT/PATH` argument; this module
//! splits it into its three parts without ever mutating or indexing past the
//! input.

use std::fmt;
use thiserror::Error;

/// Why a target string could not be decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No `:` between hostname and port.
    MissingColon,
    /// Nothing before the `:`.
    EmptyHostname,
    /// Nothing between the `:` and the path.
    EmptyPort,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedReason::MissingColon => "missing ':' between hostname and port",
            MalformedReason::EmptyHostname => "empty hostname",
            MalformedReason::EmptyPort => "empty port",
        };
        f.write_str(msg)
    }
}

/// Target string did not match `HOSTNAME:PORT/PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed target {input:?}: {reason}")]
pub struct MalformedTarget {
    /// The raw argument as given.
    pub input: String,
    pub reason: MalformedReason,
}

/// The three parts of a `HOSTNAME:PORT/PATH` argument.
///
/// All fields are owned copies of the input; the struct is built once per
/// invocation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    pub hostname: String,
    /// Kept as a string: address resolution also accepts service names
    /// (e.g. `http`), so nothing here insists on digits.
    pub port: String,
    /// Path with the leading `/` stripped; empty means the root.
    pub path: String,
}

impl ParsedTarget {
    /// Splits `input` at the first `/` into host:port and path, then at the
    /// first `:` into hostname and port.
    ///
    /// A missing `/` is accepted and means an empty path (`host:port` alone
    /// fetches the root). A missing `:`, an empty hostname, or an empty port
    /// is an error.
    pub fn parse(input: &str) -> Result<Self, MalformedTarget> {
        let (authority, path) = match input.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => (input, ""),
        };

        let (hostname, port) = authority.split_once(':').ok_or_else(|| MalformedTarget {
            input: input.to_string(),
            reason: MalformedReason::MissingColon,
        })?;

        if hostname.is_empty() {
            return Err(MalformedTarget {
                input: input.to_string(),
                reason: MalformedReason::EmptyHostname,
            });
        }
        if port.is_empty() {
            return Err(MalformedTarget {
                input: input.to_string(),
                reason: MalformedReason::EmptyPort,
            });
        }

        Ok(Self {
            hostname: hostname.to_string(),
            port: port.to_string(),
            path: path.to_string(),
        })
    }
}
