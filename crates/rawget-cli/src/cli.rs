//! CLI for rawget.

use anyhow::Result;
use clap::Parser;
use rawget_core::config;
use rawget_core::error::FetchError;
use rawget_core::fetch::{fetch, FetchOptions};
use rawget_core::request::LineEnding;
use rawget_core::target::ParsedTarget;
use std::io::Write;

/// Single-shot HTTP/1.1 GET: connect, send, and stream the raw response
/// bytes to stdout until the server closes the connection.
#[derive(Debug, Parser)]
#[command(name = "rawget")]
#[command(
    about = "Fetch HOSTNAME:PORT/PATH over HTTP/1.1 and stream the raw response to stdout",
    long_about = None
)]
pub struct Cli {
    /// Target in HOSTNAME:PORT/PATH form, e.g. example.com:80/index.html.
    /// The path may be omitted to fetch the root.
    pub target: String,

    /// Terminate request lines with strict \r\n instead of the default bare
    /// \n (needed for some strict HTTP/1.1 servers).
    #[arg(long)]
    pub crlf: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let target = ParsedTarget::parse(&self.target).map_err(FetchError::from)?;
        let opts = FetchOptions {
            line_ending: if self.crlf || cfg.crlf {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            },
        };

        // Raw response bytes go to stdout and nowhere else; diagnostics stay
        // on stderr / the log file.
        let stdout = std::io::stdout();
        let mut sink = stdout.lock();
        fetch(&target, &opts, &mut sink)?;
        sink.flush()
            .map_err(|source| FetchError::SinkFailed { source })?;
        Ok(())
    }
}
