//! Logging init: file under the XDG state dir, falling back to stderr.
//!
//! Stdout carries the raw response bytes, so the subscriber must never write
//! there. Diagnostics land in `~/.local/state/rawget/rawget.log` when the
//! state dir is usable, otherwise on stderr.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-event writer handed out by the subscriber: the log file when one was
/// opened (and its handle clones cleanly), stderr otherwise.
enum LogSink {
    File(File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogWriter(Option<File>);

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match &self.0 {
            Some(f) => f.try_clone().map(LogSink::File).unwrap_or(LogSink::Stderr),
            None => LogSink::Stderr,
        }
    }
}

fn open_log_file() -> io::Result<(PathBuf, File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rawget")
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let log_dir = xdg_dirs.get_state_home().join("rawget");
    fs::create_dir_all(&log_dir)?;

    let path = log_dir.join("rawget.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Tries the log file first; if the state dir
/// is unwritable, logs go to stderr instead of failing the run.
pub fn init() {
    let opened = open_log_file();
    let writer = LogWriter(opened.as_ref().ok().and_then(|(_, f)| f.try_clone().ok()));

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rawget_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match opened {
        Ok((path, _)) => tracing::info!("logging to {}", path.display()),
        Err(err) => tracing::warn!("log file unavailable ({err}), logging to stderr"),
    }
}
