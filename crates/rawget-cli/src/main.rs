use rawget_core::logging;

mod cli;

use crate::cli::Cli;
use clap::Parser;
use rawget_core::error::FetchError;

/// Exit codes: 1 usage or malformed target, 2 connect failure, 3 transport
/// failure.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FetchError>() {
        Some(FetchError::Malformed(_)) => 1,
        Some(FetchError::ConnectFailed { .. }) => 2,
        Some(
            FetchError::SendFailed { .. }
            | FetchError::RecvFailed { .. }
            | FetchError::SinkFailed { .. },
        ) => 3,
        None => 1,
    }
}

fn main() {
    // Initialize logging as early as possible. Falls back to stderr on its
    // own if the state dir is unusable.
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Wrong arguments exit 1 with a usage message; --help and
            // --version are not errors and exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = cli.run() {
        let code = exit_code(&err);
        eprintln!("rawget error: {:#}", err);
        std::process::exit(code);
    }
}
