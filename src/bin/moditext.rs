//! Command-line interface for moditext
//!
//! Usage:
//!   moditext [ -k substring | -p ch num | -t num | -g | -f style substring | -r ] FILE
//!
//! Exit codes: 0 on success, 1 for a usage error (the usage line is printed
//! on standard error), 2 for configuration or internal pipeline failures.

use moditext::config::load_from_env;
use moditext::invocation::{collect_args, run};
use moditext::{logging, ModitextError, USAGE};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => return report(ModitextError::from(e)),
    };
    logging::init(&config.logging);

    let separator = config.line_separator();
    let result = collect_args(std::env::args_os().skip(1))
        .map_err(ModitextError::from)
        .and_then(|args| run(&args, separator));

    match result {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .is_err()
            {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn report(error: ModitextError) -> ExitCode {
    tracing::debug!(%error, "invocation failed");
    if error.is_usage() {
        eprint!("{}{}", USAGE, moditext::LineSeparator::platform().as_str());
        ExitCode::from(1)
    } else {
        eprintln!("moditext: {}", error);
        ExitCode::from(2)
    }
}
