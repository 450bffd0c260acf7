//! xpmatch: extract values from XML documents with XPath.
//!
//! This is the main entry point for the `xpmatch` CLI. It parses arguments,
//! runs the selected mode over the selected sources, and handles errors with
//! proper exit codes.

use std::io;
use std::process::ExitCode;
use xpmatch::cli::Cli;
use xpmatch::mapper::StderrDiagnostics;
use xpmatch::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors go to stderr; --help and --version to stdout
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };

    logging::init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = commands::execute(
        &cli,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut StderrDiagnostics,
    );

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
