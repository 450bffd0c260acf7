//! Error types for the xpmatch CLI.
//!
//! Only fatal conditions live here. Failures scoped to a single source
//! (unreadable stream, malformed document, bad expression) are
//! [`DocumentError`](crate::document::DocumentError)s and are turned into
//! diagnostics at the mapper boundary instead of aborting the run.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for xpmatch operations.
#[derive(Error, Debug)]
pub enum XpMatchError {
    /// User provided invalid arguments or nothing to do.
    #[error("{0}")]
    UserError(String),

    /// The column specification could not be loaded.
    #[error("Problem with column specification: {0}")]
    SpecError(String),

    /// The YAML configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A stream of source names failed while being read.
    #[error("Failed to read input: {0}")]
    InputError(String),

    /// Writing to the data output failed.
    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

impl XpMatchError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            XpMatchError::UserError(_)
            | XpMatchError::SpecError(_)
            | XpMatchError::ConfigError(_)
            | XpMatchError::InputError(_)
            | XpMatchError::OutputError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for xpmatch operations.
pub type Result<T> = std::result::Result<T, XpMatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn every_fatal_error_exits_with_failure() {
        let errors = [
            XpMatchError::UserError("bad argument".to_string()),
            XpMatchError::SpecError("specs.txt: not found".to_string()),
            XpMatchError::ConfigError("bad yaml".to_string()),
            XpMatchError::InputError("broken pipe".to_string()),
            XpMatchError::OutputError(io::Error::other("closed")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE, "{err}");
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = XpMatchError::SpecError("[cols.txt]: No such file".to_string());
        assert_eq!(
            err.to_string(),
            "Problem with column specification: [cols.txt]: No such file"
        );

        let err = XpMatchError::UserError("nothing to do".to_string());
        assert_eq!(err.to_string(), "nothing to do");
    }

    #[test]
    fn io_errors_convert_to_output_errors() {
        let err: XpMatchError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, XpMatchError::OutputError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
