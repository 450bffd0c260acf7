//! Per-document failures.

use thiserror::Error;

/// A failure scoped to one source document.
///
/// These never abort a batch: the mapper reports them as
/// `"{label}: {error}"` and moves on to the next source.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input stream could not be read (or is not UTF-8).
    #[error("read failure: {0}")]
    Read(#[source] std::io::Error),

    /// The content is not well-formed XML. `offset` is the byte position
    /// the parser stopped at.
    #[error("load failure: {message}")]
    Parse { offset: usize, message: String },

    /// The expression is malformed or does not select nodes.
    #[error("query failure [{expression}]: {message}")]
    Query { expression: String, message: String },
}

impl DocumentError {
    pub(crate) fn query(expression: &str, message: impl Into<String>) -> Self {
        DocumentError::Query {
            expression: expression.to_string(),
            message: message.into(),
        }
    }
}
