//! Mappers bind agents, a document and an output sink.
//!
//! Two variants exist:
//! - [`AgentMapper`] (grep mode): one agent, every match becomes a value
//! - [`TableMapper`] (table mode): a collection of agents, one cell per
//!   agent per row, one row per context node
//!
//! Both implement [`SourceHandler`], so source dispatch can drive either one.
//! Failures belonging to a single source (unreadable stream, malformed
//! document, bad expression) are caught at the document-load boundary and
//! reported through [`Diagnostics`] as `"{label}: {message}"`; the source is
//! skipped and the batch continues. Output failures are fatal.

mod diagnostics;
mod grep;
mod table;


pub use diagnostics::{Diagnostics, StderrDiagnostics};
pub use grep::AgentMapper;
pub use table::TableMapper;

use crate::document::{DocumentError, XmlDocument};
use crate::error::{Result, XpMatchError};
use std::io::{self, Read};

/// Something that consumes one source at a time.
pub trait SourceHandler {
    /// Map the document read from `input`, labelling its rows with `label`.
    ///
    /// Returns `Ok(false)` when the source failed and was reported to
    /// `diagnostics`. `Err` is reserved for fatal conditions.
    fn process(
        &mut self,
        input: &mut dyn Read,
        label: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<bool>;
}

/// Failure inside a single mapper pass.
#[derive(Debug)]
pub(crate) enum MapError {
    Document(DocumentError),
    Output(io::Error),
}

impl From<DocumentError> for MapError {
    fn from(err: DocumentError) -> Self {
        MapError::Document(err)
    }
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        MapError::Output(err)
    }
}

/// Load a document from `input` and run `pass` over it.
///
/// `pass` returns the number of rows it emitted.
pub(crate) fn map_source<F>(
    input: &mut dyn Read,
    label: &str,
    diagnostics: &mut dyn Diagnostics,
    pass: F,
) -> Result<bool>
where
    F: FnOnce(&XmlDocument) -> std::result::Result<usize, MapError>,
{
    let outcome = XmlDocument::load(input)
        .map_err(MapError::from)
        .and_then(|document| pass(&document));

    match outcome {
        Ok(rows) => {
            tracing::debug!(source = label, rows, "mapped source");
            Ok(true)
        }
        Err(MapError::Document(err)) => {
            diagnostics.error(&format!("{}: {}", label, err));
            Ok(false)
        }
        Err(MapError::Output(err)) => Err(XpMatchError::OutputError(err)),
    }
}
