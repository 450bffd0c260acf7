//! Output sinks.
//!
//! Mappers write rows through the [`OutputSink`] contract and never touch a
//! stream directly:
//! - `begin_row(label)` once per row
//! - `emit_value(item)` for each extracted cell
//! - `emit_blank()` in place of a value when a column has nothing, keeping
//!   columns aligned
//! - `end_row()` exactly once, finalizing and flushing the row
//!
//! Rows are opened through [`RowGuard`], which guarantees the `end_row` call
//! on every exit path.
//!
//! # Renderers
//!
//! - [`PrefixedOutput`]: one line per value, optionally `label:`-prefixed
//! - [`DelimitedOutput`]: one line per row, cells joined by a delimiter
//! - [`QuotedOutput`]: one line per row, CSV with every cell quoted

mod delimited;
mod guard;
mod prefixed;
mod quoted;

#[cfg(test)]
mod tests;

pub use delimited::{DEFAULT_DELIMITER, DelimitedOutput};
pub use guard::RowGuard;
pub use prefixed::{DEFAULT_LABEL_SEPARATOR, PrefixedOutput};
pub use quoted::QuotedOutput;

use std::io;

/// Destination for extracted rows.
pub trait OutputSink {
    /// Start a row labelled with the source it belongs to.
    fn begin_row(&mut self, label: &str) -> io::Result<()>;

    /// Write one extracted cell.
    fn emit_value(&mut self, item: &str) -> io::Result<()>;

    /// Write the placeholder for a cell with no value.
    fn emit_blank(&mut self) -> io::Result<()>;

    /// Finish the current row.
    fn end_row(&mut self) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn begin_row(&mut self, label: &str) -> io::Result<()> {
        (**self).begin_row(label)
    }

    fn emit_value(&mut self, item: &str) -> io::Result<()> {
        (**self).emit_value(item)
    }

    fn emit_blank(&mut self) -> io::Result<()> {
        (**self).emit_blank()
    }

    fn end_row(&mut self) -> io::Result<()> {
        (**self).end_row()
    }
}
