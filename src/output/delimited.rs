//! Delimiter-joined rows for table mode.

use super::OutputSink;
use std::io::{self, Write};

/// Cell delimiter when none is configured.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Writes one line per row, cells joined by the delimiter. Cells are written
/// verbatim; a blank is an empty cell.
pub struct DelimitedOutput<W: Write> {
    out: W,
    delimiter: String,
}

impl<W: Write> DelimitedOutput<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for DelimitedOutput<W> {
    fn begin_row(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)
    }

    fn emit_value(&mut self, item: &str) -> io::Result<()> {
        write!(self.out, "{}{}", self.delimiter, item)
    }

    fn emit_blank(&mut self) -> io::Result<()> {
        self.emit_value("")
    }

    fn end_row(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}
