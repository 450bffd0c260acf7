//! CSV rows for table mode.

use super::OutputSink;
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes one CSV line per row with every cell double-quoted. Embedded
/// quotes are doubled.
pub struct QuotedOutput<W: Write> {
    out: W,
}

impl<W: Write> QuotedOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for QuotedOutput<W> {
    fn begin_row(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "\"{}\"", escape(label))
    }

    fn emit_value(&mut self, item: &str) -> io::Result<()> {
        write!(self.out, ",\"{}\"", escape(item))
    }

    fn emit_blank(&mut self) -> io::Result<()> {
        self.emit_value("")
    }

    fn end_row(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

fn escape(cell: &str) -> Cow<'_, str> {
    if cell.contains('"') {
        Cow::Owned(cell.replace('"', "\"\""))
    } else {
        Cow::Borrowed(cell)
    }
}
