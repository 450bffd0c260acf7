//! Line-per-value rendering for grep mode.

use super::OutputSink;
use std::io::{self, Write};

/// Separator between the label and the value.
pub const DEFAULT_LABEL_SEPARATOR: &str = ":";

/// Writes each value on its own line as `{label}{separator}{value}`.
///
/// Blank handling:
/// - by default a blank produces nothing
/// - with `blanks`, a blank produces a line with an empty value
/// - with `blanks` and `only`, non-empty values are suppressed so only
///   the sources without a match are listed
pub struct PrefixedOutput<W: Write> {
    out: W,
    source: String,
    separator: String,
    blanks: bool,
    only: bool,
    no_title: bool,
}

impl<W: Write> PrefixedOutput<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            source: String::new(),
            separator: DEFAULT_LABEL_SEPARATOR.to_string(),
            blanks: false,
            only: false,
            no_title: false,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_blanks(mut self, blanks: bool) -> Self {
        self.blanks = blanks;
        self
    }

    pub fn with_only(mut self, only: bool) -> Self {
        self.only = only;
        self
    }

    /// Drop the label prefix from every line.
    pub fn with_no_title(mut self, no_title: bool) -> Self {
        self.no_title = no_title;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for PrefixedOutput<W> {
    fn begin_row(&mut self, label: &str) -> io::Result<()> {
        self.source.clear();
        self.source.push_str(label);
        Ok(())
    }

    fn emit_value(&mut self, item: &str) -> io::Result<()> {
        if self.blanks && self.only && !item.is_empty() {
            return Ok(());
        }
        if !self.no_title && !self.source.is_empty() {
            write!(self.out, "{}{}", self.source, self.separator)?;
        }
        writeln!(self.out, "{}", item)
    }

    fn emit_blank(&mut self) -> io::Result<()> {
        if self.blanks {
            self.emit_value("")
        } else {
            Ok(())
        }
    }

    fn end_row(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
