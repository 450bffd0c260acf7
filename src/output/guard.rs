//! RAII row guard.

use super::OutputSink;
use std::io;

/// An open row on a sink.
///
/// `end_row` runs exactly once: through [`finish`](RowGuard::finish) on the
/// normal path, or on drop when the row is abandoned early (an error
/// propagated out of the row, for instance). A failure to end the row on
/// drop is logged but cannot be returned.
pub struct RowGuard<'s, S: OutputSink + ?Sized> {
    sink: &'s mut S,
    open: bool,
}

impl<'s, S: OutputSink + ?Sized> RowGuard<'s, S> {
    /// Begin a row. If `begin_row` itself fails no row is open and nothing
    /// will be ended.
    pub fn begin(sink: &'s mut S, label: &str) -> io::Result<Self> {
        sink.begin_row(label)?;
        Ok(Self { sink, open: true })
    }

    pub fn value(&mut self, item: &str) -> io::Result<()> {
        self.sink.emit_value(item)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.sink.emit_blank()
    }

    /// End the row and report the result.
    pub fn finish(mut self) -> io::Result<()> {
        self.open = false;
        self.sink.end_row()
    }
}

impl<S: OutputSink + ?Sized> Drop for RowGuard<'_, S> {
    fn drop(&mut self) {
        if self.open
            && let Err(e) = self.sink.end_row()
        {
            tracing::warn!(error = %e, "failed to end output row");
        }
    }
}
