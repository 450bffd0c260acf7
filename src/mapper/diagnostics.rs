//! The diagnostic channel.
//!
//! Per-source problems are reported here rather than on the data stream so
//! that output stays machine-parseable when some sources fail. Messages are
//! complete lines such as `"doc1.xml: load failure: ..."`.

/// Receives per-source errors and warnings.
pub trait Diagnostics {
    /// A source was opened but could not be processed.
    fn error(&mut self, message: &str);

    /// A source (or a list of sources) could not be opened.
    fn warning(&mut self, message: &str);
}

/// Writes each message as a plain line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn error(&mut self, message: &str) {
        tracing::debug!(%message, "source failed");
        eprintln!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        tracing::debug!(%message, "source skipped");
        eprintln!("{}", message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn error(&mut self, message: &str) {
        (**self).error(message);
    }

    fn warning(&mut self, message: &str) {
        (**self).warning(message);
    }
}
