//! The dispatcher driving sources through a handler.

use super::names::NameMaker;
use crate::error::{Result, XpMatchError};
use crate::mapper::{Diagnostics, SourceHandler};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Counts of what happened to the sources seen so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Sources mapped successfully.
    pub processed: usize,
    /// Sources opened but rejected by the handler.
    pub failed: usize,
    /// Names that could not be opened.
    pub skipped: usize,
}

/// Feeds sources to a handler one at a time, in order.
pub struct SourceDispatcher<'h, H: ?Sized, D> {
    names: NameMaker,
    handler: &'h mut H,
    diagnostics: D,
    summary: DispatchSummary,
}

impl<'h, H, D> SourceDispatcher<'h, H, D>
where
    H: SourceHandler + ?Sized,
    D: Diagnostics,
{
    pub fn new(names: NameMaker, handler: &'h mut H, diagnostics: D) -> Self {
        Self {
            names,
            handler,
            diagnostics,
            summary: DispatchSummary::default(),
        }
    }

    pub fn summary(&self) -> DispatchSummary {
        self.summary
    }

    /// Open the file behind `name` and hand it to the handler, labelled with
    /// the name as given.
    pub fn process_name(&mut self, name: &str) -> Result<()> {
        let path = self.names.resolve(name);
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "cannot open source");
                self.diagnostics
                    .warning(&format!("Could not open file [{}]!", path));
                self.summary.skipped += 1;
                return Ok(());
            }
        };
        tracing::debug!(path = %path, "opened source");
        self.process_input(&mut file, name)?;
        Ok(())
    }

    /// Process each name of an in-memory list.
    pub fn process_list<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.process_name(name.as_ref())?;
        }
        Ok(())
    }

    /// Process names read one per line. Blank lines are skipped.
    pub fn process_stream<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let name = line.map_err(|e| XpMatchError::InputError(e.to_string()))?;
            if name.trim().is_empty() {
                continue;
            }
            self.process_name(&name)?;
        }
        Ok(())
    }

    /// Process the names listed in the file at `path`.
    ///
    /// A list file that cannot be opened is reported as a warning and
    /// processes nothing.
    pub fn process_list_file(&mut self, path: &Path) -> Result<()> {
        match File::open(path) {
            Ok(file) => self.process_stream(BufReader::new(file)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot open list file");
                self.diagnostics.warning(&format!(
                    "Problem opening list file [{}]!",
                    path.display()
                ));
                Ok(())
            }
        }
    }

    /// Hand a stream of document content straight to the handler.
    ///
    /// Returns whether the handler accepted the source.
    pub fn process_input(&mut self, input: &mut dyn Read, label: &str) -> Result<bool> {
        let processed = self.handler.process(input, label, &mut self.diagnostics)?;
        if processed {
            self.summary.processed += 1;
        } else {
            self.summary.failed += 1;
        }
        Ok(processed)
    }
}
