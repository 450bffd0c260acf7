//! Source selection shared by both modes.

use crate::cli::Cli;
use crate::config::Config;
use crate::dispatch::{DispatchSummary, NameMaker, SourceDispatcher};
use crate::error::Result;
use crate::mapper::{Diagnostics, SourceHandler};
use std::io::BufRead;

/// Drive `handler` over the sources the arguments select.
///
/// Precedence: document content on stdin (`--readxml`), then a list file,
/// then file arguments, else names read from stdin.
pub(super) fn dispatch_sources<H: SourceHandler + ?Sized>(
    cli: &Cli,
    config: &Config,
    handler: &mut H,
    stdin: &mut dyn BufRead,
    diagnostics: &mut dyn Diagnostics,
) -> Result<DispatchSummary> {
    let names = NameMaker::for_directory(config.directory.as_deref().unwrap_or(""))
        .with_suffix(config.suffix.as_str());
    let mut dispatcher = SourceDispatcher::new(names, handler, diagnostics);

    if cli.readxml {
        let mut content = stdin;
        dispatcher.process_input(&mut content, &config.stdin_label)?;
    } else if let Some(listfile) = &cli.listfile {
        dispatcher.process_list_file(listfile)?;
    } else if !cli.files.is_empty() {
        dispatcher.process_list(&cli.files)?;
    } else {
        dispatcher.process_stream(stdin)?;
    }

    let summary = dispatcher.summary();
    tracing::debug!(
        processed = summary.processed,
        failed = summary.failed,
        skipped = summary.skipped,
        "sources done"
    );
    Ok(summary)
}
