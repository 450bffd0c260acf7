//! Command implementation for xpmatch.
//!
//! [`execute`] resolves the configuration, picks grep or table mode from the
//! parsed arguments and runs it over the selected sources. Standard streams
//! are passed in so a whole run can be driven from memory.

mod grep;
mod sources;
mod table;


use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, XpMatchError};
use crate::mapper::Diagnostics;
use std::io::{BufRead, Write};

/// Run xpmatch for the parsed arguments.
///
/// `stdin` supplies source names, or document content with `--readxml`.
/// Data rows go to `stdout`; per-source problems go to `diagnostics`.
pub fn execute(
    cli: &Cli,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    diagnostics: &mut dyn Diagnostics,
) -> Result<()> {
    let config = resolve_config(cli)?;

    if cli.is_table_mode() {
        table::cmd_table(cli, &config, stdin, stdout, diagnostics)
    } else if let Some(xpath) = cli.xpath.as_deref() {
        grep::cmd_grep(cli, &config, xpath, stdin, stdout, diagnostics)
    } else {
        Err(XpMatchError::UserError(
            "Nothing to do, exiting. Try --help for options.".to_string(),
        ))
    }
}

/// Load the configuration file, if any, and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(directory) = &cli.directory {
        config.directory = Some(directory.clone());
    }
    if let Some(suffix) = &cli.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(separator) = &cli.separator {
        config.delimiter = separator.clone();
    }

    config.validate()?;
    Ok(config)
}
