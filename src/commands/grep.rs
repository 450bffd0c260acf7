//! Grep mode: every value of one expression, one line each.

use super::sources::dispatch_sources;
use crate::agent::XpathAgent;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::mapper::{AgentMapper, Diagnostics};
use crate::output::PrefixedOutput;
use std::io::{BufRead, Write};

pub(super) fn cmd_grep(
    cli: &Cli,
    config: &Config,
    xpath: &str,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    diagnostics: &mut dyn Diagnostics,
) -> Result<()> {
    let agent = XpathAgent::new(xpath);
    tracing::debug!(expression = xpath, mode = ?agent.mode(), "grep mode");

    let output = PrefixedOutput::new(stdout)
        .with_separator(config.label_separator.as_str())
        .with_blanks(cli.blanks)
        .with_only(cli.only)
        .with_no_title(cli.noheader);
    let mut mapper = AgentMapper::new(&agent, output);

    dispatch_sources(cli, config, &mut mapper, stdin, diagnostics)?;
    Ok(())
}
