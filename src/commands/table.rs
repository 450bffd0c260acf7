//! Table mode: one column per expression.

use super::sources::dispatch_sources;
use crate::agent_set::{AgentSet, LineParser};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, XpMatchError};
use crate::mapper::{Diagnostics, TableMapper};
use crate::output::{DelimitedOutput, OutputSink, QuotedOutput};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

pub(super) fn cmd_table(
    cli: &Cli,
    config: &Config,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    diagnostics: &mut dyn Diagnostics,
) -> Result<()> {
    let agents = load_agents(cli, config)?;
    tracing::debug!(agents = agents.len(), "loaded column specs");

    let mut output: Box<dyn OutputSink + '_> = if cli.quoted {
        Box::new(QuotedOutput::new(stdout))
    } else {
        Box::new(DelimitedOutput::new(stdout).with_delimiter(config.delimiter.as_str()))
    };

    let mut mapper = TableMapper::new(&agents, output.as_mut());
    if let Some(initial) = cli.initial.as_deref().filter(|xpath| !xpath.is_empty()) {
        mapper = mapper.with_context(initial);
    }
    if !cli.noheader {
        mapper.header()?;
    }

    dispatch_sources(cli, config, &mut mapper, stdin, diagnostics)?;
    Ok(())
}

/// Build the agent collection from `--table` or the `--column` values.
fn load_agents(cli: &Cli, config: &Config) -> Result<AgentSet> {
    let parser = LineParser::new()
        .with_title(config.default_title.as_str())
        .with_separators(&config.field_separators);

    let Some(path) = &cli.table else {
        return Ok(AgentSet::from_lines(&cli.column, &parser));
    };

    let spec_error = |e: std::io::Error| {
        XpMatchError::SpecError(format!("[{}]: {}", path.display(), e))
    };
    let file = File::open(path).map_err(spec_error)?;
    AgentSet::from_reader(BufReader::new(file), &parser).map_err(spec_error)
}
