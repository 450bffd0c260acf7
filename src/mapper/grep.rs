//! Grep-mode mapping: every match of one agent, one value per match.

use super::{Diagnostics, MapError, SourceHandler, map_source};
use crate::agent::XpathAgent;
use crate::document::Node;
use crate::error::Result;
use crate::output::{OutputSink, RowGuard};
use std::io::Read;

/// Maps each document to one row holding every value the agent extracts.
///
/// A document with no match still produces its row, with a single blank in
/// place of the values.
pub struct AgentMapper<'a, S> {
    agent: &'a XpathAgent,
    sink: S,
}

impl<'a, S: OutputSink> AgentMapper<'a, S> {
    pub fn new(agent: &'a XpathAgent, sink: S) -> Self {
        Self { agent, sink }
    }
}

impl<S: OutputSink> SourceHandler for AgentMapper<'_, S> {
    fn process(
        &mut self,
        input: &mut dyn Read,
        label: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<bool> {
        let agent = self.agent;
        let sink = &mut self.sink;
        map_source(input, label, diagnostics, |document| {
            map_values(agent, sink, document.root(), label)?;
            Ok(1)
        })
    }
}

/// Emit one row for `node`. Returns the number of matches.
///
/// Values are collected before the row opens, so a failing expression
/// writes nothing.
fn map_values<S: OutputSink + ?Sized>(
    agent: &XpathAgent,
    sink: &mut S,
    node: Node<'_>,
    label: &str,
) -> std::result::Result<usize, MapError> {
    let mut values = Vec::new();
    agent.list_values(node, |value| {
        values.push(value);
        Ok::<(), MapError>(())
    })?;

    let mut row = RowGuard::begin(sink, label)?;
    for value in &values {
        row.value(value)?;
    }
    if values.is_empty() {
        row.blank()?;
    }
    row.finish()?;
    Ok(values.len())
}
