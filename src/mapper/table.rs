//! Table-mode mapping: one cell per agent, one row per context node.

use super::{Diagnostics, MapError, SourceHandler, map_source};
use crate::agent::XpathAgent;
use crate::agent_set::AgentSet;
use crate::document::Node;
use crate::error::Result;
use crate::output::{OutputSink, RowGuard};
use std::io::Read;

/// Maps each document to rows of `1 + N` cells for a collection of `N`
/// agents: the source label followed by one value or blank per agent.
pub struct TableMapper<'a, S> {
    agents: &'a AgentSet,
    context: Option<XpathAgent>,
    sink: S,
}

impl<'a, S: OutputSink> TableMapper<'a, S> {
    pub fn new(agents: &'a AgentSet, sink: S) -> Self {
        Self {
            agents,
            context: None,
            sink,
        }
    }

    /// Emit one row per node matched by `expression` instead of a single
    /// row for the document root.
    pub fn with_context(mut self, expression: impl Into<String>) -> Self {
        self.context = Some(XpathAgent::new(expression));
        self
    }

    /// Write the header row: the collection's titles, the leading default
    /// title taking the label position.
    pub fn header(&mut self) -> Result<()> {
        if let Some((first, titles)) = self.agents.headers().split_first() {
            let mut row = RowGuard::begin(&mut self.sink, first)?;
            for title in titles {
                row.value(title)?;
            }
            row.finish()?;
        }
        Ok(())
    }
}

impl<S: OutputSink> SourceHandler for TableMapper<'_, S> {
    fn process(
        &mut self,
        input: &mut dyn Read,
        label: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<bool> {
        let agents = self.agents;
        let context = self.context.as_ref();
        let sink = &mut self.sink;
        map_source(input, label, diagnostics, |document| {
            map_rows(agents, context, sink, document.root(), label)
        })
    }
}

/// Emit the rows for one document. Returns the number of rows.
///
/// Every cell of the document is evaluated before the first row is written,
/// so a failing agent leaves no partial output for the document.
fn map_rows<S: OutputSink + ?Sized>(
    agents: &AgentSet,
    context: Option<&XpathAgent>,
    sink: &mut S,
    root: Node<'_>,
    label: &str,
) -> std::result::Result<usize, MapError> {
    let rows = match context {
        Some(context) => {
            let mut rows = Vec::new();
            context.for_each_match_raw(root, |node| {
                rows.push(evaluate_row(agents, node)?);
                Ok::<(), MapError>(())
            })?;
            rows
        }
        None => vec![evaluate_row(agents, root)?],
    };

    for cells in &rows {
        write_row(&mut *sink, label, cells)?;
    }
    Ok(rows.len())
}

/// One cell per agent: the first match's value, or `None` for a blank.
fn evaluate_row(agents: &AgentSet, node: Node<'_>) -> std::result::Result<Vec<Option<String>>, MapError> {
    let mut cells = Vec::with_capacity(agents.len());
    agents.for_each_agent(|entry| {
        cells.push(entry.agent().try_single_value(node)?);
        Ok::<(), MapError>(())
    })?;
    Ok(cells)
}

fn write_row<S: OutputSink + ?Sized>(
    sink: &mut S,
    label: &str,
    cells: &[Option<String>],
) -> std::result::Result<(), MapError> {
    let mut row = RowGuard::begin(sink, label)?;
    for cell in cells {
        match cell {
            Some(value) => row.value(value)?,
            None => row.blank()?,
        }
    }
    row.finish()?;
    Ok(())
}
