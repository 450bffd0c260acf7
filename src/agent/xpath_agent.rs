//! The agent type and its evaluation operations.

use super::mode::Mode;
use crate::document::{DocumentError, Match, Node, select_all, select_first};

/// An XPath expression plus the rule for turning matches into strings.
///
/// Agents are immutable and carry no compiled state; the expression is
/// compiled on every evaluation, so a malformed expression is reported for
/// the document it was evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpathAgent {
    expression: String,
    mode: Mode,
}

impl XpathAgent {
    /// Create an agent, detecting the mode from the expression.
    pub fn new(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let mode = Mode::detect(&expression);
        Self { expression, mode }
    }

    /// Create an agent with an explicit mode.
    pub fn with_mode(expression: impl Into<String>, mode: Mode) -> Self {
        Self {
            expression: expression.into(),
            mode,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the expression matches anything under `node`.
    pub fn is_match(&self, node: Node<'_>) -> Result<bool, DocumentError> {
        Ok(select_first(node, &self.expression)?.is_some())
    }

    /// The string of the first match, or an empty string when nothing
    /// matches.
    pub fn single_value(&self, node: Node<'_>) -> Result<String, DocumentError> {
        Ok(self.try_single_value(node)?.unwrap_or_default())
    }

    /// The string of the first match, or `None` when nothing matches.
    pub fn try_single_value(&self, node: Node<'_>) -> Result<Option<String>, DocumentError> {
        Ok(select_first(node, &self.expression)?.map(|found| self.extract(&found)))
    }

    /// Pass the string of the first match to `handler`.
    ///
    /// The handler runs at most once, however many nodes the expression
    /// could select. Returns whether there was a match.
    pub fn value<E, F>(&self, node: Node<'_>, handler: F) -> Result<bool, E>
    where
        E: From<DocumentError>,
        F: FnOnce(String) -> Result<(), E>,
    {
        match select_first(node, &self.expression)? {
            Some(found) => {
                handler(self.extract(&found))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Push the string of every match, in document order, into `sink`.
    ///
    /// Returns the number of matches. Duplicate strings are kept.
    pub fn list_values<E, F>(&self, node: Node<'_>, mut sink: F) -> Result<usize, E>
    where
        E: From<DocumentError>,
        F: FnMut(String) -> Result<(), E>,
    {
        self.for_each_match(node, |found| sink(self.extract(&found)))
    }

    /// Visit every match in document order. Returns the number of matches.
    pub fn for_each_match<'d, E, F>(&self, node: Node<'d>, mut handler: F) -> Result<usize, E>
    where
        E: From<DocumentError>,
        F: FnMut(Match<'d>) -> Result<(), E>,
    {
        let matches = select_all(node, &self.expression)?;
        for found in &matches {
            handler(*found)?;
        }
        Ok(matches.len())
    }

    /// Visit every matched node in document order, for evaluating further
    /// agents relative to it. Returns the number of matches.
    pub fn for_each_match_raw<'d, E, F>(&self, node: Node<'d>, mut handler: F) -> Result<usize, E>
    where
        E: From<DocumentError>,
        F: FnMut(Node<'d>) -> Result<(), E>,
    {
        self.for_each_match(node, |found| handler(found.node()))
    }

    fn extract(&self, found: &Match<'_>) -> String {
        match self.mode {
            Mode::Attribute => found.attribute_value(),
            Mode::Text => found.child_value(),
        }
    }
}
