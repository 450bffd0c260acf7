//! The agent collection.

use super::parser::LineParser;
use crate::agent::XpathAgent;
use std::io::{self, BufRead};

/// One titled column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEntry {
    title: String,
    agent: XpathAgent,
}

impl AgentEntry {
    pub fn new(title: impl Into<String>, agent: XpathAgent) -> Self {
        Self {
            title: title.into(),
            agent,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn agent(&self) -> &XpathAgent {
        &self.agent
    }
}

/// An ordered, titled set of agents.
///
/// Built once and read-only afterwards. `headers().len()` is always
/// `len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSet {
    header: Vec<String>,
    agents: Vec<AgentEntry>,
}

impl AgentSet {
    /// Load a collection from a stream of column-spec lines.
    pub fn from_reader<R: BufRead>(reader: R, parser: &LineParser) -> io::Result<Self> {
        let mut loader = SetLoader::new(parser);
        for line in reader.lines() {
            loader.parse(&line?);
        }
        Ok(loader.finish())
    }

    /// Load a collection from in-memory column-spec lines.
    pub fn from_lines<I, S>(lines: I, parser: &LineParser) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loader = SetLoader::new(parser);
        for line in lines {
            loader.parse(line.as_ref());
        }
        loader.finish()
    }

    /// The default title followed by every agent title.
    pub fn headers(&self) -> &[String] {
        &self.header
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentEntry> {
        self.agents.iter()
    }

    /// Visit every agent in order, stopping at the first error. Returns the
    /// number of agents visited.
    pub fn for_each_agent<E, F>(&self, mut visit: F) -> Result<usize, E>
    where
        F: FnMut(&AgentEntry) -> Result<(), E>,
    {
        for entry in &self.agents {
            visit(entry)?;
        }
        Ok(self.agents.len())
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<'a> IntoIterator for &'a AgentSet {
    type Item = &'a AgentEntry;
    type IntoIter = std::slice::Iter<'a, AgentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

/// Feeds lines through the parser and tracks the non-skipped line count.
struct SetLoader<'p> {
    parser: &'p LineParser,
    index: usize,
    set: AgentSet,
}

impl<'p> SetLoader<'p> {
    fn new(parser: &'p LineParser) -> Self {
        Self {
            parser,
            index: 1,
            set: AgentSet {
                header: vec![parser.title().to_string()],
                agents: Vec::new(),
            },
        }
    }

    fn parse(&mut self, line: &str) {
        if let Some((title, expression)) = self.parser.parse_line(line, self.index) {
            self.set.header.push(title.clone());
            self.set.agents.push(AgentEntry::new(title, XpathAgent::new(expression)));
            self.index += 1;
        }
    }

    fn finish(self) -> AgentSet {
        self.set
    }
}
