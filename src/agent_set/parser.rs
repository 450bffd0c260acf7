//! Column-spec line tokenizer.

/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '#';

/// Leading header label when none is configured.
pub const DEFAULT_TITLE: &str = "Source";

/// Field separators when none are configured.
pub const DEFAULT_SEPARATORS: &str = " \t";

/// Splits column-spec lines into `(title, expression)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineParser {
    title: String,
    separators: Vec<char>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            separators: DEFAULT_SEPARATORS.chars().collect(),
        }
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default title that leads every header row.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the separator set with the characters of `separators`.
    pub fn with_separators(mut self, separators: &str) -> Self {
        self.separators = separators.chars().collect();
        self
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Split one line.
    ///
    /// Returns `None` for lines that are skipped: empty, comment, or made of
    /// separators only. `index` is the 1-based count of non-skipped lines,
    /// including this one, and names single-field lines.
    pub fn parse_line(&self, line: &str, index: usize) -> Option<(String, String)> {
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return None;
        }

        let begin = line.find(|c: char| !self.is_separator(c))?;
        let rest = &line[begin..];

        let Some(end) = rest.find(|c: char| self.is_separator(c)) else {
            return Some((synthetic_title(index), rest.to_string()));
        };
        let first = &rest[..end];

        match rest[end..].find(|c: char| !self.is_separator(c)) {
            Some(start) => Some((first.to_string(), rest[end + start..].to_string())),
            None => Some((synthetic_title(index), first.to_string())),
        }
    }
}

fn synthetic_title(index: usize) -> String {
    format!("[{}]", index)
}
