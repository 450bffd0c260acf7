//! Mapping of logical source names to file paths.

/// Prefix used when no directory is configured.
pub const DEFAULT_PREFIX: &str = "./";

/// Directory separator placed between the prefix and a name.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Builds a path as `prefix + name + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMaker {
    prefix: String,
    separator: String,
    suffix: String,
}

impl Default for NameMaker {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            suffix: String::new(),
        }
    }
}

impl NameMaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A name maker rooted at `directory`.
    ///
    /// An empty directory gives an empty prefix, so names are used verbatim
    /// and absolute names keep working.
    pub fn for_directory(directory: &str) -> Self {
        Self::default().normalize_directory(directory)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Set the prefix verbatim. Call [`normalize`](Self::normalize) to make
    /// it end in a separator.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Make the prefix end in the separator. A prefix that already does is
    /// left alone.
    pub fn normalize(mut self) -> Self {
        if !self.separator.is_empty() && !self.prefix.ends_with(&self.separator) {
            self.prefix.push_str(&self.separator);
        }
        self
    }

    /// Use `directory` as the normalized prefix, or no prefix at all when
    /// `directory` is empty.
    pub fn normalize_directory(self, directory: &str) -> Self {
        if directory.is_empty() {
            self.with_prefix("")
        } else {
            self.with_prefix(directory).normalize()
        }
    }

    /// The path for a logical name.
    pub fn resolve(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}
