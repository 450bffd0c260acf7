//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for an xpmatch run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Column specifications
    // =========================================================================
    /// Leading header label of every agent collection (default: "Source").
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Characters separating the title from the expression in a column
    /// spec line (default: space and tab).
    #[serde(default = "default_field_separators")]
    pub field_separators: String,

    // =========================================================================
    // Output
    // =========================================================================
    /// Cell delimiter for table output (default: tab).
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Separator between label and value in grep output (default: ":").
    #[serde(default = "default_label_separator")]
    pub label_separator: String,

    // =========================================================================
    // Sources
    // =========================================================================
    /// Directory prepended to every source name. Names are used verbatim
    /// when unset.
    #[serde(default)]
    pub directory: Option<String>,

    /// Suffix appended to every source name.
    #[serde(default)]
    pub suffix: String,

    /// Label for document content read from standard input.
    #[serde(default = "default_stdin_label")]
    pub stdin_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            field_separators: default_field_separators(),
            delimiter: default_delimiter(),
            label_separator: default_label_separator(),
            directory: None,
            suffix: String::new(),
            stdin_label: default_stdin_label(),
        }
    }
}
