//! Default values for configuration keys.

use crate::agent_set::{DEFAULT_SEPARATORS, DEFAULT_TITLE};
use crate::output::{DEFAULT_DELIMITER, DEFAULT_LABEL_SEPARATOR};

/// Label for document content read from standard input.
pub const DEFAULT_STDIN_LABEL: &str = "STDIN";

pub fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub fn default_field_separators() -> String {
    DEFAULT_SEPARATORS.to_string()
}

pub fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

pub fn default_stdin_label() -> String {
    DEFAULT_STDIN_LABEL.to_string()
}

pub fn default_label_separator() -> String {
    DEFAULT_LABEL_SEPARATOR.to_string()
}
