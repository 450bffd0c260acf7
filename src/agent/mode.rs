//! Extraction mode detection.

/// Which part of a matched node an agent extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The value of a matched attribute.
    Attribute,
    /// The character data of a matched element.
    Text,
}

impl Mode {
    /// Guess the mode from the expression.
    ///
    /// An expression whose last `@` is not followed by any of `[`, `]`, `/`
    /// or `=` selects an attribute. This is a heuristic: an `@` inside a
    /// string literal can fool it. Use [`XpathAgent::with_mode`] to set the
    /// mode explicitly.
    ///
    /// [`XpathAgent::with_mode`]: super::XpathAgent::with_mode
    pub fn detect(expression: &str) -> Self {
        match expression.rfind('@') {
            Some(pos) if !expression[pos..].contains(['[', ']', '/', '=']) => Mode::Attribute,
            _ => Mode::Text,
        }
    }
}
