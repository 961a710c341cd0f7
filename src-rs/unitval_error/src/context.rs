use std::fmt;

/// Extra information attached to an error report.
///
/// # Examples
///
/// ```rust
/// use unitval_error::Context;
///
/// let note = Context::Note("left-hand side is in J".to_string());
/// let help = Context::Help("convert one side with `convert_to` first".to_string());
///
/// assert_eq!(note.to_string(), "note: left-hand side is in J");
/// assert_eq!(help.to_string(), "help: convert one side with `convert_to` first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error, such as the operands involved.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}

impl Context {
    /// Returns the label printed before the context text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Note(_) => "note",
            Self::Help(_) => "help",
        }
    }

    /// Returns the context text without its label.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Note(text) | Self::Help(text) => text,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.text())
    }
}
