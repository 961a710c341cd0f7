//! Error reporting shared by the unitval crates

mod context;
mod traits;

pub use context::Context;
pub use traits::AsUnitvalError;

/// Unified error representation for unitval
///
/// A report is what a front end prints: a message followed by any number of
/// notes and help lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitvalError {
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl UnitvalError {
    /// Creates a new `UnitvalError` from an error that implements `AsUnitvalError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unitval_error::{AsUnitvalError, Context, UnitvalError};
    ///
    /// struct SimpleError;
    ///
    /// impl AsUnitvalError for SimpleError {
    ///     fn message(&self) -> String {
    ///         "something went wrong".to_string()
    ///     }
    ///
    ///     fn context(&self) -> Vec<Context> {
    ///         vec![Context::Help("try again".to_string())]
    ///     }
    /// }
    ///
    /// let error = UnitvalError::from_error(&SimpleError);
    /// assert_eq!(error.message(), "something went wrong");
    /// assert_eq!(error.context().len(), 1);
    /// ```
    pub fn from_error(error: &impl AsUnitvalError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context without source locations
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
