use crate::Context;

/// Trait for error types that can be reported to a user.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context. Every error produced by the
/// unit and quantity algebra implements it so that front ends can render
/// them consistently.
pub trait AsUnitvalError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of which invariant was violated.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Context might include:
    /// - Notes naming the operands involved
    /// - Help text suggesting how to avoid the error
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
