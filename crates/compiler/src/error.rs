use thiserror::Error;

/// Errors that can occur while compiling a symbolic model.
///
/// All of these indicate an inconsistent snapshot handed over by the symbolic
/// layer rather than a recoverable modeling condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A cell references a token that is not registered in the model.
    #[error("cell references token {solver_index}, which is not registered in the model")]
    UnresolvedToken { solver_index: usize },

    /// Two registered tokens share a solver index.
    #[error("token {solver_index} is registered more than once")]
    DuplicateToken { solver_index: usize },

    /// A token's bounds are NaN or inverted.
    #[error("token `{name}` has invalid bounds [{lower}, {upper}]")]
    InvalidBounds { name: String, lower: f64, upper: f64 },
}
