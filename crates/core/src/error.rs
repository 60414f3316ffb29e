use thiserror::Error;

/// Structural invariant violations found by [`Model::validate`].
///
/// [`Model::validate`]: crate::Model::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("variable at position {position} has index {index}")]
    VariableIndex { index: usize, position: usize },

    #[error("row arrays disagree: {signs} signs, {rhs} right-hand sides, {names} names")]
    RowArrays {
        signs: usize,
        rhs: usize,
        names: usize,
    },

    #[error("cell references row {row} but the model has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("cell for row {row} follows a cell for row {previous}")]
    RowOrder { row: usize, previous: usize },

    #[error("cell references column {col} but the model has {columns} variables")]
    ColumnOutOfRange { col: usize, columns: usize },
}

/// Errors that can occur when building the dual of a model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DualError {
    /// The model breaks a structural invariant.
    #[error("model is not a valid primal")]
    Invalid(#[from] ModelError),

    /// A variable is fixed at zero, which no normalization can change.
    ///
    /// Its column contributes nothing to the primal and has no sign-constrained
    /// dual row. Remove the variable or widen one of its bounds.
    #[error("variable `{name}` is fixed at zero and has no dual row")]
    FixedAtZero { name: String },

    /// A variable still carries bounds that must first become constraint rows.
    ///
    /// The dual is only defined once every variable is free, non-negative or
    /// non-positive. Calling [`Model::normalize`] first satisfies this.
    ///
    /// [`Model::normalize`]: crate::Model::normalize
    #[error("variable `{name}` has bounds [{lower}, {upper}]; normalize the model before taking its dual")]
    NotNormalized { name: String, lower: f64, upper: f64 },
}
