use std::collections::HashMap;

use crate::{CompileError, Token};

/// Maps each registered token's solver index to its dense column index.
///
/// Columns follow registration order: the `i`-th registered token is column
/// `i`, however sparse the solver indices are. The map is built once per
/// compilation and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    columns: HashMap<usize, usize>,
}

impl TokenIndex {
    /// Builds the map for `tokens` in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DuplicateToken`] if two tokens share a solver index.
    pub fn new(tokens: &[Token]) -> Result<Self, CompileError> {
        let mut columns = HashMap::with_capacity(tokens.len());
        for (col, token) in tokens.iter().enumerate() {
            if columns.insert(token.solver_index, col).is_some() {
                return Err(CompileError::DuplicateToken {
                    solver_index: token.solver_index,
                });
            }
        }

        Ok(Self { columns })
    }

    /// Returns the dense column of the token with `solver_index`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnresolvedToken`] if no such token is registered.
    pub fn resolve(&self, solver_index: usize) -> Result<usize, CompileError> {
        self.columns
            .get(&solver_index)
            .copied()
            .ok_or(CompileError::UnresolvedToken { solver_index })
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
