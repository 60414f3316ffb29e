use std::collections::BTreeMap;

use triad_core::Constraint;

use crate::{CompileError, SymbolicCell, SymbolicConstraint, TokenIndex};

use super::accumulate;

/// Emits one row per constraint, in declaration order.
///
/// Cells sharing a term within a row are merged by summing their coefficients;
/// the merged cells are stored in term order.
pub(crate) fn emit<C: SymbolicCell>(
    constraints: &[SymbolicConstraint<C>],
    index: &TokenIndex,
) -> Result<Constraint<C::Term>, CompileError> {
    let mut rows = Constraint::default();

    for constraint in constraints {
        let mut cells = BTreeMap::new();
        accumulate(&mut cells, &constraint.cells, index, 1.0)?;
        rows.push_row(cells, constraint.sign, constraint.rhs, constraint.name.clone());
    }

    Ok(rows)
}
