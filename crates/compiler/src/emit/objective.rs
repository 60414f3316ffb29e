use std::collections::BTreeMap;

use triad_core::{Objective, ObjectiveCategory, ObjectiveCell};

use crate::{CompileError, SubObjective, SymbolicCell, TokenIndex};

use super::accumulate;

/// Returns the direction of the folded objective.
///
/// A lone sub-objective keeps its own direction so it is never negated;
/// otherwise the model's declared direction applies.
pub(crate) fn category<C>(
    sub_objectives: &[SubObjective<C>],
    declared: ObjectiveCategory,
) -> ObjectiveCategory {
    match sub_objectives {
        [only] => only.category,
        _ => declared,
    }
}

/// Folds all sub-objectives into one objective row.
///
/// Sub-objectives pointing the other way are negated, so "minimize A,
/// maximize B" under a minimizing model becomes "minimize A - B".
pub(crate) fn emit<C: SymbolicCell>(
    sub_objectives: &[SubObjective<C>],
    declared: ObjectiveCategory,
    index: &TokenIndex,
) -> Result<Objective<C::Term>, CompileError> {
    let category = category(sub_objectives, declared);

    let mut cells = BTreeMap::new();
    for sub_objective in sub_objectives {
        let scale = if sub_objective.category == category {
            1.0
        } else {
            -1.0
        };
        accumulate(&mut cells, &sub_objective.cells, index, scale)?;
    }

    Ok(Objective {
        category,
        cells: cells
            .into_iter()
            .map(|(term, coefficient)| ObjectiveCell::new(term, coefficient))
            .collect(),
    })
}
