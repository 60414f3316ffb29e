//! The three emitters run by [`compile`](crate::compile).
//!
//! Each emitter reads the snapshot and the shared [`TokenIndex`] and writes
//! only its own output, so they can run concurrently without synchronization.

pub(crate) mod constraints;
pub(crate) mod objective;
pub(crate) mod variables;

use std::collections::BTreeMap;

use crate::{CompileError, SymbolicCell, TokenIndex};

/// Adds `scale * coefficient` of every cell into `acc`, keyed by resolved term.
///
/// Terms already present have the contribution added, not replaced.
fn accumulate<C: SymbolicCell>(
    acc: &mut BTreeMap<C::Term, f64>,
    cells: &[C],
    index: &TokenIndex,
    scale: f64,
) -> Result<(), CompileError> {
    for cell in cells {
        let term = cell.resolve(index)?;
        *acc.entry(term).or_insert(0.0) += scale * cell.coefficient();
    }
    Ok(())
}
