use triad_core::Model;

use crate::{CompileError, Config, SymbolicCell, SymbolicModel, TokenIndex, emit};

/// The model type produced by compiling `M`.
pub type CompiledModel<M> = Model<<<M as SymbolicModel>::Cell as SymbolicCell>::Term>;

/// Compiles a symbolic model snapshot into an intermediate model.
///
/// The token index is built first. Variables, constraint rows and the folded
/// objective are then emitted as three independent tasks, concurrently when
/// [`Config::parallel`] is set, and joined into one model. Every array of the
/// result is index-addressed, so the output does not depend on task timing.
///
/// # Errors
///
/// Returns an error if tokens are duplicated, a token has invalid bounds, or
/// a cell references an unregistered token. When several tasks fail, the
/// error of the first in variable, constraint, objective order is returned.
#[tracing::instrument(skip_all, fields(model = %model.name()))]
pub fn compile<M: SymbolicModel>(
    model: &M,
    config: &Config,
) -> Result<CompiledModel<M>, CompileError> {
    let index = TokenIndex::new(model.tokens())?;

    let emit_variables = || emit::variables::emit(model.tokens());
    let emit_constraints = || emit::constraints::emit(model.constraints(), &index);
    let emit_objective =
        || emit::objective::emit(model.sub_objectives(), model.category(), &index);

    let (variables, (constraints, objective)) = if config.parallel {
        rayon::join(emit_variables, || {
            rayon::join(emit_constraints, emit_objective)
        })
    } else {
        (emit_variables(), (emit_constraints(), emit_objective()))
    };

    let compiled = Model {
        name: model.name().to_owned(),
        variables: variables?,
        constraints: constraints?,
        objective: objective?,
    };

    tracing::debug!(
        variables = compiled.variables.len(),
        rows = compiled.constraints.len(),
        nonzeros = compiled.constraints.lhs.len(),
        objective_cells = compiled.objective.cells.len(),
        category = %compiled.objective.category,
        "compiled model"
    );

    Ok(compiled)
}
