use crate::{Model, Term};

impl<T: Term> Model<T> {
    /// Replaces every variable's type with its continuous relaxation.
    ///
    /// See [`VariableType::relaxed`] for the table. Bounds are left as they are.
    ///
    /// [`VariableType::relaxed`]: crate::VariableType::relaxed
    pub fn linear_relax(&mut self) {
        let mut relaxed = 0;
        for variable in &mut self.variables {
            let kind = variable.kind.relaxed();
            if kind != variable.kind {
                variable.kind = kind;
                relaxed += 1;
            }
        }

        tracing::debug!(model = %self.name, relaxed, "relaxed variable types");
    }
}
