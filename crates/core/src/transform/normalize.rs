use crate::{Model, Sign, Term};

impl<T: Term> Model<T> {
    /// Rewrites variable bounds as explicit constraint rows.
    ///
    /// For each variable in index order, a lower bound other than `0` or
    /// `-inf` becomes the row `x >= lower` named `<name>_lb` and the bound is
    /// reset to `-inf`. An upper bound other than `0` or `+inf` becomes
    /// `x <= upper` named `<name>_ub` and is reset to `+inf`.
    ///
    /// Calling this again is a no-op.
    pub fn normalize(&mut self) {
        let before = self.constraints.len();

        for variable in &mut self.variables {
            let col = T::linear(variable.index);

            if !(variable.lower_bound == f64::NEG_INFINITY || variable.lower_bound == 0.0) {
                self.constraints.push_row(
                    [(col, 1.0)],
                    Sign::GreaterEqual,
                    variable.lower_bound,
                    format!("{}_lb", variable.name),
                );
                variable.lower_bound = f64::NEG_INFINITY;
            }

            if !(variable.upper_bound == f64::INFINITY || variable.upper_bound == 0.0) {
                self.constraints.push_row(
                    [(col, 1.0)],
                    Sign::LessEqual,
                    variable.upper_bound,
                    format!("{}_ub", variable.name),
                );
                variable.upper_bound = f64::INFINITY;
            }
        }

        tracing::debug!(
            model = %self.name,
            rows_added = self.constraints.len() - before,
            "normalized variable bounds"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Cell, Constraint, Model, Objective, ObjectiveCategory, QuadraticTerm, Sign, TetradModel,
        TriadModel, Variable, VariableType,
    };

    fn model() -> TriadModel {
        let mut constraints = Constraint::<usize>::default();
        constraints.push_row([(0, 1.0), (1, 1.0)], Sign::LessEqual, 10.0, "sum");

        Model {
            name: "bounds".into(),
            variables: vec![
                Variable::new(0, 2.0, 5.0, VariableType::Continuous, "x"),
                Variable::new(1, 0.0, f64::INFINITY, VariableType::Continuous, "y"),
                Variable::new(2, f64::NEG_INFINITY, -1.0, VariableType::SignedInteger, "z"),
            ],
            constraints,
            objective: Objective::empty(ObjectiveCategory::Minimum),
        }
    }

    #[test]
    fn moves_finite_bounds_into_rows() {
        let mut model = model();
        model.normalize();

        let c = &model.constraints;
        assert_eq!(c.names, vec!["sum", "x_lb", "x_ub", "z_ub"]);
        assert_eq!(
            c.signs,
            vec![Sign::LessEqual, Sign::GreaterEqual, Sign::LessEqual, Sign::LessEqual]
        );
        assert_eq!(c.rhs, vec![10.0, 2.0, 5.0, -1.0]);
        assert_eq!(
            &c.lhs[2..],
            &[Cell::new(1, 0, 1.0), Cell::new(2, 0, 1.0), Cell::new(3, 2, 1.0)]
        );

        assert!(model.variables.iter().all(|v| v.is_free() || v.lower_bound == 0.0));
        assert!(model.is_normalized());
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn second_call_is_a_no_op() {
        let mut model = model();
        model.normalize();
        let once = model.clone();
        model.normalize();

        assert_eq!(model, once);
    }

    #[test]
    fn zero_bounds_are_kept() {
        let mut model = model();
        model.variables[0].lower_bound = 0.0;
        model.variables[0].upper_bound = 0.0;
        model.normalize();

        assert_eq!(model.variables[0].lower_bound, 0.0);
        assert_eq!(model.variables[0].upper_bound, 0.0);
        assert_eq!(model.constraints.names, vec!["sum", "z_ub"]);
    }

    #[test]
    fn quadratic_models_get_linear_bound_rows() {
        let mut model: TetradModel = Model {
            name: "q".into(),
            variables: vec![Variable::new(0, 1.0, f64::INFINITY, VariableType::Continuous, "x")],
            constraints: Constraint::default(),
            objective: Objective::empty(ObjectiveCategory::Minimum),
        };
        model.normalize();

        assert_eq!(
            model.constraints.lhs,
            vec![Cell::new(0, QuadraticTerm::Linear { col: 0 }, 1.0)]
        );
        assert_eq!(model.constraints.names, vec!["x_lb"]);
    }
}
