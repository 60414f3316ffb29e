use crate::{
    BoundShape, Constraint, DualError, Model, Objective, ObjectiveCategory, ObjectiveCell, Sign,
    TriadModel, Variable, VariableType,
};

impl TriadModel {
    /// Builds the LP dual of this model.
    ///
    /// Every primal row becomes a dual variable named `<row>_dual`, and every
    /// primal column becomes a dual row named `<variable>_dual` whose cells are
    /// the column's coefficients and whose right-hand side is the column's
    /// objective coefficient. The dual objective weights each dual variable by
    /// its row's right-hand side, in the reversed direction.
    ///
    /// For a minimization primal:
    ///
    /// | Primal row | Dual variable | | Primal variable | Dual row |
    /// |---|---|---|---|---|
    /// | `<=` | `y <= 0` | | `x >= 0` | `<=` |
    /// | `>=` | `y >= 0` | | `x <= 0` | `>=` |
    /// | `=` | free | | free | `=` |
    ///
    /// A maximization primal mirrors both inequality columns.
    ///
    /// Integral variables are treated as continuous.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::Invalid`] if the model fails [`Model::validate`],
    /// [`DualError::FixedAtZero`] if a variable is fixed at zero, and
    /// [`DualError::NotNormalized`] if any other variable is not free,
    /// non-negative or non-positive. Call [`Model::normalize`] first.
    pub fn dual(&self) -> Result<Self, DualError> {
        self.validate()?;

        let minimize = self.objective.category == ObjectiveCategory::Minimum;

        let row_signs = self
            .variables
            .iter()
            .map(|variable| dual_row_sign(variable, minimize))
            .collect::<Result<Vec<_>, _>>()?;

        if self.contains_integral() {
            tracing::warn!(
                model = %self.name,
                "taking the dual of a model with integral variables; integrality is ignored"
            );
        }

        let variables = self
            .constraints
            .signs
            .iter()
            .zip(&self.constraints.names)
            .enumerate()
            .map(|(row, (&sign, name))| {
                let (lower, upper) = dual_variable_bounds(sign, minimize);
                Variable::new(
                    row,
                    lower,
                    upper,
                    VariableType::Continuous,
                    format!("{name}_dual"),
                )
            })
            .collect();

        let mut columns = vec![Vec::new(); self.variables.len()];
        for cell in &self.constraints.lhs {
            columns[cell.term].push((cell.row, cell.coefficient));
        }

        let mut costs = vec![0.0; self.variables.len()];
        for cell in &self.objective.cells {
            costs[cell.term] += cell.coefficient;
        }

        let mut constraints = Constraint::default();
        for (((variable, column), sign), cost) in
            self.variables.iter().zip(columns).zip(row_signs).zip(costs)
        {
            constraints.push_row(column, sign, cost, format!("{}_dual", variable.name));
        }

        let objective = Objective {
            category: self.objective.category.reverse(),
            cells: self
                .constraints
                .rhs
                .iter()
                .enumerate()
                .map(|(row, &rhs)| ObjectiveCell::new(row, rhs))
                .collect(),
        };

        tracing::debug!(
            model = %self.name,
            variables = self.constraints.len(),
            rows = constraints.len(),
            "built dual model"
        );

        Ok(Model {
            name: format!("{}-dual", self.name),
            variables,
            constraints,
            objective,
        })
    }
}

/// Returns the sign of the dual row generated by a primal variable.
fn dual_row_sign(variable: &Variable, minimize: bool) -> Result<Sign, DualError> {
    match (variable.bound_shape(), minimize) {
        (BoundShape::Free, _) => Ok(Sign::Equal),
        (BoundShape::NonNegative, true) | (BoundShape::NonPositive, false) => Ok(Sign::LessEqual),
        (BoundShape::NonPositive, true) | (BoundShape::NonNegative, false) => {
            Ok(Sign::GreaterEqual)
        }
        (BoundShape::Other, _) if variable.lower_bound == 0.0 && variable.upper_bound == 0.0 => {
            Err(DualError::FixedAtZero {
                name: variable.name.clone(),
            })
        }
        (BoundShape::Other, _) => Err(DualError::NotNormalized {
            name: variable.name.clone(),
            lower: variable.lower_bound,
            upper: variable.upper_bound,
        }),
    }
}

/// Returns the `(lower, upper)` bounds of the dual variable generated by a primal row.
fn dual_variable_bounds(sign: Sign, minimize: bool) -> (f64, f64) {
    match (sign, minimize) {
        (Sign::Equal, _) => (f64::NEG_INFINITY, f64::INFINITY),
        (Sign::LessEqual, true) | (Sign::GreaterEqual, false) => (f64::NEG_INFINITY, 0.0),
        (Sign::GreaterEqual, true) | (Sign::LessEqual, false) => (0.0, f64::INFINITY),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        Cell, Constraint, DualError, Model, ModelError, Objective, ObjectiveCategory,
        ObjectiveCell, Sign, TriadModel, Variable, VariableType,
    };

    fn non_negative(index: usize, name: &str) -> Variable {
        Variable::new(index, 0.0, f64::INFINITY, VariableType::Continuous, name)
    }

    /// minimize 3x subject to cap: 2x <= 4, x >= 0.
    fn capacity() -> TriadModel {
        let mut constraints = Constraint::<usize>::default();
        constraints.push_row([(0, 2.0)], Sign::LessEqual, 4.0, "cap");

        Model {
            name: "primal".into(),
            variables: vec![non_negative(0, "x")],
            constraints,
            objective: Objective {
                category: ObjectiveCategory::Minimum,
                cells: vec![ObjectiveCell::new(0, 3.0)],
            },
        }
    }

    /// minimize x1 + 2 x2 subject to
    ///   r0: x1 + x2 >= 2
    ///   r1: x1 - x2 <= 1
    ///   x1, x2 >= 0
    ///
    /// Optimum 2.5 at (1.5, 0.5).
    fn two_by_two() -> TriadModel {
        let mut constraints = Constraint::<usize>::default();
        constraints.push_row([(0, 1.0), (1, 1.0)], Sign::GreaterEqual, 2.0, "r0");
        constraints.push_row([(0, 1.0), (1, -1.0)], Sign::LessEqual, 1.0, "r1");

        Model {
            name: "lp".into(),
            variables: vec![non_negative(0, "x1"), non_negative(1, "x2")],
            constraints,
            objective: Objective {
                category: ObjectiveCategory::Minimum,
                cells: vec![ObjectiveCell::new(0, 1.0), ObjectiveCell::new(1, 2.0)],
            },
        }
    }

    /// Returns `true` if `x` satisfies every row and bound of `model`.
    fn is_feasible(model: &TriadModel, x: &[f64]) -> bool {
        let within_bounds = model
            .variables
            .iter()
            .all(|v| v.lower_bound <= x[v.index] && x[v.index] <= v.upper_bound);

        let rows_hold = model.constraints.rows().enumerate().all(|(row, cells)| {
            let activity: f64 = cells.iter().map(|c| c.coefficient * x[c.term]).sum();
            let rhs = model.constraints.rhs[row];
            match model.constraints.signs[row] {
                Sign::LessEqual => activity <= rhs + 1e-12,
                Sign::GreaterEqual => activity >= rhs - 1e-12,
                Sign::Equal => (activity - rhs).abs() <= 1e-12,
            }
        });

        within_bounds && rows_hold
    }

    fn objective_value(model: &TriadModel, x: &[f64]) -> f64 {
        model
            .objective
            .cells
            .iter()
            .map(|c| c.coefficient * x[c.term])
            .sum()
    }

    #[test]
    fn capacity_example() {
        let primal = capacity();
        let mut normalized = primal.clone();
        normalized.normalize();
        assert_eq!(normalized, primal);

        let dual = normalized.dual().unwrap();

        assert_eq!(dual.name, "primal-dual");
        assert_eq!(dual.variables.len(), 1);
        assert_eq!(dual.variables[0].name, "cap_dual");
        assert_eq!(dual.variables[0].lower_bound, f64::NEG_INFINITY);
        assert_eq!(dual.variables[0].upper_bound, 0.0);

        assert_eq!(dual.constraints.lhs, vec![Cell::new(0, 0, 2.0)]);
        assert_eq!(dual.constraints.signs, vec![Sign::LessEqual]);
        assert_eq!(dual.constraints.rhs, vec![3.0]);
        assert_eq!(dual.constraints.names, vec!["x_dual"]);

        assert_eq!(dual.objective.category, ObjectiveCategory::Maximum);
        assert_eq!(dual.objective.cells, vec![ObjectiveCell::new(0, 4.0)]);
    }

    #[test]
    fn primal_is_untouched() {
        let primal = capacity();
        let before = primal.clone();
        let _ = primal.dual().unwrap();

        assert_eq!(primal, before);
    }

    #[test]
    fn known_optimal_pair_has_equal_objectives() {
        let primal = two_by_two();
        let dual = primal.dual().unwrap();
        assert_eq!(dual.validate(), Ok(()));

        let x = [1.5, 0.5];
        let y = [1.5, -0.5];

        assert!(is_feasible(&primal, &x));
        assert!(is_feasible(&dual, &y));
        assert_relative_eq!(objective_value(&primal, &x), 2.5);
        assert_relative_eq!(objective_value(&dual, &y), 2.5);
    }

    #[test]
    fn weak_duality_holds_for_feasible_points() {
        let primal = two_by_two();
        let dual = primal.dual().unwrap();

        let xs = [[2.0, 1.0], [1.0, 1.0], [3.0, 4.0]];
        let ys = [[0.0, 0.0], [1.0, 0.0], [0.5, -0.5]];

        for x in &xs {
            assert!(is_feasible(&primal, x));
            for y in &ys {
                assert!(is_feasible(&dual, y));
                assert!(objective_value(&dual, y) <= objective_value(&primal, x));
            }
        }
    }

    #[test]
    fn dual_of_dual_recovers_the_primal() {
        for category in [ObjectiveCategory::Minimum, ObjectiveCategory::Maximum] {
            let mut primal = two_by_two();
            primal.objective.category = category;
            primal.variables[1].lower_bound = f64::NEG_INFINITY;

            let twice = primal.dual().unwrap().dual().unwrap();

            assert_eq!(twice.objective, primal.objective);
            assert_eq!(twice.constraints.lhs, primal.constraints.lhs);
            assert_eq!(twice.constraints.signs, primal.constraints.signs);
            assert_eq!(twice.constraints.rhs, primal.constraints.rhs);
            for (a, b) in twice.variables.iter().zip(&primal.variables) {
                assert_eq!(a.bound_shape(), b.bound_shape());
            }
        }
    }

    #[test]
    fn maximization_mirrors_the_sign_tables() {
        let mut primal = capacity();
        primal.objective.category = ObjectiveCategory::Maximum;

        let dual = primal.dual().unwrap();

        assert_eq!(dual.objective.category, ObjectiveCategory::Minimum);
        assert_eq!(dual.variables[0].lower_bound, 0.0);
        assert_eq!(dual.variables[0].upper_bound, f64::INFINITY);
        assert_eq!(dual.constraints.signs, vec![Sign::GreaterEqual]);
    }

    #[test]
    fn free_variables_and_equalities() {
        let mut primal = capacity();
        primal.variables[0].lower_bound = f64::NEG_INFINITY;
        primal.constraints.signs[0] = Sign::Equal;

        let dual = primal.dual().unwrap();

        assert!(dual.variables[0].is_free());
        assert_eq!(dual.constraints.signs, vec![Sign::Equal]);
    }

    #[test]
    fn columns_missing_from_the_objective_get_zero_rhs() {
        let mut primal = two_by_two();
        primal.objective.cells.truncate(1);

        let dual = primal.dual().unwrap();
        assert_eq!(dual.constraints.rhs, vec![1.0, 0.0]);
    }

    #[test]
    fn unnormalized_model_is_rejected() {
        let mut primal = capacity();
        primal.variables[0].upper_bound = 8.0;

        assert_eq!(
            primal.dual(),
            Err(DualError::NotNormalized {
                name: "x".into(),
                lower: 0.0,
                upper: 8.0,
            })
        );

        primal.normalize();
        assert!(primal.dual().is_ok());
    }

    #[test]
    fn invalid_model_is_rejected() {
        let mut primal = capacity();
        primal.constraints.lhs[0].term = 3;

        assert_eq!(
            primal.dual(),
            Err(DualError::Invalid(ModelError::ColumnOutOfRange {
                col: 3,
                columns: 1,
            }))
        );
    }

    #[test]
    fn column_fixed_at_zero_is_reported_separately() {
        let mut primal = capacity();
        primal.variables[0].upper_bound = 0.0;
        primal.normalize();

        assert!(primal.is_normalized());
        assert_eq!(
            primal.dual(),
            Err(DualError::FixedAtZero { name: "x".into() })
        );
    }
}
