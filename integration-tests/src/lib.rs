//! Shared symbolic models for the end-to-end tests.

use triad_compiler::{
    LinearMonomial, ModelSnapshot, QuadraticMonomial, SubObjective, SymbolicConstraint, Token,
};
use triad_core::{ObjectiveCategory, Sign, VariableType};

/// Two binaries with one knapsack row:
///
/// maximize 5 x0 + 4 x1
/// subject to cap: 2 x0 + 3 x1 <= 4
#[must_use]
pub fn knapsack() -> ModelSnapshot<LinearMonomial> {
    let mut model = ModelSnapshot::new("knapsack", ObjectiveCategory::Maximum);
    let x0 = model.add_token(Token::new("x0", VariableType::Binary, 0));
    let x1 = model.add_token(Token::new("x1", VariableType::Binary, 1));

    model.add_constraint(SymbolicConstraint::new(
        vec![LinearMonomial::new(2.0, x0), LinearMonomial::new(3.0, x1)],
        Sign::LessEqual,
        4.0,
        "cap",
    ));
    model.add_sub_objective(SubObjective::new(
        vec![LinearMonomial::new(5.0, x0), LinearMonomial::new(4.0, x1)],
        ObjectiveCategory::Maximum,
        "value",
    ));

    model
}

/// A small furniture plan.
///
/// maximize 3 chairs + 8 tables - 50 open
/// subject to
///   wood:  2 chairs + 5 tables <= 120
///   labor:   chairs + 2 tables <= 60
///   setup:   tables - 30 open  <= 0
///
/// with `chairs` an integer in `[0, 40]`, `tables` continuous in `[0, 30]`
/// and `open` binary. Solver indices are sparse on purpose.
#[must_use]
pub fn planning() -> ModelSnapshot<LinearMonomial> {
    let mut model = ModelSnapshot::new("planning", ObjectiveCategory::Maximum);

    let chairs = model.add_token(
        Token::new("chairs", VariableType::UnsignedInteger, 10).with_bounds(0.0, 40.0),
    );
    let tables = model.add_token(
        Token::new("tables", VariableType::UnsignedContinuous, 20).with_bounds(0.0, 30.0),
    );
    let open = model.add_token(Token::new("open", VariableType::Binary, 30));

    model.add_constraint(SymbolicConstraint::new(
        vec![LinearMonomial::new(2.0, chairs), LinearMonomial::new(5.0, tables)],
        Sign::LessEqual,
        120.0,
        "wood",
    ));
    model.add_constraint(SymbolicConstraint::new(
        vec![LinearMonomial::new(1.0, chairs), LinearMonomial::new(2.0, tables)],
        Sign::LessEqual,
        60.0,
        "labor",
    ));
    model.add_constraint(SymbolicConstraint::new(
        vec![LinearMonomial::new(1.0, tables), LinearMonomial::new(-30.0, open)],
        Sign::LessEqual,
        0.0,
        "setup",
    ));

    model.add_sub_objective(SubObjective::new(
        vec![LinearMonomial::new(3.0, chairs), LinearMonomial::new(8.0, tables)],
        ObjectiveCategory::Maximum,
        "profit",
    ));
    model.add_sub_objective(SubObjective::new(
        vec![LinearMonomial::new(50.0, open)],
        ObjectiveCategory::Minimum,
        "fixed cost",
    ));

    model
}

/// Two-asset mean-variance portfolio with an optional holding switch.
///
/// minimize 2 a^2 + a b + b^2 - 0.5 a
/// subject to
///   budget: a + b = 1
///   hold:   b - hold <= 0
#[must_use]
pub fn portfolio() -> ModelSnapshot<QuadraticMonomial> {
    let mut model = ModelSnapshot::new("portfolio", ObjectiveCategory::Minimum);

    let a = model.add_token(Token::new("a", VariableType::Percentage, 1));
    let b = model.add_token(Token::new("b", VariableType::Percentage, 2));
    let hold = model.add_token(Token::new("hold", VariableType::Binary, 3));

    model.add_constraint(SymbolicConstraint::new(
        vec![QuadraticMonomial::linear(1.0, a), QuadraticMonomial::linear(1.0, b)],
        Sign::Equal,
        1.0,
        "budget",
    ));
    model.add_constraint(SymbolicConstraint::new(
        vec![QuadraticMonomial::linear(1.0, b), QuadraticMonomial::linear(-1.0, hold)],
        Sign::LessEqual,
        0.0,
        "hold",
    ));

    model.add_sub_objective(SubObjective::new(
        vec![
            QuadraticMonomial::bilinear(2.0, a, a),
            QuadraticMonomial::bilinear(0.5, b, a),
            QuadraticMonomial::bilinear(0.5, a, b),
            QuadraticMonomial::bilinear(1.0, b, b),
            QuadraticMonomial::linear(-0.5, a),
        ],
        ObjectiveCategory::Minimum,
        "risk",
    ));

    model
}
