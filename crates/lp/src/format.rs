use std::{
    fmt::{self, Write as _},
    io::{self, Write as _},
};

use triad_core::{Model, QuadraticTerm, Term, Variable};

/// A term that can be rendered in the LP text format.
pub trait LpTerm: Term {
    /// Whether the `Binaries` section is part of the format for this model kind.
    const BINARIES: bool;

    /// Writes the variable name(s) of the term.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_names(&self, variables: &[Variable], f: &mut dyn fmt::Write) -> fmt::Result;
}

impl LpTerm for usize {
    const BINARIES: bool = false;

    fn write_names(&self, variables: &[Variable], f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_str(&variables[*self].name)
    }
}

impl LpTerm for QuadraticTerm {
    const BINARIES: bool = true;

    fn write_names(&self, variables: &[Variable], f: &mut dyn fmt::Write) -> fmt::Result {
        match *self {
            Self::Linear { col } => f.write_str(&variables[col].name),
            Self::Quadratic { col1, col2 } => {
                write!(f, "{} * {}", variables[col1].name, variables[col2].name)
            }
        }
    }
}

/// Renders a model in the LP text format.
///
/// The layout is fixed:
///
/// ```text
/// <Minimum|Maximum>
///  + c x - c y ...
///
/// Subject To
///  <row>: + a x ... <sign> <rhs>
///
/// Bounds
///  <bound line per variable>
///
/// Binaries        (quadratic models with binary variables)
///  b0 b1 ...
/// Generals        (models with non-binary integral variables)
///  n0 n1 ...
/// End
/// ```
///
/// Every term carries its sign, the first term of a row or objective included
/// (` + 5 x0`, never `5 x0`). A coefficient of magnitude one is omitted and
/// zero coefficients are skipped. A row without nonzero terms renders as `0`.
/// Output is fully determined by the model.
///
/// # Panics
///
/// Panics if a cell references a column outside the model.
/// [`Model::validate`] rules this out.
///
/// # Example
///
/// ```
/// use triad_core::{Constraint, Model, Objective, ObjectiveCategory, ObjectiveCell, Sign, Variable, VariableType};
/// use triad_lp::Lp;
///
/// let mut constraints = Constraint::<usize>::default();
/// constraints.push_row([(0, 1.0)], Sign::GreaterEqual, 2.0, "floor");
///
/// let model = Model {
///     name: "tiny".into(),
///     variables: vec![Variable::new(0, 0.0, f64::INFINITY, VariableType::Continuous, "x")],
///     constraints,
///     objective: Objective {
///         category: ObjectiveCategory::Minimum,
///         cells: vec![ObjectiveCell::new(0, 3.0)],
///     },
/// };
///
/// assert_eq!(
///     Lp::new(&model).to_string(),
///     "Minimum\n + 3 x\n\nSubject To\n floor: + x >= 2\n\nBounds\n x >= 0\n\nEnd\n",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lp<'a, T> {
    model: &'a Model<T>,
}

impl<'a, T: LpTerm> Lp<'a, T> {
    #[must_use]
    pub fn new(model: &'a Model<T>) -> Self {
        Self { model }
    }
}

impl<T: LpTerm> fmt::Display for Lp<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        let variables = &model.variables;

        writeln!(f, "{}", model.objective.category)?;
        for cell in &model.objective.cells {
            write_term(f, cell.term, cell.coefficient, variables)?;
        }
        f.write_str("\n\n")?;

        f.write_str("Subject To\n")?;
        let constraints = &model.constraints;
        for (row, cells) in constraints.rows().enumerate() {
            write!(f, " {}:", constraints.names[row])?;
            let mut any = false;
            for cell in cells {
                any |= write_term(f, cell.term, cell.coefficient, variables)?;
            }
            if !any {
                f.write_str(" 0")?;
            }
            writeln!(f, " {} {}", constraints.signs[row], constraints.rhs[row])?;
        }
        f.write_str("\n")?;

        f.write_str("Bounds\n")?;
        for variable in variables {
            write_bound(f, variable)?;
        }
        f.write_str("\n")?;

        if T::BINARIES && model.contains_binary() {
            f.write_str("Binaries\n")?;
            write_name_list(f, variables, |v| v.kind.is_binary())?;
        }

        if model.contains_not_binary_integral() {
            f.write_str("Generals\n")?;
            write_name_list(f, variables, |v| v.kind.is_not_binary_integral())?;
        }

        f.write_str("End\n")
    }
}

/// Writes `model` in the LP text format to `out`.
///
/// Every write is checked: a failure at any point is returned, and nothing
/// after it is written.
///
/// # Errors
///
/// Returns the first error reported by `out`.
pub fn write_lp<T: LpTerm>(model: &Model<T>, mut out: impl io::Write) -> io::Result<()> {
    write!(out, "{}", Lp::new(model))
}

/// Writes one signed term, returning whether anything was written.
fn write_term<T: LpTerm>(
    f: &mut fmt::Formatter<'_>,
    term: T,
    coefficient: f64,
    variables: &[Variable],
) -> Result<bool, fmt::Error> {
    if coefficient == 0.0 {
        return Ok(false);
    }

    f.write_str(if coefficient < 0.0 { " - " } else { " + " })?;
    let magnitude = coefficient.abs();
    if magnitude != 1.0 {
        write!(f, "{magnitude} ")?;
    }
    term.write_names(variables, f)?;

    Ok(true)
}

fn write_bound(f: &mut fmt::Formatter<'_>, variable: &Variable) -> fmt::Result {
    let name = &variable.name;
    let lower = variable.lower_bound;
    let upper = variable.upper_bound;

    match (lower == f64::NEG_INFINITY, upper == f64::INFINITY) {
        (true, true) => writeln!(f, " {name} free"),
        (true, false) => writeln!(f, " {name} <= {upper}"),
        (false, true) => writeln!(f, " {name} >= {lower}"),
        (false, false) if lower == upper => writeln!(f, " {name} = {lower}"),
        (false, false) => writeln!(f, " {lower} <= {name} <= {upper}"),
    }
}

fn write_name_list(
    f: &mut fmt::Formatter<'_>,
    variables: &[Variable],
    include: impl Fn(&Variable) -> bool,
) -> fmt::Result {
    for variable in variables.iter().filter(|v| include(*v)) {
        write!(f, " {}", variable.name)?;
    }
    f.write_str("\n")
}
