#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ModelError, ObjectiveCategory, QuadraticTerm, Sign, Term, Variable};

/// A linear model: cells keyed by a single column.
pub type TriadModel = Model<usize>;

/// A quadratic model: cells keyed by one or two columns.
pub type TetradModel = Model<QuadraticTerm>;

/// One nonzero contribution to a constraint row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell<T> {
    pub row: usize,
    pub term: T,
    pub coefficient: f64,
}

impl<T> Cell<T> {
    pub fn new(row: usize, term: T, coefficient: f64) -> Self {
        Self {
            row,
            term,
            coefficient,
        }
    }
}

/// One contribution to the (row-less) objective.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectiveCell<T> {
    pub term: T,
    pub coefficient: f64,
}

impl<T> ObjectiveCell<T> {
    pub fn new(term: T, coefficient: f64) -> Self {
        Self { term, coefficient }
    }
}

/// Row-store of all constraints.
///
/// `signs`, `rhs` and `names` are parallel arrays with one entry per row.
/// `lhs` holds every row's cells, grouped contiguously by ascending row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraint<T> {
    pub lhs: Vec<Cell<T>>,
    pub signs: Vec<Sign>,
    pub rhs: Vec<f64>,
    pub names: Vec<String>,
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self {
            lhs: Vec::new(),
            signs: Vec::new(),
            rhs: Vec::new(),
            names: Vec::new(),
        }
    }
}

impl<T: Term> Constraint<T> {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Appends a row after all existing rows.
    ///
    /// The row index of each cell is overwritten with the new row's index.
    pub fn push_row(
        &mut self,
        cells: impl IntoIterator<Item = (T, f64)>,
        sign: Sign,
        rhs: f64,
        name: impl Into<String>,
    ) {
        let row = self.len();
        self.lhs.extend(
            cells
                .into_iter()
                .map(|(term, coefficient)| Cell::new(row, term, coefficient)),
        );
        self.signs.push(sign);
        self.rhs.push(rhs);
        self.names.push(name.into());
    }

    /// Iterates over rows in index order, yielding each row's cells.
    ///
    /// Rows without cells yield an empty slice.
    /// Assumes `lhs` is grouped by ascending row, as [`Constraint::validate`] checks.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<T>]> + '_ {
        let mut start = 0;
        (0..self.len()).map(move |row| {
            let end = start
                + self.lhs[start..]
                    .iter()
                    .take_while(|cell| cell.row == row)
                    .count();
            let cells = &self.lhs[start..end];
            start = end;
            cells
        })
    }

    /// Checks the row-store invariants against a model with `columns` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the parallel arrays disagree in length, a row index
    /// is out of range or decreasing, or a column index is out of range.
    pub fn validate(&self, columns: usize) -> Result<(), ModelError> {
        let rows = self.len();
        if self.signs.len() != rows || self.names.len() != rows {
            return Err(ModelError::RowArrays {
                signs: self.signs.len(),
                rhs: rows,
                names: self.names.len(),
            });
        }

        let mut previous = 0;
        for cell in &self.lhs {
            if cell.row >= rows {
                return Err(ModelError::RowOutOfRange { row: cell.row, rows });
            }
            if cell.row < previous {
                return Err(ModelError::RowOrder {
                    row: cell.row,
                    previous,
                });
            }
            previous = cell.row;
            check_columns(cell.term, columns)?;
        }

        Ok(())
    }
}

/// The single folded objective row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Objective<T> {
    pub category: ObjectiveCategory,
    pub cells: Vec<ObjectiveCell<T>>,
}

impl<T: Term> Objective<T> {
    /// Creates an objective with no cells.
    #[must_use]
    pub fn empty(category: ObjectiveCategory) -> Self {
        Self {
            category,
            cells: Vec::new(),
        }
    }
}

/// An assembled intermediate model.
///
/// The model uniquely owns its storage; [`Clone`] is a deep copy, so several
/// transformed variants can be derived from one base model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model<T> {
    pub name: String,
    pub variables: Vec<Variable>,
    pub constraints: Constraint<T>,
    pub objective: Objective<T>,
}

impl<T: Term> Model<T> {
    /// Returns `true` if any variable is binary.
    #[must_use]
    pub fn contains_binary(&self) -> bool {
        self.variables.iter().any(|v| v.kind.is_binary())
    }

    /// Returns `true` if any variable is integral.
    #[must_use]
    pub fn contains_integral(&self) -> bool {
        self.variables.iter().any(|v| v.kind.is_integral())
    }

    /// Returns `true` if any variable is integral but not binary.
    #[must_use]
    pub fn contains_not_binary_integral(&self) -> bool {
        self.variables.iter().any(|v| v.kind.is_not_binary_integral())
    }

    /// Returns `true` if no variable carries a finite nonzero bound.
    ///
    /// This is the state [`Model::normalize`] leaves a model in.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.variables.iter().all(|v| {
            (v.lower_bound == f64::NEG_INFINITY || v.lower_bound == 0.0)
                && (v.upper_bound == f64::INFINITY || v.upper_bound == 0.0)
        })
    }

    /// Checks the structural invariants of the model.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable's index disagrees with its position,
    /// or if any constraint or objective cell breaks the row-store invariants.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (position, variable) in self.variables.iter().enumerate() {
            if variable.index != position {
                return Err(ModelError::VariableIndex {
                    index: variable.index,
                    position,
                });
            }
        }

        let columns = self.variables.len();
        self.constraints.validate(columns)?;
        for cell in &self.objective.cells {
            check_columns(cell.term, columns)?;
        }

        Ok(())
    }
}

fn check_columns<T: Term>(term: T, columns: usize) -> Result<(), ModelError> {
    let (first, second) = term.columns();
    for col in std::iter::once(first).chain(second) {
        if col >= columns {
            return Err(ModelError::ColumnOutOfRange { col, columns });
        }
    }
    Ok(())
}
