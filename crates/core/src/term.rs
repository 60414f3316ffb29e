use std::{cmp::Ordering, fmt::Debug, hash::Hash};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The column key of a cell.
///
/// Within one constraint row or objective, cells are unique per term.
/// Linear (triad) models use a bare column index; quadratic (tetrad) models
/// use [`QuadraticTerm`].
pub trait Term: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Builds the term referencing a single column with degree one.
    fn linear(col: usize) -> Self;

    /// Returns the first column and, for bilinear terms, the second.
    fn columns(&self) -> (usize, Option<usize>);
}

impl Term for usize {
    fn linear(col: usize) -> Self {
        col
    }

    fn columns(&self) -> (usize, Option<usize>) {
        (*self, None)
    }
}

/// A term of a quadratic model.
///
/// A squared term is `Quadratic { col1: c, col2: c }`, never confusable with
/// the degree-one `Linear { col: c }`.
///
/// Terms order by first column, then by second column with the linear term
/// of a column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuadraticTerm {
    Linear { col: usize },
    Quadratic { col1: usize, col2: usize },
}

impl Term for QuadraticTerm {
    fn linear(col: usize) -> Self {
        Self::Linear { col }
    }

    fn columns(&self) -> (usize, Option<usize>) {
        match *self {
            Self::Linear { col } => (col, None),
            Self::Quadratic { col1, col2 } => (col1, Some(col2)),
        }
    }
}

impl Ord for QuadraticTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.columns().cmp(&other.columns())
    }
}

impl PartialOrd for QuadraticTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_term_is_distinct_from_linear() {
        let linear = QuadraticTerm::linear(3);
        let squared = QuadraticTerm::Quadratic { col1: 3, col2: 3 };

        assert_ne!(linear, squared);
        assert_eq!(linear.columns(), (3, None));
        assert_eq!(squared.columns(), (3, Some(3)));
    }

    #[test]
    fn terms_sort_in_column_order() {
        let mut terms = vec![
            QuadraticTerm::Quadratic { col1: 0, col2: 1 },
            QuadraticTerm::Linear { col: 2 },
            QuadraticTerm::Linear { col: 0 },
        ];
        terms.sort();

        assert_eq!(
            terms,
            vec![
                QuadraticTerm::Linear { col: 0 },
                QuadraticTerm::Quadratic { col1: 0, col2: 1 },
                QuadraticTerm::Linear { col: 2 },
            ]
        );
    }
}
