//! The boundary with the symbolic modeling layer.
//!
//! The symbolic layer owns expression construction and evaluation. By the time
//! a model reaches the compiler, every expression has been flattened into
//! ordered cells that reference tokens by their solver index.

use triad_core::{ObjectiveCategory, QuadraticTerm, Sign, Term, VariableType};

use crate::{CompileError, TokenIndex};

/// A registered decision-variable instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub name: String,
    pub kind: VariableType,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Externally assigned handle; unique but not necessarily contiguous.
    pub solver_index: usize,
    pub value: Option<f64>,
}

impl Token {
    /// Creates a token whose bounds are the natural domain of `kind`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: VariableType, solver_index: usize) -> Self {
        let (lower_bound, upper_bound) = kind.default_bounds();
        Self {
            name: name.into(),
            kind,
            lower_bound,
            upper_bound,
            solver_index,
            value: None,
        }
    }

    /// Returns a token with the given bounds, keeping other fields unchanged.
    #[must_use]
    pub fn with_bounds(self, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
            ..self
        }
    }

    /// Returns a token with the given current value, keeping other fields unchanged.
    #[must_use]
    pub fn with_value(self, value: f64) -> Self {
        Self {
            value: Some(value),
            ..self
        }
    }
}

/// An evaluated cell handed over by the symbolic layer.
pub trait SymbolicCell: Sync {
    /// The column key this cell compiles to.
    type Term: Term;

    /// Resolves the cell's token reference(s) to dense column indices.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnresolvedToken`] if a referenced token is not
    /// registered in `index`.
    fn resolve(&self, index: &TokenIndex) -> Result<Self::Term, CompileError>;

    /// Returns the cell's coefficient.
    fn coefficient(&self) -> f64;
}

/// `coefficient * token`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMonomial {
    pub token: usize,
    pub coefficient: f64,
}

impl LinearMonomial {
    #[must_use]
    pub fn new(coefficient: f64, token: usize) -> Self {
        Self { token, coefficient }
    }
}

impl SymbolicCell for LinearMonomial {
    type Term = usize;

    fn resolve(&self, index: &TokenIndex) -> Result<usize, CompileError> {
        index.resolve(self.token)
    }

    fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

/// `coefficient * token1` or `coefficient * token1 * token2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticMonomial {
    pub token1: usize,
    pub token2: Option<usize>,
    pub coefficient: f64,
}

impl QuadraticMonomial {
    #[must_use]
    pub fn linear(coefficient: f64, token: usize) -> Self {
        Self {
            token1: token,
            token2: None,
            coefficient,
        }
    }

    #[must_use]
    pub fn bilinear(coefficient: f64, token1: usize, token2: usize) -> Self {
        Self {
            token1,
            token2: Some(token2),
            coefficient,
        }
    }
}

impl SymbolicCell for QuadraticMonomial {
    type Term = QuadraticTerm;

    /// Bilinear terms are stored with the smaller column first, so `x * y`
    /// and `y * x` merge into one cell.
    fn resolve(&self, index: &TokenIndex) -> Result<QuadraticTerm, CompileError> {
        let col = index.resolve(self.token1)?;
        let Some(token2) = self.token2 else {
            return Ok(QuadraticTerm::Linear { col });
        };
        let other = index.resolve(token2)?;

        Ok(QuadraticTerm::Quadratic {
            col1: col.min(other),
            col2: col.max(other),
        })
    }

    fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

/// A constraint row in declaration order: `cells <sign> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicConstraint<C> {
    pub cells: Vec<C>,
    pub sign: Sign,
    pub rhs: f64,
    pub name: String,
}

impl<C> SymbolicConstraint<C> {
    #[must_use]
    pub fn new(cells: Vec<C>, sign: Sign, rhs: f64, name: impl Into<String>) -> Self {
        Self {
            cells,
            sign,
            rhs,
            name: name.into(),
        }
    }
}

/// One named, independently directed component of the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct SubObjective<C> {
    pub cells: Vec<C>,
    pub category: ObjectiveCategory,
    pub name: String,
}

impl<C> SubObjective<C> {
    #[must_use]
    pub fn new(cells: Vec<C>, category: ObjectiveCategory, name: impl Into<String>) -> Self {
        Self {
            cells,
            category,
            name: name.into(),
        }
    }
}

/// A fully resolved snapshot of a symbolic model, ready for compilation.
pub trait SymbolicModel: Sync {
    type Cell: SymbolicCell;

    fn name(&self) -> &str;

    /// Registered tokens in registration order.
    fn tokens(&self) -> &[Token];

    /// Constraints in declaration order.
    fn constraints(&self) -> &[SymbolicConstraint<Self::Cell>];

    /// Sub-objectives in declaration order.
    fn sub_objectives(&self) -> &[SubObjective<Self::Cell>];

    /// The declared overall direction, used when there is not exactly one
    /// sub-objective.
    fn category(&self) -> ObjectiveCategory;
}

/// An owned [`SymbolicModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSnapshot<C> {
    pub name: String,
    pub tokens: Vec<Token>,
    pub constraints: Vec<SymbolicConstraint<C>>,
    pub sub_objectives: Vec<SubObjective<C>>,
    pub category: ObjectiveCategory,
}

impl<C> ModelSnapshot<C> {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new(name: impl Into<String>, category: ObjectiveCategory) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
            constraints: Vec::new(),
            sub_objectives: Vec::new(),
            category,
        }
    }

    /// Registers a token and returns its solver index.
    pub fn add_token(&mut self, token: Token) -> usize {
        let solver_index = token.solver_index;
        self.tokens.push(token);
        solver_index
    }

    pub fn add_constraint(&mut self, constraint: SymbolicConstraint<C>) {
        self.constraints.push(constraint);
    }

    pub fn add_sub_objective(&mut self, sub_objective: SubObjective<C>) {
        self.sub_objectives.push(sub_objective);
    }
}

impl<C: SymbolicCell> SymbolicModel for ModelSnapshot<C> {
    type Cell = C;

    fn name(&self) -> &str {
        &self.name
    }

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn constraints(&self) -> &[SymbolicConstraint<C>] {
        &self.constraints
    }

    fn sub_objectives(&self) -> &[SubObjective<C>] {
        &self.sub_objectives
    }

    fn category(&self) -> ObjectiveCategory {
        self.category
    }
}
