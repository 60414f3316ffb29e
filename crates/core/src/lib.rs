//! Canonical intermediate representation for optimization models.
//!
//! A compiled model is a flat, numeric, solver-agnostic description of a
//! mathematical program:
//!
//! - [`Variable`]: one column with bounds, a [`VariableType`] and a name
//! - [`Constraint`]: a row-store of sparse [`Cell`]s with signs, right-hand
//!   sides and names
//! - [`Objective`]: a single folded row under one [`ObjectiveCategory`]
//! - [`Model`]: the three together, keyed by a [`Term`]: [`TriadModel`] for
//!   linear programs and [`TetradModel`] for quadratic ones
//!
//! Models support the standard transforms in [`transform`].

mod error;
mod model;
mod sign;
mod term;
mod variable;

pub mod transform;

pub use error::{DualError, ModelError};
pub use model::{Cell, Constraint, Model, Objective, ObjectiveCell, TetradModel, TriadModel};
pub use sign::{ObjectiveCategory, Sign};
pub use term::{QuadraticTerm, Term};
pub use variable::{BoundShape, Variable, VariableType};
