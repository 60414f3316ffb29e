//! Compiles symbolic optimization models into the Triad intermediate
//! representation.
//!
//! The symbolic layer hands over a [`SymbolicModel`]: ordered tokens,
//! constraints and sub-objectives whose expressions are already evaluated
//! into cells. [`compile`] resolves every token to a dense column through a
//! [`TokenIndex`], merges duplicate cells, folds the sub-objectives into one
//! objective and returns a [`triad_core::Model`].
//!
//! Linear snapshots (cells of [`LinearMonomial`]) compile to a
//! [`triad_core::TriadModel`]; quadratic snapshots (cells of
//! [`QuadraticMonomial`]) compile to a [`triad_core::TetradModel`].

mod compile;
mod config;
mod emit;
mod error;
mod symbolic;
mod token_index;


pub use compile::{CompiledModel, compile};
pub use config::Config;
pub use error::CompileError;
pub use symbolic::{
    LinearMonomial, ModelSnapshot, QuadraticMonomial, SubObjective, SymbolicCell,
    SymbolicConstraint, SymbolicModel, Token,
};
pub use token_index::TokenIndex;
