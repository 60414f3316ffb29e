//! Model-to-model transforms.
//!
//! - [`Model::normalize`] rewrites finite nonzero variable bounds as rows
//! - [`Model::linear_relax`] loosens integral variable types to continuous ones
//! - [`Model::dual`] builds the LP dual of a normalized linear model
//!
//! `normalize` and `linear_relax` mutate in place and are idempotent.
//! `dual` leaves the primal untouched and returns an independently owned model.
//!
//! [`Model::normalize`]: crate::Model::normalize
//! [`Model::linear_relax`]: crate::Model::linear_relax
//! [`Model::dual`]: crate::Model::dual

mod dual;
mod normalize;
mod relax;
