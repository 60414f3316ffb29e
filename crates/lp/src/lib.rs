//! LP text-format export for Triad models.
//!
//! [`Lp`] renders a [`triad_core::Model`] through [`std::fmt::Display`],
//! [`write_lp`] streams it into any [`std::io::Write`], and [`export`] writes
//! it to a file.

mod error;
mod export;
mod format;

pub use error::ExportError;
pub use export::export;
pub use format::{Lp, LpTerm, write_lp};
