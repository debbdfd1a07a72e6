//! Problem model shared by the greedy constructor and the search engine.
//!
//! # Key Components
//!
//! - [`TspProblem`] — the caller-implemented instance description:
//!   city count plus a pairwise cost function.
//! - [`MatrixProblem`] — a concrete instance backed by an explicit
//!   cost table.
//! - [`Tour`] — an immutable visiting order with its derived cost.
//!
//! # Design
//!
//! Costs are `f64` with `f64::INFINITY` as the absorbing "no edge"
//! marker: an infinite cost anywhere in a tour makes the tour cost
//! infinite, and infinite entries flow through matrix reduction
//! without special-casing.

mod tour;
mod types;

pub use tour::Tour;
pub use types::{MatrixProblem, TspProblem};
