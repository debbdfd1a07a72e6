//! Time-boxed branch-and-bound solver for the Traveling Salesman Problem.
//!
//! Approximates optimal TSP tours under a wall-clock budget using
//! best-first branch and bound with reduced-cost-matrix lower bounds:
//!
//! - **Model**: the [`model::TspProblem`] trait describes an instance
//!   (city count + pairwise costs, asymmetric allowed, `f64::INFINITY`
//!   marking a missing edge); [`model::Tour`] is an immutable visiting
//!   order with its derived wrap-around cost.
//! - **Greedy**: nearest-unvisited-city construction with randomized
//!   restarts, used to seed the incumbent before the search begins.
//! - **BnB**: the branch-and-bound engine itself — a priority-ordered
//!   frontier of reduced-matrix search states, bound-based pruning
//!   against the incumbent, and cooperative deadline/cancellation
//!   checks between node expansions.
//!
//! # Architecture
//!
//! The crate contains the search core only. Visualization, instance
//! generation, and command-line surfaces are consumers: they hand the
//! engine a [`model::TspProblem`] and render the returned
//! [`model::Tour`] and statistics.
//!
//! The search is single-threaded by design. Every state owns its
//! matrix exclusively (deep-copied per child), trading an O(n²) copy
//! per node for the absence of shared mutable state.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem"

pub mod bnb;
pub mod greedy;
pub mod model;

mod rng;

#[cfg(test)]
pub(crate) mod testutil;
