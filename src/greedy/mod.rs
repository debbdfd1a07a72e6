//! Greedy nearest-neighbor tour construction.
//!
//! # Algorithm
//!
//! 1. Pick a start city (fixed or random)
//! 2. Repeatedly move to the cheapest unvisited city (ties broken by
//!    lowest index) until every city has been visited
//! 3. Close the tour back to the start
//! 4. If the resulting tour has infinite cost, retry from a different
//!    random start, bounded by an attempt count and a wall-clock budget
//!
//! The resulting tour seeds the branch-and-bound incumbent, so the
//! search always has a baseline to prune against.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//! Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyResult, GreedyRunner};
