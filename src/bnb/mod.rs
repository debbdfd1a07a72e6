//! Branch and bound over reduced cost matrices.
//!
//! # Algorithm
//!
//! 1. Seed the incumbent with a greedy tour
//! 2. Push the root search state (full cost matrix, reduced)
//! 3. At each iteration:
//!    a. Pop the state with the smallest depth-adjusted bound
//!    b. Discard it if its raw lower bound exceeds the incumbent cost
//!    c. Otherwise branch: one child per unvisited destination, each
//!       with the parent's matrix copied, the chosen edge committed,
//!       and the matrix re-reduced
//!    d. Prune children whose bound exceeds the incumbent; enqueue the
//!       rest; complete paths that close finitely replace the
//!       incumbent when cheaper
//! 4. Terminate when the frontier empties (incumbent provably
//!    optimal) or the wall-clock budget expires (best found so far)
//!
//! # Key Components
//!
//! - [`SearchState`] — reduced matrix, admissible lower bound, partial
//!   path, and row/column exclusion flags
//! - [`BnbConfig`] — time budget, start city, depth-bias weight
//! - [`BnbRunner`] — the search loop; returns [`BnbResult`] with the
//!   incumbent tour and search statistics
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the
//!   Traveling Salesman Problem", *Operations Research* 11(6), 972-989.

mod config;
mod runner;
mod state;

pub use config::BnbConfig;
pub use runner::{BnbResult, BnbRunner, SolveStatus};
pub use state::SearchState;
