//! Core trait for describing a TSP instance.

/// Defines a Traveling Salesman problem instance.
///
/// The user supplies the city count and the pairwise travel cost;
/// the framework handles tour construction, lower bounding, and
/// search. Costs may be asymmetric (`cost(i, j) != cost(j, i)`), and
/// `f64::INFINITY` marks a missing edge.
///
/// # Contract
///
/// - `cost(i, j)` is nonnegative or infinite for `i != j`.
/// - `cost(i, i)` is never consulted; a self-loop does not exist.
/// - Costs are stable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use tsp_bnb::model::TspProblem;
///
/// struct Euclidean {
///     points: Vec<(f64, f64)>,
/// }
///
/// impl TspProblem for Euclidean {
///     fn num_cities(&self) -> usize {
///         self.points.len()
///     }
///
///     fn cost(&self, from: usize, to: usize) -> f64 {
///         let (x1, y1) = self.points[from];
///         let (x2, y2) = self.points[to];
///         ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
///     }
/// }
/// ```
pub trait TspProblem: Send + Sync {
    /// Number of cities in the instance.
    fn num_cities(&self) -> usize;

    /// Cost of traveling from city `from` to city `to`.
    ///
    /// Returns `f64::INFINITY` when no direct edge exists.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// A [`TspProblem`] backed by an explicit n×n cost table.
///
/// Entry `costs[i][j]` is the cost from city `i` to city `j`. The
/// diagonal is ignored. Convenient for tests, benchmarks, and callers
/// whose instance already exists in tabular form.
#[derive(Debug, Clone)]
pub struct MatrixProblem {
    costs: Vec<Vec<f64>>,
}

impl MatrixProblem {
    /// Creates a problem from a square cost table.
    pub fn new(costs: Vec<Vec<f64>>) -> Self {
        Self { costs }
    }
}

impl TspProblem for MatrixProblem {
    fn num_cities(&self) -> usize {
        self.costs.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from][to]
    }
}
