//! Search states: reduced cost matrices with admissible lower bounds.

use crate::model::TspProblem;

/// An owned n×n edge cost matrix.
///
/// Entry `(i, j)` is the remaining cost of the move from city `i` to
/// city `j`; the diagonal is infinite (no self-loop). Entries become
/// infinite once a move has been committed or excluded. Every state
/// owns its matrix exclusively — children clone, never share.
#[derive(Debug, Clone)]
pub(crate) struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    fn from_problem<P: TspProblem + ?Sized>(problem: &P) -> Self {
        let n = problem.num_cities();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(if i == j {
                    f64::INFINITY
                } else {
                    problem.cost(i, j)
                });
            }
        }
        Self { n, data }
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }
}

/// A node in the branch-and-bound tree.
///
/// Holds a reduced cost matrix, the accumulated lower bound, the
/// partial path committed so far, and flags marking rows/columns
/// already spent as a source/destination. The bound is admissible: it
/// never exceeds the true minimum cost of completing the tour from
/// this partial path, so pruning against it cannot discard a feasible
/// optimum. Along any root-to-leaf chain the bound is monotonically
/// non-decreasing.
#[derive(Debug, Clone)]
pub struct SearchState {
    matrix: CostMatrix,
    lower_bound: f64,
    path: Vec<usize>,
    excluded_rows: Vec<bool>,
    excluded_cols: Vec<bool>,
}

impl SearchState {
    /// Builds the root state: the full cost matrix, zero bound, a path
    /// holding only the start city, and no exclusions — then reduces.
    pub fn root<P: TspProblem + ?Sized>(problem: &P, start: usize) -> Self {
        let n = problem.num_cities();
        let mut state = Self {
            matrix: CostMatrix::from_problem(problem),
            lower_bound: 0.0,
            path: vec![start],
            excluded_rows: vec![false; n],
            excluded_cols: vec![false; n],
        };
        state.reduce();
        state
    }

    /// Builds the child of `parent` that commits the move from the
    /// parent's last city to `next`.
    ///
    /// Copies the parent's matrix, bound, path, and exclusions; pays
    /// the edge cost into the bound; infinitizes the departed row and
    /// the arrived column; then reduces.
    pub fn child(parent: &SearchState, next: usize) -> Self {
        debug_assert!(!parent.path.contains(&next), "city {next} already visited");

        let mut state = parent.clone();
        let last = state.last_city();
        let n = state.matrix.n;

        state.lower_bound += state.matrix.get(last, next);
        for col in 0..n {
            state.matrix.set(last, col, f64::INFINITY);
        }
        for row in 0..n {
            state.matrix.set(row, next, f64::INFINITY);
        }
        state.excluded_rows[last] = true;
        state.excluded_cols[next] = true;
        state.path.push(next);

        state.reduce();
        state
    }

    /// Row/column reduction.
    ///
    /// Subtracts each non-excluded row's minimum from the row and each
    /// non-excluded column's minimum from the (row-reduced) column,
    /// accumulating every finite subtracted amount into the bound.
    /// Each amount is a cost any completion must pay at least once, so
    /// the bound stays admissible. O(n²).
    fn reduce(&mut self) {
        let n = self.matrix.n;

        for row in 0..n {
            if self.excluded_rows[row] {
                continue;
            }
            let min = (0..n)
                .map(|col| self.matrix.get(row, col))
                .fold(f64::INFINITY, f64::min);
            if min.is_finite() {
                for col in 0..n {
                    let v = self.matrix.get(row, col);
                    self.matrix.set(row, col, v - min);
                }
                self.lower_bound += min;
            }
        }

        for col in 0..n {
            if self.excluded_cols[col] {
                continue;
            }
            let min = (0..n)
                .map(|row| self.matrix.get(row, col))
                .fold(f64::INFINITY, f64::min);
            if min.is_finite() {
                for row in 0..n {
                    let v = self.matrix.get(row, col);
                    self.matrix.set(row, col, v - min);
                }
                self.lower_bound += min;
            }
        }
    }

    /// Lower bound on the cost of any complete tour reachable from
    /// this state. Pruning decisions use this raw value.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// The committed partial path; its first element is the root city.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of cities committed so far.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The tip of the partial path.
    pub fn last_city(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Remaining cost of the edge closing the path back to its root,
    /// read from the reduced matrix. Reduction never turns a finite
    /// entry infinite, so this is infinite exactly when the original
    /// closing edge is missing.
    pub fn closing_edge(&self) -> f64 {
        self.matrix.get(self.last_city(), self.path[0])
    }

    /// Frontier ordering key: `lower_bound - depth_weight * depth`.
    ///
    /// A heuristic that favors deeper states of similar bound so
    /// complete tours surface sooner. Ordering only — correctness
    /// rests solely on [`SearchState::lower_bound`].
    pub fn priority_key(&self, depth_weight: f64) -> f64 {
        self.lower_bound - depth_weight * self.depth() as f64
    }
}
