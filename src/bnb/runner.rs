//! Branch-and-bound search loop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;

use super::config::BnbConfig;
use super::state::SearchState;
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::model::{Tour, TspProblem};
use crate::rng::create_rng;

/// Outcome classification of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The frontier emptied: the returned tour is provably optimal.
    Optimal,
    /// The time budget expired (or the run was cancelled) first: the
    /// returned tour is the best found, optimality not guaranteed.
    Feasible,
    /// No finite-cost tour was found at all.
    Infeasible,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// Outcome classification.
    pub status: SolveStatus,

    /// Cost of the incumbent tour, `f64::INFINITY` when infeasible.
    pub cost: f64,

    /// The incumbent tour, `None` when infeasible.
    pub tour: Option<Tour>,

    /// Wall-clock time spent, in milliseconds.
    pub elapsed_ms: u64,

    /// Incumbent improvements after the greedy seed.
    pub solutions_found: usize,

    /// Largest frontier size observed.
    pub max_frontier_size: usize,

    /// Total child states constructed.
    pub states_generated: usize,

    /// States discarded because their bound exceeded the incumbent.
    pub states_pruned: usize,

    /// Incumbent cost after the seed and after every improvement.
    pub cost_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// A frontier entry: a pending state keyed by its depth-adjusted
/// bound.
///
/// The key shapes expansion order only. Pruning always consults the
/// raw `SearchState::lower_bound`, which is what correctness rests on.
struct FrontierEntry {
    key: f64,
    state: SearchState,
}

impl FrontierEntry {
    fn new(state: SearchState, depth_weight: f64) -> Self {
        let key = state.priority_key(depth_weight);
        Self { key, state }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap pops its maximum, the search wants the
        // smallest key first.
        other.key.partial_cmp(&self.key).unwrap_or(Ordering::Equal)
    }
}

/// Executes the branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search.
    ///
    /// Fails fast with a descriptive error on an invalid configuration
    /// or instance (fewer than 2 cities, negative or NaN edge cost,
    /// out-of-range start). Infeasibility and budget exhaustion are
    /// reported through [`BnbResult::status`], never as errors.
    pub fn run<P: TspProblem>(problem: &P, config: &BnbConfig) -> Result<BnbResult, String> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between node expansions, at the same
    /// granularity as the deadline: a state under construction always
    /// completes its reduction before the run stops.
    pub fn run_with_cancel<P: TspProblem>(
        problem: &P,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult, String> {
        config.validate()?;
        validate_instance(problem, config)?;

        let start_time = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);
        let n = problem.num_cities();

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let start = match config.start {
            Some(s) => s,
            None => rng.random_range(0..n),
        };

        // Seed the incumbent. Without a finite baseline there is
        // nothing to prune against; report infeasibility instead of
        // searching an instance the constructor could not even tour.
        let greedy = GreedyRunner::run(
            problem,
            &GreedyConfig::default()
                .with_max_attempts(config.greedy_attempts)
                .with_time_limit_ms(config.time_limit_ms)
                .with_seed(rng.random()),
        );
        let Some(mut incumbent) = greedy.tour else {
            return Ok(BnbResult {
                status: SolveStatus::Infeasible,
                cost: f64::INFINITY,
                tour: None,
                elapsed_ms: start_time.elapsed().as_millis() as u64,
                solutions_found: 0,
                max_frontier_size: 0,
                states_generated: 0,
                states_pruned: 0,
                cost_history: Vec::new(),
                cancelled: false,
            });
        };

        let mut cost_history = vec![incumbent.cost()];
        let mut solutions_found = 0usize;
        let mut states_generated = 0usize;
        let mut states_pruned = 0usize;
        let mut cancelled = false;

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry::new(
            SearchState::root(problem, start),
            config.depth_weight,
        ));
        let mut max_frontier_size = 1usize;

        while !frontier.is_empty() {
            // Deadline and cancellation are honored between
            // expansions only, never mid-reduction.
            if start_time.elapsed() >= budget {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(AtomicOrdering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let Some(entry) = frontier.pop() else { break };
            let state = entry.state;

            // Prune on the raw bound, not the ordering key.
            if state.lower_bound() > incumbent.cost() {
                states_pruned += 1;
                continue;
            }

            for next in 0..n {
                if state.path().contains(&next) {
                    continue;
                }

                let child = SearchState::child(&state, next);
                states_generated += 1;

                if child.lower_bound() > incumbent.cost() {
                    states_pruned += 1;
                    continue;
                }

                if child.depth() < n {
                    frontier.push(FrontierEntry::new(child, config.depth_weight));
                } else if child.closing_edge().is_finite() {
                    let tour = Tour::from_order(problem, child.path().to_vec());
                    if tour.cost() < incumbent.cost() {
                        incumbent = tour;
                        solutions_found += 1;
                        cost_history.push(incumbent.cost());
                    }
                }
                // A complete path with an infinite closing edge is not
                // a tour; drop it.
            }

            max_frontier_size = max_frontier_size.max(frontier.len());
        }

        let status = if frontier.is_empty() {
            SolveStatus::Optimal
        } else {
            SolveStatus::Feasible
        };

        Ok(BnbResult {
            status,
            cost: incumbent.cost(),
            tour: Some(incumbent),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
            solutions_found,
            max_frontier_size,
            states_generated,
            states_pruned,
            cost_history,
            cancelled,
        })
    }
}

/// Fail-fast instance checks: enough cities, a start index in range,
/// and a well-formed cost function.
fn validate_instance<P: TspProblem>(problem: &P, config: &BnbConfig) -> Result<(), String> {
    let n = problem.num_cities();
    if n < 2 {
        return Err(format!("instance must have at least 2 cities, got {n}"));
    }
    if let Some(start) = config.start {
        if start >= n {
            return Err(format!("start city {start} out of range for {n} cities"));
        }
    }
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let c = problem.cost(i, j);
            if c < 0.0 || c.is_nan() {
                return Err(format!("cost({i}, {j}) must be nonnegative, got {c}"));
            }
        }
    }
    Ok(())
}
