//! Greedy construction loop.

use std::time::{Duration, Instant};

use rand::Rng;

use super::config::GreedyConfig;
use crate::model::{Tour, TspProblem};
use crate::rng::create_rng;

/// Result of a greedy construction run.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// The best finite-cost tour found, or `None` when every attempt
    /// produced a tour with a missing edge.
    pub tour: Option<Tour>,

    /// Number of construction attempts performed.
    pub attempts: usize,

    /// Wall-clock time spent, in milliseconds.
    pub elapsed_ms: u64,
}

/// Executes greedy nearest-neighbor construction.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds one tour from a fixed start by always moving to the
    /// cheapest unvisited city.
    ///
    /// The returned tour may have infinite cost when the instance is
    /// not fully connected; callers retry via [`GreedyRunner::run`].
    pub fn construct<P: TspProblem>(problem: &P, start: usize) -> Tour {
        let n = problem.num_cities();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        visited[start] = true;
        order.push(start);
        let mut current = start;

        for _ in 1..n {
            // Strict `<` keeps the earliest minimum: ties break to the
            // lowest city index.
            let mut next = None;
            let mut best = f64::INFINITY;
            for candidate in 0..n {
                if visited[candidate] {
                    continue;
                }
                let c = problem.cost(current, candidate);
                if next.is_none() || c < best {
                    next = Some(candidate);
                    best = c;
                }
            }

            // `next` is always Some here: the loop runs once per
            // remaining unvisited city.
            let Some(next) = next else { break };
            visited[next] = true;
            order.push(next);
            current = next;
        }

        Tour::from_order(problem, order)
    }

    /// Runs greedy construction with randomized restarts until a
    /// finite-cost tour is found or the attempt/time budget runs out.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GreedyConfig::validate`] first to get a descriptive error).
    pub fn run<P: TspProblem>(problem: &P, config: &GreedyConfig) -> GreedyResult {
        config.validate().expect("invalid GreedyConfig");

        let start_time = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);
        let n = problem.num_cities();

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut tour = None;
        let mut attempts = 0usize;

        while attempts < config.max_attempts && start_time.elapsed() < budget {
            let start = match config.start {
                Some(s) => s,
                None => rng.random_range(0..n),
            };

            let candidate = Self::construct(problem, start);
            attempts += 1;

            if candidate.is_finite() {
                tour = Some(candidate);
                break;
            }

            // A fixed start is deterministic; retrying cannot help.
            if config.start.is_some() {
                break;
            }
        }

        GreedyResult {
            tour,
            attempts,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}
