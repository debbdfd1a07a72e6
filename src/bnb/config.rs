//! Branch-and-bound configuration.

/// Configuration for the branch-and-bound engine.
///
/// # Examples
///
/// ```
/// use tsp_bnb::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_time_limit_ms(5_000)
///     .with_start(0)
///     .with_seed(42);
/// assert_eq!(config.time_limit_ms, 5_000);
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Wall-clock budget in milliseconds. When it expires the engine
    /// returns its best incumbent; this is the normal time-boxed exit,
    /// not an error.
    pub time_limit_ms: u64,

    /// Root city of the search tree. `None` picks a random city.
    pub start: Option<usize>,

    /// Weight of the depth bias in the frontier ordering key
    /// `lower_bound - depth_weight * depth`.
    ///
    /// Larger values favor deeper (more complete) states, accelerating
    /// the discovery of full tours. This only shapes the expansion
    /// order; pruning always uses the raw lower bound, so any
    /// nonnegative finite value is correctness-neutral.
    pub depth_weight: f64,

    /// Attempt bound for the greedy seeding phase.
    pub greedy_attempts: usize,

    /// Random seed for start selection (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            start: None,
            depth_weight: 1.0,
            greedy_attempts: 64,
            seed: None,
        }
    }
}

impl BnbConfig {
    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Fixes the root city of the search tree.
    pub fn with_start(mut self, city: usize) -> Self {
        self.start = Some(city);
        self
    }

    /// Sets the depth-bias weight of the frontier ordering.
    pub fn with_depth_weight(mut self, weight: f64) -> Self {
        self.depth_weight = weight;
        self
    }

    /// Sets the attempt bound for greedy seeding.
    pub fn with_greedy_attempts(mut self, n: usize) -> Self {
        self.greedy_attempts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == 0 {
            return Err("time_limit_ms must be positive".into());
        }
        if !self.depth_weight.is_finite() || self.depth_weight < 0.0 {
            return Err(format!(
                "depth_weight must be finite and nonnegative, got {}",
                self.depth_weight
            ));
        }
        if self.greedy_attempts == 0 {
            return Err("greedy_attempts must be positive".into());
        }
        Ok(())
    }
}
