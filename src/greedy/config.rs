//! Greedy construction configuration.

/// Configuration parameters for greedy tour construction.
///
/// # Examples
///
/// ```
/// use tsp_bnb::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default()
///     .with_max_attempts(16)
///     .with_seed(42);
/// assert_eq!(config.max_attempts, 16);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Maximum number of construction attempts before giving up.
    ///
    /// Each attempt starts from a fresh random city (unless `start`
    /// is fixed). Only relevant when some attempts produce tours with
    /// infinite cost.
    pub max_attempts: usize,

    /// Wall-clock budget in milliseconds across all attempts.
    pub time_limit_ms: u64,

    /// Fixed start city index. `None` picks a random start per attempt.
    pub start: Option<usize>,

    /// Random seed for start selection (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_attempts: 64,
            time_limit_ms: 60_000,
            start: None,
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the maximum number of construction attempts.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Fixes the start city.
    pub fn with_start(mut self, city: usize) -> Self {
        self.start = Some(city);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be positive".into());
        }
        if self.time_limit_ms == 0 {
            return Err("time_limit_ms must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreedyConfig::default();
        assert_eq!(config.max_attempts, 64);
        assert_eq!(config.time_limit_ms, 60_000);
        assert!(config.start.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = GreedyConfig::default()
            .with_max_attempts(8)
            .with_time_limit_ms(500)
            .with_start(3)
            .with_seed(7);

        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.time_limit_ms, 500);
        assert_eq!(config.start, Some(3));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GreedyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = GreedyConfig::default().with_max_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GreedyConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
    }
}
