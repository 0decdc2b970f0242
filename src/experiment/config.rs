//! Experiment configuration.

use crate::exact::MAX_EXACT_CITIES;
use crate::instance::DEFAULT_COORDINATE_LIMIT;

/// Configuration for a timing sweep.
///
/// # Examples
///
/// ```
/// use u_tsp::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_exact_sizes(vec![4, 6, 8])
///     .with_approximate_sizes(vec![10, 100])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.coordinate_limit, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Instance sizes for the Held-Karp sweep.
    ///
    /// Cost doubles with every extra city; keep these small.
    pub exact_sizes: Vec<usize>,

    /// Instance sizes for the MST approximation sweep.
    pub approximate_sizes: Vec<usize>,

    /// Cities are sampled from `[0, coordinate_limit)²`.
    pub coordinate_limit: f64,

    /// Base random seed. Size `i` of a sweep uses `seed + i`.
    pub seed: Option<u64>,

    /// Whether to solve the instances of a sweep in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. Concurrent instances
    /// compete for cores, so elapsed times are less representative.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            exact_sizes: (4..=16).collect(),
            approximate_sizes: vec![10, 50, 100, 200, 400],
            coordinate_limit: DEFAULT_COORDINATE_LIMIT,
            seed: None,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    pub fn with_exact_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.exact_sizes = sizes;
        self
    }

    pub fn with_approximate_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.approximate_sizes = sizes;
        self
    }

    pub fn with_coordinate_limit(mut self, limit: f64) -> Self {
        self.coordinate_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.coordinate_limit.is_finite() && self.coordinate_limit > 0.0) {
            return Err(format!(
                "coordinate_limit must be positive and finite, got {}",
                self.coordinate_limit
            ));
        }
        if let Some(&n) = self.exact_sizes.iter().find(|&&n| n > MAX_EXACT_CITIES) {
            return Err(format!(
                "exact size {n} exceeds the exact solver limit of {MAX_EXACT_CITIES}"
            ));
        }
        if self.approximate_sizes.contains(&0) {
            return Err("approximate sizes must be at least 1".into());
        }
        Ok(())
    }
}
