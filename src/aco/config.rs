//! ACO configuration and pheromone bounds.

use crate::error::{Error, Result};

/// Lower clamp for pheromone after evaporation.
///
/// Keeps every edge selectable forever: a zero floor would let the colony
/// permanently abandon parts of the graph.
pub const PHEROMONE_MIN: f64 = 0.01;

/// Upper clamp for pheromone, also the initial value on every edge.
pub const PHEROMONE_MAX: f64 = 5.0;

/// Configuration for the ACO search.
///
/// # Examples
///
/// ```
/// use maxclique::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iterations(200)
///     .with_ants(50)
///     .with_alpha(1.5)
///     .with_rho(0.99)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of colony iterations.
    pub iterations: usize,

    /// Ant population size per iteration.
    pub ants: usize,

    /// Selection sharpness: candidate weight is
    /// `pheromone_factor ^ alpha`. Must be positive; values above 1
    /// sharpen the bias toward high-pheromone candidates, values below 1
    /// flatten it.
    pub alpha: f64,

    /// Evaporation retention factor in `(0, 1]`: pheromone is multiplied
    /// by `rho` each iteration, so smaller values evaporate faster.
    /// `rho = 1` disables evaporation.
    pub rho: f64,

    /// Whether to construct the ants of one iteration in parallel
    /// using rayon.
    ///
    /// Requires the `parallel` cargo feature; ignored otherwise. Ant
    /// seeding is shared between the serial and parallel paths, so the
    /// two produce identical results.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            ants: 100,
            alpha: 2.0,
            rho: 0.995,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the ant population size.
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Sets the selection sharpness.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the evaporation retention factor.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Enables parallel ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Config("iterations must be at least 1".into()));
        }
        if self.ants == 0 {
            return Err(Error::Config("ants must be at least 1".into()));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(Error::Config(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        if !self.rho.is_finite() || self.rho <= 0.0 || self.rho > 1.0 {
            return Err(Error::Config(format!(
                "rho must be in (0, 1], got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
