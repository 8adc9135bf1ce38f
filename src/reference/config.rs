//! Reference algorithm configuration.

use crate::error::{Error, Result};

/// Configuration for the greedy randomized baseline.
///
/// # Examples
///
/// ```
/// use maxclique::reference::ReferenceConfig;
///
/// let config = ReferenceConfig::default()
///     .with_agents(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceConfig {
    /// Number of independent agents to run.
    pub agents: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            agents: 10,
            seed: None,
        }
    }
}

impl ReferenceConfig {
    /// Sets the agent count.
    pub fn with_agents(mut self, agents: usize) -> Self {
        self.agents = agents;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.agents == 0 {
            return Err(Error::Config("agents must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReferenceConfig::default();
        assert_eq!(config.agents, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(ReferenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_agents() {
        let config = ReferenceConfig::default().with_agents(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
