//! MCTS configuration parameters.

use crate::search::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of simulations to run per search.
    pub num_simulations: u32,

    /// UCB1 exploration constant used while descending the tree.
    /// Higher values favour rarely visited children.
    pub exploration_constant: f64,

    /// Exploration constant for the final choice at the root.
    /// 0.0 picks the child with the best average reward.
    pub final_exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 8,
            exploration_constant: 1.4,
            final_exploration: 0.0,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_simulations: 16,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Check that both exploration constants are usable in UCB1.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (name, value) in [
            ("exploration_constant", self.exploration_constant),
            ("final_exploration", self.final_exploration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.num_simulations, 8);
        assert!((config.exploration_constant - 1.4).abs() < 1e-12);
        assert!(config.final_exploration.abs() < 1e-12);
    }

    #[test]
    fn test_for_testing_config() {
        let config = MctsConfig::for_testing();
        assert_eq!(config.num_simulations, 16);
        assert!((config.exploration_constant - 1.4).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_simulations(100)
            .with_exploration(0.5);

        assert_eq!(config.num_simulations, 100);
        assert!((config.exploration_constant - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_negative_exploration() {
        let err = MctsConfig::default()
            .with_exploration(-1.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("exploration_constant"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = MctsConfig {
            final_exploration: f64::NAN,
            ..MctsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
