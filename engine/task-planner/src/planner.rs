//! Planning entry points.
//!
//! A [`Planner`] builds a fresh search tree per request, runs the configured
//! simulation budget and returns the recommended step sequence. Trees are
//! never shared or kept between requests.

use engine_config::{load_config, CentralConfig};
use mcts::{MctsConfig, MctsSearch, SearchError};
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::category::TaskCategory;
use crate::policy::TaskPolicy;
use crate::rate_limit::{shared_rate_limiter, RateLimiter};
use crate::state::PlanningState;

// Load central config once per process
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

pub(crate) fn central_config() -> &'static CentralConfig {
    &CENTRAL_CONFIG
}

/// Errors returned by planning requests.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// Settings for one planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Number of steps in a complete plan.
    pub max_depth: u32,

    /// Search budget and exploration constants.
    pub search: MctsConfig,

    /// Fixed RNG seed; None draws from entropy per request.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            search: MctsConfig::default(),
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Build from the central configuration file/env values.
    pub fn from_central(central: &CentralConfig) -> Self {
        Self {
            max_depth: central.mcts.max_depth,
            search: MctsConfig::default()
                .with_simulations(central.mcts.num_simulations)
                .with_exploration(central.mcts.exploration_constant),
            seed: central.mcts.fixed_seed(),
        }
    }

    /// Builder pattern: set the simulation budget.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.search = self.search.with_simulations(n);
        self
    }

    /// Builder pattern: set the plan length.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder pattern: fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A recommended plan for one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub task: String,
    pub category: TaskCategory,
    pub steps: Vec<String>,
    pub score: f64,
    pub simulations: u32,
}

/// Runs MCTS planning requests against a shared rate limiter.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    policy: TaskPolicy,
}

impl Planner {
    pub fn new(config: PlannerConfig, rate_limiter: Arc<RateLimiter>) -> Self {
        let policy = TaskPolicy::new(config.max_depth, rate_limiter);
        Self { config, policy }
    }

    /// Planner using the central configuration and the process-wide limiter.
    pub fn from_central() -> Self {
        Self::new(
            PlannerConfig::from_central(central_config()),
            shared_rate_limiter(),
        )
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan with an RNG from the configured seed, or from entropy.
    pub fn plan_task(&self, task: &str) -> Result<Plan, PlanError> {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        self.plan(task, &mut rng)
    }

    /// Plan with a caller-supplied RNG.
    pub fn plan(&self, task: &str, rng: &mut ChaCha20Rng) -> Result<Plan, PlanError> {
        let root = PlanningState::new(task);
        let category = root.category();
        debug!(
            %category,
            simulations = self.config.search.num_simulations,
            max_depth = self.config.max_depth,
            "Starting plan search"
        );

        let mut search = MctsSearch::new(&self.policy, self.config.search.clone(), root)?;
        let result = search.run(rng);

        info!(
            %category,
            steps = ?result.plan.steps(),
            score = result.plan_score,
            nodes = result.stats.total_nodes,
            "Plan ready"
        );

        Ok(Plan {
            task: task.to_string(),
            category,
            steps: result.plan.into_steps(),
            score: result.plan_score,
            simulations: result.simulations,
        })
    }
}

/// Plan `task` with `simulation_budget` simulations and return the steps.
///
/// Uses the central configuration for everything else and the process-wide
/// rate limiter.
pub fn plan_steps(task: &str, simulation_budget: u32) -> Result<Vec<String>, PlanError> {
    let config = PlannerConfig::from_central(central_config()).with_simulations(simulation_budget);
    let planner = Planner::new(config, shared_rate_limiter());
    Ok(planner.plan_task(task)?.steps)
}
