//! Configuration for the planner CLI
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use once_cell::sync::Lazy;
use std::time::Duration;
use task_planner::PlannerConfig;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_num_simulations() -> u32 {
    CENTRAL_CONFIG.mcts.num_simulations
}

fn default_max_depth() -> u32 {
    CENTRAL_CONFIG.mcts.max_depth
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.mcts.seed
}

fn default_min_interval_ms() -> u64 {
    CENTRAL_CONFIG.rate_limit.min_interval_ms
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "planner")]
#[command(about = "Plan the steps of a task with Monte Carlo Tree Search")]
#[command(
    long_about = "Turns a task description into an ordered list of steps by running
a fixed number of MCTS simulations over partial plans.

Configuration is loaded from config.toml with PLANNER_<SECTION>_<KEY>
environment variable overrides. CLI arguments take highest priority."
)]
pub struct Config {
    /// Task description to plan for
    #[arg(required = true)]
    pub task: Vec<String>,

    /// Number of MCTS simulations
    #[arg(long, short = 'n', default_value_t = default_num_simulations())]
    pub num_simulations: u32,

    /// Number of steps in the plan
    #[arg(long, default_value_t = default_max_depth())]
    pub max_depth: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration_constant: f64,

    /// RNG seed (0 seeds from entropy)
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Minimum milliseconds between plan transitions
    #[arg(long, default_value_t = default_min_interval_ms())]
    pub min_interval_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.task_text().trim().is_empty() {
            return Err(anyhow!("task cannot be empty"));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(anyhow!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Task words joined back into one description.
    pub fn task_text(&self) -> String {
        self.task.join(" ")
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    pub fn planner_config(&self) -> PlannerConfig {
        let mut config = PlannerConfig::default()
            .with_simulations(self.num_simulations)
            .with_max_depth(self.max_depth);
        config.search = config.search.with_exploration(self.exploration_constant);
        if self.seed != 0 {
            config = config.with_seed(self.seed);
        }
        config
    }
}
