//! Planner - command-line front end for the MCTS task planner
//!
//! Reads a task description, runs one planning request and prints the
//! recommended steps, either as a numbered list or as JSON.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use task_planner::{Planner, RateLimiter};
use tracing::{error, info};

mod config;

use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let task = config.task_text();
    let rate_limiter = Arc::new(RateLimiter::new(config.min_interval()));
    let planner = Planner::new(config.planner_config(), rate_limiter);

    let plan = match planner.plan_task(&task) {
        Ok(plan) => plan,
        Err(e) => {
            error!("Planning failed: {}", e);
            return Err(e.into());
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("Task: {} ({})", plan.task, plan.category);
        for (i, step) in plan.steps.iter().enumerate() {
            println!("{:>2}. {}", i + 1, step);
        }
        println!("Score: {:.2} after {} simulations", plan.score, plan.simulations);
    }

    Ok(())
}
