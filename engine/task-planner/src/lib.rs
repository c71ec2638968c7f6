//! Task planning on top of the generic MCTS engine.
//!
//! Turns a free-text task description into an ordered list of action
//! labels. The task is classified by keyword into a [`TaskProfile`]: a
//! [`TaskCategory`] selecting the action vocabulary, a [`ScoreTable`]
//! selecting the weights of the heuristic score, and a search-bias flag for
//! shopping tasks. The [`mcts`] engine then searches over partial plans.
//!
//! # Usage
//!
//! ```rust,ignore
//! use task_planner::{Planner, PlannerConfig, RateLimiter};
//! use std::sync::Arc;
//!
//! let planner = Planner::new(
//!     PlannerConfig::default().with_seed(42),
//!     Arc::new(RateLimiter::disabled()),
//! );
//! let plan = planner.plan_task("Compare the price of a 4K monitor")?;
//! println!("{:?}", plan.steps);
//! ```
//!
//! The planner never executes actions and performs no I/O; the only
//! blocking point is the [`RateLimiter`] gating each transition.

pub mod actions;
pub mod category;
pub mod planner;
pub mod policy;
pub mod rate_limit;
pub mod scoring;
pub mod state;

pub use category::{ScoreTable, TaskCategory, TaskProfile};
pub use planner::{plan_steps, Plan, PlanError, Planner, PlannerConfig};
pub use policy::TaskPolicy;
pub use rate_limit::{shared_rate_limiter, RateLimiter};
pub use state::PlanningState;

#[cfg(test)]
mod tests;
