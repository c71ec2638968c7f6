//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared
//! by the planning library and the command-line front end.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`PLANNER_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! PLANNER_<SECTION>_<KEY>=value
//!
//! Examples:
//!     PLANNER_COMMON_LOG_LEVEL=debug
//!     PLANNER_MCTS_NUM_SIMULATIONS=32
//!     PLANNER_MCTS_MAX_DEPTH=4
//!     PLANNER_RATE_LIMIT_MIN_INTERVAL_MS=0
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
