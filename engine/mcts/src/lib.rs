//! Monte Carlo Tree Search (MCTS) planning engine.
//!
//! This crate provides a policy-agnostic MCTS implementation that works with
//! any domain implementing the [`DomainPolicy`] trait.
//!
//! # Overview
//!
//! MCTS builds a search tree by running simulations. Each simulation consists
//! of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCB1 to balance exploration and
//!    exploitation
//! 2. **Expansion**: Add one child for an action not yet tried at the node
//! 3. **Rollout**: Play the policy forward with random (optionally biased)
//!    choices until a terminal state, then score it
//! 4. **Backpropagation**: Update visit counts and total reward along the
//!    path from the new node to the root
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{run_mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let policy = MyPolicy::new();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = run_mcts(&policy, MctsConfig::default(), MyState::initial(), &mut rng)?;
//!
//! println!("First action: {:?}", result.action);
//! println!("Plan: {:?}", result.plan);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_simulations`: Number of simulations per search (default: 8)
//! - `exploration_constant`: UCB1 weight while descending (default: 1.4)
//! - `final_exploration`: UCB1 weight for the final root choice (default: 0.0)
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      MctsSearch                       │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌─────────────┐          ┌─────────────────────────┐ │
//! │  │  MctsTree   │          │      DomainPolicy       │ │
//! │  │  (arena)    │          │ (actions/transition/    │ │
//! │  └──────┬──────┘          │  terminal/score)        │ │
//! │         │                 └────────────┬────────────┘ │
//! │         ▼                              ▼              │
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │   select → expand → rollout → backpropagate     │  │
//! │  └─────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId, NodePhase};
pub use policy::DomainPolicy;
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
