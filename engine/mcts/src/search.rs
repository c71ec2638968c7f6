//! MCTS search implementation.
//!
//! Each simulation runs four phases against the arena tree:
//! 1. Selection: descend with UCB1 while nodes are fully expanded
//! 2. Expansion: add one child for an untried action
//! 3. Rollout: play the policy forward to a terminal state and score it
//! 4. Backpropagation: add the reward to every node on the path

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::MctsConfig;
use crate::node::{NodeId, NodePhase};
use crate::policy::DomainPolicy;
use crate::tree::{MctsTree, TreeStats};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    /// Root child chosen by pure exploitation (None if the root never expanded)
    pub best_child: Option<NodeId>,

    /// Action leading to `best_child`
    pub action: Option<A>,

    /// Best complete state found through `best_child`
    pub plan: S,

    /// Policy score of `plan`
    pub plan_score: f64,

    /// Mean reward of `best_child`
    pub value: f64,

    /// Number of simulations performed (root visits)
    pub simulations: u32,

    /// Shape of the tree when the search ended
    pub stats: TreeStats,
}

/// MCTS search state for a single request. The tree is dropped with it.
pub struct MctsSearch<'a, P: DomainPolicy> {
    tree: MctsTree<P::State, P::Action>,
    policy: &'a P,
    config: MctsConfig,
}

impl<'a, P: DomainPolicy> MctsSearch<'a, P> {
    /// Create a new search rooted at `root_state`.
    pub fn new(policy: &'a P, config: MctsConfig, root_state: P::State) -> Result<Self, SearchError> {
        config.validate()?;
        let root_terminal = policy.is_dead_end(&root_state);
        Ok(Self {
            tree: MctsTree::new(root_state, root_terminal),
            policy,
            config,
        })
    }

    /// Run the configured number of simulations and extract the result.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> SearchResult<P::State, P::Action> {
        for _ in 0..self.config.num_simulations {
            self.simulate(rng);
        }

        let root_id = self.tree.root();
        let best_child = self
            .tree
            .select_child(root_id, self.config.final_exploration);

        let (plan, plan_score, value, action) = match best_child {
            Some(child_id) => {
                let child = self.tree.get(child_id);
                let (score, plan) = child.best_plan.clone().unwrap_or_else(|| {
                    let plan = child.state.clone();
                    (self.policy.score(&plan), plan)
                });
                (plan, score, child.mean_value(), child.action.clone())
            }
            None => {
                warn!(
                    simulations = self.config.num_simulations,
                    "Root has no children, returning the root state"
                );
                let plan = self.tree.get(root_id).state.clone();
                let score = self.policy.score(&plan);
                (plan, score, 0.0, None)
            }
        };

        SearchResult {
            best_child,
            action,
            plan,
            plan_score,
            value,
            simulations: self.tree.get(root_id).visit_count,
            stats: self.tree.stats(),
        }
    }

    /// Run a single simulation (select -> expand -> rollout -> backpropagate).
    pub fn simulate(&mut self, rng: &mut ChaCha20Rng) {
        let leaf_id = self.tree_policy(rng);
        let (reward, terminal_state) = self.rollout(leaf_id, rng);
        self.backpropagate(leaf_id, reward, &terminal_state);

        trace!(leaf = leaf_id.0, reward, "MCTS simulation complete");
    }

    /// Descend from the root until a node can be expanded or a terminal
    /// node is reached. Returns the freshly expanded child or the terminal.
    pub fn tree_policy(&mut self, rng: &mut ChaCha20Rng) -> NodeId {
        let mut current = self.tree.root();

        loop {
            if self.tree.get(current).is_terminal {
                return current;
            }
            if !self.is_fully_expanded(current) {
                return self.expand(current, rng);
            }
            match self
                .tree
                .select_child(current, self.config.exploration_constant)
            {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Candidate actions of a node that have not yet produced a child.
    pub fn untried_actions(&self, node_id: NodeId) -> Vec<P::Action> {
        let node = self.tree.get(node_id);
        self.policy
            .candidate_actions(&node.state)
            .into_iter()
            .filter(|action| !self.tree.has_child_for(node_id, action))
            .collect()
    }

    /// Whether every candidate action already has a child.
    pub fn is_fully_expanded(&self, node_id: NodeId) -> bool {
        self.untried_actions(node_id).is_empty()
    }

    /// Current expansion phase of a node.
    pub fn phase(&self, node_id: NodeId) -> NodePhase {
        let untried = self.untried_actions(node_id).len();
        self.tree.get(node_id).phase(untried)
    }

    /// Add one child for an untried action and return it.
    ///
    /// Returns `node_id` itself when nothing is left to try or the node is
    /// terminal.
    pub fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> NodeId {
        let node = self.tree.get(node_id);
        if node.is_terminal {
            return node_id;
        }

        let untried = self.untried_actions(node_id);
        let preferred = self.policy.preferred_expansions(&node.state, &untried);
        let Some(action) = choose(&preferred, &untried, rng) else {
            return node_id;
        };

        let state = self.policy.transition(&node.state, &action);
        let is_terminal = self.policy.is_dead_end(&state);
        debug!(parent = node_id.0, ?action, is_terminal, "Expanding node");

        self.tree.add_child(node_id, action, state, is_terminal)
    }

    /// Select a child of `node_id` with UCB1.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        self.tree.select_child(node_id, exploration)
    }

    /// Play the policy forward from a node to a terminal state.
    /// Returns the terminal score and the terminal state.
    pub fn rollout(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> (f64, P::State) {
        let mut state = self.tree.get(node_id).state.clone();

        while !self.policy.is_terminal(&state) {
            let candidates = self.policy.candidate_actions(&state);
            let preferred = self.policy.preferred_rollout_actions(&state, &candidates);
            let Some(action) = choose(&preferred, &candidates, rng) else {
                warn!(?state, "No candidate actions for a non-terminal state, stopping rollout");
                break;
            };
            state = self.policy.transition(&state, &action);
        }

        (self.policy.score(&state), state)
    }

    /// Add a simulation result to `node_id` and all of its ancestors.
    pub fn backpropagate(&mut self, node_id: NodeId, reward: f64, terminal_state: &P::State) {
        self.tree.backpropagate(node_id, reward, terminal_state);
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<P::State, P::Action> {
        &self.tree
    }
}

/// Pick uniformly from `preferred`, or from `all` when `preferred` is empty.
fn choose<A: Clone>(preferred: &[A], all: &[A], rng: &mut ChaCha20Rng) -> Option<A> {
    let pool = if preferred.is_empty() { all } else { preferred };
    pool.choose(rng).cloned()
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<P: DomainPolicy>(
    policy: &P,
    config: MctsConfig,
    root_state: P::State,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    let mut search = MctsSearch::new(policy, config, root_state)?;
    Ok(search.run(rng))
}
