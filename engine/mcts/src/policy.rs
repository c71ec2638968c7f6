//! Domain policy trait.
//!
//! The policy supplies everything domain-specific to the search: which
//! actions exist in a state, how a state advances, when a state is final
//! and how good a final state is. The tree and search driver never look
//! inside a state themselves.

use std::fmt::Debug;

/// Capability interface injected into [`MctsSearch`](crate::MctsSearch).
///
/// Implementations must be deterministic in `candidate_actions`,
/// `transition`, `is_terminal` and `score`; the only randomness in a
/// search comes from the RNG passed to the driver.
pub trait DomainPolicy {
    /// Immutable domain state. New states come only from `transition`.
    type State: Clone + Debug;

    /// Action label applied to a state.
    type Action: Clone + PartialEq + Debug;

    /// Ordered candidate actions for the next step.
    ///
    /// An empty list for a non-terminal state makes the engine treat that
    /// state as terminal.
    fn candidate_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Produce the successor of `state` after applying `action`.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` ends a plan.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Heuristic reward for a completed state.
    fn score(&self, state: &Self::State) -> f64;

    /// Subset of `untried` to choose from first when expanding `state`.
    ///
    /// An empty result means no preference.
    fn preferred_expansions(
        &self,
        _state: &Self::State,
        _untried: &[Self::Action],
    ) -> Vec<Self::Action> {
        Vec::new()
    }

    /// Subset of `candidates` to choose from first during a rollout.
    ///
    /// An empty result means no preference.
    fn preferred_rollout_actions(
        &self,
        _state: &Self::State,
        _candidates: &[Self::Action],
    ) -> Vec<Self::Action> {
        Vec::new()
    }

    /// Terminal test including the empty-action fallback.
    fn is_dead_end(&self, state: &Self::State) -> bool {
        self.is_terminal(state) || self.candidate_actions(state).is_empty()
    }
}
