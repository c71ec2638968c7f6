//! Task-planning domain policy for the MCTS engine.

use std::sync::Arc;

use mcts::DomainPolicy;

use crate::actions::{candidate_actions, is_search};
use crate::rate_limit::RateLimiter;
use crate::scoring;
use crate::state::PlanningState;

/// Depth below which search-biased expansion favours search actions.
const EARLY_SEARCH_DEPTH: u32 = 2;

/// Rollout keywords favoured for search-biased tasks.
const SEARCH_ROLLOUT_KEYWORDS: &[&str] = &["Search", "Compare", "Extract", "Analyze"];

/// Policy driving plan search: keyword-based action lists, a fixed plan
/// length and the heuristic plan score. Every transition is paced by the
/// shared [`RateLimiter`].
#[derive(Debug, Clone)]
pub struct TaskPolicy {
    max_depth: u32,
    rate_limiter: Arc<RateLimiter>,
}

impl TaskPolicy {
    pub fn new(max_depth: u32, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            max_depth,
            rate_limiter,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }
}

/// Options whose label is not already part of the plan.
fn fresh(state: &PlanningState, options: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|action| !state.contains(action))
        .cloned()
        .collect()
}

impl DomainPolicy for TaskPolicy {
    type State = PlanningState;
    type Action = String;

    fn candidate_actions(&self, state: &PlanningState) -> Vec<String> {
        candidate_actions(state)
    }

    fn transition(&self, state: &PlanningState, action: &String) -> PlanningState {
        self.rate_limiter.wait();
        state.with_action(action)
    }

    fn is_terminal(&self, state: &PlanningState) -> bool {
        state.depth() >= self.max_depth
    }

    fn score(&self, state: &PlanningState) -> f64 {
        scoring::score(state)
    }

    fn preferred_expansions(&self, state: &PlanningState, untried: &[String]) -> Vec<String> {
        let fresh = fresh(state, untried);
        if state.search_bias() && state.depth() < EARLY_SEARCH_DEPTH {
            let searches: Vec<String> = fresh.iter().filter(|a| is_search(a)).cloned().collect();
            if !searches.is_empty() {
                return searches;
            }
        }
        fresh
    }

    fn preferred_rollout_actions(
        &self,
        state: &PlanningState,
        candidates: &[String],
    ) -> Vec<String> {
        let fresh = fresh(state, candidates);
        if state.search_bias() {
            let focused: Vec<String> = fresh
                .iter()
                .filter(|a| SEARCH_ROLLOUT_KEYWORDS.iter().any(|k| a.contains(k)))
                .cloned()
                .collect();
            if !focused.is_empty() {
                return focused;
            }
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::*;

    fn policy() -> TaskPolicy {
        TaskPolicy::new(3, Arc::new(RateLimiter::disabled()))
    }

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_terminal_at_max_depth() {
        let policy = policy();
        let mut state = PlanningState::new("write a poem");
        for action in [RESEARCH_TOPIC, ORGANIZE_RESULTS] {
            state = policy.transition(&state, &action.to_string());
            assert!(!policy.is_terminal(&state));
        }
        state = policy.transition(&state, &PROVIDE_RECOMMENDATIONS.to_string());
        assert!(policy.is_terminal(&state));
        assert_eq!(state.depth(), 3);
    }

    #[test]
    fn test_transition_uses_limiter() {
        let limiter = Arc::new(RateLimiter::new(std::time::Duration::from_millis(20)));
        let policy = TaskPolicy::new(3, Arc::clone(&limiter));
        let root = PlanningState::new("write a poem");

        let start = std::time::Instant::now();
        let a = policy.transition(&root, &RESEARCH_TOPIC.to_string());
        let b = policy.transition(&root, &RESEARCH_TOPIC.to_string());
        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
        assert_eq!(a, b);
    }

    #[test]
    fn test_expansion_prefers_unused_labels() {
        let policy = policy();
        let state = PlanningState::new("write a poem").with_action(RESEARCH_TOPIC);
        let untried = policy.candidate_actions(&state);

        let preferred = policy.preferred_expansions(&state, &untried);
        assert_eq!(preferred.len(), 4);
        assert!(!preferred.contains(&RESEARCH_TOPIC.to_string()));
    }

    #[test]
    fn test_ecommerce_expansion_prefers_searches_early() {
        let policy = policy();
        let root = PlanningState::new("compare price of a blender");
        let untried = policy.candidate_actions(&root);

        assert_eq!(
            policy.preferred_expansions(&root, &untried),
            labels(&[SEARCH_PRIMARY_PLATFORM, PLAN_SEARCH_STRATEGY])
        );

        let deep = root
            .with_action(IDENTIFY_PRODUCT_CATEGORY)
            .with_action(CHECK_AVAILABILITY);
        let untried = policy.candidate_actions(&deep);
        assert_eq!(
            policy.preferred_expansions(&deep, &untried),
            labels(&[COMPARE_PRICES, ANALYZE_CUSTOMER_REVIEWS, FINALIZE_RECOMMENDATION])
        );
    }

    #[test]
    fn test_ecommerce_rollout_focus() {
        let policy = policy();
        let state = PlanningState::new("buy a desk").with_action(IDENTIFY_PRODUCT_CATEGORY);
        let candidates = policy.candidate_actions(&state);

        assert_eq!(
            policy.preferred_rollout_actions(&state, &candidates),
            labels(&[COMPARE_PRICES, ANALYZE_CUSTOMER_REVIEWS])
        );
    }

    #[test]
    fn test_purchase_task_has_no_search_bias() {
        let policy = policy();
        let root = PlanningState::new("purchase a sofa");
        let untried = policy.candidate_actions(&root);

        assert_eq!(
            policy.preferred_expansions(&root, &untried),
            labels(&[SEARCH_PRIMARY_PLATFORM, IDENTIFY_PRODUCT_CATEGORY, PLAN_SEARCH_STRATEGY])
        );

        let state = root.with_action(IDENTIFY_PRODUCT_CATEGORY);
        let candidates = policy.candidate_actions(&state);
        assert_eq!(
            policy.preferred_rollout_actions(&state, &candidates),
            labels(&[
                COMPARE_PRICES,
                ANALYZE_CUSTOMER_REVIEWS,
                CHECK_AVAILABILITY,
                FINALIZE_RECOMMENDATION
            ])
        );
    }

    #[test]
    fn test_price_task_has_search_bias() {
        let policy = policy();
        let root = PlanningState::new("find the best price on a laptop");
        let untried = policy.candidate_actions(&root);

        assert_eq!(
            policy.preferred_expansions(&root, &untried),
            labels(&[SEARCH_PRIMARY_PLATFORM, PLAN_SEARCH_STRATEGY])
        );
    }

    #[test]
    fn test_general_rollout_prefers_fresh() {
        let policy = policy();
        let state = PlanningState::new("write a poem")
            .with_action(RESEARCH_TOPIC)
            .with_action(GATHER_INFORMATION);
        let candidates = policy.candidate_actions(&state);

        assert_eq!(
            policy.preferred_rollout_actions(&state, &candidates),
            labels(&[ANALYZE_OPTIONS, ORGANIZE_RESULTS, PROVIDE_RECOMMENDATIONS])
        );
    }
}
