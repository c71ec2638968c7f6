//! End-to-end planning scenarios.

use super::*;
use crate::actions::*;
use mcts::{MctsConfig, MctsSearch};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use std::sync::Arc;

const GENERAL_LABELS: [&str; 5] = [
    RESEARCH_TOPIC,
    GATHER_INFORMATION,
    ANALYZE_OPTIONS,
    ORGANIZE_RESULTS,
    PROVIDE_RECOMMENDATIONS,
];

fn unpaced_policy(max_depth: u32) -> TaskPolicy {
    TaskPolicy::new(max_depth, Arc::new(RateLimiter::disabled()))
}

fn unpaced_planner(config: PlannerConfig) -> Planner {
    Planner::new(config, Arc::new(RateLimiter::disabled()))
}

fn assert_distinct(steps: &[String]) {
    let unique: HashSet<_> = steps.iter().collect();
    assert_eq!(unique.len(), steps.len(), "duplicate label in {steps:?}");
}

#[test]
fn test_general_scenario_plans() {
    let task = "Write a blog post about home gardening";
    assert_eq!(TaskCategory::classify(task), TaskCategory::General);

    let planner = unpaced_planner(PlannerConfig::default());
    let mut ends_with_recommendations = 0;

    for seed in 0..30 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let plan = planner.plan(task, &mut rng).unwrap();

        assert_eq!(plan.steps.len(), 3);
        assert_distinct(&plan.steps);
        for step in &plan.steps {
            assert!(GENERAL_LABELS.contains(&step.as_str()), "unexpected {step}");
        }
        if plan.steps[2] == PROVIDE_RECOMMENDATIONS {
            ends_with_recommendations += 1;
        }
    }

    assert!(
        ends_with_recommendations >= 8,
        "only {ends_with_recommendations} of 30 plans end with {PROVIDE_RECOMMENDATIONS}"
    );
}

#[test]
fn test_ecommerce_scenario_plans() {
    let task = "compare price of noise cancelling headphones";
    let planner = unpaced_planner(PlannerConfig::default());

    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let plan = planner.plan(task, &mut rng).unwrap();

        assert_eq!(plan.category, TaskCategory::Ecommerce);
        assert_eq!(plan.steps.len(), 3);
        assert_distinct(&plan.steps);
        assert!(
            [SEARCH_PRIMARY_PLATFORM, IDENTIFY_PRODUCT_CATEGORY, PLAN_SEARCH_STRATEGY]
                .contains(&plan.steps[0].as_str())
        );
        assert!((1.0..=10.0).contains(&plan.score));
    }
}

#[test]
fn test_every_category_returns_distinct_full_plans() {
    let tasks = [
        "buy a standing desk",
        "plan a three day trip to Lisbon",
        "analyze customer churn data",
        "draft a speech for a wedding",
    ];
    let planner = unpaced_planner(PlannerConfig::default());

    for task in tasks {
        for seed in 0..10 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let plan = planner.plan(task, &mut rng).unwrap();
            assert_eq!(plan.steps.len(), 3, "{task}");
            assert_distinct(&plan.steps);
        }
    }
}

#[test]
fn test_root_visits_equal_budget() {
    let policy = unpaced_policy(3);
    for budget in [1, 8, 40] {
        let mut rng = ChaCha20Rng::seed_from_u64(budget as u64);
        let config = MctsConfig::default().with_simulations(budget);
        let mut search =
            MctsSearch::new(&policy, config, PlanningState::new("plan a picnic")).unwrap();
        let result = search.run(&mut rng);

        let tree = search.tree();
        assert_eq!(tree.get(tree.root()).visit_count, budget);
        assert_eq!(result.simulations, budget);
    }
}

#[test]
fn test_tree_invariants_after_search() {
    let policy = unpaced_policy(3);
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let config = MctsConfig::default().with_simulations(120);
    let mut search =
        MctsSearch::new(&policy, config, PlanningState::new("buy a bike helmet")).unwrap();
    search.run(&mut rng);

    let tree = search.tree();
    for node in tree.arena() {
        assert_eq!(node.state.depth() as usize, node.state.steps().len());

        if node.is_terminal {
            assert_eq!(node.state.depth(), 3);
        }

        let tried: Vec<_> = node.children.iter().map(|(a, _)| a).collect();
        let unique: HashSet<_> = tried.iter().collect();
        assert_eq!(tried.len(), unique.len());

        for (action, child_id) in &node.children {
            let child = tree.get(*child_id);
            assert_eq!(child.state.last_action(), Some(action.as_str()));
            assert_eq!(child.state.depth(), node.state.depth() + 1);
        }
    }
}

#[test]
fn test_plan_steps_entry_point() {
    // One simulation keeps the paced transitions to a handful.
    let steps = plan_steps("summarise a meeting transcript", 1).unwrap();
    assert_eq!(steps.len(), central_config_depth());
    assert_distinct(&steps);
}

fn central_config_depth() -> usize {
    crate::planner::central_config().mcts.max_depth as usize
}
