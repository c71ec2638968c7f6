//! Action vocabulary per task category.
//!
//! E-commerce candidates depend on the steps already taken; every other
//! category offers the same list regardless of the partial plan.

use crate::category::TaskCategory;
use crate::state::PlanningState;

pub const SEARCH_PRIMARY_PLATFORM: &str = "Search Primary Platform";
pub const SEARCH_SECONDARY_PLATFORM: &str = "Search Secondary Platform";
pub const IDENTIFY_PRODUCT_CATEGORY: &str = "Identify Product Category";
pub const PLAN_SEARCH_STRATEGY: &str = "Plan Search Strategy";
pub const EXTRACT_PRODUCT_DETAILS: &str = "Extract Product Details";
pub const VERIFY_PRODUCT_MATCH: &str = "Verify Product Match";
pub const COMPARE_PRICES: &str = "Compare Prices";
pub const ANALYZE_REVIEWS: &str = "Analyze Reviews";
pub const ANALYZE_CUSTOMER_REVIEWS: &str = "Analyze Customer Reviews";
pub const CHECK_AVAILABILITY: &str = "Check Availability";
pub const FINALIZE_RECOMMENDATION: &str = "Finalize Recommendation";

pub const RESEARCH_DESTINATIONS: &str = "Research Destinations";
pub const RESEARCH_OPTIONS: &str = "Research Options";
pub const COMPARE_OPTIONS: &str = "Compare Options";
pub const CREATE_ITINERARY: &str = "Create Itinerary";
pub const FINALIZE_PLAN: &str = "Finalize Plan";

pub const GATHER_INFORMATION: &str = "Gather Information";
pub const ANALYZE_DATA: &str = "Analyze Data";
pub const COMPARE_ALTERNATIVES: &str = "Compare Alternatives";
pub const DRAW_CONCLUSIONS: &str = "Draw Conclusions";
pub const PROVIDE_RECOMMENDATIONS: &str = "Provide Recommendations";

pub const RESEARCH_TOPIC: &str = "Research Topic";
pub const ANALYZE_OPTIONS: &str = "Analyze Options";
pub const ORGANIZE_RESULTS: &str = "Organize Results";

const ECOMMERCE_OPENING: &[&str] = &[
    SEARCH_PRIMARY_PLATFORM,
    IDENTIFY_PRODUCT_CATEGORY,
    PLAN_SEARCH_STRATEGY,
];
const ECOMMERCE_AFTER_PRIMARY: &[&str] = &[
    SEARCH_SECONDARY_PLATFORM,
    EXTRACT_PRODUCT_DETAILS,
    VERIFY_PRODUCT_MATCH,
];
const ECOMMERCE_AFTER_SEARCHES: &[&str] = &[
    EXTRACT_PRODUCT_DETAILS,
    COMPARE_PRICES,
    ANALYZE_REVIEWS,
    FINALIZE_RECOMMENDATION,
];
const ECOMMERCE_FOLLOW_UP: &[&str] = &[
    COMPARE_PRICES,
    ANALYZE_CUSTOMER_REVIEWS,
    CHECK_AVAILABILITY,
    FINALIZE_RECOMMENDATION,
];
const PLANNING_ACTIONS: &[&str] = &[
    RESEARCH_DESTINATIONS,
    CHECK_AVAILABILITY,
    COMPARE_OPTIONS,
    CREATE_ITINERARY,
    FINALIZE_PLAN,
];
const ANALYSIS_ACTIONS: &[&str] = &[
    GATHER_INFORMATION,
    ANALYZE_DATA,
    COMPARE_ALTERNATIVES,
    DRAW_CONCLUSIONS,
    PROVIDE_RECOMMENDATIONS,
];
const GENERAL_ACTIONS: &[&str] = &[
    RESEARCH_TOPIC,
    GATHER_INFORMATION,
    ANALYZE_OPTIONS,
    ORGANIZE_RESULTS,
    PROVIDE_RECOMMENDATIONS,
];

/// Whether a label is a platform-search style step.
pub fn is_search(action: &str) -> bool {
    action.contains("Search")
}

/// Ordered candidate actions for the next step of `state`.
pub fn candidate_actions(state: &PlanningState) -> Vec<String> {
    action_list(state)
        .iter()
        .map(|action| action.to_string())
        .collect()
}

fn action_list(state: &PlanningState) -> &'static [&'static str] {
    match state.category() {
        TaskCategory::Ecommerce => ecommerce_actions(state),
        TaskCategory::Planning => PLANNING_ACTIONS,
        TaskCategory::Analysis => ANALYSIS_ACTIONS,
        TaskCategory::General => GENERAL_ACTIONS,
    }
}

fn ecommerce_actions(state: &PlanningState) -> &'static [&'static str] {
    let steps = state.steps();
    if steps.is_empty() {
        ECOMMERCE_OPENING
    } else if state.contains(SEARCH_PRIMARY_PLATFORM) {
        ECOMMERCE_AFTER_PRIMARY
    } else if steps.iter().filter(|s| is_search(s)).count() >= 2 {
        ECOMMERCE_AFTER_SEARCHES
    } else {
        ECOMMERCE_FOLLOW_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ecommerce_opening_and_after_primary() {
        let root = PlanningState::new("compare price of a 55 inch TV");
        assert_eq!(
            candidate_actions(&root),
            labels(&[
                "Search Primary Platform",
                "Identify Product Category",
                "Plan Search Strategy"
            ])
        );

        let next = root.with_action(SEARCH_PRIMARY_PLATFORM);
        assert_eq!(
            candidate_actions(&next),
            labels(&[
                "Search Secondary Platform",
                "Extract Product Details",
                "Verify Product Match"
            ])
        );
    }

    #[test]
    fn test_ecommerce_follow_up_branches() {
        let root = PlanningState::new("buy running shoes");

        let identified = root.with_action(IDENTIFY_PRODUCT_CATEGORY);
        assert_eq!(candidate_actions(&identified), labels(ECOMMERCE_FOLLOW_UP));

        // Two searches without the primary platform.
        let searched = root
            .with_action(PLAN_SEARCH_STRATEGY)
            .with_action(SEARCH_SECONDARY_PLATFORM);
        assert_eq!(candidate_actions(&searched), labels(ECOMMERCE_AFTER_SEARCHES));
    }

    #[test]
    fn test_other_categories_ignore_steps() {
        let general = PlanningState::new("write a cover letter");
        let expected = labels(&[
            "Research Topic",
            "Gather Information",
            "Analyze Options",
            "Organize Results",
            "Provide Recommendations",
        ]);
        assert_eq!(candidate_actions(&general), expected);
        let deeper = general
            .with_action(RESEARCH_TOPIC)
            .with_action(PROVIDE_RECOMMENDATIONS);
        assert_eq!(candidate_actions(&deeper), expected);

        let planning = PlanningState::new("plan a trip to Kyoto");
        assert_eq!(candidate_actions(&planning), labels(PLANNING_ACTIONS));
        assert_eq!(
            candidate_actions(&planning.with_action(FINALIZE_PLAN)),
            labels(PLANNING_ACTIONS)
        );

        let analysis = PlanningState::new("analyze survey data");
        assert_eq!(candidate_actions(&analysis), labels(ANALYSIS_ACTIONS));
    }

    #[test]
    fn test_lists_are_never_empty() {
        let tasks = ["buy a phone", "plan a trip", "study data", "hello"];
        for task in tasks {
            let mut state = PlanningState::new(task);
            for _ in 0..4 {
                let actions = candidate_actions(&state);
                assert!(!actions.is_empty());
                state = state.with_action(&actions[actions.len() - 1]);
            }
        }
    }
}
