//! Heuristic plan score.
//!
//! The score is a pure function of the weight table and the step sequence:
//! base 5.0, per-action bonuses from the table, ordering bonuses,
//! penalties for repeats and overly long plans, clamped to [1.0, 10.0].

use std::collections::HashSet;

use crate::actions::*;
use crate::category::ScoreTable;
use crate::state::PlanningState;

pub const BASE_SCORE: f64 = 5.0;
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

const REPEAT_PENALTY: f64 = 3.0;
const LONG_PLAN_PENALTY: f64 = 1.5;
const LONG_PLAN_STEPS: usize = 5;

const GOOD_FIRST_BONUS: f64 = 1.5;
const GOOD_LAST_BONUS: f64 = 2.5;
const COMPARE_IN_MIDDLE_BONUS: f64 = 1.5;
const SEARCH_FLOW_BONUS: f64 = 2.0;
const MULTI_SEARCH_BONUS: f64 = 3.0;

const GOOD_FIRST: &[&str] = &[
    SEARCH_PRIMARY_PLATFORM,
    RESEARCH_TOPIC,
    IDENTIFY_PRODUCT_CATEGORY,
];
const GOOD_LAST: &[&str] = &[
    FINALIZE_RECOMMENDATION,
    PROVIDE_RECOMMENDATIONS,
    FINALIZE_PLAN,
];

/// Score a (normally complete) plan.
pub fn score(state: &PlanningState) -> f64 {
    score_steps(state.score_table(), state.steps())
}

/// Score a step sequence with a weight table.
pub fn score_steps(table: ScoreTable, steps: &[String]) -> f64 {
    let mut score = BASE_SCORE;

    score += steps
        .iter()
        .map(|step| action_bonus(table, step))
        .sum::<f64>();

    if table == ScoreTable::Ecommerce {
        score += ecommerce_flow_bonus(steps);
    }

    let distinct: HashSet<&str> = steps.iter().map(String::as_str).collect();
    if distinct.len() != steps.len() {
        score -= REPEAT_PENALTY;
    }
    if steps.len() > LONG_PLAN_STEPS {
        score -= LONG_PLAN_PENALTY;
    }

    score += ordering_bonus(steps);

    score.clamp(MIN_SCORE, MAX_SCORE)
}

fn action_bonus(table: ScoreTable, action: &str) -> f64 {
    match table {
        ScoreTable::Ecommerce => match action {
            SEARCH_PRIMARY_PLATFORM | SEARCH_SECONDARY_PLATFORM => 2.0,
            EXTRACT_PRODUCT_DETAILS | COMPARE_PRICES => 2.5,
            ANALYZE_REVIEWS | ANALYZE_CUSTOMER_REVIEWS => 1.5,
            FINALIZE_RECOMMENDATION => 2.0,
            _ => 0.0,
        },
        ScoreTable::Planning => match action {
            RESEARCH_DESTINATIONS | RESEARCH_OPTIONS => 1.8,
            COMPARE_OPTIONS | CREATE_ITINERARY => 2.0,
            CHECK_AVAILABILITY | FINALIZE_PLAN => 1.5,
            _ => 0.0,
        },
        ScoreTable::General => match action {
            RESEARCH_TOPIC | GATHER_INFORMATION => 1.5,
            ANALYZE_OPTIONS | COMPARE_ALTERNATIVES => 1.8,
            PROVIDE_RECOMMENDATIONS => 2.0,
            _ => 0.0,
        },
    }
}

/// Search-first flow and multi-platform coverage.
fn ecommerce_flow_bonus(steps: &[String]) -> f64 {
    let mut bonus = 0.0;

    if steps.len() >= 2 && is_search(&steps[0]) {
        let compares_or_extracts = steps
            .iter()
            .any(|s| s.contains("Compare") || s.contains("Extract"));
        if compares_or_extracts {
            bonus += SEARCH_FLOW_BONUS;
        }
    }

    if steps.iter().filter(|s| is_search(s)).count() >= 2 {
        bonus += MULTI_SEARCH_BONUS;
    }

    bonus
}

fn ordering_bonus(steps: &[String]) -> f64 {
    let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
        return 0.0;
    };

    let mut bonus = 0.0;
    if GOOD_FIRST.contains(&first.as_str()) {
        bonus += GOOD_FIRST_BONUS;
    }
    if GOOD_LAST.contains(&last.as_str()) {
        bonus += GOOD_LAST_BONUS;
    }
    if steps.len() >= 3 && steps[1..steps.len() - 1].iter().any(|s| s.contains("Compare")) {
        bonus += COMPARE_IN_MIDDLE_BONUS;
    }
    bonus
}
