//! Keyword classification of task descriptions.
//!
//! Three independent keyword sets are applied to the lowercased task:
//! one picks the action vocabulary ([`TaskCategory`]), one picks the score
//! weights ([`ScoreTable`]) and one switches on the search-first bias for
//! shopping tasks. The sets overlap but are not equal, so "book a hotel"
//! gets planning actions with general weights, and "purchase a sofa" gets
//! e-commerce actions without the search bias.

use serde::Serialize;
use std::fmt;

const ECOMMERCE_KEYWORDS: &[&str] = &["buy", "purchase", "shop", "compare", "product", "price"];
const PLANNING_KEYWORDS: &[&str] = &["plan", "book", "schedule", "trip", "itinerary"];
const ANALYSIS_KEYWORDS: &[&str] = &["analyze", "data", "research", "study", "compare"];

const ECOMMERCE_SCORE_KEYWORDS: &[&str] = &["buy", "purchase", "shop", "compare"];
const PLANNING_SCORE_KEYWORDS: &[&str] = &["plan", "trip", "schedule"];

const SEARCH_BIAS_KEYWORDS: &[&str] = &["buy", "compare", "price"];

fn mentions(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Kind of task, which selects the action vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Ecommerce,
    Planning,
    Analysis,
    General,
}

impl TaskCategory {
    /// Classify a task by case-insensitive substring match.
    ///
    /// Categories are checked in declaration order, so "compare" makes a
    /// task e-commerce before it can make it analysis.
    pub fn classify(task: &str) -> Self {
        Self::from_lowercase(&task.to_lowercase())
    }

    fn from_lowercase(lower: &str) -> Self {
        if mentions(lower, ECOMMERCE_KEYWORDS) {
            TaskCategory::Ecommerce
        } else if mentions(lower, PLANNING_KEYWORDS) {
            TaskCategory::Planning
        } else if mentions(lower, ANALYSIS_KEYWORDS) {
            TaskCategory::Analysis
        } else {
            TaskCategory::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskCategory::Ecommerce => "ecommerce",
            TaskCategory::Planning => "planning",
            TaskCategory::Analysis => "analysis",
            TaskCategory::General => "general",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-action weight table of the plan score.
///
/// Analysis tasks have no table of their own and score with `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTable {
    Ecommerce,
    Planning,
    General,
}

impl ScoreTable {
    pub fn classify(task: &str) -> Self {
        Self::from_lowercase(&task.to_lowercase())
    }

    fn from_lowercase(lower: &str) -> Self {
        if mentions(lower, ECOMMERCE_SCORE_KEYWORDS) {
            ScoreTable::Ecommerce
        } else if mentions(lower, PLANNING_SCORE_KEYWORDS) {
            ScoreTable::Planning
        } else {
            ScoreTable::General
        }
    }
}

/// Everything derived from the task text, computed once per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProfile {
    pub category: TaskCategory,
    pub score_table: ScoreTable,
    /// Prefer search actions early and search/compare/extract/analyze
    /// actions in rollouts.
    pub search_bias: bool,
}

impl TaskProfile {
    pub fn classify(task: &str) -> Self {
        let lower = task.to_lowercase();
        Self {
            category: TaskCategory::from_lowercase(&lower),
            score_table: ScoreTable::from_lowercase(&lower),
            search_bias: mentions(&lower, SEARCH_BIAS_KEYWORDS),
        }
    }
}
