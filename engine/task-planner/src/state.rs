//! Partial plan state.

use std::sync::Arc;

use crate::category::{ScoreTable, TaskCategory, TaskProfile};

/// Immutable partial plan for one task.
///
/// `depth` always equals `steps.len()`; new states only come from
/// [`PlanningState::with_action`], which copies the steps and appends one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningState {
    task: Arc<str>,
    profile: TaskProfile,
    steps: Vec<String>,
    depth: u32,
}

impl PlanningState {
    /// Empty plan for `task`. The task is classified once here.
    pub fn new(task: &str) -> Self {
        Self {
            task: Arc::from(task),
            profile: TaskProfile::classify(task),
            steps: Vec::new(),
            depth: 0,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn category(&self) -> TaskCategory {
        self.profile.category
    }

    pub fn score_table(&self) -> ScoreTable {
        self.profile.score_table
    }

    /// Whether expansion and rollouts favour search-style actions.
    pub fn search_bias(&self) -> bool {
        self.profile.search_bias
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn last_action(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.steps.iter().any(|step| step == action)
    }

    /// Successor state with `action` appended.
    pub fn with_action(&self, action: &str) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(action.to_string());
        Self {
            task: Arc::clone(&self.task),
            profile: self.profile,
            steps,
            depth: self.depth + 1,
        }
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}
