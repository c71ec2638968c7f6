//! MCTS tree node representation.
//!
//! Each node represents a domain state reached by applying an action to the
//! parent's state. Nodes store the visit statistics used for UCB1 selection
//! and the best complete plan discovered through them.

/// Small constant that keeps UCB1 finite for never-visited children.
pub const UCB_EPSILON: f64 = 1e-6;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Expansion phase of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePhase {
    Unexpanded,
    PartiallyExpanded,
    FullyExpanded,
    Terminal,
}

/// A node in the MCTS tree.
///
/// The parent link is an arena index, never an owning pointer: children are
/// owned by the arena and listed in `children`, the parent is only followed
/// during backpropagation.
#[derive(Debug, Clone)]
pub struct MctsNode<S, A> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led to this node from parent (None for root)
    pub action: Option<A>,

    /// Domain state at this node
    pub state: S,

    /// Number of completed simulations that passed through this node
    pub visit_count: u32,

    /// Sum of rewards backpropagated through this node.
    pub total_reward: f64,

    /// Whether this state ends the search (max depth or no actions left)
    pub is_terminal: bool,

    /// Children: Vec of (action, NodeId) pairs, in insertion order.
    pub children: Vec<(A, NodeId)>,

    /// Highest-scoring terminal state reached by a simulation through this node.
    pub best_plan: Option<(f64, S)>,
}

impl<S, A> MctsNode<S, A> {
    /// Create a new root node.
    pub fn new_root(state: S, is_terminal: bool) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            state,
            visit_count: 0,
            total_reward: 0.0,
            is_terminal,
            children: Vec::new(),
            best_plan: None,
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: A, state: S, is_terminal: bool) -> Self {
        Self {
            parent,
            action: Some(action),
            state,
            visit_count: 0,
            total_reward: 0.0,
            is_terminal,
            children: Vec::new(),
            best_plan: None,
        }
    }

    /// Mean reward `total_reward / visit_count`, 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_reward / self.visit_count as f64
        }
    }

    /// UCB1 score used by the parent when choosing among its children.
    ///
    /// `q/(n+eps) + c * sqrt(2 * ln(N_parent + 1) / (n+eps))`
    ///
    /// Takes the pre-computed `2 * ln(N_parent + 1)` so the logarithm is
    /// evaluated once per selection rather than once per child.
    #[inline]
    pub fn ucb_score(&self, parent_log_term: f64, exploration: f64) -> f64 {
        let n = self.visit_count as f64 + UCB_EPSILON;
        let exploit = self.total_reward / n;
        let explore = exploration * (parent_log_term / n).sqrt();
        exploit + explore
    }

    /// UCB1 score computing the parent term internally.
    #[inline]
    pub fn ucb_score_with_parent_visits(&self, parent_visits: u32, exploration: f64) -> f64 {
        self.ucb_score(parent_log_term(parent_visits), exploration)
    }

    /// Check if this node has any children yet.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Phase of the node given how many actions are still untried.
    pub fn phase(&self, untried: usize) -> NodePhase {
        if self.is_terminal {
            NodePhase::Terminal
        } else if untried == 0 {
            NodePhase::FullyExpanded
        } else if self.children.is_empty() {
            NodePhase::Unexpanded
        } else {
            NodePhase::PartiallyExpanded
        }
    }

    /// Record a simulation result: one visit, its reward and its terminal
    /// state if it beats the best plan seen so far.
    pub(crate) fn record(&mut self, reward: f64, terminal: &S)
    where
        S: Clone,
    {
        self.visit_count += 1;
        self.total_reward += reward;
        let improves = match &self.best_plan {
            Some((best, _)) => reward > *best,
            None => true,
        };
        if improves {
            self.best_plan = Some((reward, terminal.clone()));
        }
    }
}

/// `2 * ln(parent_visits + 1)`, the parent half of the UCB1 exploration term.
#[inline]
pub fn parent_log_term(parent_visits: u32) -> f64 {
    2.0 * (parent_visits as f64 + 1.0).ln()
}
