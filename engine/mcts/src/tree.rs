//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Children are owned by the arena; the parent index is a plain back-link,
//! so the tree never forms an ownership cycle.

use crate::node::{parent_log_term, MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S, A> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S, A>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S: Clone, A: Clone + PartialEq> MctsTree<S, A> {
    /// Create a new tree holding only the root state.
    pub fn new(root_state: S, root_terminal: bool) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state, root_terminal)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S, A> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S, A> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<S, A>] {
        &self.nodes
    }

    /// Actions already expanded below a node, in insertion order.
    pub fn tried_actions(&self, node_id: NodeId) -> impl Iterator<Item = &A> {
        self.get(node_id).children.iter().map(|(action, _)| action)
    }

    /// Whether `action` already produced a child of `node_id`.
    pub fn has_child_for(&self, node_id: NodeId, action: &A) -> bool {
        self.tried_actions(node_id).any(|tried| tried == action)
    }

    /// Select the best child of a node using UCB1.
    ///
    /// Ties go to the child inserted first. With `exploration == 0.0` this
    /// is pure exploitation: the child with the highest average reward.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let log_term = parent_log_term(node.visit_count);

        let mut best: Option<(NodeId, f64)> = None;
        for (_, child_id) in &node.children {
            let score = self.get(*child_id).ucb_score(log_term, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((*child_id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: A, state: S, is_terminal: bool) -> NodeId {
        let child = MctsNode::new_child(parent_id, action.clone(), state, is_terminal);
        let child_id = self.allocate(child);

        self.get_mut(parent_id).children.push((action, child_id));

        child_id
    }

    /// Backpropagate a simulation result from a node to the root.
    ///
    /// Every node on the path gets exactly one visit and the full reward;
    /// rewards are not negated since planning is single-agent.
    pub fn backpropagate(&mut self, leaf_id: NodeId, reward: f64, terminal_state: &S) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record(reward, terminal_state);
            current_id = node.parent;
        }
    }

    /// Depth of a node below the root.
    pub fn depth_of(&self, node_id: NodeId) -> u32 {
        let mut depth = 0;
        let mut current = self.get(node_id).parent;
        while current.is_some() {
            depth += 1;
            current = self.get(current).parent;
        }
        depth
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_value(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if !node.is_expanded() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
