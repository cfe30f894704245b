//! Construction-time configuration for a labeled graph

/// Capacity hints applied when a graph is built.
///
/// Hints only pre-size storage; they never change what the graph accepts or
/// returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Initial capacity of the adjacency map (number of nodes)
    pub node_capacity: usize,
    /// Initial capacity of each new node's outgoing edge set
    pub edges_per_node: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the adjacency map for `capacity` nodes
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Pre-size every new node's outgoing set for `capacity` edges
    pub fn with_edges_per_node(mut self, capacity: usize) -> Self {
        self.edges_per_node = capacity;
        self
    }
}
