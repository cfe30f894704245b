//! LabeledGraph: the mutable directed labeled multigraph

use super::config::GraphConfig;
use super::edge::LabeledEdge;
use super::node::{EdgeLabel, GraphNode};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, enabled, trace, Level};

/// Errors that can occur in graph operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    #[error("Node already in graph: {0}")]
    DuplicateNode(String),

    #[error("Node not in graph: {0}")]
    UnknownNode(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// A mutable directed graph whose edges carry labels.
///
/// Each node maps to the set of its outgoing edges. Two nodes may be joined by
/// any number of edges as long as their labels differ; inserting an edge equal
/// to one already stored is a no-op. Nodes and edges are never removed.
///
/// Every query hands out either owned copies or shared borrows, so callers
/// cannot reach the internal sets mutably. There is no internal locking: share
/// the graph across threads only behind a lock of your own.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N, L> {
    /// Node -> outgoing edges
    adjacency: HashMap<N, HashSet<LabeledEdge<N, L>>>,
    /// Total stored edges across all nodes
    edge_count: usize,
    config: GraphConfig,
}

impl<N: GraphNode, L: EdgeLabel> Default for LabeledGraph<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GraphNode, L: EdgeLabel> LabeledGraph<N, L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph pre-sized for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self::with_config(GraphConfig::new().with_node_capacity(nodes))
    }

    /// Create an empty graph using the given capacity hints
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: HashMap::with_capacity(config.node_capacity),
            edge_count: 0,
            config,
        }
    }

    /// The configuration this graph was built with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== Mutation ====================

    /// Add a node with no outgoing edges.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if an equal node is already
    /// present; the graph is left unchanged in that case.
    pub fn add_node(&mut self, node: N) -> GraphResult<()> {
        if self.adjacency.contains_key(&node) {
            debug!("graph: rejected duplicate node {:?}", node);
            return Err(GraphError::DuplicateNode(format!("{:?}", node)));
        }
        debug!("graph: added node {:?}", node);
        let outgoing = self.empty_edge_set();
        self.adjacency.insert(node, outgoing);
        Ok(())
    }

    /// Add the edge `from -[label]-> to`.
    ///
    /// `from` must already be in the graph. If `to` is not, it is added with
    /// no outgoing edges. Returns `true` if the edge is new and `false` if an
    /// equal edge was already stored, in which case nothing changes.
    pub fn add_edge(&mut self, from: N, to: N, label: L) -> GraphResult<bool> {
        let new_destination = (!self.adjacency.contains_key(&to)).then(|| to.clone());

        let Some(outgoing) = self.adjacency.get_mut(&from) else {
            debug!("graph: rejected edge from unknown node {:?}", from);
            return Err(unknown_node(&from));
        };

        let edge = LabeledEdge::new(from, to, label);
        // Rendered before the move into the set, only when someone is listening
        let rendered = enabled!(Level::DEBUG).then(|| format!("{:?}", edge));
        let inserted = outgoing.insert(edge);
        if inserted {
            self.edge_count += 1;
        }
        if let Some(rendered) = rendered {
            if inserted {
                debug!("graph: added edge {}", rendered);
            } else {
                trace!("graph: edge {} already present", rendered);
            }
        }

        if let Some(to) = new_destination {
            debug!("graph: implicitly added destination node {:?}", to);
            let outgoing = self.empty_edge_set();
            self.adjacency.insert(to, outgoing);
        }
        Ok(inserted)
    }

    fn empty_edge_set(&self) -> HashSet<LabeledEdge<N, L>> {
        HashSet::with_capacity(self.config.edges_per_node)
    }

    // ==================== Queries ====================

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges across all nodes
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if `node` is in the graph
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// True if `edge` is stored among its source node's outgoing edges.
    ///
    /// An edge whose source is not in the graph is simply not contained.
    pub fn contains_edge(&self, edge: &LabeledEdge<N, L>) -> bool {
        self.adjacency
            .get(edge.from())
            .is_some_and(|outgoing| outgoing.contains(edge))
    }

    /// Iterate over every node, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Copy out every node, in no particular order
    pub fn list_nodes(&self) -> Vec<N> {
        self.nodes().cloned().collect()
    }

    /// Iterate over the outgoing edges of `node`
    pub fn children(&self, node: &N) -> GraphResult<impl Iterator<Item = &LabeledEdge<N, L>>> {
        self.adjacency
            .get(node)
            .map(|outgoing| outgoing.iter())
            .ok_or_else(|| unknown_node(node))
    }

    /// Copy out the outgoing edges of `node`
    pub fn list_children(&self, node: &N) -> GraphResult<Vec<LabeledEdge<N, L>>> {
        Ok(self.children(node)?.cloned().collect())
    }

    /// Number of outgoing edges of `node`
    pub fn out_degree(&self, node: &N) -> GraphResult<usize> {
        self.adjacency
            .get(node)
            .map(HashSet::len)
            .ok_or_else(|| unknown_node(node))
    }

    /// Iterate over every stored edge
    pub fn edges(&self) -> impl Iterator<Item = &LabeledEdge<N, L>> {
        self.adjacency.values().flatten()
    }

    // ==================== Self-check ====================

    /// Verify the representation invariants.
    ///
    /// Walks every stored edge, so it is only built for tests.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), super::InvariantViolation> {
        use super::InvariantViolation;

        let mut actual = 0;
        for (node, outgoing) in &self.adjacency {
            for edge in outgoing {
                if edge.from() != node {
                    return Err(InvariantViolation::MisplacedEdge {
                        node: format!("{:?}", node),
                        edge: format!("{:?}", edge),
                    });
                }
                if !self.adjacency.contains_key(edge.to()) {
                    return Err(InvariantViolation::DanglingDestination {
                        edge: format!("{:?}", edge),
                        to: format!("{:?}", edge.to()),
                    });
                }
            }
            actual += outgoing.len();
        }

        if actual != self.edge_count {
            return Err(InvariantViolation::EdgeCountMismatch {
                recorded: self.edge_count,
                actual,
            });
        }
        Ok(())
    }
}

fn unknown_node<N: GraphNode>(node: &N) -> GraphError {
    GraphError::UnknownNode(format!("{:?}", node))
}
