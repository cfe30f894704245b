//! Labeled Graph: a mutable directed labeled multigraph
//!
//! A generic container mapping each node to the set of its outgoing labeled
//! edges. Nodes and labels are caller-supplied values compared by equality.
//!
//! # Core Concepts
//!
//! - **Nodes**: any `Eq + Hash + Clone + Debug` value; added explicitly, or
//!   implicitly as the destination of a new edge
//! - **Edges**: immutable `(from, to, label)` triples with structural equality;
//!   an edge equal to one already stored is not inserted twice
//! - **Growth only**: nodes and edges are never removed
//!
//! # Example
//!
//! ```
//! use labeled_graph::{LabeledEdge, LabeledGraph};
//!
//! let mut graph = LabeledGraph::new();
//! graph.add_node("A").unwrap();
//! graph.add_edge("A", "B", "x").unwrap();
//!
//! assert_eq!(graph.size(), 2);
//! assert!(graph.contains_edge(&LabeledEdge::new("A", "B", "x")));
//! ```

mod graph;

pub use graph::{
    EdgeLabel, GraphConfig, GraphError, GraphNode, GraphResult, LabeledEdge, LabeledGraph,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
