//! Representation invariants of a labeled graph.
//!
//! Only compiled into test builds. The test suite runs
//! [`LabeledGraph::check_invariants`](super::LabeledGraph::check_invariants)
//! after every mutation; nothing in the mutation path calls it.
//!
//! Node keys forming a set and per-node edge sets holding no duplicates are
//! guaranteed by the map and set types, and absent values cannot be stored
//! at all. The checks below cover what the storage layout cannot.

use thiserror::Error;

/// A broken representation invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum InvariantViolation {
    #[error("edge {edge} stored under node {node} but starts at another node")]
    MisplacedEdge { node: String, edge: String },

    #[error("edge {edge} points at node {to}, which is not in the graph")]
    DanglingDestination { edge: String, to: String },

    #[error("edge counter says {recorded} but {actual} edges are stored")]
    EdgeCountMismatch { recorded: usize, actual: usize },
}
