//! Core graph data structures

mod config;
mod digraph;
mod edge;
#[cfg(test)]
mod invariant;
mod node;


pub use config::GraphConfig;
pub use digraph::{GraphError, GraphResult, LabeledGraph};
pub use edge::LabeledEdge;
#[cfg(test)]
pub(crate) use invariant::InvariantViolation;
pub use node::{EdgeLabel, GraphNode};
