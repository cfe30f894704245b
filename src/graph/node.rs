//! Bounds on the caller-supplied node and label types

use std::fmt::Debug;
use std::hash::Hash;

/// A value usable as a node in a [`LabeledGraph`](super::LabeledGraph).
///
/// Nodes are keyed by value equality, so two equal values are the same node.
/// `Clone` lets a node be stored both as an adjacency key and inside the
/// edges that reference it; `Debug` renders it into errors and log events.
///
/// Implemented for every type meeting the bounds.
pub trait GraphNode: Eq + Hash + Clone + Debug {}

impl<T> GraphNode for T where T: Eq + Hash + Clone + Debug {}

/// A value usable as an edge label.
///
/// Labels take part in edge equality, so they need the same bounds as nodes.
pub trait EdgeLabel: Eq + Hash + Clone + Debug {}

impl<T> EdgeLabel for T where T: Eq + Hash + Clone + Debug {}
