//! Immutable labeled edge between two nodes

use super::digraph::{GraphError, GraphResult};
use std::fmt;

/// A directed, labeled connection `from -[label]-> to`.
///
/// Edges are plain values: two edges are equal (and hash equally) iff their
/// source, destination, and label are all equal. There are no setters; an
/// edge is fully formed for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledEdge<N, L> {
    from: N,
    to: N,
    label: L,
}

impl<N, L> LabeledEdge<N, L> {
    /// Create a new edge
    pub fn new(from: N, to: N, label: L) -> Self {
        Self { from, to, label }
    }

    /// Build an edge from values that may be missing.
    ///
    /// This is the boundary for input that arrives as optional values. Every
    /// field is required, the label included.
    pub fn try_new(from: Option<N>, to: Option<N>, label: Option<L>) -> GraphResult<Self> {
        let from = from.ok_or(GraphError::InvalidArgument("edge source"))?;
        let to = to.ok_or(GraphError::InvalidArgument("edge destination"))?;
        let label = label.ok_or(GraphError::InvalidArgument("edge label"))?;
        Ok(Self::new(from, to, label))
    }

    /// Source node
    pub fn from(&self) -> &N {
        &self.from
    }

    /// Destination node
    pub fn to(&self) -> &N {
        &self.to
    }

    /// Edge label
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Take the edge apart into `(from, to, label)`
    pub fn into_parts(self) -> (N, N, L) {
        (self.from, self.to, self.label)
    }
}

impl<N, L> From<LabeledEdge<N, L>> for (N, N, L) {
    fn from(edge: LabeledEdge<N, L>) -> Self {
        edge.into_parts()
    }
}

impl<N: fmt::Display, L: fmt::Display> fmt::Display for LabeledEdge<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.label, self.to)
    }
}
