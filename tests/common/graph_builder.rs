//! Graph building utilities for integration tests

use labeled_graph::{GraphConfig, LabeledGraph};

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Configuration for building a chain graph
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Number of nodes in the chain
    pub length: usize,
    /// Add every node explicitly before linking (otherwise only the head is
    /// added and the rest appear as edge destinations)
    pub add_all_nodes: bool,
    /// Also link each node back to its predecessor
    pub add_reverse_edges: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            length: 10,
            add_all_nodes: true,
            add_reverse_edges: false,
        }
    }
}

impl ChainConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Only the head is added explicitly
    pub fn implicit(length: usize) -> Self {
        Self {
            length,
            add_all_nodes: false,
            ..Self::default()
        }
    }
}

/// Build `"0" -> "1" -> ... -> "n-1"`, each edge labeled with its source index.
///
/// Reverse edges, when enabled, are labeled `"back"`.
pub fn build_chain(config: &ChainConfig) -> LabeledGraph<String, String> {
    let mut graph = LabeledGraph::with_config(GraphConfig::new().with_node_capacity(config.length));
    if config.length == 0 {
        return graph;
    }

    if config.add_all_nodes {
        for i in 0..config.length {
            graph.add_node(i.to_string()).expect("fresh node");
        }
    } else {
        graph.add_node("0".to_string()).expect("fresh node");
    }

    for i in 0..config.length - 1 {
        graph
            .add_edge(i.to_string(), (i + 1).to_string(), i.to_string())
            .expect("source exists");
        if config.add_reverse_edges {
            graph
                .add_edge((i + 1).to_string(), i.to_string(), "back".to_string())
                .expect("source exists");
        }
    }
    graph
}

/// Build a hub with `spokes` outgoing edges, labeled `label`, to `1..=spokes`
pub fn build_star(spokes: u32, label: &'static str) -> LabeledGraph<u32, &'static str> {
    let mut graph = LabeledGraph::new();
    graph.add_node(0).expect("fresh node");
    for spoke in 1..=spokes {
        graph.add_edge(0, spoke, label).expect("hub exists");
    }
    graph
}
