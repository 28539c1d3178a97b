//! Seeded random graphs for benchmarking.
//!
//! [`SyntheticGraph`] holds an undirected edge list drawn uniformly at random
//! over `0..node_count`, and converts it into the input shapes each algorithm
//! accepts. The same seed always yields the same graph.

use graphlink_core::ComponentGraph;
use indexmap::IndexMap;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Mean number of edges touching each node.
    pub average_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A random undirected graph over `0..node_count`.
///
/// # Examples
///
/// ```
/// use graphlink_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { node_count: 10, average_degree: 2, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.edges().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl SyntheticGraph {
    /// Draws `node_count * average_degree / 2` edges from a seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let edge_count = config.node_count.saturating_mul(config.average_degree) / 2;
        let edges = (0..edge_count)
            .map(|_| {
                (
                    rng.gen_range(0..config.node_count),
                    rng.gen_range(0..config.node_count),
                )
            })
            .collect();
        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Generated edges, possibly with repeats and self-loops.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Symmetric adjacency map with an entry for every node.
    #[must_use]
    pub fn adjacency(&self) -> IndexMap<usize, Vec<usize>> {
        let mut adjacency: IndexMap<usize, Vec<usize>> =
            (0..self.node_count).map(|node| (node, Vec::new())).collect();
        for &(left, right) in &self.edges {
            adjacency.entry(left).or_default().push(right);
            if left != right {
                adjacency.entry(right).or_default().push(left);
            }
        }
        adjacency
    }

    /// [`ComponentGraph`] holding every node and edge.
    #[must_use]
    pub fn component_graph(&self) -> ComponentGraph<usize> {
        let mut graph = ComponentGraph::new();
        for node in 0..self.node_count {
            graph.add_vertex(node);
        }
        for &(left, right) in &self.edges {
            graph.add_edge(left, right);
        }
        graph
    }
}
