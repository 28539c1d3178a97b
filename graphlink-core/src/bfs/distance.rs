//! Hop-count results produced by [`crate::bfs()`].

use std::hash::Hash;

use indexmap::IndexMap;

/// Hop count from the search origin to a node.
///
/// `Reached` orders before `Unreachable`, so sorting places unreachable nodes
/// last.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// Minimum number of edges on any path from the origin.
    Reached(usize),
    /// No path from the origin exists.
    Unreachable,
}

impl Distance {
    /// Returns the hop count for reached nodes.
    #[must_use]
    pub const fn hops(self) -> Option<usize> {
        match self {
            Self::Reached(hops) => Some(hops),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` when a path from the origin exists.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reached(_))
    }
}

/// Distance of every node in a searched graph.
///
/// Iteration follows the graph's node order, with nodes known only as
/// neighbours appended in first-reference order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distances<N: Eq + Hash> {
    inner: IndexMap<N, Distance>,
}

impl<N: Eq + Hash> Distances<N> {
    pub(super) fn new(inner: IndexMap<N, Distance>) -> Self {
        Self { inner }
    }

    /// Distance recorded for `node`, or `None` when the node is not part of
    /// the searched graph.
    #[must_use]
    pub fn get(&self, node: &N) -> Option<Distance> {
        self.inner.get(node).copied()
    }

    /// Nodes and their distances.
    pub fn iter(&self) -> impl Iterator<Item = (&N, Distance)> {
        self.inner.iter().map(|(node, distance)| (node, *distance))
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when no nodes are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of nodes reachable from the origin, the origin included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.inner.values().filter(|d| d.is_reachable()).count()
    }

    /// Consumes the result, returning the underlying ordered map.
    #[must_use]
    pub fn into_map(self) -> IndexMap<N, Distance> {
        self.inner
    }
}
