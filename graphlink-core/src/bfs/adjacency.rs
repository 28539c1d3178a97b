//! Read-only adjacency views accepted by [`crate::bfs()`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::ComponentGraph;

/// A graph described by per-node neighbour lists.
///
/// Symmetry is the implementor's choice: a map holding only `a -> b` is a
/// directed graph, one holding both `a -> b` and `b -> a` is undirected.
/// Nodes that appear only inside neighbour lists have no outgoing edges.
pub trait Adjacency<N> {
    /// Number of nodes that own a neighbour list.
    fn node_count(&self) -> usize;

    /// Returns `true` when `node` owns a neighbour list.
    fn contains_node(&self, node: &N) -> bool;

    /// Nodes that own a neighbour list, in the container's iteration order.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a;

    /// Neighbours of `node`; empty when `node` owns no list.
    fn neighbours(&self, node: &N) -> &[N];
}

impl<N, S> Adjacency<N> for IndexMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a,
    {
        self.keys()
    }

    fn neighbours(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N, S> Adjacency<N> for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a,
    {
        self.keys()
    }

    fn neighbours(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N: Ord> Adjacency<N> for BTreeMap<N, Vec<N>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a,
    {
        self.keys()
    }

    fn neighbours(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N> Adjacency<N> for ComponentGraph<N>
where
    N: Clone + Eq + Hash + Ord,
{
    fn node_count(&self) -> usize {
        self.vertex_count()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a,
    {
        self.adjacency().keys()
    }

    fn neighbours(&self, node: &N) -> &[N] {
        self.adjacency().get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
