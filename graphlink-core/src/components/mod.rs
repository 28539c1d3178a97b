//! Undirected adjacency-list graph with on-demand connected components.
//!
//! Vertices are kept in the order they were first mentioned so component
//! discovery is deterministic. Components are found with an explicit-stack
//! depth-first traversal, so deep or long components never exhaust the call
//! stack.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, instrument};

/// Mutable undirected graph that reports its connected components.
///
/// Neighbour lists are symmetric and free of duplicates. A self-loop is stored
/// as a single self-reference.
///
/// # Examples
/// ```
/// use graphlink_core::ComponentGraph;
///
/// let mut graph = ComponentGraph::new();
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(3, 4);
/// assert_eq!(graph.connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);
/// ```
#[derive(Clone, Debug)]
pub struct ComponentGraph<N> {
    adjacency: IndexMap<N, Vec<N>>,
}

impl<N> Default for ComponentGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N> ComponentGraph<N>
where
    N: Clone + Eq + Hash + Ord,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Introduces `vertex` without any edges. Existing vertices are untouched.
    pub fn add_vertex(&mut self, vertex: N) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds the undirected edge `{u, v}`, creating either endpoint on first
    /// mention (`u` before `v`).
    ///
    /// Repeating an edge in either orientation has no effect.
    pub fn add_edge(&mut self, u: N, v: N) {
        if u == v {
            let neighbours = self.adjacency.entry(u.clone()).or_default();
            if !neighbours.contains(&u) {
                neighbours.push(u);
            }
            return;
        }

        let forward = self.adjacency.entry(u.clone()).or_default();
        if !forward.contains(&v) {
            forward.push(v.clone());
        }
        let backward = self.adjacency.entry(v).or_default();
        if !backward.contains(&u) {
            backward.push(u);
        }
    }

    /// Returns `true` when `vertex` has been introduced.
    #[must_use]
    pub fn contains(&self, vertex: &N) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbours of `vertex` in discovery order, or `None` for unknown
    /// vertices.
    #[must_use]
    pub fn neighbours(&self, vertex: &N) -> Option<&[N]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Vertices in first-introduction order.
    pub fn vertices(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges; a self-loop counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut links = 0;
        for (vertex, neighbours) in &self.adjacency {
            for neighbour in neighbours {
                if neighbour == vertex {
                    loops += 1;
                } else {
                    links += 1;
                }
            }
        }
        loops + links / 2
    }

    /// Returns every connected component.
    ///
    /// Members of each component are sorted ascending. Components are ordered
    /// by the first-introduction position of the vertex that started them, so
    /// isolated vertices appear as singletons in their introduction slot.
    #[instrument(
        name = "core.connected_components",
        level = "debug",
        skip(self),
        fields(vertices = self.adjacency.len()),
    )]
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut stack = Vec::new();
        let mut components = Vec::new();

        for root in 0..self.adjacency.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push(root);
            let mut component = Vec::new();

            while let Some(index) = stack.pop() {
                let Some((vertex, neighbours)) = self.adjacency.get_index(index) else {
                    continue;
                };
                component.push(vertex.clone());
                for neighbour in neighbours.iter().rev() {
                    let Some(next) = self.adjacency.get_index_of(neighbour) else {
                        continue;
                    };
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        debug!(components = components.len(), "connected components resolved");
        components
    }

    /// Number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.connected_components().len()
    }

    pub(crate) fn adjacency(&self) -> &IndexMap<N, Vec<N>> {
        &self.adjacency
    }
}
