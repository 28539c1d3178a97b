//! Graph connectivity primitives over discrete node sets.
//!
//! Three independent tools share only the idea of a node identifier:
//!
//! - [`DisjointSet`]: union-find over `[0, size)` with path compression and
//!   union by rank.
//! - [`ComponentGraph`]: undirected adjacency-list graph reporting its
//!   connected components.
//! - [`bfs()`]: shortest hop counts from a start node over any [`Adjacency`]
//!   view.
//!
//! None of them recurse, so arbitrarily long chains and deep components are
//! handled without growing the call stack.

mod bfs;
mod components;
mod disjoint_set;
mod error;

#[cfg(test)]
mod property;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    bfs::{Adjacency, BfsEvent, BfsObserver, Distance, Distances, Silent, bfs, bfs_with_observer},
    components::ComponentGraph,
    disjoint_set::DisjointSet,
    error::{GraphError, GraphErrorCode, Result},
};
