//! Unweighted shortest hop counts by breadth-first search.
//!
//! The search is a pure function of its inputs: it borrows the caller's graph
//! read-only and allocates only its own queue, visited markers and result.
//! Progress can be observed through a caller-supplied [`BfsObserver`].
//!
//! Nodes are marked visited when first discovered rather than when dequeued.
//! Each node therefore enters the queue at most once and its first discovery
//! records the true shortest hop count.

mod adjacency;
mod distance;

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

pub use self::adjacency::Adjacency;
pub use self::distance::{Distance, Distances};

/// Traversal step reported to a [`BfsObserver`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BfsEvent<'a, N> {
    /// `node` was dequeued and its neighbours are about to be scanned.
    Visit {
        /// Node being expanded.
        node: &'a N,
        /// Hop count of `node`.
        hops: usize,
    },
    /// `node` was reached for the first time.
    Discover {
        /// Newly reached node.
        node: &'a N,
        /// Hop count assigned to `node`.
        hops: usize,
    },
}

/// Receives [`BfsEvent`]s while a search runs.
pub trait BfsObserver<N> {
    /// Called once per traversal step.
    fn observe(&mut self, event: BfsEvent<'_, N>);
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<N> BfsObserver<N> for Silent {
    fn observe(&mut self, _event: BfsEvent<'_, N>) {}
}

/// Computes the hop count from `start` to every node of `graph`.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when `graph` has no nodes and
/// [`GraphError::NotFound`] when `start` does not own a neighbour list in
/// `graph`.
///
/// # Examples
/// ```
/// use indexmap::IndexMap;
/// use graphlink_core::{Distance, bfs};
///
/// let graph: IndexMap<&str, Vec<&str>> = IndexMap::from([
///     ("A", vec!["B"]),
///     ("B", vec![]),
///     ("C", vec!["D"]),
///     ("D", vec![]),
/// ]);
/// let distances = bfs(&graph, &"A")?;
/// assert_eq!(distances.get(&"B"), Some(Distance::Reached(1)));
/// assert_eq!(distances.get(&"D"), Some(Distance::Unreachable));
/// # Ok::<(), graphlink_core::GraphError>(())
/// ```
pub fn bfs<N, G>(graph: &G, start: &N) -> Result<Distances<N>>
where
    N: Clone + Eq + Hash + fmt::Debug,
    G: Adjacency<N> + ?Sized,
{
    bfs_with_observer(graph, start, &mut Silent)
}

/// Same as [`bfs()`], reporting each traversal step to `observer`.
///
/// # Errors
/// Fails under the same conditions as [`bfs()`]; the observer is never called
/// in that case.
#[instrument(
    name = "core.bfs",
    level = "debug",
    err(level = "debug"),
    skip_all,
    fields(nodes = graph.node_count(), start = ?start),
)]
pub fn bfs_with_observer<N, G, O>(graph: &G, start: &N, observer: &mut O) -> Result<Distances<N>>
where
    N: Clone + Eq + Hash + fmt::Debug,
    G: Adjacency<N> + ?Sized,
    O: BfsObserver<N> + ?Sized,
{
    if graph.node_count() == 0 {
        return Err(GraphError::InvalidArgument {
            reason: "graph must contain at least one node",
        });
    }
    if !graph.contains_node(start) {
        return Err(GraphError::not_found(start));
    }

    let mut nodes: IndexSet<&N> = graph.nodes().collect();
    for node in graph.nodes() {
        nodes.extend(graph.neighbours(node));
    }
    let origin = nodes
        .get_index_of(start)
        .ok_or_else(|| GraphError::not_found(start))?;

    let mut hops: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut queue = VecDeque::new();
    hops[origin] = Some(0);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        let (Some(&node), Some(depth)) = (nodes.get_index(current), hops[current]) else {
            continue;
        };
        observer.observe(BfsEvent::Visit { node, hops: depth });

        for neighbour in graph.neighbours(node) {
            let Some(next) = nodes.get_index_of(neighbour) else {
                continue;
            };
            if hops[next].is_none() {
                hops[next] = Some(depth + 1);
                observer.observe(BfsEvent::Discover {
                    node: neighbour,
                    hops: depth + 1,
                });
                queue.push_back(next);
            }
        }
    }

    let distances: IndexMap<N, Distance> = nodes
        .into_iter()
        .zip(hops)
        .map(|(node, hops)| (node.clone(), hops.map_or(Distance::Unreachable, Distance::Reached)))
        .collect();
    let distances = Distances::new(distances);
    debug!(
        reachable = distances.reachable_count(),
        unreachable = distances.len() - distances.reachable_count(),
        "breadth-first search completed"
    );
    Ok(distances)
}
