//! Seeded graph generators for the property suites.
//!
//! Generation is driven by a `SmallRng` so a failing `(shape, seed)` pair can
//! be replayed as a plain rstest case.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 1;
const MAX_NODES: usize = 48;
/// Dense graphs stay small to keep the edge count quadratic but bounded.
const DENSE_MAX_NODES: usize = 20;

fn shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        1 => Just(GraphShape::Sparse),
        1 => Just(GraphShape::Dense),
        1 => Just(GraphShape::Chain),
        2 => Just(GraphShape::Disconnected),
        1 => Just(GraphShape::Star),
    ]
}

/// Generates fixtures across every [`GraphShape`], biased towards
/// disconnected graphs where ordering and unreachability matter most.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicit shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let edges_for = |rng: &mut SmallRng, node_count: usize| match shape {
        GraphShape::Sparse => sparse(rng, node_count),
        GraphShape::Dense => dense(rng, node_count),
        GraphShape::Chain => chain(rng, node_count),
        GraphShape::Disconnected => disconnected(rng, node_count),
        GraphShape::Star => star(rng, node_count),
    };
    let max_nodes = if shape == GraphShape::Dense {
        DENSE_MAX_NODES
    } else {
        MAX_NODES
    };
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edges = edges_for(rng, node_count);
    GraphFixture {
        node_count,
        edges,
        shape,
    }
}

fn sparse(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let edge_count = rng.gen_range(node_count..=node_count * 2);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

fn dense(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let probability: f64 = rng.gen_range(0.6..=0.95);
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                edges.push((left, right));
            }
        }
    }
    edges
}

fn chain(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);
    order.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

fn disconnected(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let clusters = rng.gen_range(1..=node_count.min(6));
    let mut edges = Vec::new();
    for cluster in 0..clusters {
        let members: Vec<usize> = (cluster..node_count).step_by(clusters).collect();
        for _ in 0..members.len() {
            let (Some(&left), Some(&right)) = (members.choose(rng), members.choose(rng)) else {
                continue;
            };
            if rng.gen_bool(0.8) {
                edges.push((left, right));
            }
        }
    }
    edges
}

fn star(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let hub = rng.gen_range(0..node_count);
    let mut edges: Vec<(usize, usize)> = (0..node_count)
        .filter(|&node| node != hub)
        .map(|node| if rng.gen_bool(0.5) { (hub, node) } else { (node, hub) })
        .collect();
    edges.push((hub, hub));
    edges.shuffle(rng);
    edges
}
