//! Breadth-first distance benchmarks over random undirected graphs.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use graphlink_benches::{
    params::GraphBenchParams,
    source::{SyntheticConfig, SyntheticGraph},
};
use graphlink_core::bfs;

const SEED: u64 = 7;
const NODE_COUNTS: &[usize] = &[1_000, 10_000, 100_000];
const AVERAGE_DEGREE: usize = 4;

fn breadth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let adjacency = SyntheticGraph::generate(&SyntheticConfig {
            node_count,
            average_degree: AVERAGE_DEGREE,
            seed: SEED,
        })
        .expect("synthetic graph generation must succeed")
        .adjacency();
        let params = GraphBenchParams {
            node_count,
            average_degree: AVERAGE_DEGREE,
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &adjacency,
            |b, adjacency| {
                b.iter(|| {
                    let distances = bfs(adjacency, &0).expect("node 0 is always present");
                    black_box(distances.reachable_count())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, breadth_first);
criterion_main!(benches);
