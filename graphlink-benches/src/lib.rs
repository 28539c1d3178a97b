//! Benchmark support crate for graphlink.
//!
//! Provides seeded synthetic graphs and parameter labels shared by the
//! Criterion benchmarks for union-find, connected components and
//! breadth-first search.

pub mod params;
pub mod source;
