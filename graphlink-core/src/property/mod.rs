//! Property-based tests for the connectivity primitives.
//!
//! Each structure is compared against a deliberately naive oracle over
//! generated graphs: label propagation for set membership and components,
//! Bellman-Ford relaxation for hop counts.

mod oracle;
mod strategies;
mod types;
