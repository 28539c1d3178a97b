//! Traversal narration for `graphlink bfs --trace`.

use std::fmt::Display;

use graphlink_core::{BfsEvent, BfsObserver};
use tracing::info;

/// [`BfsObserver`] that logs every traversal step at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressLog;

impl<N: Display> BfsObserver<N> for ProgressLog {
    fn observe(&mut self, event: BfsEvent<'_, N>) {
        match event {
            BfsEvent::Visit { node, hops } => info!(node = %node, hops, "processing node"),
            BfsEvent::Discover { node, hops } => info!(node = %node, hops, "node discovered"),
        }
    }
}
