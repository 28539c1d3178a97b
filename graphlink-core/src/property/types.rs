//! Fixture types shared by the property strategies and runners.

/// Topology used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Roughly `n` to `2n` random edges.
    Sparse,
    /// Most node pairs are connected.
    Dense,
    /// A single path visiting every node in shuffled order.
    Chain,
    /// Several clusters with no edges between them.
    Disconnected,
    /// One hub joined to every other node, plus self-loops.
    Star,
}

/// Generated graph over the nodes `[0, node_count)`.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of nodes in the universe.
    pub node_count: usize,
    /// Edges in generation order; may repeat or contain self-loops.
    pub edges: Vec<(usize, usize)>,
    /// Topology used during generation.
    pub shape: GraphShape,
}
