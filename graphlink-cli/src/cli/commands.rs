//! Command implementations and argument parsing for the graphlink CLI.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use graphlink_core::{ComponentGraph, DisjointSet, Distance, GraphError, bfs, bfs_with_observer};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::progress::ProgressLog;

const DEFAULT_CHAIN_SIZE: usize = 1_000_000;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphlink",
    about = "Union-find, connected components and breadth-first distances."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Merge elements of `{0, .., N-1}` and print the resulting groups.
    UnionFind(UnionFindArgs),
    /// Build an undirected graph and print its connected components.
    Components(ComponentsArgs),
    /// Print hop counts from a start node.
    Bfs(BfsArgs),
    /// Union every element with its predecessor and time the run.
    Chain(ChainArgs),
}

/// Options accepted by the `union-find` command.
#[derive(Debug, Args, Clone)]
pub struct UnionFindArgs {
    /// Number of elements in the universe.
    #[arg(long)]
    pub size: usize,

    /// Elements to merge, written `A:B`. May be repeated.
    #[arg(long = "union", value_name = "A:B", value_parser = parse_index_pair)]
    pub unions: Vec<Pair<usize>>,
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsArgs {
    /// Undirected edge, written `U:V`. May be repeated.
    #[arg(long = "edge", value_name = "U:V", value_parser = parse_node_pair)]
    pub edges: Vec<Pair<String>>,

    /// Vertex to add without edges. May be repeated.
    #[arg(long = "node", value_name = "ID")]
    pub nodes: Vec<String>,
}

/// Options accepted by the `bfs` command.
#[derive(Debug, Args, Clone)]
pub struct BfsArgs {
    /// Node the search starts from.
    #[arg(long)]
    pub start: String,

    /// Edge from `U` to `V`. May be repeated.
    #[arg(long = "edge", value_name = "U:V", value_parser = parse_node_pair)]
    pub edges: Vec<Pair<String>>,

    /// Node with an empty neighbour list. May be repeated.
    #[arg(long = "node", value_name = "ID")]
    pub nodes: Vec<String>,

    /// Record every edge in both directions.
    #[arg(long)]
    pub undirected: bool,

    /// Log each visited and discovered node at `info` level.
    #[arg(long)]
    pub trace: bool,
}

/// Options accepted by the `chain` command.
#[derive(Debug, Args, Clone)]
pub struct ChainArgs {
    /// Number of elements to chain together.
    #[arg(long, default_value_t = DEFAULT_CHAIN_SIZE)]
    pub size: usize,
}

/// Two endpoints parsed from a `LEFT:RIGHT` argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pair<T> {
    /// Text before the first `:`.
    pub left: T,
    /// Text after the first `:`.
    pub right: T,
}

impl<T> Pair<T> {
    /// Builds a pair from its endpoints.
    #[must_use]
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A core algorithm rejected its input.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of a CLI command, ready for [`render_summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Groups left after `union-find`.
    UnionFind {
        /// Representative and sorted members of each group.
        groups: Vec<(usize, Vec<usize>)>,
        /// Number of disjoint sets.
        set_count: usize,
    },
    /// Adjacency and components from `components`.
    Components {
        /// Neighbour list of every vertex in insertion order.
        adjacency: Vec<(String, Vec<String>)>,
        /// Connected components, each sorted.
        components: Vec<Vec<String>>,
    },
    /// Hop counts from `bfs`.
    Bfs {
        /// Node the search started from.
        start: String,
        /// Distance of every node in graph order.
        distances: Vec<(String, Distance)>,
    },
    /// Timing from `chain`.
    Chain {
        /// Number of elements chained.
        size: usize,
        /// Groups remaining after the run.
        groups: usize,
        /// Wall-clock time spent on the unions.
        elapsed: Duration,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError::Core`] when an algorithm rejects the supplied graph,
/// for example a `union-find` index outside `[0, size)` or a `bfs` start node
/// that owns no neighbour list.
///
/// # Examples
/// ```
/// # use graphlink_cli::cli::{Cli, Command, Pair, Summary, UnionFindArgs, run_cli};
/// let cli = Cli {
///     command: Command::UnionFind(UnionFindArgs {
///         size: 3,
///         unions: vec![Pair::new(0, 2)],
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, Summary::UnionFind { set_count: 2, .. }));
/// # Ok::<(), graphlink_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Summary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::UnionFind(args) => {
            span.record("command", field::display("union-find"));
            run_union_find(args)
        }
        Command::Components(args) => {
            span.record("command", field::display("components"));
            Ok(run_components(args))
        }
        Command::Bfs(args) => {
            span.record("command", field::display("bfs"));
            run_bfs(args)
        }
        Command::Chain(args) => {
            span.record("command", field::display("chain"));
            run_chain(&args)
        }
    }
}

#[instrument(name = "cli.union_find", err, skip(args), fields(size = args.size))]
pub(super) fn run_union_find(args: UnionFindArgs) -> Result<Summary, CliError> {
    let mut sets = DisjointSet::new(args.size);
    for Pair { left, right } in args.unions {
        sets.union(left, right)?;
    }
    let groups: Vec<(usize, Vec<usize>)> = sets.groups().into_iter().collect();
    info!(groups = groups.len(), "union-find completed");
    Ok(Summary::UnionFind {
        set_count: sets.set_count(),
        groups,
    })
}

#[instrument(name = "cli.components", skip(args), fields(edges = args.edges.len()))]
pub(super) fn run_components(args: ComponentsArgs) -> Summary {
    let mut graph = ComponentGraph::new();
    for Pair { left, right } in args.edges {
        graph.add_edge(left, right);
    }
    for node in args.nodes {
        graph.add_vertex(node);
    }

    let adjacency = graph
        .vertices()
        .map(|vertex| {
            let neighbours = graph.neighbours(vertex).unwrap_or_default().to_vec();
            (vertex.clone(), neighbours)
        })
        .collect();
    let components = graph.connected_components();
    info!(components = components.len(), "components completed");
    Summary::Components {
        adjacency,
        components,
    }
}

#[instrument(
    name = "cli.bfs",
    err,
    skip(args),
    fields(start = %args.start, undirected = args.undirected),
)]
pub(super) fn run_bfs(args: BfsArgs) -> Result<Summary, CliError> {
    let BfsArgs {
        start,
        edges,
        nodes,
        undirected,
        trace,
    } = args;
    let adjacency = build_adjacency(edges, nodes, undirected);

    let distances = if trace {
        bfs_with_observer(&adjacency, &start, &mut ProgressLog)?
    } else {
        bfs(&adjacency, &start)?
    };
    info!(
        reachable = distances.reachable_count(),
        nodes = distances.len(),
        "bfs completed"
    );
    Ok(Summary::Bfs {
        start,
        distances: distances.into_map().into_iter().collect(),
    })
}

/// Builds an ordered adjacency map in which every mentioned node owns a list.
pub(super) fn build_adjacency(
    edges: Vec<Pair<String>>,
    nodes: Vec<String>,
    undirected: bool,
) -> IndexMap<String, Vec<String>> {
    let mut adjacency: IndexMap<String, Vec<String>> = IndexMap::new();
    for Pair { left, right } in edges {
        let mirrored = undirected && left != right;
        adjacency.entry(left.clone()).or_default().push(right.clone());
        let reverse = adjacency.entry(right).or_default();
        if mirrored {
            reverse.push(left);
        }
    }
    for node in nodes {
        adjacency.entry(node).or_default();
    }
    adjacency
}

#[instrument(name = "cli.chain", err, skip(args), fields(size = args.size))]
pub(super) fn run_chain(args: &ChainArgs) -> Result<Summary, CliError> {
    let started = Instant::now();
    let mut sets = DisjointSet::new(args.size);
    for element in 1..args.size {
        sets.union(element, element - 1)?;
    }
    let elapsed = started.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        groups = sets.set_count(),
        "chain completed"
    );
    Ok(Summary::Chain {
        size: args.size,
        groups: sets.set_count(),
        elapsed,
    })
}

pub(super) fn parse_index_pair(raw: &str) -> Result<Pair<usize>, String> {
    let (left, right) = split_pair(raw)?;
    let index = |text: &str| {
        text.parse::<usize>()
            .map_err(|err| format!("invalid element index `{text}`: {err}"))
    };
    Ok(Pair::new(index(left)?, index(right)?))
}

pub(super) fn parse_node_pair(raw: &str) -> Result<Pair<String>, String> {
    let (left, right) = split_pair(raw)?;
    Ok(Pair::new(left.to_owned(), right.to_owned()))
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    let (left, right) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `LEFT:RIGHT`, found `{raw}`"))?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(format!("both sides of `{raw}` must be non-empty"));
    }
    Ok((left, right))
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use graphlink_cli::cli::{Summary, render_summary};
/// let summary = Summary::UnionFind {
///     groups: vec![(0, vec![0, 2]), (1, vec![1])],
///     set_count: 2,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "0: 0 2\n1: 1\nsets: 2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &Summary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        Summary::UnionFind { groups, set_count } => {
            for (representative, members) in groups {
                writeln!(writer, "{representative}: {}", join(members))?;
            }
            writeln!(writer, "sets: {set_count}")?;
        }
        Summary::Components {
            adjacency,
            components,
        } => {
            writeln!(writer, "adjacency:")?;
            for (vertex, neighbours) in adjacency {
                writeln!(writer, "  {vertex}: [{}]", neighbours.join(", "))?;
            }
            writeln!(writer, "components: {}", components.len())?;
            for component in components {
                writeln!(writer, "  [{}]", component.join(", "))?;
            }
        }
        Summary::Bfs { start, distances } => {
            writeln!(writer, "distances from {start}:")?;
            for (node, distance) in distances {
                match distance {
                    Distance::Reached(hops) => writeln!(writer, "{node}: {hops}")?,
                    Distance::Unreachable => writeln!(writer, "{node}: unreachable")?,
                }
            }
        }
        Summary::Chain {
            size,
            groups,
            elapsed,
        } => {
            writeln!(
                writer,
                "chained {size} elements in {:.3}s",
                elapsed.as_secs_f64()
            )?;
            writeln!(writer, "groups: {groups}")?;
        }
    }
    Ok(())
}

fn join(members: &[usize]) -> String {
    members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
