//! Command-line interface for the graphlink algorithms.
//!
//! Each subcommand builds a small graph from repeated `--edge`/`--union`
//! flags, runs one algorithm and returns a [`Summary`] for rendering.

mod commands;
mod progress;

pub use commands::{
    BfsArgs, ChainArgs, Cli, CliError, Command, ComponentsArgs, Pair, Summary, UnionFindArgs,
    render_summary, run_cli,
};
pub use progress::ProgressLog;
