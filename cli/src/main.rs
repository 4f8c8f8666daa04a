//! Max flow demonstration driver
//!
//! Solves the built-in eight-node example (or a network loaded from a JSON
//! file) and prints the maximum flow, optionally followed by every edge of
//! the residual graph.
//!
//! ```text
//! maxflow                       # Maximum Flow is: 26
//! maxflow --strategy bfs --residual
//! maxflow --graph net.json --config solver.json --json
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use maxflow_core::{MaxFlowAlgorithm, SolverConfig};

mod error;
mod graph_file;
mod report;

use crate::error::{CliError, CliResult};
use crate::graph_file::{load_config, GraphSpec};

/// Augmenting-path maximum flow solver
#[derive(Parser, Debug)]
#[command(name = "maxflow")]
#[command(version)]
#[command(about = "Computes the maximum flow of a capacitated network")]
struct Cli {
    /// Search strategy: dfs (Ford-Fulkerson) or bfs (Edmonds-Karp)
    #[arg(short, long)]
    strategy: Option<MaxFlowAlgorithm>,

    /// List every edge of the residual graph after the flow value
    #[arg(short, long)]
    residual: bool,

    /// JSON network description to solve instead of the built-in example
    #[arg(short, long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// JSON solver configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.algorithm = strategy;
    }

    let graph = match &cli.graph {
        Some(path) => GraphSpec::load(path)?,
        None => GraphSpec::example(),
    };
    info!(
        "solving {} nodes / {} edges with {}",
        graph.nodes,
        graph.edges.len(),
        config.algorithm
    );

    let mut solver = graph.build(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let report = solver.report()?;
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out).map_err(CliError::Output)?;
        return Ok(());
    }

    let max_flow = solver.max_flow()?;
    writeln!(out, "Maximum Flow is: {}", max_flow).map_err(CliError::Output)?;

    if cli.residual {
        let (source, sink) = (solver.source(), solver.sink());
        let network = solver.residual_graph()?;
        report::write_residual_graph(&mut out, network, source, sink).map_err(CliError::Output)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
