//! Tricount CLI: load or generate a graph, count its triangles, report timing

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tricount::{
    build_random_dense, build_random_dense_seeded, load_edge_list_file, run_sweep, DenseGraph,
    EngineConfig, Strategy, SweepRow,
};

#[derive(Parser)]
#[command(name = "tricount", version, about = "Dense-graph triangle counting")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, global = true, env = "TRICOUNT_CONFIG")]
    config: Option<PathBuf>,

    /// Worker threads (1 = sequential)
    #[arg(long, global = true, env = "TRICOUNT_THREADS")]
    threads: Option<usize>,

    /// Counting strategy
    #[arg(long, global = true)]
    strategy: Option<StrategyArg>,

    /// Timed repetitions
    #[arg(long, global = true)]
    trials: Option<usize>,

    /// Sweep thread counts 1..=N, one timing row per count
    #[arg(long, global = true, value_name = "N")]
    sweep: Option<usize>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrategyArg {
    NodeTriple,
    EdgeIntersection,
    CacheAssisted,
    EdgeList,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NodeTriple => Strategy::NodeTriple,
            StrategyArg::EdgeIntersection => Strategy::EdgeIntersection,
            StrategyArg::CacheAssisted => Strategy::CacheAssistedEdgeIntersection,
            StrategyArg::EdgeList => Strategy::EdgeList,
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Count triangles of an edge-list file
    File {
        /// Path to the edge list
        #[arg(long)]
        path: PathBuf,

        /// Number of vertices
        #[arg(long)]
        vertices: usize,
    },
    /// Count triangles of a random graph
    Random {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,

        /// Edge probability in [0, 1]
        #[arg(long)]
        density: f64,

        /// Seed for reproducible graphs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    info!(
        "Tricount v{}: threads={:?}, strategy={}, trials={}",
        tricount::version(),
        config.thread_counts(),
        config.strategy,
        config.trials
    );

    let graph = load_graph(&cli.command, &config)?;
    let rows = run_sweep(&graph, &config).context("counting failed")?;
    print_rows(&graph, &rows, config.trials, &cli.format)
}

fn resolve_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => EngineConfig::default(),
    };

    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if let Some(max) = cli.sweep {
        config.sweep_max_threads = Some(max);
    }
    if let Commands::Random { seed: Some(seed), .. } = &cli.command {
        config.seed = Some(*seed);
    }

    config.validate()?;
    Ok(config)
}

fn load_graph(command: &Commands, config: &EngineConfig) -> anyhow::Result<DenseGraph> {
    let graph = match command {
        Commands::File { path, vertices } => load_edge_list_file(*vertices, path)
            .with_context(|| format!("failed to load {:?}", path))?,
        Commands::Random { vertices, density, .. } => match config.seed {
            Some(seed) => build_random_dense_seeded(*vertices, *density, seed)?,
            None => build_random_dense(*vertices, *density, &mut rand::thread_rng())?,
        },
    };
    Ok(graph)
}

fn print_rows(
    graph: &DenseGraph,
    rows: &[SweepRow],
    trials: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Table => {
            println!(
                "number of nodes: {}, number of edges: {}, density: {:.5}",
                graph.node_count(),
                graph.edge_count(),
                graph.density()
            );

            let mut header = vec!["Threads".to_string(), "Strategy".to_string(), "Triangles".to_string()];
            header.extend((1..=trials).map(|t| format!("Trial {} (ms)", t)));
            header.push("Mean (ms)".to_string());

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(header);
            for row in rows {
                let mut cells = vec![
                    row.threads.to_string(),
                    row.strategy.to_string(),
                    row.triangles.to_string(),
                ];
                cells.extend(row.trials.iter().map(|t| format!("{:.3}", t.elapsed_ms())));
                cells.push(format!("{:.3}", row.mean_ms()));
                table.add_row(cells);
            }
            println!("{table}");
        }
    }
    Ok(())
}
