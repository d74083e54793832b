//! Wander CLI - headless steering simulation.
//!
//! Single binary that provides:
//! - `wander run` - simulate a population of wanderers and stream JSON-lines traces
//! - `wander check-config` - validate a YAML config and print it resolved
//! - `wander defaults` - print the default config

mod config;
mod sim;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use steer_tools::JsonLinesSink;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::SimConfig;

#[derive(Parser)]
#[command(name = "wander")]
#[command(about = "Headless wander steering simulation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the number of agents
        #[arg(long)]
        agents: Option<u64>,

        /// Override the number of ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Override the global seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write the trace here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record debug shapes in each sample
        #[arg(long)]
        draw: bool,
    },

    /// Validate a config file and print it with defaults filled in
    CheckConfig {
        path: PathBuf,
    },

    /// Print the default config
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the trace.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config,
            agents,
            ticks,
            seed,
            output,
            draw,
        } => {
            let mut sim_config = SimConfig::load_or_default(config.as_deref())?;
            if let Some(agents) = agents {
                sim_config.sim.agents = agents;
            }
            if let Some(ticks) = ticks {
                sim_config.sim.ticks = ticks;
            }
            if let Some(seed) = seed {
                sim_config.sim.seed = seed;
            }
            run_simulation(&sim_config, output, draw)
        }
        Commands::CheckConfig { path } => check_config(&path),
        Commands::Defaults => {
            print!("{}", SimConfig::default().to_yaml()?);
            Ok(())
        }
    }
}

fn run_simulation(config: &SimConfig, output: Option<PathBuf>, draw: bool) -> Result<()> {
    tracing::info!(
        agents = config.sim.agents,
        ticks = config.sim.ticks,
        seed = config.sim.seed,
        "starting wander simulation"
    );

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create trace file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = JsonLinesSink::new(BufWriter::new(writer));

    let summary = sim::run(config, &mut sink, draw).context("Simulation failed")?;

    tracing::info!(
        agents = summary.agents,
        ticks = summary.ticks,
        samples = summary.samples,
        mean_speed = summary.mean_speed,
        max_displacement = summary.max_displacement,
        "simulation finished"
    );
    if let Some(path) = output {
        tracing::info!("trace written to {}", path.display());
    }
    Ok(())
}

fn check_config(path: &Path) -> Result<()> {
    let config = SimConfig::load(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    tracing::info!("{} is valid", path.display());
    print!("{}", config.to_yaml()?);
    Ok(())
}
