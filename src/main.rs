mod config;
mod engine;
mod manager;
mod model;
mod plot;
mod stats;

use crate::config::Config;
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the transmission rate.
    #[arg(long)]
    beta: Option<f64>,

    /// Override the recovery rate.
    #[arg(long)]
    gamma: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the state at the end of the run.
    Final,

    /// Print the state at every time step.
    Trajectory,

    /// Print peak and total infection metrics.
    Summary,

    /// Show the trajectory in a chart window.
    Plot,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    if let Some(beta) = args.beta {
        cfg.model.beta = beta;
    }
    if let Some(gamma) = args.gamma {
        cfg.model.gamma = gamma;
    }

    let mgr = Manager::new(cfg).context("failed to construct mgr")?;

    let mut out = io::stdout().lock();
    match args.command {
        Command::Final => mgr.run_final(&mut out)?,
        Command::Trajectory => mgr.run_trajectory(&mut out)?,
        Command::Summary => mgr.run_summary(&mut out)?,
        Command::Plot => mgr.run_plot()?,
    }

    Ok(())
}
