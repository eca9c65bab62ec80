// src/main.rs
//! ZEN Credz terminal showcase

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use zen_credz::repl::{self, colors::ansi::*};
use zen_credz::{CONFIG, Controller, catalog};

#[derive(Parser)]
#[command(name = "zen-credz")]
#[command(about = "Simulated skill-credential showcase with a rule-based career coach")]
struct Args {
    /// TOML file overriding environment configuration
    #[arg(long, short = 'c', env = "CREDZ_CONFIG")]
    config: Option<PathBuf>,

    /// Print a JSON state snapshot after every state-changing command
    #[arg(long)]
    json: bool,

    /// Frames per `spin` when no count is given
    #[arg(long)]
    frames: Option<u32>,

    /// Seed for simulated wallet addresses
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve values: CLI args > config file > env vars > defaults
    let mut config = (*CONFIG).clone();
    if let Some(path) = &args.config {
        config = config.merge_file(path)?;
    }
    if let Some(frames) = args.frames {
        config.default_spin_frames = frames;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    println!();
    println!("{}{}  ZEN Credz {}{}", BOLD, MAGENTA, env!("CARGO_PKG_VERSION"), RESET);
    println!("{}", repl::colors::separator(50));
    println!("{}Catalog{}     {} credentials, {} ZEN Points", DIM, RESET, catalog::CATALOG.len(), catalog::max_score());
    println!("{}Mint{}        {}ms simulated", DIM, RESET, config.mint_delay_ms);
    println!("{}Coach{}       {}ms simulated", DIM, RESET, config.analyze_delay_ms);
    println!("{}Type `help` for commands.{}", DIM, RESET);
    println!();

    info!("Starting ZEN Credz (debug: {})", config.is_debug());

    let controller = Arc::new(match args.seed {
        Some(seed) => Controller::with_seed(config, seed),
        None => Controller::new(config),
    });

    repl::Repl::new(controller).with_json(args.json).run().await
}
