#![deny(clippy::all, clippy::pedantic)]
//! # Pole Balancing Runtime
//!
//! Entry point for the `runtime_main` binary. Plays episodes of the non-Markov
//! pole balancing benchmark with a fixed controller, logs progress through
//! `tracing` on stderr, and prints one JSON summary per episode on stdout.

mod app;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rl::PoleBalancingConfig;
use tracing_subscriber::EnvFilter;

use crate::app::{PolicyKind, RunOptions};

#[derive(Parser, Debug)]
#[command(
    name = "runtime_main",
    about = "Run non-Markov pole balancing episodes with a fixed controller"
)]
struct Args {
    /// JSON file with `nb_poles`, `random_init` and `seed`; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of poles on the cart (1 or 2).
    #[arg(long)]
    poles: Option<usize>,
    /// Start episodes from a random near-upright state.
    #[arg(long)]
    random_init: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    episodes: usize,
    /// Cut an episode off after this many steps.
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,
    #[arg(long, value_enum, default_value_t = PolicyKind::BangBang)]
    policy: PolicyKind,
    /// Write the last episode's full-state trajectory as JSON lines.
    #[arg(long)]
    trace: Option<PathBuf>,
}

impl Args {
    fn env_config(&self) -> Result<PoleBalancingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => PoleBalancingConfig::default(),
        };
        if let Some(poles) = self.poles {
            config.nb_poles = poles;
        }
        if self.random_init {
            config.random_init = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = RunOptions {
        env: args.env_config()?,
        episodes: args.episodes,
        max_steps: args.max_steps,
        policy: args.policy,
        trace: args.trace,
    };

    for summary in app::run(&options)? {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
