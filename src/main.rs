use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use yop::config::Config;
use yop::trainer::{Trainer, TrainerOptions};

#[derive(Parser)]
#[command(name = "yop")]
#[command(version, about = "A yop learns to find food on a grid")]
struct Cli {
    /// Do not redraw the grid; log the score every report interval instead
    #[arg(long)]
    no_draw: bool,

    /// Play with the current network without training it
    #[arg(long)]
    no_learning: bool,

    /// Slow, non-learning run for watching the yop
    #[arg(long)]
    demo: bool,

    /// Print an ASCII chart of the score log with every report
    #[arg(long)]
    plot: bool,

    /// Stop after this many iterations instead of running forever
    #[arg(long)]
    iterations: Option<u64>,

    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Network snapshot to resume from and save to
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Where to write the score log
    #[arg(long)]
    score_log: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(snapshot) = cli.snapshot {
        config.run.snapshot_path = snapshot;
    }
    if let Some(score_log) = cli.score_log {
        config.run.score_log_path = score_log;
    }
    if cli.seed.is_some() {
        config.brain.seed = cli.seed;
    }

    let options = TrainerOptions {
        draw: !cli.no_draw,
        learning: !cli.no_learning,
        demo: cli.demo,
        plot: cli.plot,
    };

    let stdout = std::io::stdout();
    let mut trainer = Trainer::new(config, options, stdout.lock()).context("Failed to start trainer")?;
    trainer.run(cli.iterations)?;

    Ok(())
}
