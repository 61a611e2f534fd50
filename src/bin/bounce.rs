use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use yop::bounce::Bouncer;
use yop::visualization::draw_bounce;

#[derive(Parser)]
#[command(name = "bounce")]
#[command(version, about = "A point bouncing around a terminal grid")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: i32,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: i32,

    /// Pause between frames in milliseconds
    #[arg(long, default_value = "50")]
    delay_ms: u64,

    /// Stop after this many frames instead of running forever
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut bouncer = Bouncer::new(cli.width, cli.height).context("Invalid grid size")?;
    info!("bouncing on a {}x{} grid", cli.width, cli.height);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let delay = Duration::from_millis(cli.delay_ms);

    let mut frame = 0u64;
    while cli.frames.map_or(true, |limit| frame < limit) {
        write!(out, "{}", draw_bounce(&bouncer))?;
        out.flush()?;
        bouncer.step();
        thread::sleep(delay);
        frame += 1;
    }

    Ok(())
}
