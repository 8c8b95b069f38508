// src/bin/projectile.rs
// Runs the projectile simulation and writes the trajectory image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lumen::io::{save_png, write_ppm};
use lumen::physics::{simulate, SimulationConfig};

/// Plot a projectile launched under gravity and wind.
#[derive(Debug, Parser)]
#[command(name = "projectile", version)]
struct Args {
    /// TOML file with simulation settings; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "projectile.ppm")]
    output: PathBuf,

    /// Write a PNG instead of a plain-text PPM
    #[arg(long)]
    png: bool,

    /// Override the launch speed
    #[arg(long)]
    speed: Option<f64>,

    /// Override the canvas width
    #[arg(long)]
    width: Option<usize>,

    /// Override the canvas height
    #[arg(long)]
    height: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    config.validate()?;

    let run = simulate(&config).context("running simulation")?;
    if run.landed() {
        tracing::info!(
            ticks = run.ticks,
            plotted = run.plotted,
            landed_x = run.last.position.x,
            "projectile landed"
        );
    }

    let written = if args.png {
        save_png(&run.canvas, &args.output)
    } else {
        write_ppm(&run.canvas, &args.output)
    };
    written.with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), "image written");
    Ok(())
}
