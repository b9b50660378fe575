// main.rs - Toroidal Game of Life viewer
//
// Wraps a `torus_life::Simulation` in an eframe window.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use torus_life::{LifeConfig, Simulation};
use tracing_subscriber::EnvFilter;

mod ui;
mod view;

use view::CELL_SIZE;

/// Conway's Game of Life on a torus, with auto-reseeding on extinction or loops
#[derive(Parser, Debug)]
#[command(name = "torus_viewer")]
struct Args {
    /// TOML file with simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells (overrides the config file)
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells (overrides the config file)
    #[arg(long)]
    height: Option<i32>,

    /// Milliseconds between generations
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Random seed for reproducible reseeding
    #[arg(long)]
    seed: Option<u64>,
}

fn build_simulation(args: &Args) -> torus_life::Result<Simulation> {
    let mut config = match &args.config {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(ms) = args.interval_ms {
        config.step_interval_ms = ms;
    }

    match args.seed {
        Some(seed) => Simulation::with_seed(&config, seed),
        None => Simulation::new(&config),
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("torus_viewer=info,torus_life=info")),
        )
        .init();

    let args = Args::parse();
    let sim = match build_simulation(&args) {
        Ok(sim) => sim,
        Err(err) => {
            tracing::error!("failed to start simulation: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        width = sim.grid().width(),
        height = sim.grid().height(),
        "starting viewer"
    );

    let window = [
        sim.grid().width() as f32 * CELL_SIZE,
        sim.grid().height() as f32 * CELL_SIZE + 40.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::LifeApp::new(sim))),
    )
}
