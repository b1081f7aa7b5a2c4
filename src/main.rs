mod app;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::DashboardApp;
use data::loader;
use data::schema::DatasetSchema;
use state::AppState;

#[derive(Parser)]
#[command(name = "lysis-dash")]
#[command(about = "Filter, plot and sort lysis-assay LOD results")]
#[command(version)]
struct Cli {
    /// CSV file to load
    #[arg(default_value = "parsed_data.csv")]
    data: PathBuf,

    /// Verbose logging and a debug window with the active filter
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // Schema problems are fatal and must surface before the window opens.
    let schema = DatasetSchema::default();
    let table = loader::load_csv(&cli.data, &schema)
        .with_context(|| format!("loading {}", cli.data.display()))?;
    let state = AppState::new(table, schema, cli.debug).context("preparing dashboard")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interactive Table with Filtering",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
