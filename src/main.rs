use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Import modules
mod constants;
mod database;
mod dataset;
mod error;
mod html_template;
mod legend;
mod logger;
mod map;
mod markers;
mod model;
mod popup;
mod server;
mod settings;
mod style;
mod utils;
mod visualization;

use database::QuakeStore;
use server::{start_server, AppState};
use settings::Settings;
use visualization::initialize_visualization;

#[derive(Parser, Debug)]
#[command(name = "quakemap", version, about = "Earthquake map: markers sized by magnitude, colored by depth")]
struct Cli {
    /// GeoJSON feature collection to render instead of the built-in sample
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the interactive map over HTTP (default)
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Write a self-contained HTML page
    Render {
        #[arg(short, long, default_value = "quakemap.html")]
        output: PathBuf,
    },
    /// Log one line per earthquake record
    List,
    /// Write the effective settings to quakemap.ini
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(data) = cli.data {
        settings.data_file = Some(data.display().to_string());
    }

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                settings.port = port;
            }
            serve(settings).await
        }
        Command::Render { output } => render(&settings, &output),
        Command::List => list(&settings),
        Command::InitConfig => {
            settings.save()?;
            tracing::info!("✅ Settings written to {}", Settings::config_path().display());
            Ok(())
        }
    }
}

async fn serve(settings: Settings) -> Result<()> {
    tracing::info!("🌍 QuakeMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let viz = initialize_visualization(&settings).context("Failed to build the map")?;
    let store = QuakeStore::new();
    let count = store.replace_all(viz.records)?;
    tracing::info!("   📊 {} earthquake(s) loaded", count);

    let port = settings.port;
    let app_state = AppState {
        store,
        map: Arc::new(viz.map),
        settings: Arc::new(settings),
    };

    start_server(app_state, port).await
}

fn render(settings: &Settings, output: &Path) -> Result<()> {
    let viz = initialize_visualization(settings).context("Failed to build the map")?;
    let page = html_template::render_standalone_page(&viz.map)?;

    utils::ensure_parent_dir_exists(output)
        .with_context(|| format!("Creating directory for {}", output.display()))?;
    std::fs::write(output, page)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "✅ Wrote {} with {} marker(s)",
        output.display(),
        viz.map.markers.len()
    );
    Ok(())
}

fn list(settings: &Settings) -> Result<()> {
    let viz = initialize_visualization(settings).context("Failed to load earthquakes")?;
    for record in &viz.records {
        tracing::info!(
            "M{} {} depth {} km at [{}, {}]{}",
            utils::format_number(record.magnitude),
            record.place,
            utils::format_number(record.depth_km),
            record.latitude,
            record.longitude,
            if record.tsunami { " (tsunami warning)" } else { "" }
        );
    }
    Ok(())
}
