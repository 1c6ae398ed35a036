use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

// Native window shell
mod app;

// Named input/output wiring
mod callbacks;

// Chart descriptions
mod charts;

mod config;

// Application constants
mod constants;

// Polars-based loading, filtering and aggregation
mod data;

// Error handling
mod error;

mod logging;

// Application state modules
mod state;

mod ui;

// Local web page shell
mod web;

mod widgets;

use config::DashboardConfig;
use data::LaunchDataset;
use error::Result;

#[derive(Parser)]
#[command(name = "spacex-dash")]
#[command(about = "Interactive dashboard of SpaceX launch outcomes by site and payload")]
#[command(version)]
struct Cli {
    /// JSON configuration file (defaults to ./spacex_dash.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records file (.csv or .parquet)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard as a local web page (default)
    Serve {
        /// Listen address, e.g. 127.0.0.1:8050
        #[arg(long)]
        addr: Option<String>,
    },
    /// Open the dashboard in a native window
    Window,
}

fn run(cli: Cli) -> Result<()> {
    let bind_addr = match &cli.command {
        Some(Command::Serve { addr }) => addr.clone(),
        _ => None,
    };
    let config = DashboardConfig::load(cli.config.as_deref())?.with_overrides(cli.data, bind_addr);

    let dataset = LaunchDataset::load(&config.data_path)?;
    tracing::info!(
        path = %config.data_path.display(),
        rows = dataset.height(),
        sites = dataset.sites().len(),
        payload_min = dataset.payload_bounds().min,
        payload_max = dataset.payload_bounds().max,
        "dataset loaded"
    );
    let dataset = Arc::new(dataset);

    match cli.command.unwrap_or(Command::Serve { addr: None }) {
        Command::Serve { .. } => web::serve(dataset, &config),
        Command::Window => app::run(dataset, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        match puffin_http::Server::new(&addr) {
            Ok(server) => {
                tracing::info!(%addr, "puffin server started");
                Some(server)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to start puffin server");
                None
            }
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "{}", e.title());
            ExitCode::FAILURE
        }
    }
}
