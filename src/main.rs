//! PaperX catalogue API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id → trace → catch panic → body limit → cors → timeout
//!                                                                    │
//!                                                                    ▼
//!                                                          ┌──────────────────┐
//!                                                          │   api handlers   │
//!                                                          │ projects / cats  │
//!                                                          │     / health     │
//!                                                          └────────┬─────────┘
//!                                                                   │
//!                                   ┌───────────────────────────────┼──────────────┐
//!                                   ▼                               ▼              │
//!                           ┌──────────────┐               ┌──────────────┐        │
//!                           │    query     │◀── snapshot ──│    store     │        │
//!                           │ filter/sort/ │               │ (in-memory)  │        │
//!                           │   paginate   │               └──────────────┘        │
//!                           └──────┬───────┘                                       │
//!     Client Response              ▼                                               │
//!     ◀──────────────────── JSON envelope ◀─────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use paperx_api::config::{load_config, validation::validate_config, ApiConfig, ConfigError};
use paperx_api::lifecycle::{startup, Shutdown};
use paperx_api::observability::logging;
use paperx_api::HttpServer;

#[derive(Parser)]
#[command(name = "paperx-api")]
#[command(about = "HTTP JSON API for the PaperX project catalogue", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "PAPERX_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ApiConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "paperx-api starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::start_metrics(&config);
    let state = startup::build_state(&config);
    let listener = startup::bind(&config).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
