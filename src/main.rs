//! Booking Service
//!
//! Serves an in-memory collection of bookings over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────────────┐
//!                    │                   BOOKING SERVICE                      │
//!                    │                                                        │
//!   Client Request   │  ┌──────────┐   ┌──────────┐   ┌─────────────────┐    │
//!   ─────────────────┼─▶│  http    │──▶│ routing  │──▶│    bookings     │    │
//!                    │  │  server  │   │ matcher  │   │    handlers     │    │
//!                    │  └──────────┘   └──────────┘   └───┬─────────┬───┘    │
//!                    │                                    │         │        │
//!                    │                          ┌─────────▼──┐ ┌────▼─────┐  │
//!                    │                          │  security  │ │  store   │  │
//!                    │                          │ Auth Gate  │ │ (ArcSwap)│  │
//!                    │                          └────────────┘ └──────────┘  │
//!   Client Response  │  ┌──────────┐                                          │
//!   ◀────────────────┼──│ response │◀── JSON body or {"error": ...}           │
//!                    │  └──────────┘                                          │
//!                    │                                                        │
//!                    │  config · observability · lifecycle · health · docs   │
//!                    └───────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use booking_service::config::validation::validate_config;
use booking_service::config::{load_config, ConfigError, ServiceConfig};
use booking_service::lifecycle;
use booking_service::observability::init_logging;

#[derive(Parser)]
#[command(name = "booking-service")]
#[command(about = "In-memory booking API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);
    tracing::info!("booking-service v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
