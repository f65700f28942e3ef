//! Highlight gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                    GATEWAY                    │
//!   GET /api/debug       │  ┌──────────┐   ┌──────────┐                  │
//!   ─────────────────────┼─▶│  health  │──▶│ backend  │── GET /health ───┼──▶
//!                        │  │  probe   │   │  target  │                  │   Processing
//!   POST /api/highlight  │  ├──────────┤   │ resolver │                  │    Backend
//!   ─────────────────────┼─▶│  proxy   │──▶│          │── POST ──────────┼──▶
//!   ◀── PDF / JSON error ┼──│ forward  │   └──────────┘  /highlight-pdf  │
//!                        │  └──────────┘                                 │
//!                        │  config · observability · lifecycle           │
//!                        └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use highlight_gateway::backend::BackendTarget;
use highlight_gateway::config::{self, GatewayConfig};
use highlight_gateway::lifecycle::{signals, Shutdown};
use highlight_gateway::observability::{logging, metrics};
use highlight_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "highlight-gateway")]
#[command(about = "Gateway relaying PDF uploads to the highlighting backend", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Backend address, overrides the config file and BACKEND_URL.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };
    config::apply_env_overrides(&mut config);
    config::apply_backend_override(&mut config, args.backend_url);
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("highlight-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_url = %BackendTarget::resolve(config.backend.url.as_deref()),
        backend_configured = config.backend.is_externally_set(),
        probe_timeout_ms = config.backend.probe_timeout_ms,
        forward_timeout_secs = ?config.backend.forward_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_shutdown_signal().await;
    shutdown.trigger();

    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
