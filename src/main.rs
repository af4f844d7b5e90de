//! DeltaPag CORS proxy.
//!
//! ```text
//!     Browser ──▶ proxy ──┬─ OPTIONS ──────────────────▶ preflight (local)
//!                         ├─ /api/generate-checkout-link/<id> ─▶ link (local)
//!                         ├─ /api/v2/* ──────────────▶ upstream API + CORS
//!                         └─ anything else ─────────▶ 404
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use deltapag_proxy::config::{loader::read_config, validate_config, ConfigError, ProxyConfig};
use deltapag_proxy::observability::init_logging;
use deltapag_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "deltapag-proxy")]
#[command(about = "CORS reverse proxy for the DeltaPag API", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the upstream base URL.
    #[arg(short, long)]
    upstream: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ProxyConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(upstream) = self.upstream {
            config.upstream.base_url = upstream;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability.log_level);
    tracing::info!("deltapag-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        res = &mut server_task => res??,
        res = shutdown.trigger_on_ctrl_c() => {
            res?;
            server_task.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
