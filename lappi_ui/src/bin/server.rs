#![allow(missing_docs)]

use clap::Parser;
use lappi_ui::UiConfig;
use lappi_ui::server::{UiServer, serve};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Lappi UI server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the development API host.
    #[arg(long)]
    dev: bool,

    /// Listen address, overrides the config file.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Static files directory, overrides the config file.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lappi_ui=info,lappi_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => UiConfig::load(path)?,
        None => UiConfig::default(),
    };

    config.apply_env();

    if args.dev {
        config.dev_mode = true;
    }

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    let server = Arc::new(UiServer::new(&config)?);

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        dev_mode = config.dev_mode,
        dev_host = ?config.dev_host,
        routes = server.routes().len(),
        "lappi ui listening"
    );

    serve(server, listener).await?;

    Ok(())
}
