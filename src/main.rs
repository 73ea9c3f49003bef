use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use answer_api::config::{self, validation::validate_config, ConfigError, ServiceConfig};
use answer_api::lifecycle::{shutdown_on_signal, Shutdown};
use answer_api::observability;
use answer_api::HttpServer;

#[derive(Parser)]
#[command(name = "answer-api")]
#[command(about = "Question answering HTTP API", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    observability::init_logging(&config.observability);
    tracing::info!("answer-api v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        observability::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_on_signal(&shutdown).await;
    });

    HttpServer::new(config).run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
