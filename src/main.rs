use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dockwatch::config::{self, Config};
use dockwatch::poller::Poller;
use dockwatch::runtime::DockerSource;
use dockwatch::table::Palette;

#[derive(Debug, Parser)]
#[command(version, about = "Live table of running Docker containers")]
struct Cli {
    /// Render a single frame and exit
    #[arg(long)]
    once: bool,

    /// Print status without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Write logs here instead of the default data directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the table, so logs always go to a file
    let log_path = cli.log_file.clone().unwrap_or_else(config::default_log_path);
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {:?}", log_path))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dockwatch=info".into()),
        ))
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .init();

    let config = Config {
        palette: if cli.no_color {
            Palette::Plain
        } else {
            Palette::Ansi
        },
        once: cli.once,
        ..Config::default()
    };

    let source = DockerSource::connect().await?;
    tracing::info!("Polling every {:?}", config.interval);

    let mut poller = Poller::new(source, std::io::stdout(), config);
    poller.run(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    };
    tracing::info!("Received {}, shutting down", signal);
}
