//! Receipt points server entry point.
//!
//! Usage:
//!   receipt-points [--host <HOST>] [--port <PORT>] [--logging]

use clap::Parser;
use receipt_points::Processor;
use receipt_points_server::{run_server, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.logging);

    let config = cli.into_config();
    let processor = Processor::in_memory(config.processor());

    tracing::info!(port = config.port, "starting receipt points server");
    run_server(config, processor).await?;

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(log_requests: bool) {
    let default_filter = if log_requests {
        "receipt_points=debug,receipt_points_server=debug,tower_http=info"
    } else {
        "receipt_points=info,receipt_points_server=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
