//! backcc - HTTP adapter for a RAG question-answering pipeline
//!
//! Forwards `/api/ask` and `/api/rebuild` to external collaborators that
//! answer questions and rebuild the search index.

mod cli;
mod config;
mod pipeline;
mod server;
mod startup;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "backcc=debug,tower_http=debug,warn"
    } else {
        "backcc=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    cli.run().await
}
