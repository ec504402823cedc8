//! Serve command - HTTP API server

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::server::{self, AppState};
use crate::{pipeline, startup};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (default: 8000)
    #[arg(long, env = "API_PORT")]
    pub port: Option<u16>,

    /// Host to bind to (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Disable CORS headers
    #[arg(long)]
    pub no_cors: bool,

    /// Pipeline provider
    #[arg(long, value_parser = ["command", "simulated"])]
    pub pipeline: Option<String>,
}

/// Resolve the listen address: flag or env, then config file
fn bind_addr(args: &ServeArgs, config: &Config) -> String {
    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    format!("{}:{}", host, port)
}

pub async fn run(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    super::override_provider(&mut config, args.pipeline.clone());

    let warnings = startup::log_warnings(&config.pipeline);
    if warnings > 0 {
        info!("Continuing startup with {} warning(s)", warnings);
    }

    if args.no_cors {
        config.server.cors = false;
    }

    let pipeline = pipeline::from_config(&config.pipeline)?;
    let state = AppState::new(pipeline);
    let app = server::router(state, &config.server);

    let addr = bind_addr(&args, &config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("backcc server listening on http://{}", addr);
    println!("  POST /api/ask     - Answer a question");
    println!("  POST /api/rebuild - Rebuild the index");
    println!("  GET  /health      - Health check");

    server::serve(listener, app).await
}
