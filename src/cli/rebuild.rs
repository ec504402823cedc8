//! Rebuild command - run the build_index collaborator from the terminal

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::pipeline;
use crate::server::INDEX_REBUILT;

#[derive(Args)]
pub struct RebuildArgs {
    /// Pipeline provider
    #[arg(long, value_parser = ["command", "simulated"])]
    pub pipeline: Option<String>,
}

pub async fn run(args: RebuildArgs, mut config: Config) -> anyhow::Result<()> {
    super::override_provider(&mut config, args.pipeline);
    let pipeline = pipeline::from_config(&config.pipeline)?;

    info!("Rebuilding index via {} pipeline", pipeline.name());
    pipeline.build_index().await?;

    println!("{}", INDEX_REBUILT);
    Ok(())
}
