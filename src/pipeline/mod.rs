//! Pipeline module - external collaborators behind the HTTP adapter

mod command;
mod simulated;
mod traits;

pub use command::CommandPipeline;
pub use simulated::SimulatedPipeline;
pub use traits::Pipeline;

use std::sync::Arc;

use tracing::info;

use crate::config::PipelineConfig;

/// Pipeline provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Command,
    Simulated,
}

impl PipelineKind {
    /// Parse a provider name as used in config files and on the command line
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "command" => Ok(Self::Command),
            "simulated" => Ok(Self::Simulated),
            other => anyhow::bail!("Unknown pipeline provider: {}", other),
        }
    }
}

/// Create the collaborator described by `config`
pub fn from_config(config: &PipelineConfig) -> anyhow::Result<Arc<dyn Pipeline>> {
    let pipeline: Arc<dyn Pipeline> = match PipelineKind::parse(&config.provider)? {
        PipelineKind::Command => Arc::new(CommandPipeline::new(
            config.ask_command.clone(),
            config.build_command.clone(),
            config.working_dir.clone(),
        )),
        PipelineKind::Simulated => Arc::new(SimulatedPipeline::new()),
    };

    info!("Initialized pipeline provider: {}", pipeline.name());

    Ok(pipeline)
}
