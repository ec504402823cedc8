//! Simulated pipeline for local development
//!
//! Returns canned answers without requiring the retrieval scripts or an LLM
//! credential.

use async_trait::async_trait;
use tracing::info;

use super::Pipeline;

/// Simulated collaborator
#[derive(Default)]
pub struct SimulatedPipeline;

impl SimulatedPipeline {
    /// Create a new simulated pipeline
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Pipeline for SimulatedPipeline {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn ask(&self, question: &str) -> anyhow::Result<String> {
        Ok(format!(
            "I understand you're asking about \"{question}\".\n\n\
             This is a simulated response for testing purposes. Configure an \
             ask command to answer from the real index."
        ))
    }

    async fn build_index(&self) -> anyhow::Result<()> {
        info!("Simulated index rebuild");
        Ok(())
    }
}
