//! Collaborator traits

use async_trait::async_trait;

/// External question-answering and indexing collaborator
///
/// The HTTP adapter only forwards to these two operations; retrieval,
/// embeddings and LLM calls all live behind this seam.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    /// Answer a question. The question is already trimmed and non-empty.
    async fn ask(&self, question: &str) -> anyhow::Result<String>;

    /// Rebuild the search index
    async fn build_index(&self) -> anyhow::Result<()>;
}
