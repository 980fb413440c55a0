use async_trait::async_trait;
use thiserror::Error;

use namery_core::domain::generation::{GenerationEvent, GenerationRecord};

pub mod generation;
pub mod memory;

pub use generation::SqlGenerationRepository;
pub use memory::{FailingGenerationRepository, InMemoryGenerationRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Append-only store of generation events.
///
/// `record` is called once per generate request on a best-effort basis; the
/// caller treats failure as non-fatal. `list` feeds the history endpoint,
/// newest first.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    async fn record(&self, event: GenerationEvent) -> Result<GenerationRecord, RepositoryError>;

    async fn list(&self, limit: u32) -> Result<Vec<GenerationRecord>, RepositoryError>;
}
