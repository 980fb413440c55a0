//! Test doubles for the generation event store.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use namery_core::domain::generation::{GenerationEvent, GenerationId, GenerationRecord};

use super::{GenerationRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryGenerationRepository {
    records: RwLock<Vec<GenerationRecord>>,
}

#[async_trait::async_trait]
impl GenerationRepository for InMemoryGenerationRepository {
    async fn record(&self, event: GenerationEvent) -> Result<GenerationRecord, RepositoryError> {
        let now = Utc::now();
        let record = GenerationRecord {
            id: GenerationId(format!("gen-{}", Uuid::new_v4())),
            preference: event.preference,
            suggestions: event.suggestions,
            notes: event.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self, limit: u32) -> Result<Vec<GenerationRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// Always fails; exercises the fail-open persistence path.
#[derive(Default)]
pub struct FailingGenerationRepository;

#[async_trait::async_trait]
impl GenerationRepository for FailingGenerationRepository {
    async fn record(&self, _event: GenerationEvent) -> Result<GenerationRecord, RepositoryError> {
        Err(RepositoryError::Decode("generation store is unavailable".to_string()))
    }

    async fn list(&self, _limit: u32) -> Result<Vec<GenerationRecord>, RepositoryError> {
        Err(RepositoryError::Decode("generation store is unavailable".to_string()))
    }
}
