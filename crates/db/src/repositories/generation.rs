//! SQLite-backed generation event log.
//!
//! Preference and suggestion payloads are stored as JSON text columns; the
//! store assigns the id and timestamps on insert.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use namery_core::domain::generation::{GenerationEvent, GenerationId, GenerationRecord};

use super::{GenerationRepository, RepositoryError};
use crate::DbPool;

pub struct SqlGenerationRepository {
    pool: DbPool,
}

impl SqlGenerationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationRepository for SqlGenerationRepository {
    async fn record(&self, event: GenerationEvent) -> Result<GenerationRecord, RepositoryError> {
        let id = GenerationId(format!("gen-{}", Uuid::new_v4()));
        let now = Utc::now();

        let preference_json = serde_json::to_string(&event.preference)
            .map_err(|error| RepositoryError::Decode(error.to_string()))?;
        let suggestions_json = serde_json::to_string(&event.suggestions)
            .map_err(|error| RepositoryError::Decode(error.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO generation_event (id, preference, suggestions, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id.0)
        .bind(&preference_json)
        .bind(&suggestions_json)
        .bind(&event.notes)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(GenerationRecord {
            id,
            preference: event.preference,
            suggestions: event.suggestions,
            notes: event.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list(&self, limit: u32) -> Result<Vec<GenerationRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, preference, suggestions, notes, created_at, updated_at
            FROM generation_event
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_record).collect()
    }
}

fn decode_record(row: SqliteRow) -> Result<GenerationRecord, RepositoryError> {
    let preference = serde_json::from_str(&row.get::<String, _>("preference"))
        .map_err(|error| RepositoryError::Decode(format!("preference column: {error}")))?;
    let suggestions = serde_json::from_str(&row.get::<String, _>("suggestions"))
        .map_err(|error| RepositoryError::Decode(format!("suggestions column: {error}")))?;

    Ok(GenerationRecord {
        id: GenerationId(row.get("id")),
        preference,
        suggestions,
        notes: row.get("notes"),
        created_at: decode_timestamp(&row, "created_at")?,
        updated_at: decode_timestamp(&row, "updated_at")?,
    })
}

fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = row.get(column);
    DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|error| RepositoryError::Decode(format!("{column} column: {error}")))
}

#[cfg(test)]
mod tests {
    use namery_core::domain::generation::GenerationEvent;
    use namery_core::suggestions::{Preference, SuggestionEngine, DEFAULT_QUANTITY};
    use namery_core::Gender;

    use crate::repositories::{GenerationRepository, SqlGenerationRepository};
    use crate::{connect_with_settings, migrations};

    async fn repository() -> SqlGenerationRepository {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        migrations::run_pending(&pool).await.expect("migrations");
        SqlGenerationRepository::new(pool)
    }

    fn event(surname: &str) -> GenerationEvent {
        let preference = Preference::new(surname).with_gender(Gender::Girl);
        let suggestions = SuggestionEngine::seeded().generate(&preference, DEFAULT_QUANTITY);
        GenerationEvent::new(preference, suggestions)
    }

    #[tokio::test]
    async fn record_assigns_id_and_round_trips_payloads() {
        let repository = repository().await;

        let saved = repository.record(event("Okafor")).await.expect("record event");
        assert!(saved.id.0.starts_with("gen-"));

        let listed = repository.list(10).await.expect("list events");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], saved);
        assert_eq!(listed[0].preference.surname, "Okafor");
        assert!(!listed[0].suggestions.is_empty());
    }

    #[tokio::test]
    async fn list_returns_newest_first_and_honors_the_limit() {
        let repository = repository().await;

        repository.record(event("First")).await.expect("record first");
        repository.record(event("Second")).await.expect("record second");
        repository.record(event("Third")).await.expect("record third");

        let latest_two = repository.list(2).await.expect("list events");
        assert_eq!(latest_two.len(), 2);
        assert_eq!(latest_two[0].preference.surname, "Third");
        assert_eq!(latest_two[1].preference.surname, "Second");
    }

    #[tokio::test]
    async fn notes_survive_the_round_trip() {
        let repository = repository().await;

        let saved = repository
            .record(event("Okafor").with_notes("first visit"))
            .await
            .expect("record event");
        assert_eq!(saved.notes.as_deref(), Some("first visit"));

        let listed = repository.list(1).await.expect("list events");
        assert_eq!(listed[0].notes.as_deref(), Some("first visit"));
    }
}
