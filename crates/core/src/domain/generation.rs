//! Generation events: the append-only log of (preference, suggestions)
//! pairs. The core only ever writes them; they are read back solely for
//! history listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::suggestions::{Preference, Suggestion};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationId(pub String);

/// One generation request/response pair, before the store assigns identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationEvent {
    pub preference: Preference,
    pub suggestions: Vec<Suggestion>,
    pub notes: Option<String>,
}

impl GenerationEvent {
    pub fn new(preference: Preference, suggestions: Vec<Suggestion>) -> Self {
        Self { preference, suggestions, notes: None }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A persisted generation event with its store-assigned id and timestamps.
/// Never updated or deleted once written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: GenerationId,
    pub preference: Preference,
    pub suggestions: Vec<Suggestion>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
