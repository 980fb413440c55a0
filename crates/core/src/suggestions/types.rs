//! Request and response types for the suggestion engine.

use serde::{Deserialize, Serialize};

use crate::catalog::{Gender, NameRecord};
use crate::errors::DomainError;

/// How common or unique the suggested names should be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uniqueness {
    Common,
    Balanced,
    Unique,
}

/// One request's structured description of desired name attributes.
///
/// List fields default to empty and optional fields to `None`, matching the
/// wire shape of generate requests. `surname` is the only required field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub surname: String,
    #[serde(default)]
    pub cultures: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub beliefs: Vec<String>,
    #[serde(default)]
    pub family_origins: Vec<String>,
    #[serde(default)]
    pub parent_names: Vec<String>,
    #[serde(default)]
    pub sibling_names: Vec<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub starts_with: Option<String>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub uniqueness: Option<Uniqueness>,
}

impl Preference {
    pub fn new(surname: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            cultures: Vec::new(),
            languages: Vec::new(),
            beliefs: Vec::new(),
            family_origins: Vec::new(),
            parent_names: Vec::new(),
            sibling_names: Vec::new(),
            gender: None,
            style: None,
            starts_with: None,
            max_length: None,
            uniqueness: None,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_cultures(mut self, cultures: Vec<String>) -> Self {
        self.cultures = cultures;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_beliefs(mut self, beliefs: Vec<String>) -> Self {
        self.beliefs = beliefs;
        self
    }

    pub fn with_sibling_names(mut self, sibling_names: Vec<String>) -> Self {
        self.sibling_names = sibling_names;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = Some(uniqueness);
        self
    }

    /// Check the invariants the engine assumes hold for well-formed input.
    ///
    /// Scoring itself is total; this is the validation hook for the
    /// transport layer.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.surname.trim().is_empty() {
            return Err(DomainError::InvariantViolation("surname must not be blank".to_string()));
        }
        if self.max_length == Some(0) {
            return Err(DomainError::InvariantViolation(
                "max_length must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// One ranked result, carrying its rounded score and a fixed rationale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub gender: Gender,
    pub origin: String,
    pub meaning: String,
    pub themes: Vec<String>,
    pub score: f64,
    pub rationale: String,
}

impl Suggestion {
    pub fn from_record(record: &NameRecord, score: f64) -> Self {
        Self {
            name: record.name.to_string(),
            gender: record.gender,
            origin: record.origin.to_string(),
            meaning: record.meaning.to_string(),
            themes: record.themes.iter().map(|theme| theme.to_string()).collect(),
            score,
            rationale: super::RATIONALE.to_string(),
        }
    }
}
