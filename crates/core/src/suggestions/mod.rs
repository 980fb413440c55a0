//! Preference scoring and ranking over the seed catalog.

mod engine;
mod scoring;
mod types;

pub use engine::SuggestionEngine;
pub use scoring::{round_score, score};
pub use types::{Preference, Suggestion, Uniqueness};

/// Suggestions returned when the caller does not override the quantity.
pub const DEFAULT_QUANTITY: usize = 12;

/// Fixed explanatory string carried by every suggestion.
pub const RATIONALE: &str =
    "Ranked using your preferences for culture, themes, style, and flow with your surname";
