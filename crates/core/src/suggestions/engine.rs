//! Filtering, ranking, and truncation over the catalog.

use std::cmp::Ordering;

use crate::catalog::{Gender, NameCatalog, NameRecord};

use super::scoring;
use super::types::{Preference, Suggestion};

/// Stateless ranking engine over an immutable catalog.
///
/// `generate` only reads shared data and allocates request-local output, so
/// concurrent calls need no coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuggestionEngine {
    catalog: NameCatalog,
}

impl SuggestionEngine {
    pub fn new(catalog: NameCatalog) -> Self {
        Self { catalog }
    }

    /// Engine over the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(NameCatalog::seeded())
    }

    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    /// Rank the catalog against a preference and return the top `quantity`
    /// suggestions, best first.
    ///
    /// Deterministic: ties keep catalog declaration order (the sort is
    /// stable and keys on the unrounded score). An empty result is valid.
    /// `quantity` is not bounded above; anything past the catalog size is
    /// truncated by the catalog itself.
    pub fn generate(&self, preference: &Preference, quantity: usize) -> Vec<Suggestion> {
        let mut ranked: Vec<(f64, &NameRecord)> = self
            .catalog
            .all()
            .iter()
            .filter(|record| passes_hard_filters(preference, record))
            .map(|record| (scoring::score(preference, record), record))
            .collect();

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        ranked.truncate(quantity);

        ranked
            .into_iter()
            .map(|(raw, record)| Suggestion::from_record(record, scoring::round_score(raw)))
            .collect()
    }
}

/// Hard constraints exclude a record outright rather than down-scoring it.
fn passes_hard_filters(preference: &Preference, record: &NameRecord) -> bool {
    if let Some(max_length) = preference.max_length {
        if record.name_len() > max_length {
            return false;
        }
    }
    if let Some(gender) = preference.gender {
        if record.gender != gender && record.gender != Gender::Unisex {
            return false;
        }
    }
    true
}
