pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod suggestions;

pub use catalog::{Gender, NameCatalog, NameRecord};
pub use domain::generation::{GenerationEvent, GenerationId, GenerationRecord};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use suggestions::{
    Preference, Suggestion, SuggestionEngine, Uniqueness, DEFAULT_QUANTITY, RATIONALE,
};
