//! Static seed catalog of candidate names.
//!
//! The catalog is fixed at process start and shared read-only by every
//! request; there are no mutation operations and no error conditions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boy => "boy",
            Self::Girl => "girl",
            Self::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate name in the seed catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameRecord {
    pub name: &'static str,
    pub gender: Gender,
    pub origin: &'static str,
    pub meaning: &'static str,
    pub themes: &'static [&'static str],
    /// Static estimate of commonness in `[0, 1]`.
    pub popularity: f64,
}

impl NameRecord {
    /// Name length in characters, not bytes.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

const SEED_NAMES: &[NameRecord] = &[
    // English / classic
    NameRecord {
        name: "James",
        gender: Gender::Boy,
        origin: "English",
        meaning: "supplanter",
        themes: &["classic", "biblical"],
        popularity: 0.2,
    },
    NameRecord {
        name: "Elizabeth",
        gender: Gender::Girl,
        origin: "English",
        meaning: "oath of God",
        themes: &["classic", "biblical"],
        popularity: 0.2,
    },
    NameRecord {
        name: "Grace",
        gender: Gender::Girl,
        origin: "English",
        meaning: "grace",
        themes: &["virtue", "classic"],
        popularity: 0.15,
    },
    // Irish / Celtic
    NameRecord {
        name: "Aoife",
        gender: Gender::Girl,
        origin: "Irish",
        meaning: "beauty, radiance",
        themes: &["celtic", "myth"],
        popularity: 0.02,
    },
    NameRecord {
        name: "Finn",
        gender: Gender::Boy,
        origin: "Irish",
        meaning: "fair",
        themes: &["celtic", "modern"],
        popularity: 0.08,
    },
    // Sanskrit
    NameRecord {
        name: "Aarav",
        gender: Gender::Boy,
        origin: "Sanskrit",
        meaning: "peaceful",
        themes: &["hindu", "virtue"],
        popularity: 0.1,
    },
    NameRecord {
        name: "Anaya",
        gender: Gender::Girl,
        origin: "Sanskrit",
        meaning: "caring, protection",
        themes: &["hindu", "virtue"],
        popularity: 0.09,
    },
    // Arabic
    NameRecord {
        name: "Zayd",
        gender: Gender::Boy,
        origin: "Arabic",
        meaning: "growth, abundance",
        themes: &["muslim", "virtue"],
        popularity: 0.04,
    },
    NameRecord {
        name: "Layla",
        gender: Gender::Girl,
        origin: "Arabic",
        meaning: "night",
        themes: &["muslim", "poetic"],
        popularity: 0.14,
    },
    // Spanish
    NameRecord {
        name: "Mateo",
        gender: Gender::Boy,
        origin: "Spanish",
        meaning: "gift of God",
        themes: &["biblical", "classic"],
        popularity: 0.18,
    },
    NameRecord {
        name: "Sofia",
        gender: Gender::Girl,
        origin: "Greek/Spanish",
        meaning: "wisdom",
        themes: &["classic"],
        popularity: 0.2,
    },
    // Swahili / Yoruba
    NameRecord {
        name: "Asha",
        gender: Gender::Girl,
        origin: "Swahili",
        meaning: "life, hope",
        themes: &["virtue", "nature"],
        popularity: 0.05,
    },
    NameRecord {
        name: "Kehinde",
        gender: Gender::Boy,
        origin: "Yoruba",
        meaning: "second-born of twins",
        themes: &["heritage"],
        popularity: 0.01,
    },
    // Chinese
    NameRecord {
        name: "Wei",
        gender: Gender::Unisex,
        origin: "Chinese",
        meaning: "great, mighty",
        themes: &["virtue"],
        popularity: 0.06,
    },
    NameRecord {
        name: "Mei",
        gender: Gender::Girl,
        origin: "Chinese",
        meaning: "beautiful",
        themes: &["virtue"],
        popularity: 0.07,
    },
    // Hebrew
    NameRecord {
        name: "Noah",
        gender: Gender::Boy,
        origin: "Hebrew",
        meaning: "rest, comfort",
        themes: &["biblical", "classic"],
        popularity: 0.22,
    },
    NameRecord {
        name: "Miriam",
        gender: Gender::Girl,
        origin: "Hebrew",
        meaning: "wished-for child",
        themes: &["biblical", "classic"],
        popularity: 0.03,
    },
    // Greek
    NameRecord {
        name: "Atlas",
        gender: Gender::Boy,
        origin: "Greek",
        meaning: "bearer of the heavens",
        themes: &["myth", "modern"],
        popularity: 0.05,
    },
    NameRecord {
        name: "Iris",
        gender: Gender::Girl,
        origin: "Greek",
        meaning: "rainbow",
        themes: &["nature", "myth"],
        popularity: 0.09,
    },
    // Slavic
    NameRecord {
        name: "Mila",
        gender: Gender::Girl,
        origin: "Slavic",
        meaning: "gracious, dear",
        themes: &["modern", "virtue"],
        popularity: 0.16,
    },
    NameRecord {
        name: "Nikolai",
        gender: Gender::Boy,
        origin: "Slavic",
        meaning: "victory of the people",
        themes: &["classic"],
        popularity: 0.04,
    },
    // Japanese
    NameRecord {
        name: "Ren",
        gender: Gender::Unisex,
        origin: "Japanese",
        meaning: "lotus, love",
        themes: &["nature", "modern"],
        popularity: 0.05,
    },
    NameRecord {
        name: "Sora",
        gender: Gender::Unisex,
        origin: "Japanese",
        meaning: "sky",
        themes: &["nature"],
        popularity: 0.03,
    },
];

/// Read-only view over the fixed name records.
///
/// `all()` yields the records in declaration order, the same sequence on
/// every call.
#[derive(Clone, Copy, Debug)]
pub struct NameCatalog {
    records: &'static [NameRecord],
}

impl Default for NameCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl NameCatalog {
    pub fn seeded() -> Self {
        Self { records: SEED_NAMES }
    }

    pub fn all(&self) -> &'static [NameRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
