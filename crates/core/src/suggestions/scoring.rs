//! Additive preference scoring.
//!
//! Every contribution is summed independently; no signal depends on
//! another's outcome. All string tests are case-insensitive
//! substring/prefix/suffix checks with no tokenization or locale handling.

use crate::catalog::NameRecord;

use super::types::{Preference, Uniqueness};

pub const GENDER_MATCH_BONUS: f64 = 2.0;
pub const GENDER_MISMATCH_PENALTY: f64 = -0.5;
pub const CULTURE_MATCH_BONUS: f64 = 1.5;
pub const LANGUAGE_THEME_BONUS: f64 = 0.5;
pub const BELIEF_THEME_BONUS: f64 = 1.0;
pub const STYLE_THEME_BONUS: f64 = 1.0;
pub const PREFIX_MATCH_BONUS: f64 = 0.8;
pub const LENGTH_FIT_BONUS: f64 = 0.4;
pub const SURNAME_CLASH_PENALTY: f64 = -0.2;
pub const SIBLING_CLASH_PENALTY: f64 = -0.3;

/// Score a single record against a preference profile.
///
/// Total over any well-formed preference; an all-penalty result is a valid
/// (negative) score, not an error.
pub fn score(preference: &Preference, record: &NameRecord) -> f64 {
    let name = record.name.to_lowercase();
    let mut total = 0.0;

    if let Some(gender) = preference.gender {
        total += if record.gender == gender { GENDER_MATCH_BONUS } else { GENDER_MISMATCH_PENALTY };
    }

    let origin = record.origin.to_lowercase();
    if preference.cultures.iter().any(|culture| origin.contains(&culture.to_lowercase())) {
        total += CULTURE_MATCH_BONUS;
    }

    // Themes are matched as one comma-joined blob, per signal.
    let themes = record.themes.join(",").to_lowercase();
    if preference.languages.iter().any(|language| themes.contains(&language.to_lowercase())) {
        total += LANGUAGE_THEME_BONUS;
    }
    if preference.beliefs.iter().any(|belief| themes.contains(&belief.to_lowercase())) {
        total += BELIEF_THEME_BONUS;
    }
    if let Some(style) = &preference.style {
        if themes.contains(&style.to_lowercase()) {
            total += STYLE_THEME_BONUS;
        }
    }

    if let Some(prefix) = &preference.starts_with {
        if name.starts_with(&prefix.to_lowercase()) {
            total += PREFIX_MATCH_BONUS;
        }
    }
    if let Some(max_length) = preference.max_length {
        if record.name_len() <= max_length {
            total += LENGTH_FIT_BONUS;
        }
    }

    total += surname_flow(&name, &preference.surname);
    total += uniqueness_component(preference.uniqueness, record.popularity);

    for sibling in &preference.sibling_names {
        total += sibling_clash(&name, sibling);
    }

    total
}

/// Round a raw score to three decimal places, half away from zero.
pub fn round_score(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn uniqueness_component(mode: Option<Uniqueness>, popularity: f64) -> f64 {
    match mode {
        Some(Uniqueness::Unique) => (0.8 - popularity).max(0.0),
        Some(Uniqueness::Common) => popularity,
        // Rewards mid-range popularity and goes negative at the extremes;
        // that curve is intentional.
        Some(Uniqueness::Balanced) | None => 0.5 * (0.6 - (popularity - 0.6).abs()),
    }
}

/// Alliteration and rhyme penalties against the family surname.
fn surname_flow(name: &str, surname: &str) -> f64 {
    let surname = surname.to_lowercase();
    let mut penalty = 0.0;

    if let (Some(initial), Some(surname_initial)) = (name.chars().next(), surname.chars().next()) {
        if initial == surname_initial {
            penalty += SURNAME_CLASH_PENALTY;
        }
    }
    if name.chars().count() > 2
        && surname.chars().count() > 2
        && char_suffix(name, 2) == char_suffix(&surname, 2)
    {
        penalty += SURNAME_CLASH_PENALTY;
    }

    penalty
}

/// Initial and rhyme penalties against one sibling name. Each matching
/// sibling applies its own penalties independently.
fn sibling_clash(name: &str, sibling: &str) -> f64 {
    let sibling = sibling.to_lowercase();
    if sibling.is_empty() {
        return 0.0;
    }

    let mut penalty = 0.0;
    if let Some(initial) = sibling.chars().next() {
        if name.starts_with(initial) {
            penalty += SIBLING_CLASH_PENALTY;
        }
    }
    if sibling.chars().count() > 2 && name.ends_with(&char_suffix(&sibling, 2)) {
        penalty += SIBLING_CLASH_PENALTY;
    }

    penalty
}

fn char_suffix(value: &str, n: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    chars[chars.len().saturating_sub(n)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Gender, NameRecord};
    use crate::suggestions::types::{Preference, Uniqueness};

    use super::*;

    fn record(name: &'static str, gender: Gender, popularity: f64) -> NameRecord {
        NameRecord {
            name,
            gender,
            origin: "English",
            meaning: "test",
            themes: &["classic", "biblical"],
            popularity,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn gender_match_and_mismatch_contributions() {
        let boy = record("Theo", Gender::Boy, 0.6);
        let base = uniqueness_component(None, 0.6);

        let matched = score(&Preference::new("Ward").with_gender(Gender::Boy), &boy);
        assert_close(matched, GENDER_MATCH_BONUS + base);

        let mismatched = score(&Preference::new("Ward").with_gender(Gender::Girl), &boy);
        assert_close(mismatched, GENDER_MISMATCH_PENALTY + base);
    }

    #[test]
    fn culture_matches_origin_as_case_insensitive_substring() {
        let preference =
            Preference::new("Ward").with_cultures(vec!["engLISH".to_string(), "Norse".to_string()]);
        let with = score(&preference, &record("Theo", Gender::Boy, 0.6));
        let without = score(&Preference::new("Ward"), &record("Theo", Gender::Boy, 0.6));

        assert_close(with - without, CULTURE_MATCH_BONUS);
    }

    #[test]
    fn language_belief_and_style_all_probe_the_joined_themes() {
        let base = score(&Preference::new("Ward"), &record("Theo", Gender::Boy, 0.6));

        let languages = Preference::new("Ward").with_languages(vec!["BIBLICAL".to_string()]);
        assert_close(
            score(&languages, &record("Theo", Gender::Boy, 0.6)) - base,
            LANGUAGE_THEME_BONUS,
        );

        let beliefs = Preference::new("Ward").with_beliefs(vec!["classic".to_string()]);
        assert_close(score(&beliefs, &record("Theo", Gender::Boy, 0.6)) - base, BELIEF_THEME_BONUS);

        let style = Preference::new("Ward").with_style("Classic");
        assert_close(score(&style, &record("Theo", Gender::Boy, 0.6)) - base, STYLE_THEME_BONUS);

        // The comma-joined blob means a probe can span the join.
        let spanning = Preference::new("Ward").with_beliefs(vec!["classic,biblical".to_string()]);
        assert_close(
            score(&spanning, &record("Theo", Gender::Boy, 0.6)) - base,
            BELIEF_THEME_BONUS,
        );
    }

    #[test]
    fn prefix_and_length_bonuses() {
        let base = score(&Preference::new("Ward"), &record("Theo", Gender::Boy, 0.6));

        let prefix = Preference::new("Ward").with_starts_with("th");
        assert_close(score(&prefix, &record("Theo", Gender::Boy, 0.6)) - base, PREFIX_MATCH_BONUS);

        let fits = Preference::new("Ward").with_max_length(4);
        assert_close(score(&fits, &record("Theo", Gender::Boy, 0.6)) - base, LENGTH_FIT_BONUS);
    }

    #[test]
    fn surname_initial_and_rhyme_clashes_stack() {
        let base = uniqueness_component(None, 0.6);

        // "Wills" vs surname "Wells": shared initial and shared "ls" ending.
        let both = score(&Preference::new("Wells"), &record("Wills", Gender::Boy, 0.6));
        assert_close(both, 2.0 * SURNAME_CLASH_PENALTY + base);

        // Two-character surname is too short for the rhyme check.
        let short = score(&Preference::new("Wu"), &record("Wills", Gender::Boy, 0.6));
        assert_close(short, SURNAME_CLASH_PENALTY + base);
    }

    #[test]
    fn sibling_penalties_apply_per_sibling_and_per_rule() {
        let preference = Preference::new("Day").with_sibling_names(vec!["Mia".to_string()]);
        let base = uniqueness_component(None, 0.6);

        // Starts with "m" and ends with "ia": both rules fire independently.
        let both = score(&preference, &record("Maria", Gender::Girl, 0.6));
        assert_close(both, 2.0 * SIBLING_CLASH_PENALTY + base);

        // Only the initial rule.
        let initial_only = score(&preference, &record("Milo", Gender::Boy, 0.6));
        assert_close(initial_only, SIBLING_CLASH_PENALTY + base);

        // Only the rhyme rule.
        let rhyme_only = score(&preference, &record("Sofia", Gender::Girl, 0.6));
        assert_close(rhyme_only, SIBLING_CLASH_PENALTY + base);

        // Blank sibling entries are skipped entirely.
        let blank = Preference::new("Day").with_sibling_names(vec![String::new()]);
        assert_close(score(&blank, &record("Maria", Gender::Girl, 0.6)), base);

        // Multiple matching siblings are additive, not capped.
        let two = Preference::new("Day")
            .with_sibling_names(vec!["Mia".to_string(), "Nadia".to_string()]);
        let stacked = score(&two, &record("Maria", Gender::Girl, 0.6));
        assert_close(stacked, 3.0 * SIBLING_CLASH_PENALTY + base);
    }

    #[test]
    fn uniqueness_modes_map_popularity_as_specified() {
        assert_close(uniqueness_component(Some(Uniqueness::Unique), 0.22), 0.58);
        assert_close(uniqueness_component(Some(Uniqueness::Unique), 0.9), 0.0);
        assert_close(uniqueness_component(Some(Uniqueness::Common), 0.22), 0.22);
        assert_close(uniqueness_component(Some(Uniqueness::Balanced), 0.6), 0.3);
        assert_close(uniqueness_component(None, 0.22), 0.11);
    }

    #[test]
    fn balanced_curve_bottoms_out_at_zero_popularity() {
        // Within the seeded [0, 1] range the curve floors at exactly zero;
        // only out-of-range popularity values would push it negative.
        assert_close(uniqueness_component(Some(Uniqueness::Balanced), 0.0), 0.0);
        assert_close(uniqueness_component(Some(Uniqueness::Balanced), 1.0), 0.1);
        assert!(uniqueness_component(Some(Uniqueness::Balanced), 1.5) < 0.0);
    }

    #[test]
    fn scores_round_to_three_decimals_half_away_from_zero() {
        assert_close(round_score(4.0799999999), 4.08);
        assert_close(round_score(0.0005), 0.001);
        assert_close(round_score(-0.0005), -0.001);
        assert_close(round_score(1.23), 1.23);
    }
}
