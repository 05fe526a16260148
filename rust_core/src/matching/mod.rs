//! Team Name Matching
//!
//! Exact alias lookup with an edit-distance fallback. The scoring helpers
//! live here; the registry-owning matcher is in `team`.

use crate::models::TeamAlias;
use serde::{Deserialize, Serialize};
use strsim::levenshtein;

pub mod team;

pub use team::TeamNameMatcher;

/// Minimum similarity for a fuzzy candidate to be accepted.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Normalize an external team name for lookup.
pub fn normalize_team_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Edit-distance similarity in [0, 1].
///
/// `(max_len - levenshtein(a, b)) / max_len`, with lengths counted in chars.
/// Two empty strings are a perfect match.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// How a team name was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Exact,
    Fuzzy,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Exact => "exact",
            MatchMethod::Fuzzy => "fuzzy",
        }
    }
}

/// A resolved team name, borrowing the registry entry.
#[derive(Debug, Clone, Copy)]
pub struct TeamMatch<'a> {
    pub alias: &'a TeamAlias,
    pub method: MatchMethod,
    /// Similarity between the normalized input and the alias key (1.0 for exact)
    pub score: f64,
}

impl<'a> TeamMatch<'a> {
    pub fn exact(alias: &'a TeamAlias) -> Self {
        Self {
            alias,
            method: MatchMethod::Exact,
            score: 1.0,
        }
    }

    pub fn fuzzy(alias: &'a TeamAlias, score: f64) -> Self {
        Self {
            alias,
            method: MatchMethod::Fuzzy,
            score,
        }
    }

    pub fn describe(&self) -> String {
        match self.method {
            MatchMethod::Exact => format!("{} (exact match)", self.alias.internal_name),
            MatchMethod::Fuzzy => format!(
                "{} (fuzzy match, similarity {:.2})",
                self.alias.internal_name, self.score
            ),
        }
    }
}

/// Owned form of `TeamMatch`, for callers that cannot hold a registry borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTeam {
    pub alias: TeamAlias,
    pub method: MatchMethod,
    pub score: f64,
}

impl From<TeamMatch<'_>> for ResolvedTeam {
    fn from(m: TeamMatch<'_>) -> Self {
        Self {
            alias: m.alias.clone(),
            method: m.method,
            score: m.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("michigan", "michigan"), 1.0);
    }

    #[test]
    fn test_similarity_empty_strings() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("", "texas"), 0.0);
        assert_eq!(similarity("texas", ""), 0.0);
    }

    #[test]
    fn test_similarity_one_edit() {
        let score = similarity("ohio stat", "ohio state");
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_bounds() {
        let pairs = [
            ("alabama", "auburn"),
            ("lsu", "louisiana state university"),
            ("a", "zzzz"),
            ("notre dame", "notre dame"),
            ("école", "ecole"),
        ];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{} vs {} -> {}", a, b, s);
            assert!((s - similarity(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_similarity_counts_chars_not_bytes() {
        // one substitution over five chars
        let score = similarity("école", "ecole");
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_team_name() {
        assert_eq!(normalize_team_name("  Ohio State \n"), "ohio state");
        assert_eq!(normalize_team_name("LSU"), "lsu");
    }

    #[test]
    fn test_match_method_serialization() {
        assert_eq!(serde_json::to_string(&MatchMethod::Fuzzy).unwrap(), "\"fuzzy\"");
    }
}
