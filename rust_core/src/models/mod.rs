// Shared models for ProGrade team mapping
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Competition Level
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamLevel {
    Nfl,
    College,
    HighSchool,
}

impl TeamLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamLevel::Nfl => "NFL",
            TeamLevel::College => "COLLEGE",
            TeamLevel::HighSchool => "HIGH_SCHOOL",
        }
    }
}

impl fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Team Aliases
// ============================================================================

/// A registered mapping from an external-source team name to the canonical
/// internal team identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TeamAlias {
    /// Alias as the external feed spells it. The registry key is its lower-cased form.
    pub external_name: String,
    /// Canonical display name
    pub internal_name: String,
    pub abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    pub level: TeamLevel,
    /// Static trust weight in [0, 1]
    pub confidence: f64,
}

impl TeamAlias {
    pub fn new(
        external_name: impl Into<String>,
        internal_name: impl Into<String>,
        abbreviation: impl Into<String>,
        level: TeamLevel,
        confidence: f64,
    ) -> Self {
        Self {
            external_name: external_name.into(),
            internal_name: internal_name.into(),
            abbreviation: abbreviation.into(),
            conference: None,
            level,
            confidence,
        }
    }

    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    /// Registry key for this alias.
    pub fn key(&self) -> String {
        self.external_name.to_lowercase()
    }
}

// ============================================================================
// Game Mapping
// ============================================================================

/// A game as reported by an external play-by-play source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMappingInput {
    pub home_team: String,
    pub away_team: String,
    /// Source identifier, e.g. "ncaa_api" or "espn"
    pub source: String,
    pub season: u32,
}

impl GameMappingInput {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        source: impl Into<String>,
        season: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            source: source.into(),
            season,
        }
    }

    /// Composite key built from the raw input names, so it exists even when
    /// neither team resolves.
    pub fn external_game_id(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.source, self.season, self.home_team, self.away_team
        )
    }
}

/// Outcome of resolving both participants of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMappingResult {
    pub external_game_id: String,
    /// True only when both sides resolved
    pub mapped: bool,
    pub confidence: f64,
    /// Raw names of the sides that need manual mapping, home first
    pub suggested_teams: Vec<String>,
    /// One line per side, home first
    pub mapping_notes: Vec<String>,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
}
