//! ProGrade Core - team name resolution for play-by-play imports.
//!
//! This module provides:
//! - A registry of known team aliases seeded from a built-in table
//! - Exact and Levenshtein-based fuzzy team name matching
//! - Confidence-scored mapping of two-team games
//! - Parallel batch game mapping via rayon
//! - JSON import/export and file persistence of the alias registry
//! - A lock-guarded shared matcher for multi-threaded hosts

pub mod default_teams;
pub mod error;
pub mod matching;
pub mod models;
pub mod shared;
pub mod team_cache;

pub use error::MappingError;
pub use matching::{
    similarity, MatchMethod, ResolvedTeam, TeamMatch, TeamNameMatcher,
    FUZZY_MATCH_THRESHOLD,
};
pub use models::{GameMappingInput, GameMappingResult, TeamAlias, TeamLevel};
pub use shared::SharedTeamMatcher;
