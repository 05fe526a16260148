//! Team Name Matcher
//!
//! Owns the alias registry and resolves external team names against it.
//! Exact key lookup first, then a Levenshtein similarity scan over the
//! registry keys.

use super::{normalize_team_name, similarity, TeamMatch, FUZZY_MATCH_THRESHOLD};
use crate::default_teams::default_aliases;
use crate::error::Result;
use crate::models::{GameMappingInput, GameMappingResult, TeamAlias, TeamLevel};
use crate::team_cache;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Multiplier applied to the resolved side's confidence when only one team maps.
pub const PARTIAL_MAPPING_PENALTY: f64 = 0.5;

/// Alias registry plus matching logic.
///
/// Entries keep the order in which their key was first registered;
/// overwriting a key replaces the entry in place.
#[derive(Debug, Clone)]
pub struct TeamNameMatcher {
    entries: Vec<TeamAlias>,
    /// lower-cased external name of each entry, same positions as `entries`
    keys: Vec<String>,
    /// lower-cased external name -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl TeamNameMatcher {
    /// Create a matcher seeded with the built-in aliases.
    pub fn new() -> Self {
        let mut matcher = Self::empty();
        for alias in default_aliases() {
            matcher.add_team_mapping(alias);
        }
        debug!("Seeded team registry with {} aliases", matcher.len());
        matcher
    }

    /// Create a matcher with no aliases.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            keys: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert or overwrite the alias registered under its lower-cased external name.
    pub fn add_team_mapping(&mut self, alias: TeamAlias) {
        let key = alias.key();
        match self.index.get(&key).copied() {
            Some(pos) => self.entries[pos] = alias,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.keys.push(key);
                self.entries.push(alias);
            }
        }
    }

    /// Resolve an external team name, returning the registry entry.
    pub fn find_team_match(&self, external_team_name: &str) -> Option<&TeamAlias> {
        self.match_team(external_team_name).map(|m| m.alias)
    }

    /// Resolve an external team name, reporting how it was resolved.
    pub fn match_team(&self, external_team_name: &str) -> Option<TeamMatch<'_>> {
        let normalized = normalize_team_name(external_team_name);

        if let Some(&pos) = self.index.get(&normalized) {
            return Some(TeamMatch::exact(&self.entries[pos]));
        }

        // Only the alias keys are scored, never display names or abbreviations.
        let mut best: Option<TeamMatch<'_>> = None;
        let mut best_score = 0.0;
        for (key, alias) in self.keys.iter().zip(&self.entries) {
            let score = similarity(&normalized, key);
            if score > best_score && score >= FUZZY_MATCH_THRESHOLD {
                best_score = score;
                best = Some(TeamMatch::fuzzy(alias, score));
            }
        }

        if let Some(m) = &best {
            debug!(
                "Fuzzy matched '{}' -> '{}' (similarity {:.3})",
                external_team_name, m.alias.external_name, m.score
            );
        }
        best
    }

    /// Resolve both participants of a game and combine their confidences.
    ///
    /// Never fails: unresolved sides are listed in `suggested_teams`.
    pub fn map_game_to_teams(&self, input: &GameMappingInput) -> GameMappingResult {
        let home = self.match_team(&input.home_team);
        let away = self.match_team(&input.away_team);

        let mut mapping_notes = Vec::with_capacity(2);
        let mut suggested_teams = Vec::new();

        for (side, raw, resolved) in [
            ("Home", &input.home_team, &home),
            ("Away", &input.away_team, &away),
        ] {
            match resolved {
                Some(m) => {
                    mapping_notes.push(format!("{} team '{}' mapped to {}", side, raw, m.describe()));
                }
                None => {
                    warn!("{} team '{}' has no registered alias", side, raw);
                    mapping_notes.push(format!(
                        "{} team '{}' could not be mapped; manual mapping required",
                        side, raw
                    ));
                    suggested_teams.push(raw.clone());
                }
            }
        }

        let confidence = match (&home, &away) {
            (Some(h), Some(a)) => h.alias.confidence.min(a.alias.confidence),
            (Some(m), None) | (None, Some(m)) => m.alias.confidence * PARTIAL_MAPPING_PENALTY,
            (None, None) => 0.0,
        };

        GameMappingResult {
            external_game_id: input.external_game_id(),
            mapped: home.is_some() && away.is_some(),
            confidence,
            suggested_teams,
            mapping_notes,
            home_team_name: home.map(|m| m.alias.internal_name.clone()),
            away_team_name: away.map(|m| m.alias.internal_name.clone()),
        }
    }

    /// Map a batch of games in parallel. Output order follows input order.
    pub fn map_games(&self, games: &[GameMappingInput]) -> Vec<GameMappingResult> {
        games
            .par_iter()
            .map(|game| self.map_game_to_teams(game))
            .collect()
    }

    /// Case-insensitive substring search over external name, internal name
    /// and abbreviation, in registry order.
    pub fn search_teams(&self, query: &str) -> Vec<&TeamAlias> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|alias| {
                alias.external_name.to_lowercase().contains(&query)
                    || alias.internal_name.to_lowercase().contains(&query)
                    || alias.abbreviation.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Serialize every alias (values only) as a JSON list.
    pub fn export_team_mappings(&self) -> Result<String> {
        team_cache::render_aliases(&self.entries)
    }

    /// Parse a JSON alias list and register each entry.
    ///
    /// The whole payload is validated before anything is added, so a
    /// malformed payload leaves the registry untouched.
    pub fn import_team_mappings(&mut self, json: &str) -> Result<()> {
        let aliases = team_cache::parse_aliases(json)?;
        let count = aliases.len();
        for alias in aliases {
            self.add_team_mapping(alias);
        }
        info!("Imported {} team aliases ({} registered)", count, self.len());
        Ok(())
    }

    /// Import an alias file on top of the current registry.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = team_cache::read_alias_file(path)?;
        self.import_team_mappings(&content)?;
        info!("Loaded team aliases from {}", path.display());
        Ok(())
    }

    /// Write the exported registry to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.export_team_mappings()?;
        team_cache::write_alias_file(path.as_ref(), &content)
    }

    /// Get number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over aliases in registry order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamAlias> {
        self.entries.iter()
    }

    /// Get all aliases for a competition level.
    pub fn teams_for_level(&self, level: TeamLevel) -> Vec<&TeamAlias> {
        self.entries.iter().filter(|a| a.level == level).collect()
    }

    /// Get all levels present in the registry.
    pub fn levels(&self) -> Vec<TeamLevel> {
        let mut levels: Vec<TeamLevel> = self.entries.iter().map(|a| a.level).collect();
        levels.sort();
        levels.dedup();
        levels
    }
}

impl Default for TeamNameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
