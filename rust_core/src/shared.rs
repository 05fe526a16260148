//! Thread-safe handle to a `TeamNameMatcher`.
//!
//! Lookups take a shared read lock and may run concurrently; registry
//! mutations take the write lock.

use crate::error::Result;
use crate::matching::{ResolvedTeam, TeamNameMatcher};
use crate::models::{GameMappingInput, GameMappingResult, TeamAlias};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedTeamMatcher {
    inner: Arc<RwLock<TeamNameMatcher>>,
}

impl SharedTeamMatcher {
    pub fn new(matcher: TeamNameMatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(matcher)),
        }
    }

    /// Returns an owned copy of the matched alias.
    pub fn find_team_match(&self, external_team_name: &str) -> Option<TeamAlias> {
        self.inner.read().find_team_match(external_team_name).cloned()
    }

    /// Like `find_team_match`, keeping the match method and similarity.
    pub fn match_team(&self, external_team_name: &str) -> Option<ResolvedTeam> {
        self.inner.read().match_team(external_team_name).map(ResolvedTeam::from)
    }

    pub fn map_game_to_teams(&self, input: &GameMappingInput) -> GameMappingResult {
        self.inner.read().map_game_to_teams(input)
    }

    pub fn map_games(&self, games: &[GameMappingInput]) -> Vec<GameMappingResult> {
        self.inner.read().map_games(games)
    }

    pub fn search_teams(&self, query: &str) -> Vec<TeamAlias> {
        self.inner
            .read()
            .search_teams(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn add_team_mapping(&self, alias: TeamAlias) {
        self.inner.write().add_team_mapping(alias);
    }

    pub fn export_team_mappings(&self) -> Result<String> {
        self.inner.read().export_team_mappings()
    }

    pub fn import_team_mappings(&self, json: &str) -> Result<()> {
        self.inner.write().import_team_mappings(json)
    }

    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.write().load_from_file(path)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.read().save_to_file(path)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<TeamNameMatcher> for SharedTeamMatcher {
    fn from(matcher: TeamNameMatcher) -> Self {
        Self::new(matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchMethod;
    use crate::models::TeamLevel;
    use std::thread;

    #[test]
    fn test_concurrent_readers_and_writer() {
        let shared = SharedTeamMatcher::new(TeamNameMatcher::new());
        let seeded = shared.len();

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    shared.add_team_mapping(TeamAlias::new(
                        format!("Team {}", i),
                        format!("Team {} Internal", i),
                        format!("T{}", i),
                        TeamLevel::HighSchool,
                        0.8,
                    ));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        assert!(shared.find_team_match("Ohio State").is_some());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(shared.len(), seeded + 50);
        assert!(shared.find_team_match("team 49").is_some());
    }

    #[test]
    fn test_import_through_handle() {
        let shared = SharedTeamMatcher::from(TeamNameMatcher::empty());
        assert!(shared.is_empty());

        let json = TeamNameMatcher::new().export_team_mappings().unwrap();
        shared.import_team_mappings(&json).unwrap();

        assert_eq!(shared.len(), TeamNameMatcher::new().len());
        assert_eq!(shared.search_teams("buckeyes").len(), 1);
    }

    #[test]
    fn test_match_team_through_handle() {
        let shared = SharedTeamMatcher::new(TeamNameMatcher::new());

        let fuzzy = shared.match_team("ohio stat").unwrap();
        assert_eq!(fuzzy.method, MatchMethod::Fuzzy);
        assert!((fuzzy.score - 0.9).abs() < 1e-9);
        assert_eq!(fuzzy.alias.internal_name, "Ohio State Buckeyes");

        assert_eq!(shared.match_team("Michigan").unwrap().method, MatchMethod::Exact);
        assert!(shared.match_team("Nowhere").is_none());
    }

    #[test]
    fn test_file_backup_through_handle() {
        let path = std::env::temp_dir().join(format!(
            "prograde_shared_backup_{}.json",
            std::process::id()
        ));
        let source = SharedTeamMatcher::new(TeamNameMatcher::new());
        source.add_team_mapping(TeamAlias::new("Bama", "Alabama Crimson Tide", "ALA", TeamLevel::College, 0.85));
        source.save_to_file(&path).unwrap();

        let restored = SharedTeamMatcher::from(TeamNameMatcher::empty());
        restored.load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(restored.len(), source.len());
        assert_eq!(restored.find_team_match("bama").unwrap().abbreviation, "ALA");
    }
}
