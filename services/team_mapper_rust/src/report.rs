use chrono::{DateTime, Utc};
use prograde_rust_core::{GameMappingResult, MatchMethod, TeamAlias, TeamMatch};
use serde::Serialize;

/// Output of the `map` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub generated_at: DateTime<Utc>,
    pub total_games: usize,
    pub mapped_games: usize,
    /// Games with at least one side needing manual mapping
    pub needs_review: usize,
    /// Mean confidence across all games (0 when empty)
    pub average_confidence: f64,
    pub results: Vec<GameMappingResult>,
}

impl MappingReport {
    pub fn from_results(results: Vec<GameMappingResult>) -> Self {
        let total_games = results.len();
        let mapped_games = results.iter().filter(|r| r.mapped).count();
        let average_confidence = if total_games == 0 {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / total_games as f64
        };

        Self {
            generated_at: Utc::now(),
            total_games,
            mapped_games,
            needs_review: total_games - mapped_games,
            average_confidence,
            results,
        }
    }
}

/// Output of the `find` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    pub input: String,
    pub found: bool,
    pub method: Option<MatchMethod>,
    pub similarity: Option<f64>,
    pub team: Option<TeamAlias>,
}

impl FindResponse {
    pub fn new(input: &str, found: Option<TeamMatch<'_>>) -> Self {
        Self {
            input: input.to_string(),
            found: found.is_some(),
            method: found.map(|m| m.method),
            similarity: found.map(|m| m.score),
            team: found.map(|m| m.alias.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prograde_rust_core::{GameMappingInput, TeamNameMatcher};

    #[test]
    fn test_report_counts() {
        let matcher = TeamNameMatcher::new();
        let results = matcher.map_games(&[
            GameMappingInput::new("Ohio State", "Michigan", "ncaa_api", 2023),
            GameMappingInput::new("Ohio State", "Nonexistent Tech", "ncaa_api", 2023),
        ]);
        let report = MappingReport::from_results(results);

        assert_eq!(report.total_games, 2);
        assert_eq!(report.mapped_games, 1);
        assert_eq!(report.needs_review, 1);
        assert!((report.average_confidence - (0.95 + 0.475) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = MappingReport::from_results(Vec::new());
        assert_eq!(report.total_games, 0);
        assert_eq!(report.average_confidence, 0.0);
    }

    #[test]
    fn test_find_response_json() {
        let matcher = TeamNameMatcher::new();
        let response = FindResponse::new("michgan", matcher.match_team("michgan"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["method"], "fuzzy");
        assert_eq!(json["team"]["internalName"], "Michigan Wolverines");
    }

    #[test]
    fn test_find_response_not_found() {
        let matcher = TeamNameMatcher::new();
        let response = FindResponse::new("Nowhere", matcher.match_team("Nowhere"));
        assert!(!response.found);
        assert!(response.team.is_none());
    }
}
