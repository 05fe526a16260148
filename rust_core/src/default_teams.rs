//! Built-in team aliases.
//!
//! This module provides:
//! - Static alias table seeded into every new `TeamNameMatcher`
//! - College (FBS) programs and NFL franchises commonly seen in feeds

use crate::models::{TeamAlias, TeamLevel};

/// Static description of one built-in alias.
#[derive(Debug, Clone)]
pub struct DefaultTeam {
    /// Alias as external feeds spell it (e.g., "Ohio State")
    pub external_name: &'static str,
    /// Canonical display name
    pub internal_name: &'static str,
    pub abbreviation: &'static str,
    pub conference: Option<&'static str>,
    pub level: TeamLevel,
}

/// Trust weight given to every built-in alias.
pub const DEFAULT_ALIAS_CONFIDENCE: f64 = 0.95;

/// Static configuration for all built-in aliases.
pub static DEFAULT_TEAMS: &[DefaultTeam] = &[
    // College - Big Ten
    DefaultTeam {
        external_name: "Ohio State",
        internal_name: "Ohio State Buckeyes",
        abbreviation: "OSU",
        conference: Some("Big Ten"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Michigan",
        internal_name: "Michigan Wolverines",
        abbreviation: "MICH",
        conference: Some("Big Ten"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Penn State",
        internal_name: "Penn State Nittany Lions",
        abbreviation: "PSU",
        conference: Some("Big Ten"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Oregon",
        internal_name: "Oregon Ducks",
        abbreviation: "ORE",
        conference: Some("Big Ten"),
        level: TeamLevel::College,
    },
    // College - SEC
    DefaultTeam {
        external_name: "Alabama",
        internal_name: "Alabama Crimson Tide",
        abbreviation: "ALA",
        conference: Some("SEC"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Georgia",
        internal_name: "Georgia Bulldogs",
        abbreviation: "UGA",
        conference: Some("SEC"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "LSU",
        internal_name: "LSU Tigers",
        abbreviation: "LSU",
        conference: Some("SEC"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Texas",
        internal_name: "Texas Longhorns",
        abbreviation: "TEX",
        conference: Some("SEC"),
        level: TeamLevel::College,
    },
    // College - ACC / Independent
    DefaultTeam {
        external_name: "Clemson",
        internal_name: "Clemson Tigers",
        abbreviation: "CLEM",
        conference: Some("ACC"),
        level: TeamLevel::College,
    },
    DefaultTeam {
        external_name: "Notre Dame",
        internal_name: "Notre Dame Fighting Irish",
        abbreviation: "ND",
        conference: Some("Independent"),
        level: TeamLevel::College,
    },
    // NFL
    DefaultTeam {
        external_name: "Kansas City Chiefs",
        internal_name: "Kansas City Chiefs",
        abbreviation: "KC",
        conference: Some("AFC"),
        level: TeamLevel::Nfl,
    },
    DefaultTeam {
        external_name: "Buffalo Bills",
        internal_name: "Buffalo Bills",
        abbreviation: "BUF",
        conference: Some("AFC"),
        level: TeamLevel::Nfl,
    },
    DefaultTeam {
        external_name: "Philadelphia Eagles",
        internal_name: "Philadelphia Eagles",
        abbreviation: "PHI",
        conference: Some("NFC"),
        level: TeamLevel::Nfl,
    },
    DefaultTeam {
        external_name: "San Francisco 49ers",
        internal_name: "San Francisco 49ers",
        abbreviation: "SF",
        conference: Some("NFC"),
        level: TeamLevel::Nfl,
    },
    DefaultTeam {
        external_name: "Dallas Cowboys",
        internal_name: "Dallas Cowboys",
        abbreviation: "DAL",
        conference: Some("NFC"),
        level: TeamLevel::Nfl,
    },
];

impl DefaultTeam {
    pub fn to_alias(&self) -> TeamAlias {
        TeamAlias {
            external_name: self.external_name.to_string(),
            internal_name: self.internal_name.to_string(),
            abbreviation: self.abbreviation.to_string(),
            conference: self.conference.map(str::to_string),
            level: self.level,
            confidence: DEFAULT_ALIAS_CONFIDENCE,
        }
    }
}

/// Owned aliases for every built-in team, in table order.
pub fn default_aliases() -> Vec<TeamAlias> {
    DEFAULT_TEAMS.iter().map(DefaultTeam::to_alias).collect()
}
