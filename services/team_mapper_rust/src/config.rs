use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Team alias administration and play-by-play game mapping
#[derive(Parser, Debug, Clone)]
#[command(name = "team_mapper", version, about)]
pub struct Config {
    /// Alias file imported over the built-in registry at startup
    #[arg(long, env = "TEAM_ALIASES_PATH")]
    pub aliases_path: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, env = "TEAM_MAPPER_PRETTY", default_value_t = true, action = ArgAction::Set)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Map a JSON list of games ({homeTeam, awayTeam, source, season}) to internal teams
    Map {
        /// Games file
        #[arg(long)]
        games: PathBuf,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Resolve a single external team name
    Find { name: String },
    /// Substring search over names and abbreviations
    Search { query: String },
    /// Export the alias registry as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import an alias file and write the merged registry
    Import {
        file: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
