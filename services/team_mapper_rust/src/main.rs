mod config;
mod report;

use crate::config::{Command, Config};
use crate::report::{FindResponse, MappingReport};
use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use prograde_rust_core::{GameMappingInput, TeamNameMatcher};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let mut matcher = TeamNameMatcher::new();
    if let Some(path) = &config.aliases_path {
        matcher
            .load_from_file(path)
            .with_context(|| format!("Failed to load aliases from {}", path.display()))?;
    }
    info!("Team registry ready ({} aliases)", matcher.len());

    match &config.command {
        Command::Map { games, out } => {
            let content = fs::read_to_string(games)
                .with_context(|| format!("Failed to read games file {}", games.display()))?;
            let inputs: Vec<GameMappingInput> = serde_json::from_str(&content)
                .with_context(|| format!("Invalid games file {}", games.display()))?;

            let report = MappingReport::from_results(matcher.map_games(&inputs));
            info!(
                "Mapped {}/{} games ({} need review)",
                report.mapped_games, report.total_games, report.needs_review
            );
            emit(&report, config.pretty, out.as_deref())?;
        }
        Command::Find { name } => {
            let response = FindResponse::new(name, matcher.match_team(name));
            emit(&response, config.pretty, None)?;
        }
        Command::Search { query } => {
            let teams = matcher.search_teams(query);
            info!("{} teams match '{}'", teams.len(), query);
            emit(&teams, config.pretty, None)?;
        }
        Command::Export { out } => {
            let json = matcher.export_team_mappings()?;
            write_output(&json, out.as_deref())?;
        }
        Command::Import { file, out } => {
            let before = matcher.len();
            matcher
                .load_from_file(file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            info!("Registry grew from {} to {} aliases", before, matcher.len());
            let json = matcher.export_team_mappings()?;
            write_output(&json, out.as_deref())?;
        }
    }

    Ok(())
}

fn emit<T: Serialize>(value: &T, pretty: bool, out: Option<&Path>) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_output(&json, out)
}

fn write_output(json: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
