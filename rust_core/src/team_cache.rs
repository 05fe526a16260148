//! Team alias persistence.
//!
//! This module provides:
//! - JSON rendering of the alias registry (values only, registry order)
//! - Validated parsing of alias payloads
//! - File read/write for admin backups

use crate::error::{MappingError, Result};
use crate::models::TeamAlias;
use std::fs;
use std::path::Path;

/// Render aliases as a pretty JSON list.
pub fn render_aliases(aliases: &[TeamAlias]) -> Result<String> {
    Ok(serde_json::to_string_pretty(aliases)?)
}

/// Parse a JSON list of aliases.
///
/// Only the shape is checked: a non-list payload, unknown fields, wrong field
/// types or an unknown level reject the whole payload. Field values are taken
/// as-is, the same as `add_team_mapping`.
pub fn parse_aliases(json: &str) -> Result<Vec<TeamAlias>> {
    Ok(serde_json::from_str(json)?)
}

/// Read an alias file into a string.
pub fn read_alias_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write rendered aliases to a file.
pub fn write_alias_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
