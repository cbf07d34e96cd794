//! Raw input resolution for the `run` command.
//!
//! Precedence, lowest first: configured input, `--input` file, `--set` pairs.
//! A file replaces the configured input entirely; `--set` only overrides the
//! fields it names.

use anyhow::{bail, Context, Result};
use std::path::Path;
use weather_station_core::RawInput;

/// Parses a `FIELD=VALUE` assignment.
pub fn parse_assignment(s: &str) -> Result<(String, f64)> {
    let Some((field, value)) = s.split_once('=') else {
        bail!("expected FIELD=VALUE, got {:?}", s);
    };
    let field = field.trim();
    if field.is_empty() {
        bail!("empty field name in {:?}", s);
    }
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid value for {}", field))?;
    Ok((field.to_string(), value))
}

/// Reads a JSON object of numeric fields.
pub fn load_file(path: &Path) -> Result<RawInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input: RawInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;
    Ok(input)
}

/// Combines configured input, an optional file and overrides.
pub fn resolve(
    configured: &RawInput,
    file: Option<&Path>,
    overrides: &[(String, f64)],
) -> Result<RawInput> {
    let mut input = match file {
        Some(path) => load_file(path)?,
        None => configured.clone(),
    };
    for (field, value) in overrides {
        input.insert(field.clone(), *value);
    }
    Ok(input)
}
