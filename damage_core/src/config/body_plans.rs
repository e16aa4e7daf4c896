//! Body plan loading - hit location tables from TOML

use super::ConfigError;
use crate::location::{HitLocation, HitLocationTable};
use std::path::Path;

/// Load a hit location table from a TOML file
pub fn load_body_plan(path: &Path) -> Result<HitLocationTable, ConfigError> {
    let table: HitLocationTable = super::load_toml(path)?;
    validate_body_plan(&table)?;

    tracing::debug!(
        path = %path.display(),
        locations = table.len(),
        "loaded body plan"
    );
    Ok(table)
}

/// Load a hit location table from a TOML string
pub fn parse_body_plan(content: &str) -> Result<HitLocationTable, ConfigError> {
    let table: HitLocationTable = super::parse_toml(content)?;
    validate_body_plan(&table)?;
    Ok(table)
}

/// Check a table for mistakes serde cannot catch
///
/// A table needs at least one location, unique ids (ignoring case) and
/// roll ranges that are well-formed and do not overlap.
pub fn validate_body_plan(table: &HitLocationTable) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::ValidationError(
            "body plan has no locations".to_string(),
        ));
    }

    for (i, location) in table.locations.iter().enumerate() {
        if location.id.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "location #{} has an empty id",
                i + 1
            )));
        }

        if let Some(range) = location.roll {
            if range.low > range.high {
                return Err(ConfigError::ValidationError(format!(
                    "location '{}' has roll range {}-{} with low above high",
                    location.id, range.low, range.high
                )));
            }
        }

        for earlier in &table.locations[..i] {
            if earlier.matches(&location.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate location id '{}'",
                    location.id
                )));
            }

            if let (Some(a), Some(b)) = (earlier.roll, location.roll) {
                if a.overlaps(&b) {
                    return Err(ConfigError::ValidationError(format!(
                        "roll ranges of '{}' and '{}' overlap",
                        earlier.id, location.id
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Get the bundled humanoid body plan
pub fn default_humanoid() -> HitLocationTable {
    let toml = include_str!("../../config/humanoid.toml");
    parse_body_plan(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled humanoid body plan is invalid, using torso only");
        HitLocationTable::new(vec![HitLocation::new("torso").with_roll(3, 18)])
    })
}
