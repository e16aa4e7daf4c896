//! Damage resolution - Resolve a DamageRoll against a DamageTarget

use super::calculator::DamageCalculator;
use super::result::DamageResult;
use crate::damage::DamageRoll;
use crate::dice::DiceRoller;
use crate::error::DamageError;
use crate::location::{HitLocationTable, ResolvedLocation};
use crate::target::DamageTarget;

/// Resolve a damage roll against a target with no overrides
///
/// The roll must already name a concrete location (or "LargeArea");
/// use [`resolve_damage_with_roller`] for "Random".
pub fn resolve_damage<T: DamageTarget + ?Sized>(
    roll: &DamageRoll,
    target: &T,
) -> Result<DamageResult, DamageError> {
    Ok(DamageCalculator::new(roll, target)?.result())
}

/// Resolve damage, rolling a hit location first if the roll asks for one
pub fn resolve_damage_with_roller<T: DamageTarget + ?Sized>(
    roll: &DamageRoll,
    target: &T,
    roller: &mut impl DiceRoller,
) -> Result<DamageResult, DamageError> {
    let roll = resolve_random_location(roll, target.hit_locations(), roller)?;
    resolve_damage(&roll, target)
}

/// Replace a "Random" location with a rolled one
///
/// Rolls that already name a location are returned unchanged.
///
/// # Errors
/// `UnresolvedRandomLocation` if the rolled total matches no location.
pub fn resolve_random_location(
    roll: &DamageRoll,
    table: &HitLocationTable,
    roller: &mut impl DiceRoller,
) -> Result<DamageRoll, DamageError> {
    if table.resolve(&roll.location_id) != ResolvedLocation::Random {
        return Ok(roll.clone());
    }

    let location = table
        .roll_random_location(roller)
        .ok_or(DamageError::UnresolvedRandomLocation)?;

    Ok(roll.clone().at_location(location.id.clone()))
}
