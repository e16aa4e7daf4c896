//! Blunt trauma - Injury from hits stopped by flexible armor

use super::constants::{BLUNT_TRAUMA_CRUSHING_DIVISOR, BLUNT_TRAUMA_EDGED_DIVISOR};
use crate::damage::DamageType;

/// Damage per point of blunt trauma for a damage type
///
/// `None` for types that never cause blunt trauma (injury, burning,
/// corrosive, fatigue, toxic, knockback only).
pub fn blunt_trauma_divisor(damage_type: DamageType) -> Option<i32> {
    match damage_type {
        DamageType::Crushing => Some(BLUNT_TRAUMA_CRUSHING_DIVISOR),
        DamageType::Cutting
        | DamageType::Impaling
        | DamageType::SmallPiercing
        | DamageType::Piercing
        | DamageType::LargePiercing
        | DamageType::HugePiercing => Some(BLUNT_TRAUMA_EDGED_DIVISOR),
        _ => None,
    }
}

/// Calculate blunt trauma
///
/// Only a hit that failed to penetrate flexible armor causes blunt trauma.
///
/// # Arguments
/// * `damage_type` - The attack's damage type
/// * `adjusted_basic_damage` - Basic damage after delivery adjustments
/// * `penetrating_damage` - Damage that got through DR
/// * `flexible` - Whether the struck location's armor is flexible
pub fn calculate_blunt_trauma(
    damage_type: DamageType,
    adjusted_basic_damage: i32,
    penetrating_damage: i32,
    flexible: bool,
) -> i32 {
    if !flexible || penetrating_damage > 0 {
        return 0;
    }

    match blunt_trauma_divisor(damage_type) {
        Some(divisor) => adjusted_basic_damage.max(0) / divisor,
        None => 0,
    }
}
