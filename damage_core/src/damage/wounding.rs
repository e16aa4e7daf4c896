//! Wounding - Selecting a wounding modifier and turning it into injury
//!
//! The first matching rule wins:
//! 1. Diffuse targets use the diffuse column
//! 2. Homogenous targets use the homogenous column
//! 3. Unliving targets use the unliving column, except skull, eye and vitals hits
//! 4. Skull and eye hits on targets with No Brain use the default column
//! 5. Fatigue damage is never modified
//! 6. Location special cases (vitals, skull, eye, face, neck, limbs)
//! 7. The damage type's default column

use super::damage_type::{double, identity, one_and_half};
use super::{DamageType, TissueModel, WoundingFn};
use crate::location::{LocationCategory, LocationKind};

fn triple(x: f64) -> f64 {
    x * 3.0
}

fn quadruple(x: f64) -> f64 {
    x * 4.0
}

/// Facts that select a wounding modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WoundingInputs {
    pub damage_type: DamageType,
    pub location_kind: LocationKind,
    pub is_tight_beam_burning: bool,
    pub is_unliving: bool,
    pub is_homogenous: bool,
    pub is_diffuse: bool,
    pub no_brain: bool,
}

/// Location-specific wounding modifier, if the location changes it
pub fn location_wounding_fn(
    location_kind: LocationKind,
    damage_type: DamageType,
    is_tight_beam_burning: bool,
) -> Option<WoundingFn> {
    match location_kind {
        LocationKind::Vitals => {
            if damage_type.is_impaling_or_piercing() {
                Some(triple)
            } else if damage_type == DamageType::Burning && is_tight_beam_burning {
                Some(double)
            } else {
                None
            }
        }
        LocationKind::Skull | LocationKind::Eye => {
            if damage_type == DamageType::Toxic {
                None
            } else {
                Some(quadruple)
            }
        }
        LocationKind::Face => {
            if damage_type == DamageType::Corrosive {
                Some(one_and_half)
            } else {
                Some(identity)
            }
        }
        LocationKind::Neck => match damage_type {
            DamageType::Crushing | DamageType::Corrosive => Some(one_and_half),
            DamageType::Cutting => Some(double),
            _ => None,
        },
        LocationKind::Arm | LocationKind::Leg | LocationKind::Hand | LocationKind::Foot => {
            match damage_type {
                DamageType::LargePiercing | DamageType::HugePiercing | DamageType::Impaling => {
                    Some(identity)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Pick the wounding modifier for a hit
pub fn select_wounding_fn(inputs: &WoundingInputs) -> WoundingFn {
    let row = inputs.damage_type.modifiers();
    let kind = inputs.location_kind;

    if inputs.is_diffuse {
        return row.for_model(TissueModel::Diffuse);
    }
    if inputs.is_homogenous {
        return row.for_model(TissueModel::Homogenous);
    }
    if inputs.is_unliving
        && !matches!(kind, LocationKind::Skull | LocationKind::Eye | LocationKind::Vitals)
    {
        return row.for_model(TissueModel::Unliving);
    }
    if inputs.no_brain && kind.is_brain() {
        return row.for_model(TissueModel::Default);
    }
    if inputs.damage_type == DamageType::Fatigue {
        return identity;
    }

    location_wounding_fn(kind, inputs.damage_type, inputs.is_tight_beam_burning)
        .unwrap_or(row.default)
}

/// Injury before location caps
///
/// `floor(wounded) * vulnerability`, at least 1 when anything penetrated,
/// then divided by the damage reduction level. Saturates at `i32::MAX`.
pub fn calculate_injury(
    wounded: f64,
    penetrating_damage: i32,
    vulnerability_level: i32,
    damage_reduction_level: i32,
) -> i32 {
    if penetrating_damage <= 0 {
        return 0;
    }

    let injury = (wounded.floor() as i32)
        .saturating_mul(vulnerability_level.max(1))
        .max(1);
    injury / damage_reduction_level.max(1)
}

/// Cap injury to a limb or extremity
///
/// Limbs take at most `floor(HP/2) + 1`, extremities `floor(HP/3) + 1`.
/// Any other location is uncapped.
pub fn cap_injury(injury: i32, category: LocationCategory, hit_points: i32) -> i32 {
    let cap = match category {
        LocationCategory::Limb => hit_points.max(0) / 2 + 1,
        LocationCategory::Extremity => hit_points.max(0) / 3 + 1,
        _ => return injury,
    };
    injury.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(damage_type: DamageType, location_kind: LocationKind) -> WoundingInputs {
        WoundingInputs {
            damage_type,
            location_kind,
            is_tight_beam_burning: false,
            is_unliving: false,
            is_homogenous: false,
            is_diffuse: false,
            no_brain: false,
        }
    }

    fn wound(inputs: &WoundingInputs, penetrating: f64) -> f64 {
        select_wounding_fn(inputs)(penetrating)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_torso_uses_default() {
        assert_close(wound(&inputs(DamageType::Cutting, LocationKind::Torso), 4.0), 6.0);
        assert_close(wound(&inputs(DamageType::SmallPiercing, LocationKind::Torso), 4.0), 2.0);
    }

    #[test]
    fn test_vitals() {
        for damage_type in [
            DamageType::Impaling,
            DamageType::SmallPiercing,
            DamageType::Piercing,
            DamageType::LargePiercing,
            DamageType::HugePiercing,
        ] {
            assert_close(wound(&inputs(damage_type, LocationKind::Vitals), 6.0), 18.0);
        }
        assert_close(wound(&inputs(DamageType::Crushing, LocationKind::Vitals), 6.0), 6.0);
        assert_close(wound(&inputs(DamageType::Burning, LocationKind::Vitals), 6.0), 6.0);

        let mut tbb = inputs(DamageType::Burning, LocationKind::Vitals);
        tbb.is_tight_beam_burning = true;
        assert_close(wound(&tbb, 6.0), 12.0);
    }

    #[test]
    fn test_skull_and_eye() {
        assert_close(wound(&inputs(DamageType::Crushing, LocationKind::Skull), 3.0), 12.0);
        assert_close(wound(&inputs(DamageType::SmallPiercing, LocationKind::Eye), 3.0), 12.0);
        assert_close(wound(&inputs(DamageType::Toxic, LocationKind::Skull), 3.0), 3.0);
    }

    #[test]
    fn test_face() {
        assert_close(wound(&inputs(DamageType::Corrosive, LocationKind::Face), 4.0), 6.0);
        assert_close(wound(&inputs(DamageType::Impaling, LocationKind::Face), 4.0), 4.0);
    }

    #[test]
    fn test_neck() {
        assert_close(wound(&inputs(DamageType::Crushing, LocationKind::Neck), 4.0), 6.0);
        assert_close(wound(&inputs(DamageType::Corrosive, LocationKind::Neck), 4.0), 6.0);
        assert_close(wound(&inputs(DamageType::Cutting, LocationKind::Neck), 4.0), 8.0);
        assert_close(wound(&inputs(DamageType::Impaling, LocationKind::Neck), 4.0), 8.0);
    }

    #[test]
    fn test_limbs_cap_large_piercing_and_impaling() {
        for kind in [LocationKind::Arm, LocationKind::Leg, LocationKind::Hand, LocationKind::Foot] {
            assert_close(wound(&inputs(DamageType::Impaling, kind), 4.0), 4.0);
            assert_close(wound(&inputs(DamageType::HugePiercing, kind), 4.0), 4.0);
            assert_close(wound(&inputs(DamageType::Cutting, kind), 4.0), 6.0);
        }
    }

    #[test]
    fn test_tissue_models_take_priority() {
        let mut diffuse = inputs(DamageType::Impaling, LocationKind::Skull);
        diffuse.is_diffuse = true;
        assert_close(wound(&diffuse, 10.0), 1.0);

        let mut homogenous = inputs(DamageType::Impaling, LocationKind::Vitals);
        homogenous.is_homogenous = true;
        assert_close(wound(&homogenous, 10.0), 5.0);
    }

    #[test]
    fn test_unliving_keeps_brain_and_vitals() {
        let mut torso = inputs(DamageType::Piercing, LocationKind::Torso);
        torso.is_unliving = true;
        assert_close(wound(&torso, 9.0), 3.0);

        let mut vitals = inputs(DamageType::Piercing, LocationKind::Vitals);
        vitals.is_unliving = true;
        assert_close(wound(&vitals, 9.0), 27.0);
    }

    #[test]
    fn test_no_brain() {
        let mut skull = inputs(DamageType::Crushing, LocationKind::Skull);
        skull.no_brain = true;
        assert_close(wound(&skull, 5.0), 5.0);
    }

    #[test]
    fn test_fatigue_ignores_location() {
        assert_close(wound(&inputs(DamageType::Fatigue, LocationKind::Skull), 5.0), 5.0);
    }

    #[test]
    fn test_calculate_injury() {
        assert_eq!(calculate_injury(0.0, 0, 1, 1), 0);
        // Minimum 1 once anything penetrates
        assert_eq!(calculate_injury(0.5, 1, 1, 1), 1);
        assert_eq!(calculate_injury(7.5, 5, 1, 1), 7);
        assert_eq!(calculate_injury(7.5, 5, 2, 1), 14);
        assert_eq!(calculate_injury(7.5, 5, 1, 2), 3);
    }

    #[test]
    fn test_calculate_injury_saturates() {
        assert_eq!(calculate_injury(1e12, 1, 4, 1), i32::MAX);
        assert_eq!(calculate_injury(f64::from(i32::MAX), 1, i32::MAX, 2), i32::MAX / 2);
    }

    #[test]
    fn test_cap_injury() {
        assert_eq!(cap_injury(20, LocationCategory::Limb, 10), 6);
        assert_eq!(cap_injury(20, LocationCategory::Extremity, 10), 4);
        assert_eq!(cap_injury(3, LocationCategory::Limb, 10), 3);
        assert_eq!(cap_injury(20, LocationCategory::Torso, 10), 20);
    }
}
