//! Wounds - Major wounds, head/vitals knockdown, blinding and crippling

use super::constants::{BRAIN_KNOCKDOWN_PENALTY, ORGAN_KNOCKDOWN_PENALTY, UNCONSCIOUS_MARGIN};
use super::shock::shock_amount;
use super::{
    Attribute, Condition, EffectCheck, EffectType, Eyes, InjuryContext, InjuryEffect,
    RollModifier,
};
use crate::damage::DamageType;
use crate::location::{LocationCategory, LocationKind};

/// Injury a hit must exceed to be a major wound
///
/// Half of HP, or a third for extremities when location rules apply.
pub fn major_wound_threshold(ctx: &InjuryContext<'_>) -> f64 {
    let hp = ctx.hit_points as f64;
    if ctx.is_location_aware() && ctx.location_kind.category() == LocationCategory::Extremity {
        hp / 3.0
    } else {
        hp / 2.0
    }
}

pub fn is_major_wound(ctx: &InjuryContext<'_>) -> bool {
    ctx.injury > 0 && ctx.injury as f64 > major_wound_threshold(ctx)
}

/// Knockdown roll penalty for the struck location
///
/// Returns 0 when the location adds no penalty. Vitals only penalize the
/// roll when the hit caused shock.
pub fn knockdown_penalty(ctx: &InjuryContext<'_>) -> i32 {
    if !ctx.is_location_aware() {
        return 0;
    }

    match ctx.location_kind {
        LocationKind::Skull | LocationKind::Eye => {
            if ctx.damage_type == DamageType::Toxic || ctx.no_brain {
                0
            } else {
                BRAIN_KNOCKDOWN_PENALTY
            }
        }
        LocationKind::Vitals => {
            if ctx.no_vitals || shock_amount(ctx) == 0 {
                0
            } else {
                ORGAN_KNOCKDOWN_PENALTY
            }
        }
        LocationKind::Face => ORGAN_KNOCKDOWN_PENALTY,
        LocationKind::Groin if !ctx.no_vitals => ORGAN_KNOCKDOWN_PENALTY,
        _ => 0,
    }
}

fn knockdown_check(ctx: &InjuryContext<'_>, penalty: i32) -> EffectCheck {
    let mut check = EffectCheck::new(vec![Attribute::Ht.into()]);
    if penalty != 0 {
        check = check.with_modifier(RollModifier::new(
            Attribute::Ht,
            penalty,
            format!("Hit to {}", ctx.location_id),
        ));
    }
    check
        .on_failure(0, Condition::Stunned)
        .on_failure(0, Condition::Prone)
        .on_failure(UNCONSCIOUS_MARGIN, Condition::Unconscious)
}

/// Major wound: HT roll or be stunned and knocked down
pub fn major_wound_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    if !is_major_wound(ctx) {
        return None;
    }

    let penalty = knockdown_penalty(ctx);
    Some(InjuryEffect::new(EffectType::MajorWound).with_check(knockdown_check(ctx, penalty)))
}

/// Shock-causing hit to the skull, eye or vitals that was not a major wound
///
/// These locations force a knockdown roll whenever the hit causes shock.
pub fn head_vitals_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    if !ctx.is_location_aware() || is_major_wound(ctx) || shock_amount(ctx) == 0 {
        return None;
    }
    if !matches!(
        ctx.location_kind,
        LocationKind::Skull | LocationKind::Eye | LocationKind::Vitals
    ) {
        return None;
    }

    let penalty = knockdown_penalty(ctx);
    if penalty == 0 {
        return None;
    }

    Some(InjuryEffect::new(EffectType::HeadVitalsHit).with_check(knockdown_check(ctx, penalty)))
}

/// Eye hits over HP/10 blind that eye; face major wounds blind one or both
pub fn blinding_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    if !ctx.is_location_aware() || ctx.injury <= 0 {
        return None;
    }

    let eyes = match ctx.location_kind {
        LocationKind::Eye if ctx.injury as f64 > ctx.hit_points as f64 / 10.0 => Eyes::One,
        LocationKind::Face if is_major_wound(ctx) => {
            if ctx.injury > ctx.hit_points {
                Eyes::Both
            } else {
                Eyes::One
            }
        }
        _ => return None,
    };

    Some(InjuryEffect::new(EffectType::Blinded { eyes }))
}

/// Major wounds to limbs and extremities cripple them
///
/// Fatigue damage never cripples; diffuse targets cannot be crippled.
pub fn crippling_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    if ctx.damage_type == DamageType::Fatigue || ctx.is_diffuse || ctx.injury <= 0 {
        return None;
    }

    let hp = ctx.hit_points as f64;
    let threshold = match ctx.location_kind.category() {
        LocationCategory::Limb => hp / 2.0,
        LocationCategory::Extremity => hp / 3.0,
        _ => return None,
    };

    if ctx.injury as f64 > threshold {
        Some(InjuryEffect::new(EffectType::Crippled {
            location: ctx.location_id.to_string(),
        }))
    } else {
        None
    }
}
