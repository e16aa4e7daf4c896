//! Shock - DX and IQ penalties from injury

use super::constants::MAX_SHOCK;
use super::{Attribute, EffectType, InjuryContext, InjuryEffect, RollModifier};
use crate::damage::DamageType;
use crate::location::LocationKind;

/// Injury per point of shock: one point per full 10% of HP, minimum 1
pub fn shock_factor(hit_points: i32) -> i32 {
    (hit_points / 10).max(1)
}

/// Shock penalty magnitude (0 = no shock)
///
/// Capped at 4. Crushing hits to the groin double the capped value unless
/// the target has No Vitals.
pub fn shock_amount(ctx: &InjuryContext<'_>) -> i32 {
    if ctx.injury <= 0 {
        return 0;
    }

    let shock = (ctx.injury / shock_factor(ctx.hit_points)).min(MAX_SHOCK);

    if ctx.damage_type == DamageType::Crushing
        && ctx.location_kind == LocationKind::Groin
        && !ctx.no_vitals
    {
        shock * 2
    } else {
        shock
    }
}

pub fn shock_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    let amount = shock_amount(ctx);
    if amount == 0 {
        return None;
    }

    Some(
        InjuryEffect::new(EffectType::Shock { amount })
            .with_modifier(RollModifier::new(Attribute::Dx, -amount, "Shock"))
            .with_modifier(RollModifier::new(Attribute::Iq, -amount, "Shock")),
    )
}
