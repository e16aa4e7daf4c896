//! Knockback - Forced movement from heavy impacts

use super::constants::{KNOCKBACK_SKILLS, PERFECT_BALANCE_BONUS};
use super::{
    Attribute, Condition, EffectCheck, EffectType, InjuryContext, InjuryEffect, RollModifier,
    RollTarget,
};
use crate::damage::DamageType;

/// Whether a hit can knock the target back
///
/// Crushing and knockback-only attacks always can; cutting attacks only when
/// they failed to penetrate.
pub fn causes_knockback(damage_type: DamageType, penetrating_damage: i32) -> bool {
    match damage_type {
        DamageType::Crushing | DamageType::KnockbackOnly => true,
        DamageType::Cutting => penetrating_damage == 0,
        _ => false,
    }
}

/// Yards of knockback: basic damage / (ST - 2), rounded down
pub fn knockback_yards(ctx: &InjuryContext<'_>) -> i32 {
    if !causes_knockback(ctx.damage_type, ctx.penetrating_damage) {
        return 0;
    }
    let divisor = ctx.st.saturating_sub(2).max(1);
    ctx.basic_damage.max(0) / divisor
}

/// Knockback: DX (or Acrobatics/Judo) roll or fall down
pub fn knockback_effect(ctx: &InjuryContext<'_>) -> Option<InjuryEffect> {
    let yards = knockback_yards(ctx);
    if yards == 0 {
        return None;
    }

    let mut rolls = vec![RollTarget::Attribute(Attribute::Dx)];
    rolls.extend(KNOCKBACK_SKILLS.iter().map(|&skill| RollTarget::skill(skill)));

    let mut check = EffectCheck::new(rolls);
    let penalty = (yards - 1).max(0);
    if penalty > 0 {
        check = check.with_modifier(RollModifier::new(
            Attribute::Dx,
            -penalty,
            format!("Knockback {} yd", yards),
        ));
    }
    if ctx.perfect_balance {
        check = check.with_modifier(RollModifier::new(
            Attribute::Dx,
            PERFECT_BALANCE_BONUS,
            "Perfect Balance",
        ));
    }

    Some(
        InjuryEffect::new(EffectType::Knockback { yards })
            .with_check(check.on_failure(0, Condition::Prone)),
    )
}
