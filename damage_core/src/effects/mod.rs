//! Injury effects - shock, major wounds, knockback, blinding, crippling
//!
//! Each effect is derived by an independent pure function over an
//! [`InjuryContext`]. Rules that depend on shock (head and vitals hits)
//! recompute it from the context instead of reading a stored flag.

mod knockback;
mod shock;
mod types;
mod wounds;

pub use knockback::{causes_knockback, knockback_effect, knockback_yards};
pub use shock::{shock_amount, shock_effect, shock_factor};
pub use types::{
    Attribute, Condition, EffectCheck, EffectType, Eyes, FailureConsequence, InjuryEffect,
    RollModifier, RollTarget,
};
pub use wounds::{
    blinding_effect, crippling_effect, head_vitals_effect, is_major_wound, knockdown_penalty,
    major_wound_effect, major_wound_threshold,
};

use crate::damage::DamageType;
use crate::location::LocationKind;

/// Effect rule constants
pub mod constants {
    /// Largest shock penalty from a single hit
    pub const MAX_SHOCK: i32 = 4;
    /// Knockdown penalty for skull and eye hits
    pub const BRAIN_KNOCKDOWN_PENALTY: i32 = -10;
    /// Knockdown penalty for vitals, face and groin hits
    pub const ORGAN_KNOCKDOWN_PENALTY: i32 = -5;
    /// Failing a knockdown roll by this much knocks the victim out
    pub const UNCONSCIOUS_MARGIN: i32 = 5;
    /// Bonus to knockback checks from Perfect Balance
    pub const PERFECT_BALANCE_BONUS: i32 = 4;
    /// Skills that may replace DX for the knockback check
    pub const KNOCKBACK_SKILLS: [&str; 2] = ["Acrobatics", "Judo"];
}

/// Everything the effect rules need to know about one resolved hit
#[derive(Debug, Clone, PartialEq)]
pub struct InjuryContext<'a> {
    // === Hit ===
    pub location_id: &'a str,
    pub location_kind: LocationKind,
    pub damage_type: DamageType,
    /// Basic damage pushing the target back: as rolled, or the falloff
    /// damage of a collateral explosion
    pub basic_damage: i32,
    pub penetrating_damage: i32,
    pub injury: i32,

    // === Target ===
    pub hit_points: i32,
    pub st: i32,
    pub is_homogenous: bool,
    pub is_diffuse: bool,
    pub no_brain: bool,
    pub no_vitals: bool,
    pub perfect_balance: bool,
}

impl InjuryContext<'_> {
    /// Whether hit-location special cases apply to this hit
    ///
    /// Fatigue damage, homogenous and diffuse targets treat every hit as a
    /// torso hit for major wounds and their side effects.
    pub fn is_location_aware(&self) -> bool {
        self.damage_type != DamageType::Fatigue && !self.is_homogenous && !self.is_diffuse
    }
}

/// Derive every effect of a hit
///
/// The order of the returned list carries no meaning.
pub fn derive_effects(ctx: &InjuryContext<'_>) -> Vec<InjuryEffect> {
    [
        shock_effect(ctx),
        major_wound_effect(ctx),
        head_vitals_effect(ctx),
        knockback_effect(ctx),
        blinding_effect(ctx),
        crippling_effect(ctx),
    ]
    .into_iter()
    .flatten()
    .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::make_context;
    use super::*;

    #[test]
    fn test_no_injury_no_effects() {
        let ctx = make_context(0);
        assert!(derive_effects(&ctx).is_empty());
    }

    #[test]
    fn test_major_wound_with_shock() {
        let ctx = make_context(6);
        let effects = derive_effects(&ctx);
        assert_eq!(effects.len(), 2);
        assert!(effects
            .iter()
            .any(|e| e.effect_type == EffectType::Shock { amount: 4 }));
        assert!(effects.iter().any(|e| e.effect_type == EffectType::MajorWound));
    }

    #[test]
    fn test_location_awareness() {
        let mut ctx = make_context(3);
        assert!(ctx.is_location_aware());
        ctx.damage_type = DamageType::Fatigue;
        assert!(!ctx.is_location_aware());
        ctx.damage_type = DamageType::Crushing;
        ctx.is_diffuse = true;
        assert!(!ctx.is_location_aware());
    }
}
