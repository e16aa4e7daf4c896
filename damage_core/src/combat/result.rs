//! DamageResult - Outcome of damage resolution

use crate::damage::DamageType;
use crate::effects::{EffectType, InjuryEffect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pool injury is subtracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryPool {
    /// Hit points
    #[serde(rename = "HP")]
    Hp,
    /// Fatigue points
    #[serde(rename = "FP")]
    Fp,
}

impl InjuryPool {
    /// Fatigue damage drains FP, everything else HP
    pub fn for_damage_type(damage_type: DamageType) -> InjuryPool {
        if damage_type == DamageType::Fatigue {
            InjuryPool::Fp
        } else {
            InjuryPool::Hp
        }
    }
}

impl fmt::Display for InjuryPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjuryPool::Hp => f.write_str("HP"),
            InjuryPool::Fp => f.write_str("FP"),
        }
    }
}

/// Resolved damage for one roll against one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    // === Hit ===
    pub location_id: String,
    #[serde(default)]
    pub attacker: Option<String>,
    pub damage_type: DamageType,
    /// Basic damage as rolled
    pub basic_damage: i32,
    /// Basic damage after half damage, explosion and shotgun adjustments
    pub adjusted_basic_damage: i32,

    // === Penetration ===
    /// DR at the location before the armor divisor
    pub raw_dr: i32,
    /// Divisor after Hardened DR
    pub armor_divisor: f64,
    pub effective_dr: i32,
    pub penetrating_damage: i32,

    // === Injury ===
    pub wounding_modifier: f64,
    pub injury: i32,
    pub pool: InjuryPool,
    pub blunt_trauma: i32,

    // === Effects ===
    pub effects: Vec<InjuryEffect>,
}

impl DamageResult {
    /// Whether any damage got through DR
    pub fn penetrated(&self) -> bool {
        self.penetrating_damage > 0
    }

    /// Damage stopped by DR
    pub fn damage_blocked(&self) -> i32 {
        self.adjusted_basic_damage.saturating_sub(self.penetrating_damage)
    }

    /// Find the first effect matching a predicate on its type
    pub fn effect(&self, predicate: impl Fn(&EffectType) -> bool) -> Option<&InjuryEffect> {
        self.effects.iter().find(|e| predicate(&e.effect_type))
    }

    pub fn is_major_wound(&self) -> bool {
        self.effect(|t| *t == EffectType::MajorWound).is_some()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.injury > 0 {
            parts.push(format!(
                "{} {} injury to {}",
                self.injury, self.pool, self.location_id
            ));
        } else {
            parts.push(format!("No injury to {}", self.location_id));
        }

        if self.damage_blocked() > 0 {
            parts.push(format!("{} stopped by DR", self.damage_blocked()));
        }

        if self.blunt_trauma > 0 {
            parts.push(format!("{} blunt trauma", self.blunt_trauma));
        }

        for effect in &self.effects {
            parts.push(effect.description());
        }

        parts.join(", ")
    }
}
