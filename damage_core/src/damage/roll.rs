//! DamageRoll - A rolled damage event, the calculator's input

use super::DamageType;
use crate::dice::Dice;
use crate::error::{validate_armor_divisor, DamageError};
use serde::{Deserialize, Serialize};

/// Special damage modifiers carried by an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageModifier {
    /// Tight-beam burning
    #[serde(rename = "tbb")]
    TightBeamBurning,
    /// Explosion
    #[serde(rename = "ex")]
    Explosion,
}

/// One resolved damage event
///
/// Built once per attack and never mutated by the calculator. Use the
/// `with_*` builders to describe the attack:
///
/// ```rust
/// use damage_core::{DamageRoll, DamageType};
///
/// let roll = DamageRoll::new(12, DamageType::Cutting)
///     .at_location("neck")
///     .with_armor_divisor(2.0)
///     .unwrap();
/// assert_eq!(roll.location_id, "neck");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    // === Source Info ===
    /// Hit location struck ("Random", "LargeArea" and "Default" are pseudo-locations)
    pub location_id: String,
    /// Who dealt this damage
    #[serde(default)]
    pub attacker: Option<String>,
    /// Dice that produced the damage
    #[serde(default)]
    pub dice: Dice,

    // === Damage ===
    /// Rolled basic damage before DR
    pub basic_damage: i32,
    pub damage_type: DamageType,
    #[serde(default)]
    pub is_half_damage: bool,
    #[serde(default)]
    pub damage_modifier: Option<DamageModifier>,

    // === Armor Interaction ===
    /// Divides DR; 0 means DR is ignored, values below 1 multiply it
    #[serde(default = "default_armor_divisor")]
    armor_divisor: f64,

    // === Delivery ===
    #[serde(default)]
    pub is_shotgun_close_range: bool,
    #[serde(default = "default_rof_multiplier")]
    pub rof_multiplier: u32,
    /// Distance in yards from an explosion's center
    #[serde(default)]
    pub range: u32,
    #[serde(default)]
    pub is_internal_explosion: bool,
}

fn default_armor_divisor() -> f64 {
    1.0
}

fn default_rof_multiplier() -> u32 {
    1
}

impl DamageRoll {
    /// A torso hit with no special properties
    pub fn new(basic_damage: i32, damage_type: DamageType) -> Self {
        DamageRoll {
            location_id: "torso".to_string(),
            attacker: None,
            dice: Dice::default(),
            basic_damage,
            damage_type,
            is_half_damage: false,
            damage_modifier: None,
            armor_divisor: default_armor_divisor(),
            is_shotgun_close_range: false,
            rof_multiplier: default_rof_multiplier(),
            range: 0,
            is_internal_explosion: false,
        }
    }

    pub fn at_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = location_id.into();
        self
    }

    pub fn from_attacker(mut self, attacker: impl Into<String>) -> Self {
        self.attacker = Some(attacker.into());
        self
    }

    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    /// Set the armor divisor; negative (or NaN) divisors are rejected
    pub fn with_armor_divisor(mut self, divisor: f64) -> Result<Self, DamageError> {
        self.armor_divisor = validate_armor_divisor(divisor)?;
        Ok(self)
    }

    pub fn with_modifier(mut self, modifier: DamageModifier) -> Self {
        self.damage_modifier = Some(modifier);
        self
    }

    pub fn half_damage(mut self) -> Self {
        self.is_half_damage = true;
        self
    }

    /// Shotgun fired at close range with the given RoF multiplier
    pub fn shotgun_close_range(mut self, rof_multiplier: u32) -> Self {
        self.is_shotgun_close_range = true;
        self.rof_multiplier = rof_multiplier;
        self
    }

    /// Explosion centered `range` yards away
    pub fn explosion_at(mut self, range: u32) -> Self {
        self.damage_modifier = Some(DamageModifier::Explosion);
        self.range = range;
        self
    }

    /// Explosion inside the target's body
    pub fn internal_explosion(mut self) -> Self {
        self.damage_modifier = Some(DamageModifier::Explosion);
        self.is_internal_explosion = true;
        self
    }

    pub fn armor_divisor(&self) -> f64 {
        self.armor_divisor
    }

    pub fn is_explosion(&self) -> bool {
        self.damage_modifier == Some(DamageModifier::Explosion)
    }

    pub fn is_tight_beam_burning(&self) -> bool {
        self.damage_modifier == Some(DamageModifier::TightBeamBurning)
    }

    /// Explosion damage landing at range (collateral, not a direct hit)
    pub fn is_collateral_explosion(&self) -> bool {
        self.is_explosion() && self.range > 0
    }

    /// Re-check invariants that deserialization cannot enforce
    pub fn validate(&self) -> Result<(), DamageError> {
        validate_armor_divisor(self.armor_divisor)?;
        Ok(())
    }
}
