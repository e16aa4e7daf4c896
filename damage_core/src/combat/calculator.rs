//! DamageCalculator - Resolve one damage roll against one target
//!
//! The calculator borrows the roll and the target and stores nothing else
//! but optional overrides. Every derived value is recomputed on access, so
//! changing an override is always reflected in the next read.

use super::result::{DamageResult, InjuryPool};
use crate::damage::{
    adjusted_basic_damage, calculate_injury, cap_injury, explosion_damage_at_range,
    select_wounding_fn, DamageRoll, DamageType, WoundingInputs,
};
use crate::defense::{
    calculate_blunt_trauma, effective_armor_divisor, effective_dr, penetrating_damage,
};
use crate::effects::{derive_effects, InjuryContext, InjuryEffect};
use crate::error::{validate_armor_divisor, DamageError};
use crate::location::{LocationKind, ResolvedLocation};
use crate::target::{traits, DamageTarget};

/// Calculates penetration, injury and effects for a damage roll
#[derive(Debug, Clone)]
pub struct DamageCalculator<'a, T: DamageTarget + ?Sized> {
    roll: &'a DamageRoll,
    target: &'a T,

    // === Overrides ===
    armor_divisor: Option<f64>,
    raw_dr: Option<i32>,
    basic_damage: Option<i32>,
    damage_type: Option<DamageType>,
    flexible: Option<bool>,
    hardened: Option<u32>,
    vulnerability: Option<i32>,
    wounding_modifier: Option<f64>,
    pool: Option<InjuryPool>,

    // === Toggles ===
    injury_reduced_by_location: bool,
    use_blunt_trauma: bool,
}

impl<'a, T: DamageTarget + ?Sized> DamageCalculator<'a, T> {
    /// Create a calculator for a roll against a target
    ///
    /// # Errors
    /// * `NegativeArmorDivisor` if the roll carries an invalid divisor
    /// * `UnresolvedRandomLocation` if the roll still targets "Random"
    pub fn new(roll: &'a DamageRoll, target: &'a T) -> Result<Self, DamageError> {
        roll.validate()?;

        match target.hit_locations().resolve(&roll.location_id) {
            ResolvedLocation::Random => return Err(DamageError::UnresolvedRandomLocation),
            ResolvedLocation::Unknown => {
                tracing::warn!(
                    location = %roll.location_id,
                    "hit location not found on target, using DR 0"
                );
            }
            _ => {}
        }

        Ok(DamageCalculator {
            roll,
            target,
            armor_divisor: None,
            raw_dr: None,
            basic_damage: None,
            damage_type: None,
            flexible: None,
            hardened: None,
            vulnerability: None,
            wounding_modifier: None,
            pool: None,
            injury_reduced_by_location: true,
            use_blunt_trauma: true,
        })
    }

    pub fn roll(&self) -> &'a DamageRoll {
        self.roll
    }

    pub fn target(&self) -> &'a T {
        self.target
    }

    // === Override setters ===

    /// Override the armor divisor (`None` restores the roll's value)
    pub fn set_armor_divisor(&mut self, divisor: Option<f64>) -> Result<(), DamageError> {
        self.armor_divisor = divisor.map(validate_armor_divisor).transpose()?;
        Ok(())
    }

    /// Override the DR at the struck location
    pub fn set_raw_dr(&mut self, dr: Option<i32>) {
        self.raw_dr = dr;
    }

    pub fn set_basic_damage(&mut self, basic_damage: Option<i32>) {
        self.basic_damage = basic_damage;
    }

    pub fn set_damage_type(&mut self, damage_type: Option<DamageType>) {
        self.damage_type = damage_type;
    }

    pub fn set_flexible(&mut self, flexible: Option<bool>) {
        self.flexible = flexible;
    }

    pub fn set_hardened(&mut self, level: Option<u32>) {
        self.hardened = level;
    }

    pub fn set_vulnerability(&mut self, level: Option<i32>) {
        self.vulnerability = level;
    }

    /// Replace the rule-selected wounding modifier with a flat multiplier
    pub fn set_wounding_modifier(&mut self, multiplier: Option<f64>) {
        self.wounding_modifier = multiplier;
    }

    pub fn set_pool(&mut self, pool: Option<InjuryPool>) {
        self.pool = pool;
    }

    /// Toggle the limb and extremity injury caps
    pub fn set_injury_reduced_by_location(&mut self, enabled: bool) {
        self.injury_reduced_by_location = enabled;
    }

    pub fn set_use_blunt_trauma(&mut self, enabled: bool) {
        self.use_blunt_trauma = enabled;
    }

    // === Inputs ===

    pub fn damage_type(&self) -> DamageType {
        self.damage_type.unwrap_or(self.roll.damage_type)
    }

    /// Basic damage as rolled, or the override
    pub fn basic_damage(&self) -> i32 {
        self.basic_damage.unwrap_or(self.roll.basic_damage)
    }

    /// Basic damage after half damage, explosions and shotgun multipliers
    pub fn adjusted_basic_damage(&self) -> i32 {
        adjusted_basic_damage(self.roll, self.basic_damage(), self.damage_type())
    }

    /// Basic damage that pushes the target back
    ///
    /// Collateral explosions push with their falloff damage, so a blast
    /// that cannot reach the target never knocks it back.
    pub fn knockback_damage(&self) -> i32 {
        let basic = self.basic_damage();
        if self.roll.is_collateral_explosion() {
            explosion_damage_at_range(basic, self.roll.dice.count, self.roll.range)
        } else {
            basic
        }
    }

    pub fn location_id(&self) -> &'a str {
        &self.roll.location_id
    }

    pub fn location(&self) -> ResolvedLocation<'a> {
        self.target.hit_locations().resolve(&self.roll.location_id)
    }

    pub fn location_kind(&self) -> LocationKind {
        self.location().kind()
    }

    // === Penetration ===

    /// DR at the struck location before the armor divisor
    ///
    /// Unknown locations have no DR. Injury damage ignores DR.
    pub fn raw_dr(&self) -> i32 {
        if self.damage_type() == DamageType::Injury {
            return 0;
        }
        if let Some(dr) = self.raw_dr {
            return dr;
        }
        self.target
            .hit_locations()
            .dr_for(&self.roll.location_id, self.damage_type())
            .unwrap_or(0)
    }

    pub fn is_flexible(&self) -> bool {
        self.flexible.unwrap_or_else(|| {
            self.target
                .hit_locations()
                .is_flexible(&self.roll.location_id)
                .unwrap_or(false)
        })
    }

    pub fn hardened_level(&self) -> u32 {
        self.hardened.unwrap_or_else(|| self.target.hardened_level())
    }

    /// Armor divisor after Hardened DR and collateral explosions
    pub fn effective_armor_divisor(&self) -> f64 {
        let divisor = self.armor_divisor.unwrap_or(self.roll.armor_divisor());
        effective_armor_divisor(
            divisor,
            self.hardened_level(),
            self.roll.is_collateral_explosion(),
        )
    }

    pub fn effective_dr(&self) -> i32 {
        // Internal explosions bypass DR except for the collateral blast
        if self.damage_type() == DamageType::Injury
            || (self.roll.is_internal_explosion && !self.roll.is_collateral_explosion())
        {
            return 0;
        }

        let raw = self.raw_dr();
        let divisor = self.effective_armor_divisor();
        let dr = effective_dr(raw, divisor);
        tracing::trace!(raw, divisor, dr, "effective DR");
        dr
    }

    pub fn penetrating_damage(&self) -> i32 {
        penetrating_damage(self.adjusted_basic_damage(), self.effective_dr())
    }

    // === Injury ===

    fn wounding_inputs(&self) -> WoundingInputs {
        WoundingInputs {
            damage_type: self.damage_type(),
            location_kind: self.location_kind(),
            is_tight_beam_burning: self.roll.is_tight_beam_burning(),
            is_unliving: self.target.is_unliving(),
            is_homogenous: self.target.is_homogenous(),
            is_diffuse: self.target.is_diffuse(),
            no_brain: self.target.has_trait(traits::NO_BRAIN),
        }
    }

    /// Wounding multiplier as applied to this hit
    ///
    /// Reports the override if one is set, otherwise the selected
    /// modifier's ratio at the current penetrating damage (1 when nothing
    /// penetrated).
    pub fn wounding_modifier(&self) -> f64 {
        if let Some(multiplier) = self.wounding_modifier {
            return multiplier;
        }
        let penetrating = self.penetrating_damage();
        if penetrating <= 0 {
            return 1.0;
        }
        select_wounding_fn(&self.wounding_inputs())(penetrating as f64) / penetrating as f64
    }

    pub fn vulnerability_level(&self) -> i32 {
        self.vulnerability
            .unwrap_or_else(|| self.target.vulnerability_level())
    }

    /// Final injury
    pub fn injury(&self) -> i32 {
        let penetrating = self.penetrating_damage();
        if penetrating <= 0 {
            return 0;
        }

        // Step 1: Wounding modifier
        let wounded = match self.wounding_modifier {
            Some(multiplier) => penetrating as f64 * multiplier,
            None => select_wounding_fn(&self.wounding_inputs())(penetrating as f64),
        };

        // Step 2: Vulnerability and damage reduction
        let injury = calculate_injury(
            wounded,
            penetrating,
            self.vulnerability_level(),
            self.target.damage_reduction_level(),
        );

        // Step 3: Limb and extremity caps
        if self.injury_reduced_by_location && !self.target.is_diffuse() {
            cap_injury(
                injury,
                self.location_kind().category(),
                self.target.hit_points().value,
            )
        } else {
            injury
        }
    }

    /// Pool the injury comes out of
    pub fn pool(&self) -> InjuryPool {
        self.pool
            .unwrap_or_else(|| InjuryPool::for_damage_type(self.damage_type()))
    }

    pub fn blunt_trauma(&self) -> i32 {
        if !self.use_blunt_trauma {
            return 0;
        }
        calculate_blunt_trauma(
            self.damage_type(),
            self.adjusted_basic_damage(),
            self.penetrating_damage(),
            self.is_flexible(),
        )
    }

    // === Effects ===

    /// Snapshot of the hit for the effect rules
    pub fn injury_context(&self) -> InjuryContext<'a> {
        InjuryContext {
            location_id: self.location_id(),
            location_kind: self.location_kind(),
            damage_type: self.damage_type(),
            basic_damage: self.knockback_damage(),
            penetrating_damage: self.penetrating_damage(),
            injury: self.injury(),
            hit_points: self.target.hit_points().value,
            st: self.target.st(),
            is_homogenous: self.target.is_homogenous(),
            is_diffuse: self.target.is_diffuse(),
            no_brain: self.target.has_trait(traits::NO_BRAIN),
            no_vitals: self.target.has_trait(traits::NO_VITALS),
            perfect_balance: self.target.has_trait(traits::PERFECT_BALANCE),
        }
    }

    pub fn effects(&self) -> Vec<InjuryEffect> {
        derive_effects(&self.injury_context())
    }

    /// Resolve everything into a plain-data result
    pub fn result(&self) -> DamageResult {
        let result = DamageResult {
            location_id: self.roll.location_id.clone(),
            attacker: self.roll.attacker.clone(),
            damage_type: self.damage_type(),
            basic_damage: self.basic_damage(),
            adjusted_basic_damage: self.adjusted_basic_damage(),
            raw_dr: self.raw_dr(),
            armor_divisor: self.effective_armor_divisor(),
            effective_dr: self.effective_dr(),
            penetrating_damage: self.penetrating_damage(),
            wounding_modifier: self.wounding_modifier(),
            injury: self.injury(),
            pool: self.pool(),
            blunt_trauma: self.blunt_trauma(),
            effects: self.effects(),
        };

        tracing::debug!(
            location = %result.location_id,
            damage_type = %result.damage_type,
            basic = result.basic_damage,
            penetrating = result.penetrating_damage,
            injury = result.injury,
            effects = result.effects.len(),
            "resolved damage"
        );

        result
    }
}
