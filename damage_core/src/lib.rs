//! damage_core - Damage resolution library for a point-based tabletop ruleset
//!
//! This library provides:
//! - DamageRoll: A rolled damage event (basic damage, type, armor divisor, delivery)
//! - DamageTarget: Read-only view of the defender (HP, ST, traits, hit locations)
//! - DamageCalculator: Effective DR, penetration, wounding, injury and blunt trauma
//! - InjuryEffect: Shock, major wounds, knockback, blinding and crippling
//! - Config: Body plans and target profiles from TOML
//!
//! ```rust
//! use damage_core::{resolve_damage, config, DamageRoll, DamageType, TargetProfile};
//!
//! let target = TargetProfile::new(10, 10, config::default_humanoid());
//! let roll = DamageRoll::new(8, DamageType::Cutting).at_location("skull");
//! let result = resolve_damage(&roll, &target).unwrap();
//!
//! // Skull DR 2, then x4 for a hit to the brain
//! assert_eq!(result.injury, 24);
//! ```

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod dice;
pub mod effects;
pub mod error;
pub mod location;
pub mod prelude;
pub mod target;

// Re-export core types for convenience
pub use combat::{
    resolve_damage, resolve_damage_with_roller, resolve_random_location, DamageCalculator,
    DamageResult, InjuryPool,
};
pub use config::{default_humanoid, ConfigError};
pub use damage::{DamageModifier, DamageRoll, DamageType, TissueModel};
pub use dice::{Dice, DiceRoller};
pub use effects::{EffectType, InjuryContext, InjuryEffect};
pub use error::DamageError;
pub use location::{DrTable, HitLocation, HitLocationTable, LocationKind};
pub use target::{DamageTarget, HitPoints, InjuryTolerance, TargetProfile};
