//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Inputs
pub use crate::damage::{DamageModifier, DamageRoll, DamageType};
pub use crate::dice::{Dice, DiceRoller};

// Targets
pub use crate::location::{DrTable, HitLocation, HitLocationTable, LocationKind};
pub use crate::target::{DamageTarget, HitPoints, InjuryTolerance, TargetProfile};

// Resolution
pub use crate::combat::{
    resolve_damage, resolve_damage_with_roller, DamageCalculator, DamageResult, InjuryPool,
};
pub use crate::effects::{Condition, EffectType, InjuryEffect};

// Errors
pub use crate::error::DamageError;

// Config
pub use crate::config::default_humanoid;
