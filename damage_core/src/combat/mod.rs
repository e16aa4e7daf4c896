//! Combat resolution - Apply damage rolls to targets

mod calculator;
mod resolution;
mod result;

pub use calculator::DamageCalculator;
pub use resolution::{resolve_damage, resolve_damage_with_roller, resolve_random_location};
pub use result::{DamageResult, InjuryPool};
