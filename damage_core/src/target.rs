//! DamageTarget - Read-only view of the defender

use crate::location::HitLocationTable;
use serde::{Deserialize, Serialize};

/// Trait names the damage rules look for
pub mod traits {
    pub const NO_BRAIN: &str = "No Brain";
    pub const NO_VITALS: &str = "No Vitals";
    pub const PERFECT_BALANCE: &str = "Perfect Balance";
}

/// Hit point pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Full HP
    pub value: i32,
    /// HP remaining
    pub current: i32,
}

impl HitPoints {
    /// A fresh pool at full HP
    pub fn full(value: i32) -> Self {
        HitPoints {
            value,
            current: value,
        }
    }
}

/// Injury tolerance (alternate tissue model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryTolerance {
    Unliving,
    Homogenous,
    Diffuse,
}

/// Anything that can be damaged
///
/// The calculator only reads through this trait, so game actors can expose
/// their own storage without copying into a [`TargetProfile`].
pub trait DamageTarget {
    fn st(&self) -> i32;

    fn hit_points(&self) -> HitPoints;

    fn hit_locations(&self) -> &HitLocationTable;

    /// Case-insensitive advantage/disadvantage check
    fn has_trait(&self, name: &str) -> bool;

    fn is_unliving(&self) -> bool {
        false
    }

    fn is_homogenous(&self) -> bool {
        false
    }

    fn is_diffuse(&self) -> bool {
        false
    }

    /// Vulnerability multiplier (1 = none)
    fn vulnerability_level(&self) -> i32 {
        1
    }

    /// Injury Tolerance (Damage Reduction) divisor (1 = none)
    fn damage_reduction_level(&self) -> i32 {
        1
    }

    /// Hardened DR level (0 = none)
    fn hardened_level(&self) -> u32 {
        0
    }
}

/// Plain-data target, loadable from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    // === Identity ===
    #[serde(default)]
    pub name: String,

    // === Attributes ===
    pub st: i32,
    pub hit_points: HitPoints,

    // === Traits ===
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub injury_tolerance: Option<InjuryTolerance>,
    #[serde(default = "default_level")]
    pub vulnerability_level: i32,
    #[serde(default = "default_level")]
    pub damage_reduction_level: i32,
    #[serde(default)]
    pub hardened_level: u32,

    // === Body ===
    #[serde(default)]
    pub hit_locations: HitLocationTable,
}

fn default_level() -> i32 {
    1
}

impl TargetProfile {
    pub fn new(st: i32, hit_points: i32, hit_locations: HitLocationTable) -> Self {
        TargetProfile {
            name: String::new(),
            st,
            hit_points: HitPoints::full(hit_points),
            traits: Vec::new(),
            injury_tolerance: None,
            vulnerability_level: default_level(),
            damage_reduction_level: default_level(),
            hardened_level: 0,
            hit_locations,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    pub fn with_tolerance(mut self, tolerance: InjuryTolerance) -> Self {
        self.injury_tolerance = Some(tolerance);
        self
    }

    pub fn with_vulnerability(mut self, level: i32) -> Self {
        self.vulnerability_level = level;
        self
    }

    pub fn with_damage_reduction(mut self, level: i32) -> Self {
        self.damage_reduction_level = level;
        self
    }

    pub fn with_hardened(mut self, level: u32) -> Self {
        self.hardened_level = level;
        self
    }
}

impl DamageTarget for TargetProfile {
    fn st(&self) -> i32 {
        self.st
    }

    fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    fn hit_locations(&self) -> &HitLocationTable {
        &self.hit_locations
    }

    fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    fn is_unliving(&self) -> bool {
        self.injury_tolerance == Some(InjuryTolerance::Unliving)
    }

    fn is_homogenous(&self) -> bool {
        self.injury_tolerance == Some(InjuryTolerance::Homogenous)
    }

    fn is_diffuse(&self) -> bool {
        self.injury_tolerance == Some(InjuryTolerance::Diffuse)
    }

    fn vulnerability_level(&self) -> i32 {
        self.vulnerability_level
    }

    fn damage_reduction_level(&self) -> i32 {
        self.damage_reduction_level
    }

    fn hardened_level(&self) -> u32 {
        self.hardened_level
    }
}
