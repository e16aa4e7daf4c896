//! DamageType - Closed registry of damage types and their wounding modifiers
//!
//! Each damage type maps to four wounding-modifier functions, one per tissue
//! model. A wounding modifier takes penetrating damage and returns the
//! (unfloored) injury it inflicts.
//!
//! | type                              | default | unliving | homogenous | diffuse  |
//! |-----------------------------------|---------|----------|------------|----------|
//! | injury/burn/cor/cr/fat/tox/kb     | x1      | x1       | x1         | min(x,2) |
//! | cut                               | x1.5    | x1       | x1         | min(x,2) |
//! | imp                               | x2      | x1       | x0.5       | min(x,1) |
//! | pi-                               | x0.5    | x0.2     | x0.1       | min(x,1) |
//! | pi                                | x1      | x1/3     | x0.2       | min(x,1) |
//! | pi+                               | x1.5    | x1       | x1/3       | min(x,1) |
//! | pi++                              | x2      | x1       | x0.5       | min(x,1) |

use crate::error::DamageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Damage type keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageType {
    /// Direct injury, bypasses DR
    #[serde(rename = "injury")]
    Injury,
    #[serde(rename = "burn")]
    Burning,
    #[serde(rename = "cor")]
    Corrosive,
    #[serde(rename = "cr")]
    Crushing,
    #[serde(rename = "cut")]
    Cutting,
    #[serde(rename = "fat")]
    Fatigue,
    #[serde(rename = "imp")]
    Impaling,
    #[serde(rename = "pi-")]
    SmallPiercing,
    #[serde(rename = "pi")]
    Piercing,
    #[serde(rename = "pi+")]
    LargePiercing,
    #[serde(rename = "pi++")]
    HugePiercing,
    #[serde(rename = "tox")]
    Toxic,
    /// Knockback only, never injures
    #[serde(rename = "kb")]
    KnockbackOnly,
}

/// Tissue model of the target, selecting a column of the modifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TissueModel {
    Default,
    Unliving,
    Homogenous,
    Diffuse,
}

/// A wounding modifier: penetrating damage in, raw injury out
pub type WoundingFn = fn(f64) -> f64;

/// One row of the wounding table
#[derive(Clone, Copy)]
pub struct WoundingModifiers {
    pub default: WoundingFn,
    pub unliving: WoundingFn,
    pub homogenous: WoundingFn,
    pub diffuse: WoundingFn,
}

impl WoundingModifiers {
    /// Pick the function for a tissue model
    pub fn for_model(&self, model: TissueModel) -> WoundingFn {
        match model {
            TissueModel::Default => self.default,
            TissueModel::Unliving => self.unliving,
            TissueModel::Homogenous => self.homogenous,
            TissueModel::Diffuse => self.diffuse,
        }
    }
}

impl fmt::Debug for WoundingModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sample each column at 10 so the row is readable in test output
        f.debug_struct("WoundingModifiers")
            .field("default", &(self.default)(10.0))
            .field("unliving", &(self.unliving)(10.0))
            .field("homogenous", &(self.homogenous)(10.0))
            .field("diffuse", &(self.diffuse)(10.0))
            .finish()
    }
}

pub(super) fn identity(x: f64) -> f64 {
    x
}
pub(super) fn one_and_half(x: f64) -> f64 {
    x * 1.5
}
pub(super) fn double(x: f64) -> f64 {
    x * 2.0
}
fn half(x: f64) -> f64 {
    x / 2.0
}
fn third(x: f64) -> f64 {
    x / 3.0
}
fn fifth(x: f64) -> f64 {
    x / 5.0
}
fn tenth(x: f64) -> f64 {
    x / 10.0
}
fn at_most_one(x: f64) -> f64 {
    x.min(1.0)
}
fn at_most_two(x: f64) -> f64 {
    x.min(2.0)
}

const FLAT: WoundingModifiers = WoundingModifiers {
    default: identity,
    unliving: identity,
    homogenous: identity,
    diffuse: at_most_two,
};

const CUTTING: WoundingModifiers = WoundingModifiers {
    default: one_and_half,
    unliving: identity,
    homogenous: identity,
    diffuse: at_most_two,
};

const IMPALING: WoundingModifiers = WoundingModifiers {
    default: double,
    unliving: identity,
    homogenous: half,
    diffuse: at_most_one,
};

const SMALL_PIERCING: WoundingModifiers = WoundingModifiers {
    default: half,
    unliving: fifth,
    homogenous: tenth,
    diffuse: at_most_one,
};

const PIERCING: WoundingModifiers = WoundingModifiers {
    default: identity,
    unliving: third,
    homogenous: fifth,
    diffuse: at_most_one,
};

const LARGE_PIERCING: WoundingModifiers = WoundingModifiers {
    default: one_and_half,
    unliving: identity,
    homogenous: third,
    diffuse: at_most_one,
};

const HUGE_PIERCING: WoundingModifiers = WoundingModifiers {
    default: double,
    unliving: identity,
    homogenous: half,
    diffuse: at_most_one,
};

impl DamageType {
    /// Every damage type, in table order
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Injury,
            DamageType::Burning,
            DamageType::Corrosive,
            DamageType::Crushing,
            DamageType::Cutting,
            DamageType::Fatigue,
            DamageType::Impaling,
            DamageType::SmallPiercing,
            DamageType::Piercing,
            DamageType::LargePiercing,
            DamageType::HugePiercing,
            DamageType::Toxic,
            DamageType::KnockbackOnly,
        ]
    }

    /// Ruleset key (`cr`, `pi+`, ...)
    pub fn key(self) -> &'static str {
        match self {
            DamageType::Injury => "injury",
            DamageType::Burning => "burn",
            DamageType::Corrosive => "cor",
            DamageType::Crushing => "cr",
            DamageType::Cutting => "cut",
            DamageType::Fatigue => "fat",
            DamageType::Impaling => "imp",
            DamageType::SmallPiercing => "pi-",
            DamageType::Piercing => "pi",
            DamageType::LargePiercing => "pi+",
            DamageType::HugePiercing => "pi++",
            DamageType::Toxic => "tox",
            DamageType::KnockbackOnly => "kb",
        }
    }

    /// Look up a damage type by key
    pub fn from_key(key: &str) -> Result<DamageType, DamageError> {
        DamageType::all()
            .iter()
            .copied()
            .find(|t| t.key() == key)
            .ok_or_else(|| DamageError::UnknownDamageType(key.to_string()))
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            DamageType::Injury => "Injury",
            DamageType::Burning => "Burning",
            DamageType::Corrosive => "Corrosive",
            DamageType::Crushing => "Crushing",
            DamageType::Cutting => "Cutting",
            DamageType::Fatigue => "Fatigue",
            DamageType::Impaling => "Impaling",
            DamageType::SmallPiercing => "Small Piercing",
            DamageType::Piercing => "Piercing",
            DamageType::LargePiercing => "Large Piercing",
            DamageType::HugePiercing => "Huge Piercing",
            DamageType::Toxic => "Toxic",
            DamageType::KnockbackOnly => "Knockback Only",
        }
    }

    /// The wounding table row for this type
    pub fn modifiers(self) -> WoundingModifiers {
        match self {
            DamageType::Injury
            | DamageType::Burning
            | DamageType::Corrosive
            | DamageType::Crushing
            | DamageType::Fatigue
            | DamageType::Toxic
            | DamageType::KnockbackOnly => FLAT,
            DamageType::Cutting => CUTTING,
            DamageType::Impaling => IMPALING,
            DamageType::SmallPiercing => SMALL_PIERCING,
            DamageType::Piercing => PIERCING,
            DamageType::LargePiercing => LARGE_PIERCING,
            DamageType::HugePiercing => HUGE_PIERCING,
        }
    }

    /// Apply the wounding modifier for a tissue model
    pub fn wound(self, model: TissueModel, penetrating: f64) -> f64 {
        (self.modifiers().for_model(model))(penetrating)
    }

    /// Any of the four piercing sizes
    pub fn is_piercing(self) -> bool {
        matches!(
            self,
            DamageType::SmallPiercing
                | DamageType::Piercing
                | DamageType::LargePiercing
                | DamageType::HugePiercing
        )
    }

    /// Impaling or any piercing size
    pub fn is_impaling_or_piercing(self) -> bool {
        self == DamageType::Impaling || self.is_piercing()
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DamageType {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageType::from_key(s.trim())
    }
}
