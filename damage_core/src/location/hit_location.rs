//! HitLocation - One entry of a target's hit location table

use crate::damage::DamageType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a location is, for wounding and injury rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Skull,
    Eye,
    Face,
    Neck,
    Torso,
    Vitals,
    Groin,
    Arm,
    Leg,
    Hand,
    Foot,
    Other,
}

/// Coarse grouping used for injury caps and crippling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    Limb,
    Extremity,
    Torso,
    Other,
}

impl LocationKind {
    /// Infer the kind from a location id such as "Right Arm" or "skull"
    pub fn from_id(id: &str) -> LocationKind {
        let id = id.to_ascii_lowercase();
        if id.contains("skull") || id.contains("brain") {
            LocationKind::Skull
        } else if id.contains("eye") {
            LocationKind::Eye
        } else if id.contains("face") {
            LocationKind::Face
        } else if id.contains("neck") {
            LocationKind::Neck
        } else if id.contains("vitals") {
            LocationKind::Vitals
        } else if id.contains("groin") {
            LocationKind::Groin
        } else if id.contains("torso") || id.contains("chest") || id.contains("abdomen") {
            LocationKind::Torso
        } else if id.contains("hand") {
            LocationKind::Hand
        } else if id.contains("foot") || id.contains("feet") {
            LocationKind::Foot
        } else if id.contains("arm") {
            LocationKind::Arm
        } else if id.contains("leg") {
            LocationKind::Leg
        } else {
            LocationKind::Other
        }
    }

    pub fn category(self) -> LocationCategory {
        match self {
            LocationKind::Arm | LocationKind::Leg => LocationCategory::Limb,
            LocationKind::Hand | LocationKind::Foot => LocationCategory::Extremity,
            LocationKind::Torso => LocationCategory::Torso,
            _ => LocationCategory::Other,
        }
    }

    /// Skull or eye
    pub fn is_brain(self) -> bool {
        matches!(self, LocationKind::Skull | LocationKind::Eye)
    }

    /// Arm, leg, hand or foot
    pub fn is_limb_or_extremity(self) -> bool {
        matches!(
            self.category(),
            LocationCategory::Limb | LocationCategory::Extremity
        )
    }
}

/// Inclusive range of hit-roll totals selecting a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct RollRange {
    pub low: i32,
    pub high: i32,
}

impl RollRange {
    pub fn new(low: i32, high: i32) -> Self {
        RollRange { low, high }
    }

    pub fn contains(&self, total: i32) -> bool {
        self.low <= total && total <= self.high
    }

    pub fn overlaps(&self, other: &RollRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl From<(i32, i32)> for RollRange {
    fn from((low, high): (i32, i32)) -> Self {
        RollRange::new(low, high)
    }
}

impl From<RollRange> for (i32, i32) {
    fn from(range: RollRange) -> Self {
        (range.low, range.high)
    }
}

/// DR by damage type with an `all` fallback
///
/// In TOML: `dr = { all = 4, cr = 2 }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrTable {
    #[serde(default)]
    pub all: i32,
    #[serde(flatten)]
    pub by_type: BTreeMap<DamageType, i32>,
}

impl DrTable {
    /// Same DR against every damage type
    pub fn uniform(all: i32) -> Self {
        DrTable {
            all,
            by_type: BTreeMap::new(),
        }
    }

    pub fn with_type(mut self, damage_type: DamageType, dr: i32) -> Self {
        self.by_type.insert(damage_type, dr);
        self
    }

    /// DR against a damage type, falling back to `all`
    pub fn get(&self, damage_type: DamageType) -> i32 {
        self.by_type.get(&damage_type).copied().unwrap_or(self.all)
    }
}

/// A hit location with its armor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitLocation {
    /// Identifier used by damage rolls ("skull", "Right Arm", ...)
    pub id: String,
    /// Hit-roll totals that land here; `None` for aimed-only locations
    #[serde(default)]
    pub roll: Option<RollRange>,
    #[serde(default)]
    pub dr: DrTable,
    /// Armor over this location is flexible (subject to blunt trauma)
    #[serde(default)]
    pub flexible: bool,
    /// Explicit kind; inferred from the id when absent
    #[serde(default)]
    kind: Option<LocationKind>,
}

impl HitLocation {
    pub fn new(id: impl Into<String>) -> Self {
        HitLocation {
            id: id.into(),
            roll: None,
            dr: DrTable::default(),
            flexible: false,
            kind: None,
        }
    }

    pub fn with_roll(mut self, low: i32, high: i32) -> Self {
        self.roll = Some(RollRange::new(low, high));
        self
    }

    pub fn with_dr(mut self, dr: DrTable) -> Self {
        self.dr = dr;
        self
    }

    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn kind(&self) -> LocationKind {
        self.kind.unwrap_or_else(|| LocationKind::from_id(&self.id))
    }

    pub fn category(&self) -> LocationCategory {
        self.kind().category()
    }

    pub fn dr_for(&self, damage_type: DamageType) -> i32 {
        self.dr.get(damage_type)
    }

    /// Case-insensitive id match
    pub fn matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }
}
