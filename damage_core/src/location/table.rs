//! HitLocationTable - Ordered hit locations for one body plan

use super::{HitLocation, LocationKind, DEFAULT, LARGE_AREA, RANDOM};
use crate::damage::DamageType;
use crate::dice::{Dice, DiceRoller};
use serde::{Deserialize, Serialize};

/// A location id resolved against a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedLocation<'a> {
    /// A concrete entry of the table
    Location(&'a HitLocation),
    /// Large-area attack covering the whole body
    LargeArea,
    /// Still needs a hit roll
    Random,
    /// Not in the table
    Unknown,
}

impl ResolvedLocation<'_> {
    /// Kind used for wounding rules; large-area hits count as torso hits
    pub fn kind(&self) -> LocationKind {
        match self {
            ResolvedLocation::Location(location) => location.kind(),
            ResolvedLocation::LargeArea => LocationKind::Torso,
            ResolvedLocation::Random | ResolvedLocation::Unknown => LocationKind::Other,
        }
    }
}

/// Hit location table of a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitLocationTable {
    /// Dice rolled to pick a random location
    #[serde(default)]
    pub roll_dice: Dice,
    /// Locations in table order
    #[serde(default)]
    pub locations: Vec<HitLocation>,
}

impl Default for HitLocationTable {
    fn default() -> Self {
        HitLocationTable {
            roll_dice: Dice::default(),
            locations: Vec::new(),
        }
    }
}

impl HitLocationTable {
    pub fn new(locations: Vec<HitLocation>) -> Self {
        HitLocationTable {
            locations,
            ..Default::default()
        }
    }

    /// Find a concrete location by id ("Default" means the torso)
    pub fn get(&self, id: &str) -> Option<&HitLocation> {
        if id.eq_ignore_ascii_case(DEFAULT) {
            return self.torso();
        }
        self.locations.iter().find(|location| location.matches(id))
    }

    /// Resolve any location id, including pseudo-locations
    pub fn resolve(&self, id: &str) -> ResolvedLocation<'_> {
        let id = id.trim();
        if id.eq_ignore_ascii_case(LARGE_AREA) {
            return ResolvedLocation::LargeArea;
        }
        if id.eq_ignore_ascii_case(RANDOM) {
            return ResolvedLocation::Random;
        }
        match self.get(id) {
            Some(location) => ResolvedLocation::Location(location),
            None => ResolvedLocation::Unknown,
        }
    }

    /// The first torso location
    pub fn torso(&self) -> Option<&HitLocation> {
        self.locations
            .iter()
            .find(|location| location.kind() == LocationKind::Torso)
    }

    /// DR at a location against a damage type; `None` if the id is unknown
    pub fn dr_for(&self, id: &str, damage_type: DamageType) -> Option<i32> {
        match self.resolve(id) {
            ResolvedLocation::Location(location) => Some(location.dr_for(damage_type)),
            ResolvedLocation::LargeArea => Some(self.large_area_dr(damage_type)),
            ResolvedLocation::Random | ResolvedLocation::Unknown => None,
        }
    }

    /// Whether the armor at a location is flexible; `None` if the id is unknown
    pub fn is_flexible(&self, id: &str) -> Option<bool> {
        match self.resolve(id) {
            ResolvedLocation::Location(location) => Some(location.flexible),
            ResolvedLocation::LargeArea => Some(self.torso().is_some_and(|t| t.flexible)),
            ResolvedLocation::Random | ResolvedLocation::Unknown => None,
        }
    }

    /// DR against a large-area attack
    ///
    /// Average of torso DR and the lowest DR anywhere, rounded down.
    pub fn large_area_dr(&self, damage_type: DamageType) -> i32 {
        let lowest = self
            .locations
            .iter()
            .map(|location| location.dr_for(damage_type))
            .min()
            .unwrap_or(0);
        let torso = self
            .torso()
            .map(|location| location.dr_for(damage_type))
            .unwrap_or(lowest);

        ((i64::from(torso) + i64::from(lowest)).div_euclid(2)) as i32
    }

    /// The first location whose roll range contains `total`
    pub fn location_for_roll(&self, total: i32) -> Option<&HitLocation> {
        self.locations
            .iter()
            .find(|location| location.roll.is_some_and(|range| range.contains(total)))
    }

    /// Roll the table's dice and look up the result
    pub fn roll_random_location(&self, roller: &mut impl DiceRoller) -> Option<&HitLocation> {
        let total = roller.roll(&self.roll_dice);
        let location = self.location_for_roll(total);
        tracing::trace!(
            total,
            location = location.map(|l| l.id.as_str()),
            "rolled random hit location"
        );
        location
    }

    /// Ids of all locations, in table order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|location| location.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
