//! Dice - Dice descriptors and the roller seam
//!
//! The library never rolls dice itself. Callers that need a random hit
//! location pass in a `DiceRoller`; everything else works on resolved totals.

use crate::error::DamageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A six-sided dice expression such as `3d`, `2d+1` or `1d-2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dice {
    /// Number of dice rolled
    pub count: u32,
    /// Flat adds applied to the total
    pub adds: i32,
}

impl Dice {
    pub fn new(count: u32, adds: i32) -> Self {
        Dice { count, adds }
    }

    /// Lowest possible total, saturating at the `i32` bounds
    pub fn min_total(&self) -> i32 {
        clamp_total(i64::from(self.count) + i64::from(self.adds))
    }

    /// Highest possible total, saturating at the `i32` bounds
    pub fn max_total(&self) -> i32 {
        clamp_total(i64::from(self.count) * 6 + i64::from(self.adds))
    }
}

fn clamp_total(total: i64) -> i32 {
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for Dice {
    fn default() -> Self {
        Dice::new(3, 0)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.adds {
            0 => write!(f, "{}d", self.count),
            adds if adds > 0 => write!(f, "{}d+{}", self.count, adds),
            adds => write!(f, "{}d{}", self.count, adds),
        }
    }
}

impl FromStr for Dice {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DamageError::InvalidDice(s.to_string());
        let trimmed = s.trim();

        let (count_str, rest) = trimmed.split_once(['d', 'D']).ok_or_else(invalid)?;
        let count: u32 = count_str.trim().parse().map_err(|_| invalid())?;

        // Accept an explicit die size, but only d6
        let rest = rest.trim();
        let rest = rest.strip_prefix('6').unwrap_or(rest).trim();

        let adds = if rest.is_empty() {
            0
        } else if let Some(value) = rest.strip_prefix('+') {
            value.trim().parse::<i32>().map_err(|_| invalid())?
        } else if let Some(value) = rest.strip_prefix('-') {
            -value.trim().parse::<i32>().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };

        Ok(Dice { count, adds })
    }
}

impl TryFrom<String> for Dice {
    type Error = DamageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dice> for String {
    fn from(dice: Dice) -> Self {
        dice.to_string()
    }
}

/// Anything that can turn a dice expression into a total
pub trait DiceRoller {
    fn roll(&mut self, dice: &Dice) -> i32;
}

impl<F> DiceRoller for F
where
    F: FnMut(&Dice) -> i32,
{
    fn roll(&mut self, dice: &Dice) -> i32 {
        self(dice)
    }
}
