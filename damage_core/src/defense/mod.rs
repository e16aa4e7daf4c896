//! Defense system - Armor divisors, effective DR, blunt trauma

mod armor;
mod trauma;

pub use armor::{
    effective_armor_divisor, effective_dr, hardened_armor_divisor, penetrating_damage,
};
pub use trauma::{blunt_trauma_divisor, calculate_blunt_trauma};

/// Defense calculation constants
pub mod constants {
    /// Armor divisor ladder, from "ignores DR" (0) down to 1
    pub const ARMOR_DIVISOR_LADDER: [f64; 7] = [0.0, 100.0, 10.0, 5.0, 3.0, 2.0, 1.0];

    /// Basic damage per point of blunt trauma from crushing attacks
    pub const BLUNT_TRAUMA_CRUSHING_DIVISOR: i32 = 5;

    /// Basic damage per point of blunt trauma from cutting, impaling and piercing attacks
    pub const BLUNT_TRAUMA_EDGED_DIVISOR: i32 = 10;
}
