//! Hit locations - per-location DR, flexible armor and location kinds

mod hit_location;
mod table;

pub use hit_location::{DrTable, HitLocation, LocationCategory, LocationKind, RollRange};
pub use table::{HitLocationTable, ResolvedLocation};

/// Pseudo-location: roll on the table before resolving damage
pub const RANDOM: &str = "Random";
/// Pseudo-location: large-area attack (explosions, fire, ...)
pub const LARGE_AREA: &str = "LargeArea";
/// Pseudo-location: the target's default location (torso)
pub const DEFAULT: &str = "Default";
