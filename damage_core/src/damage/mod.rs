//! Damage system - damage types, the rolled event, basic damage adjustment and wounding

mod calculation;
mod damage_type;
mod roll;
mod wounding;

pub use calculation::{adjusted_basic_damage, explosion_damage_at_range};
pub use damage_type::{DamageType, TissueModel, WoundingFn, WoundingModifiers};
pub use roll::{DamageModifier, DamageRoll};
pub use wounding::{
    calculate_injury, cap_injury, location_wounding_fn, select_wounding_fn, WoundingInputs,
};
