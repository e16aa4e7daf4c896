//! Damage calculation - turning rolled basic damage into the damage that meets DR

use super::{DamageRoll, DamageType};

/// Adjust rolled basic damage for the way it was delivered
///
/// Steps are applied in order:
/// 1. Half damage (1/2D range) halves, rounding down
/// 2. Knockback-only attacks never deal damage
/// 3. Explosions at range fall off to `basic / (3 * range)`, and nothing
///    reaches past `2 * dice` yards
/// 4. Close-range shotgun blasts multiply by half the RoF multiplier
///
/// Arithmetic saturates at the `i32` bounds.
pub fn adjusted_basic_damage(roll: &DamageRoll, basic_damage: i32, damage_type: DamageType) -> i32 {
    let mut damage = basic_damage;

    // Step 1: 1/2D
    if roll.is_half_damage {
        damage = damage.div_euclid(2);
    }

    // Step 2: Knockback only
    if damage_type == DamageType::KnockbackOnly {
        return 0;
    }

    // Step 3: Explosion falloff
    if roll.is_explosion() && roll.range > 0 {
        damage = explosion_damage_at_range(damage, roll.dice.count, roll.range);
    }

    // Step 4: Shotgun close range
    if roll.is_shotgun_close_range {
        let multiplier = i32::try_from(roll.rof_multiplier / 2).unwrap_or(i32::MAX);
        damage = damage.saturating_mul(multiplier);
    }

    damage
}

/// Collateral damage from an explosion `range` yards from its center
pub fn explosion_damage_at_range(damage: i32, dice_count: u32, range: u32) -> i32 {
    if range == 0 {
        return damage;
    }
    if u64::from(range) > 2 * u64::from(dice_count) {
        return 0;
    }
    (i64::from(damage).div_euclid(3 * i64::from(range))) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Dice;

    fn adjusted(roll: &DamageRoll) -> i32 {
        adjusted_basic_damage(roll, roll.basic_damage, roll.damage_type)
    }

    #[test]
    fn test_plain_damage_unchanged() {
        let roll = DamageRoll::new(13, DamageType::Cutting);
        assert_eq!(adjusted(&roll), 13);
    }

    #[test]
    fn test_half_damage_rounds_down() {
        let roll = DamageRoll::new(13, DamageType::Piercing).half_damage();
        assert_eq!(adjusted(&roll), 6);
    }

    #[test]
    fn test_knockback_only_deals_nothing() {
        let roll = DamageRoll::new(13, DamageType::KnockbackOnly);
        assert_eq!(adjusted(&roll), 0);
    }

    #[test]
    fn test_explosion_falloff() {
        let roll = DamageRoll::new(30, DamageType::Crushing)
            .with_dice(Dice::new(6, 0))
            .explosion_at(2);
        // 30 / (3 * 2) = 5
        assert_eq!(adjusted(&roll), 5);

        let roll = DamageRoll::new(30, DamageType::Crushing)
            .with_dice(Dice::new(6, 0))
            .explosion_at(4);
        // 30 / 12 = 2.5
        assert_eq!(adjusted(&roll), 2);
    }

    #[test]
    fn test_explosion_out_of_reach() {
        // 3 dice reach 6 yards
        let roll = DamageRoll::new(20, DamageType::Crushing)
            .with_dice(Dice::new(3, 0))
            .explosion_at(6);
        assert_eq!(adjusted(&roll), 1);

        let roll = DamageRoll::new(20, DamageType::Crushing)
            .with_dice(Dice::new(3, 0))
            .explosion_at(7);
        assert_eq!(adjusted(&roll), 0);
    }

    #[test]
    fn test_explosion_direct_hit() {
        let roll = DamageRoll::new(20, DamageType::Crushing).explosion_at(0);
        assert_eq!(adjusted(&roll), 20);
    }

    #[test]
    fn test_shotgun_close_range() {
        let roll = DamageRoll::new(7, DamageType::SmallPiercing).shotgun_close_range(9);
        // 9 / 2 = 4
        assert_eq!(adjusted(&roll), 28);
    }

    #[test]
    fn test_huge_shotgun_blast_saturates() {
        let roll = DamageRoll::new(600_000_000, DamageType::Piercing).shotgun_close_range(10);
        assert_eq!(adjusted(&roll), i32::MAX);

        let roll = DamageRoll::new(-600_000_000, DamageType::Piercing).shotgun_close_range(10);
        assert_eq!(adjusted(&roll), i32::MIN);
    }

    #[test]
    fn test_huge_explosion() {
        let roll = DamageRoll::new(i32::MAX, DamageType::Crushing)
            .with_dice(Dice::new(u32::MAX, 0))
            .explosion_at(3);
        assert_eq!(adjusted(&roll), i32::MAX / 9);

        assert_eq!(explosion_damage_at_range(30, u32::MAX, u32::MAX), 0);
    }
}
