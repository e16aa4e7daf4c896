//! Armor - Armor divisors, hardened DR and effective DR
//!
//! Armor divisors follow a fixed ladder. Hardened DR moves an attack's
//! divisor down the ladder (toward 1) one step per level:
//!
//! `(ignores DR) -> 100 -> 10 -> 5 -> 3 -> 2 -> 1`
//!
//! Fractional divisors (between 0 and 1) multiply DR instead and are not
//! affected by Hardened. A DR of 0 counts as DR 1 against them.

use super::constants::ARMOR_DIVISOR_LADDER;

/// Apply Hardened DR to an armor divisor
///
/// # Arguments
/// * `divisor` - The attack's armor divisor (0 = ignores DR)
/// * `hardened` - The target's Hardened level
///
/// # Returns
/// The divisor after stepping `hardened` rungs toward 1
pub fn hardened_armor_divisor(divisor: f64, hardened: u32) -> f64 {
    if hardened == 0 || (divisor > 0.0 && divisor <= 1.0) {
        return divisor;
    }

    let last = ARMOR_DIVISOR_LADDER.len() - 1;
    let index = match ARMOR_DIVISOR_LADDER.iter().position(|&rung| rung == divisor) {
        Some(index) => index + hardened as usize,
        None => {
            // Off-ladder divisor: the first step lands on the next rung below it
            let below = ARMOR_DIVISOR_LADDER
                .iter()
                .skip(1)
                .position(|&rung| rung < divisor)
                .map(|i| i + 1)
                .unwrap_or(last);
            below + hardened as usize - 1
        }
    };

    ARMOR_DIVISOR_LADDER[index.min(last)]
}

/// Armor divisor actually used against DR
///
/// Collateral explosion damage always uses a divisor of 1.
pub fn effective_armor_divisor(divisor: f64, hardened: u32, is_collateral_explosion: bool) -> f64 {
    if is_collateral_explosion {
        return 1.0;
    }
    hardened_armor_divisor(divisor, hardened)
}

/// DR after applying an armor divisor
///
/// A divisor of 0 ignores DR. Fractional divisors treat DR 0 as DR 1.
pub fn effective_dr(raw_dr: i32, divisor: f64) -> i32 {
    if divisor <= 0.0 {
        return 0;
    }

    let raw_dr = raw_dr.max(0);
    let dr = (raw_dr as f64 / divisor).floor() as i32;

    if divisor < 1.0 && dr == 0 {
        1
    } else {
        dr
    }
}

/// Damage getting through DR
pub fn penetrating_damage(adjusted_basic_damage: i32, effective_dr: i32) -> i32 {
    adjusted_basic_damage.saturating_sub(effective_dr).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hardening() {
        assert!((hardened_armor_divisor(5.0, 0) - 5.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(0.0, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hardening_steps_down_ladder() {
        assert!((hardened_armor_divisor(10.0, 1) - 5.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(10.0, 2) - 3.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(0.0, 1) - 100.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(2.0, 1) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hardening_clamps_at_one() {
        assert!((hardened_armor_divisor(3.0, 5) - 1.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(1.0, 3) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_divisor_unaffected() {
        assert!((hardened_armor_divisor(0.5, 2) - 0.5).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(0.2, 1) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_off_ladder_divisor() {
        // 4 -> 3 -> 2
        assert!((hardened_armor_divisor(4.0, 1) - 3.0).abs() < f64::EPSILON);
        assert!((hardened_armor_divisor(4.0, 2) - 2.0).abs() < f64::EPSILON);
        // 1.5 -> 1
        assert!((hardened_armor_divisor(1.5, 1) - 1.0).abs() < f64::EPSILON);
        // 200 -> 100
        assert!((hardened_armor_divisor(200.0, 1) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collateral_explosion() {
        assert!((effective_armor_divisor(5.0, 0, true) - 1.0).abs() < f64::EPSILON);
        assert!((effective_armor_divisor(5.0, 1, false) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_dr() {
        assert_eq!(effective_dr(20, 2.0), 10);
        assert_eq!(effective_dr(20, 5.0), 4);
        assert_eq!(effective_dr(5, 3.0), 1);
        assert_eq!(effective_dr(5, 10.0), 0);
        assert_eq!(effective_dr(20, 0.0), 0);
    }

    #[test]
    fn test_fractional_divisor_multiplies_dr() {
        assert_eq!(effective_dr(4, 0.5), 8);
        assert_eq!(effective_dr(0, 0.5), 1);
        assert_eq!(effective_dr(0, 1.0), 0);
    }

    #[test]
    fn test_penetrating_damage() {
        assert_eq!(penetrating_damage(10, 4), 6);
        assert_eq!(penetrating_damage(3, 4), 0);
        assert_eq!(penetrating_damage(i32::MIN, i32::MAX), 0);
        assert_eq!(penetrating_damage(i32::MAX, -1), i32::MAX);
    }
}
