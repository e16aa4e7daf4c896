//! Property tests for damage resolution invariants

use damage_core::config::default_humanoid;
use damage_core::effects::EffectType;
use damage_core::location::{DrTable, LocationKind};
use damage_core::{DamageCalculator, DamageRoll, DamageType, InjuryTolerance, TargetProfile};
use proptest::prelude::*;

const LOCATIONS: [&str; 14] = [
    "eye", "skull", "face", "right leg", "right arm", "torso", "groin", "left arm", "left leg",
    "hand", "foot", "neck", "vitals", "LargeArea",
];

fn make_target(hit_points: i32, dr: i32, tolerance: Option<InjuryTolerance>) -> TargetProfile {
    let mut table = default_humanoid();
    for location in &mut table.locations {
        location.dr = DrTable::uniform(dr);
    }
    let mut target = TargetProfile::new(10, hit_points, table);
    target.injury_tolerance = tolerance;
    target
}

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop::sample::select(DamageType::all().to_vec())
}

fn location() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LOCATIONS.to_vec())
}

fn armor_divisor() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.0, 0.1, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 100.0])
}

fn tolerance() -> impl Strategy<Value = Option<InjuryTolerance>> {
    prop::sample::select(vec![
        None,
        Some(InjuryTolerance::Unliving),
        Some(InjuryTolerance::Homogenous),
        Some(InjuryTolerance::Diffuse),
    ])
}

proptest! {
    #[test]
    fn prop_penetration_is_adjusted_minus_dr(
        basic in 0i32..100,
        dr in 0i32..50,
        divisor in armor_divisor(),
        damage_type in damage_type(),
        location in location(),
    ) {
        let target = make_target(10, dr, None);
        let roll = DamageRoll::new(basic, damage_type)
            .at_location(location)
            .with_armor_divisor(divisor)
            .unwrap();
        let calc = DamageCalculator::new(&roll, &target).unwrap();

        prop_assert_eq!(
            calc.penetrating_damage(),
            (calc.adjusted_basic_damage() - calc.effective_dr()).max(0)
        );
    }

    #[test]
    fn prop_no_penetration_no_injury(
        basic in 0i32..60,
        dr in 0i32..50,
        hit_points in 1i32..40,
        damage_type in damage_type(),
        location in location(),
        tolerance in tolerance(),
    ) {
        let target = make_target(hit_points, dr, tolerance);
        let roll = DamageRoll::new(basic, damage_type).at_location(location);
        let calc = DamageCalculator::new(&roll, &target).unwrap();

        prop_assert!(calc.injury() >= 0);
        if calc.penetrating_damage() == 0 {
            prop_assert_eq!(calc.injury(), 0);
        } else {
            prop_assert!(calc.injury() >= 1 || damage_type == DamageType::KnockbackOnly);
        }
    }

    #[test]
    fn prop_resolution_is_deterministic(
        basic in 0i32..60,
        dr in 0i32..20,
        hit_points in 1i32..40,
        damage_type in damage_type(),
        location in location(),
        tolerance in tolerance(),
    ) {
        let target = make_target(hit_points, dr, tolerance);
        let roll = DamageRoll::new(basic, damage_type).at_location(location);

        let first = DamageCalculator::new(&roll, &target).unwrap().result();
        let second = DamageCalculator::new(&roll, &target).unwrap().result();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_shock_is_capped(
        basic in 0i32..100,
        hit_points in 1i32..40,
        damage_type in damage_type(),
        location in location(),
    ) {
        let target = make_target(hit_points, 0, None);
        let roll = DamageRoll::new(basic, damage_type).at_location(location);
        let calc = DamageCalculator::new(&roll, &target).unwrap();
        let cap = if calc.location_kind() == LocationKind::Groin { 8 } else { 4 };

        for effect in calc.effects() {
            if let EffectType::Shock { amount } = effect.effect_type {
                prop_assert!(amount >= 1 && amount <= cap);
            }
        }
    }

    #[test]
    fn prop_limbs_never_exceed_cap(
        basic in 0i32..100,
        hit_points in 1i32..40,
        damage_type in damage_type(),
        location in prop::sample::select(vec!["right arm", "left leg", "hand", "foot"]),
    ) {
        let target = make_target(hit_points, 0, None);
        let roll = DamageRoll::new(basic, damage_type).at_location(location);
        let calc = DamageCalculator::new(&roll, &target).unwrap();

        let cap = match calc.location_kind() {
            LocationKind::Hand | LocationKind::Foot => hit_points / 3 + 1,
            _ => hit_points / 2 + 1,
        };
        prop_assert!(calc.injury() <= cap);
    }
}
