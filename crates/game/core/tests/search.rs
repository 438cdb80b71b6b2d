use statcraft_core::{
    Attributes, Character, CharacterClass, CombatBonuses, Feasibility, PlanError, PlanningError,
    Requirements, Weapon, WeaponCategory, WeaponDelayTable, determine_optimal_stats,
};

fn monk(level: u32, damage: u32, damage_modifier: f64) -> Character {
    let weapon = Weapon::new(WeaponCategory::Mace, damage).with_damage_modifier(damage_modifier);
    Character::new(CharacterClass::Monk, level, weapon)
}

fn optimize(character: &Character, requirements: Requirements) -> statcraft_core::Optimum {
    determine_optimal_stats(
        character,
        &WeaponDelayTable::standard(),
        &CombatBonuses::default(),
        requirements,
    )
    .expect("search should run")
}

#[test]
fn level_one_monk_without_requirements() {
    let optimum = optimize(&monk(1, 175, 1.4), Requirements::default());

    assert_eq!(optimum.attributes, Attributes::new([11, 13, 1, 1, 2, 1]));
    assert_eq!(optimum.candidates_examined, 99_955);
    assert!(optimum.is_feasible());
    assert!((optimum.dps() - 857.5951629541113).abs() < 1e-9);
}

#[test]
fn level_ten_monk_without_requirements() {
    let optimum = optimize(&monk(10, 175, 1.4), Requirements::default());

    assert_eq!(optimum.attributes, Attributes::new([13, 22, 1, 1, 1, 1]));
    assert_eq!(optimum.candidates_examined, 741_069);
    assert!((optimum.dps() - 897.5007556594919).abs() < 1e-9);
}

#[test]
fn requirements_shift_points_into_dexterity() {
    let optimum = optimize(&monk(10, 100, 1.0), Requirements::new(150.0, 30));

    assert_eq!(optimum.attributes, Attributes::new([8, 10, 1, 1, 20, 1]));
    assert!(optimum.is_feasible());
    assert!(optimum.evaluation.derived.accuracy >= 30);
    assert!(optimum.evaluation.derived.evasion >= 150.0);
    assert!((optimum.dps() - 377.59276390173727).abs() < 1e-9);
}

#[test]
fn accuracy_requirement_met_at_level_one() {
    let optimum = optimize(&monk(1, 120, 1.0), Requirements::new(0.0, 20));

    assert_eq!(optimum.attributes, Attributes::new([3, 1, 1, 1, 19, 1]));
    assert_eq!(optimum.evaluation.derived.accuracy, 20);
}

#[test]
fn transcended_monk_has_more_points() {
    let character = monk(10, 175, 1.4).transcended(true);
    let optimum = optimize(&character, Requirements::default());

    assert_eq!(optimum.attributes, Attributes::new([21, 29, 1, 1, 1, 1]));
    assert!(optimum.attributes.total_cost() <= character.stat_points());
}

#[test]
fn unreachable_requirement_returns_first_candidate_flagged_infeasible() {
    // DEX 30 would cost 88 points; a level 10 monk has 80
    let optimum = optimize(&monk(10, 175, 1.4), Requirements::new(0.0, 40));

    assert_eq!(optimum.attributes, Attributes::new([1, 1, 1, 1, 1, 28]));
    assert!(!optimum.is_feasible());
    assert_eq!(
        optimum.evaluation.feasibility,
        Feasibility::AccuracyBelowMinimum
    );
    assert_eq!(optimum.dps(), 0.0);
}

#[test]
fn repeated_searches_agree() {
    let character = monk(5, 175, 1.4);
    let requirements = Requirements::new(180.0, 10);

    let first = optimize(&character, requirements);
    let second = optimize(&character, requirements);
    assert_eq!(first, second);
}

#[test]
fn selected_build_fits_budget_and_caps() {
    for level in [1, 3, 7, 10] {
        let character = monk(level, 175, 1.4);
        let optimum = optimize(&character, Requirements::default());

        assert!(optimum.attributes.is_within_caps());
        assert!(optimum.attributes.total_cost() <= character.stat_points());
    }
}

#[test]
fn unknown_weapon_fails_before_search() {
    let mut character = monk(84, 175, 1.4);
    character.weapon.category = WeaponCategory::Katar;

    let err = determine_optimal_stats(
        &character,
        &WeaponDelayTable::standard(),
        &CombatBonuses::default(),
        Requirements::default(),
    )
    .expect_err("katar has no delay for monks");

    assert_eq!(
        err,
        PlanError::MissingWeaponDelay {
            class: CharacterClass::Monk,
            category: WeaponCategory::Katar,
        }
    );
    assert!(err.severity().is_configuration());
}

#[test]
fn level_zero_is_rejected() {
    let err = determine_optimal_stats(
        &monk(0, 175, 1.4),
        &WeaponDelayTable::standard(),
        &CombatBonuses::default(),
        Requirements::default(),
    )
    .expect_err("level 0 is invalid");

    assert_eq!(err, PlanError::InvalidLevel { level: 0 });
}

#[test]
fn flee_and_hit_floors_of_the_level_84_build_bind_at_level_ten() {
    // Enough gear bonuses that 195 flee and 116 hit are reachable at level 10
    let bonuses = CombatBonuses {
        flee_item_bonus: 45,
        hit_bonus: 90,
        ..CombatBonuses::default()
    };
    let optimum = determine_optimal_stats(
        &monk(10, 175, 1.4),
        &WeaponDelayTable::standard(),
        &bonuses,
        Requirements::new(195.0, 116),
    )
    .expect("search should run");

    assert_eq!(optimum.attributes, Attributes::new([3, 18, 1, 1, 16, 1]));
    assert!(optimum.is_feasible());
    assert_eq!(optimum.evaluation.derived.accuracy, 116);
    assert!((optimum.evaluation.derived.evasion - 195.3).abs() < 1e-9);
    assert!((optimum.dps() - 872.1925586914145).abs() < 1e-9);
}

#[test]
fn flee_floor_of_the_level_84_build_is_out_of_reach_at_level_ten() {
    let optimum = optimize(&monk(10, 175, 1.4), Requirements::new(195.0, 116));

    assert_eq!(optimum.attributes, Attributes::new([1, 1, 1, 1, 1, 28]));
    assert_eq!(
        optimum.evaluation.feasibility,
        Feasibility::EvasionBelowMinimum
    );
    assert_eq!(optimum.dps(), 0.0);
}

#[test]
fn out_of_range_bonuses_fail_before_search() {
    let bonuses = CombatBonuses {
        triple_attack_multiplier: -5.0,
        ..CombatBonuses::default()
    };
    let err = determine_optimal_stats(
        &monk(1, 175, 1.4),
        &WeaponDelayTable::standard(),
        &bonuses,
        Requirements::default(),
    )
    .expect_err("negative multiplier");

    assert_eq!(
        err,
        PlanError::InvalidBonus {
            name: "triple_attack_multiplier",
            value: -5.0,
        }
    );
}

#[test]
fn level_with_unrepresentable_budget_is_rejected() {
    let err = determine_optimal_stats(
        &monk(300_000, 175, 1.4),
        &WeaponDelayTable::standard(),
        &CombatBonuses::default(),
        Requirements::default(),
    )
    .expect_err("budget overflows u32");

    assert_eq!(err, PlanError::InvalidLevel { level: 300_000 });
}

/// Level 84 mace monk needing 195 flee and 116 hit.
///
/// Expected values are captured under the `(n - 2) / 10 + 2` cost schedule
/// with attributes capped at 99.
///
/// Exhaustive over roughly 3 × 10⁹ candidates; run with
/// `cargo test --release -- --ignored`.
#[test]
#[ignore = "exhaustive level 84 search, run in release"]
fn level_84_mace_monk_reference_build() {
    let optimum = optimize(&monk(84, 175, 1.4), Requirements::new(195.0, 116));

    assert_eq!(optimum.attributes, Attributes::new([53, 99, 1, 1, 35, 5]));
    assert!(optimum.is_feasible());
    assert!((optimum.dps() - 1704.2866967219377).abs() < 1e-9);
}
