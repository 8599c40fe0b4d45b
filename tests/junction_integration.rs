//! Junction engine integration tests

use junction_arena::catalog::{Attack, Heal, StrengthUp};
use junction_arena::{
    CombatUnit, EventLog, JunctionAbility, JunctionError, RandDice, ScriptedDice,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_attack_boost_attack_scenario() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    let mut zora = CombatUnit::new("Zora", 20);
    let mut dice = ScriptedDice::new(vec![5, 5]);
    let mut log = EventLog::new();

    arthur.junction(JunctionAbility::active(Attack));

    // Base power 10, roll 5: (5 + 10) / 2 = 7 damage.
    arthur
        .perform_ability("attack", &mut [&mut zora], &mut dice, &mut log)
        .unwrap();
    assert_eq!(zora.health(), 13);

    // The boost raises power to 20, so the same roll now deals 12.
    arthur.junction(JunctionAbility::passive(StrengthUp));
    assert_eq!(arthur.power(), 20);
    arthur
        .perform_ability("attack", &mut [&mut zora], &mut dice, &mut log)
        .unwrap();
    assert_eq!(zora.health(), 1);

    let lines: Vec<String> = log.iter().map(|event| event.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Arthur attacks Zora!",
            "Zora takes 7 damage!",
            "Arthur attacks Zora!",
            "Zora takes 12 damage!",
        ]
    );
}

#[test]
fn test_boost_reverts_on_unjunction() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    arthur.junction(JunctionAbility::passive(StrengthUp));
    assert_eq!(arthur.power(), 20);

    arthur.unjunction("str-up").unwrap();
    assert_eq!(arthur.power(), 10);
    assert!(arthur.ledger().is_empty());
}

#[test]
fn test_heal_scenario_clamps_at_max() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    let mut zora = CombatUnit::new("Zora", 20);
    arthur.junction(JunctionAbility::active(Heal));
    zora.adjust_health(-5);
    let mut dice = ScriptedDice::new(vec![8]);
    let mut log = EventLog::new();

    arthur
        .perform_ability("heal", &mut [&mut zora], &mut dice, &mut log)
        .unwrap();

    // 15 + 8 ceilings at 20.
    assert_eq!(zora.health(), 20);
    let lines: Vec<String> = log.iter().map(|event| event.to_string()).collect();
    assert_eq!(lines, vec!["Arthur casts Heal on Zora!", "Zora heals 8 health!"]);
}

#[test]
fn test_missing_ability_is_recoverable() {
    let arthur = CombatUnit::new("Arthur", 20);
    let mut zora = CombatUnit::new("Zora", 20);
    let mut dice = ScriptedDice::new(vec![5]);
    let mut log = EventLog::new();

    arthur
        .perform_ability("fireball", &mut [&mut zora], &mut dice, &mut log)
        .unwrap();

    assert_eq!(zora.health(), 20);
    assert_eq!(log.len(), 1);
    assert_eq!(
        log.events[0].to_string(),
        "Arthur has no ability \"fireball\""
    );
}

#[test]
fn test_invoking_a_passive_is_misuse() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    arthur.junction(JunctionAbility::passive(StrengthUp));
    let mut zora = CombatUnit::new("Zora", 20);
    let mut dice = ScriptedDice::new(vec![5]);
    let mut log = EventLog::new();

    let err = arthur
        .perform_ability("str-up", &mut [&mut zora], &mut dice, &mut log)
        .unwrap_err();

    assert!(matches!(err, JunctionError::NotActive(ref id) if id == "str-up"));
    assert_eq!(zora.health(), 20);
    assert_eq!(arthur.power(), 20);
}

#[test]
fn test_unjunctioning_the_unknown_propagates() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    let err = arthur.unjunction("str-up").unwrap_err();
    assert!(matches!(err, JunctionError::UnknownAbility { .. }));
}

#[test]
fn test_one_handle_junctioned_to_many_units() {
    let boost = JunctionAbility::passive(StrengthUp);
    let mut arthur = CombatUnit::new("Arthur", 20);
    let mut zora = CombatUnit::new("Zora", 20);

    arthur.junction(boost.clone());
    zora.junction(boost);

    assert_eq!(arthur.power(), 20);
    assert_eq!(zora.power(), 20);

    // Each unit's ledger is its own; detaching from one leaves the other.
    arthur.unjunction("str-up").unwrap();
    assert_eq!(arthur.power(), 10);
    assert_eq!(zora.power(), 20);
}

#[test]
fn test_seeded_fight_is_reproducible() {
    let run = |seed: u64| {
        let mut arthur = CombatUnit::new("Arthur", 20);
        let mut zora = CombatUnit::new("Zora", 20);
        arthur.junction(JunctionAbility::active(Attack));
        let mut dice = RandDice::new(ChaCha8Rng::seed_from_u64(seed));
        let mut log = EventLog::new();
        for _ in 0..3 {
            arthur
                .perform_ability("attack", &mut [&mut zora], &mut dice, &mut log)
                .unwrap();
        }
        (zora.health(), log)
    };

    let (health_a, log_a) = run(42);
    let (health_b, log_b) = run(42);
    assert_eq!(health_a, health_b);
    assert_eq!(log_a, log_b);
}

#[test]
fn test_damage_floors_health_at_zero() {
    let mut arthur = CombatUnit::new("Arthur", 20);
    arthur.strength = 100;
    arthur.junction(JunctionAbility::active(Attack));
    let mut zora = CombatUnit::new("Zora", 20);
    let mut dice = ScriptedDice::new(vec![10]);
    let mut log = EventLog::new();

    // (10 + 100) / 2 = 55, far past Zora's remaining 20.
    arthur
        .perform_ability("attack", &mut [&mut zora], &mut dice, &mut log)
        .unwrap();
    assert_eq!(zora.health(), 0);
}
