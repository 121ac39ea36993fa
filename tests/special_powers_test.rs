//! Integration test: special powers as they play out inside full rounds.

use boss_fight::combat::{apply_super_power, Ability, BattleEvent, Boss, Combatant, Hero, HeroKind};
use boss_fight::narration::event_lines;
use boss_fight::{play_round, BattleState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Plays one round from `template` for increasing seeds until the boss picks
/// a defence other than `avoid`, then hands the state and events over.
fn round_without_defence(
    template: &BattleState,
    avoid: Ability,
) -> (BattleState, Vec<BattleEvent>) {
    for seed in 0..64 {
        let mut state = template.clone();
        let result = play_round(&mut state, &mut seeded_rng(seed));
        if result.defence != avoid {
            return (state, result.events);
        }
    }
    panic!("boss always defended against {}", avoid);
}

#[test]
fn test_berserk_mitigation_inside_a_round() {
    let template = BattleState::new(
        Boss::new("Splinter", 1000, 50),
        vec![Hero::berserk("William", 260, 10), Hero::medic("James", 250, 5, 15)],
    );
    let (state, events) = round_without_defence(&template, Ability::BlockRevert);

    let blocked = state.heroes[0].blocked_damage().unwrap();
    assert!(blocked == 5 || blocked == 10);
    // Medic was defended against, so nobody healed William.
    assert_eq!(state.heroes[0].health(), 260 - (50 - blocked));
    // William hit for 10 and then reverted what he blocked.
    assert_eq!(state.boss.health(), 1000 - 10 - blocked);
    assert_eq!(
        events,
        vec![BattleEvent::DamageReverted {
            berserk: "William".to_string(),
            amount: blocked
        }]
    );
}

#[test]
fn test_medic_heals_after_boss_attack() {
    let template = BattleState::new(
        Boss::new("Splinter", 1000, 50),
        vec![
            Hero::medic("James", 250, 5, 15),
            Hero::warrior("Django", 280, 10),
            Hero::warrior("Billy", 30, 15),
        ],
    );
    let (state, _) = round_without_defence(&template, Ability::Heal);

    assert_eq!(state.heroes[0].health(), 200);
    assert_eq!(state.heroes[1].health(), 245);
    // Billy died to the boss before the Medic acted.
    assert_eq!(state.heroes[2].health(), 0);
}

#[test]
fn test_witcher_revives_fallen_hero_inside_a_round() {
    let template = BattleState::new(
        Boss::new("Splinter", 1000, 50),
        vec![
            Hero::warrior("Django", 0, 10),
            Hero::new(
                "Vedmak",
                290,
                10,
                HeroKind::Witcher {
                    revive_chance_percent: 100,
                },
            ),
        ],
    );
    let (state, events) = round_without_defence(&template, Ability::Revive);

    assert_eq!(state.heroes[0].health(), 50);
    assert_eq!(state.heroes[1].health(), 0);
    let text: Vec<String> = events.iter().flat_map(event_lines).collect();
    assert_eq!(
        text,
        vec![
            "Vedmak revives Django with 50.",
            "Vedmak dies after reviving Django.",
        ]
    );
}

#[test]
fn test_default_witcher_eventually_revives() {
    let mut boss = Boss::new("Splinter", 1000, 50);
    let mut heroes = vec![Hero::warrior("Django", 0, 10), Hero::witcher("Vedmak", 290, 10)];
    let mut rng = seeded_rng(1);

    let mut revived = false;
    for round in 1..=200 {
        let events = apply_super_power(1, &mut boss, &mut heroes, round, &mut rng);
        if events
            .iter()
            .any(|e| matches!(e, BattleEvent::Revived { .. }))
        {
            revived = true;
            break;
        }
        assert!(matches!(events[0], BattleEvent::ReviveFailed { .. }));
    }
    // With a 10% chance, 200 attempts all failing is vanishingly unlikely.
    assert!(revived);
    assert_eq!(heroes[1].health(), 0);
}

#[test]
fn test_hacker_transfer_is_conserved_inside_a_round() {
    let template = BattleState::new(
        Boss::new("Splinter", 1000, 50),
        vec![Hero::hacker("Tim", 230, 10, 40), Hero::medic("James", 250, 5, 15)],
    );
    let (state, events) = round_without_defence(&template, Ability::StealHealth);

    match &events[..] {
        [BattleEvent::HealthStolen {
            amount,
            boss_health,
            ..
        }] => {
            assert_eq!(*amount, 40);
            assert_eq!(*boss_health, 1000 - 10 - 40);
            assert_eq!(state.boss.health(), 950);
        }
        other => panic!("unexpected events {:?}", other),
    }
    // 180 + 200 after the boss attack, plus the stolen 40.
    assert_eq!(state.heroes.iter().map(|h| h.health()).sum::<i32>(), 420);
}

#[test]
fn test_shield_flag_does_not_block_damage() {
    let mut state = BattleState::new(
        Boss::new("Splinter", 1000, 50),
        vec![Hero::avenger("Luca", 270, 30, 100), Hero::medic("James", 250, 5, 0)],
    );
    let mut rng = seeded_rng(0);
    for _ in 0..3 {
        play_round(&mut state, &mut rng);
    }

    // Three boss attacks landed in full whether or not the shield went up.
    assert_eq!(state.heroes[0].health(), 120);
    assert_eq!(state.heroes[1].health(), 100);
}

#[test]
fn test_magic_stops_boosting_after_four_rounds() {
    let mut boss = Boss::new("Splinter", 10_000, 0);
    let mut heroes = vec![Hero::magic("Dulittle", 290, 10), Hero::warrior("Django", 280, 10)];
    let mut rng = seeded_rng(0);

    let mut boost_rounds = 0;
    for round in 1..=8 {
        let events = apply_super_power(0, &mut boss, &mut heroes, round, &mut rng);
        if !events.is_empty() {
            boost_rounds += 1;
        }
    }
    assert_eq!(boost_rounds, 4);
    assert_eq!(heroes[1].damage(), 30);
}
