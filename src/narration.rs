//! Console text for battle events, status blocks and the final banner.

use crate::combat::logic::BattleEvent;
use crate::core::constants::{MAGIC_MAX_BOOST_ROUNDS, ROUND_HEADER_SUFFIX};
use crate::core::game_state::{BattleState, Outcome};

/// Lines printed for one event. Healing is silent.
pub fn event_lines(event: &BattleEvent) -> Vec<String> {
    match event {
        BattleEvent::CriticalHit { warrior, damage } => {
            vec![format!("Warrior {} hit critically: {}", warrior, damage)]
        }
        BattleEvent::Boosted {
            magic,
            hero,
            amount,
            round,
        } => vec![format!(
            "{} boosts {} attack by {} in round {}",
            magic, hero, amount, round
        )],
        BattleEvent::BoostUnavailable { magic } => vec![format!(
            "{} cannot boost attack anymore, {} rounds passed.",
            magic, MAGIC_MAX_BOOST_ROUNDS
        )],
        BattleEvent::Healed { .. } => Vec::new(),
        BattleEvent::DamageReverted { berserk, amount } => {
            vec![format!("Berserk {} reverted: {}", berserk, amount)]
        }
        BattleEvent::Revived {
            witcher,
            hero,
            health,
        } => vec![format!("{} revives {} with {}.", witcher, hero, health)],
        BattleEvent::DiedAfterReviving { witcher, hero } => {
            vec![format!("{} dies after reviving {}.", witcher, hero)]
        }
        BattleEvent::AlreadyAlive { hero } => vec![format!("{} is already alive!", hero)],
        BattleEvent::ReviveFailed { witcher, hero } => {
            vec![format!("{} failed to revive {}.", witcher, hero)]
        }
        BattleEvent::HealthStolen {
            hacker,
            amount,
            target,
            boss_health,
            target_health,
        } => vec![
            format!(
                "{} steals {} health from boss and gives it to {}.",
                hacker, amount, target
            ),
            format!(
                "Boss health: {}, {}'s health: {}",
                boss_health, target, target_health
            ),
        ],
        BattleEvent::BossStunned { thor } => vec![format!("{} stuns the boss!", thor)],
        BattleEvent::ShieldActivated { avenger } => vec![format!(
            "{} activates a shield! All heroes are immune to damage for 1 round.",
            avenger
        )],
        BattleEvent::ShieldFailed { avenger } => {
            vec![format!("{} failed to activate shield.", avenger)]
        }
        BattleEvent::DamageReceived { hero, amount } => {
            vec![format!("{} receives {} damage from the boss.", hero, amount)]
        }
    }
}

/// Round header, the boss, then every hero in roster order.
pub fn status_lines(state: &BattleState) -> Vec<String> {
    let mut lines = Vec::with_capacity(state.heroes.len() + 2);
    lines.push(format!("ROUND {}{}", state.round, ROUND_HEADER_SUFFIX));
    lines.push(state.boss.to_string());
    lines.extend(state.heroes.iter().map(|h| h.to_string()));
    lines
}

pub fn outcome_banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::HeroesWon => Some("Heroes won!!!"),
        Outcome::BossWon => Some("Boss won!!!"),
        Outcome::InProgress => None,
    }
}
