use super::game_state::{BattleState, Outcome};
use crate::combat::logic::{apply_super_power, BattleEvent};
use crate::combat::types::{Ability, Combatant};
use rand::Rng;
use tracing::debug;

/// What happened during one round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub round: u32,
    pub defence: Ability,
    /// Names of heroes that sat the round out because the boss defended
    /// against their ability, in roster order.
    pub skipped: Vec<String>,
    pub events: Vec<BattleEvent>,
    pub outcome: Outcome,
}

/// Boss dead means the heroes won, checked before the roster.
pub fn check_outcome(state: &BattleState) -> Outcome {
    if !state.boss.is_alive() {
        Outcome::HeroesWon
    } else if state.all_heroes_dead() {
        Outcome::BossWon
    } else {
        Outcome::InProgress
    }
}

/// Plays one round in fixed order: defence, boss attack, then each hero's
/// counter-attack and special power.
///
/// A hero acts only while it and the boss are both alive and the boss is
/// not defending against its ability.
pub fn play_round(state: &mut BattleState, rng: &mut impl Rng) -> RoundResult {
    state.round += 1;
    let round = state.round;

    let defence = state.boss.choose_defence(&state.heroes, rng);
    state.boss.attack(&mut state.heroes, rng);

    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for i in 0..state.heroes.len() {
        let hero = &state.heroes[i];
        if !hero.is_alive() || !state.boss.is_alive() {
            continue;
        }
        if hero.ability() == defence {
            debug!(round, hero = hero.name(), "skipped by boss defence");
            skipped.push(hero.name().to_string());
            continue;
        }

        hero.attack(&mut state.boss);
        events.extend(apply_super_power(
            i,
            &mut state.boss,
            &mut state.heroes,
            round,
            rng,
        ));
    }

    let outcome = check_outcome(state);
    debug!(
        round,
        boss_health = state.boss.health(),
        living = state.living_heroes().count(),
        ?outcome,
        "round finished"
    );

    RoundResult {
        round,
        defence,
        skipped,
        events,
        outcome,
    }
}
