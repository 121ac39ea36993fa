//! Simulation runner built on `Battle`, the same driver the game uses.
//!
//! Statistics are gathered from each `RoundResult` rather than from
//! simulator-specific state.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::combat::logic::BattleEvent;
use crate::combat::types::Combatant;
use crate::core::battle::Battle;
use crate::core::game_loop::BattleLoop;
use crate::core::roster::default_heroes;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config.max_rounds, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?} after {} rounds, boss health {}, survivors {}",
                run_idx + 1,
                config.num_runs,
                run.outcome,
                run.rounds,
                run.boss_health,
                run.survivors.len()
            );
        }
        all_runs.push(run);
    }

    let roster: Vec<String> = default_heroes()
        .iter()
        .map(|h| h.name().to_string())
        .collect();
    SimReport::from_runs(all_runs, &roster)
}

/// Fight one silent battle with the default roster.
///
/// A battle still undecided after `max_rounds` is recorded with `outcome: None`.
pub fn simulate_single_run(max_rounds: u32, rng: &mut impl Rng) -> RunStats {
    let mut battle = Battle::with_default_roster();
    let mut revives = 0u32;
    let mut health_healed = 0i32;
    let mut skipped_turns = 0u32;

    while !battle.outcome().is_terminal() && battle.state().round < max_rounds {
        let result = battle.play_round(rng);
        skipped_turns += result.skipped.len() as u32;
        for event in &result.events {
            match event {
                BattleEvent::Revived { .. } => revives += 1,
                BattleEvent::Healed { amount, .. } => health_healed += amount,
                _ => {}
            }
        }
    }

    let outcome = battle.outcome();
    let summary = battle.summary(outcome);
    debug!(?outcome, rounds = summary.rounds, revives, "simulated battle");

    RunStats {
        outcome: outcome.is_terminal().then_some(outcome),
        rounds: summary.rounds,
        boss_health: summary.boss_health,
        survivors: summary.survivors,
        revives,
        health_healed,
        skipped_turns,
    }
}
