//! Battle driver implementing the `BattleLoop` trait.
//!
//! `Battle` owns its `BattleState` and runs it to a terminal outcome,
//! handing every narration line to a caller-supplied sink. The game binary
//! prints the lines; the simulator drops them.

use super::constants::DEFAULT_MAX_ROUNDS;
use super::game_logic::{check_outcome, play_round, RoundResult};
use super::game_loop::BattleLoop;
use super::game_state::{BattleState, Outcome};
use super::roster::default_battle_state;
use crate::combat::types::Combatant;
use crate::error::{BattleError, Result};
use crate::narration::{event_lines, outcome_banner, status_lines};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How a finished battle ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub outcome: Outcome,
    pub rounds: u32,
    pub boss_health: i32,
    /// Names of heroes still standing, in roster order.
    pub survivors: Vec<String>,
}

pub struct Battle {
    state: BattleState,
}

impl Battle {
    pub fn new(state: BattleState) -> Result<Self> {
        if state.heroes.is_empty() {
            return Err(BattleError::EmptyRoster);
        }
        Ok(Self { state })
    }

    /// The fixed boss and ten-hero roster.
    pub fn with_default_roster() -> Self {
        Self {
            state: default_battle_state(),
        }
    }

    /// Prints the opening status block, then plays rounds until one side is
    /// dead. Fails if `max_rounds` pass without a winner.
    pub fn run_to_completion(
        &mut self,
        rng: &mut impl Rng,
        max_rounds: u32,
        mut out: impl FnMut(&str),
    ) -> Result<BattleSummary> {
        for line in status_lines(&self.state) {
            out(&line);
        }

        loop {
            let outcome = self.outcome();
            if let Some(banner) = outcome_banner(outcome) {
                out(banner);
                let summary = self.summary(outcome);
                info!(
                    ?outcome,
                    rounds = summary.rounds,
                    survivors = summary.survivors.len(),
                    "battle over"
                );
                return Ok(summary);
            }

            if self.state.round >= max_rounds {
                warn!(limit = max_rounds, "round limit reached without a winner");
                return Err(BattleError::RoundLimitExceeded { limit: max_rounds });
            }

            let result = self.play_round(rng);
            for event in &result.events {
                for line in event_lines(event) {
                    out(&line);
                }
            }
            for line in status_lines(&self.state) {
                out(&line);
            }
        }
    }

    pub fn summary(&self, outcome: Outcome) -> BattleSummary {
        BattleSummary {
            outcome,
            rounds: self.state.round,
            boss_health: self.state.boss.health(),
            survivors: self
                .state
                .living_heroes()
                .map(|h| h.name().to_string())
                .collect(),
        }
    }
}

impl BattleLoop for Battle {
    fn play_round(&mut self, rng: &mut impl Rng) -> RoundResult {
        play_round(&mut self.state, rng)
    }

    fn outcome(&self) -> Outcome {
        check_outcome(&self.state)
    }

    fn state(&self) -> &BattleState {
        &self.state
    }
}

/// Builds the fixed line-up and fights it out, narrating to `out`.
pub fn start_game(rng: &mut impl Rng, out: impl FnMut(&str)) -> Result<BattleSummary> {
    Battle::with_default_roster().run_to_completion(rng, DEFAULT_MAX_ROUNDS, out)
}
