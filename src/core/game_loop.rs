//! Shared round-loop trait for the interactive game and the simulator.

use crate::core::game_logic::RoundResult;
use crate::core::game_state::{BattleState, Outcome};
use rand::Rng;

/// One battle that can be advanced a round at a time.
///
/// The game binary narrates every round to stdout; the simulator drives
/// thousands of battles silently through the same interface.
pub trait BattleLoop {
    /// Execute one round. Returns what happened.
    fn play_round(&mut self, rng: &mut impl Rng) -> RoundResult;

    /// Current termination state.
    fn outcome(&self) -> Outcome;

    /// Get current battle state (read-only).
    fn state(&self) -> &BattleState;
}
