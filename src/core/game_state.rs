use crate::combat::types::{Boss, Combatant, Hero};
use serde::{Deserialize, Serialize};

/// Where the battle stands. Both won-states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    InProgress,
    HeroesWon,
    BossWon,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Everything the round engine mutates: the boss, the ordered roster, and
/// the number of rounds played so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub boss: Boss,
    pub heroes: Vec<Hero>,
    pub round: u32,
}

impl BattleState {
    pub fn new(boss: Boss, heroes: Vec<Hero>) -> Self {
        Self {
            boss,
            heroes,
            round: 0,
        }
    }

    pub fn all_heroes_dead(&self) -> bool {
        self.heroes.iter().all(|h| !h.is_alive())
    }

    pub fn living_heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(|h| h.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BattleState {
        BattleState::new(
            Boss::new("Splinter", 1000, 50),
            vec![Hero::warrior("Django", 280, 10), Hero::medic("James", 0, 5, 15)],
        )
    }

    #[test]
    fn test_new_state_starts_at_round_zero() {
        let state = state();
        assert_eq!(state.round, 0);
        assert_eq!(state.boss.defence, None);
    }

    #[test]
    fn test_living_heroes_skips_the_dead() {
        let state = state();
        let living: Vec<&str> = state.living_heroes().map(|h| h.name()).collect();
        assert_eq!(living, vec!["Django"]);
        assert!(!state.all_heroes_dead());
    }

    #[test]
    fn test_only_won_states_are_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::HeroesWon.is_terminal());
        assert!(Outcome::BossWon.is_terminal());
    }
}
