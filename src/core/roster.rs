//! The fixed starting line-up.

use super::constants::*;
use super::game_state::BattleState;
use crate::combat::types::{Boss, Hero};

pub fn default_boss() -> Boss {
    Boss::new(BOSS_NAME, BOSS_HEALTH, BOSS_DAMAGE)
}

/// The ten heroes, already in turn order.
pub fn default_heroes() -> Vec<Hero> {
    let (name, health, damage) = WARRIOR_DJANGO;
    let django = Hero::warrior(name, health, damage);
    let (name, health, damage) = WARRIOR_BILLY;
    let billy = Hero::warrior(name, health, damage);
    let (name, health, damage) = MAGIC_DULITTLE;
    let dulittle = Hero::magic(name, health, damage);
    let (name, health, damage, heal) = MEDIC_JAMES;
    let james = Hero::medic(name, health, damage, heal);
    let (name, health, damage, heal) = MEDIC_MARTY;
    let marty = Hero::medic(name, health, damage, heal);
    let (name, health, damage) = BERSERK_WILLIAM;
    let william = Hero::berserk(name, health, damage);
    let (name, health, damage) = WITCHER_VEDMAK;
    let vedmak = Hero::witcher(name, health, damage);
    let (name, health, damage, steal) = HACKER_TIM;
    let tim = Hero::hacker(name, health, damage, steal);
    let (name, health, damage, stun) = THOR_TORRY;
    let torry = Hero::thor(name, health, damage, stun);
    let (name, health, damage, shield) = AVENGER_LUCA;
    let luca = Hero::avenger(name, health, damage, shield);

    vec![
        django, james, billy, dulittle, william, marty, vedmak, tim, torry, luca,
    ]
}

pub fn default_battle_state() -> BattleState {
    BattleState::new(default_boss(), default_heroes())
}
