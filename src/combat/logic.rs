use super::types::{Ability, Boss, Combatant, Hero, HeroKind};
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something a special power did. The narration layer turns these into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    CriticalHit {
        warrior: String,
        damage: i32,
    },
    Boosted {
        magic: String,
        hero: String,
        amount: i32,
        round: u32,
    },
    /// Emitted once per dead hero while Magic is still boosting.
    BoostUnavailable {
        magic: String,
    },
    Healed {
        medic: String,
        hero: String,
        amount: i32,
    },
    DamageReverted {
        berserk: String,
        amount: i32,
    },
    Revived {
        witcher: String,
        hero: String,
        health: i32,
    },
    DiedAfterReviving {
        witcher: String,
        hero: String,
    },
    AlreadyAlive {
        hero: String,
    },
    ReviveFailed {
        witcher: String,
        hero: String,
    },
    HealthStolen {
        hacker: String,
        amount: i32,
        target: String,
        boss_health: i32,
        target_health: i32,
    },
    BossStunned {
        thor: String,
    },
    ShieldActivated {
        avenger: String,
    },
    ShieldFailed {
        avenger: String,
    },
    DamageReceived {
        hero: String,
        amount: i32,
    },
}

/// Roll a whole-percent chance.
pub fn roll_chance(chance_percent: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0..100) < chance_percent
}

impl Boss {
    /// Copies the ability of a uniformly random hero, dead or alive.
    ///
    /// # Panics
    /// Panics if `heroes` is empty.
    pub fn choose_defence(&mut self, heroes: &[Hero], rng: &mut impl Rng) -> Ability {
        assert!(
            !heroes.is_empty(),
            "cannot choose a defence from an empty roster"
        );
        let picked = &heroes[rng.gen_range(0..heroes.len())];
        let ability = picked.ability();
        self.defence = Some(ability);
        debug!(
            boss = self.name(),
            defence = %ability,
            copied_from = picked.name(),
            "defence chosen"
        );
        ability
    }

    /// Hits every living hero. A Berserk the boss isn't defending against
    /// blocks part of the hit and remembers how much.
    pub fn attack(&self, heroes: &mut [Hero], rng: &mut impl Rng) {
        for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
            if hero.is_berserk() && self.defence != Some(hero.ability()) {
                let blocked = BERSERK_BLOCK_AMOUNTS[rng.gen_range(0..BERSERK_BLOCK_AMOUNTS.len())];
                hero.set_blocked_damage(blocked);
                hero.take_damage(self.damage() - blocked);
                debug!(hero = hero.name(), blocked, "berserk blocked part of the hit");
            } else {
                hero.take_damage(self.damage());
            }
        }
    }
}

impl Hero {
    pub fn attack(&self, boss: &mut Boss) {
        boss.take_damage(self.damage());
    }

    /// Takes a hit and reports it.
    pub fn receive_damage(&mut self, amount: i32) -> BattleEvent {
        self.take_damage(amount);
        BattleEvent::DamageReceived {
            hero: self.name().to_string(),
            amount,
        }
    }
}

/// Resolves the special power of `heroes[actor]`.
///
/// The actor is addressed by index because several powers touch the rest of
/// the roster, including the actor itself.
pub fn apply_super_power(
    actor: usize,
    boss: &mut Boss,
    heroes: &mut [Hero],
    round: u32,
    rng: &mut impl Rng,
) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    let kind = heroes[actor].kind;
    match kind {
        HeroKind::Warrior => critical_strike(&heroes[actor], boss, rng, &mut events),
        HeroKind::Magic {
            rounds_boosted,
            attack_boost,
        } => {
            if rounds_boosted < MAGIC_MAX_BOOST_ROUNDS {
                if let HeroKind::Magic { rounds_boosted, .. } = &mut heroes[actor].kind {
                    *rounds_boosted += 1;
                }
                boost_attack(actor, attack_boost, heroes, round, &mut events);
            }
        }
        HeroKind::Medic { heal_points } => heal_others(actor, heal_points, heroes, &mut events),
        HeroKind::Berserk { blocked_damage } => {
            boss.take_damage(blocked_damage);
            events.push(BattleEvent::DamageReverted {
                berserk: heroes[actor].name().to_string(),
                amount: blocked_damage,
            });
        }
        HeroKind::Witcher {
            revive_chance_percent,
        } => {
            let target = (0..heroes.len()).find(|&i| i != actor && heroes[i].health() == 0);
            if let Some(target) = target {
                revive(actor, target, revive_chance_percent, heroes, rng, &mut events);
            }
        }
        HeroKind::Hacker { steal_amount } => {
            steal_health(actor, steal_amount, boss, heroes, rng, &mut events)
        }
        HeroKind::Thor {
            stun_chance_percent,
        } => {
            if roll_chance(stun_chance_percent, rng) {
                let remaining = (boss.health() - heroes[actor].damage()).max(0);
                boss.set_health(remaining);
                events.push(BattleEvent::BossStunned {
                    thor: heroes[actor].name().to_string(),
                });
            }
        }
        HeroKind::Avenger {
            shield_chance_percent,
        } => {
            if roll_chance(shield_chance_percent, rng) {
                let avenger = heroes[actor].name().to_string();
                for hero in heroes.iter_mut() {
                    hero.is_immune = true;
                    events.push(BattleEvent::ShieldActivated {
                        avenger: avenger.clone(),
                    });
                }
                // The loop never breaks out early, so the failure line always follows.
                events.push(BattleEvent::ShieldFailed { avenger });
            }
        }
    }

    debug!(
        hero = heroes[actor].name(),
        ability = %heroes[actor].ability(),
        events = events.len(),
        "special power resolved"
    );
    events
}

fn critical_strike(
    warrior: &Hero,
    boss: &mut Boss,
    rng: &mut impl Rng,
    events: &mut Vec<BattleEvent>,
) {
    let multiplier = rng.gen_range(WARRIOR_CRIT_MULTIPLIER_MIN..=WARRIOR_CRIT_MULTIPLIER_MAX);
    let crit = warrior.damage() * multiplier;
    boss.take_damage(crit);
    events.push(BattleEvent::CriticalHit {
        warrior: warrior.name().to_string(),
        damage: crit,
    });
}

fn boost_attack(
    actor: usize,
    attack_boost: i32,
    heroes: &mut [Hero],
    round: u32,
    events: &mut Vec<BattleEvent>,
) {
    let magic = heroes[actor].name().to_string();
    for hero in heroes.iter_mut() {
        if hero.is_alive() {
            hero.set_damage(hero.damage() + attack_boost);
            events.push(BattleEvent::Boosted {
                magic: magic.clone(),
                hero: hero.name().to_string(),
                amount: attack_boost,
                round,
            });
        } else {
            events.push(BattleEvent::BoostUnavailable {
                magic: magic.clone(),
            });
        }
    }
}

fn heal_others(actor: usize, heal_points: i32, heroes: &mut [Hero], events: &mut Vec<BattleEvent>) {
    let medic = heroes[actor].name().to_string();
    for (i, hero) in heroes.iter_mut().enumerate() {
        if i != actor && hero.is_alive() {
            hero.set_health(hero.health() + heal_points);
            events.push(BattleEvent::Healed {
                medic: medic.clone(),
                hero: hero.name().to_string(),
                amount: heal_points,
            });
        }
    }
}

fn revive(
    witcher: usize,
    target: usize,
    chance_percent: u32,
    heroes: &mut [Hero],
    rng: &mut impl Rng,
    events: &mut Vec<BattleEvent>,
) {
    let witcher_name = heroes[witcher].name().to_string();
    let target_name = heroes[target].name().to_string();

    if !roll_chance(chance_percent, rng) {
        events.push(BattleEvent::ReviveFailed {
            witcher: witcher_name,
            hero: target_name,
        });
        return;
    }

    if heroes[target].health() != 0 {
        events.push(BattleEvent::AlreadyAlive { hero: target_name });
        return;
    }

    heroes[target].set_health(REVIVE_HEALTH);
    events.push(BattleEvent::Revived {
        witcher: witcher_name.clone(),
        hero: target_name.clone(),
        health: REVIVE_HEALTH,
    });
    heroes[witcher].set_health(0);
    events.push(BattleEvent::DiedAfterReviving {
        witcher: witcher_name,
        hero: target_name,
    });
}

fn steal_health(
    actor: usize,
    steal_amount: i32,
    boss: &mut Boss,
    heroes: &mut [Hero],
    rng: &mut impl Rng,
    events: &mut Vec<BattleEvent>,
) {
    if !boss.is_alive() {
        return;
    }
    let steal = steal_amount.min(boss.health());
    boss.take_damage(steal);

    let target = rng.gen_range(0..heroes.len());
    let hacker = heroes[actor].name().to_string();
    let receiver = &mut heroes[target];
    receiver.set_health(receiver.health() + steal);

    events.push(BattleEvent::HealthStolen {
        hacker,
        amount: steal,
        target: receiver.name().to_string(),
        boss_health: boss.health(),
        target_health: receiver.health(),
    });
}
