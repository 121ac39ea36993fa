use serde::{Deserialize, Serialize};
use std::fmt;

/// Ability tag: names a hero's special-power category. The boss copies one
/// of these as its defence each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    CriticalDamage,
    Boosting,
    Heal,
    BlockRevert,
    Revive,
    StealHealth,
    Stun,
    Shield,
}

impl Ability {
    pub fn all() -> [Ability; 8] {
        [
            Ability::CriticalDamage,
            Ability::Boosting,
            Ability::Heal,
            Ability::BlockRevert,
            Ability::Revive,
            Ability::StealHealth,
            Ability::Stun,
            Ability::Shield,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Ability::CriticalDamage => "CRITICAL_DAMAGE",
            Ability::Boosting => "BOOSTING",
            Ability::Heal => "HEAL",
            Ability::BlockRevert => "BLOCK_REVERT",
            Ability::Revive => "REVIVE",
            Ability::StealHealth => "STEAL_HEALTH",
            Ability::Stun => "STUN",
            Ability::Shield => "SHIELD",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Health/damage state shared by the boss and every hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    health: i32,
    damage: i32,
}

impl Entity {
    /// Out-of-range health is clamped the same way `set_health` clamps it.
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            health: health.max(0),
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Negative values clamp to zero.
    pub fn set_health(&mut self, value: i32) {
        self.health = value.max(0);
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_damage(&mut self, value: i32) {
        self.damage = value;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health - amount);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} health: {}, damage: {}",
            self.name, self.health, self.damage
        )
    }
}

/// Anything that fights. Provided methods forward to the shared `Entity`.
pub trait Combatant {
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;

    fn name(&self) -> &str {
        self.entity().name()
    }

    fn health(&self) -> i32 {
        self.entity().health()
    }

    fn set_health(&mut self, value: i32) {
        self.entity_mut().set_health(value);
    }

    fn damage(&self) -> i32 {
        self.entity().damage()
    }

    fn set_damage(&mut self, value: i32) {
        self.entity_mut().set_damage(value);
    }

    fn take_damage(&mut self, amount: i32) {
        self.entity_mut().take_damage(amount);
    }

    fn is_alive(&self) -> bool {
        self.entity().is_alive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    entity: Entity,
    /// Ability copied from a random hero at the start of each round.
    pub defence: Option<Ability>,
}

impl Boss {
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            entity: Entity::new(name, health, damage),
            defence: None,
        }
    }
}

impl Combatant for Boss {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defence = self.defence.map(|a| a.tag()).unwrap_or("None");
        write!(f, "BOSS {} defence: {}", self.entity, defence)
    }
}

/// Variant payload for each hero kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum HeroKind {
    Warrior,
    Magic {
        rounds_boosted: u32,
        attack_boost: i32,
    },
    Medic {
        heal_points: i32,
    },
    Berserk {
        blocked_damage: i32,
    },
    Witcher {
        revive_chance_percent: u32,
    },
    Hacker {
        steal_amount: i32,
    },
    Thor {
        stun_chance_percent: u32,
    },
    Avenger {
        shield_chance_percent: u32,
    },
}

impl HeroKind {
    pub fn ability(&self) -> Ability {
        match self {
            HeroKind::Warrior => Ability::CriticalDamage,
            HeroKind::Magic { .. } => Ability::Boosting,
            HeroKind::Medic { .. } => Ability::Heal,
            HeroKind::Berserk { .. } => Ability::BlockRevert,
            HeroKind::Witcher { .. } => Ability::Revive,
            HeroKind::Hacker { .. } => Ability::StealHealth,
            HeroKind::Thor { .. } => Ability::Stun,
            HeroKind::Avenger { .. } => Ability::Shield,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeroKind::Warrior => "Warrior",
            HeroKind::Magic { .. } => "Magic",
            HeroKind::Medic { .. } => "Medic",
            HeroKind::Berserk { .. } => "Berserk",
            HeroKind::Witcher { .. } => "Witcher",
            HeroKind::Hacker { .. } => "Hacker",
            HeroKind::Thor { .. } => "Thor",
            HeroKind::Avenger { .. } => "Avenger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    entity: Entity,
    pub kind: HeroKind,
    /// Set by the Avenger's shield. Nothing in the round engine reads it.
    #[serde(default)]
    pub is_immune: bool,
}

impl Hero {
    pub fn new(name: impl Into<String>, health: i32, damage: i32, kind: HeroKind) -> Self {
        Self {
            entity: Entity::new(name, health, damage),
            kind,
            is_immune: false,
        }
    }

    pub fn warrior(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(name, health, damage, HeroKind::Warrior)
    }

    pub fn magic(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(
            name,
            health,
            damage,
            HeroKind::Magic {
                rounds_boosted: 0,
                attack_boost: crate::core::constants::MAGIC_ATTACK_BOOST,
            },
        )
    }

    pub fn medic(name: impl Into<String>, health: i32, damage: i32, heal_points: i32) -> Self {
        Self::new(name, health, damage, HeroKind::Medic { heal_points })
    }

    pub fn berserk(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(name, health, damage, HeroKind::Berserk { blocked_damage: 0 })
    }

    pub fn witcher(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(
            name,
            health,
            damage,
            HeroKind::Witcher {
                revive_chance_percent: crate::core::constants::WITCHER_REVIVE_CHANCE_PERCENT,
            },
        )
    }

    pub fn hacker(name: impl Into<String>, health: i32, damage: i32, steal_amount: i32) -> Self {
        Self::new(name, health, damage, HeroKind::Hacker { steal_amount })
    }

    pub fn thor(
        name: impl Into<String>,
        health: i32,
        damage: i32,
        stun_chance_percent: u32,
    ) -> Self {
        Self::new(
            name,
            health,
            damage,
            HeroKind::Thor {
                stun_chance_percent,
            },
        )
    }

    pub fn avenger(
        name: impl Into<String>,
        health: i32,
        damage: i32,
        shield_chance_percent: u32,
    ) -> Self {
        Self::new(
            name,
            health,
            damage,
            HeroKind::Avenger {
                shield_chance_percent,
            },
        )
    }

    pub fn ability(&self) -> Ability {
        self.kind.ability()
    }

    pub fn is_berserk(&self) -> bool {
        matches!(self.kind, HeroKind::Berserk { .. })
    }

    /// Damage blocked during the last boss attack, for Berserk heroes only.
    pub fn blocked_damage(&self) -> Option<i32> {
        match self.kind {
            HeroKind::Berserk { blocked_damage } => Some(blocked_damage),
            _ => None,
        }
    }

    pub fn set_blocked_damage(&mut self, amount: i32) {
        if let HeroKind::Berserk { blocked_damage } = &mut self.kind {
            *blocked_damage = amount;
        }
    }
}

impl Combatant for Hero {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity)
    }
}
