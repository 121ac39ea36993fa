// Boss
pub const BOSS_NAME: &str = "Splinter";
pub const BOSS_HEALTH: i32 = 1000;
pub const BOSS_DAMAGE: i32 = 50;

// Berserk blocks one of these amounts whenever the boss isn't defending against it
pub const BERSERK_BLOCK_AMOUNTS: [i32; 2] = [5, 10];

// Warrior critical multiplier, inclusive on both ends
pub const WARRIOR_CRIT_MULTIPLIER_MIN: i32 = 2;
pub const WARRIOR_CRIT_MULTIPLIER_MAX: i32 = 5;

// Magic
pub const MAGIC_ATTACK_BOOST: i32 = 5;
pub const MAGIC_MAX_BOOST_ROUNDS: u32 = 4;

// Witcher
pub const WITCHER_REVIVE_CHANCE_PERCENT: u32 = 10;
pub const REVIVE_HEALTH: i32 = 50;

// Hero roster: (name, health, damage) plus per-kind extras
pub const WARRIOR_DJANGO: (&str, i32, i32) = ("Django", 280, 10);
pub const WARRIOR_BILLY: (&str, i32, i32) = ("Billy", 270, 15);
pub const MAGIC_DULITTLE: (&str, i32, i32) = ("Dulittle", 290, 10);
pub const MEDIC_JAMES: (&str, i32, i32, i32) = ("James", 250, 5, 15);
pub const MEDIC_MARTY: (&str, i32, i32, i32) = ("Marty", 300, 5, 5);
pub const BERSERK_WILLIAM: (&str, i32, i32) = ("William", 260, 10);
pub const WITCHER_VEDMAK: (&str, i32, i32) = ("Vedmak", 290, 10);
pub const HACKER_TIM: (&str, i32, i32, i32) = ("Tim", 230, 10, 40);
pub const THOR_TORRY: (&str, i32, i32, u32) = ("Torry", 300, 20, 30);
pub const AVENGER_LUCA: (&str, i32, i32, u32) = ("Luca", 270, 30, 20);

// Safety cap for a single battle; the default roster finishes far below it
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

// Status block separator after the round header
pub const ROUND_HEADER_SUFFIX: &str = " ----------------";
