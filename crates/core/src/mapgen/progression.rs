//! Depth-band content tables: how many chests and monsters a level carries,
//! and the stat blocks entities spawn with.

/// Grid dimensions are fixed for the whole session.
pub const LEVEL_WIDTH: usize = 25;
pub const LEVEL_HEIGHT: usize = 18;

pub const STARTING_DEPTH: u32 = 1;

/// The terminal level: no chests, no stairs, a single boss.
pub const BOSS_DEPTH: u32 = 40;

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const BASE_DAMAGE: i32 = 10;

pub struct MonsterStats {
    pub max_health: i32,
    pub damage: i32,
}

/// Maximum chests placed per level. Depths past the boss should be
/// unreachable; the fallback keeps generation defined if they ever are.
pub fn chest_quota(depth: u32) -> usize {
    match depth {
        1..=5 => 2,
        6..=20 => 3,
        21..=35 => 4,
        36..=39 => 5,
        40 => 0,
        _ => 2,
    }
}

pub fn monster_count(depth: u32) -> usize {
    match depth {
        1..=5 => 3,
        6..=20 => 4,
        21..=35 => 5,
        36..=39 => 6,
        40 => 1,
        _ => 2,
    }
}

pub fn monster_stats(depth: u32) -> MonsterStats {
    if depth == BOSS_DEPTH {
        MonsterStats { max_health: 5000, damage: 70 }
    } else {
        MonsterStats { max_health: 50, damage: BASE_DAMAGE }
    }
}

/// Armor lost when a hit is absorbed. The boss chews through armor faster.
pub fn armor_erosion(depth: u32) -> i32 {
    if depth == BOSS_DEPTH { 10 } else { 5 }
}
