//! Single-pass tile scan with depth-scaled content density. No connectivity
//! check is performed; a stairs tile can in principle be walled off from every
//! spawn point, and that is a known, accepted gap.

use rand_chacha::rand_core::RngCore;

use super::progression::{self, BOSS_DEPTH, LEVEL_HEIGHT, LEVEL_WIDTH};
use crate::state::Level;
use crate::types::{Pos, TileKind};

/// A scan virtually never comes up short on floor tiles at these dimensions;
/// the retry cap only bounds the loop if the tables or dimensions change.
const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Generates the tile grid and spawn pool for `depth`, drawing every random
/// choice from the injected `rng`.
///
/// Guarantees beyond the raw scan:
/// - exactly one stairs tile for every depth except the boss level, which has
///   none (a missing stairs roll is patched onto a random floor tile);
/// - the spawn pool always holds more points than the level's entity count,
///   regenerating (bounded) rather than starving the spawners.
pub fn generate_level(depth: u32, rng: &mut impl RngCore) -> Level {
    let required_spawns = progression::monster_count(depth) + 1;

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let mut level = scan(depth, rng);
        level.spawn_pool = collect_spawn_points(&level);
        if level.spawn_pool.len() > required_spawns {
            return level;
        }
    }

    panic!(
        "level generation failed: depth {depth} never produced more than {required_spawns} floor tiles"
    );
}

fn scan(depth: u32, rng: &mut impl RngCore) -> Level {
    let mut level = Level::new(LEVEL_WIDTH, LEVEL_HEIGHT);
    let max_chests = progression::chest_quota(depth);
    // The boss arena is the final level: no exit, and the wall roll becomes
    // floor so the arena stays open.
    let mut stairs_placed = depth == BOSS_DEPTH;
    let mut chest_count = 0;
    let mut chests_latched = max_chests == 0;

    for y in 0..LEVEL_HEIGHT {
        for x in 0..LEVEL_WIDTH {
            let pos = Pos { y: y as i32, x: x as i32 };
            if y == 0 || x == 0 || y == LEVEL_HEIGHT - 1 || x == LEVEL_WIDTH - 1 {
                continue; // border ring stays Wall
            }

            let roll = rng.next_u32() % 100;
            let tile = if roll >= 90 {
                if depth == BOSS_DEPTH { TileKind::Floor } else { TileKind::Wall }
            } else if roll >= 70 && !stairs_placed {
                stairs_placed = true;
                TileKind::Stairs
            } else if roll < 15 && !chests_latched {
                if chest_count >= max_chests {
                    // One-way latch: once the quota trips, the chest branch is
                    // never consulted again this level.
                    chests_latched = true;
                    TileKind::Floor
                } else {
                    chest_count += 1;
                    TileKind::Chest
                }
            } else {
                TileKind::Floor
            };
            level.set_tile(pos, tile);
        }
    }

    if !stairs_placed {
        place_fallback_stairs(&mut level, rng);
    }

    level
}

/// The scan leaves a level without stairs only if no interior roll landed in
/// [70, 90), which is astronomically unlikely but not impossible. Every
/// non-terminal level must have exactly one exit, so patch one in.
fn place_fallback_stairs(level: &mut Level, rng: &mut impl RngCore) {
    let floors = collect_spawn_points(level);
    if floors.is_empty() {
        return; // the retry loop in generate_level rejects this level anyway
    }
    let pos = floors[(rng.next_u32() as usize) % floors.len()];
    level.set_tile(pos, TileKind::Stairs);
}

/// The spawn locator: every Floor tile, in scan order. Callers draw from and
/// remove entries so placements never collide.
fn collect_spawn_points(level: &Level) -> Vec<Pos> {
    let mut points = Vec::new();
    for y in 0..level.height {
        for x in 0..level.width {
            let pos = Pos { y: y as i32, x: x as i32 };
            if level.tile_at(pos) == TileKind::Floor {
                points.push(pos);
            }
        }
    }
    points
}
