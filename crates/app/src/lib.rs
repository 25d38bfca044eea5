//! Terminal front end for the undercroft engine: glyph mapping, seed
//! handling, and the crossterm-backed view.

pub mod terminal_view;

use std::time::{SystemTime, UNIX_EPOCH};

use undercroft_core::mapgen::progression::BOSS_DEPTH;
use undercroft_core::{GameState, Pos, TileKind};

/// Parses an explicit seed argument, or derives one from the clock when the
/// player doesn't care about reproducibility.
pub fn resolve_seed(arg: Option<&str>) -> Result<u64, String> {
    match arg {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("seed must be an unsigned integer, got {raw:?}")),
        None => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_err(|e| format!("system clock is before the unix epoch: {e}"))?;
            Ok(now.as_nanos() as u64)
        }
    }
}

/// The glyph drawn for one cell, actors taking precedence over terrain.
pub fn glyph_at(state: &GameState, pos: Pos) -> char {
    if state.player().pos == pos {
        return '@';
    }
    if state.monster_at(pos).is_some() {
        return if state.depth == BOSS_DEPTH { 'B' } else { 'M' };
    }
    match state.level.tile_at(pos) {
        TileKind::Wall => '#',
        TileKind::Floor => '.',
        TileKind::Chest => 'C',
        TileKind::Stairs => '>',
    }
}
