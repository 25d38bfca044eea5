//! Shared fixtures for the game tests: hand-built levels, roster surgery, and
//! a view that records every callback.

use crate::mapgen::progression::{LEVEL_HEIGHT, LEVEL_WIDTH};
use crate::state::{Entity, Level};
use crate::types::{EntityId, EntityKind, Pos, TileKind};
use crate::view::GameView;

use super::Game;

/// A level with every interior tile open. No chests, no stairs, no randomness.
pub fn open_level() -> Level {
    let mut level = Level::new(LEVEL_WIDTH, LEVEL_HEIGHT);
    for y in 1..LEVEL_HEIGHT as i32 - 1 {
        for x in 1..LEVEL_WIDTH as i32 - 1 {
            level.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
    level
}

pub fn install_open_level(game: &mut Game) {
    game.state.level = open_level();
}

pub fn clear_monsters(game: &mut Game) {
    let player_id = game.state.player_id;
    game.state.actors.retain(|id, _| id == player_id);
}

pub fn place_player(game: &mut Game, pos: Pos) {
    game.state.actors[game.state.player_id].pos = pos;
}

pub fn add_monster(game: &mut Game, pos: Pos, health: i32, damage: i32) -> EntityId {
    game.state
        .actors
        .insert(Entity::new(EntityKind::Monster, health, damage, pos))
}

pub fn descend_to(game: &mut Game, depth: u32) {
    while game.state.depth < depth {
        game.descend();
    }
}

/// Records every view callback for assertion.
#[derive(Default)]
pub struct RecordingView {
    pub renders: usize,
    pub combat: Vec<String>,
    pub chest: Vec<String>,
    pub victories: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameView for RecordingView {
    fn render_level(&mut self, _state: &crate::state::GameState) {
        self.renders += 1;
    }

    fn notify_combat(&mut self, message: &str) {
        self.combat.push(message.to_owned());
    }

    fn notify_chest(&mut self, item: &str) {
        self.chest.push(item.to_owned());
    }

    fn notify_victory(&mut self) {
        self.victories += 1;
    }
}
