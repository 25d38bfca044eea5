//! Depth transitions: new level, fresh roster, same player.

use crate::mapgen::generate_level;
use crate::mapgen::progression::{monster_count, monster_stats};
use crate::state::Entity;
use crate::types::EntityKind;

use super::Game;

impl Game {
    /// Advances one depth. The old level and every monster are discarded; the
    /// player entity survives with all accumulated stats and is dropped onto a
    /// random floor tile of the new level.
    pub(super) fn descend(&mut self) {
        self.state.depth += 1;
        self.state.level = generate_level(self.state.depth, &mut self.rng);

        let player_id = self.state.player_id;
        self.state.actors.retain(|id, _| id == player_id);
        self.respawn_monsters();

        let pos = self.state.level.take_spawn_point(&mut self.rng);
        self.state.actors[player_id].pos = pos;
    }

    fn respawn_monsters(&mut self) {
        for _ in 0..monster_count(self.state.depth) {
            let stats = monster_stats(self.state.depth);
            let pos = self.state.level.take_spawn_point(&mut self.rng);
            self.state.actors.insert(Entity::new(
                EntityKind::Monster,
                stats.max_health,
                stats.damage,
                pos,
            ));
        }
    }
}
