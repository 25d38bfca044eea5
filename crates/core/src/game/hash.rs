//! Snapshot hashing for determinism checks and replay verification.

use xxhash_rust::xxh3::Xxh3;

use super::Game;
use crate::types::{RunOutcome, TileKind};

impl Game {
    /// Hashes everything observable about the current session: seed, turn
    /// counter, depth, outcome, terrain, and every actor's position and stats.
    /// Two games that report equal hashes after equal input sequences are in
    /// the same state.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&self.turn.to_le_bytes());
        hasher.update(&self.state.depth.to_le_bytes());
        hasher.update(&[match self.session_result {
            None => 0u8,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat) => 2,
        }]);

        for tile in &self.state.level.tiles {
            hasher.update(&[match tile {
                TileKind::Wall => 0u8,
                TileKind::Floor => 1,
                TileKind::Chest => 2,
                TileKind::Stairs => 3,
            }]);
        }

        let player = self.state.player();
        hasher.update(&player.pos.y.to_le_bytes());
        hasher.update(&player.pos.x.to_le_bytes());
        hasher.update(&player.health.to_le_bytes());
        hasher.update(&player.max_health.to_le_bytes());
        hasher.update(&player.damage.to_le_bytes());
        hasher.update(&player.armor.to_le_bytes());

        // monster_ids iterates in slot order, which is itself deterministic
        // under identical inputs.
        for id in self.state.monster_ids() {
            let monster = &self.state.actors[id];
            hasher.update(&monster.pos.y.to_le_bytes());
            hasher.update(&monster.pos.x.to_le_bytes());
            hasher.update(&monster.health.to_le_bytes());
        }

        hasher.digest()
    }
}
