//! Fresh-session construction: the only place a player entity is ever
//! created. Descending levels repositions the existing player instead.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::mapgen::generate_level;
use crate::mapgen::progression::{self, BASE_DAMAGE, PLAYER_MAX_HEALTH, STARTING_DEPTH};
use crate::state::Entity;

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut level = generate_level(STARTING_DEPTH, &mut rng);
        let mut actors: SlotMap<EntityId, Entity> = SlotMap::with_key();

        // Monsters draw from the pool first, then the player; both remove
        // their point so nothing spawns stacked.
        for _ in 0..progression::monster_count(STARTING_DEPTH) {
            let stats = progression::monster_stats(STARTING_DEPTH);
            let pos = level.take_spawn_point(&mut rng);
            actors.insert(Entity::new(EntityKind::Monster, stats.max_health, stats.damage, pos));
        }
        let player_pos = level.take_spawn_point(&mut rng);
        let player_id =
            actors.insert(Entity::new(EntityKind::Player, PLAYER_MAX_HEALTH, BASE_DAMAGE, player_pos));

        Self {
            seed,
            turn: 0,
            rng,
            state: GameState { depth: STARTING_DEPTH, level, actors, player_id },
            session_result: None,
        }
    }
}
