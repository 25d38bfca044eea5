use rand_chacha::rand_core::RngCore;
use slotmap::SlotMap;

use crate::types::*;

/// The player or a monster. One shape for both roles; `kind` is the tag.
#[derive(Clone, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub pos: Pos,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub armor: i32,
}

impl Entity {
    pub fn new(kind: EntityKind, max_health: i32, damage: i32, pos: Pos) -> Self {
        Self { kind, pos, health: max_health, max_health, damage, armor: 0 }
    }

    /// Positive deltas heal, clamped at `max_health`. Negative deltas are not
    /// clamped below zero; the turn engine's terminal check owns death.
    pub fn change_health(&mut self, delta: i32) {
        self.health += delta;
        if self.health > self.max_health {
            self.health = self.max_health;
        }
    }

    /// Armor is a depletable shield, floored at zero.
    pub fn change_armor(&mut self, delta: i32) {
        self.armor = (self.armor + delta).max(0);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// One dungeon level: a fixed-size tile grid plus the pool of unused spawn
/// points. The level is replaced wholesale on descent.
#[derive(Clone, Debug)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub spawn_pool: Vec<Pos>,
}

impl Level {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Wall; width * height], spawn_pool: Vec::new() }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Out-of-bounds reads answer `Wall`, so the border ring check also covers
    /// any stray off-grid probe.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn count_tiles(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    /// Removes and returns a uniformly drawn spawn point. The pool is consumed
    /// without replacement so no two spawned entities share a tile.
    ///
    /// Panics when the pool is empty: generation guarantees enough Floor tiles
    /// for every supported depth, so an empty pool is a defect, not a state to
    /// recover from.
    pub fn take_spawn_point(&mut self, rng: &mut impl RngCore) -> Pos {
        assert!(!self.spawn_pool.is_empty(), "spawn pool exhausted: level generation must leave more floor tiles than entities");
        let idx = (rng.next_u32() as usize) % self.spawn_pool.len();
        self.spawn_pool.remove(idx)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Whole-session mutable state owned by the turn engine. The presentation
/// layer only ever sees `&GameState`.
pub struct GameState {
    pub depth: u32,
    pub level: Level,
    pub actors: SlotMap<EntityId, Entity>,
    pub player_id: EntityId,
}

impl GameState {
    pub fn player(&self) -> &Entity {
        &self.actors[self.player_id]
    }

    pub fn monster_ids(&self) -> Vec<EntityId> {
        self.actors
            .iter()
            .filter(|(id, actor)| *id != self.player_id && actor.kind == EntityKind::Monster)
            .map(|(id, _)| id)
            .collect()
    }

    /// A living monster standing on `pos`, if any. Monsters may stack, so this
    /// answers the first one in slot order.
    pub fn monster_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|(id, actor)| {
                *id != self.player_id && actor.kind == EntityKind::Monster && actor.pos == pos
            })
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn change_health_clamps_at_max_only() {
        let mut entity = Entity::new(EntityKind::Player, 100, 10, Pos { y: 1, x: 1 });
        entity.change_health(-30);
        assert_eq!(entity.health, 70);
        entity.change_health(500);
        assert_eq!(entity.health, 100);
        entity.change_health(-150);
        assert_eq!(entity.health, -50, "no lower clamp; terminal check owns death");
    }

    #[test]
    fn change_armor_floors_at_zero() {
        let mut entity = Entity::new(EntityKind::Player, 100, 10, Pos { y: 1, x: 1 });
        entity.change_armor(5);
        assert_eq!(entity.armor, 5);
        entity.change_armor(-10);
        assert_eq!(entity.armor, 0);
    }

    #[test]
    fn tile_at_out_of_bounds_is_wall() {
        let level = Level::new(5, 4);
        assert_eq!(level.tile_at(Pos { y: -1, x: 0 }), TileKind::Wall);
        assert_eq!(level.tile_at(Pos { y: 0, x: 5 }), TileKind::Wall);
        assert_eq!(level.tile_at(Pos { y: 4, x: 0 }), TileKind::Wall);
    }

    #[test]
    fn take_spawn_point_consumes_without_replacement() {
        let mut level = Level::new(5, 5);
        level.spawn_pool = vec![Pos { y: 1, x: 1 }, Pos { y: 2, x: 2 }, Pos { y: 3, x: 3 }];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let first = level.take_spawn_point(&mut rng);
        let second = level.take_spawn_point(&mut rng);
        let third = level.take_spawn_point(&mut rng);

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
        assert!(level.spawn_pool.is_empty());
    }

    #[test]
    #[should_panic(expected = "spawn pool exhausted")]
    fn empty_spawn_pool_panics_loudly() {
        let mut level = Level::new(5, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let _ = level.take_spawn_point(&mut rng);
    }
}
