//! Per-command resolution: the ordered pipeline from the player's move through
//! monster actions to the terminal checks and the redraw.

use rand_chacha::rand_core::Rng;

use super::*;
use crate::mapgen::progression::BOSS_DEPTH;

impl Game {
    /// Resolves one full turn for a directional command. Synchronous and
    /// non-interruptible; by the time this returns, the redraw has been
    /// requested. Once the session has finished, further commands return the
    /// final outcome without touching any state.
    ///
    /// Resolution order: player action, dead-monster cleanup, victory check,
    /// monster actions, defeat check, depth transition, redraw. Death wins
    /// over descent: a player killed while standing on stairs never descends.
    pub fn move_player(&mut self, direction: Direction, view: &mut dyn GameView) -> TurnOutcome {
        if let Some(outcome) = self.session_result {
            return TurnOutcome::Finished(outcome);
        }
        self.turn += 1;

        self.resolve_player_action(direction, view);

        if self.clean_dead_monsters() {
            self.session_result = Some(RunOutcome::Victory);
            view.notify_victory();
            view.render_level(&self.state);
            return TurnOutcome::Finished(RunOutcome::Victory);
        }

        self.move_monsters(view);

        if !self.state.player().is_alive() {
            self.session_result = Some(RunOutcome::Defeat);
            view.render_level(&self.state);
            return TurnOutcome::Finished(RunOutcome::Defeat);
        }

        if self.state.level.tile_at(self.state.player().pos) == TileKind::Stairs {
            self.descend();
        }

        view.render_level(&self.state);
        TurnOutcome::Continues
    }

    /// Wall check, then combat, then chest, then plain movement; identical
    /// tie-break order in all four directions. A wall bump costs the turn but
    /// changes nothing.
    fn resolve_player_action(&mut self, direction: Direction, view: &mut dyn GameView) {
        let target = self.state.player().pos.step(direction);
        if self.state.level.tile_at(target) == TileKind::Wall {
            return;
        }
        if let Some(monster_id) = self.state.monster_at(target) {
            self.strike_monster(monster_id, view);
            return;
        }
        if self.state.level.tile_at(target) == TileKind::Chest {
            self.open_chest(view);
            self.state.actors[self.state.player_id].pos = target;
            // Consumed exactly once, at the moment of stepping on.
            self.state.level.set_tile(target, TileKind::Floor);
            return;
        }
        self.state.actors[self.state.player_id].pos = target;
    }

    /// Empties every slot whose monster dropped to zero or below. Returns
    /// whether the boss was among the fallen.
    fn clean_dead_monsters(&mut self) -> bool {
        let dead: Vec<EntityId> = self
            .state
            .monster_ids()
            .into_iter()
            .filter(|id| !self.state.actors[*id].is_alive())
            .collect();
        let mut boss_fell = false;
        for id in dead {
            self.state.actors.remove(id);
            if self.state.depth == BOSS_DEPTH {
                boss_fell = true;
            }
        }
        boss_fell
    }

    fn move_monsters(&mut self, view: &mut dyn GameView) {
        for id in self.state.monster_ids() {
            let direction = Direction::ALL[(self.rng.next_u32() % 4) as usize];
            self.monster_action(id, direction, view);
        }
    }

    /// One monster's turn: a wall consumes it, the player is attacked instead
    /// of displaced, anything else is walked onto. Monsters do not check for
    /// each other, so they may stack; observed source behavior, kept as is.
    pub(super) fn monster_action(
        &mut self,
        id: EntityId,
        direction: Direction,
        view: &mut dyn GameView,
    ) {
        let dest = self.state.actors[id].pos.step(direction);
        if self.state.level.tile_at(dest) == TileKind::Wall {
            return;
        }
        if dest == self.state.player().pos {
            self.monster_hits_player(id, view);
            return;
        }
        self.state.actors[id].pos = dest;
    }
}
