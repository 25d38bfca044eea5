//! The turn engine: one synchronous resolution per player command, covering
//! the player's action, monster wandering and attacks, death cleanup, depth
//! transitions, and the win/loss terminals.

use rand_chacha::ChaCha8Rng;

use crate::state::GameState;
use crate::types::*;
use crate::view::GameView;

mod bootstrap;
mod combat;
mod descent;
mod hash;
mod turn;

#[cfg(test)]
mod test_support;

/// A single game session. Owns every piece of mutable simulation state,
/// including the seeded random generator; the presentation layer only ever
/// receives `&GameState` through the view boundary.
pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    state: GameState,
    session_result: Option<RunOutcome>,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of fully resolved commands so far. Commands arriving after the
    /// session finished are not counted.
    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// `Some` once the session has ended: the boss fell (victory) or the
    /// player died (defeat). No further turns process afterwards.
    pub fn session_result(&self) -> Option<RunOutcome> {
        self.session_result
    }

    /// Pushes a redraw outside the turn cycle, e.g. right after startup.
    pub fn render_to(&self, view: &mut dyn GameView) {
        view.render_level(&self.state);
    }
}
