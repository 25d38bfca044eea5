//! The presentation/input boundary. The engine is the caller: it pushes a full
//! redraw after every turn and fire-and-forget notifications for combat,
//! chest, and victory events. Implementations receive read-only state and must
//! not feed anything back into the simulation.

use crate::state::GameState;

pub trait GameView {
    /// Full redraw request with the current level, player, and monster roster.
    fn render_level(&mut self, state: &GameState);

    /// Fired after any damage or armor event.
    fn notify_combat(&mut self, message: &str);

    /// Fired after any chest resolution.
    fn notify_chest(&mut self, message: &str);

    /// Fired exactly once, when the boss falls.
    fn notify_victory(&mut self);
}

/// No-op view for headless runs and replays.
pub struct NullView;

impl GameView for NullView {
    fn render_level(&mut self, _state: &GameState) {}
    fn notify_combat(&mut self, _message: &str) {}
    fn notify_chest(&mut self, _message: &str) {}
    fn notify_victory(&mut self) {}
}
