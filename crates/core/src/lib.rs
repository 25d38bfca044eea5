//! Headless dungeon-crawl engine: deterministic level generation, a
//! synchronous turn cycle, and input journaling for replay. Presentation
//! lives in a separate crate behind the [`GameView`] trait.

pub mod game;
pub mod journal;
pub mod mapgen;
pub mod state;
pub mod types;
pub mod view;

pub use game::Game;
pub use journal::{InputJournal, InputRecord, ReplayResult, replay_to_end};
pub use state::{Entity, GameState, Level};
pub use types::{Direction, EntityId, EntityKind, Pos, RunOutcome, TileKind, TurnOutcome};
pub use view::{GameView, NullView};
