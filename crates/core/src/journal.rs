//! Input journals: a seed plus the ordered directional commands of a session.
//! Replaying a journal against a fresh engine reproduces the run bit for bit,
//! which is how desyncs get diagnosed.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::types::{Direction, RunOutcome};
use crate::view::NullView;

/// Bump when the journal layout changes shape.
pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub direction: Direction,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, inputs: Vec::new() }
    }

    pub fn append_move(&mut self, direction: Direction) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, direction });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// What a replay ended up as, condensed for comparison against the live run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_outcome: Option<RunOutcome>,
    pub final_turn: u64,
    pub final_snapshot_hash: u64,
}

/// Drives a fresh game through every journaled input with no presentation
/// attached. Inputs past a terminal outcome are absorbed by the engine's
/// session guard, exactly as they would be live.
pub fn replay_to_end(journal: &InputJournal) -> ReplayResult {
    let mut game = Game::new(journal.seed);
    let mut view = NullView;
    for record in &journal.inputs {
        game.move_player(record.direction, &mut view);
    }
    ReplayResult {
        final_outcome: game.session_result(),
        final_turn: game.current_turn(),
        final_snapshot_hash: game.snapshot_hash(),
    }
}
