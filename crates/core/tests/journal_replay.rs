//! A journaled session replays to the exact same end state.

use undercroft_core::{Direction, Game, InputJournal, NullView, replay_to_end};

fn record_session(seed: u64, turns: usize) -> (Game, InputJournal) {
    let mut game = Game::new(seed);
    let mut journal = InputJournal::new(seed);
    let mut view = NullView;
    for i in 0..turns {
        let direction = Direction::ALL[(i * 5 + 1) % 4];
        journal.append_move(direction);
        game.move_player(direction, &mut view);
    }
    (game, journal)
}

#[test]
fn replay_reaches_the_live_end_state() {
    let (live, journal) = record_session(0xBEEF, 300);
    let replay = replay_to_end(&journal);
    assert_eq!(replay.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(replay.final_turn, live.current_turn());
    assert_eq!(replay.final_outcome, live.session_result());
}

#[test]
fn replay_survives_json_serialization() {
    let (live, journal) = record_session(17, 120);
    let json = journal.to_json().unwrap();
    let restored = InputJournal::from_json(&json).unwrap();
    let replay = replay_to_end(&restored);
    assert_eq!(replay.final_snapshot_hash, live.snapshot_hash());
}

#[test]
fn inputs_after_a_finish_do_not_desync_the_replay() {
    // A long enough scripted session may or may not end; either way, padding
    // the journal with extra inputs past the live game's own commands must
    // leave the replay at the same state the live game reached after the same
    // padding, because finished games ignore commands.
    let (mut live, mut journal) = record_session(99, 400);
    let mut view = NullView;
    for _ in 0..20 {
        journal.append_move(Direction::Up);
        live.move_player(Direction::Up, &mut view);
    }
    let replay = replay_to_end(&journal);
    assert_eq!(replay.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(replay.final_turn, live.current_turn());
}
