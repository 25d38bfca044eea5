//! Same seed, same inputs, same world. The snapshot hash is the witness.

use undercroft_core::{Direction, Game, NullView};

fn drive(seed: u64, moves: &[Direction]) -> Game {
    let mut game = Game::new(seed);
    let mut view = NullView;
    for &direction in moves {
        game.move_player(direction, &mut view);
    }
    game
}

fn scripted_moves(len: usize) -> Vec<Direction> {
    (0..len).map(|i| Direction::ALL[(i * 7 + 3) % 4]).collect()
}

#[test]
fn identical_runs_hash_identically() {
    let moves = scripted_moves(200);
    let a = drive(0xDECAF, &moves);
    let b = drive(0xDECAF, &moves);
    assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    assert_eq!(a.current_turn(), b.current_turn());
    assert_eq!(a.session_result(), b.session_result());
}

#[test]
fn fresh_games_with_the_same_seed_match() {
    assert_eq!(Game::new(42).snapshot_hash(), Game::new(42).snapshot_hash());
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(Game::new(1).snapshot_hash(), Game::new(2).snapshot_hash());
}

#[test]
fn rendering_is_a_pure_read() {
    let moves = scripted_moves(50);
    let game = drive(3, &moves);
    let before = game.snapshot_hash();
    let mut view = NullView;
    game.render_to(&mut view);
    game.render_to(&mut view);
    assert_eq!(game.snapshot_hash(), before);
}
