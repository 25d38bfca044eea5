use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};

use undercroft_core::{Direction, Game, InputJournal, RunOutcome, TurnOutcome};
use undercroft_app::resolve_seed;
use undercroft_app::terminal_view::TerminalView;

fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        _ => None,
    }
}

fn run(game: &mut Game, journal: &mut InputJournal) -> io::Result<()> {
    let mut view = TerminalView::new(io::stdout());
    game.render_to(&mut view);

    loop {
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        if code == KeyCode::Char('q') || code == KeyCode::Esc {
            return Ok(());
        }
        let Some(direction) = key_direction(code) else {
            continue;
        };
        if game.session_result().is_some() {
            continue;
        }

        journal.append_move(direction);
        if let TurnOutcome::Finished(RunOutcome::Defeat) = game.move_player(direction, &mut view) {
            // Victory announces itself through the view; defeat just stops
            // the world, so say so and redraw before waiting for q.
            view.announce_end("You have died.");
            game.render_to(&mut view);
        }
    }
}

fn save_journal(journal: &InputJournal) -> io::Result<String> {
    let path = format!("undercroft-journal-{}.json", journal.seed);
    let json = journal.to_json().map_err(io::Error::other)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

fn main() -> io::Result<()> {
    let seed_arg = std::env::args().nth(1);
    let seed = resolve_seed(seed_arg.as_deref()).map_err(io::Error::other)?;

    let mut game = Game::new(seed);
    let mut journal = InputJournal::new(seed);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut game, &mut journal);
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result?;

    match game.session_result() {
        Some(RunOutcome::Victory) => println!("Victory at depth {}.", game.state().depth),
        Some(RunOutcome::Defeat) => println!("Slain at depth {}.", game.state().depth),
        None => println!("Abandoned at depth {}.", game.state().depth),
    }
    println!("seed {}, {} turns", game.seed(), game.current_turn());

    if !journal.inputs.is_empty() {
        let path = save_journal(&journal)?;
        println!("journal written to {path}");
    }
    Ok(())
}
