//! Crossterm-backed presentation: full-screen redraw with a status line and a
//! short message log underneath the map.

use std::collections::VecDeque;
use std::io::{Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use undercroft_core::{GameState, GameView, Pos};

use crate::glyph_at;

const MESSAGE_ROWS: usize = 4;

pub struct TerminalView {
    out: Stdout,
    messages: VecDeque<String>,
    ended: bool,
}

impl TerminalView {
    pub fn new(out: Stdout) -> Self {
        Self { out, messages: VecDeque::new(), ended: false }
    }

    /// Ends the session from the driver's side, e.g. on defeat, where the
    /// engine has no dedicated notification.
    pub fn announce_end(&mut self, message: &str) {
        self.ended = true;
        self.push_message(message.to_owned());
    }

    fn push_message(&mut self, message: String) {
        if self.messages.len() == MESSAGE_ROWS {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    fn draw(&mut self, state: &GameState) -> std::io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        for y in 0..state.level.height as i32 {
            queue!(self.out, MoveTo(0, y as u16))?;
            let row: String = (0..state.level.width as i32)
                .map(|x| glyph_at(state, Pos { y, x }))
                .collect();
            queue!(self.out, Print(row))?;
        }

        let player = state.player();
        let status = format!(
            "depth {}  hp {}/{}  armour {}  dmg {}",
            state.depth, player.health, player.max_health, player.armor, player.damage,
        );
        queue!(self.out, MoveTo(0, state.level.height as u16 + 1), Print(status))?;

        let log_base = state.level.height as u16 + 3;
        for (i, message) in self.messages.iter().enumerate() {
            queue!(self.out, MoveTo(0, log_base + i as u16), Print(message))?;
        }
        if self.ended {
            let row = log_base + MESSAGE_ROWS as u16 + 1;
            queue!(self.out, MoveTo(0, row), Print("press q to leave"))?;
        }

        self.out.flush()
    }
}

impl GameView for TerminalView {
    // A draw failure here means the terminal itself is gone; there is nothing
    // sensible to fall back to, so the error is swallowed and the next key
    // press will surface the broken terminal to the main loop.
    fn render_level(&mut self, state: &GameState) {
        let _ = self.draw(state);
    }

    fn notify_combat(&mut self, message: &str) {
        self.push_message(message.to_owned());
    }

    fn notify_chest(&mut self, item: &str) {
        self.push_message(format!("Found: {item}"));
    }

    fn notify_victory(&mut self) {
        self.ended = true;
        self.push_message("The boss falls. You have won!".to_owned());
    }
}
