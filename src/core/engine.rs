use crate::core::game::Game;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw/input loop. Returns the game once the player quits.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        info!("engine started");

        'frames: loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking): drain whatever arrived since the last frame
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if is_quit_key(&key) {
                        debug!(?key.code, "quit requested");
                        break 'frames;
                    }
                    self.game.handle_input(key);
                }
            }

            tokio::time::sleep(self.game.frame_interval()).await;
        }

        info!("engine stopped");
        Ok(self.game)
    }
}

/// Esc, or Ctrl+C since raw mode swallows SIGINT
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_quit_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn escape_quits() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_c_quits() {
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn plain_letters_do_not_quit() {
        assert!(!is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!is_quit_key(&KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }
}
