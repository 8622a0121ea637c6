use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::game::Game;

use super::engine::{guess_letter, start_round, RoundState, ALPHABET};
use super::renderer::HangmanRenderer;
use super::words::WordList;

/// Keys per row of the on-screen keyboard
pub const KEYBOARD_COLUMNS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyboard,
    TextInput,
}

/// Presentation-side controller: owns the round and turns key presses into engine calls
pub struct HangmanGame {
    words: WordList,
    rng: StdRng,
    round: RoundState,
    focus: Focus,
    cursor: usize,
    input: String,
}

impl HangmanGame {
    pub fn new(words: WordList, mut rng: StdRng) -> Self {
        let round = start_round(&words, None, &mut rng);
        Self {
            words,
            rng,
            round,
            focus: Focus::Keyboard,
            cursor: 0,
            input: String::new(),
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index into [`ALPHABET`] of the highlighted key
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Contents of the one-character text field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn guess(&mut self, letter: char) {
        self.round = guess_letter(&self.round, letter);
    }

    /// New round on a different word; the text field is cleared too
    pub fn restart(&mut self) {
        let previous = self.round.word().clone();
        self.round = start_round(&self.words, Some(&previous), &mut self.rng);
        self.input.clear();
        info!("round restarted");
    }

    /// Sends the first character of the text field, if any, then clears it
    pub fn submit_input(&mut self) {
        if let Some(c) = self.input.chars().next() {
            self.guess(c);
        }
        self.input.clear();
    }

    fn type_char(&mut self, c: char) {
        if self.input.is_empty() {
            self.input.extend(c.to_uppercase());
        }
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let mut col = self.cursor % KEYBOARD_COLUMNS;
        let mut row = self.cursor / KEYBOARD_COLUMNS;
        let rows = ALPHABET.len().div_ceil(KEYBOARD_COLUMNS);

        match code {
            KeyCode::Left => col = (col + KEYBOARD_COLUMNS - 1) % KEYBOARD_COLUMNS,
            KeyCode::Right => col = (col + 1) % KEYBOARD_COLUMNS,
            KeyCode::Up => row = (row + rows - 1) % rows,
            KeyCode::Down => row = (row + 1) % rows,
            _ => return,
        }

        self.cursor = (row * KEYBOARD_COLUMNS + col).min(ALPHABET.len() - 1);
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Keyboard => Focus::TextInput,
            Focus::TextInput => Focus::Keyboard,
        };
        debug!(focus = ?self.focus, "focus changed");
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, self.focus) {
            (KeyCode::Char('r') | KeyCode::Char('R'), _) if ctrl => self.restart(),
            (KeyCode::F(5), _) => self.restart(),
            (KeyCode::Tab | KeyCode::BackTab, _) => self.toggle_focus(),
            (_, _) if ctrl => {}

            (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down, Focus::Keyboard) => {
                self.move_cursor(key.code)
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Keyboard) => {
                self.guess(ALPHABET[self.cursor])
            }
            (KeyCode::Char(c), Focus::Keyboard) => self.guess(c),

            (KeyCode::Char(c), Focus::TextInput) => self.type_char(c),
            (KeyCode::Backspace | KeyCode::Delete, Focus::TextInput) => self.input.clear(),
            (KeyCode::Enter, Focus::TextInput) => self.submit_input(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, self);
    }
}
