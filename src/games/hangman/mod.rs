//! Hangman game module
pub mod engine;
pub mod game;
pub mod renderer;
pub mod words;

pub use engine::{guess_letter, start_round, RoundState, RoundStatus, MAX_ERRORS};
pub use game::HangmanGame;
pub use renderer::HangmanRenderer;
pub use words::{Word, WordList, WordListError};
