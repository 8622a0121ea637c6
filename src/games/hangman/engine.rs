//! Round state machine for hangman.
//!
//! Everything here is pure: transitions take a state and hand back the next
//! one, and the status is always recomputed from the word, the guesses and
//! the error count rather than stored on its own.

use rand::Rng;
use tracing::{debug, info, trace};

use super::words::{Word, WordList};

/// Wrong guesses allowed before the round is lost
pub const MAX_ERRORS: u8 = 6;

/// Upper bound on resampling when a restart must avoid the previous word
pub const MAX_REDRAWS: usize = 100;

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    word: Word,
    guesses: Vec<char>,
    errors: u8,
    status: RoundStatus,
}

impl RoundState {
    /// Fresh round on a known word
    pub fn new(word: Word) -> Self {
        Self {
            word,
            guesses: Vec::new(),
            errors: 0,
            status: RoundStatus::InProgress,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Every attempted letter, in the order it was guessed
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn errors(&self) -> u8 {
        self.errors
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Each letter of the word paired with whether it has been guessed yet
    pub fn revealed_word(&self) -> Vec<(char, bool)> {
        self.word
            .letters()
            .map(|c| (c, self.guesses.contains(&c)))
            .collect()
    }

    pub fn correct_guesses(&self) -> Vec<char> {
        self.guesses
            .iter()
            .copied()
            .filter(|c| self.word.contains(*c))
            .collect()
    }

    pub fn wrong_guesses(&self) -> Vec<char> {
        self.guesses
            .iter()
            .copied()
            .filter(|c| !self.word.contains(*c))
            .collect()
    }

    pub fn remaining_attempts(&self) -> u8 {
        MAX_ERRORS - self.errors
    }

    /// Whether the keyboard key for `letter` should refuse input
    pub fn is_letter_disabled(&self, letter: char) -> bool {
        self.status.is_over()
            || normalize_letter(letter).is_some_and(|l| self.guesses.contains(&l))
    }
}

/// Draws a new word and resets the round.
///
/// When `previous` is given and the list has more than one word, the draw is
/// repeated until it differs, giving up after [`MAX_REDRAWS`] attempts.
pub fn start_round<R: Rng>(words: &WordList, previous: Option<&Word>, rng: &mut R) -> RoundState {
    let mut word = words.choose(rng);

    if let Some(previous) = previous {
        let mut redraws = 0;
        while word == previous && words.len() > 1 && redraws < MAX_REDRAWS {
            word = words.choose(rng);
            redraws += 1;
        }
        trace!(redraws, "resampled against previous word");
    }

    info!(letters = word.len(), "round started");
    debug!(%word, "secret word");
    RoundState::new(word.clone())
}

/// Applies one guess. Ended rounds, non-letters and repeats leave the state untouched.
pub fn guess_letter(state: &RoundState, letter: char) -> RoundState {
    let Some(letter) = normalize_letter(letter) else {
        trace!(?letter, "ignored non-letter guess");
        return state.clone();
    };

    if state.status.is_over() || state.guesses.contains(&letter) {
        trace!(%letter, status = ?state.status, "ignored guess");
        return state.clone();
    }

    let mut next = state.clone();
    next.guesses.push(letter);

    let hit = next.word.contains(letter);
    if !hit {
        next.errors = (next.errors + 1).min(MAX_ERRORS);
    }

    next.status = derive_status(&next.word, &next.guesses, next.errors);
    debug!(%letter, hit, errors = next.errors, status = ?next.status, "guess applied");

    if next.status.is_over() {
        info!(status = ?next.status, guesses = next.guesses.len(), "round resolved");
    }

    next
}

/// Uppercases `letter` and keeps it only if the result is a single A-Z letter
fn normalize_letter(letter: char) -> Option<char> {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}

/// Won beats Lost so a fully revealed word always counts as a win.
fn derive_status(word: &Word, guesses: &[char], errors: u8) -> RoundStatus {
    if word.letters().all(|c| guesses.contains(&c)) {
        RoundStatus::Won
    } else if errors >= MAX_ERRORS {
        RoundStatus::Lost
    } else {
        RoundStatus::InProgress
    }
}
