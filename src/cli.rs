use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, instrument};

use crate::core::engine::Engine;
use crate::games::hangman::{HangmanGame, WordList, WordListError};
use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "forca")]
#[command(about = "🎩 Hangman in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play a round (the default when no subcommand is given)
    Play(PlayArgs),
    /// Print the word list and exit
    Words {
        /// JSON file with the words (array, or object with a "words" array)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Play(PlayArgs::default())
    }
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// JSON file with the words (array, or object with a "words" array)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Seed for the word draw, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Play(args) => play(args).await,
        Commands::Words { words } => {
            let list = load_words(words.as_deref())?;
            println!("📖 {} words:", list.len());
            for word in &list {
                println!("  • {word}");
            }
            Ok(())
        }
    }
}

/// The built-in enumeration unless a file is given
pub fn load_words(path: Option<&Path>) -> Result<WordList, WordListError> {
    match path {
        Some(path) => WordList::from_json_file(path),
        None => Ok(WordList::default()),
    }
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

#[instrument(skip_all)]
async fn play(args: PlayArgs) -> Result<()> {
    logging::init_tracing(args.log_file.as_deref())?;

    let words = load_words(args.words.as_deref()).context("failed to load word list")?;
    info!(count = words.len(), seeded = args.seed.is_some(), "starting game");

    let game = HangmanGame::new(words, seeded_rng(args.seed));

    let terminal = ratatui::init();
    let result = Engine::new(game).run(terminal).await;
    ratatui::restore();

    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["forca"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Commands::default());
    }

    #[test]
    fn play_flags() {
        let cli = Cli::try_parse_from([
            "forca",
            "play",
            "--words",
            "words.json",
            "--log-file",
            "forca.log",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Play(PlayArgs {
                words: Some(PathBuf::from("words.json")),
                log_file: Some(PathBuf::from("forca.log")),
                seed: Some(7),
            }))
        );
    }

    #[test]
    fn words_subcommand() {
        let cli = Cli::try_parse_from(["forca", "words", "-w", "mine.json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Words {
                words: Some(PathBuf::from("mine.json"))
            })
        );
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Cli::try_parse_from(["forca", "play", "--seed", "soon"]).is_err());
    }

    #[test]
    fn default_words_without_file() {
        assert_eq!(load_words(None).unwrap(), WordList::default());
    }

    #[test]
    fn same_seed_same_first_word() {
        let a = HangmanGame::new(WordList::default(), seeded_rng(Some(11)));
        let b = HangmanGame::new(WordList::default(), seeded_rng(Some(11)));
        assert_eq!(a.round(), b.round());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
