use std::{fmt, fs, io, path::Path, path::PathBuf, str::FromStr};

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Built-in word enumeration used when no word file is supplied
pub const DEFAULT_WORDS: &[&str] = &[
    "REACT",
    "JAVASCRIPT",
    "COMPONENTE",
    "ESTADO",
    "PROJETO",
    "FUNCAO",
    "VERCEL",
    "GITHUB",
    "TESTE",
    "DEPLOY",
];

/// A non-empty word made only of the letters A-Z
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("word `{0}` must be non-empty and contain only the letters A-Z")]
pub struct ParseWordError(pub String);

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_uppercase();

        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ParseWordError(s.to_owned()));
        }

        Ok(Self(word))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error(transparent)]
    InvalidWord(#[from] ParseWordError),
    #[error("failed to read word list {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse word list {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Accepted layouts of a word file: a bare array or `{ "words": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum WordsFile {
    List(Vec<String>),
    Table { words: Vec<String> },
}

/// The fixed, ordered enumeration rounds draw their word from.
///
/// Always holds at least one word and never holds the same word twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Validates and uppercases every entry, keeping the first occurrence of duplicates.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<Word> = Vec::new();

        for raw in words {
            let word = raw.as_ref().parse::<Word>()?;
            if !list.contains(&word) {
                list.push(word);
            }
        }

        if list.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words: list })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, WordListError> {
        let contents = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_owned(),
            source,
        })?;

        let file: WordsFile =
            serde_json::from_str(&contents).map_err(|source| WordListError::Json {
                path: path.to_owned(),
                source,
            })?;

        let words = match file {
            WordsFile::List(words) | WordsFile::Table { words } => words,
        };

        let list = Self::new(words)?;
        debug!(path = %path.display(), count = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Uniform draw over the enumeration
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| Word((*w).to_owned())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("forca-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_words_are_valid() {
        let validated = WordList::new(DEFAULT_WORDS).unwrap();
        assert_eq!(validated, WordList::default());
        assert_eq!(WordList::default().len(), 10);
    }

    #[test]
    fn parse_uppercases_and_trims() {
        assert_eq!("  teste ".parse::<Word>().unwrap().as_str(), "TESTE");
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!("".parse::<Word>().is_err());
        assert!("   ".parse::<Word>().is_err());
        assert!("FUNÇÃO".parse::<Word>().is_err());
        assert!("TWO WORDS".parse::<Word>().is_err());
        assert!("R2D2".parse::<Word>().is_err());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let list = WordList::new(["deploy", "TESTE", "Deploy"]).unwrap();
        let words: Vec<&str> = list.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["DEPLOY", "TESTE"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(WordList::new(empty), Err(WordListError::Empty)));
    }

    #[test]
    fn invalid_entry_is_reported() {
        let err = WordList::new(["REACT", "not ok"]).unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord(ParseWordError(ref w)) if w == "not ok"));
    }

    #[test]
    fn choose_stays_in_list() {
        let list = WordList::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = list.choose(&mut rng);
            assert!(list.iter().any(|w| w == word));
        }
    }

    #[test]
    fn loads_bare_array() {
        let path = temp_file("array.json", r#"["rust", "cargo"]"#);
        let list = WordList::from_json_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let words: Vec<String> = list.iter().map(Word::to_string).collect();
        assert_eq!(words, vec!["RUST".to_owned(), "CARGO".to_owned()]);
    }

    #[test]
    fn loads_table() {
        let path = temp_file("table.json", r#"{ "words": ["tokio"] }"#);
        let list = WordList::from_json_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let path = temp_file("bad.json", "{ nope");
        let err = WordList::from_json_file(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, WordListError::Json { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = WordList::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }
}
