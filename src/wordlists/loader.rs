//! Word list loading utilities
//!
//! Loads word lists from JSON documents or plain text files, or converts the
//! embedded constants.

use crate::core::SecretWord;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised while loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse word list {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Accepted JSON layouts: `{"words": [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum WordDocument {
    Object { words: Vec<String> },
    Array(Vec<String>),
}

impl WordDocument {
    fn into_words(self) -> Vec<String> {
        match self {
            Self::Object { words } | Self::Array(words) => words,
        }
    }
}

/// Load words from a file
///
/// Files ending in `.json` are parsed as a JSON document, anything else is
/// read as one word per line with `#` comments. Invalid entries are skipped.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SecretWord>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        parse_json(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        parse_lines(&content)
    };

    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse a JSON word document
///
/// # Errors
///
/// Returns the `serde_json` error for malformed documents.
pub fn parse_json(content: &str) -> Result<Vec<SecretWord>, serde_json::Error> {
    let document: WordDocument = serde_json::from_str(content)?;
    Ok(validated(document.into_words()))
}

/// Parse a plain text word list, one word per line
#[must_use]
pub fn parse_lines(content: &str) -> Vec<SecretWord> {
    validated(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Convert embedded string slice to a secret word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    validated(slice.iter().copied())
}

fn validated<I, S>(entries: I) -> Vec<SecretWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| match SecretWord::new(entry.as_ref()) {
            Ok(word) => Some(word),
            Err(err) => {
                tracing::warn!(entry = entry.as_ref(), %err, "skipping word list entry");
                None
            }
        })
        .collect()
}
