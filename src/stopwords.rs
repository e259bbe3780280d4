//! Stopword sets and the embedded default Czech list.
//!
//! The default set is parsed once by [`init_default_stopwords`] and shared
//! afterwards. Reading it before initialization is an error instead of a lazy
//! load, so a broken list surfaces where the pipeline is built.

use std::{
    collections::HashSet,
    io::{self, BufRead},
    sync::{Arc, OnceLock},
};
use thiserror::Error;
use tracing::debug;

/// Embedded default list: one word per line, `#` comments.
pub const DEFAULT_STOPWORDS: &str = include_str!("../resources/stopwords.txt");

pub const DEFAULT_COMMENT: &str = "#";

#[derive(Debug, Error)]
pub enum StopwordError {
    #[error("failed to read stopwords: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: stopword `{entry}` contains whitespace")]
    InvalidEntry { line: usize, entry: String },

    #[error("default stopwords requested before `init_default_stopwords`")]
    NotInitialized,
}

/// An immutable set of words removed from token streams.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<Box<str>>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().into()).collect(),
        }
    }

    /// Parse a word list: lines are trimmed, blank lines and lines starting
    /// with `comment` are skipped, anything else is one word.
    pub fn from_reader<R: BufRead>(reader: R, comment: &str) -> Result<Self, StopwordError> {
        let mut words = HashSet::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || (!comment.is_empty() && entry.starts_with(comment)) {
                continue;
            }
            if entry.contains(char::is_whitespace) {
                return Err(StopwordError::InvalidEntry {
                    line: index + 1,
                    entry: entry.to_string(),
                });
            }
            words.insert(entry.into());
        }
        Ok(Self { words })
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }
}

// ───────────────────────────────────────────────────────────────
//  Process-wide default set
// ───────────────────────────────────────────────────────────────

static DEFAULT_SET: OnceLock<Arc<StopwordSet>> = OnceLock::new();

/// Parse the embedded list into the shared default set. Idempotent.
pub fn init_default_stopwords() -> Result<Arc<StopwordSet>, StopwordError> {
    init_in(&DEFAULT_SET)
}

/// The shared default set, once [`init_default_stopwords`] has run.
pub fn default_stopwords() -> Result<Arc<StopwordSet>, StopwordError> {
    get_in(&DEFAULT_SET)
}

fn init_in(cell: &OnceLock<Arc<StopwordSet>>) -> Result<Arc<StopwordSet>, StopwordError> {
    if let Some(set) = cell.get() {
        return Ok(Arc::clone(set));
    }
    let parsed = StopwordSet::from_reader(DEFAULT_STOPWORDS.as_bytes(), DEFAULT_COMMENT)?;
    debug!(words = parsed.len(), "loaded default stopwords");
    Ok(Arc::clone(cell.get_or_init(|| Arc::new(parsed))))
}

fn get_in(cell: &OnceLock<Arc<StopwordSet>>) -> Result<Arc<StopwordSet>, StopwordError> {
    cell.get().cloned().ok_or(StopwordError::NotInitialized)
}
