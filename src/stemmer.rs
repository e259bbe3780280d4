//! The single-word stemming capability and its variants.
//!
//! Light and Aggressive are the same [`RuleStemmer`] bound to different
//! [`RuleTable`]s. Helebrand only shares the [`Stem`] contract: its
//! implementation lives outside this crate and is handed in at construction.

use crate::rule::{AGGRESSIVE, LIGHT, RuleTable, engine};
use phf::phf_map;
use std::{borrow::Cow, fmt, str::FromStr, sync::Arc};
use thiserror::Error;
use tracing::debug;

/// Errors raised while choosing or configuring a stemmer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown stemmer implementation `{0}`")]
    UnknownStemmer(String),

    #[error("stemmer `{0}` is provided externally and none was supplied")]
    MissingExternal(&'static str),

    #[error("unknown parameters: {0:?}")]
    UnknownParameters(Vec<String>),
}

/// `stem(word) -> stem`: pure, total, deterministic.
pub trait Stem: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Postcondition: the result never has more chars than `word`.
    /// [`StemFilter`](crate::StemFilter) keeps the token unchanged when an
    /// implementation breaks it.
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// A suffix-rule stemmer bound to one immutable [`RuleTable`].
///
/// Stateless: share one instance between any number of threads.
///
/// ```
/// use cestem::RuleStemmer;
///
/// let light = RuleStemmer::light();
/// assert_eq!(light.stem_str("pánové"), "pán");
/// assert_eq!(RuleStemmer::aggressive().stem_str("deska"), "des");
/// ```
#[derive(Clone, Copy)]
pub struct RuleStemmer {
    table: &'static RuleTable,
}

impl RuleStemmer {
    pub const fn new(table: &'static RuleTable) -> Self {
        Self { table }
    }

    pub const fn light() -> Self {
        Self::new(&LIGHT)
    }

    pub const fn aggressive() -> Self {
        Self::new(&AGGRESSIVE)
    }

    #[inline]
    pub fn table(&self) -> &'static RuleTable {
        self.table
    }

    /// Zero-copy stem: always a prefix of `word`.
    #[inline]
    pub fn stem_str<'a>(&self, word: &'a str) -> &'a str {
        engine::apply(word, self.table)
    }

    /// Stem length in chars.
    #[inline]
    pub fn stem_len(&self, word: &str) -> usize {
        engine::stem_len(word, self.table)
    }
}

impl Stem for RuleStemmer {
    fn name(&self) -> &'static str {
        self.table.name
    }

    #[inline]
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.stem_str(word))
    }
}

impl fmt::Debug for RuleStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RuleStemmer").field(&self.table.name).finish()
    }
}

/// The closed set of stemmer variants a pipeline can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StemmerKind {
    #[default]
    Light,
    Aggressive,
    /// Rule-script stemmer supplied by the caller.
    Helebrand,
}

static STEMMER_NAMES: phf::Map<&'static str, StemmerKind> = phf_map! {
    "light" => StemmerKind::Light,
    "aggressive" => StemmerKind::Aggressive,
    "agressive" => StemmerKind::Aggressive,
    "helebrand" => StemmerKind::Helebrand,
};

impl StemmerKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Aggressive => "aggressive",
            Self::Helebrand => "helebrand",
        }
    }

    /// Built-in rule stemmer for this variant, if there is one.
    pub const fn builtin(&self) -> Option<RuleStemmer> {
        match self {
            Self::Light => Some(RuleStemmer::light()),
            Self::Aggressive => Some(RuleStemmer::aggressive()),
            Self::Helebrand => None,
        }
    }

    /// Resolve the variant to a shareable stemmer, once, at pipeline-build time.
    pub fn resolve(self, external: Option<Arc<dyn Stem>>) -> Result<Arc<dyn Stem>, ConfigError> {
        let stemmer: Arc<dyn Stem> = match (self.builtin(), external) {
            (Some(builtin), _) => Arc::new(builtin),
            (None, Some(external)) => external,
            (None, None) => return Err(ConfigError::MissingExternal(self.name())),
        };
        debug!(kind = self.name(), stemmer = stemmer.name(), "resolved stemmer");
        Ok(stemmer)
    }
}

impl FromStr for StemmerKind {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        STEMMER_NAMES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownStemmer(name.to_string()))
    }
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
