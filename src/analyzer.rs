//! Ready-made Czech analysis pipeline.
//!
//! `tokenize → lower_case → stop → keyword_marker → stem`
//!
//! Every dependency (stemmer variant, stopwords, exclusions) is resolved once
//! in [`AnalyzerBuilder::build`]. The resulting [`Analyzer`] is immutable and
//! can be shared between threads.

use crate::{
    filter::{
        FilterChain, Filtered, keyword_marker::KeywordMarker, lower_case::LowerCase,
        stem::StemFilter, stop::StopFilter,
    },
    stemmer::{ConfigError, RuleStemmer, Stem, StemmerKind},
    stopwords::{StopwordError, StopwordSet, init_default_stopwords},
    token::Token,
    tokenizer::{TokenizerKind, Tokens},
};
use std::{fmt, sync::Arc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("stemmer error: {0}")]
    Config(#[from] ConfigError),
    #[error("stopword error: {0}")]
    Stopwords(#[from] StopwordError),
}

/// Stopword source for an analyzer.
#[derive(Debug, Clone, Default)]
pub enum Stopwords {
    #[default]
    None,
    /// The embedded Czech list.
    Default,
    Custom(Arc<StopwordSet>),
}

/// Token stream produced by [`Analyzer::analyze`].
pub type Analysis<'a> = Filtered<Tokens<'a>, &'a FilterChain>;

pub struct Analyzer {
    tokenizer: TokenizerKind,
    kind: StemmerKind,
    chain: FilterChain,
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Standard tokenizer, no stopwords, light stemming.
    pub fn light() -> Self {
        Self::plain(StemmerKind::Light, RuleStemmer::light())
    }

    /// Standard tokenizer, no stopwords, aggressive stemming.
    pub fn aggressive() -> Self {
        Self::plain(StemmerKind::Aggressive, RuleStemmer::aggressive())
    }

    fn plain(kind: StemmerKind, stemmer: RuleStemmer) -> Self {
        Self {
            tokenizer: TokenizerKind::Standard,
            kind,
            chain: FilterChain::new()
                .push(LowerCase)
                .push(StemFilter::new(Arc::new(stemmer))),
        }
    }

    /// Lazily analyze `text`.
    ///
    /// ```
    /// use cestem::Analyzer;
    ///
    /// let analyzer = Analyzer::light();
    /// let terms: Vec<String> = analyzer.analyze("Pánové na hradech").map(|t| t.text).collect();
    /// assert_eq!(terms, ["pán", "na", "hrad"]);
    /// ```
    pub fn analyze<'a>(&'a self, text: &'a str) -> Analysis<'a> {
        Filtered::new(self.tokenizer.tokenize(text), &self.chain)
    }

    /// Collect the term texts of [`analyze`](Self::analyze).
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token: Token| token.text).collect()
    }

    pub fn stemmer_kind(&self) -> StemmerKind {
        self.kind
    }

    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }

    pub fn filters(&self) -> &FilterChain {
        &self.chain
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer)
            .field("stemmer", &self.kind)
            .field("filters", &self.chain)
            .finish()
    }
}

#[derive(Default)]
pub struct AnalyzerBuilder {
    kind: StemmerKind,
    tokenizer: TokenizerKind,
    stopwords: Stopwords,
    exclusions: Vec<String>,
    external: Option<Arc<dyn Stem>>,
}

impl AnalyzerBuilder {
    pub fn stemmer(mut self, kind: StemmerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn default_stopwords(self) -> Self {
        self.stopwords(Stopwords::Default)
    }

    pub fn stopword_set(self, set: StopwordSet) -> Self {
        self.stopwords(Stopwords::Custom(Arc::new(set)))
    }

    /// Terms that are never stemmed. Matched after lowercasing.
    pub fn stem_exclusions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(words.into_iter().map(Into::into));
        self
    }

    /// Implementation for variants not built into this crate.
    pub fn external_stemmer(mut self, stemmer: Arc<dyn Stem>) -> Self {
        self.external = Some(stemmer);
        self
    }

    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let stemmer = self.kind.resolve(self.external)?;

        let mut chain = FilterChain::new().push(LowerCase);
        let stopwords = match self.stopwords {
            Stopwords::None => None,
            Stopwords::Default => Some(init_default_stopwords()?),
            Stopwords::Custom(set) => Some(set),
        };
        if let Some(set) = stopwords.filter(|set| !set.is_empty()) {
            chain = chain.push(StopFilter::new(set));
        }
        if !self.exclusions.is_empty() {
            let exclusions = self.exclusions.iter().map(|w| w.to_lowercase());
            chain = chain.push(KeywordMarker::new(exclusions));
        }
        chain = chain.push(StemFilter::new(stemmer));

        debug!(
            stemmer = self.kind.name(),
            tokenizer = ?self.tokenizer,
            filters = ?chain,
            "built analyzer"
        );
        Ok(Analyzer {
            tokenizer: self.tokenizer,
            kind: self.kind,
            chain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_light_without_stopwords() {
        let analyzer = Analyzer::builder().build().unwrap();
        assert_eq!(analyzer.stemmer_kind(), StemmerKind::Light);
        assert_eq!(analyzer.tokenizer(), TokenizerKind::Standard);
        assert_eq!(
            analyzer.filters().names().collect::<Vec<_>>(),
            ["lower_case", "stem"]
        );
    }

    #[test]
    fn full_chain_order() {
        let analyzer = Analyzer::builder()
            .default_stopwords()
            .stem_exclusions(["Praha"])
            .build()
            .unwrap();
        assert_eq!(
            analyzer.filters().names().collect::<Vec<_>>(),
            ["lower_case", "stop", "keyword_marker", "stem"]
        );
    }

    #[test]
    fn empty_custom_stopwords_add_no_filter() {
        let analyzer = Analyzer::builder()
            .stopword_set(StopwordSet::default())
            .build()
            .unwrap();
        assert_eq!(analyzer.filters().len(), 2);
    }

    #[test]
    fn helebrand_without_implementation_fails() {
        let err = Analyzer::builder()
            .stemmer(StemmerKind::Helebrand)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::Config(ConfigError::MissingExternal("helebrand"))
        ));
    }

    #[test]
    fn presets_match_builder() {
        let text = "Čeští kluci a děvčata v Praze";
        let built = Analyzer::builder()
            .stemmer(StemmerKind::Aggressive)
            .build()
            .unwrap();
        assert_eq!(Analyzer::aggressive().terms(text), built.terms(text));
        assert_eq!(
            Analyzer::light().terms(text),
            Analyzer::builder().build().unwrap().terms(text)
        );
    }

    #[test]
    fn analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }
}
