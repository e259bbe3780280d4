//! Applies a [`Stem`] implementation to every non-keyword token.

use crate::{
    filter::{TokenFilter, Verdict},
    stemmer::{ConfigError, Stem, StemmerKind},
    token::Token,
};
use std::{borrow::Cow, collections::HashMap, fmt, sync::Arc};
use tracing::{debug, warn};

/// Replaces each token's text with its stem, leaving keyword tokens alone.
///
/// A stem that is a prefix of the token shortens the buffer in place; any
/// other stem is copied into the existing buffer. Tokens never grow: a stem
/// with more chars than the token is discarded and the token kept as is.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stem>,
}

enum Edit {
    Truncate(usize),
    Replace(String),
    Reject(usize),
}

impl StemFilter {
    pub fn new(stemmer: Arc<dyn Stem>) -> Self {
        Self { stemmer }
    }

    pub fn light() -> Self {
        Self::new(Arc::new(crate::RuleStemmer::light()))
    }

    pub fn aggressive() -> Self {
        Self::new(Arc::new(crate::RuleStemmer::aggressive()))
    }

    pub fn stemmer(&self) -> &Arc<dyn Stem> {
        &self.stemmer
    }
}

impl TokenFilter for StemFilter {
    fn name(&self) -> &'static str {
        "stem"
    }

    #[inline]
    fn needs_apply(&self, token: &Token) -> bool {
        !token.keyword
    }

    fn apply(&self, token: &mut Token) -> Verdict {
        let edit = match self.stemmer.stem(&token.text) {
            Cow::Borrowed(stem) if stem.as_ptr() == token.text.as_ptr() => Edit::Truncate(stem.len()),
            stem if stem.chars().count() > token.text.chars().count() => {
                Edit::Reject(stem.chars().count())
            }
            stem => Edit::Replace(stem.into_owned()),
        };
        match edit {
            Edit::Truncate(len) => token.text.truncate(len),
            Edit::Replace(text) => {
                token.text.clear();
                token.text.push_str(&text);
            }
            Edit::Reject(stem_chars) => warn!(
                stemmer = self.stemmer.name(),
                token = %token.text,
                stem_chars,
                "stem longer than token, keeping token"
            ),
        }
        Verdict::Keep
    }
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StemFilter").field(&self.stemmer.name()).finish()
    }
}

/// Builds [`StemFilter`]s from string key/value configuration.
///
/// Recognised key: `implementation` (`Light`, `Aggressive`/`Agressive`,
/// `Helebrand`), defaulting to `Light`. Any other key is rejected.
#[derive(Clone)]
pub struct StemFilterFactory {
    kind: StemmerKind,
    external: Option<Arc<dyn Stem>>,
}

impl StemFilterFactory {
    pub const IMPLEMENTATION: &'static str = "implementation";

    pub fn from_args(mut args: HashMap<String, String>) -> Result<Self, ConfigError> {
        let kind = match args.remove(Self::IMPLEMENTATION) {
            Some(name) => name.parse()?,
            None => StemmerKind::default(),
        };
        if !args.is_empty() {
            let mut unknown: Vec<String> = args.into_keys().collect();
            unknown.sort_unstable();
            return Err(ConfigError::UnknownParameters(unknown));
        }
        debug!(kind = kind.name(), "configured stem filter factory");
        Ok(Self {
            kind,
            external: None,
        })
    }

    /// Implementation used when the configured variant is not built in.
    pub fn with_external(mut self, stemmer: Arc<dyn Stem>) -> Self {
        self.external = Some(stemmer);
        self
    }

    pub fn kind(&self) -> StemmerKind {
        self.kind
    }

    pub fn create(&self) -> Result<StemFilter, ConfigError> {
        self.kind
            .resolve(self.external.clone())
            .map(StemFilter::new)
    }
}

impl fmt::Debug for StemFilterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilterFactory")
            .field("kind", &self.kind)
            .field("external", &self.external.as_ref().map(|s| s.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterExt;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn stem_all(filter: StemFilter, tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().filter_tokens(filter).map(|t| t.text).collect()
    }

    #[test]
    fn keyword_tokens_are_not_stemmed() {
        let upstream = vec![
            Token::new("hradech", 0, 7),
            Token::new("pánové", 8, 15).with_keyword(true),
            Token::new("ženami", 16, 23),
        ];
        assert_eq!(
            stem_all(StemFilter::light(), upstream),
            ["hrad", "pánové", "žen"]
        );
    }

    #[test]
    fn prefix_stems_truncate_in_place() {
        let mut token = Token::new("hradech", 0, 7);
        let before = token.text.as_ptr();
        StemFilter::light().apply(&mut token);
        assert_eq!(token.text, "hrad");
        assert_eq!(token.text.as_ptr(), before);
    }

    struct Rewriter(fn(&str) -> String);

    impl Stem for Rewriter {
        fn name(&self) -> &'static str {
            "rewriter"
        }

        fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
            Cow::Owned((self.0)(word))
        }
    }

    #[test]
    fn other_stems_replace_the_text_in_place() {
        let filter = StemFilter::new(Arc::new(Rewriter(|w| w.replace('á', "a"))));
        let mut token = Token::new("pánech", 0, 7);
        let capacity = token.text.capacity();
        filter.apply(&mut token);
        assert_eq!(token.text, "panech");
        assert_eq!(token.text.capacity(), capacity);
    }

    #[test]
    fn longer_stems_never_grow_the_token() {
        let filter = StemFilter::new(Arc::new(Rewriter(|w| format!("{w}xyz"))));
        let mut token = Token::new("pán", 0, 4);
        let capacity = token.text.capacity();
        assert_eq!(filter.apply(&mut token), Verdict::Keep);
        assert_eq!(token.text, "pán");
        assert!(token.text.chars().count() <= 3);
        assert_eq!(token.text.capacity(), capacity);
        assert_eq!(stem_all(filter, vec![Token::new("ruč", 0, 4)]), ["ruč"]);
    }

    #[test]
    fn factory_defaults_to_light() {
        let factory = StemFilterFactory::from_args(HashMap::new()).unwrap();
        assert_eq!(factory.kind(), StemmerKind::Light);
        assert_eq!(factory.create().unwrap().stemmer().name(), "light");
    }

    #[test]
    fn factory_reads_implementation() {
        let factory =
            StemFilterFactory::from_args(args(&[("implementation", "Agressive")])).unwrap();
        assert_eq!(factory.kind(), StemmerKind::Aggressive);
        let filter = factory.create().unwrap();
        assert_eq!(stem_all(filter, vec![Token::new("deska", 0, 5)]), ["des"]);
    }

    #[test]
    fn factory_rejects_unknown_parameters() {
        let err = StemFilterFactory::from_args(args(&[
            ("implementation", "Light"),
            ("stemmer", "x"),
            ("lang", "cs"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownParameters(vec!["lang".into(), "stemmer".into()])
        );
        assert_eq!(err.to_string(), r#"unknown parameters: ["lang", "stemmer"]"#);
    }

    #[test]
    fn factory_rejects_unknown_implementation() {
        assert_eq!(
            StemFilterFactory::from_args(args(&[("implementation", "Snowball")])).unwrap_err(),
            ConfigError::UnknownStemmer("Snowball".into())
        );
    }

    #[test]
    fn factory_helebrand_needs_external() {
        let factory =
            StemFilterFactory::from_args(args(&[("implementation", "Helebrand")])).unwrap();
        assert_eq!(
            factory.create().unwrap_err(),
            ConfigError::MissingExternal("helebrand")
        );
        let filter = factory
            .with_external(Arc::new(crate::RuleStemmer::aggressive()))
            .create()
            .unwrap();
        assert_eq!(filter.stemmer().name(), "aggressive");
    }
}
