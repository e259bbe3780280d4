use crate::{
    filter::{TokenFilter, Verdict},
    token::Token,
};
use std::collections::HashSet;

/// Flags tokens from a fixed set as keywords so later stemming skips them.
#[derive(Debug, Default, Clone)]
pub struct KeywordMarker {
    keywords: HashSet<Box<str>>,
}

impl KeywordMarker {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords.into_iter().map(|k| k.as_ref().into()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl TokenFilter for KeywordMarker {
    fn name(&self) -> &'static str {
        "keyword_marker"
    }

    #[inline]
    fn needs_apply(&self, token: &Token) -> bool {
        !token.keyword && !self.keywords.is_empty()
    }

    fn apply(&self, token: &mut Token) -> Verdict {
        if self.keywords.contains(token.text.as_str()) {
            token.keyword = true;
        }
        Verdict::Keep
    }
}
