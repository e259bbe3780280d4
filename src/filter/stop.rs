use crate::{
    filter::{TokenFilter, Verdict},
    stopwords::StopwordSet,
    token::Token,
};
use std::sync::Arc;

/// Removes tokens found in a [`StopwordSet`].
pub struct StopFilter {
    words: Arc<StopwordSet>,
}

impl StopFilter {
    pub fn new(words: Arc<StopwordSet>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &StopwordSet {
        &self.words
    }
}

impl TokenFilter for StopFilter {
    fn name(&self) -> &'static str {
        "stop"
    }

    #[inline]
    fn needs_apply(&self, _token: &Token) -> bool {
        !self.words.is_empty()
    }

    fn apply(&self, token: &mut Token) -> Verdict {
        if self.words.contains(&token.text) {
            Verdict::Drop
        } else {
            Verdict::Keep
        }
    }
}
