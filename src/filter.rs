//! Token filter abstraction.
//!
//! A [`TokenFilter`] edits one [`Token`] in place or asks for it to be
//! removed. [`Filtered`] pulls tokens from upstream through a filter, and
//! [`FilterChain`] runs a dynamic list of filters as one.

pub mod keyword_marker;
pub mod lower_case;
pub mod stem;
pub mod stop;

use crate::token::Token;
use smallvec::SmallVec;
use std::{fmt, iter::FusedIterator, sync::Arc};

/// What happens to a token after a filter saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Drop,
}

/// A single token-level step.
pub trait TokenFilter: Send + Sync {
    /// Human-readable name – used for logging.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips `apply` for this token.
    #[inline]
    fn needs_apply(&self, _token: &Token) -> bool {
        true
    }

    fn apply(&self, token: &mut Token) -> Verdict;
}

impl<F: TokenFilter + ?Sized> TokenFilter for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn needs_apply(&self, token: &Token) -> bool {
        (**self).needs_apply(token)
    }

    #[inline]
    fn apply(&self, token: &mut Token) -> Verdict {
        (**self).apply(token)
    }
}

impl<F: TokenFilter + ?Sized> TokenFilter for Arc<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn needs_apply(&self, token: &Token) -> bool {
        (**self).needs_apply(token)
    }

    #[inline]
    fn apply(&self, token: &mut Token) -> Verdict {
        (**self).apply(token)
    }
}

/// Pulls tokens from `upstream` through `filter`.
///
/// Position increments of dropped tokens are added to the next kept token.
/// Upstream exhaustion ends the stream.
pub struct Filtered<I, F> {
    upstream: I,
    filter: F,
}

impl<I, F> Filtered<I, F>
where
    I: Iterator<Item = Token>,
    F: TokenFilter,
{
    pub fn new(upstream: I, filter: F) -> Self {
        Self { upstream, filter }
    }

    pub fn into_inner(self) -> I {
        self.upstream
    }
}

impl<I, F> Iterator for Filtered<I, F>
where
    I: Iterator<Item = Token>,
    F: TokenFilter,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut skipped = 0u32;
        loop {
            let mut token = self.upstream.next()?;
            if self.filter.needs_apply(&token) && self.filter.apply(&mut token) == Verdict::Drop {
                skipped = skipped.saturating_add(token.position_increment);
                continue;
            }
            token.position_increment = token.position_increment.saturating_add(skipped);
            return Some(token);
        }
    }
}

impl<I, F> FusedIterator for Filtered<I, F>
where
    I: FusedIterator<Item = Token>,
    F: TokenFilter,
{
}

/// Extension for wrapping any token iterator in a filter.
pub trait FilterExt: Iterator<Item = Token> + Sized {
    fn filter_tokens<F: TokenFilter>(self, filter: F) -> Filtered<Self, F> {
        Filtered::new(self, filter)
    }
}

impl<I: Iterator<Item = Token>> FilterExt for I {}

/// Dynamic, ordered list of filters applied as one.
///
/// The first filter that drops a token stops the chain for that token.
#[derive(Default, Clone)]
pub struct FilterChain {
    pub(crate) filters: SmallVec<[Arc<dyn TokenFilter>; 6]>,
}

impl FilterChain {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: TokenFilter + 'static>(mut self, filter: T) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn push_arc(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|f| f.name())
    }
}

impl TokenFilter for FilterChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn apply(&self, token: &mut Token) -> Verdict {
        for filter in &self.filters {
            if filter.needs_apply(token) && filter.apply(token) == Verdict::Drop {
                return Verdict::Drop;
            }
        }
        Verdict::Keep
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
