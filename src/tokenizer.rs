//! Tokenizers turning raw text into [`Token`]s.

use crate::token::Token;
use std::iter::FusedIterator;

/// Longer alphanumeric runs are dropped by [`StandardTokenizer`].
pub const MAX_TOKEN_LEN: usize = 255;

/// Which tokenizer an analyzer starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    #[default]
    Standard,
    /// The whole input is one token.
    Keyword,
}

impl TokenizerKind {
    pub fn tokenize(self, text: &str) -> Tokens<'_> {
        match self {
            Self::Standard => Tokens::Standard(StandardTokenizer::new(text)),
            Self::Keyword => Tokens::Keyword(KeywordTokenizer::new(text)),
        }
    }
}

/// Token stream of either tokenizer.
pub enum Tokens<'a> {
    Standard(StandardTokenizer<'a>),
    Keyword(KeywordTokenizer<'a>),
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        match self {
            Self::Standard(tokens) => tokens.next(),
            Self::Keyword(tokens) => tokens.next(),
        }
    }
}

impl FusedIterator for Tokens<'_> {}

// ───────────────────────────────────────────────────────────────
//  Standard
// ───────────────────────────────────────────────────────────────

/// Splits on everything that is not a letter or digit.
///
/// A run keeps trailing combining marks, so decomposed `c\u{30C}` stays one
/// word. Runs longer than [`MAX_TOKEN_LEN`] chars are skipped and the next
/// token's position increment accounts for them.
pub struct StandardTokenizer<'a> {
    text: &'a str,
    offset: usize,
    skipped: u32,
}

impl<'a> StandardTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            skipped: 0,
        }
    }
}

#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

impl Iterator for StandardTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let rest = &self.text[self.offset..];
            let Some(lead) = rest.find(char::is_alphanumeric) else {
                self.offset = self.text.len();
                return None;
            };
            let start = self.offset + lead;
            let end = self.text[start..]
                .find(|c: char| !c.is_alphanumeric() && !is_combining_mark(c))
                .map_or(self.text.len(), |len| start + len);
            self.offset = end;

            let word = &self.text[start..end];
            if word.chars().count() > MAX_TOKEN_LEN {
                self.skipped += 1;
                continue;
            }
            let increment = 1 + std::mem::take(&mut self.skipped);
            return Some(Token::new(word, start, end).with_position_increment(increment));
        }
    }
}

impl FusedIterator for StandardTokenizer<'_> {}

// ───────────────────────────────────────────────────────────────
//  Keyword
// ───────────────────────────────────────────────────────────────

/// Emits the entire input, empty or not, exactly once.
pub struct KeywordTokenizer<'a> {
    text: Option<&'a str>,
}

impl<'a> KeywordTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text: Some(text) }
    }
}

impl Iterator for KeywordTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.text.take().map(|text| Token::new(text, 0, text.len()))
    }
}

impl FusedIterator for KeywordTokenizer<'_> {}
