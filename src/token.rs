//! A term flowing through an analysis pipeline.

use std::fmt;

/// One term plus the attributes filters read and write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Protected from stemming.
    pub keyword: bool,
    /// Distance from the previous emitted token; `> 1` after removed tokens.
    pub position_increment: u32,
    /// Byte offsets of the term in the analyzed text.
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            keyword: false,
            position_increment: 1,
            start,
            end,
        }
    }

    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    pub fn with_position_increment(mut self, increment: u32) -> Self {
        self.position_increment = increment;
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
