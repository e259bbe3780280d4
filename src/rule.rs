//! Suffix-rule data model shared by every rule table.
//!
//! A [`RuleTable`] is a list of [`RulePass`]es run in order over a *working
//! form* of the word. Each pass picks at most one [`SuffixRule`] (longest
//! suffix first, then declaration order), swaps the suffix for its
//! replacement and, when the rule asks for it, runs the table's
//! [`RepairRule`]s to undo palatalization left behind by the removed ending.
//!
//! Every constructor is a `const fn` and asserts that a replacement is never
//! longer than what it replaces, so a table that could lengthen a word does
//! not compile.

pub mod data;
pub mod engine;

pub use data::{AGGRESSIVE, LIGHT};

/// Number of Unicode scalar values in `s`, usable in const context.
pub(crate) const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut n = 0;
    while i < bytes.len() {
        // Count every byte that is not a UTF-8 continuation byte.
        if bytes[i] & 0xC0 != 0x80 {
            n += 1;
        }
        i += 1;
    }
    n
}

/// One `(suffix, min_root, replacement)` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    /// Characters matched at the end of the working form.
    pub suffix: &'static str,
    /// Characters that must remain once `suffix` is cut off.
    pub min_root: usize,
    /// Characters written in place of `suffix` (possibly empty).
    pub replacement: &'static str,
    /// Run the table's repair rules after this rule fires.
    pub repair: bool,
    suffix_len: usize,
}

impl SuffixRule {
    pub const fn new(
        suffix: &'static str,
        min_root: usize,
        replacement: &'static str,
        repair: bool,
    ) -> Self {
        let suffix_len = char_count(suffix);
        assert!(suffix_len > 0, "suffix rule with an empty suffix");
        assert!(
            char_count(replacement) <= suffix_len,
            "suffix rule replacement is longer than its suffix"
        );
        Self {
            suffix,
            min_root,
            replacement,
            repair,
            suffix_len,
        }
    }

    /// Suffix length in chars.
    #[inline(always)]
    pub const fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// `form` ends with the suffix and keeps at least `min_root` chars without it.
    #[inline]
    pub fn matches(&self, form: &[char]) -> bool {
        form.len() >= self.suffix_len + self.min_root && ends_with(form, self.suffix)
    }
}

/// Orthographic rewrite applied at the end of a freshly cut stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepairRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pattern_len: usize,
}

impl RepairRule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        let pattern_len = char_count(pattern);
        assert!(pattern_len > 0, "repair rule with an empty pattern");
        assert!(
            char_count(replacement) <= pattern_len,
            "repair rule replacement is longer than its pattern"
        );
        Self {
            pattern,
            replacement,
            pattern_len,
        }
    }

    #[inline(always)]
    pub const fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    #[inline]
    pub fn matches(&self, form: &[char]) -> bool {
        ends_with(form, self.pattern)
    }
}

/// One first-match scan over an ordered rule list.
#[derive(Clone, Copy, Debug)]
pub struct RulePass {
    pub name: &'static str,
    pub rules: &'static [SuffixRule],
}

/// A complete, immutable stemming configuration.
#[derive(Debug)]
pub struct RuleTable {
    pub name: &'static str,
    pub passes: &'static [RulePass],
    pub repairs: &'static [RepairRule],
}

impl RuleTable {
    /// Every suffix rule of every pass, in scan order.
    pub fn rules(&self) -> impl Iterator<Item = &'static SuffixRule> + '_ {
        self.passes.iter().flat_map(|pass| pass.rules.iter())
    }

    pub fn pass(&self, name: &str) -> Option<&'static RulePass> {
        self.passes.iter().find(|pass| pass.name == name)
    }
}

#[inline]
pub(crate) fn ends_with(form: &[char], suffix: &str) -> bool {
    let mut tail = form.iter().rev();
    suffix.chars().rev().all(|c| tail.next() == Some(&c))
}
