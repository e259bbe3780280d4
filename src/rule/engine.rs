//! The rule engine shared by every table.
//!
//! The working form is rewritten pass by pass, but the emitted stem is always
//! the prefix of the *original* word with the working form's final length.
//! Tokens are therefore only ever truncated, never rewritten or grown.

use super::{RepairRule, RulePass, RuleTable};
use smallvec::SmallVec;

/// Words with fewer chars than this are returned unchanged.
pub const MIN_WORD_LEN: usize = 3;

// Czech words rarely exceed this; longer ones spill to the heap.
type WorkingForm = SmallVec<[char; 32]>;

/// Stem `word` with `table`, returning a prefix of `word`.
#[inline]
pub fn apply<'a>(word: &'a str, table: &RuleTable) -> &'a str {
    prefix(word, stem_len(word, table))
}

/// Length in chars of the stem `table` produces for `word`.
pub fn stem_len(word: &str, table: &RuleTable) -> usize {
    let mut form: WorkingForm = word.chars().collect();
    let original = form.len();
    if original < MIN_WORD_LEN {
        return original;
    }

    for pass in table.passes {
        apply_pass(&mut form, pass, table.repairs);
    }

    debug_assert!(form.len() <= original);
    form.len()
}

/// Apply the first eligible rule of `pass`. Returns whether one fired.
fn apply_pass(form: &mut WorkingForm, pass: &RulePass, repairs: &[RepairRule]) -> bool {
    let Some(rule) = pass.rules.iter().find(|rule| rule.matches(form.as_slice())) else {
        return false;
    };
    form.truncate(form.len() - rule.suffix_len());
    form.extend(rule.replacement.chars());
    if rule.repair {
        repair(form, repairs);
    }
    true
}

/// Run every repair rule once, in order. A stem none of them touched loses
/// its trailing softening vowel instead.
fn repair(form: &mut WorkingForm, repairs: &[RepairRule]) {
    let mut fired = false;
    for rule in repairs {
        if rule.matches(form.as_slice()) {
            form.truncate(form.len() - rule.pattern_len());
            form.extend(rule.replacement.chars());
            fired = true;
        }
    }
    if !fired {
        form.pop();
    }
}

/// First `chars` chars of `word`.
#[inline]
fn prefix(word: &str, chars: usize) -> &str {
    match word.char_indices().nth(chars) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}
