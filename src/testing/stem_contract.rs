use crate::{rule::engine::MIN_WORD_LEN, stemmer::Stem};
use std::borrow::Cow;

/// Trait that stemmers implement to opt into the universal test suite.
pub trait StemTestConfig: Stem {
    /// Whether every stem is a prefix of its input.
    fn truncates_only(&self) -> bool {
        true
    }

    /// General samples (may or may not be stemmed).
    fn samples(&self) -> &'static [&'static str] {
        &["pán", "hradech", "ženami", "Praha", "čeští", "123", "e", ""]
    }

    /// Inputs the stemmer must return untouched.
    fn should_pass_through(&self) -> &'static [&'static str] {
        &["", "a", "ťu", "hrad"]
    }

    /// Known input/output pairs.
    fn should_stem(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stemmer satisfies the universal contracts:
///
/// 1. `never_lengthens` → output chars ≤ input chars (and a prefix, for truncating stemmers)
/// 2. `is_deterministic` → same input, same output
/// 3. `short_words_unchanged` → fewer than three chars pass through
/// 4. `zero_copy_when_unchanged` → pass-through samples are borrowed
/// 5. `stems_known_pairs` → configured pairs hold
/// 6. `no_panic_on_mixed_scripts` → survives arbitrary real-world input
#[macro_export]
macro_rules! assert_stem_contract {
    ($stemmer:expr) => {
        let stemmer = &$stemmer;
        $crate::testing::stem_contract::never_lengthens(stemmer);
        $crate::testing::stem_contract::is_deterministic(stemmer);
        $crate::testing::stem_contract::short_words_unchanged(stemmer);
        $crate::testing::stem_contract::zero_copy_when_unchanged(stemmer);
        $crate::testing::stem_contract::stems_known_pairs(stemmer);
        $crate::testing::stem_contract::no_panic_on_mixed_scripts(stemmer);
    };
}

const MIXED: &[&str] = &[
    "Příliš žluťoučký kůň úpěl ďábelské ódy",
    "c\u{30C}eský",
    "東京タワー",
    "ΑΘΗΝΑ",
    "מִבְחָן",
    "🦀🦀🦀",
    "\u{0}\u{7f}\u{200b}",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaech",
];

fn all_inputs<S: StemTestConfig + ?Sized>(stemmer: &S) -> impl Iterator<Item = &'static str> {
    stemmer
        .samples()
        .iter()
        .chain(stemmer.should_pass_through())
        .chain(stemmer.should_stem().iter().map(|(input, _)| input))
        .chain(MIXED)
        .copied()
}

pub fn never_lengthens<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for input in all_inputs(stemmer) {
        let stem = stemmer.stem(input);
        assert!(
            stem.chars().count() <= input.chars().count(),
            "{}: `{input}` grew into `{stem}`",
            stemmer.name()
        );
        if stemmer.truncates_only() {
            assert!(
                input.starts_with(stem.as_ref()),
                "{}: `{stem}` is not a prefix of `{input}`",
                stemmer.name()
            );
        }
    }
}

pub fn is_deterministic<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for input in all_inputs(stemmer) {
        assert_eq!(stemmer.stem(input), stemmer.stem(input), "{}", stemmer.name());
    }
}

pub fn short_words_unchanged<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for input in ["", "a", "ať", "ze", "ci", "ů"] {
        assert!(input.chars().count() < MIN_WORD_LEN);
        assert_eq!(stemmer.stem(input), input, "{}", stemmer.name());
    }
}

pub fn zero_copy_when_unchanged<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for &input in stemmer.should_pass_through() {
        let stem = stemmer.stem(input);
        assert_eq!(stem, input, "{}", stemmer.name());
        assert!(
            matches!(stem, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
            "{}: zero-copy violated on pass-through `{input}`",
            stemmer.name()
        );
    }
}

pub fn stems_known_pairs<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for &(input, expected) in stemmer.should_stem() {
        assert_eq!(stemmer.stem(input), expected, "{}: `{input}`", stemmer.name());
    }
}

pub fn no_panic_on_mixed_scripts<S: StemTestConfig + ?Sized>(stemmer: &S) {
    for input in MIXED {
        let _ = stemmer.stem(input);
        for (i, _) in input.char_indices() {
            let _ = stemmer.stem(&input[i..]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RuleStemmer, rule::RuleTable};

    impl StemTestConfig for RuleStemmer {
        fn should_stem(&self) -> &'static [(&'static str, &'static str)] {
            let table: &RuleTable = self.table();
            match table.name {
                "light" => &[
                    ("hradech", "hrad"),
                    ("pánové", "pán"),
                    ("ženami", "žen"),
                    ("čeští", "češt"),
                ],
                _ => &[
                    ("hradech", "hrad"),
                    ("deska", "des"),
                    ("kluci", "klu"),
                    ("čeští", "češ"),
                ],
            }
        }
    }

    #[test]
    fn light_satisfies_contract() {
        assert_stem_contract!(RuleStemmer::light());
    }

    #[test]
    fn aggressive_satisfies_contract() {
        assert_stem_contract!(RuleStemmer::aggressive());
    }
}
