//! Light and aggressive suffix-stripping stemmers for Czech, plus the token
//! pipeline pieces needed to run them inside a search analyzer.
//!
//! ```
//! use cestem::{Analyzer, RuleStemmer};
//!
//! assert_eq!(RuleStemmer::light().stem_str("hradech"), "hrad");
//! assert_eq!(Analyzer::aggressive().terms("Čeští kluci"), ["češ", "klu"]);
//! ```

pub mod analyzer;
pub mod filter;
pub mod rule;
pub mod stemmer;
pub mod stopwords;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub mod testing;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, Stopwords};
pub use filter::keyword_marker::KeywordMarker;
pub use filter::lower_case::LowerCase;
pub use filter::stem::{StemFilter, StemFilterFactory};
pub use filter::stop::StopFilter;
pub use filter::{FilterChain, FilterExt, Filtered, TokenFilter, Verdict};
pub use rule::{AGGRESSIVE, LIGHT, RuleTable};
pub use stemmer::{ConfigError, RuleStemmer, Stem, StemmerKind};
pub use stopwords::{StopwordError, StopwordSet, default_stopwords, init_default_stopwords};
pub use token::Token;
pub use tokenizer::{KeywordTokenizer, StandardTokenizer, TokenizerKind};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
