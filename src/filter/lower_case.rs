use crate::{
    filter::{TokenFilter, Verdict},
    token::Token,
};

/// Unicode lowercasing. Tokens lowercasing would not change are left alone.
pub struct LowerCase;

// Covers titlecase letters like `ǅ`, which are not `is_uppercase`.
#[inline]
fn changes_when_lowercased(c: char) -> bool {
    c.is_uppercase() || !c.to_lowercase().eq([c])
}

impl TokenFilter for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, token: &Token) -> bool {
        if token.text.is_ascii() {
            return token.text.bytes().any(|b| b.is_ascii_uppercase());
        }
        token.text.chars().any(changes_when_lowercased)
    }

    fn apply(&self, token: &mut Token) -> Verdict {
        if token.text.is_ascii() {
            token.text.make_ascii_lowercase();
        } else {
            token.text = token.text.to_lowercase();
        }
        Verdict::Keep
    }
}
