use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Decides which scalars separate words when scanning a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordBoundary {
    /// Unicode `White_Space`.
    #[default]
    Whitespace,
    /// Whitespace plus Unicode punctuation (general category `P*`), so `"bar."` yields the word
    /// `bar`.
    WhitespaceOrPunctuation,
}

impl WordBoundary {
    #[inline]
    pub fn is_boundary(self, c: char) -> bool {
        match self {
            WordBoundary::Whitespace => c.is_whitespace(),
            WordBoundary::WhitespaceOrPunctuation => c.is_whitespace() || is_punctuation(c),
        }
    }
}

/// Unicode general category `P*` (connector, dash, open, close, initial, final and other
/// punctuation). Symbols such as `$`, `+` or `|` are not punctuation.
#[inline]
fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}
