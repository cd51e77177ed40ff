use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[cfg(feature = "unicode")]
use unicode_normalization::UnicodeNormalization;

/// A per-scalar normalization function applied to both keywords and scanned text.
///
/// Normalizers must be pure: the same input always maps to the same output and calls have no
/// side effects. A [`crate::KeywordMapper`] relies on this to be shared across threads without
/// synchronization.
#[derive(Clone)]
pub struct Normalizer(Arc<dyn Fn(char) -> char + Send + Sync>);

impl Normalizer {
    pub fn new(f: impl Fn(char) -> char + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, c: char) -> char {
        (self.0)(c)
    }

    #[cfg(test)]
    pub(crate) fn apply_str(&self, text: &str) -> String {
        text.chars().map(|c| self.apply(c)).collect()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Normalizer(..)")
    }
}

/// Built-in normalizers that can be selected from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Keywords and text are compared as-is.
    #[default]
    None,
    /// Only `A-Z` are folded; every other scalar must match exactly.
    AsciiLowercase,
    /// Simple Unicode lowercasing.
    Lowercase,
    /// Strips combining marks by keeping the base scalar of the canonical decomposition.
    #[cfg(feature = "unicode")]
    FoldAccents,
    /// [`Normalization::Lowercase`] followed by [`Normalization::FoldAccents`].
    #[cfg(feature = "unicode")]
    LowercaseFoldAccents,
}

impl Normalization {
    /// Returns the normalizer for this preset, `None` for identity.
    pub fn normalizer(self) -> Option<Normalizer> {
        match self {
            Normalization::None => None,
            Normalization::AsciiLowercase => Some(Normalizer::new(|c| c.to_ascii_lowercase())),
            Normalization::Lowercase => Some(Normalizer::new(simple_lowercase)),
            #[cfg(feature = "unicode")]
            Normalization::FoldAccents => Some(Normalizer::new(fold_accents)),
            #[cfg(feature = "unicode")]
            Normalization::LowercaseFoldAccents => {
                Some(Normalizer::new(|c| fold_accents(simple_lowercase(c))))
            }
        }
    }
}

/// Unicode simple lowercase mapping (one scalar in, one scalar out).
///
/// `İ` (U+0130) is the only scalar whose full lowercase mapping expands (to `i̇`); its simple
/// mapping is `i`.
pub fn simple_lowercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    if c == '\u{0130}' {
        return 'i';
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Returns the first scalar of the canonical decomposition of `c` (`é` → `e`).
#[cfg(feature = "unicode")]
pub fn fold_accents(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    std::iter::once(c).nfd().next().unwrap_or(c)
}
