use std::ops::Range;

use crate::config::MapperOptions;
use crate::error::{KeywordError, Result};
use crate::trie::{Cursor, KeywordTrie, TrieBuilder};
use crate::utf8::{Unit, Units};

const TRACE_TARGET: &str = "nova.keywords";

/// A byte range `[lo, hi)` in a scanned buffer where a keyword occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    lo: usize,
    hi: usize,
}

impl Match {
    /// Inclusive start offset.
    #[inline]
    pub fn lo(self) -> usize {
        self.lo
    }

    /// Exclusive end offset.
    #[inline]
    pub fn hi(self) -> usize {
        self.hi
    }

    #[inline]
    pub fn len(self) -> usize {
        self.hi - self.lo
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.lo..self.hi
    }
}

/// Matches produced by [`KeywordMapper::map`], ordered by ascending start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    matches: Vec<Match>,
}

impl Matches {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Match> {
        self.matches.get(i).copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Match>> {
        self.matches.iter().copied()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Returns the matched bytes of the `i`-th match in `src`.
    ///
    /// `src` must be the buffer that was scanned. Returns `None` when `i` is out of range or the
    /// range does not fit in `src`.
    pub fn keyword<'s>(&self, i: usize, src: &'s [u8]) -> Option<&'s [u8]> {
        let m = self.matches.get(i)?;
        src.get(m.range())
    }

    /// Matched bytes of every match, in order.
    pub fn keywords<'a, 's: 'a>(&'a self, src: &'s [u8]) -> impl Iterator<Item = &'s [u8]> + 'a {
        self.matches.iter().filter_map(move |m| src.get(m.range()))
    }

    fn clear(&mut self) {
        self.matches.clear();
    }

    fn push(&mut self, lo: usize, hi: usize) {
        debug_assert!(lo < hi, "matches are never empty");
        debug_assert!(
            self.matches.last().map_or(true, |prev| prev.hi <= lo),
            "matches are emitted in buffer order"
        );
        self.matches.push(Match { lo, hi });
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = Match;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Match>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Matches {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Incrementally collects keywords into a [`KeywordMapper`].
#[derive(Debug)]
pub struct KeywordMapperBuilder {
    options: MapperOptions,
    trie: TrieBuilder,
    inserted: usize,
    overwritten: usize,
}

impl KeywordMapperBuilder {
    pub fn new(options: MapperOptions) -> Self {
        Self {
            options,
            trie: TrieBuilder::new(),
            inserted: 0,
            overwritten: 0,
        }
    }

    /// Adds a keyword.
    ///
    /// Keywords that normalize to the same scalars as an earlier keyword replace its spelling.
    /// Empty keywords are rejected; `index` in the error counts every `insert` call so far.
    pub fn insert(&mut self, keyword: impl Into<String>) -> Result<&mut Self> {
        let keyword = keyword.into();
        let index = self.inserted;
        self.inserted += 1;

        if keyword.is_empty() {
            return Err(KeywordError::EmptyKeyword { index });
        }

        if let Some(previous) = self.trie.insert(keyword, self.options.normalizer.as_ref()) {
            self.overwritten += 1;
            tracing::trace!(
                target: TRACE_TARGET,
                index,
                previous = %previous,
                "keyword replaced an earlier spelling"
            );
        }
        Ok(self)
    }

    pub fn build(self) -> KeywordMapper {
        let trie = self.trie.build();
        tracing::debug!(
            target: TRACE_TARGET,
            inserted = self.inserted,
            distinct = trie.keywords().len(),
            overwritten = self.overwritten,
            nodes = trie.node_count(),
            "built keyword index"
        );
        KeywordMapper {
            trie,
            options: self.options,
        }
    }
}

/// Finds whole-word keyword occurrences in byte buffers.
///
/// Built once from a fixed keyword set and read-only afterwards, so a mapper can be shared across
/// threads (e.g. behind an `Arc`) and queried concurrently.
#[derive(Debug, Clone)]
pub struct KeywordMapper {
    trie: KeywordTrie,
    options: MapperOptions,
}

impl KeywordMapper {
    /// Builds a mapper from `keywords`.
    ///
    /// Fails with [`KeywordError::EmptyKeyword`] if any keyword is empty. An empty keyword list is
    /// valid and produces a mapper that never matches.
    pub fn new<I>(options: MapperOptions, keywords: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut builder = KeywordMapperBuilder::new(options);
        for keyword in keywords {
            builder.insert(keyword)?;
        }
        Ok(builder.build())
    }

    pub fn builder(options: MapperOptions) -> KeywordMapperBuilder {
        KeywordMapperBuilder::new(options)
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Number of distinct keywords after normalization.
    pub fn keyword_count(&self) -> usize {
        self.trie.keywords().len()
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Matches `word` exactly against the keyword set.
    ///
    /// Returns the original spelling of the matched keyword, if any, and whether appending more
    /// input could still reach a keyword (`word` is a strict prefix of some keyword path). Both can
    /// be set at once: with keywords `bar` and `barn`, `bar` yields `(Some("bar"), true)`.
    ///
    /// Bytes that are not valid UTF-8 never match.
    pub fn match_bytes(&self, word: &[u8]) -> (Option<&str>, bool) {
        let mut cursor = Cursor::new();
        for (_, unit, _) in Units::new(word) {
            if !cursor.advance(&self.trie, self.normalize(unit)) {
                return (None, false);
            }
        }
        cursor.outcome(&self.trie)
    }

    pub fn match_str(&self, word: &str) -> (Option<&str>, bool) {
        self.match_bytes(word.as_bytes())
    }

    /// Scans `src` and returns the byte ranges of every word that exactly matches a keyword.
    ///
    /// Words are maximal runs of scalars that are not boundaries under
    /// [`MapperOptions::boundary`]. Undecodable bytes belong to the surrounding word and prevent
    /// it from matching.
    pub fn map(&self, src: &[u8]) -> Matches {
        let mut matches = Matches::new();
        self.map_into(src, &mut matches);
        matches
    }

    pub fn map_str(&self, text: &str) -> Matches {
        self.map(text.as_bytes())
    }

    /// Like [`KeywordMapper::map`], reusing `out`'s allocation. `out` is cleared first.
    pub fn map_into(&self, src: &[u8], out: &mut Matches) {
        out.clear();

        let boundary = self.options.boundary;
        let mut lo = 0usize;
        let mut cursor = Cursor::new();

        for (at, unit, width) in Units::new(src) {
            if matches!(unit, Unit::Char(c) if boundary.is_boundary(c)) {
                if at > lo && cursor.matched(&self.trie).is_some() {
                    out.push(lo, at);
                }
                lo = at + width;
                cursor = Cursor::new();
                continue;
            }

            // Once the word fell off the trie, skip lookups until the next boundary.
            if cursor.is_live() {
                cursor.advance(&self.trie, self.normalize(unit));
            }
        }

        if lo < src.len() && cursor.matched(&self.trie).is_some() {
            out.push(lo, src.len());
        }
    }

    #[inline]
    fn normalize(&self, unit: Unit) -> Option<char> {
        match unit {
            Unit::Char(c) => Some(match &self.options.normalizer {
                Some(n) => n.apply(c),
                None => c,
            }),
            Unit::Invalid => None,
        }
    }
}
