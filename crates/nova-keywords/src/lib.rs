//! Whole-word keyword matching over byte buffers.
//!
//! A [`KeywordMapper`] is built once from a fixed keyword set. It stores the keywords in a prefix
//! tree keyed by Unicode scalar values and then answers two questions:
//!
//! - [`KeywordMapper::match_bytes`]: does this word exactly match a keyword, and could a longer
//!   word still match?
//! - [`KeywordMapper::map`]: which words of a buffer are keywords? Results are half-open byte
//!   ranges (`[lo, hi)`) into the scanned buffer, in buffer order.
//!
//! ```
//! use nova_keywords::{KeywordMapper, MapperOptions};
//!
//! let mapper = KeywordMapper::new(MapperOptions::default(), ["foo", "bar", "baz"])?;
//! let src = b"abc foo defg bar baz";
//! let matches = mapper.map(src);
//!
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches.keyword(0, src), Some(&b"foo"[..]));
//! assert_eq!(matches.keyword(3, src), None);
//! # Ok::<(), nova_keywords::KeywordError>(())
//! ```
//!
//! ## Normalization
//!
//! [`MapperOptions::normalizer`] is applied per scalar to keywords at build time and to scanned
//! text at match time (typically lowercasing and accent folding). Matches always report the
//! keyword's original spelling. When several keywords normalize to the same scalars, the last one
//! wins.
//!
//! ## Word boundaries
//!
//! By default words are separated by Unicode whitespace. [`WordBoundary::WhitespaceOrPunctuation`]
//! additionally splits on Unicode punctuation (general category `P*`), so `"bar."` yields the
//! word `bar` and `"नमस्ते।"` yields `नमस्ते`. Symbols such as `$` are not punctuation. Boundaries
//! are decided on the raw scalar, before normalization.
//!
//! ## Malformed input
//!
//! Input does not need to be valid UTF-8. Each undecodable byte is treated as a scalar that never
//! matches, so the word containing it is skipped and offsets stay exact.
//!
//! ## `unicode` feature
//!
//! Adds the `Normalization::FoldAccents` and `Normalization::LowercaseFoldAccents` presets,
//! backed by the canonical decomposition from `unicode-normalization`.

#![forbid(unsafe_code)]

mod boundary;
mod config;
mod error;
mod mapper;
mod normalize;
mod trie;
mod utf8;

pub use boundary::WordBoundary;
pub use config::{KeywordMapperConfig, MapperOptions};
pub use error::{KeywordError, Result};
pub use mapper::{KeywordMapper, KeywordMapperBuilder, Match, Matches};
#[cfg(feature = "unicode")]
pub use normalize::fold_accents;
pub use normalize::{simple_lowercase, Normalization, Normalizer};
