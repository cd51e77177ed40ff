use serde::{Deserialize, Serialize};

use crate::boundary::WordBoundary;
use crate::normalize::{Normalization, Normalizer};

/// Runtime options for building a [`crate::KeywordMapper`].
#[derive(Clone, Debug, Default)]
pub struct MapperOptions {
    /// Applied to both keywords and scanned text. `None` compares scalars as-is.
    pub normalizer: Option<Normalizer>,
    /// Word separators used by [`crate::KeywordMapper::map`].
    pub boundary: WordBoundary,
}

impl MapperOptions {
    pub fn with_normalizer(mut self, f: impl Fn(char) -> char + Send + Sync + 'static) -> Self {
        self.normalizer = Some(Normalizer::new(f));
        self
    }

    pub fn with_boundary(mut self, boundary: WordBoundary) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Serializable form of [`MapperOptions`] restricted to the built-in normalizers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordMapperConfig {
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default)]
    pub boundary: WordBoundary,
}

impl From<KeywordMapperConfig> for MapperOptions {
    fn from(config: KeywordMapperConfig) -> Self {
        MapperOptions {
            normalizer: config.normalization.normalizer(),
            boundary: config.boundary,
        }
    }
}
