#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use nova_keywords::{KeywordMapper, MapperOptions, Normalization, WordBoundary};

const MAX_INPUT_SIZE: usize = 256 * 1024;

fn mappers() -> &'static [KeywordMapper] {
    static MAPPERS: OnceLock<Vec<KeywordMapper>> = OnceLock::new();
    MAPPERS.get_or_init(|| {
        let keywords = ["foo", "Bar", "barn", "é", "中文", "👍", "a\u{FFFD}b", "x.y"];
        [
            (Normalization::None, WordBoundary::Whitespace),
            (Normalization::Lowercase, WordBoundary::Whitespace),
            (Normalization::AsciiLowercase, WordBoundary::WhitespaceOrPunctuation),
        ]
        .into_iter()
        .map(|(normalization, boundary)| {
            let options = MapperOptions {
                normalizer: normalization.normalizer(),
                boundary,
            };
            KeywordMapper::new(options, keywords).expect("fuzz keywords are non-empty")
        })
        .collect()
    })
}

fn run_one(input: &[u8]) {
    let input = &input[..input.len().min(MAX_INPUT_SIZE)];

    for mapper in mappers() {
        // Goal: never panic on arbitrary bytes, and always return non-empty, ordered ranges that
        // are safe to slice in the scanned buffer.
        let matches = mapper.map(input);
        let mut prev_hi = 0;
        for (i, m) in matches.iter().enumerate() {
            assert!(m.lo() < m.hi(), "empty match {m:?}");
            assert!(m.hi() <= input.len(), "match {m:?} out of bounds");
            assert!(i == 0 || prev_hi < m.lo(), "match {m:?} overlaps or touches its predecessor");
            prev_hi = m.hi();

            let word = matches.keyword(i, input).expect("in-bounds match");
            assert!(mapper.match_bytes(word).0.is_some(), "scan and exact match disagree");
        }
        assert!(matches.keyword(matches.len(), input).is_none());

        let _ = mapper.match_bytes(input);
    }
}

fuzz_target!(|data: &[u8]| {
    run_one(data);
});
