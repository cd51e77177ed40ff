use nova_keywords::{
    KeywordMapper, KeywordMapperConfig, MapperOptions, Normalization, WordBoundary,
};
use pretty_assertions::assert_eq;

fn lowercase() -> MapperOptions {
    MapperOptions::default().with_normalizer(|c| c.to_lowercase().next().unwrap_or(c))
}

fn found<'s>(mapper: &KeywordMapper, src: &'s [u8]) -> Vec<&'s str> {
    mapper
        .map(src)
        .keywords(src)
        .map(|kw| std::str::from_utf8(kw).unwrap())
        .collect()
}

#[test]
fn maps_whole_words() {
    let m = KeywordMapper::new(MapperOptions::default(), ["foo", "bar", "baz"]).unwrap();

    assert_eq!(m.match_str("foo"), (Some("foo"), false));
    assert_eq!(m.match_str("fo"), (None, true));
    assert_eq!(m.match_str("fox"), (None, false));
    assert_eq!(m.match_str("qux"), (None, false));

    let src = b"abc foo defg bar baz";
    let matches = m.map(src);
    assert_eq!(matches.len(), 3);
    assert_eq!(matches.keyword(0, src), Some(&b"foo"[..]));
    assert_eq!(matches.keyword(1, src), Some(&b"bar"[..]));
    assert_eq!(matches.keyword(2, src), Some(&b"baz"[..]));
    assert_eq!(matches.keyword(3, src), None);

    let spans: Vec<(usize, usize)> = matches.iter().map(|m| (m.lo(), m.hi())).collect();
    assert_eq!(spans, vec![(4, 7), (13, 16), (17, 20)]);
}

#[test]
fn whitespace_policy_keeps_trailing_punctuation_in_the_word() {
    let m = KeywordMapper::new(MapperOptions::default(), ["foo", "bar", "baz"]).unwrap();
    assert_eq!(found(&m, b"abc foo defg bar. baz"), vec!["foo", "baz"]);
}

#[test]
fn punctuation_policy_splits_trailing_punctuation() {
    let options = MapperOptions::default().with_boundary(WordBoundary::WhitespaceOrPunctuation);
    let m = KeywordMapper::new(options, ["foo", "bar", "baz"]).unwrap();
    assert_eq!(found(&m, b"abc foo defg bar. baz"), vec!["foo", "bar", "baz"]);
}

#[test]
fn normalized_match_reports_original_spelling() {
    let m = KeywordMapper::new(lowercase(), ["foo", "BAR", "baZ"]).unwrap();
    assert_eq!(m.match_bytes(b"bAr"), (Some("BAR"), false));
    assert_eq!(m.match_bytes(b"BAZ"), (Some("baZ"), false));

    let src = b"Foo bar BAZ";
    assert_eq!(found(&m, src), vec!["Foo", "bar", "BAZ"]);
}

#[test]
fn last_duplicate_spelling_wins() {
    let m = KeywordMapper::new(lowercase(), ["Rust", "RUST", "rust", "RuSt"]).unwrap();
    assert_eq!(m.keyword_count(), 1);
    assert_eq!(m.match_str("rust"), (Some("RuSt"), false));
}

#[test]
fn keyword_that_prefixes_another_can_still_extend() {
    let m = KeywordMapper::new(MapperOptions::default(), ["bar", "barn"]).unwrap();
    assert_eq!(m.match_str("bar"), (Some("bar"), true));
    assert_eq!(m.match_str("barn"), (Some("barn"), false));
    assert_eq!(found(&m, b"bar barn barns"), vec!["bar", "barn"]);
}

#[test]
fn punctuation_policy_uses_unicode_punctuation_category() {
    let options = MapperOptions::default().with_boundary(WordBoundary::WhitespaceOrPunctuation);
    let m = KeywordMapper::new(options, ["नमस्ते", "price", "مرحبا"]).unwrap();

    // Devanagari danda and Arabic question mark end the word.
    assert_eq!(found(&m, "नमस्ते। مرحبا؟".as_bytes()), vec!["नमस्ते", "مرحبا"]);
    // `$` is a currency symbol, not punctuation, so it stays part of the word.
    assert!(m.map_str("$price").is_empty());
    assert_eq!(found(&m, b"(price)"), vec!["price"]);
}

#[test]
fn lowercase_preset_maps_dotted_capital_i_to_i() {
    let options = MapperOptions {
        normalizer: Normalization::Lowercase.normalizer(),
        ..MapperOptions::default()
    };
    let m = KeywordMapper::new(options, ["istanbul"]).unwrap();
    assert_eq!(m.match_str("\u{0130}STANBUL"), (Some("istanbul"), false));
}

#[test]
fn four_byte_scalars_are_matched_as_one_unit() {
    let m = KeywordMapper::new(MapperOptions::default(), ["👍", "👎"]).unwrap();
    assert_eq!(m.match_str("👍"), (Some("👍"), false));
    assert_eq!(m.match_str("👎"), (Some("👎"), false));

    let src = "abc 👍 defg 👎.".as_bytes();
    let matches = m.map(src);
    assert_eq!(matches.len(), 1);
    let hit = matches.get(0).unwrap();
    assert_eq!((hit.lo(), hit.hi()), (4, 8));
    assert_eq!(matches.keyword(0, src), Some("👍".as_bytes()));

    let options = MapperOptions::default().with_boundary(WordBoundary::WhitespaceOrPunctuation);
    let m = KeywordMapper::new(options, ["👍", "👎"]).unwrap();
    let matches = m.map(src);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches.keyword(1, src), Some("👎".as_bytes()));
}

#[test]
fn consecutive_boundaries_do_not_create_empty_matches() {
    let m = KeywordMapper::new(MapperOptions::default(), ["foo", "bar"]).unwrap();
    let src = b"  foo \t\n\r  bar   ";
    let matches = m.map(src);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| !m.is_empty()));
    assert_eq!(found(&m, src), vec!["foo", "bar"]);

    assert!(m.map(b"").is_empty());
    assert!(m.map(b"   \n\n ").is_empty());
}

#[test]
fn unicode_whitespace_separates_words() {
    let m = KeywordMapper::new(MapperOptions::default(), ["中文", "日本"]).unwrap();
    // U+3000 ideographic space and U+00A0 no-break space.
    let src = "中文\u{3000}日本\u{00A0}中文".as_bytes();
    assert_eq!(found(&m, src), vec!["中文", "日本", "中文"]);
}

#[test]
fn invalid_utf8_never_matches_or_panics() {
    let m = KeywordMapper::new(MapperOptions::default(), ["foo", "a\u{FFFD}b"]).unwrap();

    assert_eq!(m.match_bytes(&[b'f', 0xFF, b'o']), (None, false));
    assert_eq!(m.match_bytes(&[b'a', 0xFF, b'b']), (None, false));
    assert_eq!(m.match_bytes(&[0xE4, 0xB8]), (None, false));

    let src = [b'f', b'o', b'o', b' ', 0xC3, b' ', b'f', 0x80, b'o', b'o', b' ', b'f', b'o', b'o'];
    let matches = m.map(&src);
    let spans: Vec<_> = matches.iter().map(|m| m.range()).collect();
    assert_eq!(spans, vec![0..3, 11..14]);
}

#[test]
fn config_presets_drive_the_mapper() {
    let config: KeywordMapperConfig = serde_json::from_str(
        r#"{"normalization": "lowercase", "boundary": "whitespace_or_punctuation"}"#,
    )
    .unwrap();
    assert_eq!(config.normalization, Normalization::Lowercase);

    let m = KeywordMapper::new(config.into(), ["École", "Rust"]).unwrap();
    assert_eq!(found(&m, "ÉCOLE, rust!".as_bytes()), vec!["ÉCOLE", "rust"]);
    assert_eq!(m.options().boundary, WordBoundary::WhitespaceOrPunctuation);
}

#[cfg(feature = "unicode")]
#[test]
fn accent_folding_preset() {
    let options = MapperOptions::from(KeywordMapperConfig {
        normalization: Normalization::LowercaseFoldAccents,
        boundary: WordBoundary::Whitespace,
    });
    let m = KeywordMapper::new(options, ["café"]).unwrap();
    assert_eq!(m.match_str("CAFE"), (Some("café"), false));
    assert_eq!(found(&m, "un Café noir".as_bytes()), vec!["Café"]);
}

#[test]
fn matching_is_idempotent() {
    let m = KeywordMapper::new(lowercase(), ["alpha", "beta", "gamma"]).unwrap();
    let src = "Alpha beta GAMMA delta alpha".as_bytes();
    let first = m.map(src);
    let second = m.map(src);
    assert_eq!(first, second);
    assert_eq!(m.match_str("BETA"), m.match_str("BETA"));
}
