//! Offset-preserving UTF-8 decoding.
//!
//! Scanning needs exact byte widths for every unit so match ranges always land on the original
//! buffer, including when the buffer is not valid UTF-8.

/// One decoded unit of a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// A well-formed scalar value.
    Char(char),
    /// A single byte that does not start a well-formed sequence.
    Invalid,
}

/// Decodes the unit at the start of `bytes`, returning it with its width in bytes.
///
/// `bytes` must be non-empty. Invalid input always advances by exactly one byte, which keeps
/// callers making progress without reading past the end of the slice.
#[inline]
pub(crate) fn decode(bytes: &[u8]) -> (Unit, usize) {
    let b0 = bytes[0];
    if b0 < 0x80 {
        return (Unit::Char(b0 as char), 1);
    }

    let width = match b0 {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return (Unit::Invalid, 1),
    };
    let Some(seq) = bytes.get(..width) else {
        return (Unit::Invalid, 1);
    };

    // `from_utf8` rejects overlong encodings, surrogates and out-of-range scalars.
    match std::str::from_utf8(seq).ok().and_then(|s| s.chars().next()) {
        Some(c) => (Unit::Char(c), width),
        None => (Unit::Invalid, 1),
    }
}

/// Iterator over `(byte_offset, unit, width)` for a byte buffer.
pub(crate) struct Units<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Units<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for Units<'_> {
    type Item = (usize, Unit, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let (unit, width) = decode(rest);
        let at = self.pos;
        self.pos += width;
        Some((at, unit, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_multibyte_scalars_with_their_width() {
        assert_eq!(decode(b"a"), (Unit::Char('a'), 1));
        assert_eq!(decode("é".as_bytes()), (Unit::Char('é'), 2));
        assert_eq!(decode("中".as_bytes()), (Unit::Char('中'), 3));
        assert_eq!(decode("🦀x".as_bytes()), (Unit::Char('🦀'), 4));
    }

    #[test]
    fn malformed_input_advances_one_byte() {
        // Lone continuation byte.
        assert_eq!(decode(&[0x80, b'a']), (Unit::Invalid, 1));
        // Truncated 3-byte sequence.
        assert_eq!(decode(&[0xE4, 0xB8]), (Unit::Invalid, 1));
        // Overlong encoding of '/'.
        assert_eq!(decode(&[0xC0, 0xAF]), (Unit::Invalid, 1));
        // Encoded surrogate.
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), (Unit::Invalid, 1));
        // Past U+10FFFF.
        assert_eq!(decode(&[0xF5, 0x80, 0x80, 0x80]), (Unit::Invalid, 1));
    }

    #[test]
    fn units_cover_every_byte_exactly_once() {
        let bytes = [b'a', 0xFF, 0xE4, 0xB8, 0xAD, 0xE4, b'z'];
        let units: Vec<_> = Units::new(&bytes).collect();
        assert_eq!(
            units,
            vec![
                (0, Unit::Char('a'), 1),
                (1, Unit::Invalid, 1),
                (2, Unit::Char('中'), 3),
                (5, Unit::Invalid, 1),
                (6, Unit::Char('z'), 1),
            ]
        );
        let total: usize = units.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(total, bytes.len());
    }
}
