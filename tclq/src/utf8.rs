//! Incremental UTF-8 decoding.
//!
//! The quoter walks its input one decode step at a time so that a damaged
//! byte can be escaped individually while the rest of the input still
//! decodes normally.  [`str::chars`] cannot do this (it requires valid
//! UTF-8 up front), so this module decodes from raw bytes.

/// Result of one decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// A well-formed scalar value.
    Char(char),
    /// The first byte of a malformed sequence, passed through for escaping.
    Invalid(u8),
}

/// Decode the leading UTF-8 sequence of `bytes`.
///
/// Returns the decoded step and the number of bytes it consumed.  Valid
/// sequences are 1 to 4 bytes and strictly well-formed: overlong encodings,
/// surrogate code points, values above U+10FFFF, and truncated or stray
/// continuation bytes are all rejected.
///
/// A rejected sequence yields `Invalid` with its first byte and a width of
/// exactly 1, so a damaged three-byte sequence degrades to three one-byte
/// steps rather than swallowing its would-be continuation bytes.  Empty
/// input yields a width of 0.
pub(crate) fn decode(bytes: &[u8]) -> (Decoded, usize) {
    let b0 = match bytes.first() {
        Some(&b) => b,
        None => return (Decoded::Invalid(0), 0),
    };

    // 1-byte (ASCII): 0xxxxxxx
    if b0 < 0x80 {
        return (Decoded::Char(b0 as char), 1);
    }

    // 2-byte: 110xxxxx 10xxxxxx
    if b0 & 0xE0 == 0xC0 && bytes.len() >= 2 {
        let b1 = bytes[1];
        if b1 & 0xC0 == 0x80 {
            let r = (u32::from(b0) & 0x1F) << 6 | (u32::from(b1) & 0x3F);
            if r >= 0x80 {
                if let Some(c) = char::from_u32(r) {
                    return (Decoded::Char(c), 2);
                }
            }
        }
    }

    // 3-byte: 1110xxxx 10xxxxxx 10xxxxxx
    if b0 & 0xF0 == 0xE0 && bytes.len() >= 3 {
        let b1 = bytes[1];
        let b2 = bytes[2];
        if b1 & 0xC0 == 0x80 && b2 & 0xC0 == 0x80 {
            let r = (u32::from(b0) & 0x0F) << 12
                | (u32::from(b1) & 0x3F) << 6
                | (u32::from(b2) & 0x3F);
            if r >= 0x800 && !(0xD800..=0xDFFF).contains(&r) {
                if let Some(c) = char::from_u32(r) {
                    return (Decoded::Char(c), 3);
                }
            }
        }
    }

    // 4-byte: 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
    if b0 & 0xF8 == 0xF0 && bytes.len() >= 4 {
        let b1 = bytes[1];
        let b2 = bytes[2];
        let b3 = bytes[3];
        if b1 & 0xC0 == 0x80 && b2 & 0xC0 == 0x80 && b3 & 0xC0 == 0x80 {
            let r = (u32::from(b0) & 0x07) << 18
                | (u32::from(b1) & 0x3F) << 12
                | (u32::from(b2) & 0x3F) << 6
                | (u32::from(b3) & 0x3F);
            if (0x10000..=0x10FFFF).contains(&r) {
                if let Some(c) = char::from_u32(r) {
                    return (Decoded::Char(c), 4);
                }
            }
        }
    }

    (Decoded::Invalid(b0), 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(bytes: &[u8]) -> (char, usize) {
        match decode(bytes) {
            (Decoded::Char(c), w) => (c, w),
            (Decoded::Invalid(b), _) => panic!("expected valid decode, got invalid byte {b:#04x}"),
        }
    }

    fn bad(bytes: &[u8]) -> (u8, usize) {
        match decode(bytes) {
            (Decoded::Invalid(b), w) => (b, w),
            (Decoded::Char(c), _) => panic!("expected invalid decode, got {c:?}"),
        }
    }

    #[test]
    fn ascii() {
        assert_eq!(ok(b"A"), ('A', 1));
        assert_eq!(ok(b"\x00"), ('\0', 1));
        assert_eq!(ok(b"\x7f"), ('\x7f', 1));
    }

    #[test]
    fn two_byte() {
        assert_eq!(ok("é".as_bytes()), ('é', 2));
        assert_eq!(ok("\u{80}".as_bytes()), ('\u{80}', 2));
        assert_eq!(ok("\u{7ff}".as_bytes()), ('\u{7ff}', 2));
    }

    #[test]
    fn three_byte() {
        assert_eq!(ok("\u{800}".as_bytes()), ('\u{800}', 3));
        assert_eq!(ok("€".as_bytes()), ('€', 3));
        assert_eq!(ok("\u{ffff}".as_bytes()), ('\u{ffff}', 3));
    }

    #[test]
    fn four_byte() {
        assert_eq!(ok("\u{10000}".as_bytes()), ('\u{10000}', 4));
        assert_eq!(ok("😀".as_bytes()), ('😀', 4));
        assert_eq!(ok("\u{10ffff}".as_bytes()), ('\u{10ffff}', 4));
    }

    #[test]
    fn only_first_sequence_is_decoded() {
        assert_eq!(ok("ab".as_bytes()), ('a', 1));
        assert_eq!(ok("éb".as_bytes()), ('é', 2));
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(b""), (Decoded::Invalid(0), 0));
    }

    #[test]
    fn stray_continuation_byte() {
        assert_eq!(bad(b"\x80"), (0x80, 1));
        assert_eq!(bad(b"\xbf"), (0xBF, 1));
    }

    #[test]
    fn truncated_sequences() {
        assert_eq!(bad(b"\xc3"), (0xC3, 1));
        assert_eq!(bad(b"\xe2\x82"), (0xE2, 1));
        assert_eq!(bad(b"\xf0\x9f\x98"), (0xF0, 1));
    }

    #[test]
    fn bad_continuation_byte() {
        // Second byte is not 10xxxxxx: only the lead byte is consumed.
        assert_eq!(bad(b"\xc3\x28"), (0xC3, 1));
        assert_eq!(bad(b"\xe2\x28\xa1"), (0xE2, 1));
    }

    #[test]
    fn overlong_encodings() {
        // "/" encoded in 2 and 3 bytes.
        assert_eq!(bad(b"\xc0\xaf"), (0xC0, 1));
        assert_eq!(bad(b"\xe0\x80\xaf"), (0xE0, 1));
        // NUL encoded in 2 bytes.
        assert_eq!(bad(b"\xc0\x80"), (0xC0, 1));
    }

    #[test]
    fn surrogates_rejected() {
        // U+D800 and U+DFFF as raw 3-byte sequences.
        assert_eq!(bad(b"\xed\xa0\x80"), (0xED, 1));
        assert_eq!(bad(b"\xed\xbf\xbf"), (0xED, 1));
    }

    #[test]
    fn above_max_scalar_rejected() {
        // U+110000 and the old 5-byte form.
        assert_eq!(bad(b"\xf4\x90\x80\x80"), (0xF4, 1));
        assert_eq!(bad(b"\xf8\x88\x80\x80\x80"), (0xF8, 1));
    }

    #[test]
    fn invalid_width_is_always_one() {
        // A damaged lead byte must not swallow the bytes after it.
        let (_, w) = decode(b"\xe2\x82\x28");
        assert_eq!(w, 1);
        let (_, w) = decode(b"\xf0\x80\x80\x80");
        assert_eq!(w, 1);
    }

    #[test]
    fn agrees_with_std_on_valid_strings() {
        let s = "aé€😀 \u{7ff}\u{800}\u{ffff}\u{10000}";
        let mut bytes = s.as_bytes();
        let mut chars = s.chars();
        while !bytes.is_empty() {
            let (d, w) = decode(bytes);
            let expect = chars.next().unwrap();
            assert_eq!(d, Decoded::Char(expect));
            assert_eq!(w, expect.len_utf8());
            bytes = &bytes[w..];
        }
        assert_eq!(chars.next(), None);
    }
}
