//! Shared helpers for the integration suites.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

/// Decode a double-quoted Tcl word under Tcl 8.6 backslash rules.
///
/// Returns the byte sequence the word denotes.  `\xHH` consumes at most two
/// hex digits and yields one raw byte (Tcl's binary-string convention, where
/// characters U+0000..U+00FF stand for bytes); `\uHHHH` consumes at most
/// four and yields the code point's UTF-8 bytes.  Panics on anything the
/// quoter is not allowed to produce, including unescaped specials, so a
/// round-trip through this function also checks output well-formedness.
pub fn tcl_unquote(lit: &str) -> Vec<u8> {
    let inner = lit
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or_else(|| panic!("not a double-quoted literal: {lit}"));

    let mut out = Vec::new();
    let mut chars = inner.chars().peekable();
    let mut buf = [0u8; 4];

    while let Some(c) = chars.next() {
        if c != '\\' {
            assert!(
                !matches!(c, '{' | '}' | '[' | ']' | '"' | '$'),
                "unescaped {c:?} inside {lit}"
            );
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let esc = chars
            .next()
            .unwrap_or_else(|| panic!("dangling backslash in {lit}"));
        match esc {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0B),
            'x' => {
                let v = take_hex(&mut chars, 2);
                out.push(v as u8);
            }
            'u' => {
                let v = take_hex(&mut chars, 4);
                let c = char::from_u32(v)
                    .unwrap_or_else(|| panic!("\\u{v:04x} is not a scalar value in {lit}"));
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            '{' | '}' | '[' | ']' | '"' | '$' | '\\' => {
                out.push(esc as u8);
            }
            other => panic!("unexpected escape \\{other} in {lit}"),
        }
    }
    out
}

/// Consume up to `max` hex digits (at least one) and return their value.
fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, max: usize) -> u32 {
    let mut v = 0u32;
    let mut digits = 0;
    while digits < max {
        match chars.peek().and_then(|c| c.to_digit(16)) {
            Some(d) => {
                v = v * 16 + d;
                chars.next();
                digits += 1;
            }
            None => break,
        }
    }
    assert!(digits > 0, "hex escape with no digits");
    v
}
