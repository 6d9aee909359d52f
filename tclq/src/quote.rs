//! Tcl double-quoted string literals.
//!
//! [`quote`] turns arbitrary input into a `"..."` word that a Tcl 8.6 parser
//! reads back as exactly the original bytes.  The output is safe to splice
//! into a larger command without further escaping, because every character
//! that is significant inside a double-quoted word is backslashed.
//!
//! ## Escape forms
//!
//! | Input | Output | Notes |
//! |-------|--------|-------|
//! | `{ } [ ] " $ \` | `\{` `\}` `\[` `\]` `\"` `\$` `\\` | word, substitution, and escape syntax |
//! | printable character | verbatim | general categories L, M, N, P, S and the ASCII space |
//! | BEL BS FF LF CR TAB VT | `\a \b \f \n \r \t \v` | |
//! | other character below U+0020 | `\xHH` | lowercase hex |
//! | other non-printable BMP character | `\uHHHH` | lowercase hex, includes U+007F and no-break spaces |
//! | any character at or above U+10000 | `\ufffd` | see below |
//! | byte that is not valid UTF-8 | `\xHH` | the raw byte, one escape per byte |
//!
//! Code points outside the Basic Multilingual Plane are always replaced by
//! the U+FFFD escape, printable or not.  Round-trip fidelity therefore holds
//! for any input whose code points are all below U+10000; inputs with
//! invalid UTF-8 bytes hex-escape per byte and read back as the same bytes
//! wherever `\xHH` denotes a raw byte (Tcl's binary-string convention).
//! Supplementary-plane characters are lossy by contract.
//!
//! `\xHH` always has exactly two digits and `\uHHHH` exactly four, which is
//! unambiguous under Tcl 8.6 backslash rules (`\x` consumes at most two hex
//! digits, `\u` at most four).
//!
//! Quoting is total: there is no error case, and no input can produce output
//! that escapes its surrounding quotes.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::utf8::{self, Decoded};

const LOWERHEX: &[u8; 16] = b"0123456789abcdef";

// ── Quoting ───────────────────────────────────────────────────────────────────

/// Quote `s` as a Tcl double-quoted literal.
///
/// ```
/// assert_eq!(tclq::quote("say [hi] $x"), r#""say \[hi\] \$x""#);
/// assert_eq!(tclq::quote("1\t2\n"), r#""1\t2\n""#);
/// ```
pub fn quote(s: &str) -> String {
    quote_bytes(s.as_bytes())
}

/// Quote an arbitrary byte sequence.
///
/// Bytes that do not form valid UTF-8 come out as `\xHH` escapes of the raw
/// byte, one escape per byte, and parse back to the same bytes.
///
/// ```
/// assert_eq!(tclq::quote_bytes(b"\xff"), r#""\xff""#);
/// assert_eq!(tclq::quote_bytes(b"ok"), r#""ok""#);
/// ```
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    quote_to(bytes, &mut out);
    out
}

/// Quote `input` and append the literal to `out`.
///
/// This is the primitive [`quote`] and [`quote_bytes`] wrap; use it to build
/// a command in one buffer without intermediate allocations.  `out` is only
/// appended to, never cleared.
pub fn quote_to(input: impl AsRef<[u8]>, out: &mut String) {
    let bytes = input.as_ref();
    out.reserve(bytes.len() + 2);
    out.push('"');
    let mut offset = 0;
    while offset < bytes.len() {
        let b = bytes[offset];
        // ASCII fast path; everything else takes the full decode.
        let (step, width) = if b < 0x80 {
            (Decoded::Char(b as char), 1)
        } else {
            utf8::decode(&bytes[offset..])
        };
        match step {
            Decoded::Char(c) => push_escaped(out, c),
            Decoded::Invalid(raw) => push_hex_byte(out, raw),
        }
        offset += width;
    }
    out.push('"');
}

/// Quote a single character, exactly as [`quote`] would quote a one-char
/// string.
///
/// ```
/// assert_eq!(tclq::quote_char('"'), r#""\"""#);
/// assert_eq!(tclq::quote_char('é'), r#""é""#);
/// ```
pub fn quote_char(c: char) -> String {
    let mut buf = [0u8; 4];
    quote(c.encode_utf8(&mut buf))
}

/// Quote every item, preserving order and count.
///
/// ```
/// let q = tclq::quote_all(["a", "b c"]);
/// assert_eq!(q, [r#""a""#, r#""b c""#]);
/// assert!(tclq::quote_all(Vec::<String>::new()).is_empty());
/// ```
pub fn quote_all<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items.into_iter().map(|s| quote(s.as_ref())).collect()
}

// ── Classification ────────────────────────────────────────────────────────────

fn push_escaped(out: &mut String, c: char) {
    // Specials first: several of them are printable and must still be
    // escaped ([ would start command substitution, $ variable substitution).
    if matches!(c, '{' | '}' | '[' | ']' | '"' | '$' | '\\') {
        out.push('\\');
        out.push(c);
        return;
    }

    // Supplementary-plane characters are never emitted literally.
    if c as u32 >= 0x10000 {
        out.push_str("\\ufffd");
        return;
    }

    if is_print(c) {
        out.push(c);
        return;
    }

    match c {
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0c' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0b' => out.push_str("\\v"),
        _ if (c as u32) < 0x20 => push_hex_byte(out, c as u8),
        // Non-printable BMP: U+007F, the C1 block, unassigned code points,
        // and separator characters other than the ASCII space.
        _ => push_hex_bmp(out, c as u32 as u16),
    }
}

/// Printability: the ASCII space plus general categories Letter, Mark,
/// Number, Punctuation, and Symbol.  Separators other than U+0020 count as
/// non-printable so they hex-escape rather than hide in the output.
fn is_print(c: char) -> bool {
    c == ' '
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Symbol
        )
}

fn push_hex_byte(out: &mut String, b: u8) {
    out.push_str("\\x");
    out.push(LOWERHEX[usize::from(b >> 4)] as char);
    out.push(LOWERHEX[usize::from(b & 0xF)] as char);
}

fn push_hex_bmp(out: &mut String, v: u16) {
    out.push_str("\\u");
    for shift in [12u32, 8, 4, 0] {
        out.push(LOWERHEX[usize::from((v >> shift) & 0xF)] as char);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
