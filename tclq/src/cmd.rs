//! Assembling Tcl commands as text.
//!
//! A Tcl command is a sequence of words separated by spaces.  [`Cmd`] builds
//! one from typed [`Word`]s so that the only way to splice untrusted text
//! into a command is through the [`quote`](crate::quote) escaping; plain
//! strings become quoted literals by default, and raw words (subcommand
//! names, `-option` names, widget paths) must be asked for explicitly.
//!
//! ```
//! use tclq::{Cmd, Index, Word};
//!
//! let cmd = Cmd::new(".tbl")
//!     .arg(Word::raw("insert"))
//!     .arg(Index::end())
//!     .arg(Word::list(["a", "b c"]));
//! assert_eq!(cmd.build(), r#".tbl insert end {"a" "b c"}"#);
//! ```

use std::fmt;

use crate::quote::quote_to;

// ── Words ─────────────────────────────────────────────────────────────────────

/// One word of a Tcl command.
///
/// | Variant | Rendered as |
/// |---------|-------------|
/// | `Raw`   | the text verbatim |
/// | `Str`   | a `"..."` literal with all Tcl specials escaped |
/// | `Int`   | decimal digits |
/// | `Bool`  | `1` or `0` |
/// | `List`  | `{` members space-joined `}` |
///
/// `From<&str>` and `From<String>` produce `Str`, so ordinary text is quoted
/// unless the caller reaches for [`Word::raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Raw(String),
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<Word>),
}

impl Word {
    /// A word spliced verbatim.  The caller vouches for its syntax; use it
    /// for subcommands, option names, and widget paths, not for data.
    pub fn raw(s: impl Into<String>) -> Self {
        Word::Raw(s.into())
    }

    /// A brace-grouped word.  The empty list renders `{}`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Word::List(items.into_iter().map(Into::into).collect())
    }

    /// Render this word onto the end of `out`.
    pub fn write_to(&self, out: &mut String) {
        use std::fmt::Write;
        match self {
            Word::Raw(s) => out.push_str(s),
            Word::Str(s) => quote_to(s, out),
            // Writing to a String cannot fail.
            Word::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Word::Bool(b) => out.push(if *b { '1' } else { '0' }),
            Word::List(items) => {
                out.push('{');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    item.write_to(out);
                }
                out.push('}');
            }
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_to(&mut s);
        f.write_str(&s)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word::Str(s.to_owned())
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Word::Str(s)
    }
}

impl From<i64> for Word {
    fn from(n: i64) -> Self {
        Word::Int(n)
    }
}

impl From<i32> for Word {
    fn from(n: i32) -> Self {
        Word::Int(n.into())
    }
}

impl From<bool> for Word {
    fn from(b: bool) -> Self {
        Word::Bool(b)
    }
}

impl From<Vec<Word>> for Word {
    fn from(items: Vec<Word>) -> Self {
        Word::List(items)
    }
}

impl From<Index> for Word {
    fn from(idx: Index) -> Self {
        Word::Raw(idx.to_string())
    }
}

// ── Indices ───────────────────────────────────────────────────────────────────

/// A row or column index: numeric position or symbolic keyword.
///
/// Tcl widget commands accept either form in the same argument slot (`0`,
/// `end`, `last`, `active`, full keys like `k12`).  Carrying the distinction
/// in the type replaces run-time inspection of an "int or string" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    Position(i64),
    Key(String),
}

impl Index {
    /// The `end` keyword, accepted by nearly every index slot.
    pub fn end() -> Self {
        Index::Key("end".to_owned())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Position(n) => write!(f, "{n}"),
            Index::Key(k) => f.write_str(k),
        }
    }
}

impl From<i64> for Index {
    fn from(n: i64) -> Self {
        Index::Position(n)
    }
}

impl From<i32> for Index {
    fn from(n: i32) -> Self {
        Index::Position(n.into())
    }
}

impl From<&str> for Index {
    fn from(k: &str) -> Self {
        Index::Key(k.to_owned())
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// An ordered list of words forming one Tcl command.
///
/// Words render in insertion order, joined by single spaces, with nothing
/// added or reordered.  `Display` and [`build`](Cmd::build) produce the
/// command text.
#[derive(Debug, Clone, PartialEq)]
pub struct Cmd {
    words: Vec<Word>,
}

impl Cmd {
    /// Start a command with its name word (spliced raw, like any command or
    /// widget-path word).
    pub fn new(name: impl Into<String>) -> Self {
        Cmd {
            words: vec![Word::Raw(name.into())],
        }
    }

    /// Append one word.
    pub fn arg(mut self, word: impl Into<Word>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Append a word per item.
    pub fn args<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        self.words.extend(items.into_iter().map(Into::into));
        self
    }

    /// Append an option name and its value (`-option value`).  The name is
    /// spliced raw exactly as given, dash included.
    pub fn opt(self, name: impl Into<String>, value: impl Into<Word>) -> Self {
        self.arg(Word::Raw(name.into())).arg(value)
    }

    /// Render this command onto the end of `out`.
    pub fn write_to(&self, out: &mut String) {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            word.write_to(out);
        }
    }

    /// Render the command text.
    pub fn build(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
