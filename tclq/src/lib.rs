//! Tcl string quoting and command assembly.
//!
//! Text spliced into a Tcl script must not let the parser see an unescaped
//! `{ } [ ] " $ \`, or the script's structure changes with the data.  This
//! crate produces double-quoted literals that read back as exactly the input
//! ([`quote()`], total over arbitrary bytes) and builds whole commands from
//! typed words ([`Cmd`], [`Word`], [`Index`]) so untrusted text can only end
//! up inside such a literal.
//!
//! ```
//! use tclq::{Cmd, Index, Word};
//!
//! let row = Word::list(["Ada Lovelace", "1815"]);
//! let cmd = Cmd::new(".tbl")
//!     .arg(Word::raw("insert"))
//!     .arg(Index::end())
//!     .arg(row);
//! assert_eq!(cmd.build(), r#".tbl insert end {"Ada Lovelace" "1815"}"#);
//! ```
//!
//! Invalid UTF-8 never fails: each offending byte becomes a `\xHH` escape
//! and round-trips.  Characters above U+FFFF are replaced by `\ufffd`; the
//! [`quote`](mod@quote) module documents the full escape table.
//!
//! The companion `tclq` binary quotes its arguments, or stdin records, for
//! use in shell pipelines that generate Tcl.

pub mod cli;
pub mod cmd;
pub mod quote;
mod utf8;

pub use cmd::{Cmd, Index, Word};
pub use quote::{quote, quote_all, quote_bytes, quote_char, quote_to};
