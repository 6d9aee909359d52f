//! Command-line argument parsing.
//!
//! Usage:
//!   tclq [-w0] [--] [<string> ...]
//!
//! With string arguments, each one is quoted.  Without arguments, stdin is
//! read to EOF and each record (newline-delimited, or NUL-delimited under
//! `-0`) is quoted.

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Join the quoted results with single spaces on one line (`-w`).
    pub word_mode: bool,
    /// Split stdin on NUL bytes instead of newlines (`-0`).
    pub nul_records: bool,
    /// Strings to quote; when empty, stdin supplies the input.
    pub strings: Vec<String>,
}

/// One-line usage summary for error output.
pub const USAGE: &str = "Usage: tclq [-w0] [--] [<string> ...]";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(&raw[1..])
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            i += 1;
            args.strings.extend(argv[i..].iter().cloned());
            break;
        }

        // Non-flag argument; a bare `-` is a string, not a flag.
        if !arg.starts_with('-') || arg == "-" {
            args.strings.push(arg.to_owned());
            i += 1;
            continue;
        }

        // Flag argument: iterate over characters after the leading `-`.
        for c in arg[1..].chars() {
            match c {
                'w' => args.word_mode = true,
                '0' => args.nul_records = true,
                c => return Err(format!("unknown option: -{c}")),
            }
        }
        i += 1;
    }

    if args.nul_records && !args.strings.is_empty() {
        return Err("-0 applies to stdin input only".to_owned());
    }

    Ok(args)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
