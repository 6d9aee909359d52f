use std::io::{Read, Write};

use tclq::cli::{self, CliArgs};
use tclq::{quote, quote_bytes};

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("tclq: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("tclq: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> std::io::Result<i32> {
    let quoted: Vec<String> = if !args.strings.is_empty() {
        args.strings.iter().map(|s| quote(s)).collect()
    } else {
        // No arguments: stdin supplies the records.  Refuse to sit waiting
        // on an interactive terminal.
        let is_tty = unsafe { libc::isatty(libc::STDIN_FILENO) != 0 };
        if is_tty {
            eprintln!("{}", cli::USAGE);
            return Ok(2);
        }
        let mut input = Vec::new();
        std::io::stdin().lock().read_to_end(&mut input)?;
        let sep = if args.nul_records { b'\0' } else { b'\n' };
        split_records(&input, sep)
            .into_iter()
            .map(quote_bytes)
            .collect()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.word_mode {
        if !quoted.is_empty() {
            writeln!(out, "{}", quoted.join(" "))?;
        }
    } else {
        for q in &quoted {
            writeln!(out, "{q}")?;
        }
    }
    out.flush()?;
    Ok(0)
}

/// Split `input` into records on `sep`.
///
/// The separator terminates a record and is not part of it; a final record
/// without its terminator still counts.  Empty input has no records.
fn split_records(input: &[u8], sep: u8) -> Vec<&[u8]> {
    if input.is_empty() {
        return Vec::new();
    }
    let body = match input.last() {
        Some(&b) if b == sep => &input[..input.len() - 1],
        _ => input,
    };
    body.split(|&b| b == sep).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
