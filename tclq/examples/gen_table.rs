//! Emit a complete wish script that builds and populates a tablelist.
//!
//! Run with `cargo run --example gen_table | wish` (needs the tablelist
//! package installed) or just inspect the generated text.  Every cell value
//! below carries characters that would break a naively spliced script.

use tclq::{Cmd, Index, Word};

fn main() {
    let rows: &[(&str, &str, i32)] = &[
        ("notes.txt", "plain text", 4),
        ("report [draft]", "work in progress", 812),
        ("budget {2024}", "see $finance", 96),
        ("path\\with\\backslashes", "dos style", 12),
        ("summary\nwith newline", "two lines", 3),
    ];

    let mut script = String::new();
    let mut push = |line: String| {
        script.push_str(&line);
        script.push('\n');
    };

    push("package require tablelist".to_owned());
    push(
        Cmd::new("tablelist::tablelist")
            .arg(Word::raw(".tbl"))
            .opt(
                "-columns",
                Word::list([
                    Word::Int(0),
                    Word::from("File"),
                    Word::raw("left"),
                    Word::Int(0),
                    Word::from("Description"),
                    Word::raw("left"),
                    Word::Int(6),
                    Word::from("Size"),
                    Word::raw("right"),
                ]),
            )
            .opt("-stretch", Word::raw("all"))
            .opt("-selectmode", Word::raw("browse"))
            .build(),
    );
    push("pack .tbl -fill both -expand 1".to_owned());

    for &(file, desc, size) in rows {
        push(
            Cmd::new(".tbl")
                .arg(Word::raw("insert"))
                .arg(Index::end())
                .arg(Word::list([Word::from(file), Word::from(desc), Word::Int(size.into())]))
                .build(),
        );
    }

    push(
        Cmd::new("wm")
            .arg(Word::raw("title"))
            .arg(Word::raw("."))
            .arg("tclq demo [safe splicing]")
            .build(),
    );

    print!("{script}");
}
