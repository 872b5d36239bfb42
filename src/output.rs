//! User-facing console lines.
//! Colors are enabled only when stdout is a TTY so scripts get plain text.

use owo_colors::OwoColorize;
use std::path::Path;

use crate::fs_ops::{RelocationEvent, RelocationOutcome};

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Plain line without prefix, for output users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One line per processed entry (used by `--verbose`).
pub fn print_event(event: &RelocationEvent) {
    match event {
        RelocationEvent::Moved { from, to, renamed } => {
            let marker = if *renamed { " (renamed)" } else { "" };
            print_user(&format!("{} -> {}{}", from.display(), to.display(), marker));
        }
        RelocationEvent::Skipped { path } => {
            print_user(&format!("skipped {}", path.display()));
        }
    }
}

/// Lines shown after a run: the moved count always, renamed/skipped only when
/// they carry information.
pub fn summary_lines(outcome: &RelocationOutcome, filtering: bool) -> Vec<String> {
    let mut lines = vec![format!("{} file(s) moved successfully", outcome.moved)];
    if outcome.renamed > 0 {
        lines.push(format!(
            "{} file(s) were renamed to avoid overwriting",
            outcome.renamed
        ));
    }
    if filtering {
        lines.push(format!(
            "{} file(s) skipped (extension not in allow-list)",
            outcome.skipped
        ));
    }
    lines
}

pub fn print_outcome(outcome: &RelocationOutcome, filtering: bool, archive: Option<&Path>) {
    let mut lines = summary_lines(outcome, filtering).into_iter();
    if let Some(first) = lines.next() {
        print_success(&first);
    }
    for line in lines {
        print_info(&line);
    }
    if let Some(a) = archive {
        print_success(&format!("Archive ready: {}", a.display()));
    }
}
