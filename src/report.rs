use crate::patch::{Outcome, PatchReport};

/// Caps `s` at `max` bytes, backing up to a char boundary so multibyte
/// content never splits mid-character.
pub fn clip(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = s[..end].to_string();
    out.push_str("… [truncated]");
    out
}

/// One status line per patch. Line numbers are 1-based.
pub fn print_outcome(report: &PatchReport) {
    match &report.outcome {
        Outcome::Applied { line } => {
            println!(
                "\u{001b}[32m✓ {} applied at line {}\u{001b}[0m",
                report.id, line
            );
        }
        Outcome::AlreadyApplied => {
            println!(
                "\u{001b}[90m• {} already applied — no changes\u{001b}[0m",
                report.id
            );
        }
        Outcome::NotFound => {
            println!(
                "\u{001b}[33m⚠ {} anchor not found — file left untouched by this patch\u{001b}[0m",
                report.id
            );
        }
    }
}

const PREVIEW_MAX_LINES: usize = 8;
const PREVIEW_MAX_COLS: usize = 96;

fn print_preview_block(text: &str, sign: char, color: &str) {
    let mut lines = text.lines();
    for line in lines.by_ref().take(PREVIEW_MAX_LINES) {
        println!(
            "\u{001b}[{color}m│ {sign} {}\u{001b}[0m",
            clip(line, PREVIEW_MAX_COLS)
        );
    }
    if lines.next().is_some() {
        println!("\u{001b}[90m│ ... (truncated)\u{001b}[0m");
    }
}

/// Prints the replaced anchor against the incoming block, capped for
/// readability.
pub fn print_patch_preview(old_str: &str, new_str: &str) {
    println!("\u{001b}[36m╭─ Changes\u{001b}[0m");
    print_preview_block(old_str, '-', "31");
    print_preview_block(new_str, '+', "32");
    println!("\u{001b}[36m╰─\u{001b}[0m");
}
