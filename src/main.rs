use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use splicer::patch::{Anchor, Outcome, apply_all};
use splicer::report::{print_outcome, print_patch_preview};
use splicer::{Document, PatchSet, history_view};

struct Args {
    target: PathBuf,
    patch_file: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
}

fn usage() -> ! {
    eprintln!("usage: splicer <file> [--patches <set.json>] [--dry-run] [--quiet]");
    eprintln!();
    eprintln!("Applies the built-in history-view patch set to <file>, or a");
    eprintln!("patch set loaded from JSON. Re-running is a no-op.");
    std::process::exit(2);
}

fn parse_args() -> Args {
    let mut target = None;
    let mut patch_file = None;
    let mut dry_run = false;
    let mut quiet = false;

    let mut it = env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--patches" => match it.next() {
                Some(p) => patch_file = Some(PathBuf::from(p)),
                None => usage(),
            },
            "--dry-run" => dry_run = true,
            "--quiet" => quiet = true,
            "--help" | "-h" => usage(),
            _ if target.is_none() => target = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }

    match target {
        Some(target) => Args {
            target,
            patch_file,
            dry_run,
            quiet,
        },
        None => usage(),
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let set = match &args.patch_file {
        Some(path) => PatchSet::load(path)?,
        None => history_view::patch_set(),
    };

    let mut doc = Document::load(&args.target)?;
    let reports = apply_all(&mut doc, &set.patches);

    let mut applied = 0usize;
    let mut missing = 0usize;
    for (report, patch) in reports.iter().zip(&set.patches) {
        if !args.quiet {
            print_outcome(report);
        }
        match report.outcome {
            Outcome::Applied { .. } => {
                applied += 1;
                if !args.quiet {
                    if let Anchor::Substring { text } = &patch.anchor {
                        print_patch_preview(text, &patch.replacement);
                    }
                }
            }
            Outcome::NotFound => missing += 1,
            Outcome::AlreadyApplied => {}
        }
    }

    if applied > 0 {
        if args.dry_run {
            println!(
                "\u{001b}[36mdry run: {} patch(es) would be written to {}\u{001b}[0m",
                applied,
                args.target.display()
            );
        } else {
            doc.save(&args.target)?;
            println!(
                "\u{001b}[32m✓ wrote {} ({} patch(es) from set '{}')\u{001b}[0m",
                args.target.display(),
                applied,
                set.name
            );
        }
    } else if !args.quiet {
        println!("no changes to write");
    }

    Ok(missing == 0)
}

fn main() -> ExitCode {
    let args = parse_args();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("\u{001b}[33msome anchors were not found; fix the file and re-run\u{001b}[0m");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("\u{001b}[91mError:\u{001b}[0m {e}");
            ExitCode::FAILURE
        }
    }
}
