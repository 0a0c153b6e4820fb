//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow xcsync to be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, SyncSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of items listed per section unless verbose.
const MAX_ITEMS_DISPLAY: usize = 20;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Sync(summary) => print_sync(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    if summary.pending.is_empty() && summary.stale_keys.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} is up to date ({})",
                summary.catalog_path,
                summary.target_languages.join(", ")
            )
            .green()
        );
        return;
    }

    print_items(writer, &summary.stale_keys, "stale".red(), verbose);
    print_items(writer, &summary.pending, "missing".yellow(), verbose);

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{}: {} translation(s) missing, {} stale key(s)",
            summary.catalog_path,
            summary.pending.len(),
            summary.stale_keys.len()
        )
        .red()
        .bold()
    );
    let _ = writeln!(writer, "Run {} to update the catalog.", "xcsync sync".cyan());
}

fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    let changes = &summary.changes;
    print_items(writer, &changes.added, "added".green(), verbose);
    print_items(writer, &changes.updated, "updated".cyan(), verbose);
    print_items(writer, &changes.stale_removed, "removed".red(), verbose);

    if summary.written {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{}: {}", summary.catalog_path, changes.commit_message()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date", summary.catalog_path).green()
        );
    }

    if let Some(path) = &summary.summary_path {
        let _ = writeln!(writer, "Summary written to {}", path.cyan());
    }

    if !summary.pending.is_empty() {
        print_items(writer, &summary.pending, "missing".yellow(), verbose);
        let _ = writeln!(
            writer,
            "{} {} translation(s) were not returned by the provider; they will be retried on the next sync",
            "warning:".bold().yellow(),
            summary.pending.len()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path).green()
    );
}

fn print_items<W: Write>(writer: &mut W, items: &[String], tag: ColoredString, verbose: bool) {
    let limit = if verbose { items.len() } else { MAX_ITEMS_DISPLAY };
    for item in items.iter().take(limit) {
        let _ = writeln!(writer, "  {:>8} {}", tag, item);
    }
    if items.len() > limit {
        let _ = writeln!(
            writer,
            "  {:>8} ... and {} more (use {} to show all)",
            "",
            items.len() - limit,
            "-v".cyan()
        );
    }
}
