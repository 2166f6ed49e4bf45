//! Handles all user-facing output for the CLI.
//!
//! Per-record status lines, the run summary, and the optional colored line
//! diff all live here so every code path reports in the same voice.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::outcome::{PatchReport, PatchStatus};

/// Prints one status line per record, in processing order.
pub fn print_outcomes(report: &PatchReport) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for outcome in &report.outcomes {
        let name = outcome.identifier.as_deref().unwrap_or("<unnamed section>");
        match &outcome.status {
            PatchStatus::Updated => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                print!("updated");
                let _ = stdout.reset();
                println!(" {}", name);
            }
            PatchStatus::Skipped(reason) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
                print!("skipped");
                let _ = stdout.reset();
                println!(" {} ({})", name, reason);
            }
        }
    }
}

/// Prints the final completion notice.
pub fn print_summary(report: &PatchReport, dry_run: bool) {
    let action = if dry_run { "would update" } else { "updated" };
    println!(
        "done: {} {}, {} skipped",
        action,
        report.updated(),
        report.skipped()
    );
}

/// Prints a colored line diff between the original and updated document.
pub fn print_diff(before: &str, after: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let changeset = Changeset::new(before, after, "\n");

    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => {
                let _ = stdout.reset();
                println!(" {}", x);
            }
            Difference::Add(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                println!("+{}", x);
            }
            Difference::Rem(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                println!("-{}", x);
            }
        }
    }
    let _ = stdout.reset();
}
