//! The rebless command-line interface.
//!
//! This module is the entry point for the binary and orchestrates the core
//! library functions: read both inputs once, run the patch fold, report each
//! record's outcome, and write the document back once.

use clap::Parser;
use std::{fs, process};

use crate::cli::args::ReblessArgs;
use crate::diagnostics::ReblessError;
use crate::engine;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ReblessArgs::parse();

    if let Err(e) = run_with(&args) {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn run_with(args: &ReblessArgs) -> Result<(), ReblessError> {
    let conv = args.conventions();

    let report_text =
        fs::read_to_string(&args.report).map_err(|source| ReblessError::ReportUnreadable {
            path: args.report.clone(),
            source,
        })?;
    let source_text =
        fs::read_to_string(&args.source).map_err(|source| ReblessError::SourceUnreadable {
            path: args.source.clone(),
            source,
        })?;

    let (document, outcomes) = engine::patch_document(&source_text, &report_text, &conv);

    output::print_outcomes(&outcomes);

    if args.diff && document != source_text {
        output::print_diff(&source_text, &document);
    }

    if !args.dry_run && document != source_text {
        fs::write(&args.source, &document).map_err(|source| ReblessError::WriteFailed {
            path: args.source.clone(),
            source,
        })?;
    }

    output::print_summary(&outcomes, args.dry_run);
    Ok(())
}
