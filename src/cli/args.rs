//! Defines the command-line arguments for the rebless CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

use crate::conventions::Conventions;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "rebless",
    version,
    about = "Sync inline expected-output literals with the actual output captured in a failure report."
)]
pub struct ReblessArgs {
    /// The path to the captured failure-report text.
    #[arg(required = true)]
    pub report: PathBuf,

    /// The path to the test source file holding the expected-value literals.
    /// Rewritten in place.
    #[arg(required = true)]
    pub source: PathBuf,

    /// Patch in memory and print outcomes without writing the file back.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a line diff of the document when anything was updated.
    #[arg(long)]
    pub diff: bool,

    /// Override the string introducing each failure section in the report.
    #[arg(long, value_name = "STRING")]
    pub section_marker: Option<String>,

    /// Override the marker preceding the captured text.
    #[arg(long, value_name = "STRING")]
    pub capture_start: Option<String>,

    /// Override the marker following the captured text.
    #[arg(long, value_name = "STRING")]
    pub capture_end: Option<String>,

    /// Override the text before the identifier in a declaration anchor.
    #[arg(long, value_name = "STRING")]
    pub anchor_prefix: Option<String>,

    /// Override the text after the identifier in a declaration anchor.
    #[arg(long, value_name = "STRING")]
    pub anchor_suffix: Option<String>,

    /// Override the string that introduces the literal content.
    #[arg(long, value_name = "STRING")]
    pub introducer: Option<String>,

    /// Override the literal's delimiter character.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,
}

impl ReblessArgs {
    /// The marker conventions for this run: the defaults, with any CLI
    /// overrides applied on top.
    pub fn conventions(&self) -> Conventions {
        let mut conv = Conventions::default();
        if let Some(s) = &self.section_marker {
            conv.section_marker = s.clone();
        }
        if let Some(s) = &self.capture_start {
            conv.capture_start = s.clone();
        }
        if let Some(s) = &self.capture_end {
            conv.capture_end = s.clone();
        }
        if let Some(s) = &self.anchor_prefix {
            conv.anchor_prefix = s.clone();
        }
        if let Some(s) = &self.anchor_suffix {
            conv.anchor_suffix = s.clone();
        }
        if let Some(s) = &self.introducer {
            conv.introducer = s.clone();
        }
        if let Some(c) = self.delimiter {
            conv.delimiter = c;
        }
        conv
    }
}
