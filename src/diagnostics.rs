//! Fatal errors, rendered through miette from the CLI entry point.
//!
//! Only a missing input or a failed write-back aborts a run. Everything that
//! can go wrong with an individual record is an expected condition and lives
//! in [`crate::outcome`] instead.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReblessError {
    #[error("cannot read failure report '{path}'")]
    #[diagnostic(
        code(rebless::report_unreadable),
        help("run the failing tests first and save their output to this path")
    )]
    ReportUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read test source '{path}'")]
    #[diagnostic(code(rebless::source_unreadable))]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write updated test source '{path}'")]
    #[diagnostic(code(rebless::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
