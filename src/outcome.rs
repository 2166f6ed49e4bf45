//! Per-record outcome values.
//!
//! "Identifier not found" and its siblings are expected conditions of a
//! best-effort batch run, so they are modeled as plain values collected into
//! a [`PatchReport`] rather than as errors. Only unreadable inputs and a
//! failed write-back are real errors (see [`crate::diagnostics`]).

use std::fmt;

/// Why a single record was dropped. Never fatal to the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The report section does not start with a word-token identifier.
    NoIdentifier,
    /// The section never introduces its captured text.
    NoCaptureStart,
    /// The section's captured text is never closed by the end marker.
    NoCaptureEnd,
    /// The identifier has no matching declaration in the source document.
    TargetNotFound,
    /// The declaration exists but no literal introducer follows it.
    LiteralNotFound,
    /// The literal never reaches a terminating delimiter before the document
    /// ends. The document is left untouched for this record.
    LiteralUnterminated,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::NoIdentifier => "section has no identifier token",
            SkipReason::NoCaptureStart => "capture start marker not found",
            SkipReason::NoCaptureEnd => "capture end marker not found",
            SkipReason::TargetNotFound => "no matching declaration in source",
            SkipReason::LiteralNotFound => "no literal introducer after declaration",
            SkipReason::LiteralUnterminated => "literal is never terminated",
        };
        write!(f, "{}", reason)
    }
}

/// What happened to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchStatus {
    Updated,
    Skipped(SkipReason),
}

/// One record's status, paired with its identifier when the parser managed
/// to extract one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub identifier: Option<String>,
    pub status: PatchStatus,
}

/// All per-record outcomes of a run, in the order they were processed.
#[derive(Debug, Default)]
pub struct PatchReport {
    pub outcomes: Vec<PatchOutcome>,
}

impl PatchReport {
    pub fn record(&mut self, identifier: Option<String>, status: PatchStatus) {
        self.outcomes.push(PatchOutcome { identifier, status });
    }

    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == PatchStatus::Updated)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.updated()
    }
}
