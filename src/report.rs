//! The report parser: raw failure-report text to per-test records.
//!
//! A report is a preamble followed by repeated sections, each introduced by
//! the section marker and an identifier token, with the captured actual text
//! bracketed between a start marker and an end marker. Sections that cannot
//! be resolved are skipped softly; the rest of the report is still used.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::conventions::Conventions;
use crate::outcome::SkipReason;

/// Leading run of word characters at the start of a section.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

/// One failing test: the bare name and the exact text the system under test
/// produced, byte-for-byte as captured in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    pub identifier: String,
    pub actual_text: String,
}

/// A section the parser could not turn into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSkip {
    /// Present when the identifier was extracted before the section failed.
    pub identifier: Option<String>,
    pub reason: SkipReason,
}

/// Result of parsing one report: the usable records in section order, plus
/// every section that had to be dropped.
#[derive(Debug, Default)]
pub struct ParsedReport {
    pub failures: Vec<TestFailure>,
    pub skipped: Vec<SectionSkip>,
}

/// Parses a failure report into per-test records.
///
/// The start marker is matched leftmost within a section, the end marker
/// rightmost. The rightmost match rests on the assumption that the end
/// marker is a fixed trailer that does not occur inside genuine captured
/// content; if it does, the last occurrence wins. The captured text is taken
/// verbatim, with no trimming and no escape decoding.
///
/// An empty report, or one with no sections, parses to an empty result.
pub fn parse_report(report: &str, conv: &Conventions) -> ParsedReport {
    let mut parsed = ParsedReport::default();

    let mut segments = report.split(conv.section_marker.as_str());
    // Everything before the first section marker is preamble.
    segments.next();

    for segment in segments {
        let Some(m) = IDENTIFIER.find(segment) else {
            parsed.skipped.push(SectionSkip {
                identifier: None,
                reason: SkipReason::NoIdentifier,
            });
            continue;
        };
        let identifier = m.as_str().to_string();

        let Some(start) = segment.find(&conv.capture_start) else {
            parsed.skipped.push(SectionSkip {
                identifier: Some(identifier),
                reason: SkipReason::NoCaptureStart,
            });
            continue;
        };
        let text_start = start + conv.capture_start.len();

        // An end marker found only before the capture starts is as good as
        // absent; a backwards span is never produced.
        match segment.rfind(&conv.capture_end) {
            Some(text_end) if text_end >= text_start => {
                parsed.failures.push(TestFailure {
                    identifier,
                    actual_text: segment[text_start..text_end].to_string(),
                });
            }
            _ => {
                parsed.skipped.push(SectionSkip {
                    identifier: Some(identifier),
                    reason: SkipReason::NoCaptureEnd,
                });
            }
        }
    }

    parsed
}
