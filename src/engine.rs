//! Composes the report parser and the literal rewriter into one run.

use crate::conventions::Conventions;
use crate::outcome::{PatchReport, PatchStatus};
use crate::report;
use crate::rewrite;

/// Patches every record of `report_text` into `source`, threading the
/// document through one strictly sequential fold.
///
/// Each record is located against the document as left by the records before
/// it, so duplicate identifiers resolve to last-write-wins and offsets stay
/// valid across edits. Section-level skips from the parser are carried into
/// the returned [`PatchReport`] alongside the per-record rewrite outcomes.
pub fn patch_document(
    source: &str,
    report_text: &str,
    conv: &Conventions,
) -> (String, PatchReport) {
    let parsed = report::parse_report(report_text, conv);

    let mut outcomes = PatchReport::default();
    for skip in parsed.skipped {
        outcomes.record(skip.identifier, PatchStatus::Skipped(skip.reason));
    }

    let mut document = source.to_string();
    for failure in &parsed.failures {
        match rewrite::apply_failure(&document, failure, conv) {
            Ok(updated) => {
                document = updated;
                outcomes.record(Some(failure.identifier.clone()), PatchStatus::Updated);
            }
            Err(reason) => {
                outcomes.record(
                    Some(failure.identifier.clone()),
                    PatchStatus::Skipped(reason),
                );
            }
        }
    }

    (document, outcomes)
}
