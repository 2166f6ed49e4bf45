//! The literal rewriter: splices a captured text into its expected-value
//! literal in the source document.
//!
//! Locating the literal's end is the one subtle piece: the literal's own
//! delimiter character may appear inside the content, escaped by doubling,
//! so a naive first-occurrence search would cut the span short. The scan in
//! [`find_literal_end`] and the doubling in [`escape_literal`] are exact
//! inverses of each other.

use crate::conventions::Conventions;
use crate::outcome::SkipReason;
use crate::report::TestFailure;

/// Rewrites the expected-value literal for one failing test.
///
/// Pure over the whole document: returns the updated text, or the reason
/// this record must be skipped, leaving the caller's document untouched.
pub fn apply_failure(
    source: &str,
    failure: &TestFailure,
    conv: &Conventions,
) -> Result<String, SkipReason> {
    let anchor = conv.anchor_for(&failure.identifier);
    let anchor_pos = source.find(&anchor).ok_or(SkipReason::TargetNotFound)?;
    let after_anchor = anchor_pos + anchor.len();

    // The introducer must be searched after the anchor, never before, so an
    // earlier declaration's literal can't be matched by mistake.
    let introducer_pos = source[after_anchor..]
        .find(&conv.introducer)
        .ok_or(SkipReason::LiteralNotFound)?;
    let content_start = after_anchor + introducer_pos + conv.introducer.len();

    let content_end = find_literal_end(source, content_start, conv.delimiter)
        .ok_or(SkipReason::LiteralUnterminated)?;

    let escaped = escape_literal(&failure.actual_text, conv.delimiter);

    let mut updated =
        String::with_capacity(source.len() - (content_end - content_start) + escaped.len());
    updated.push_str(&source[..content_start]);
    updated.push_str(&escaped);
    updated.push_str(&source[content_end..]);
    Ok(updated)
}

/// Scans forward from `start` for the literal's terminating delimiter.
///
/// A doubled delimiter is consumed as one escaped content character; the
/// first single delimiter terminates the literal. Returns the byte offset of
/// that terminator, or `None` when the document ends first.
pub fn find_literal_end(source: &str, start: usize, delimiter: char) -> Option<usize> {
    let mut chars = source[start..].char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c != delimiter {
            continue;
        }
        match chars.peek() {
            Some(&(_, next)) if next == delimiter => {
                chars.next();
            }
            _ => return Some(start + offset),
        }
    }
    None
}

/// Re-escapes captured text for the destination literal by doubling every
/// delimiter occurrence. All other characters, newlines included, pass
/// through verbatim.
pub fn escape_literal(text: &str, delimiter: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        escaped.push(c);
        if c == delimiter {
            escaped.push(c);
        }
    }
    escaped
}
