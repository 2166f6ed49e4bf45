// tests/engine_tests.rs
//
// End-to-end coverage of the parse-then-fold pipeline over an in-memory
// document, without touching a filesystem.

use rebless::conventions::Conventions;
use rebless::engine::patch_document;
use rebless::outcome::{PatchStatus, SkipReason};

fn conv() -> Conventions {
    Conventions {
        section_marker: "Failed MyTests.".to_string(),
        ..Conventions::default()
    }
}

fn section(identifier: &str, actual: &str) -> String {
    format!(
        "Failed MyTests.{} Expected actualCode to be \"...\" \
         but \"{}\" has a length of {}.\n",
        identifier,
        actual,
        actual.len()
    )
}

fn declaration(identifier: &str, literal: &str) -> String {
    format!(
        "    [Fact]\n    public void {}()\n    {{\n        var expectedCode = @\"{}\";\n    }}\n\n",
        identifier, literal
    )
}

#[test]
fn updates_every_named_literal_and_nothing_else() {
    let source = format!(
        "public class MyTests\n{{\n{}{}{}}}\n",
        declaration("Alpha", "old a"),
        declaration("Beta", "old b"),
        declaration("Gamma", "untouched")
    );
    let report = format!("{}{}", section("Alpha", "new a"), section("Beta", "new b"));

    let (document, outcomes) = patch_document(&source, &report, &conv());

    let expected = format!(
        "public class MyTests\n{{\n{}{}{}}}\n",
        declaration("Alpha", "new a"),
        declaration("Beta", "new b"),
        declaration("Gamma", "untouched")
    );
    assert_eq!(document, expected);
    assert_eq!(outcomes.updated(), 2);
    assert_eq!(outcomes.skipped(), 0);
}

#[test]
fn applying_a_record_is_idempotent() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", ""));
    let report = section("Foo", "generated body");

    let (once, _) = patch_document(&source, &report, &conv());
    let (twice, outcomes) = patch_document(&once, &report, &conv());

    assert_eq!(once, twice);
    assert_eq!(outcomes.updated(), 1);
}

#[test]
fn duplicate_identifiers_resolve_to_the_last_capture() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", "stale"));
    let report = format!("{}{}", section("Foo", "first"), section("Foo", "second"));

    let (document, outcomes) = patch_document(&source, &report, &conv());

    assert!(document.contains("var expectedCode = @\"second\";"));
    assert!(!document.contains("first"));
    // Both records were applied; the second overwrote the first.
    assert_eq!(outcomes.updated(), 2);
}

#[test]
fn captured_quotes_survive_the_round_trip() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", ""));
    let report = section("Foo", "A \"quoted\" B");

    let (document, _) = patch_document(&source, &report, &conv());

    assert!(document.contains("var expectedCode = @\"A \"\"quoted\"\" B\";"));
}

#[test]
fn unknown_identifier_leaves_the_document_unchanged() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", "body"));
    let report = section("Bar", "irrelevant");

    let (document, outcomes) = patch_document(&source, &report, &conv());

    assert_eq!(document, source);
    assert_eq!(outcomes.outcomes.len(), 1);
    assert_eq!(outcomes.outcomes[0].identifier.as_deref(), Some("Bar"));
    assert_eq!(
        outcomes.outcomes[0].status,
        PatchStatus::Skipped(SkipReason::TargetNotFound)
    );
}

#[test]
fn section_missing_its_end_marker_changes_nothing() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", "body"));
    let report = "Failed MyTests.Foo but \"capture that never ends";

    let (document, outcomes) = patch_document(&source, report, &conv());

    assert_eq!(document, source);
    assert_eq!(
        outcomes.outcomes[0].status,
        PatchStatus::Skipped(SkipReason::NoCaptureEnd)
    );
}

#[test]
fn empty_report_is_a_no_op() {
    let source = format!("class C\n{{\n{}}}\n", declaration("Foo", "body"));

    let (document, outcomes) = patch_document(&source, "", &conv());

    assert_eq!(document, source);
    assert!(outcomes.outcomes.is_empty());
}

#[test]
fn good_records_apply_even_when_others_skip() {
    let source = format!(
        "class C\n{{\n{}{}}}\n",
        declaration("Kept", "old"),
        declaration("Other", "other")
    );
    let report = format!(
        "{}{}{}",
        section("Removed", "gone from source"),
        "Failed MyTests.Broken no markers at all\n",
        section("Kept", "fresh")
    );

    let (document, outcomes) = patch_document(&source, &report, &conv());

    assert!(document.contains("var expectedCode = @\"fresh\";"));
    assert!(document.contains("var expectedCode = @\"other\";"));
    assert_eq!(outcomes.updated(), 1);
    assert_eq!(outcomes.skipped(), 2);
}
