//! The fixed marker and delimiter strings that drive both pipeline stages.
//!
//! Both the report parser and the literal rewriter work purely on substring
//! searches against these strings; nothing else about either input format is
//! interpreted. The defaults match the failure-report trailer produced by
//! FluentAssertions and the verbatim-string test layout the tool was first
//! written against.

/// Marker strings shared by the report parser and the literal rewriter.
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Introduces each failure section in the report. Everything before the
    /// first occurrence is preamble and is discarded.
    pub section_marker: String,
    /// Precedes the captured text inside a section; matched leftmost.
    pub capture_start: String,
    /// Follows the captured text; matched rightmost, on the assumption that
    /// this trailer does not occur inside genuine captured content.
    pub capture_end: String,
    /// A declaration anchor is `anchor_prefix + identifier + anchor_suffix`.
    pub anchor_prefix: String,
    pub anchor_suffix: String,
    /// Marks the start of the literal content to replace, searched only
    /// after the declaration anchor.
    pub introducer: String,
    /// The literal's delimiter character. Two in immediate succession inside
    /// the literal stand for one content character; a single one terminates.
    pub delimiter: char,
}

impl Conventions {
    /// The anchor substring that introduces a specific declaration.
    pub fn anchor_for(&self, identifier: &str) -> String {
        format!("{}{}{}", self.anchor_prefix, identifier, self.anchor_suffix)
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            section_marker: "Failed XmlSourceGenerator.UnitTests.SourceGeneration.SnapshotTests."
                .to_string(),
            capture_start: "but \"".to_string(),
            capture_end: "\" has a length".to_string(),
            anchor_prefix: "public void ".to_string(),
            anchor_suffix: "()".to_string(),
            introducer: "var expectedCode = @\"".to_string(),
            delimiter: '"',
        }
    }
}
