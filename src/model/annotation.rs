// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::category::Category;

/// The glyph substituted for a full `word[CODE|reason]` span in plain text.
pub const MARKER: char = '*';

/// One extracted annotation, addressed by the source line it was found on.
///
/// The flat, document-ordered annotation sequence defines navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    line_index: usize,
    category: Category,
    message: String,
}

impl Annotation {
    pub fn new(line_index: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line_index,
            category,
            message: message.into(),
        }
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Per-line annotation payload as extracted by the parser, in marker order.
pub type LineAnnotations = SmallVec<[(Category, String); 4]>;

/// One source line after marker extraction.
///
/// Invariant: `plain_text` contains exactly `annotations.len()` [`MARKER`]
/// glyphs, and their left-to-right order matches `annotations`. The layout
/// stage depends on this alignment and must never reorder either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    plain_text: String,
    annotations: LineAnnotations,
}

impl ParsedLine {
    pub fn new(plain_text: impl Into<String>, annotations: LineAnnotations) -> Self {
        Self {
            plain_text: plain_text.into(),
            annotations,
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn annotations(&self) -> &[(Category, String)] {
        &self.annotations
    }

    pub fn is_blank(&self) -> bool {
        self.plain_text.trim().is_empty()
    }
}

/// An inclusive range of parsed-line indices forming one paragraph.
///
/// Paragraphs are disjoint, non-empty, ordered by `start_line`, and separated
/// by at least one blank line. `end_line` is the anchor where the paragraph's
/// feedback is attached during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph {
    start_line: usize,
    end_line: usize,
}

impl Paragraph {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        debug_assert!(start_line <= end_line, "paragraph range must be non-empty");
        Self {
            start_line,
            end_line,
        }
    }

    pub fn start_line(self) -> usize {
        self.start_line
    }

    pub fn end_line(self) -> usize {
        self.end_line
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{Category, ParsedLine, MARKER};

    #[test]
    fn parsed_line_reports_blankness_on_whitespace() {
        assert!(ParsedLine::new("", smallvec![]).is_blank());
        assert!(ParsedLine::new("   \t", smallvec![]).is_blank());
        assert!(!ParsedLine::new("text", smallvec![]).is_blank());
    }

    #[test]
    fn parsed_line_keeps_marker_alignment() {
        let line = ParsedLine::new(
            format!("one {MARKER} two {MARKER}"),
            smallvec![
                (Category::Spelling, "first".to_owned()),
                (Category::Grammar, "second".to_owned()),
            ],
        );
        assert_eq!(line.annotations().len(), 2);
        assert_eq!(line.plain_text().matches(MARKER).count(), 2);
    }
}
