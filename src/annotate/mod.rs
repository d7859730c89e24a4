// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Annotation extraction.
//!
//! Turns the raw collaborator contract into the parsed model: cleanup of the
//! graded blob, per-line marker extraction, and paragraph-bound detection.

pub mod cleanup;
pub mod paragraphs;
pub mod parse;

pub use cleanup::{clean_annotated_text, restore_lead_paragraph};
pub use paragraphs::paragraph_bounds;
pub use parse::parse_line;

use crate::model::{GradedDocument, ParsedLine, Review};

/// Parses a [`Review`] into a [`GradedDocument`], applying the cleanup
/// tolerances first. This runs once per viewing session; the result is
/// immutable and only layout is recomputed per frame.
pub fn parse_review(review: &Review) -> GradedDocument {
    let cleaned = clean_annotated_text(&review.annotated_text);
    let lines = cleaned.lines().map(parse_line).collect::<Vec<ParsedLine>>();
    let paragraph_ranges = paragraph_bounds(&lines);
    GradedDocument::new(lines, paragraph_ranges, review.paragraph_feedback.clone())
}

#[cfg(test)]
mod tests {
    use super::parse_review;
    use crate::model::{Category, Review};

    #[test]
    fn parse_review_wires_cleanup_parsing_and_paragraphs_together() {
        let review = Review::new(
            "Gr: preamble to drop\nTitle\n\n1 Body[Sp|typo] text\nsecond[Gr|tense] line",
            vec!["fine title".to_owned(), "solid paragraph".to_owned()],
        );

        let doc = parse_review(&review);
        assert_eq!(doc.lines().len(), 4);
        assert_eq!(doc.lines()[2].plain_text(), "Body* text");
        assert_eq!(doc.annotations().len(), 2);
        assert_eq!(doc.annotations()[0].category(), Category::Spelling);
        assert_eq!(doc.annotations()[1].line_index(), 3);

        let bounds = doc
            .paragraphs()
            .iter()
            .map(|paragraph| (paragraph.start_line(), paragraph.end_line()))
            .collect::<Vec<_>>();
        assert_eq!(bounds, vec![(0, 0), (2, 3)]);
        assert_eq!(doc.feedback_at_line_end(0), Some("fine title"));
        assert_eq!(doc.feedback_at_line_end(3), Some("solid paragraph"));
    }

    #[test]
    fn empty_review_stays_fully_formed() {
        let doc = parse_review(&Review::default());
        assert!(doc.lines().is_empty());
        assert!(doc.paragraphs().is_empty());
        assert!(doc.annotations().is_empty());
    }
}
