// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::annotation::{Annotation, Paragraph, ParsedLine};

/// The raw review contract as received from the grading collaborator or
/// loaded from a review file: annotated text plus one feedback string per
/// paragraph, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Review {
    pub annotated_text: String,
    pub paragraph_feedback: Vec<String>,
}

impl Review {
    pub fn new(annotated_text: impl Into<String>, paragraph_feedback: Vec<String>) -> Self {
        Self {
            annotated_text: annotated_text.into(),
            paragraph_feedback,
        }
    }
}

/// A fully parsed review, built once per viewing session.
///
/// Holds the parsed lines, the paragraph ranges over them, the flat
/// document-ordered annotation list, and the paragraph feedback strings.
/// Immutable after construction; the TUI re-runs only layout per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedDocument {
    lines: Vec<ParsedLine>,
    paragraphs: Vec<Paragraph>,
    annotations: Vec<Annotation>,
    paragraph_feedback: Vec<String>,
}

impl GradedDocument {
    pub fn new(
        lines: Vec<ParsedLine>,
        paragraphs: Vec<Paragraph>,
        paragraph_feedback: Vec<String>,
    ) -> Self {
        let mut annotations = Vec::new();
        for (line_index, line) in lines.iter().enumerate() {
            for (category, message) in line.annotations() {
                annotations.push(Annotation::new(line_index, *category, message.clone()));
            }
        }

        Self {
            lines,
            paragraphs,
            annotations,
            paragraph_feedback,
        }
    }

    pub fn lines(&self) -> &[ParsedLine] {
        &self.lines
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// All annotations in navigation order (left-to-right within a line,
    /// lines in document order).
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn paragraph_feedback(&self) -> &[String] {
        &self.paragraph_feedback
    }

    /// Feedback attached to the paragraph ending at `line_index`, if any.
    ///
    /// Feedback is keyed by the paragraph's end-line anchor; the feedback
    /// ordinal equals the paragraph ordinal in source order.
    pub fn feedback_at_line_end(&self, line_index: usize) -> Option<&str> {
        self.paragraphs
            .iter()
            .position(|paragraph| paragraph.end_line() == line_index)
            .and_then(|ordinal| self.paragraph_feedback.get(ordinal))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{GradedDocument, ParsedLine};
    use crate::model::{Category, Paragraph};

    fn line(text: &str) -> ParsedLine {
        ParsedLine::new(text, smallvec![])
    }

    fn annotated_line(text: &str, annotations: &[(Category, &str)]) -> ParsedLine {
        ParsedLine::new(
            text,
            annotations
                .iter()
                .map(|(category, message)| (*category, (*message).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn annotations_flatten_in_document_order() {
        let doc = GradedDocument::new(
            vec![
                annotated_line("a * b *", &[(Category::Spelling, "one"), (Category::Grammar, "two")]),
                line(""),
                annotated_line("c *", &[(Category::Style, "three")]),
            ],
            vec![Paragraph::new(0, 0), Paragraph::new(2, 2)],
            Vec::new(),
        );

        let flat = doc
            .annotations()
            .iter()
            .map(|annotation| (annotation.line_index(), annotation.message()))
            .collect::<Vec<_>>();
        assert_eq!(flat, vec![(0, "one"), (0, "two"), (2, "three")]);
    }

    #[test]
    fn feedback_is_keyed_by_paragraph_end_line() {
        let doc = GradedDocument::new(
            vec![line("title"), line(""), line("body"), line("more")],
            vec![Paragraph::new(0, 0), Paragraph::new(2, 3)],
            vec!["first".to_owned(), "second".to_owned()],
        );

        assert_eq!(doc.feedback_at_line_end(0), Some("first"));
        assert_eq!(doc.feedback_at_line_end(3), Some("second"));
        assert_eq!(doc.feedback_at_line_end(2), None);
    }

    #[test]
    fn feedback_beyond_paragraph_count_is_ignored() {
        let doc = GradedDocument::new(
            vec![line("only")],
            vec![Paragraph::new(0, 0)],
            vec!["kept".to_owned(), "dropped".to_owned()],
        );

        assert_eq!(doc.feedback_at_line_end(0), Some("kept"));
        assert_eq!(doc.feedback_at_line_end(1), None);
    }
}
