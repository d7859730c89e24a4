// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Paragraph, ParsedLine};

/// Computes paragraph ranges over parsed lines.
///
/// Only genuinely blank (whitespace-only plain text) lines separate
/// paragraphs. Line content is never special-cased: numbered lines and
/// markdown-ish prefixes belong to the surrounding paragraph.
pub fn paragraph_bounds(lines: &[ParsedLine]) -> Vec<Paragraph> {
    let mut bounds = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.is_blank() {
            if let Some(start) = open.take() {
                bounds.push(Paragraph::new(start, idx - 1));
            }
        } else if open.is_none() {
            open = Some(idx);
        }
    }

    if let Some(start) = open {
        bounds.push(Paragraph::new(start, lines.len() - 1));
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::paragraph_bounds;
    use crate::annotate::parse_line;
    use crate::model::ParsedLine;

    fn parsed(lines: &[&str]) -> Vec<ParsedLine> {
        lines.iter().map(|line| parse_line(line)).collect()
    }

    fn ranges(lines: &[&str]) -> Vec<(usize, usize)> {
        paragraph_bounds(&parsed(lines))
            .into_iter()
            .map(|paragraph| (paragraph.start_line(), paragraph.end_line()))
            .collect()
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        let bounds =
            ranges(&["Title", "", "Line A[Sp|x] more", "continues", "", "Final[St|y]"]);
        assert_eq!(bounds, vec![(0, 0), (2, 3), (5, 5)]);
    }

    #[test]
    fn empty_input_yields_no_paragraphs() {
        assert_eq!(ranges(&[]), Vec::<(usize, usize)>::new());
        assert_eq!(ranges(&["", "   ", ""]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn trailing_paragraph_is_closed_at_the_last_line() {
        assert_eq!(ranges(&["a", "b"]), vec![(0, 1)]);
    }

    #[test]
    fn consecutive_blank_lines_do_not_create_empty_paragraphs() {
        assert_eq!(ranges(&["a", "", "", "b"]), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn numbered_lines_are_not_separators() {
        assert_eq!(ranges(&["1. first", "2. second"]), vec![(0, 1)]);
    }

    #[test]
    fn marker_only_lines_are_not_blank() {
        // A line whose visible text is just an extracted marker still counts.
        assert_eq!(ranges(&["word[Gr|oops]"]), vec![(0, 0)]);
    }
}
