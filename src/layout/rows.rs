// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{layout_line, wrap_exact, DisplaySegment};
use crate::model::GradedDocument;

/// One logical display row, the unit scroll offset and viewport height are
/// measured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalRow {
    /// A wrapped text segment. `first_error_index` is the document-wide
    /// index of the segment's first marker; markers within a segment occupy
    /// consecutive indices.
    Text {
        segment: DisplaySegment,
        first_error_index: usize,
    },
    /// One wrapped row of a paragraph's feedback remark.
    Feedback { text: String },
    /// The blank separator after a feedback block.
    Blank,
}

/// Flattens the whole document into logical rows at the given wrap width.
///
/// When `show_feedback` is set, the feedback attached to a paragraph's end
/// line follows that line's segments, wrapped at the same width, plus one
/// blank separator row. Toggling feedback therefore changes the row count
/// and callers must re-clamp their scroll offset against the new total.
pub fn document_rows(doc: &GradedDocument, width: usize, show_feedback: bool) -> Vec<LogicalRow> {
    let mut rows = Vec::new();
    let mut error_index = 0;

    for (line_index, line) in doc.lines().iter().enumerate() {
        for segment in layout_line(line_index, line, width) {
            let first_error_index = error_index;
            error_index += segment.markers().len();
            rows.push(LogicalRow::Text {
                segment,
                first_error_index,
            });
        }

        if show_feedback {
            if let Some(feedback) = doc.feedback_at_line_end(line_index) {
                for text in wrap_exact(feedback, width) {
                    rows.push(LogicalRow::Feedback { text });
                }
                rows.push(LogicalRow::Blank);
            }
        }
    }

    rows
}

/// Upper scroll bound for a row list of `total_rows` in a viewport of
/// `viewport_height` with `reserved_rows` taken by the header.
pub fn max_scroll(total_rows: usize, viewport_height: usize, reserved_rows: usize) -> usize {
    total_rows.saturating_sub(viewport_height.saturating_sub(reserved_rows))
}
