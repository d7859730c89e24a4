// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout: word-wrapped display segments and the logical-row list.
//!
//! Layout is recomputed per frame against the current viewport width; the
//! parsed document itself never changes during a session.

pub mod rows;
pub mod wrap;

pub use rows::{document_rows, max_scroll, LogicalRow};
pub use wrap::wrap_exact;

use crate::model::{Category, ParsedLine, MARKER};

/// One marker glyph inside a display segment, addressed by character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMarker {
    pub offset: usize,
    pub category: Category,
}

/// One wrapped visual row of a parsed line.
///
/// Segments for a line are produced in order and concatenate back to the
/// line's plain text exactly; `markers` lists the marker glyphs that landed
/// in this segment, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    source_line: usize,
    text: String,
    markers: Vec<SegmentMarker>,
}

impl DisplaySegment {
    pub fn source_line(&self) -> usize {
        self.source_line
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markers(&self) -> &[SegmentMarker] {
        &self.markers
    }

    /// Ordered category codes for this segment's tag summary gutter.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.markers.iter().map(|marker| marker.category)
    }
}

/// The one shared cursor between wrapping and marker rebinding.
///
/// The i-th marker glyph encountered across all segments (segment order,
/// then left-to-right) consumes the i-th annotation. A single consuming
/// cursor, rather than re-scanning text with separately maintained counters,
/// keeps the two sequences impossible to desynchronize during wrapping.
struct MarkerCursor<'a> {
    annotations: &'a [(Category, String)],
    next: usize,
}

impl<'a> MarkerCursor<'a> {
    fn new(annotations: &'a [(Category, String)]) -> Self {
        Self {
            annotations,
            next: 0,
        }
    }

    fn take(&mut self) -> Option<&'a (Category, String)> {
        let annotation = self.annotations.get(self.next)?;
        self.next += 1;
        Some(annotation)
    }
}

/// Wraps one parsed line at `width` columns and rebinds its marker glyphs to
/// (segment, column) positions.
///
/// A marker that lands exactly on a wrap boundary belongs to the segment
/// that contains it. An empty line yields exactly one empty segment.
pub fn layout_line(source_line: usize, parsed: &ParsedLine, width: usize) -> Vec<DisplaySegment> {
    let mut cursor = MarkerCursor::new(parsed.annotations());

    wrap_exact(parsed.plain_text(), width)
        .into_iter()
        .map(|text| {
            let mut markers = Vec::new();
            for (offset, ch) in text.chars().enumerate() {
                if ch == MARKER {
                    if let Some((category, _)) = cursor.take() {
                        markers.push(SegmentMarker {
                            offset,
                            category: *category,
                        });
                    }
                }
            }
            DisplaySegment {
                source_line,
                text,
                markers,
            }
        })
        .collect()
}
