// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memchr;

use crate::model::{Category, LineAnnotations, ParsedLine, MARKER};

/// Extracts inline `word[CODE|reason]` markers from one line.
///
/// Single forward scan, no regex engine. On `[`, the scanner looks ahead for
/// the next `]` and, before it, the next `|`; if both exist and the text
/// between `[` and `|` trims to a known category code, the whole span is
/// replaced by one [`MARKER`] glyph and the (category, message) pair is
/// recorded. Any other `[` is a literal character. Markers never span lines;
/// the first valid `]`/`|` pair wins, so nested-looking brackets fall back to
/// literal text.
pub fn parse_line(line: &str) -> ParsedLine {
    let bytes = line.as_bytes();
    let mut plain = String::with_capacity(line.len());
    let mut annotations = LineAnnotations::new();

    let mut i = 0;
    while i < line.len() {
        if bytes[i] == b'[' {
            if let Some(marker) = scan_marker(line, i) {
                plain.push(MARKER);
                annotations.push((marker.category, marker.message));
                i = marker.resume_at;
                continue;
            }
        }

        let Some(ch) = line[i..].chars().next() else {
            break;
        };
        plain.push(ch);
        i += ch.len_utf8();
    }

    ParsedLine::new(plain, annotations)
}

struct ScannedMarker {
    category: Category,
    message: String,
    resume_at: usize,
}

// `open` is the byte offset of a `[`. The delimiters are ASCII, so all
// derived offsets stay on char boundaries.
fn scan_marker(line: &str, open: usize) -> Option<ScannedMarker> {
    let lookahead = &line.as_bytes()[open + 1..];
    let close = memchr(b']', lookahead)?;
    let bar = memchr(b'|', &lookahead[..close])?;

    let code = line[open + 1..open + 1 + bar].trim();
    let category = Category::from_code(code)?;
    let message = line[open + 1 + bar + 1..open + 1 + close].trim().to_owned();

    Some(ScannedMarker {
        category,
        message,
        resume_at: open + 1 + close + 1,
    })
}
