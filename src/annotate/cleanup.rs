// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Defensive normalization of collaborator output.
//!
//! The grading collaborator is asked to echo the document verbatim apart from
//! the inline markers, but real responses occasionally grow a `CODE:` preamble
//! or per-line numbering. These tolerances are applied unconditionally before
//! parsing; on conforming input they are no-ops apart from trailing-whitespace
//! trimming.

use crate::model::Category;

/// Cleans a graded text blob: drops leading `CODE:` preamble lines, strips a
/// leading numeric-only token from each line, and trims trailing whitespace.
pub fn clean_annotated_text(text: &str) -> String {
    let lines = text.lines().collect::<Vec<_>>();

    let mut start = 0;
    while start < lines.len() && is_preamble_line(lines[start]) {
        start += 1;
    }

    lines[start..]
        .iter()
        .map(|line| strip_line_number(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepends the original document's lead paragraph (up to the first blank
/// line) in front of the graded body, separated by a blank line.
///
/// Graders are told to skip the task statement, so the statement has to be
/// re-anchored from the original for paragraph ordinals to line up.
pub fn restore_lead_paragraph(graded: &str, original: &str) -> String {
    let mut lead = Vec::new();
    for line in original.lines() {
        if line.trim().is_empty() {
            break;
        }
        lead.push(line.trim_end());
    }

    if lead.is_empty() {
        return graded.to_owned();
    }

    format!("{}\n\n{graded}", lead.join("\n"))
}

fn is_preamble_line(line: &str) -> bool {
    Category::ALL.iter().any(|category| {
        line.strip_prefix(category.code())
            .is_some_and(|rest| rest.starts_with(':'))
    })
}

fn strip_line_number(line: &str) -> String {
    let stripped = line.trim_start();
    let mut parts = stripped.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) {
        return parts.next().unwrap_or("").trim().to_owned();
    }

    line.trim_end().to_owned()
}
