// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Word-wraps `text` into an exact partition.
///
/// Every piece is at most `width` characters, cuts prefer to fall after
/// whitespace, and concatenating the pieces reproduces `text` byte for byte.
/// The partition property is what keeps marker offsets honest: every
/// character, marker glyphs included, lands in exactly one piece. A word
/// longer than `width` is cut hard; empty text yields one empty piece.
pub fn wrap_exact(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars = text.chars().collect::<Vec<char>>();
    if chars.is_empty() {
        return vec![String::new()];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        if chars.len() - start <= width {
            pieces.push(chars[start..].iter().collect());
            break;
        }

        let window_end = start + width;
        let mut cut = window_end;
        if !chars[window_end].is_whitespace() {
            // Mid-word cut; back up to just after the last whitespace in the
            // window, if the window has any.
            if let Some(ws) = (start..window_end).rev().find(|&idx| chars[idx].is_whitespace()) {
                cut = ws + 1;
            }
        }

        pieces.push(chars[start..cut].iter().collect());
        start = cut;
    }

    pieces
}
