// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// The closed set of annotation categories.
///
/// The short code is the wire form used inside `word[CODE|reason]` markers and
/// in per-segment tag summaries; lookup is exact-match, so anything else in
/// code position leaves the bracketed span untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Spelling,
    Grammar,
    Punctuation,
    Style,
    Repetition,
    Imprecision,
    Nonsense,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Spelling,
        Category::Grammar,
        Category::Punctuation,
        Category::Style,
        Category::Repetition,
        Category::Imprecision,
        Category::Nonsense,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Spelling => "Sp",
            Self::Grammar => "Gr",
            Self::Punctuation => "Pu",
            Self::Style => "St",
            Self::Repetition => "Re",
            Self::Imprecision => "Im",
            Self::Nonsense => "?",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Grammar => "grammar",
            Self::Punctuation => "punctuation",
            Self::Style => "style",
            Self::Repetition => "repetition",
            Self::Imprecision => "imprecision",
            Self::Nonsense => "nonsense",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
