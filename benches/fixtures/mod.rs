// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use redmark::model::GradedDocument;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongLines,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeLongLines => "large_long_lines",
        }
    }
}

/// Deterministic annotated documents. Sizes and marker densities are fixed
/// so results stay comparable across runs.
pub fn annotated_document(case: Case) -> String {
    let (paragraphs, lines_per_paragraph, words_per_line, marker_every) = match case {
        Case::Small => (3, 2, 8, 5),
        Case::MediumDense => (10, 4, 10, 2),
        Case::LargeLongLines => (40, 6, 24, 7),
    };

    let codes = ["Sp", "Gr", "Pu", "St", "Re", "Im", "?"];
    let mut out = String::new();
    let mut word_counter = 0usize;

    for paragraph in 0..paragraphs {
        if paragraph > 0 {
            out.push('\n');
        }
        for _ in 0..lines_per_paragraph {
            let mut line = String::new();
            for word in 0..words_per_line {
                if word > 0 {
                    line.push(' ');
                }
                word_counter += 1;
                if word_counter % marker_every == 0 {
                    let code = codes[word_counter % codes.len()];
                    line.push_str(&format!(
                        "word{word_counter}[{code}|reason number {word_counter}]"
                    ));
                } else {
                    line.push_str(&format!("word{word_counter}"));
                }
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

pub fn paragraph_feedback(case: Case) -> Vec<String> {
    let paragraphs = match case {
        Case::Small => 3,
        Case::MediumDense => 10,
        Case::LargeLongLines => 40,
    };
    (0..paragraphs).map(|idx| format!("remark for paragraph {idx} with a few words")).collect()
}

/// Cheap structural checksum so benchmark bodies cannot be optimized away.
pub fn checksum_document(doc: &GradedDocument) -> usize {
    doc.lines().len()
        + doc.paragraphs().len() * 31
        + doc.annotations().len() * 131
        + doc
            .annotations()
            .iter()
            .map(|annotation| annotation.message().len())
            .sum::<usize>()
}
