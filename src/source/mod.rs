// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The seam to the out-of-scope grading collaborator.
//!
//! Whatever produces the annotated text and the per-paragraph feedback (a
//! language-model service, a human, a canned file) sits behind
//! [`ReviewSource`]. This crate never talks to a network itself; it consumes
//! the two strings the collaborator contract promises and degrades visibly
//! when the collaborator fails.

use std::error::Error;
use std::fmt;

use crate::annotate::restore_lead_paragraph;
use crate::model::Review;

/// Failure reported by a grading collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for SourceError {}

/// The grading collaborator contract.
///
/// `grade` returns the document rewritten with inline `word[CODE|reason]`
/// markers, original line breaks preserved. `review_paragraphs` returns one
/// free-text remark per paragraph, in source order. Both are issued exactly
/// once, before the interactive loop starts, with no retry.
pub trait ReviewSource {
    fn grade(&mut self, original: &str) -> Result<String, SourceError>;

    fn review_paragraphs(&mut self, original: &str) -> Result<Vec<String>, SourceError>;
}

/// Obtains a full review of `original` from `source`.
///
/// The graded text gets the original's lead paragraph re-anchored in front
/// (graders skip the task statement). A collaborator failure is not fatal:
/// the returned review carries the error as plain text in place of graded
/// content and no feedback, so the viewer still runs with zero annotations
/// instead of aborting.
pub fn assemble_review(source: &mut dyn ReviewSource, original: &str) -> Review {
    let graded = match source.grade(original) {
        Ok(graded) => restore_lead_paragraph(&graded, original),
        Err(err) => return Review::new(format!("Grading failed: {err}"), Vec::new()),
    };

    let paragraph_feedback = match source.review_paragraphs(original) {
        Ok(feedback) => feedback,
        Err(err) => vec![format!("Paragraph feedback failed: {err}")],
    };

    Review::new(graded, paragraph_feedback)
}

/// A built-in review for `--demo`, exercising every category code, wrapping,
/// and paragraph feedback without any collaborator.
pub fn demo_review() -> Review {
    let annotated_text = "\
The Winter Hike

Last saturday[Sp|Weekday names are capitalized.] we went on a hike although \
the weather were[Gr|Subject and verb disagree; use \"was\".] very cold. We \
packed warm clothes sandwiches[Pu|A comma is needed between list items.] and \
tea before we utilized[St|Plainer \"used\" fits the register better.] the old \
trail map.

The trail was long and the trail was[Re|\"the trail\" repeats; merge the \
clauses.] steep in places. After some[Im|Vague; say how many hours.] hours we \
reached the summit and the valley below looked like a sleeping cat[?|The \
image does not connect to anything else in the text.].

We came home tired but happy.";

    let paragraph_feedback = vec![
        "A title that names the event works well; consider hinting at the outcome too.".to_owned(),
        "Good concrete opening; the packing list makes the preparation vivid.".to_owned(),
        "The summit moment deserves more than one sentence; linger on it.".to_owned(),
        "A clean closing, though it arrives abruptly after the summit scene.".to_owned(),
    ];

    Review::new(annotated_text, paragraph_feedback)
}
