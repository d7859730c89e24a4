// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Review file persistence.
//!
//! A review file is the JSON form of a [`Review`]: the annotated text plus
//! the paragraph feedback, so a graded review can be reopened later without
//! re-contacting the grading collaborator. Rendering state (selection,
//! scroll) is deliberately not part of the format.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Review;

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "io error at {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid review file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReviewFileJson {
    annotated_text: String,
    #[serde(default)]
    paragraph_feedback: Vec<String>,
}

/// Loads a review file written by [`save_review`].
pub fn load_review(path: impl AsRef<Path>) -> Result<Review, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let json: ReviewFileJson = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Review::new(json.annotated_text, json.paragraph_feedback))
}

/// Saves a review as pretty-printed JSON, via a temp file renamed into place
/// so a crash mid-write never leaves a truncated review behind.
pub fn save_review(path: impl AsRef<Path>, review: &Review) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = ReviewFileJson {
        annotated_text: review.annotated_text.clone(),
        paragraph_feedback: review.paragraph_feedback.clone(),
    };
    let mut raw = serde_json::to_string_pretty(&json).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    raw.push('\n');

    write_file_atomic(path, raw.as_bytes())
}

fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, contents).map_err(io_err)?;
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
