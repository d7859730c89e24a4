// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Redmark — terminal viewer for inline-annotated text reviews.
//!
//! Takes text in which errors are tagged inline as `word[CODE|reason]` and
//! renders it word-wrapped in the terminal, one navigable error at a time,
//! with optional per-paragraph feedback interleaved.

pub mod annotate;
pub mod layout;
pub mod model;
pub mod source;
pub mod store;
pub mod tui;
