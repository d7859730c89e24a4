// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Redmark CLI entrypoint.
//!
//! Opens an annotated text file (or a saved review file, or the built-in
//! demo) in the interactive viewer. Producing the annotated text and the
//! paragraph feedback is someone else's job; this binary only consumes it.

use std::error::Error;
use std::fs;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <graded-file> [--feedback <file>] [--save-review <file.json>]\n  {program} --review <file.json>\n  {program} --demo\n\nOpens annotated text (inline `word[CODE|reason]` markers) in the viewer.\n\n<graded-file> is a UTF-8 text file with inline markers.\n--feedback reads one per-paragraph remark per line.\n--review opens a saved review file instead of raw text.\n--save-review writes the assembled review as JSON before viewing.\n--demo views a built-in sample review.\n\nKeys: left/right (h/l) cycle errors, up/down (j/k) scroll, f toggles\nparagraph feedback, q quits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    graded_file: Option<String>,
    feedback_file: Option<String>,
    review_file: Option<String>,
    save_review: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--feedback" => {
                if options.feedback_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.feedback_file = Some(file);
            }
            "--review" => {
                if options.review_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.review_file = Some(file);
            }
            "--save-review" => {
                if options.save_review.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.save_review = Some(file);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.graded_file.is_some() {
                    return Err(());
                }
                options.graded_file = Some(arg);
            }
        }
    }

    if options.demo
        && (options.graded_file.is_some()
            || options.feedback_file.is_some()
            || options.review_file.is_some())
    {
        return Err(());
    }

    if options.review_file.is_some()
        && (options.graded_file.is_some() || options.feedback_file.is_some())
    {
        return Err(());
    }

    if !options.demo && options.graded_file.is_none() && options.review_file.is_none() {
        return Err(());
    }

    Ok(options)
}

fn load_feedback_file(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "redmark".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let review = if options.demo {
            redmark::source::demo_review()
        } else if let Some(path) = options.review_file.as_deref() {
            redmark::store::load_review(path)?
        } else {
            let Some(path) = options.graded_file.as_deref() else {
                // parse_options guarantees one of the three input modes.
                print_usage(&program);
                std::process::exit(2);
            };
            let annotated_text = fs::read_to_string(path)?;
            let paragraph_feedback = match options.feedback_file.as_deref() {
                Some(feedback_path) => load_feedback_file(feedback_path)?,
                None => Vec::new(),
            };
            redmark::model::Review::new(annotated_text, paragraph_feedback)
        };

        if let Some(path) = options.save_review.as_deref() {
            redmark::store::save_review(path, &review)?;
        }

        redmark::tui::run(review)
    })();

    if let Err(err) = result {
        eprintln!("redmark: {err}");
        std::process::exit(1);
    }
}
