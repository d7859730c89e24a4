// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Redmark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Redmark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use redmark::annotate::parse_review;
use redmark::model::Review;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `annotate.parse_review`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time.
fn benches_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate.parse_review");

    for case in [
        fixtures::Case::Small,
        fixtures::Case::MediumDense,
        fixtures::Case::LargeLongLines,
    ] {
        let review = Review::new(
            fixtures::annotated_document(case),
            fixtures::paragraph_feedback(case),
        );
        let annotations = parse_review(&review).annotations().len() as u64;
        group.throughput(Throughput::Elements(annotations));
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let doc = parse_review(black_box(&review));
                black_box(fixtures::checksum_document(black_box(&doc)))
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_parse
}
criterion_main!(benches);
