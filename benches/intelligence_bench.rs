// ABOUTME: Criterion benchmarks for health intelligence algorithms
// ABOUTME: Measures risk scoring, cycle prediction, and insight aggregation over growing histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Criterion benchmarks for health intelligence algorithms.
//!
//! Insight generation sorts every history it is given, so its cost is
//! measured across history sizes well beyond a real user's records.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Duration;
use common::fixtures::{
    alternating_answers, base_date, generate_cycles, generate_history, HistorySize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ira_health::intelligence::algorithms::{bmi, current_phase, RiskScorer};
use ira_health::intelligence::cycle_tracking::{predict_next_start, start_new_cycle};
use ira_health::intelligence::InsightAggregator;
use ira_health::models::RiskCategory;

/// Benchmark questionnaire scoring for each category
fn bench_risk_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_scoring");
    let scorer = RiskScorer::default();
    let today = base_date();

    for category in RiskCategory::ALL {
        let answers = alternating_answers(category);
        group.bench_with_input(
            BenchmarkId::new("score", category.name()),
            &answers,
            |b, answers| {
                b.iter(|| scorer.score(black_box(category), black_box(answers), today));
            },
        );
    }

    group.finish();
}

/// Benchmark the stateless single-value calculators
fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculators");
    let start = base_date();

    group.bench_function("bmi_classify", |b| {
        b.iter(|| bmi::classify(black_box(165.0), black_box(60.0)));
    });

    group.bench_function("cycle_phase", |b| {
        b.iter(|| current_phase(black_box(start), black_box(start + Duration::days(16))));
    });

    group.finish();
}

/// Benchmark next-start prediction and starting a cycle over growing histories
#[allow(clippy::cast_possible_truncation)]
fn bench_cycle_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_tracking");

    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let count = size.count();
        let cycles = generate_cycles(count);
        let next_start = cycles
            .last()
            .map_or(base_date(), |c| c.start_date + Duration::days(29));

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("predict_next_start", count),
            &cycles,
            |b, cycles| {
                b.iter(|| predict_next_start(black_box(cycles), next_start));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("start_new_cycle", count),
            &cycles,
            |b, cycles| {
                b.iter(|| start_new_cycle(black_box(cycles), next_start, "bench_next"));
            },
        );
    }

    group.finish();
}

/// Benchmark insight aggregation over growing histories
#[allow(clippy::cast_possible_truncation)]
fn bench_insight_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("insight_generation");
    group.sample_size(50);
    let aggregator = InsightAggregator::default();

    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let history = generate_history(size);
        let today = history
            .cycles
            .last()
            .map_or(base_date(), |c| c.start_date + Duration::days(10));

        group.throughput(Throughput::Elements(size.count() as u64 * 3));
        group.bench_with_input(
            BenchmarkId::new("generate", size.count()),
            &history,
            |b, history| {
                b.iter(|| history.insights(black_box(&aggregator), today));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_risk_scoring,
    bench_calculators,
    bench_cycle_tracking,
    bench_insight_generation,
);
criterion_main!(benches);
