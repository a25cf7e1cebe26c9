//! Benchmarks for the detection pipeline

use chrono::{DateTime, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use sharpline::game::GameRecord;
use sharpline::picks::PickEngine;
use sharpline::signal::{SpreadRlmDetector, TotalRlmDetector};

fn sample_game() -> GameRecord {
    GameRecord {
        game_id: "bkn-chi-0209".to_string(),
        home_team: "Brooklyn Nets".to_string(),
        away_team: "Chicago Bulls".to_string(),
        opening_spread: Some(dec!(-6.5)),
        current_spread: Some(dec!(-4.0)),
        opening_total: Some(dec!(223.5)),
        current_total: Some(dec!(218.5)),
        public_pct_home: Some(dec!(0.57)),
        public_pct_over: Some(dec!(0.64)),
        public_pct_home_ml: Some(dec!(0.84)),
        public_pct_home_spread: Some(dec!(0.36)),
        home_ats_l10: Some("2-8".to_string()),
        away_ats_l10: Some("5-5".to_string()),
        ..Default::default()
    }
}

fn run_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-02-09T19:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn benchmark_spread_detector(c: &mut Criterion) {
    let detector = SpreadRlmDetector::with_defaults();
    let game = sample_game();

    c.bench_function("spread_rlm_detect", |b| {
        b.iter(|| detector.detect(black_box(&game)))
    });
}

fn benchmark_total_detector(c: &mut Criterion) {
    let detector = TotalRlmDetector::with_defaults();
    let game = sample_game();

    c.bench_function("total_rlm_detect", |b| {
        b.iter(|| detector.detect(black_box(&game)))
    });
}

fn benchmark_analyze_game(c: &mut Criterion) {
    let engine = PickEngine::with_defaults();
    let game = sample_game();
    let at = run_time();

    c.bench_function("analyze_game", |b| {
        b.iter(|| engine.analyze_game_at(black_box(&game), at))
    });
}

criterion_group!(
    benches,
    benchmark_spread_detector,
    benchmark_total_detector,
    benchmark_analyze_game
);
criterion_main!(benches);
