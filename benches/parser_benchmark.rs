//! Performance benchmarks for parsing and analysis
//!
//! Run with: cargo bench

use access_log_analyzer::aggregator::group_by;
use access_log_analyzer::models::RecordField;
use access_log_analyzer::parser::{CombinedLogParser, LogFormat};
use access_log_analyzer::LogAnalyzer;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate access-log lines, optionally with a malformed line every tenth entry
fn generate_test_lines(num_lines: usize, include_errors: bool) -> Vec<String> {
    (0..num_lines)
        .map(|i| {
            if include_errors && i % 10 == 5 {
                "broken line without any structure".to_string()
            } else {
                format!(
                    r#"10.0.{}.{} - - [15/Jan/2024:10:30:{:02} +0000] "GET /page/{} HTTP/1.1" {} {} "-" "Mozilla/5.0""#,
                    i % 7,
                    i % 251,
                    i % 60,
                    i % 97,
                    if i % 13 == 0 { 404 } else { 200 },
                    100 + i
                )
            }
        })
        .collect()
}

fn benchmark_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined_parser");
    let parser = CombinedLogParser::new();

    for size in [10, 100, 1000, 10000].iter() {
        let lines = generate_test_lines(*size, false);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parser.parse_lines(black_box(&lines)))
        });
    }

    group.finish();
}

fn benchmark_error_handling(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_handling");
    let parser = CombinedLogParser::new();

    // 10% malformed lines
    let lines = generate_test_lines(1000, true);

    group.bench_function("parser_with_errors", |b| {
        b.iter(|| parser.parse_lines(black_box(&lines)))
    });

    group.finish();
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let parser = CombinedLogParser::new();
    let analyzer = LogAnalyzer::new();

    for size in [10000, 50000].iter() {
        let records = parser
            .parse_lines(&generate_test_lines(*size, false))
            .map(|batch| batch.records)
            .unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("group_by_path", size), size, |b, _| {
            b.iter(|| group_by(black_box(&records), RecordField::Path))
        });

        group.bench_with_input(BenchmarkId::new("analyse_top3", size), size, |b, _| {
            b.iter(|| analyzer.analyse(black_box(&records), 3))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser, benchmark_error_handling, benchmark_analysis);
criterion_main!(benches);
