// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use leaderboard_scrape::{
    model::RawRow,
    normalize::{build_benchmark, parse_metric_value},
    specs::leaderboard::{BenchmarkInfo, fallback_headers},
    store::rows_from_csv,
};

/// Synthetic live-table rows: decorated headers, a few placeholders.
fn live_rows(n: usize) -> Vec<RawRow> {
    let headers = fallback_headers();
    (0..n)
        .map(|i| {
            let cells = headers.iter().enumerate().map(|(c, _)| match c {
                0 => format!("org/model-{i}"),
                3 => String::from("Open"),
                _ if (i + c) % 11 == 0 => String::from("-"),
                _ => format!("{:.2}%", (i * c) as f64 / 7.0),
            });
            RawRow::zip(&headers, cells)
        })
        .collect()
}

fn backup_csv(n: usize) -> String {
    let mut text = String::from("model_name,average_wer,rtfx,AMI,LS Clean,LS Other,Tedlium\n");
    for i in 0..n {
        text.push_str(&format!("org/m{i},{}.5,{},1,2,nan,3\n", i % 20, i * 3));
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let rows = live_rows(500);
    let info = BenchmarkInfo::default();

    c.bench_function("normalize_live_500", |b| {
        b.iter(|| {
            let bench = build_benchmark(black_box(&rows), info.clone());
            black_box(bench.results.len())
        })
    });

    let text = backup_csv(500);
    c.bench_function("normalize_backup_500", |b| {
        b.iter(|| {
            let rows = rows_from_csv(black_box(&text));
            black_box(build_benchmark(rows, info.clone()).results.len())
        })
    });

    c.bench_function("parse_metric_value", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for cell in ["12.5%", " 3.14 ", "-", "nan", "n/a", "1 024"] {
                sum += parse_metric_value(black_box(cell));
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
