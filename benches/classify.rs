// benches/classify.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value;

use pitch_scrape::{
    data::PlotRow,
    pitch::{self, LengthSummary, Panel, PACE, SPIN},
    specs,
};

fn sample_rows(n: usize) -> Vec<PlotRow> {
    (0..n)
        .map(|i| PlotRow {
            row: i,
            batter: "A".into(),
            ball_type: if i % 3 == 0 { "Spin".into() } else { "Seam".into() },
            bounce_x: (i % 160) as f64 * 0.1 - 1.0,
            bounce_y: ((i % 30) as f64 - 15.0) * 0.05,
            runs: [0, 1, 4, 6, -1, 2][i % 6],
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let rows = sample_rows(2_000);

    c.bench_function("tally_pace", |b| {
        b.iter(|| black_box(LengthSummary::tally(&PACE, black_box(&rows))).total)
    });

    c.bench_function("build_scene_spin", |b| {
        b.iter(|| {
            let panel = Panel {
                batter: "A",
                caption: "SPIN",
                taxonomy: &SPIN,
                wide_guides: true,
                deliveries: black_box(&rows),
            };
            black_box(pitch::build(&panel).primitives.len())
        })
    });

    let doc: Value = serde_json::from_str(include_str!("../tests/fixtures/delivery.json"))
        .expect("parse fixture");
    c.bench_function("extract_row", |b| {
        b.iter(|| {
            let rec = specs::extract(black_box(&doc)).expect("extract");
            black_box(rec.to_row().len())
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
