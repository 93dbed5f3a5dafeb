//! Benchmarks for streaming emission.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use weft_core::html::{body, div, h1, head, span, table, td, th, tr};
use weft_core::{attr, each, html, text, title, Document};

/// A page with a `rows`-row table, rebuilt per iteration - trees are
/// single-use by design, so construction is part of the measured work.
fn page(rows: usize) -> Document {
    html(vec![
        head(vec![title("bench")]),
        body(vec![
            h1(vec![text("Rows")]),
            table(vec![
                tr(vec![th(vec![text("#")]), th(vec![text("value")])]),
                each(0..rows, |i| {
                    tr(vec![
                        td(vec![text(i.to_string())]),
                        td(vec![div(vec![
                            attr::class("cell"),
                            span(vec![text(format!("value: {}", i))]),
                        ])]),
                    ])
                }),
            ]),
        ]),
    ])
}

fn bench_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for rows in [10, 100, 1000] {
        let bytes = page(rows).render_to_vec().len() as u64;
        group.throughput(Throughput::Bytes(bytes));
        group.bench_function(format!("table_{}_rows", rows), |b| {
            b.iter(|| {
                let out = page(black_box(rows)).render_to_vec();
                black_box(out.len())
            })
        });
    }

    group.finish();
}

fn bench_render_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_simple");

    group.bench_function("empty_document", |b| {
        b.iter(|| black_box(html(vec![]).render_to_vec().len()))
    });

    group.bench_function("attribute_heavy", |b| {
        b.iter(|| {
            let node = html(vec![body(vec![each(0..50, |i| {
                div(vec![
                    attr::id(format!("id-{}", i)),
                    attr::class("a b c"),
                    attr::role("row"),
                ])
            })])]);
            black_box(node.render_to_vec().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render_table, bench_render_simple);
criterion_main!(benches);
