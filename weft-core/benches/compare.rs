//! Cross-emitter comparison benchmark.
//!
//! Writes the same flat document through weft's combinators and through
//! quick-xml's event writer. Both emit markup to a growable buffer with
//! no intermediate tree, so the comparison is like for like.
//!
//! Run with: cargo bench --bench compare

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;
use weft_core::{attr, each, tag, text, Sink};

/// Emit `count` items with weft and return the output length.
fn emit_weft(count: usize) -> usize {
    let root = tag(
        "root",
        vec![each(0..count, |i| {
            tag(
                "item",
                vec![
                    attr::id(format!("id-{}", i)),
                    text(format!("This is the content for item number {}.", i)),
                ],
            )
        })],
    );
    let mut buf = Vec::new();
    let mut sink = Sink::new(&mut buf);
    let pending = root.render(0, &mut sink);
    sink.flush_pending(pending);
    buf.len()
}

/// Emit the same document with quick-xml events.
fn emit_quick_xml(count: usize) -> usize {
    let mut writer = XmlWriter::new(Vec::new());
    writer
        .write_event(Event::Start(BytesStart::new("root")))
        .unwrap();
    for i in 0..count {
        let id = format!("id-{}", i);
        let mut start = BytesStart::new("item");
        start.push_attribute(("id", id.as_str()));
        writer.write_event(Event::Start(start)).unwrap();
        let content = format!("This is the content for item number {}.", i);
        writer
            .write_event(Event::Text(BytesText::new(&content)))
            .unwrap();
        writer
            .write_event(Event::End(BytesEnd::new("item")))
            .unwrap();
    }
    writer
        .write_event(Event::End(BytesEnd::new("root")))
        .unwrap();
    writer.into_inner().len()
}

fn bench_emitter_comparison(c: &mut Criterion) {
    let sizes = [50, 200, 500];

    for count in sizes {
        let weft_bytes = emit_weft(count);
        let xml_bytes = emit_quick_xml(count);
        println!(
            "\n{} items: weft={}B  quick-xml={}B",
            count, weft_bytes, xml_bytes
        );

        let mut group = c.benchmark_group("emit");

        group.throughput(Throughput::Bytes(weft_bytes as u64));
        group.bench_with_input(BenchmarkId::new("weft", count), &count, |b, &count| {
            b.iter(|| black_box(emit_weft(count)))
        });

        group.throughput(Throughput::Bytes(xml_bytes as u64));
        group.bench_with_input(BenchmarkId::new("quick-xml", count), &count, |b, &count| {
            b.iter(|| black_box(emit_quick_xml(count)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_emitter_comparison);
criterion_main!(benches);
