//! Streaming bridge tests: arrival-order consumption, exhaustion via
//! sender drop, and deadline-bounded partial output.
//!
//! Timing margins are deliberately wide - producers either send
//! immediately or stall for whole seconds, and deadlines sit far from
//! both edges.

use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use weft_core::html::{body, div, table, td, tr};
use weft_core::{bridge, bridge_within, html, stream, text, Node, Sink};

fn render(node: Node) -> String {
    let mut buf = Vec::new();
    let mut sink = Sink::new(&mut buf);
    let pending = node.render(0, &mut sink);
    sink.flush_pending(pending);
    String::from_utf8(buf).unwrap()
}

/// Spawn a producer sending `rows` nodes, sleeping `delay` before each.
fn row_source(rows: usize, delay: Duration) -> impl FnOnce() -> stream::Receiver<Node> + Send + 'static {
    move || {
        let (tx, rx) = stream::channel();
        thread::spawn(move || {
            for i in 0..rows {
                thread::sleep(delay);
                let row = tr(vec![td(vec![text(format!("value: {}", i))])]);
                if tx.send(row).is_err() {
                    break;
                }
            }
        });
        rx
    }
}

#[test]
fn output_equals_concatenation_in_order() {
    let node = bridge(|| {
        let (tx, rx) = stream::channel();
        thread::spawn(move || {
            for part in ["A", "B", "C"] {
                tx.send(div(vec![text(part)])).unwrap();
            }
        });
        rx
    });
    assert_eq!(render(node), "<div>A</div><div>B</div><div>C</div>");
}

#[test]
fn bridge_inside_an_element_flushes_its_delimiter() {
    let node = table(vec![bridge(row_source(2, Duration::ZERO))]);
    assert_eq!(
        render(node),
        "<table><tr><td>value: 0</td></tr><tr><td>value: 1</td></tr></table>"
    );
}

#[test]
fn deadline_truncates_silently() {
    // Two rows arrive immediately; the third stalls for two seconds and
    // the deadline fires long before it.
    let node = bridge_within(
        || {
            let (tx, rx) = stream::channel();
            thread::spawn(move || {
                let _ = tx.send(div(vec![text("fast-1")]));
                let _ = tx.send(div(vec![text("fast-2")]));
                thread::sleep(Duration::from_secs(2));
                let _ = tx.send(div(vec![text("late")]));
            });
            rx
        },
        Duration::from_millis(300),
    );
    assert_eq!(render(node), "<div>fast-1</div><div>fast-2</div>");
}

#[test]
fn deadline_is_not_reset_per_item() {
    // Each item takes ~80ms; a 200ms total deadline admits only the first
    // couple even though every single gap is well under it.
    let node = bridge_within(row_source(50, Duration::from_millis(80)), Duration::from_millis(200));
    let out = render(node);
    let produced = out.matches("<tr>").count();
    assert!(produced < 50, "deadline should have cut production, got {}", produced);
}

#[test]
fn abandoned_producer_sees_failed_sends() {
    let (done_tx, done_rx) = stream::channel();
    let node = bridge_within(
        move || {
            let (tx, rx) = stream::channel();
            thread::spawn(move || {
                let _ = tx.send(text("first"));
                thread::sleep(Duration::from_millis(400));
                // Receiver is gone by now; the send must fail fast
                // instead of blocking forever on the rendezvous.
                let outcome = tx.send(text("second"));
                let _ = done_tx.send(text(if outcome.is_err() { "failed" } else { "sent" }));
            });
            rx
        },
        Duration::from_millis(100),
    );
    assert_eq!(render(node), "first");
    let witness = done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("producer never finished");
    assert_eq!(render(witness), "failed");
}

#[test]
fn bridge_composes_with_document() {
    let page = html(vec![body(vec![table(vec![bridge(row_source(
        3,
        Duration::ZERO,
    ))])])]);
    assert_eq!(
        String::from_utf8(page.render_to_vec()).unwrap(),
        "<!doctype html><html><body><table>\
         <tr><td>value: 0</td></tr><tr><td>value: 1</td></tr><tr><td>value: 2</td></tr>\
         </table></body></html>"
    );
}
