//! Streaming rows from a slow producer thread straight into a document.
//!
//! The producer simulates slow I/O with a sleep per row; the bridge
//! consumes each row as it arrives and the document streams out in
//! arrival order. Try `RUST_LOG=debug` to watch the bridge.

use std::thread;
use std::time::Duration;

use weft_core::html::{body, div, h1, head, meta, table};
use weft_core::{attr, bridge_within, html, stream, text, title, Node};

fn simulate_slow_io() -> stream::Receiver<Node> {
    let (tx, rx) = stream::channel();
    thread::spawn(move || {
        for i in 0..10 {
            let row = div(vec![text(format!("value: {}", i))]);
            if tx.send(row).is_err() {
                // Consumer gave up on us; stop producing.
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    });
    rx
}

fn main() {
    env_logger::init();

    let page = html(vec![
        head(vec![meta(vec![attr::charset("UTF-8")]), title("My Title")]),
        body(vec![
            h1(vec![text("Table using a stream")]),
            table(vec![bridge_within(
                simulate_slow_io,
                // Give the producer half its runtime: the tail is cut off
                // silently and the document still closes cleanly.
                Duration::from_millis(550),
            )]),
        ]),
    ]);

    let mut out = Vec::new();
    match page.render_to(&mut out) {
        Ok(n) => println!("written {} bytes", n),
        Err(e) => println!("failed: {}", e),
    }
    println!("{}", String::from_utf8_lossy(&out));
}
