//! Caching an expensive streamed subtree.
//!
//! The first render pays for the slow producer; the second replays the
//! stored bytes and never even constructs the channel. Run with
//! `RUST_LOG=debug` to see the miss and the hit.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use weft_core::html::{body, h1, head, meta, table};
use weft_core::{
    attr, bridge, cached, html, stream, text, title, CacheStorage, MemoryCache, Node,
};

fn slow_rows(count: usize) -> Node {
    bridge(move || {
        let (tx, rx) = stream::channel();
        thread::spawn(move || {
            for i in 0..count {
                let row = weft_core::html::div(vec![text(format!("value: {}", i))]);
                if tx.send(row).is_err() {
                    break;
                }
                thread::sleep(Duration::from_millis(100));
            }
        });
        rx
    })
}

fn print_page(store: Arc<dyn CacheStorage>) {
    let page = html(vec![
        head(vec![meta(vec![attr::charset("UTF-8")]), title("My Title")]),
        body(vec![
            h1(vec![text("Table using a cached stream")]),
            table(vec![cached(store, "mykey", Duration::from_secs(10), slow_rows(10))]),
        ]),
    ]);

    let mut out = Vec::new();
    match page.render_to(&mut out) {
        Ok(n) => println!("written {} bytes", n),
        Err(e) => println!("failed: {}", e),
    }
    println!("{}", String::from_utf8_lossy(&out));
}

fn main() {
    env_logger::init();

    let store: Arc<dyn CacheStorage> = Arc::new(MemoryCache::new());

    print_page(store.clone());

    // Much faster: replayed from the cache.
    print_page(store);
}
