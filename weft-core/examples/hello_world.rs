//! Minimal document: a head, a body, one heading.

use weft_core::html::{body, h1, head, meta};
use weft_core::{attr, html_lang, text, title};

fn main() {
    let page = html_lang(
        "en",
        vec![
            head(vec![meta(vec![attr::charset("UTF-8")]), title("Hello")]),
            body(vec![h1(vec![text("Hello, world!")])]),
        ],
    );

    let mut out = Vec::new();
    match page.render_to(&mut out) {
        Ok(n) => println!("written {} bytes", n),
        Err(e) => println!("failed: {}", e),
    }
    println!("{}", String::from_utf8_lossy(&out));
}
