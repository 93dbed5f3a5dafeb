//! Two ways to turn a data slice into rows: the `each` combinator, and
//! building a node vector by hand and sequencing it with `join`.

use weft_core::html::{body, h1, head, meta, table, td, tr};
use weft_core::{attr, each, html, join, text, title, Node};

fn rows_with_each() -> Node {
    let items = [1, 2, 3, 4, 5];
    each(items, |value| tr(vec![td(vec![text(value.to_string())])]))
}

fn rows_by_hand() -> Node {
    let items = [1, 2, 3, 4, 5];
    let mut nodes = Vec::new();
    for value in items {
        nodes.push(tr(vec![td(vec![text(value.to_string())])]));
    }
    join(nodes)
}

fn main() {
    let page = html(vec![
        head(vec![meta(vec![attr::charset("UTF-8")]), title("My Title")]),
        body(vec![
            h1(vec![text("Table using each")]),
            table(vec![rows_with_each()]),
            h1(vec![text("Table built by hand")]),
            table(vec![rows_by_hand()]),
        ]),
    ]);

    let mut out = Vec::new();
    match page.render_to(&mut out) {
        Ok(n) => println!("written {} bytes", n),
        Err(e) => println!("failed: {}", e),
    }
    println!("{}", String::from_utf8_lossy(&out));
}
