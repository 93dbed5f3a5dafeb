//! weft Core Emitter
//!
//! Streaming, combinator-based HTML emitter. Small composable nodes are
//! assembled into trees and written straight to a byte sink - no document
//! object model, single pass, no look-ahead.
//!
//! # Architecture
//!
//! - **sink.rs** - error-absorbing byte sink, byte count, RenderError
//! - **node.rs** - Node primitive, deferred-delimiter protocol, combinators
//! - **stream.rs** - producer/consumer bridge with optional deadline
//! - **cache.rs** - memoizing TTL decorator and storage trait
//! - **html.rs** - document root and element catalogue
//! - **attr.rs** - attribute catalogue
//!
//! ```
//! use weft_core::html::{body, h1, head};
//! use weft_core::{html, text, title};
//!
//! let page = html(vec![
//!     head(vec![title("X")]),
//!     body(vec![h1(vec![text("Hi")])]),
//! ]);
//! assert_eq!(
//!     page.render_to_vec(),
//!     b"<!doctype html><html><head><title>X</title></head>\
//!       <body><h1>Hi</h1></body></html>"
//! );
//! ```

pub mod attr;
pub mod cache;
pub mod html;
pub mod node;
pub mod sink;
pub mod stream;

pub use cache::{cached, CacheStorage, MemoryCache};
pub use html::{html, html_lang, title, Document};
pub use node::{
    attribute, attribute_if, attribute_list, bytes, comment, each, empty, join, raw, raw_if, tag,
    tag_void, text, text_if, trace, when, Node, Str,
};
pub use sink::{RenderError, Sink};
pub use stream::{bridge, bridge_within};
