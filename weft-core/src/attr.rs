//! Attribute catalogue - one-line specializations of
//! [`attribute`](crate::node::attribute).
//!
//! Values are written verbatim inside double quotes; callers own encoding.

use crate::node::{attribute, Node, Str};

/// Value for [`rel`] linking a stylesheet.
pub const REL_STYLESHEET: &str = "stylesheet";
/// Value for [`rel`] linking an icon.
pub const REL_ICON: &str = "icon";
/// Value for [`crossorigin`] anonymous requests.
pub const CROSS_ORIGIN_ANONYMOUS: &str = "anonymous";

pub fn id(value: impl Into<Str>) -> Node {
    attribute("id", value)
}

pub fn class(value: impl Into<Str>) -> Node {
    attribute("class", value)
}

pub fn href(value: impl Into<Str>) -> Node {
    attribute("href", value)
}

pub fn src(value: impl Into<Str>) -> Node {
    attribute("src", value)
}

pub fn role(value: impl Into<Str>) -> Node {
    attribute("role", value)
}

pub fn integrity(value: impl Into<Str>) -> Node {
    attribute("integrity", value)
}

pub fn rel(value: impl Into<Str>) -> Node {
    attribute("rel", value)
}

pub fn crossorigin(value: impl Into<Str>) -> Node {
    attribute("crossorigin", value)
}

pub fn charset(value: impl Into<Str>) -> Node {
    attribute("charset", value)
}

pub fn name(value: impl Into<Str>) -> Node {
    attribute("name", value)
}

pub fn content(value: impl Into<Str>) -> Node {
    attribute("content", value)
}

pub fn scope(value: impl Into<Str>) -> Node {
    attribute("scope", value)
}

pub fn lang(value: impl Into<Str>) -> Node {
    attribute("lang", value)
}

/// `for` is a Rust keyword, hence the trailing underscore.
pub fn for_(value: impl Into<Str>) -> Node {
    attribute("for", value)
}

/// `type` is a Rust keyword, hence the trailing underscore.
pub fn type_(value: impl Into<Str>) -> Node {
    attribute("type", value)
}

pub fn method(value: impl Into<Str>) -> Node {
    attribute("method", value)
}

pub fn action(value: impl Into<Str>) -> Node {
    attribute("action", value)
}

pub fn value(value: impl Into<Str>) -> Node {
    attribute("value", value)
}

pub fn colspan(n: u32) -> Node {
    attribute("colspan", n.to_string())
}
