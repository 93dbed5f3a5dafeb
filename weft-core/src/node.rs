//! Node primitive and the deferred-delimiter protocol.
//!
//! A [`Node`] is the unit of composition: a lazily-invoked emitter with the
//! contract `render(pending, sink) -> pending`. Documents are not stored
//! trees - rendering is a single depth-first pass that writes straight to
//! the sink.
//!
//! # The pending delimiter
//!
//! One byte of state threads through every `render` call: the delimiter
//! (typically `>` closing an opening tag, `0` meaning none) that must be
//! flushed before the next content lands. A tag writes `<name` and hands
//! its children pending `>`; whichever child writes first flushes it. This
//! is what lets a tag defer the void-vs-paired closing decision until its
//! children have actually produced something, with no look-ahead and no
//! buffering:
//!
//! ```text
//! tag("td", vec![])                  =>  <td></td>
//! tag("td", vec![text("x")])         =>  <td>x</td>
//! tag_void("meta", vec![charset])    =>  <meta charset="UTF-8"/>
//! ```
//!
//! Rules every node obeys:
//! - flush the incoming pending byte (if non-zero) before its own leading
//!   bytes,
//! - return `0` after terminating pending state, or the new pending byte it
//!   introduced.
//!
//! Attribute nodes are the exception by design: they write while the
//! enclosing tag's `>` is still outstanding and pass pending through
//! untouched.
//!
//! Values are written verbatim - no escaping, no validation. Callers own
//! markup correctness.

use std::borrow::Cow;
use std::fmt;

use crate::sink::Sink;

/// A string a node can own: static or heap, no copies for literals.
pub type Str = Cow<'static, str>;

enum Kind {
    Empty,
    Text(Str),
    Raw(Str),
    Bytes(Vec<u8>),
    Attr { key: Str, value: Str },
    AttrList { key: Str, values: Vec<Str> },
    Element { name: Str, children: Vec<Node> },
    Void { name: Str, children: Vec<Node> },
    Comment(Vec<Node>),
    Join(Vec<Node>),
    Trace(Str),
    Fn(Box<dyn FnOnce(u8, &mut Sink<'_>) -> u8 + Send>),
}

/// A composable unit of markup.
///
/// Nodes are single-use: [`render`](Node::render) consumes the node. They
/// are `Send`, so they can be produced on another thread and handed to a
/// streaming bridge (see [`crate::stream`]).
pub struct Node {
    kind: Kind,
}

impl Node {
    /// Wrap a closure as a node - the extension point for behavior the
    /// built-in combinators don't cover.
    ///
    /// The closure receives the incoming pending byte and must honor the
    /// protocol: flush it before writing leading content, return `0` if it
    /// terminated pending state, or the pending byte it introduced.
    pub fn from_fn<F>(f: F) -> Node
    where
        F: FnOnce(u8, &mut Sink<'_>) -> u8 + Send + 'static,
    {
        Node {
            kind: Kind::Fn(Box::new(f)),
        }
    }

    /// Render this node, threading the pending delimiter.
    ///
    /// Write failures never surface here - the sink absorbs them and the
    /// pass runs to completion regardless.
    pub fn render(self, pending: u8, sink: &mut Sink<'_>) -> u8 {
        match self.kind {
            Kind::Empty => pending,
            Kind::Text(s) | Kind::Raw(s) => {
                sink.flush_pending(pending);
                sink.write(s.as_bytes());
                0
            }
            Kind::Bytes(b) => {
                sink.flush_pending(pending);
                sink.write(&b);
                0
            }
            Kind::Attr { key, value } => {
                sink.put(b' ');
                sink.write(key.as_bytes());
                sink.write(b"=\"");
                sink.write(value.as_bytes());
                sink.put(b'"');
                pending
            }
            Kind::AttrList { key, values } => {
                sink.put(b' ');
                sink.write(key.as_bytes());
                sink.write(b"=\"");
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        sink.put(b' ');
                    }
                    sink.write(v.as_bytes());
                }
                sink.put(b'"');
                pending
            }
            Kind::Element { name, children } => {
                sink.flush_pending(pending);
                sink.put(b'<');
                sink.write(name.as_bytes());
                let mut pending = b'>';
                for child in children {
                    pending = child.render(pending, sink);
                }
                sink.flush_pending(pending);
                sink.write(b"</");
                sink.write(name.as_bytes());
                sink.put(b'>');
                0
            }
            Kind::Void { name, children } => {
                sink.flush_pending(pending);
                sink.put(b'<');
                sink.write(name.as_bytes());
                // Attributes leave pending alone; whatever is left of the
                // `>` is discarded in favor of the self-closing form.
                let mut pending = b'>';
                for child in children {
                    pending = child.render(pending, sink);
                }
                sink.write(b"/>");
                0
            }
            Kind::Comment(children) => {
                sink.flush_pending(pending);
                sink.write(b"<!--");
                // Delimiter state does not cross comment children.
                for child in children {
                    child.render(0, sink);
                }
                sink.write(b"-->");
                0
            }
            Kind::Join(children) => {
                let mut pending = pending;
                for child in children {
                    pending = child.render(pending, sink);
                }
                pending
            }
            Kind::Trace(msg) => {
                log::trace!("{}", msg);
                pending
            }
            Kind::Fn(f) => f(pending, sink),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Empty => f.write_str("Empty"),
            Kind::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Kind::Raw(s) => f.debug_tuple("Raw").field(s).finish(),
            Kind::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Kind::Attr { key, .. } => f.debug_tuple("Attr").field(key).finish(),
            Kind::AttrList { key, .. } => f.debug_tuple("AttrList").field(key).finish(),
            Kind::Element { name, children } => f
                .debug_struct("Element")
                .field("name", name)
                .field("children", children)
                .finish(),
            Kind::Void { name, children } => f
                .debug_struct("Void")
                .field("name", name)
                .field("children", children)
                .finish(),
            Kind::Comment(children) => f.debug_tuple("Comment").field(children).finish(),
            Kind::Join(children) => f.debug_tuple("Join").field(children).finish(),
            Kind::Trace(msg) => f.debug_tuple("Trace").field(msg).finish(),
            Kind::Fn(_) => f.write_str("Fn"),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Nothing: passes pending state through untouched.
pub fn empty() -> Node {
    Node { kind: Kind::Empty }
}

/// Text content. Flushes pending, writes the string verbatim, terminates
/// pending state.
pub fn text(content: impl Into<Str>) -> Node {
    Node {
        kind: Kind::Text(content.into()),
    }
}

/// Text content emitted only when `test` is true; otherwise a no-op
/// passthrough.
pub fn text_if(test: bool, content: impl Into<Str>) -> Node {
    if test {
        text(content)
    } else {
        empty()
    }
}

/// A pre-rendered markup fragment. Same protocol behavior as [`text`] -
/// the distinction is for readers, not the emitter.
pub fn raw(content: impl Into<Str>) -> Node {
    Node {
        kind: Kind::Raw(content.into()),
    }
}

/// A markup fragment emitted only when `test` is true.
pub fn raw_if(test: bool, content: impl Into<Str>) -> Node {
    if test {
        raw(content)
    } else {
        empty()
    }
}

/// Raw bytes written as a single text block.
pub fn bytes(content: Vec<u8>) -> Node {
    Node {
        kind: Kind::Bytes(content),
    }
}

/// An attribute: writes ` key="value"` inline while the enclosing tag's
/// opening delimiter is still outstanding. Does not participate in the
/// pending protocol.
pub fn attribute(key: impl Into<Str>, value: impl Into<Str>) -> Node {
    Node {
        kind: Kind::Attr {
            key: key.into(),
            value: value.into(),
        },
    }
}

/// An attribute whose value is several space-separated parts, e.g. a class
/// list.
pub fn attribute_list(key: impl Into<Str>, values: Vec<Str>) -> Node {
    Node {
        kind: Kind::AttrList {
            key: key.into(),
            values,
        },
    }
}

/// An attribute built only when `test` is true. The producer is not
/// invoked on a false test.
pub fn attribute_if(test: bool, make: impl FnOnce() -> Node) -> Node {
    when(test, make)
}

/// A paired element: `<name ...>children</name>`.
///
/// The `>` is pending until the first child writes; an element whose
/// children produce nothing renders as `<name></name>`.
pub fn tag(name: impl Into<Str>, children: Vec<Node>) -> Node {
    Node {
        kind: Kind::Element {
            name: name.into(),
            children,
        },
    }
}

/// A void element: `<name .../>`. Children are normally attribute nodes.
pub fn tag_void(name: impl Into<Str>, children: Vec<Node>) -> Node {
    Node {
        kind: Kind::Void {
            name: name.into(),
            children,
        },
    }
}

/// Sequence several nodes into one, threading pending state through and
/// returning the final state to the caller. Pure plumbing - introduces no
/// delimiter of its own.
pub fn join(children: Vec<Node>) -> Node {
    Node {
        kind: Kind::Join(children),
    }
}

/// Conditional node. `make` is invoked only when `test` is true, so a
/// false condition executes no construction side effect (important when
/// the node would spin up a stream source or other expensive work).
pub fn when(test: bool, make: impl FnOnce() -> Node) -> Node {
    if test {
        make()
    } else {
        empty()
    }
}

/// Convert each item into a node and sequence them, original order.
pub fn each<T, I, F>(items: I, f: F) -> Node
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Node,
{
    join(items.into_iter().map(f).collect())
}

/// An HTML comment: `<!--children-->`. Children each render from pending
/// `0`; delimiter state never crosses the comment boundary.
pub fn comment(children: Vec<Node>) -> Node {
    Node {
        kind: Kind::Comment(children),
    }
}

/// Logs `msg` at trace level when the node is rendered; writes nothing.
pub fn trace(msg: impl Into<Str>) -> Node {
    Node {
        kind: Kind::Trace(msg.into()),
    }
}
