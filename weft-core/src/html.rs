//! Document root and the HTML element catalogue.
//!
//! [`Document`] is the rendering entry point: it writes the fixed envelope
//! (`<!doctype html><html ...>` ... `</html>`), drives the top-level nodes
//! from pending `>`, and reports the sink's final byte count and first
//! error. Everything else in this module is a one-line specialization of
//! [`tag`]/[`tag_void`].
//!
//! The language attribute can be given two ways: as a root parameter
//! ([`html_lang`]) or as a plain attribute child - the top-level sequence
//! starts from pending `>`, so `html(vec![attr::lang("en"), ...])` emits
//! ` lang="en"` while `<html` is still open.

use std::io;

use crate::node::{tag, tag_void, text, Node, Str};
use crate::sink::{RenderError, Sink};

/// A renderable document: envelope plus top-level nodes.
#[derive(Debug)]
pub struct Document {
    lang: Option<Str>,
    children: Vec<Node>,
}

/// The document entry point: `<!doctype html><html>...</html>`.
pub fn html(children: Vec<Node>) -> Document {
    Document {
        lang: None,
        children,
    }
}

/// Like [`html`], with a `lang` attribute on the `<html>` element.
pub fn html_lang(lang: impl Into<Str>, children: Vec<Node>) -> Document {
    Document {
        lang: Some(lang.into()),
        children,
    }
}

impl Document {
    /// Render the document to `out`.
    ///
    /// Evaluation always runs the whole tree; on a destination failure the
    /// remaining writes are suppressed and the result is an `Err` carrying
    /// the bytes flushed before the failure.
    pub fn render_to<W: io::Write>(self, out: &mut W) -> Result<usize, RenderError> {
        let mut sink = Sink::new(out);
        sink.write(b"<!doctype html><html");
        if let Some(lang) = &self.lang {
            sink.write(b" lang=\"");
            sink.write(lang.as_bytes());
            sink.put(b'"');
        }
        let mut pending = b'>';
        for child in self.children {
            pending = child.render(pending, &mut sink);
        }
        sink.flush_pending(pending);
        sink.write(b"</html>");
        let written = sink.written();
        match sink.take_error() {
            None => Ok(written),
            Some(source) => Err(RenderError { written, source }),
        }
    }

    /// Render into a fresh byte buffer. A `Vec` destination cannot fail.
    pub fn render_to_vec(self) -> Vec<u8> {
        let mut buf = Vec::new();
        let _ = self.render_to(&mut buf);
        buf
    }
}

// ============================================================================
// Element catalogue - paired elements use `tag`, void elements `tag_void`
// ============================================================================

pub fn a(children: Vec<Node>) -> Node {
    tag("a", children)
}

pub fn abbr(children: Vec<Node>) -> Node {
    tag("abbr", children)
}

pub fn address(children: Vec<Node>) -> Node {
    tag("address", children)
}

pub fn area(children: Vec<Node>) -> Node {
    tag_void("area", children)
}

pub fn article(children: Vec<Node>) -> Node {
    tag("article", children)
}

pub fn aside(children: Vec<Node>) -> Node {
    tag("aside", children)
}

pub fn audio(children: Vec<Node>) -> Node {
    tag("audio", children)
}

pub fn b(children: Vec<Node>) -> Node {
    tag("b", children)
}

pub fn base(children: Vec<Node>) -> Node {
    tag_void("base", children)
}

pub fn bdi(children: Vec<Node>) -> Node {
    tag("bdi", children)
}

pub fn bdo(children: Vec<Node>) -> Node {
    tag("bdo", children)
}

pub fn blockquote(children: Vec<Node>) -> Node {
    tag("blockquote", children)
}

pub fn body(children: Vec<Node>) -> Node {
    tag("body", children)
}

pub fn br(children: Vec<Node>) -> Node {
    tag_void("br", children)
}

pub fn button(children: Vec<Node>) -> Node {
    tag("button", children)
}

pub fn canvas(children: Vec<Node>) -> Node {
    tag("canvas", children)
}

pub fn caption(children: Vec<Node>) -> Node {
    tag("caption", children)
}

pub fn cite(children: Vec<Node>) -> Node {
    tag("cite", children)
}

pub fn code(children: Vec<Node>) -> Node {
    tag("code", children)
}

pub fn col(children: Vec<Node>) -> Node {
    tag("col", children)
}

pub fn colgroup(children: Vec<Node>) -> Node {
    tag("colgroup", children)
}

pub fn data(children: Vec<Node>) -> Node {
    tag("data", children)
}

pub fn datalist(children: Vec<Node>) -> Node {
    tag("datalist", children)
}

pub fn dd(children: Vec<Node>) -> Node {
    tag("dd", children)
}

pub fn del(children: Vec<Node>) -> Node {
    tag("del", children)
}

pub fn details(children: Vec<Node>) -> Node {
    tag("details", children)
}

pub fn dfn(children: Vec<Node>) -> Node {
    tag("dfn", children)
}

pub fn dialog(children: Vec<Node>) -> Node {
    tag("dialog", children)
}

pub fn div(children: Vec<Node>) -> Node {
    tag("div", children)
}

pub fn dl(children: Vec<Node>) -> Node {
    tag("dl", children)
}

pub fn dt(children: Vec<Node>) -> Node {
    tag("dt", children)
}

pub fn em(children: Vec<Node>) -> Node {
    tag("em", children)
}

pub fn embed(children: Vec<Node>) -> Node {
    tag_void("embed", children)
}

pub fn fieldset(children: Vec<Node>) -> Node {
    tag("fieldset", children)
}

pub fn figcaption(children: Vec<Node>) -> Node {
    tag("figcaption", children)
}

pub fn figure(children: Vec<Node>) -> Node {
    tag("figure", children)
}

pub fn footer(children: Vec<Node>) -> Node {
    tag("footer", children)
}

pub fn form(children: Vec<Node>) -> Node {
    tag("form", children)
}

pub fn h1(children: Vec<Node>) -> Node {
    tag("h1", children)
}

pub fn h2(children: Vec<Node>) -> Node {
    tag("h2", children)
}

pub fn h3(children: Vec<Node>) -> Node {
    tag("h3", children)
}

pub fn h4(children: Vec<Node>) -> Node {
    tag("h4", children)
}

pub fn h5(children: Vec<Node>) -> Node {
    tag("h5", children)
}

pub fn h6(children: Vec<Node>) -> Node {
    tag("h6", children)
}

pub fn head(children: Vec<Node>) -> Node {
    tag("head", children)
}

pub fn header(children: Vec<Node>) -> Node {
    tag("header", children)
}

pub fn hgroup(children: Vec<Node>) -> Node {
    tag("hgroup", children)
}

pub fn hr(children: Vec<Node>) -> Node {
    tag_void("hr", children)
}

pub fn i(children: Vec<Node>) -> Node {
    tag("i", children)
}

pub fn iframe(children: Vec<Node>) -> Node {
    tag_void("iframe", children)
}

pub fn img(children: Vec<Node>) -> Node {
    tag_void("img", children)
}

pub fn input(children: Vec<Node>) -> Node {
    tag_void("input", children)
}

pub fn ins(children: Vec<Node>) -> Node {
    tag("ins", children)
}

pub fn kbd(children: Vec<Node>) -> Node {
    tag("kbd", children)
}

pub fn label(children: Vec<Node>) -> Node {
    tag("label", children)
}

pub fn legend(children: Vec<Node>) -> Node {
    tag("legend", children)
}

pub fn li(children: Vec<Node>) -> Node {
    tag("li", children)
}

pub fn link(children: Vec<Node>) -> Node {
    tag_void("link", children)
}

pub fn main(children: Vec<Node>) -> Node {
    tag("main", children)
}

pub fn map(children: Vec<Node>) -> Node {
    tag("map", children)
}

pub fn mark(children: Vec<Node>) -> Node {
    tag("mark", children)
}

pub fn menu(children: Vec<Node>) -> Node {
    tag("menu", children)
}

pub fn meta(children: Vec<Node>) -> Node {
    tag_void("meta", children)
}

pub fn meter(children: Vec<Node>) -> Node {
    tag("meter", children)
}

pub fn nav(children: Vec<Node>) -> Node {
    tag("nav", children)
}

pub fn noscript(children: Vec<Node>) -> Node {
    tag("noscript", children)
}

pub fn object(children: Vec<Node>) -> Node {
    tag("object", children)
}

pub fn ol(children: Vec<Node>) -> Node {
    tag("ol", children)
}

pub fn optgroup(children: Vec<Node>) -> Node {
    tag("optgroup", children)
}

pub fn option(children: Vec<Node>) -> Node {
    tag("option", children)
}

pub fn output(children: Vec<Node>) -> Node {
    tag("output", children)
}

pub fn p(children: Vec<Node>) -> Node {
    tag("p", children)
}

pub fn param(children: Vec<Node>) -> Node {
    tag_void("param", children)
}

pub fn picture(children: Vec<Node>) -> Node {
    tag("picture", children)
}

pub fn pre(children: Vec<Node>) -> Node {
    tag("pre", children)
}

pub fn progress(children: Vec<Node>) -> Node {
    tag("progress", children)
}

pub fn q(children: Vec<Node>) -> Node {
    tag("q", children)
}

pub fn rp(children: Vec<Node>) -> Node {
    tag("rp", children)
}

pub fn rt(children: Vec<Node>) -> Node {
    tag("rt", children)
}

pub fn ruby(children: Vec<Node>) -> Node {
    tag("ruby", children)
}

pub fn s(children: Vec<Node>) -> Node {
    tag("s", children)
}

pub fn samp(children: Vec<Node>) -> Node {
    tag("samp", children)
}

pub fn script(children: Vec<Node>) -> Node {
    tag("script", children)
}

pub fn search(children: Vec<Node>) -> Node {
    tag("search", children)
}

pub fn section(children: Vec<Node>) -> Node {
    tag("section", children)
}

pub fn select(children: Vec<Node>) -> Node {
    tag("select", children)
}

pub fn small(children: Vec<Node>) -> Node {
    tag("small", children)
}

pub fn source(children: Vec<Node>) -> Node {
    tag_void("source", children)
}

pub fn span(children: Vec<Node>) -> Node {
    tag("span", children)
}

pub fn strong(children: Vec<Node>) -> Node {
    tag("strong", children)
}

pub fn style(children: Vec<Node>) -> Node {
    tag("style", children)
}

pub fn sub(children: Vec<Node>) -> Node {
    tag("sub", children)
}

pub fn summary(children: Vec<Node>) -> Node {
    tag("summary", children)
}

pub fn sup(children: Vec<Node>) -> Node {
    tag("sup", children)
}

pub fn svg(children: Vec<Node>) -> Node {
    tag("svg", children)
}

pub fn table(children: Vec<Node>) -> Node {
    tag("table", children)
}

pub fn tbody(children: Vec<Node>) -> Node {
    tag("tbody", children)
}

pub fn td(children: Vec<Node>) -> Node {
    tag("td", children)
}

pub fn template(children: Vec<Node>) -> Node {
    tag("template", children)
}

pub fn textarea(children: Vec<Node>) -> Node {
    tag("textarea", children)
}

pub fn tfoot(children: Vec<Node>) -> Node {
    tag("tfoot", children)
}

pub fn th(children: Vec<Node>) -> Node {
    tag("th", children)
}

pub fn thead(children: Vec<Node>) -> Node {
    tag("thead", children)
}

pub fn time(children: Vec<Node>) -> Node {
    tag("time", children)
}

/// `<title>` takes its text directly.
pub fn title(content: impl Into<Str>) -> Node {
    tag("title", vec![text(content)])
}

pub fn tr(children: Vec<Node>) -> Node {
    tag("tr", children)
}

pub fn track(children: Vec<Node>) -> Node {
    tag_void("track", children)
}

pub fn u(children: Vec<Node>) -> Node {
    tag("u", children)
}

pub fn ul(children: Vec<Node>) -> Node {
    tag("ul", children)
}

pub fn var(children: Vec<Node>) -> Node {
    tag("var", children)
}

pub fn video(children: Vec<Node>) -> Node {
    tag("video", children)
}

pub fn wbr(children: Vec<Node>) -> Node {
    tag("wbr", children)
}
