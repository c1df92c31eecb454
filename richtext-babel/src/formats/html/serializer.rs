//! HTML serialization (document model → HTML fragment)
//!
//! Depth-first, pre-order walk writing into a single output buffer. Every
//! node is rendered independently of its siblings, so rendering `[a, b]` is
//! rendering `[a]` followed by rendering `[b]`.

use super::escape::{escape_html, is_safe_href};
use super::HtmlOptions;
use crate::model::{Document, Link, Node, Text, TextFormat};
use std::borrow::Cow;

/// Inline wrappers per format flag, innermost first.
const INLINE_TAGS: [(TextFormat, &str); 7] = [
    (TextFormat::CODE, "code"),
    (TextFormat::BOLD, "strong"),
    (TextFormat::ITALIC, "em"),
    (TextFormat::UNDERLINE, "u"),
    (TextFormat::STRIKETHROUGH, "s"),
    (TextFormat::SUBSCRIPT, "sub"),
    (TextFormat::SUPERSCRIPT, "sup"),
];

/// Render a whole document (its top-level children).
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    render_nodes(&doc.children, options)
}

/// Render a sibling sequence. An empty sequence renders to `""`.
pub fn render_nodes(nodes: &[Node], options: &HtmlOptions) -> String {
    let mut out = String::new();
    HtmlWriter { options, out: &mut out }.write_nodes(nodes, 1);
    out
}

struct HtmlWriter<'a> {
    options: &'a HtmlOptions,
    out: &'a mut String,
}

impl HtmlWriter<'_> {
    fn write_nodes(&mut self, nodes: &[Node], depth: usize) {
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                if !nodes.is_empty() {
                    tracing::debug!(
                        depth,
                        max_depth,
                        dropped = nodes.len(),
                        "dropping nodes nested past max depth"
                    );
                }
                return;
            }
        }
        for node in nodes {
            self.write_node(node, depth);
        }
    }

    fn write_node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Paragraph(children) => self.write_element("p", children, depth),
            Node::Heading { level, children } => {
                self.write_element(level.as_tag(), children, depth)
            }
            Node::List { ordered, children } => {
                let tag = if *ordered { "ol" } else { "ul" };
                self.write_element(tag, children, depth)
            }
            Node::ListItem(children) => self.write_element("li", children, depth),
            Node::Quote(children) => self.write_element("blockquote", children, depth),
            Node::Link(link) => self.write_link(link, depth),
            Node::LineBreak => self.out.push_str("<br />"),
            Node::Text(text) => self.write_text(text),
            Node::Unknown {
                children: Some(children),
                ..
            } => self.write_nodes(children, depth + 1),
            Node::Unknown { children: None, .. } => {}
        }
    }

    fn write_element(&mut self, tag: &str, children: &[Node], depth: usize) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.write_nodes(children, depth + 1);
        self.close(tag);
    }

    fn write_link(&mut self, link: &Link, depth: usize) {
        let href = match link.url.as_deref() {
            Some(url) if self.options.safe_links && !is_safe_href(url) => {
                tracing::debug!(url, "replacing unsafe link target");
                "#"
            }
            Some(url) => url,
            None => "#",
        };

        self.out.push_str("<a href=\"");
        self.push_attr(href);
        self.out.push('"');
        if link.new_tab {
            self.out.push_str(" target=\"_blank\"");
        }
        if let Some(rel) = link.effective_rel() {
            self.out.push_str(" rel=\"");
            self.push_attr(rel);
            self.out.push('"');
        }
        self.out.push('>');
        self.write_nodes(&link.children, depth + 1);
        self.close("a");
    }

    fn write_text(&mut self, text: &Text) {
        let tags: Vec<&str> = INLINE_TAGS
            .iter()
            .filter(|(flag, _)| text.format.contains(*flag))
            .map(|(_, tag)| *tag)
            .collect();

        if let Some(style) = &text.style {
            self.out.push_str("<span style=\"");
            self.push_attr(style);
            self.out.push_str("\">");
        }
        for tag in tags.iter().rev() {
            self.out.push('<');
            self.out.push_str(tag);
            self.out.push('>');
        }

        let content = self.encode(&text.text);
        self.out.push_str(&content);

        for tag in &tags {
            self.close(tag);
        }
        if text.style.is_some() {
            self.close("span");
        }
    }

    fn push_attr(&mut self, value: &str) {
        let value = self.encode(value);
        self.out.push_str(&value);
    }

    fn encode<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape_text {
            Cow::Owned(escape_html(value))
        } else {
            Cow::Borrowed(value)
        }
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}
