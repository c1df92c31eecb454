//! Lenient conversion from Lexical JSON into the document model.
//!
//! Payload hands rich text over as untyped JSON, and editors, migrations and
//! plugins all leave their own quirks in it. Nothing here fails: a field with
//! the wrong JSON type is treated as absent, a non-object entry in a children
//! array is skipped, and an input that is not a document at all is an empty
//! document.
//!
//! The walk is bounded: nodes nested deeper than the limit (top-level nodes
//! are depth 1) are not read, so their parent ends up with no children. The
//! default bound is [`DEFAULT_MAX_DEPTH`]; the `*_with_max_depth` variants
//! take `None` for an unbounded walk.

use super::nodes::{Document, HeadingLevel, Link, Node, Text, TextFormat};
use serde_json::{Map, Value};

/// Default nesting limit; far beyond anything the editor produces.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Document {
    /// Interpret a JSON value as a document, reading at most
    /// [`DEFAULT_MAX_DEPTH`] levels.
    ///
    /// Accepts either the stored field shape `{ "root": { "children": [...] } }`
    /// or a bare array of nodes. Everything else is an empty document.
    pub fn from_value(value: &Value) -> Document {
        Self::from_value_with_max_depth(value, Some(DEFAULT_MAX_DEPTH))
    }

    /// Like [`Document::from_value`] with an explicit nesting limit.
    pub fn from_value_with_max_depth(value: &Value, max_depth: Option<usize>) -> Document {
        let walker = Walker { max_depth };
        match value {
            Value::Array(_) => Document::new(walker.nodes(value, 1)),
            Value::Object(map) => {
                let children = map
                    .get("root")
                    .and_then(Value::as_object)
                    .and_then(|root| root.get("children"))
                    .map(|children| walker.nodes(children, 1))
                    .unwrap_or_default();
                Document::new(children)
            }
            _ => Document::default(),
        }
    }
}

/// Interpret a JSON value as a sibling sequence. Non-arrays yield no nodes.
pub fn nodes_from_value(value: &Value) -> Vec<Node> {
    nodes_from_value_with_max_depth(value, Some(DEFAULT_MAX_DEPTH))
}

/// Like [`nodes_from_value`] with an explicit nesting limit.
pub fn nodes_from_value_with_max_depth(value: &Value, max_depth: Option<usize>) -> Vec<Node> {
    Walker { max_depth }.nodes(value, 1)
}

/// Interpret a single JSON value as a top-level node. Only objects are nodes.
pub fn node_from_value(value: &Value) -> Option<Node> {
    Walker {
        max_depth: Some(DEFAULT_MAX_DEPTH),
    }
    .node(value, 1)
}

#[derive(Clone, Copy)]
struct Walker {
    max_depth: Option<usize>,
}

impl Walker {
    fn nodes(self, value: &Value, depth: usize) -> Vec<Node> {
        let Value::Array(items) = value else {
            return Vec::new();
        };
        if self.max_depth.is_some_and(|max_depth| depth > max_depth) {
            if !items.is_empty() {
                tracing::debug!(
                    depth,
                    dropped = items.len(),
                    "not reading nodes nested past max depth"
                );
            }
            return Vec::new();
        }
        items.iter().filter_map(|item| self.node(item, depth)).collect()
    }

    fn node(self, value: &Value, depth: usize) -> Option<Node> {
        let map = value.as_object()?;
        let kind = map.get("type").and_then(Value::as_str);
        let children = || self.children_of(map, depth);

        let node = match kind {
            Some("paragraph") => Node::Paragraph(children()),
            Some("heading") => Node::Heading {
                level: string_field(map, "tag")
                    .and_then(HeadingLevel::from_tag)
                    .unwrap_or_default(),
                children: children(),
            },
            Some(tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6")) => Node::Heading {
                level: HeadingLevel::from_tag(tag).unwrap_or_default(),
                children: children(),
            },
            Some("list") => Node::List {
                ordered: string_field(map, "listType") == Some("number")
                    || string_field(map, "tag") == Some("ol"),
                children: children(),
            },
            Some("listitem" | "li") => Node::ListItem(children()),
            Some("quote") => Node::Quote(children()),
            Some("link") => Node::Link(link_from_map(map, children())),
            Some("linebreak") => Node::LineBreak,
            Some("text") => Node::Text(text_from_map(map)),
            other => {
                tracing::trace!(node_type = ?other, "passing through unrecognized node");
                Node::Unknown {
                    kind: other.map(str::to_string),
                    children: map
                        .get("children")
                        .filter(|children| children.is_array())
                        .map(|children| self.nodes(children, depth + 1)),
                }
            }
        };

        Some(node)
    }

    fn children_of(self, map: &Map<String, Value>, depth: usize) -> Vec<Node> {
        map.get("children")
            .map(|children| self.nodes(children, depth + 1))
            .unwrap_or_default()
    }
}

/// A field holding a non-empty string. Empty strings count as absent.
fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn link_from_map(map: &Map<String, Value>, children: Vec<Node>) -> Link {
    let fields = map.get("fields").and_then(Value::as_object);
    let from_fields = |key: &str| fields.and_then(|fields| string_field(fields, key));

    let url = string_field(map, "url").or_else(|| from_fields("url"));
    let rel = string_field(map, "rel").or_else(|| from_fields("rel"));

    // A null `newTab` on the node still defers to the nested field.
    let new_tab = map
        .get("newTab")
        .filter(|value| !value.is_null())
        .or_else(|| fields.and_then(|fields| fields.get("newTab")))
        .is_some_and(is_truthy);

    Link {
        url: url.map(str::to_string),
        new_tab,
        rel: rel.map(str::to_string),
        children,
    }
}

fn text_from_map(map: &Map<String, Value>) -> Text {
    Text {
        text: map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        format: map
            .get("format")
            .map(format_from_value)
            .unwrap_or_default(),
        style: string_field(map, "style").map(str::to_string),
    }
}

/// Numbers are truncated and reinterpreted as 32 bits, the way the editor's
/// bitwise checks see them. Anything that is not a number means no format.
fn format_from_value(value: &Value) -> TextFormat {
    let bits = value
        .as_i64()
        .or_else(|| value.as_u64().map(|n| n as i64))
        .or_else(|| value.as_f64().filter(|n| n.is_finite()).map(|n| n as i64));
    bits.map(|n| TextFormat::from_bits(n as u32))
        .unwrap_or_default()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
