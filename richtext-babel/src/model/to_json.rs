//! Conversion from the document model back to Lexical-shaped JSON.
//!
//! The output is the normalized form of whatever was parsed: fallbacks are
//! resolved (heading tags, list kinds, link targets), malformed fields are
//! gone, and unknown nodes keep only their type and children.

use super::nodes::{Document, Link, Node, Text};
use serde_json::{json, Map, Value};

pub fn document_to_value(doc: &Document) -> Value {
    json!({
        "root": {
            "type": "root",
            "children": nodes_to_value(&doc.children),
        }
    })
}

pub fn nodes_to_value(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_to_value).collect())
}

pub fn node_to_value(node: &Node) -> Value {
    match node {
        Node::Paragraph(children) => container("paragraph", children),
        Node::Heading { level, children } => {
            let mut value = container("heading", children);
            value["tag"] = json!(level.as_tag());
            value
        }
        Node::List { ordered, children } => {
            let mut value = container("list", children);
            let (list_type, tag) = if *ordered {
                ("number", "ol")
            } else {
                ("bullet", "ul")
            };
            value["listType"] = json!(list_type);
            value["tag"] = json!(tag);
            value
        }
        Node::ListItem(children) => container("listitem", children),
        Node::Quote(children) => container("quote", children),
        Node::Link(link) => link_to_value(link),
        Node::LineBreak => json!({ "type": "linebreak" }),
        Node::Text(text) => text_to_value(text),
        Node::Unknown { kind, children } => {
            let mut map = Map::new();
            if let Some(kind) = kind {
                map.insert("type".to_string(), json!(kind));
            }
            if let Some(children) = children {
                map.insert("children".to_string(), nodes_to_value(children));
            }
            Value::Object(map)
        }
    }
}

fn container(kind: &str, children: &[Node]) -> Value {
    json!({
        "type": kind,
        "children": nodes_to_value(children),
    })
}

fn link_to_value(link: &Link) -> Value {
    let mut value = container("link", &link.children);
    if let Some(url) = &link.url {
        value["url"] = json!(url);
    }
    value["newTab"] = json!(link.new_tab);
    if let Some(rel) = &link.rel {
        value["rel"] = json!(rel);
    }
    value
}

fn text_to_value(text: &Text) -> Value {
    let mut value = json!({
        "type": "text",
        "text": text.text,
        "format": text.format.bits(),
    });
    if let Some(style) = &text.style {
        value["style"] = json!(style);
    }
    value
}
