//! Treeviz formatter for document nodes
//!
//! A visual representation of the parsed tree, one node per line, meant for
//! checking what a CMS field actually contains before it gets rendered.
//!
//! The format is:
//! <prefix><connector> <icon> <label>
//!
//! Example:
//!
//! ⧉ Document (2 items)
//! ├─ § Heading h2
//! │ └─ ◦ "Casa en la ladera"
//! └─ ¶ Paragraph
//!   ├─ ◦ "Vivienda unifamiliar de mader…" [bold]
//!   ├─ ↵ LineBreak
//!   └─ ⊕ Link /work/12
//!     └─ ◦ "ver proyecto"
//!
//! Text labels are quoted and truncated to 30 characters. Unknown nodes show
//! their `type`, which is usually the quickest way to spot an editor plugin
//! the renderers do not know about.

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::bool_param;
use crate::model::{Document, Node};
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

/// Options for the tree visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Append active text formats to text labels
    pub show_formats: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self { show_formats: true }
    }
}

impl TreevizOptions {
    /// Layer string parameters (`show-formats`).
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        if let Some(show_formats) = bool_param(params, "show-formats")? {
            self.show_formats = show_formats;
        }
        Ok(self)
    }
}

/// Label shown after the icon for a node.
pub fn display_label(node: &Node, options: &TreevizOptions) -> String {
    match node {
        Node::Heading { level, .. } => format!("Heading {}", level.as_tag()),
        Node::List { ordered, children } => format!(
            "List ({}, {} items)",
            if *ordered { "ordered" } else { "bullet" },
            children.len()
        ),
        Node::Link(link) => {
            let url = link.url.as_deref().unwrap_or("#");
            if link.new_tab {
                format!("Link {url} (new tab)")
            } else {
                format!("Link {url}")
            }
        }
        Node::Text(text) => {
            let mut label = format!("\"{}\"", truncate(&text.text));
            if options.show_formats && !text.format.names().is_empty() {
                label.push_str(&format!(" [{}]", text.format));
            }
            label
        }
        Node::Unknown { kind, .. } => {
            format!("Unknown ({})", kind.as_deref().unwrap_or("untyped"))
        }
        Node::Paragraph(_) | Node::ListItem(_) | Node::Quote(_) | Node::LineBreak => {
            node.node_type().to_string()
        }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    options: &TreevizOptions,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.node_type());

    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon,
        display_label(node, options)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    output.push_str(&format_children(node.children(), &child_prefix, options));
    output
}

fn format_children(children: &[Node], prefix: &str, options: &TreevizOptions) -> String {
    let mut output = String::new();
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(child, prefix, i, child_count, options));
    }
    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_options(doc, &TreevizOptions::default())
}

/// Convert a document to a treeviz string
pub fn to_treeviz_str_with_options(doc: &Document, options: &TreevizOptions) -> String {
    let output = format!(
        "{} Document ({} items)\n",
        get_icon("Document"),
        doc.children.len()
    );
    output + &format_children(&doc.children, "", options)
}

/// Format implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormat {
    options: TreevizOptions,
}

impl TreevizFormat {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_params(options)?;
        Ok(to_treeviz_str_with_options(doc, &options))
    }
}
