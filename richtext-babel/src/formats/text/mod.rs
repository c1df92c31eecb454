//! Plain-text format
//!
//! Extracts the readable text of a document, for meta descriptions, search
//! snippets and card excerpts. Formatting, styles and link targets are
//! dropped.
//!
//! Block rules:
//! - paragraph, heading and quote content is followed by a blank line
//! - each list item ends with a newline
//! - a linebreak is a newline
//! - lists, links and unknown nodes contribute their children only
//!
//! With `max-chars` set, the extracted text is turned into an excerpt:
//! whitespace runs collapse to single spaces and the text is cut at a word
//! boundary, ending in `…`.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::usize_param;
use crate::model::from_json::DEFAULT_MAX_DEPTH;
use crate::model::{Document, Node};
use std::collections::HashMap;

const ELLIPSIS: char = '…';

/// Options for plain-text extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Maximum excerpt length in characters (ellipsis included)
    pub max_chars: Option<usize>,
}

impl TextOptions {
    /// Layer string parameters (`max-chars`, `0` meaning unlimited).
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        if let Some(max_chars) = usize_param(params, "max-chars")? {
            self.max_chars = (max_chars > 0).then_some(max_chars);
        }
        Ok(self)
    }
}

/// Extract the text of a document.
pub fn to_plain_text(doc: &Document, options: &TextOptions) -> String {
    let mut out = String::new();
    write_nodes(&doc.children, 1, &mut out);
    let text = out.trim_end();

    match options.max_chars {
        Some(max_chars) => excerpt(text, max_chars),
        None => text.to_string(),
    }
}

/// Nodes nested past [`DEFAULT_MAX_DEPTH`] contribute no text.
fn write_nodes(nodes: &[Node], depth: usize, out: &mut String) {
    if depth > DEFAULT_MAX_DEPTH {
        return;
    }
    for node in nodes {
        match node {
            Node::Paragraph(children) | Node::Quote(children) | Node::Heading { children, .. } => {
                write_nodes(children, depth + 1, out);
                end_block(out, "\n\n");
            }
            Node::ListItem(children) => {
                write_nodes(children, depth + 1, out);
                end_block(out, "\n");
            }
            Node::LineBreak => out.push('\n'),
            Node::Text(text) => out.push_str(&text.text),
            Node::List { .. } | Node::Link(_) | Node::Unknown { .. } => {
                write_nodes(node.children(), depth + 1, out)
            }
        }
    }
}

/// Terminate the current block so that the output ends with `terminator`,
/// without stacking separators after blocks that already ended.
fn end_block(out: &mut String, terminator: &str) {
    if out.is_empty() {
        return;
    }
    let trimmed = out.trim_end_matches('\n').len();
    let existing = out.len() - trimmed;
    if existing < terminator.len() {
        out.truncate(trimmed);
        out.push_str(terminator);
    }
}

/// Collapse whitespace and cut to `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let budget = max_chars.saturating_sub(1);
    let cut: String = collapsed.chars().take(budget).collect();
    // Prefer ending on a word boundary unless that would leave nothing.
    let cut = match cut.rfind(' ') {
        Some(idx) if idx > 0 && !collapsed[cut.len()..].starts_with(' ') => &cut[..idx],
        _ => cut.as_str(),
    };

    let mut excerpt = cut.trim_end().to_string();
    excerpt.push(ELLIPSIS);
    excerpt
}

/// Format implementation for plain text
#[derive(Debug, Clone, Default)]
pub struct PlainTextFormat {
    options: TextOptions,
}

impl PlainTextFormat {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }
}

impl Format for PlainTextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text for descriptions and excerpts"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_plain_text(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_params(options)?;
        Ok(to_plain_text(doc, &options))
    }
}
