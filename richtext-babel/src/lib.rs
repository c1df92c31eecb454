//! Conversion of Lexical rich-text documents
//!
//!     The studio site keeps every rich-text field (project descriptions, team bios) in Payload
//!     CMS, which stores them as the JSON tree produced by the Lexical editor. This crate turns
//!     that tree into the HTML fragment the pages embed, plus a few other views of the same
//!     content (plain text, normalized JSON, a tree visualization).
//!
//!     This is a pure lib: no fetching, no caching, no shell assumptions (stdout, env vars).
//!     The richtext-cli crate is the shell around it.
//!
//! Architecture
//!
//!     Raw JSON goes through one lenient boundary (./model/from_json.rs) into a tagged-union
//!     model (./model/nodes.rs). Every format works from that model only, so the quirks of
//!     editor output are dealt with once.
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model                   # Document model and JSON boundary
//!     ├── formats
//!     │   ├── html                # The renderer (escape.rs, serializer.rs)
//!     │   ├── json                # Lexical JSON in, normalized JSON out
//!     │   ├── text                # Plain text and excerpts
//!     │   ├── treeviz             # Tree visualization
//!     │   └── common              # Option parsing shared by formats
//!     └── lib.rs
//!
//! Failure Model
//!
//!     Rendering never fails. Absent, null or malformed input renders to the empty string and
//!     malformed parts of a document render to nothing, so callers can render unconditionally.
//!     Errors only exist around rendering: unknown format names, JSON text that does not parse,
//!     option values that make no sense.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common                  # fixture loading
//!     ├── html                    # renderer behavior and properties
//!     ├── text                    # plain-text extraction
//!     └── fixtures                # Payload field dumps
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{render_nodes, serialize_to_html, HtmlOptions};
pub use model::{Document, Node};
pub use registry::FormatRegistry;

use serde_json::Value;

/// Render a sibling sequence of nodes (any `children` array) to HTML with
/// default options.
///
/// Anything that is not a JSON array (including `null`) renders to `""`.
pub fn render(nodes: &Value) -> String {
    let nodes = model::from_json::nodes_from_value(nodes);
    render_nodes(&nodes, &HtmlOptions::default())
}

/// Render a whole rich-text field (`{ "root": { "children": [...] } }`) to
/// HTML with default options.
///
/// A missing or malformed `root` renders to `""`.
pub fn render_document(doc: &Value) -> String {
    serialize_to_html(&Document::from_value(doc), &HtmlOptions::default())
}
