//! HTML format implementation
//!
//! Renders a rich-text document into an HTML fragment meant to be injected
//! into a page (a project description panel, a team bio). There is no
//! document shell, no CSS and no whitespace normalization: siblings are
//! concatenated as they come.
//!
//! # Element Mapping Table
//!
//! | Node                 | HTML                                               | Notes                                        |
//! |----------------------|----------------------------------------------------|----------------------------------------------|
//! | paragraph            | `<p>`                                              |                                              |
//! | heading              | `<h1>`..`<h6>`                                     | Unknown `tag` values fall back to `<h3>`     |
//! | h1..h6 (legacy)      | `<h1>`..`<h6>`                                     | Level taken from the type itself             |
//! | list                 | `<ol>` / `<ul>`                                    | Ordered for `listType: number` or `tag: ol`  |
//! | listitem / li        | `<li>`                                             |                                              |
//! | quote                | `<blockquote>`                                     |                                              |
//! | link                 | `<a href target rel>`                              | `href` defaults to `#`                       |
//! | linebreak            | `<br />`                                           |                                              |
//! | text                 | text wrapped per format bit                        | `<span style>` outermost when styled         |
//! | anything else        | children only                                      | No wrapper                                   |
//!
//! Text format bits wrap innermost to outermost in this order: code
//! (`<code>`), bold (`<strong>`), italic (`<em>`), underline (`<u>`),
//! strikethrough (`<s>`), subscript (`<sub>`), superscript (`<sup>`).
//!
//! # Escaping and Trust
//!
//! By default every text run and attribute value is HTML-escaped, and links
//! whose scheme is not `http`, `https`, `mailto` or `tel` are rewritten to
//! `#`. [`HtmlOptions::trusted`] turns both off and emits text and
//! attributes verbatim, for fields whose editors embed inline markup on
//! purpose. Everyone with write access to the CMS must then be trusted.
//!
//! # Nesting Limit
//!
//! Rendering recurses once per nesting level. [`HtmlOptions::max_depth`]
//! bounds that: nodes deeper than the limit are dropped with their subtree
//! while the rest of the document still renders. Reading JSON into the model
//! is bounded the same way (see [`crate::model::from_json`]), so a document
//! nested thousands of levels deep never reaches the renderer whole.

mod escape;
mod serializer;

pub use escape::{escape_html, is_safe_href, SAFE_SCHEMES};
pub use serializer::{render_nodes, serialize_to_html};

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{bool_param, usize_param};
use crate::model::Document;
use std::collections::HashMap;

pub use crate::model::from_json::DEFAULT_MAX_DEPTH;

/// Options for HTML rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape text content and attribute values
    pub escape_text: bool,
    /// Replace links with non-web schemes by `#`
    pub safe_links: bool,
    /// Deepest nesting level rendered (top-level nodes are level 1)
    pub max_depth: Option<usize>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            escape_text: true,
            safe_links: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl HtmlOptions {
    /// Raw output: no escaping, no link rewriting, no depth limit.
    pub fn trusted() -> Self {
        Self {
            escape_text: false,
            safe_links: false,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Layer string parameters over these options.
    ///
    /// Recognized keys: `escape-text`, `safe-links` (booleans) and
    /// `max-depth` (integer, `0` meaning unlimited). Other keys are ignored.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        if let Some(escape_text) = bool_param(params, "escape-text")? {
            self.escape_text = escape_text;
        }
        if let Some(safe_links) = bool_param(params, "safe-links")? {
            self.safe_links = safe_links;
        }
        if let Some(max_depth) = usize_param(params, "max-depth")? {
            self.max_depth = (max_depth > 0).then_some(max_depth);
        }
        Ok(self)
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn trusted() -> Self {
        Self::new(HtmlOptions::trusted())
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for embedding in a page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_params(options)?;
        Ok(serialize_to_html(doc, &options))
    }
}
