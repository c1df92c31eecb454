//! Lexical JSON format
//!
//! The only format that parses. Input is JSON text as Payload returns it for
//! a rich-text field, either the full `{ "root": { ... } }` object or a bare
//! array of nodes. Text that is not JSON at all is a parse error; JSON of the
//! wrong shape is an empty document.
//!
//! Serialization writes the normalized model back out (pretty-printed), which
//! is handy for seeing what the renderers actually received.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::to_json::document_to_value;
use crate::model::Document;
use serde_json::Value;

/// Parse Lexical JSON text into a document.
pub fn parse_json(source: &str) -> Result<Document, FormatError> {
    let value: Value =
        serde_json::from_str(source).map_err(|err| FormatError::ParseError(err.to_string()))?;
    Ok(Document::from_value(&value))
}

/// Serialize a document as pretty-printed Lexical JSON.
pub fn to_json_string(doc: &Document) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&document_to_value(doc))
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

/// Format implementation for Lexical JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Lexical editor JSON as stored by Payload"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parse_json(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json_string(doc)
    }
}
