//! Escaping and link sanitizing helpers for HTML output.

use url::{ParseError, Url};

/// Schemes a link may carry when links are sanitized.
pub const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Escape text for use both as element content and inside a double-quoted
/// attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Whether `href` may be emitted as is.
///
/// Relative references have no scheme and are always allowed. Absolute URLs
/// must use one of [`SAFE_SCHEMES`]. The WHATWG parser strips leading control
/// characters and embedded tabs/newlines, so `" java\tscript:"` is seen as
/// the `javascript` scheme it is.
pub fn is_safe_href(href: &str) -> bool {
    match Url::parse(href) {
        Ok(url) => SAFE_SCHEMES.contains(&url.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
