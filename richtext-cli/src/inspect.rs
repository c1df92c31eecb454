//! Inspection views
//!
//! `richtext inspect` shows what the renderers actually receive once the
//! lenient JSON boundary has had its say:
//!
//! - `treeviz`: the document model as a tree with Unicode icons (default)
//! - `json`: the normalized Lexical JSON, pretty-printed
//!
//! ## Extra Parameters
//!
//! - `show-formats`: "false" hides the `[bold, italic]` suffix on text nodes
//!
//! Example: `richtext inspect description.json --extra-show-formats false`

use richtext_babel::formats::json::{parse_json, to_json_string};
use richtext_babel::formats::treeviz::{to_treeviz_str_with_options, TreevizOptions};
use std::collections::HashMap;

/// All available inspect views
pub const AVAILABLE_VIEWS: &[&str] = &["treeviz", "json"];

/// The view used when none is named.
pub const DEFAULT_VIEW: &str = "treeviz";

/// Render `source` (Lexical JSON text) through the named view.
pub fn execute_view(
    source: &str,
    view: &str,
    options: &TreevizOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let doc = parse_json(source).map_err(|e| format!("Parse failed: {e}"))?;

    match view {
        "treeviz" => {
            let options = options
                .with_params(extra_params)
                .map_err(|e| e.to_string())?;
            Ok(to_treeviz_str_with_options(&doc, &options))
        }
        "json" => {
            let mut json = to_json_string(&doc).map_err(|e| e.to_string())?;
            json.push('\n');
            Ok(json)
        }
        other => Err(format!(
            "Unknown view '{other}'. Available views: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}
