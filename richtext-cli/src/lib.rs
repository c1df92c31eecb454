//! Pieces of the `richtext` binary that are worth testing on their own.

pub mod inspect;

use richtext_babel::formats::{
    HtmlFormat, HtmlOptions, JsonFormat, PlainTextFormat, TextOptions, TreevizFormat,
    TreevizOptions,
};
use richtext_babel::FormatRegistry;
use richtext_config::RichtextConfig;

/// The default formats, configured from a loaded [`RichtextConfig`].
pub fn registry_from_config(config: &RichtextConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(JsonFormat);
    registry.register(HtmlFormat::new(HtmlOptions::from(&config.render.html)));
    registry.register(PlainTextFormat::new(TextOptions::from(&config.render.text)));
    registry.register(TreevizFormat::new(TreevizOptions::from(
        &config.inspect.treeviz,
    )));
    registry
}
