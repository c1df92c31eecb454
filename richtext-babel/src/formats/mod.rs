//! Format implementations
//!
//! This module contains all format implementations that convert the rich-text
//! document model to and from text representations.

pub mod common;
pub mod html;
pub mod icons;
pub mod json;
pub mod text;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use text::{PlainTextFormat, TextOptions};
pub use treeviz::{TreevizFormat, TreevizOptions};
