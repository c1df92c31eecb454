//! Document model for Lexical rich-text fields.
//!
//! Payload stores rich text as the JSON produced by the Lexical editor. This
//! module is the typed boundary for that JSON: [`nodes`] holds the tagged
//! union every format works with, [`from_json`] interprets raw
//! `serde_json::Value`s leniently (a field of the wrong shape is treated as
//! absent, never as an error) and [`to_json`] writes the normalized form back.

pub mod from_json;
pub mod nodes;
pub mod to_json;

pub use nodes::{Document, HeadingLevel, Link, Node, Text, TextFormat};
