//! Rendering module for converting extracted blocks to output formats.

mod json;
mod options;
mod stats;
mod text;

pub use json::{blocks_to_json, to_json, JsonFormat};
pub use options::TextOptions;
pub use stats::ExtractionStats;
pub use text::to_text;
