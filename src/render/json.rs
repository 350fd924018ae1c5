//! JSON rendering for export payloads and text blocks.

use serde::Serialize;

use crate::error::Result;
use crate::model::{ClassifiedBlock, ExportPayload};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an export payload to JSON.
pub fn to_json(payload: &ExportPayload, format: JsonFormat) -> Result<String> {
    serialize(payload, format)
}

/// Convert ordered text blocks to a JSON array.
pub fn blocks_to_json(blocks: &[ClassifiedBlock], format: JsonFormat) -> Result<String> {
    serialize(blocks, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}
