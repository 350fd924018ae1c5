//! The export payload handed to the document assembler.

use serde::{Deserialize, Serialize};

use super::block::{ClassifiedBlock, SectionType};

/// Raster plus structured text for one exported frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Encoded PNG, forwarded as-is
    pub png_bytes: Vec<u8>,
    /// Logical frame width (pre-scale)
    pub frame_width: f64,
    /// Logical frame height (pre-scale)
    pub frame_height: f64,
    /// Text blocks in reading order
    pub text_blocks: Vec<ClassifiedBlock>,
}

impl ExportPayload {
    /// Number of extracted text blocks.
    pub fn block_count(&self) -> usize {
        self.text_blocks.len()
    }

    /// Blocks flagged as titles, in reading order.
    pub fn titles(&self) -> impl Iterator<Item = &ClassifiedBlock> {
        self.text_blocks.iter().filter(|b| b.is_title)
    }

    /// Blocks carrying the given label, in reading order.
    pub fn blocks_in(&self, section: SectionType) -> impl Iterator<Item = &ClassifiedBlock> {
        self.text_blocks
            .iter()
            .filter(move |b| b.section_type == section)
    }
}
