//! Statistics over extracted blocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ClassifiedBlock, SectionType};

/// Counts collected from a set of classified blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    /// Number of blocks
    pub block_count: u32,

    /// Number of blocks flagged as titles
    pub title_count: u32,

    /// Blocks per section label
    pub sections: BTreeMap<String, u32>,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from blocks.
    pub fn from_blocks(blocks: &[ClassifiedBlock]) -> Self {
        let mut stats = Self::new();
        for block in blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &ClassifiedBlock) {
        self.block_count += 1;
        if block.is_title {
            self.title_count += 1;
        }
        *self
            .sections
            .entry(block.section_type.label().to_string())
            .or_insert(0) += 1;
        self.count_text(block.text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Blocks carrying the given label.
    pub fn section_count(&self, section: SectionType) -> u32 {
        self.sections.get(section.label()).copied().unwrap_or(0)
    }
}
