//! Plain text rendering for ATS consumers.

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::ClassifiedBlock;

use super::TextOptions;

/// Render ordered blocks as plain text, one block per line.
///
/// Titles start a new paragraph.
pub fn to_text(blocks: &[ClassifiedBlock], options: &TextOptions) -> Result<String> {
    let mut output = String::new();

    for block in blocks {
        if block.run.is_blank() && !options.keep_blank {
            continue;
        }

        if block.is_title && !output.is_empty() {
            output.push('\n');
        }

        if options.section_labels && block.is_title {
            output.push_str(&format!("[{}] ", block.section_type));
        }

        if options.normalize_unicode {
            output.extend(block.text().nfc());
        } else {
            output.push_str(block.text());
        }
        output.push('\n');
    }

    Ok(output.trim_end().to_string())
}
