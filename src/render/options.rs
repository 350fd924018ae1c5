//! Plain text rendering options.

/// Options for rendering blocks as plain text.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Prefix titles with their section label, e.g. `[SKILLS]`
    pub section_labels: bool,

    /// Normalize output text to Unicode NFC
    pub normalize_unicode: bool,

    /// Keep blocks whose text is only whitespace
    pub keep_blank: bool,
}

impl TextOptions {
    /// Create text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable section labels.
    pub fn with_section_labels(mut self, labels: bool) -> Self {
        self.section_labels = labels;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Keep or drop blank blocks.
    pub fn with_keep_blank(mut self, keep: bool) -> Self {
        self.keep_blank = keep;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            section_labels: false,
            normalize_unicode: true,
            keep_blank: false,
        }
    }
}
