//! Extraction options and configuration.

/// Options for extracting text runs from a visual tree.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Font size used when the node's size is mixed or unavailable
    pub default_font_size: f64,

    /// Numeric weight at or above which a run counts as bold
    pub bold_weight_threshold: f64,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Abort on the first run that fails to resolve.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Skip runs that fail to resolve and keep going.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the fallback font size.
    pub fn with_default_font_size(mut self, size: f64) -> Self {
        self.default_font_size = size;
        self
    }

    /// Set the bold weight threshold.
    pub fn with_bold_weight_threshold(mut self, weight: f64) -> Self {
        self.bold_weight_threshold = weight;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            default_font_size: 12.0,
            bold_weight_threshold: 600.0,
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first run that cannot be resolved
    Strict,
    /// Log and skip runs that cannot be resolved
    #[default]
    Lenient,
}
