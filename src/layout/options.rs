//! Thresholds for section classification and reading order.

/// Heuristic constants used by the classifier and the orderer.
///
/// Defaults are relied on by downstream consumers; change them only
/// deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Runs strictly larger than this are the candidate header
    pub header_min_font_size: f64,

    /// Bold runs strictly larger than this are section titles
    pub title_min_font_size: f64,

    /// Titles must be shorter than this many characters
    pub max_title_chars: usize,

    /// Vertical distance within which runs share a visual row
    pub row_tolerance: f64,
}

impl LayoutOptions {
    /// Create layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header size threshold.
    pub fn with_header_min_font_size(mut self, size: f64) -> Self {
        self.header_min_font_size = size;
        self
    }

    /// Set the title size threshold.
    pub fn with_title_min_font_size(mut self, size: f64) -> Self {
        self.title_min_font_size = size;
        self
    }

    /// Set the maximum title length.
    pub fn with_max_title_chars(mut self, chars: usize) -> Self {
        self.max_title_chars = chars;
        self
    }

    /// Set the same-row tolerance.
    pub fn with_row_tolerance(mut self, tolerance: f64) -> Self {
        self.row_tolerance = tolerance;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            header_min_font_size: 20.0,
            title_min_font_size: 14.0,
            max_title_chars: 60,
            row_tolerance: 5.0,
        }
    }
}
