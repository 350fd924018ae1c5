//! Font availability seam.

use crate::error::Result;
use crate::model::FontName;

/// Makes a font available before a text node's attributes are read.
///
/// Loading is a suspension point: the walker awaits it for every text node
/// and does not start the next node until it completes. Implementations own
/// whatever cache they need; the walker keeps no font state.
#[allow(async_fn_in_trait)]
pub trait FontLoader {
    /// Ensure `font` is available.
    async fn load_font(&mut self, font: &FontName) -> Result<()>;
}

/// Loader for hosts where every font is already available.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreloadedFonts;

impl FontLoader for PreloadedFonts {
    async fn load_font(&mut self, _font: &FontName) -> Result<()> {
        Ok(())
    }
}
