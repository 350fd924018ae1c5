//! Font availability for scene documents.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::extract::FontLoader;
use crate::model::FontName;

/// Font loader backed by a scene's declared font list.
///
/// When no list is declared every font is considered available. Loaded
/// fonts are cached for the lifetime of the loader.
#[derive(Debug, Clone, Default)]
pub struct SceneFonts {
    available: Option<HashSet<FontName>>,
    loaded: HashSet<FontName>,
}

impl SceneFonts {
    /// Loader that accepts every font.
    pub fn all_available() -> Self {
        Self::default()
    }

    /// Loader that accepts only the listed fonts.
    pub fn with_available<I: IntoIterator<Item = FontName>>(fonts: I) -> Self {
        Self {
            available: Some(fonts.into_iter().collect()),
            loaded: HashSet::new(),
        }
    }

    /// Check if a font has been loaded.
    pub fn is_loaded(&self, font: &FontName) -> bool {
        self.loaded.contains(font)
    }

    /// Number of distinct fonts loaded so far.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

impl FontLoader for SceneFonts {
    async fn load_font(&mut self, font: &FontName) -> Result<()> {
        if self.loaded.contains(font) {
            return Ok(());
        }

        if let Some(available) = &self.available {
            if !available.contains(font) {
                return Err(Error::FontLoad(format!("{} is not available", font)));
            }
        }

        log::debug!("Loaded font {}", font);
        self.loaded.insert(font.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_available() {
        let mut fonts = SceneFonts::all_available();
        let inter = FontName::new("Inter", "Regular");

        fonts.load_font(&inter).await.unwrap();
        fonts.load_font(&inter).await.unwrap();

        assert!(fonts.is_loaded(&inter));
        assert_eq!(fonts.loaded_count(), 1);
    }

    #[tokio::test]
    async fn test_declared_fonts_only() {
        let mut fonts = SceneFonts::with_available([FontName::new("Inter", "Bold")]);

        assert!(fonts.load_font(&FontName::new("Inter", "Bold")).await.is_ok());
        let err = fonts
            .load_font(&FontName::new("Lora", "Italic"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Font loading error: Lora Italic is not available");
    }
}
