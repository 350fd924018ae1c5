//! Text run extraction from a host's visual tree.

mod fonts;
mod options;
mod resolve;
mod walker;

pub use fonts::{FontLoader, PreloadedFonts};
pub use options::{ErrorMode, ExtractOptions};
pub use resolve::{resolve_color, resolve_font_size, resolve_font_style, resolve_font_weight};
pub use walker::{extract_text_runs, TreeWalker};

#[cfg(test)]
pub(crate) use walker::test_support;
