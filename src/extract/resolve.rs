//! Attribute resolution for a single text node.
//!
//! Every attribute has a deterministic fallback so a resolved run never
//! carries a missing value.

use crate::error::Result;
use crate::model::{
    Color, FontName, FontStyle, FontWeight, Mixed, NodeView, Paint, TextRun,
};

use super::fonts::FontLoader;
use super::options::ExtractOptions;

/// Load the node's font, then snapshot its attributes into a [`TextRun`].
pub(crate) async fn resolve_run<N, L>(
    node: &N,
    loader: &mut L,
    options: &ExtractOptions,
) -> Result<TextRun>
where
    N: NodeView,
    L: FontLoader,
{
    let font_name = node.font_name();
    let font = match &font_name {
        Mixed::Uniform(font) => font.clone(),
        // Mixed runs load the font of their first character only.
        Mixed::Mixed => node.range_font_name(0, 1)?,
    };
    loader.load_font(&font).await?;

    let (x, y) = node.absolute_position();
    let (width, height) = node.size();

    Ok(TextRun {
        text: node.characters().to_string(),
        x,
        y,
        width,
        height,
        font_size: resolve_font_size(node.font_size(), options.default_font_size),
        font_weight: resolve_font_weight(node.font_weight(), options.bold_weight_threshold),
        font_style: resolve_font_style(&font_name),
        color: resolve_color(node.fills()),
    })
}

/// Numeric size, or `default` when mixed or unavailable.
pub fn resolve_font_size(size: Option<Mixed<f64>>, default: f64) -> f64 {
    size.and_then(Mixed::into_uniform).unwrap_or(default)
}

/// Threshold a numeric weight; mixed or unavailable weights are normal.
pub fn resolve_font_weight(weight: Option<Mixed<f64>>, bold_threshold: f64) -> FontWeight {
    match weight.and_then(Mixed::into_uniform) {
        Some(w) if w >= bold_threshold => FontWeight::Bold,
        _ => FontWeight::Normal,
    }
}

/// Italic when a uniform font's style name contains "italic".
pub fn resolve_font_style(font: &Mixed<FontName>) -> FontStyle {
    match font {
        Mixed::Uniform(font) if font.is_italic() => FontStyle::Italic,
        _ => FontStyle::Normal,
    }
}

/// Color of the first fill if it is solid; opaque black otherwise.
pub fn resolve_color(fills: Option<Mixed<&[Paint]>>) -> Color {
    let first = fills
        .and_then(Mixed::into_uniform)
        .and_then(|fills| fills.first());

    match first {
        Some(Paint::Solid { color, opacity }) => {
            Color::new(color.r, color.g, color.b, opacity.unwrap_or(1.0))
        }
        _ => Color::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    #[test]
    fn test_font_size_fallback() {
        assert_eq!(resolve_font_size(Some(Mixed::Uniform(18.0)), 12.0), 18.0);
        assert_eq!(resolve_font_size(Some(Mixed::Mixed), 12.0), 12.0);
        assert_eq!(resolve_font_size(None, 12.0), 12.0);
    }

    #[test]
    fn test_font_weight_threshold() {
        assert_eq!(
            resolve_font_weight(Some(Mixed::Uniform(600.0)), 600.0),
            FontWeight::Bold
        );
        assert_eq!(
            resolve_font_weight(Some(Mixed::Uniform(599.0)), 600.0),
            FontWeight::Normal
        );
        assert_eq!(resolve_font_weight(Some(Mixed::Mixed), 600.0), FontWeight::Normal);
        assert_eq!(resolve_font_weight(None, 600.0), FontWeight::Normal);
    }

    #[test]
    fn test_font_style() {
        let italic = Mixed::Uniform(FontName::new("Inter", "Semi Bold Italic"));
        assert_eq!(resolve_font_style(&italic), FontStyle::Italic);

        let regular = Mixed::Uniform(FontName::new("Inter", "Regular"));
        assert_eq!(resolve_font_style(&regular), FontStyle::Normal);

        assert_eq!(resolve_font_style(&Mixed::Mixed), FontStyle::Normal);
    }

    #[test]
    fn test_color_first_solid_fill() {
        let fills = [
            Paint::solid(Rgb::new(0.2, 0.4, 0.6), Some(0.5)),
            Paint::solid(Rgb::new(1.0, 1.0, 1.0), None),
        ];
        let color = resolve_color(Some(Mixed::Uniform(&fills[..])));
        assert_eq!(color, Color::new(0.2, 0.4, 0.6, 0.5));
    }

    #[test]
    fn test_color_default_opacity() {
        let fills = [Paint::solid(Rgb::new(1.0, 0.0, 0.0), None)];
        let color = resolve_color(Some(Mixed::Uniform(&fills[..])));
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_fallbacks() {
        assert_eq!(resolve_color(None), Color::BLACK);
        assert_eq!(resolve_color(Some(Mixed::Mixed)), Color::BLACK);
        assert_eq!(resolve_color(Some(Mixed::Uniform(&[][..]))), Color::BLACK);

        // Only the first entry is inspected.
        let fills = [
            Paint::GradientLinear,
            Paint::solid(Rgb::new(1.0, 0.0, 0.0), None),
        ];
        assert_eq!(resolve_color(Some(Mixed::Uniform(&fills[..]))), Color::BLACK);
    }
}
