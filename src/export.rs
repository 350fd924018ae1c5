//! Export orchestration: selection checks, raster, text pipeline, notices.
//!
//! This is the `export-ats-pdf` command: take the first selected node,
//! rasterize it, extract its text runs, label them and put them in reading
//! order.

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, FontLoader, TreeWalker};
use crate::layout::{order_blocks_with, LayoutOptions, SectionClassifier};
use crate::model::{ClassifiedBlock, ExportPayload, NodeView};
use crate::raster::{RasterExporter, DEFAULT_EXPORT_SCALE};

/// Options for an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Raster scale relative to the frame's logical size
    pub scale: f32,

    /// Extraction options
    pub extract: ExtractOptions,

    /// Classification and ordering thresholds
    pub layout: LayoutOptions,
}

impl ExportOptions {
    /// Create export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raster scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set layout thresholds.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout = options;
        self
    }

    /// Abort on the first text run that fails to resolve.
    pub fn strict(mut self) -> Self {
        self.extract = self.extract.strict();
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_EXPORT_SCALE,
            extract: ExtractOptions::default(),
            layout: LayoutOptions::default(),
        }
    }
}

/// A short user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Export started
    Exporting,
    /// Export finished
    Exported {
        /// Number of text blocks extracted
        blocks: usize,
    },
    /// Nothing was selected
    NoSelection,
    /// The selected node cannot be rasterized
    UnexportableNode,
    /// Any other failure
    ExportFailed,
}

impl Notice {
    /// Map an export error to its notice.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::NoSelection => Notice::NoSelection,
            Error::UnexportableNode(_) => Notice::UnexportableNode,
            _ => Notice::ExportFailed,
        }
    }

    /// Check if the notice reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::NoSelection | Notice::UnexportableNode | Notice::ExportFailed
        )
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Exporting => f.write_str("Exporting..."),
            Notice::Exported { blocks } => {
                write!(f, "Frame exported ({} texts extracted)", blocks)
            }
            Notice::NoSelection => f.write_str("Please select a Frame"),
            Notice::UnexportableNode => f.write_str("This node type cannot be exported"),
            Notice::ExportFailed => f.write_str("Export error"),
        }
    }
}

/// Receives user-facing notices.
pub trait Notifier {
    /// Surface a notice to the user.
    fn notify(&mut self, notice: &Notice);
}

impl<F: FnMut(&Notice)> Notifier for F {
    fn notify(&mut self, notice: &Notice) {
        self(notice)
    }
}

/// Notifier that writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        if notice.is_error() {
            log::warn!("{}", notice);
        } else {
            log::info!("{}", notice);
        }
    }
}

/// Runs the extraction pipeline and builds export payloads.
///
/// # Example
///
/// ```
/// use unframe::export::Exporter;
/// use unframe::scene::{SceneDocument, SceneNode};
///
/// # tokio_test_block_on(async {
/// let mut doc = SceneDocument::new("CV");
/// doc.add_node(SceneNode::frame(vec![
///     SceneNode::text("Jane Doe").at(40.0, 40.0).with_font(28.0, 700.0),
/// ]));
///
/// let mut fonts = doc.font_loader();
/// let blocks = Exporter::new().text_blocks(&doc.nodes, &mut fonts).await?;
/// assert_eq!(blocks[0].section_type.label(), "HEADER");
/// # Ok::<(), unframe::Error>(())
/// # }).unwrap();
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
    options: ExportOptions,
    classifier: SectionClassifier,
}

impl Exporter {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    /// Create an exporter with custom options.
    pub fn with_options(options: ExportOptions) -> Self {
        let classifier = SectionClassifier::with_options(options.layout.clone());
        Self {
            options,
            classifier,
        }
    }

    /// The options in use.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Extract, classify and order the text beneath `roots`.
    pub async fn text_blocks<N, L>(&self, roots: &[N], fonts: &mut L) -> Result<Vec<ClassifiedBlock>>
    where
        N: NodeView,
        L: FontLoader,
    {
        let mut walker = TreeWalker::with_options(fonts, self.options.extract.clone());
        let runs = walker.extract(roots).await?;
        if walker.skipped() > 0 {
            log::warn!("{} text runs could not be resolved", walker.skipped());
        }

        let blocks = self.classifier.classify_runs(runs);
        Ok(order_blocks_with(blocks, &self.options.layout))
    }

    /// Export the first selected node.
    pub async fn export<N, R, L>(
        &self,
        selection: &[&N],
        raster: &R,
        fonts: &mut L,
    ) -> Result<ExportPayload>
    where
        N: NodeView,
        R: RasterExporter<N>,
        L: FontLoader,
    {
        let node = select(selection)?;
        self.export_node(node, raster, fonts).await
    }

    /// Export the first selected node, reporting progress to `notifier`.
    ///
    /// Every outcome produces exactly one terminal notice; failures are also
    /// returned to the caller.
    pub async fn run<N, R, L, T>(
        &self,
        selection: &[&N],
        raster: &R,
        fonts: &mut L,
        notifier: &mut T,
    ) -> Result<ExportPayload>
    where
        N: NodeView,
        R: RasterExporter<N>,
        L: FontLoader,
        T: Notifier,
    {
        let node = match select(selection) {
            Ok(node) => node,
            Err(e) => {
                notifier.notify(&Notice::from_error(&e));
                return Err(e);
            }
        };

        notifier.notify(&Notice::Exporting);
        match self.export_node(node, raster, fonts).await {
            Ok(payload) => {
                notifier.notify(&Notice::Exported {
                    blocks: payload.block_count(),
                });
                Ok(payload)
            }
            Err(e) => {
                log::error!("Export error: {}", e);
                notifier.notify(&Notice::ExportFailed);
                Err(e)
            }
        }
    }

    async fn export_node<N, R, L>(&self, node: &N, raster: &R, fonts: &mut L) -> Result<ExportPayload>
    where
        N: NodeView,
        R: RasterExporter<N>,
        L: FontLoader,
    {
        let image = raster.export_png(node, self.options.scale).await?;
        let text_blocks = self.text_blocks(std::slice::from_ref(node), fonts).await?;
        let (frame_width, frame_height) = node.size();

        log::debug!(
            "Exported \"{}\" ({}x{}) with {} text blocks",
            node.name(),
            frame_width,
            frame_height,
            text_blocks.len()
        );

        Ok(ExportPayload {
            png_bytes: image.bytes,
            frame_width,
            frame_height,
            text_blocks,
        })
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// First selected node, if it can be rasterized.
fn select<'n, N: NodeView>(selection: &[&'n N]) -> Result<&'n N> {
    let node = *selection.first().ok_or(Error::NoSelection)?;
    if !node.is_exportable() {
        return Err(Error::UnexportableNode(node.name().to_string()));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::{RecordingFonts, TestNode};
    use crate::model::{Color, FontName, FontStyle, Paint, Rgb, SectionType};
    use crate::raster::{png_header, PreRenderedPng, RasterImage};
    use crate::scene::{SceneFonts, SceneNode};

    struct FailingRaster;

    impl<N: NodeView> RasterExporter<N> for FailingRaster {
        async fn export_png(&self, _node: &N, _scale: f32) -> Result<RasterImage> {
            Err(Error::Raster("renderer crashed".to_string()))
        }
    }

    fn cv_frame() -> SceneNode {
        SceneNode::frame(vec![
            SceneNode::text("Rust, Tokio, Serde").at(40.0, 200.0),
            SceneNode::text("Compétences")
                .at(40.0, 170.0)
                .with_font(16.0, 700.0),
            SceneNode::text("Jane Doe").at(40.0, 40.0).with_font(28.0, 700.0),
            SceneNode::text("jane@example.com").at(300.0, 43.0),
        ])
        .with_size(595.0, 842.0)
    }

    #[tokio::test]
    async fn test_export_payload() {
        let frame = cv_frame();
        let raster = PreRenderedPng::from_bytes(png_header(1190, 1684)).unwrap();
        let mut fonts = SceneFonts::all_available();

        let payload = Exporter::new()
            .export(&[&frame], &raster, &mut fonts)
            .await
            .unwrap();

        assert_eq!(payload.png_bytes, png_header(1190, 1684));
        assert_eq!((payload.frame_width, payload.frame_height), (595.0, 842.0));

        let texts: Vec<&str> = payload.text_blocks.iter().map(|b| b.text()).collect();
        assert_eq!(
            texts,
            ["Jane Doe", "jane@example.com", "Compétences", "Rust, Tokio, Serde"]
        );

        let labels: Vec<SectionType> = payload
            .text_blocks
            .iter()
            .map(|b| b.section_type)
            .collect();
        assert_eq!(
            labels,
            [
                SectionType::Header,
                SectionType::Content,
                SectionType::Skills,
                SectionType::Content
            ]
        );
    }

    #[tokio::test]
    async fn test_export_requires_selection() {
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let mut fonts = SceneFonts::all_available();

        let result = Exporter::new()
            .export::<SceneNode, _, _>(&[], &raster, &mut fonts)
            .await;
        assert!(matches!(result, Err(Error::NoSelection)));
    }

    #[tokio::test]
    async fn test_export_rejects_unexportable() {
        let page = SceneNode::new("PAGE");
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let mut fonts = SceneFonts::all_available();

        let result = Exporter::new().export(&[&page], &raster, &mut fonts).await;
        assert!(matches!(result, Err(Error::UnexportableNode(_))));
    }

    #[tokio::test]
    async fn test_only_first_selected_node_is_exported() {
        let first = SceneNode::frame(vec![SceneNode::text("first")]);
        let second = SceneNode::frame(vec![SceneNode::text("second")]);
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let mut fonts = SceneFonts::all_available();

        let payload = Exporter::new()
            .export(&[&first, &second], &raster, &mut fonts)
            .await
            .unwrap();
        assert_eq!(payload.block_count(), 1);
        assert_eq!(payload.text_blocks[0].text(), "first");
    }

    #[tokio::test]
    async fn test_run_reports_success() {
        let frame = cv_frame();
        let raster = PreRenderedPng::from_bytes(png_header(1190, 1684)).unwrap();
        let mut fonts = SceneFonts::all_available();
        let mut notices = Vec::new();

        let payload = Exporter::new()
            .run(&[&frame], &raster, &mut fonts, &mut |n: &Notice| {
                notices.push(n.to_string())
            })
            .await
            .unwrap();

        assert_eq!(payload.block_count(), 4);
        assert_eq!(
            notices,
            ["Exporting...", "Frame exported (4 texts extracted)"]
        );
    }

    #[tokio::test]
    async fn test_run_reports_each_failure_distinctly() {
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let page = SceneNode::new("PAGE");
        let frame = cv_frame();
        let mut notices: Vec<Notice> = Vec::new();
        let mut fonts = SceneFonts::all_available();
        let exporter = Exporter::new();

        let mut record = |n: &Notice| notices.push(n.clone());
        let _ = exporter
            .run::<SceneNode, _, _, _>(&[], &raster, &mut fonts, &mut record)
            .await;
        let _ = exporter
            .run(&[&page], &raster, &mut fonts, &mut record)
            .await;
        let _ = exporter
            .run(&[&frame], &FailingRaster, &mut fonts, &mut record)
            .await;

        assert_eq!(
            notices,
            [
                Notice::NoSelection,
                Notice::UnexportableNode,
                Notice::Exporting,
                Notice::ExportFailed
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_run_still_exports() {
        let frame = TestNode::container(vec![
            TestNode::text("kept", 0.0, 0.0),
            TestNode::text("lost", 0.0, 10.0).with_font("Broken", "Regular"),
        ]);
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let mut fonts = RecordingFonts::missing("Broken");
        let mut notices = Vec::new();

        let payload = Exporter::new()
            .run(&[&frame], &raster, &mut fonts, &mut |n: &Notice| {
                notices.push(n.clone())
            })
            .await
            .unwrap();

        assert_eq!(payload.block_count(), 1);
        assert_eq!(notices.last(), Some(&Notice::Exported { blocks: 1 }));
    }

    #[tokio::test]
    async fn test_strict_export_fails_on_bad_run() {
        let frame = TestNode::container(vec![
            TestNode::text("lost", 0.0, 10.0).with_font("Broken", "Regular"),
        ]);
        let raster = PreRenderedPng::from_bytes(png_header(1, 1)).unwrap();
        let mut fonts = RecordingFonts::missing("Broken");

        let result = Exporter::with_options(ExportOptions::new().strict())
            .export(&[&frame], &raster, &mut fonts)
            .await;
        assert!(matches!(result, Err(Error::FontLoad(_))));
    }

    #[tokio::test]
    async fn test_run_with_log_notifier() {
        let frame = cv_frame();
        let raster = PreRenderedPng::from_bytes(png_header(1190, 1684)).unwrap();
        let mut fonts = SceneFonts::all_available();

        let payload = Exporter::new()
            .run(&[&frame], &raster, &mut fonts, &mut LogNotifier)
            .await
            .unwrap();
        assert_eq!(payload.block_count(), 4);

        let result = Exporter::new()
            .run::<SceneNode, _, _, _>(&[], &raster, &mut fonts, &mut LogNotifier)
            .await;
        assert!(matches!(result, Err(Error::NoSelection)));
    }

    #[tokio::test]
    async fn test_text_blocks_resolve_font_and_fill() {
        let frame = SceneNode::frame(vec![SceneNode::text("Expérience")
            .with_font(18.0, 700.0)
            .with_font_name("Lora", "Bold Italic")
            .with_fills(vec![Paint::Solid {
                color: Rgb {
                    r: 0.2,
                    g: 0.4,
                    b: 0.6,
                },
                opacity: Some(0.5),
            }])]);
        let mut fonts = SceneFonts::with_available([FontName::new("Lora", "Bold Italic")]);

        let blocks = Exporter::new()
            .text_blocks(std::slice::from_ref(&frame), &mut fonts)
            .await
            .unwrap();

        let run = &blocks[0].run;
        assert_eq!(blocks[0].section_type, SectionType::Experience);
        assert_eq!(run.font_style, FontStyle::Italic);
        assert_eq!(run.color, Color::new(0.2, 0.4, 0.6, 0.5));
        assert!(fonts.is_loaded(&FontName::new("Lora", "Bold Italic")));
    }

    #[tokio::test]
    async fn test_text_blocks_empty_forest() {
        let mut fonts = SceneFonts::all_available();
        let blocks = Exporter::new()
            .text_blocks::<SceneNode, _>(&[], &mut fonts)
            .await
            .unwrap();
        assert!(blocks.is_empty());
    }
}
