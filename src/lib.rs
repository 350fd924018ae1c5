//! # unframe
//!
//! Text extraction and section classification for design-tool frames.
//!
//! Given a selected frame, the library walks its node tree, resolves the
//! typography of every text run, labels each run with a CV section
//! (`HEADER`, `EXPERIENCE`, `SKILLS`, ...) and sorts the runs into reading
//! order. The result is bundled with a raster snapshot of the frame so a
//! downstream PDF builder can overlay an invisible, ATS-readable text layer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unframe::{render, scene::SceneDocument};
//!
//! # async fn run() -> unframe::Result<()> {
//! let doc = SceneDocument::load_file("cv.scene.json")?;
//! let mut fonts = doc.font_loader();
//!
//! let blocks = unframe::extract_blocks(&doc.nodes, &mut fonts).await;
//! let text = render::to_text(&blocks, &render::TextOptions::default())?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Host independent**: any tree implementing [`NodeView`] can be exported
//! - **Fault isolated**: one unreadable text run never aborts an export
//! - **Multilingual sections**: English and French heading keywords
//! - **Reading order**: row-banded top-to-bottom, left-to-right ordering
//! - **`blocking` feature**: synchronous wrappers over a current-thread runtime

pub mod error;
pub mod export;
pub mod extract;
pub mod layout;
pub mod model;
pub mod raster;
pub mod render;
pub mod scene;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{ExportOptions, Exporter, LogNotifier, Notice, Notifier};
pub use extract::{ErrorMode, ExtractOptions, FontLoader, PreloadedFonts, TreeWalker};
pub use layout::{LayoutOptions, SectionClassifier};
pub use model::{
    ClassifiedBlock, Color, ExportPayload, FontName, FontStyle, FontWeight, Mixed, NodeKind,
    NodeView, Paint, SectionType, TextRun,
};
pub use raster::{PreRenderedPng, RasterExporter, RasterImage};
pub use render::{JsonFormat, TextOptions};

/// Extract, classify and order all text beneath `roots`.
///
/// Runs that cannot be resolved are skipped.
///
/// # Example
///
/// ```no_run
/// use unframe::scene::SceneDocument;
///
/// # async fn run() -> unframe::Result<()> {
/// let doc = SceneDocument::load_file("cv.scene.json")?;
/// let blocks = unframe::extract_blocks(&doc.nodes, &mut doc.font_loader()).await;
/// for block in &blocks {
///     println!("{:>13} {}", block.section_type, block.text());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn extract_blocks<N, L>(roots: &[N], fonts: &mut L) -> Vec<ClassifiedBlock>
where
    N: NodeView,
    L: FontLoader,
{
    let runs = extract::extract_text_runs(roots, fonts).await;
    layout::order_blocks(layout::classify_runs(runs))
}

/// Drive a future to completion on a current-thread runtime.
///
/// Lets synchronous callers use the async pipeline.
///
/// ```
/// let blocks = unframe::block_on(async {
///     let mut fonts = unframe::PreloadedFonts;
///     unframe::extract_blocks::<unframe::scene::SceneNode, _>(&[], &mut fonts).await
/// })?;
/// assert!(blocks.is_empty());
/// # Ok::<(), unframe::Error>(())
/// ```
#[cfg(feature = "blocking")]
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    Ok(runtime.block_on(future))
}

/// Load a scene file and render the text of its selection.
///
/// Falls back to every top-level node when nothing is selected.
#[cfg(feature = "blocking")]
pub fn scene_to_text<P: AsRef<std::path::Path>>(path: P, options: &TextOptions) -> Result<String> {
    let doc = scene::SceneDocument::load_file(path)?;
    let blocks = block_on(scene_blocks(&doc))??;
    render::to_text(&blocks, options)
}

/// Load a scene file and render the ordered blocks of its selection as JSON.
#[cfg(feature = "blocking")]
pub fn scene_to_json<P: AsRef<std::path::Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = scene::SceneDocument::load_file(path)?;
    let blocks = block_on(scene_blocks(&doc))??;
    render::blocks_to_json(&blocks, format)
}

#[cfg(feature = "blocking")]
async fn scene_blocks(doc: &scene::SceneDocument) -> Result<Vec<ClassifiedBlock>> {
    let mut fonts = doc.font_loader();
    let selected = doc.selected_nodes()?;
    if selected.is_empty() {
        return Ok(extract_blocks(&doc.nodes, &mut fonts).await);
    }

    let mut blocks = Vec::new();
    for node in selected {
        blocks.extend(extract_blocks(std::slice::from_ref(node), &mut fonts).await);
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;

    fn cv() -> Vec<SceneNode> {
        vec![SceneNode::frame(vec![
            SceneNode::text("Skills").at(40.0, 300.0).with_font(16.0, 700.0),
            SceneNode::text("Jane Doe").at(40.0, 40.0).with_font(28.0, 700.0),
            SceneNode::text("Rust").at(40.0, 330.0).with_font(11.0, 400.0),
        ])
        .with_size(595.0, 842.0)]
    }

    #[tokio::test]
    async fn test_extract_blocks() {
        let mut fonts = PreloadedFonts;
        let blocks = extract_blocks(&cv(), &mut fonts).await;

        let summary: Vec<_> = blocks
            .iter()
            .map(|b| (b.text(), b.section_type, b.is_title))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Jane Doe", SectionType::Header, true),
                ("Skills", SectionType::Skills, true),
                ("Rust", SectionType::Content, false),
            ]
        );
    }

    #[tokio::test]
    async fn test_extract_blocks_empty() {
        let mut fonts = PreloadedFonts;
        assert!(extract_blocks::<SceneNode, _>(&[], &mut fonts).await.is_empty());
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_block_on() {
        let value = block_on(async { 21 * 2 }).unwrap();
        assert_eq!(value, 42);
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_scene_to_text_missing_file() {
        let result = scene_to_text("does-not-exist.json", &TextOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[cfg(feature = "blocking")]
    const SCENE: &str = r#"{
        "selection": ["1:2"],
        "nodes": [
            {
                "id": "1:2", "type": "FRAME", "width": 595, "height": 842,
                "children": [
                    {"id": "1:3", "type": "TEXT", "characters": "Skills",
                     "absoluteTransform": [[1, 0, 40], [0, 1, 300]],
                     "fontSize": 16, "fontWeight": 700},
                    {"id": "1:4", "type": "TEXT", "characters": "Jane Doe",
                     "absoluteTransform": [[1, 0, 40], [0, 1, 40]],
                     "fontSize": 28, "fontWeight": 700},
                    {"id": "1:5", "type": "TEXT", "characters": "Rust",
                     "absoluteTransform": [[1, 0, 40], [0, 1, 330]]}
                ]
            },
            {
                "id": "2:1", "type": "FRAME",
                "children": [{"id": "2:2", "type": "TEXT", "characters": "Other"}]
            }
        ]
    }"#;

    #[cfg(feature = "blocking")]
    fn write_scene(dir: &tempfile::TempDir, selected: bool) -> std::path::PathBuf {
        let mut json: serde_json::Value = serde_json::from_str(SCENE).unwrap();
        if !selected {
            json["selection"] = serde_json::json!([]);
        }
        let path = dir.path().join("cv.scene.json");
        std::fs::write(&path, json.to_string()).unwrap();
        path
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_scene_to_text_with_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scene(&dir, true);

        let text = scene_to_text(&path, &TextOptions::default()).unwrap();
        assert_eq!(text, "Jane Doe\n\nSkills\nRust");

        let labelled = scene_to_text(&path, &TextOptions::new().with_section_labels(true)).unwrap();
        assert_eq!(labelled, "[HEADER] Jane Doe\n\n[SKILLS] Skills\nRust");
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_scene_to_text_without_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scene(&dir, false);

        let text = scene_to_text(&path, &TextOptions::default()).unwrap();
        assert_eq!(text, "Other\n\nJane Doe\n\nSkills\nRust");
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_scene_to_json_with_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scene(&dir, true);

        let json = scene_to_json(&path, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let blocks: serde_json::Value = serde_json::from_str(&json).unwrap();
        let summary: Vec<_> = blocks
            .as_array()
            .unwrap()
            .iter()
            .map(|b| (b["text"].as_str().unwrap(), b["sectionType"].as_str().unwrap()))
            .collect();
        assert_eq!(
            summary,
            vec![("Jane Doe", "HEADER"), ("Skills", "SKILLS"), ("Rust", "CONTENT")]
        );
        assert_eq!(blocks[0]["isTitle"], true);
        assert_eq!(blocks[0]["fontSize"], 28.0);
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_scene_to_json_without_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scene(&dir, false);

        let json = scene_to_json(&path, JsonFormat::Pretty).unwrap();
        let blocks: serde_json::Value = serde_json::from_str(&json).unwrap();
        let texts: Vec<_> = blocks
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Other", "Jane Doe", "Skills", "Rust"]);
    }
}
