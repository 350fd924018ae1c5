//! Error types for the unframe library.

use std::io;
use thiserror::Error;

/// Result type alias for unframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting and exporting a canvas.
#[derive(Error, Debug)]
pub enum Error {
    /// No node was selected for export.
    #[error("No node selected")]
    NoSelection,

    /// The selected node cannot be rasterized.
    #[error("Node cannot be exported: {0}")]
    UnexportableNode(String),

    /// A font required by a text node could not be made available.
    #[error("Font loading error: {0}")]
    FontLoad(String),

    /// Error resolving the attributes of a single text node.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error producing or reading the raster image.
    #[error("Raster export error: {0}")]
    Raster(String),

    /// The scene document is malformed.
    #[error("Invalid scene: {0}")]
    Scene(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
