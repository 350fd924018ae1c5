//! Raster export seam and PNG validation.
//!
//! The engine never decodes the raster: it forwards the encoded bytes and
//! only reads the PNG header to learn the pixel size.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::NodeView;

/// PNG signature bytes.
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const PNG_MAGIC_LEN: usize = 8;
/// Signature, IHDR length and type, width and height.
const PNG_HEADER_LEN: usize = PNG_MAGIC_LEN + 16;

/// Scale applied to the frame when rasterizing for export.
pub const DEFAULT_EXPORT_SCALE: f32 = 2.0;

/// PNG header information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngInfo {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

impl std::fmt::Display for PngInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PNG {}x{}", self.width, self.height)
    }
}

/// An encoded raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Encoded PNG bytes
    pub bytes: Vec<u8>,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

impl RasterImage {
    /// Wrap encoded PNG bytes, reading the size from the header.
    pub fn from_png(bytes: Vec<u8>) -> Result<Self> {
        let info = detect_png(&bytes)?;
        Ok(Self {
            bytes,
            width: info.width,
            height: info.height,
        })
    }
}

/// Produces an encoded raster of a node's rendered appearance.
#[allow(async_fn_in_trait)]
pub trait RasterExporter<N: NodeView> {
    /// Rasterize `node` at `scale` times its logical size.
    async fn export_png(&self, node: &N, scale: f32) -> Result<RasterImage>;
}

/// Read PNG dimensions from the signature and IHDR chunk.
///
/// # Returns
/// * `Ok(PngInfo)` if the data starts with a valid PNG header
/// * `Err(Error::Raster)` otherwise
pub fn detect_png(data: &[u8]) -> Result<PngInfo> {
    if data.len() < PNG_HEADER_LEN {
        return Err(Error::Raster("data too short for a PNG header".to_string()));
    }

    if !data.starts_with(PNG_MAGIC) {
        return Err(Error::Raster("missing PNG signature".to_string()));
    }

    if &data[12..16] != b"IHDR" {
        return Err(Error::Raster("first chunk is not IHDR".to_string()));
    }

    let width = read_u32_be(&data[16..20]);
    let height = read_u32_be(&data[20..24]);
    if width == 0 || height == 0 {
        return Err(Error::Raster(format!("invalid dimensions {}x{}", width, height)));
    }

    Ok(PngInfo { width, height })
}

/// Check if bytes start with a valid PNG header.
pub fn is_png_bytes(data: &[u8]) -> bool {
    detect_png(data).is_ok()
}

fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// A raster that was rendered ahead of time, e.g. by the design tool.
///
/// Exporting any node yields the same image; a size mismatch with the
/// node is logged but not rejected.
#[derive(Debug, Clone)]
pub struct PreRenderedPng {
    image: RasterImage,
}

impl PreRenderedPng {
    /// Wrap encoded PNG bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self {
            image: RasterImage::from_png(bytes)?,
        })
    }

    /// Read a PNG file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// The wrapped image.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }
}

impl<N: NodeView> RasterExporter<N> for PreRenderedPng {
    async fn export_png(&self, node: &N, scale: f32) -> Result<RasterImage> {
        let (width, height) = node.size();
        let scale = f64::from(scale);
        let expected = ((width * scale).round(), (height * scale).round());
        if expected != (f64::from(self.image.width), f64::from(self.image.height)) {
            log::warn!(
                "Raster is {}x{} but node \"{}\" at {}x scale is {}x{}",
                self.image.width,
                self.image.height,
                node.name(),
                scale,
                expected.0,
                expected.1
            );
        }
        Ok(self.image.clone())
    }
}

#[cfg(test)]
pub(crate) fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut data = PNG_MAGIC.to_vec();
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data
}
