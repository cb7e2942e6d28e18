//! Image ingestion and PNG export

use crate::io::error::{PackError, Result};
use crate::synthesis::{OutputRaster, SourceImage};
use image::ImageFormat;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Load a reference image from disk
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The bytes are not a decodable image
/// - The decoded image has a zero dimension
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| PackError::FileSystem {
        path: path.to_path_buf(),
        operation: "read image",
        source: e,
    })?;
    decode_with_path(&bytes, path.to_path_buf())
}

/// Decode a reference image from in-memory file bytes
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image or the image is empty
pub fn decode_source_image(bytes: &[u8]) -> Result<SourceImage> {
    decode_with_path(bytes, PathBuf::from("<memory>"))
}

fn decode_with_path(bytes: &[u8], path: PathBuf) -> Result<SourceImage> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(source) => {
            warn!(path = %path.display(), "rejected non-image input");
            return Err(PackError::ImageDecode { path, source });
        }
    };
    SourceImage::new(decoded.to_rgba8())
}

/// Encode a synthesized raster as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(raster: &OutputRaster) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .pixels()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| PackError::ImageExport {
            path: PathBuf::from("<memory>"),
            source: e,
        })?;
    Ok(bytes)
}
