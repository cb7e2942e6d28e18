//! Inputs and outputs of a single synthesis run

use crate::io::error::{PackError, Result};
use crate::policy::{Category, LayoutKind, default_layout_for};
use image::RgbaImage;

/// Decoded reference image, read-only to the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap decoded pixels
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(pixels: RgbaImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(PackError::InvalidSourceData {
                reason: format!(
                    "image must be at least 1x1, got {}x{}",
                    pixels.width(),
                    pixels.height()
                ),
            });
        }
        Ok(Self { pixels })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Underlying pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Parameters of one synthesis run
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Reference image; generation fails when absent
    pub source: Option<&'a SourceImage>,
    /// Category selecting the variation rule
    pub category: Category,
    /// Layout procedure to run
    pub layout: LayoutKind,
}

impl<'a> GenerationRequest<'a> {
    /// Request with an explicit layout
    pub const fn new(source: &'a SourceImage, category: Category, layout: LayoutKind) -> Self {
        Self {
            source: Some(source),
            category,
            layout,
        }
    }

    /// Request using the category's default layout
    pub const fn with_default_layout(source: &'a SourceImage, category: Category) -> Self {
        Self::new(source, category, default_layout_for(category))
    }
}

/// Synthesized image as handed to the export adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRaster {
    pixels: RgbaImage,
}

impl OutputRaster {
    pub(crate) const fn from_pixels(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Straight-alpha RGBA pixels
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw RGBA bytes in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// Output of a successful run, ready for packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Rendered image
    pub raster: OutputRaster,
    /// File name for the image inside the pack
    pub suggested_filename: &'static str,
    /// Import steps for the pack's text file
    pub instructions_text: String,
    /// Category the raster was generated for
    pub category: Category,
    /// Layout the raster was generated with
    pub layout: LayoutKind,
}
