//! Mutable drawing surface the synthesizer renders into

use crate::raster::color::{Color, CompositeMode, Premultiplied, premultiply, unpremultiply};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use ndarray::Array3;
use std::borrow::Cow;

/// Raster surface with image blits, flat fills and a selectable composite mode
///
/// Pixels are stored premultiplied as `(height, width, 4)` floats. Every
/// operation blends over the current contents, so issue order matters.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    pixels: Array3<f32>,
    composite_mode: CompositeMode,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget {
    /// Create an empty zero-sized surface
    pub fn new() -> Self {
        Self {
            pixels: Array3::zeros((0, 0, 4)),
            composite_mode: CompositeMode::SourceOver,
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    /// Reallocate to the given size, clearing to transparent and resetting the composite mode
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = Array3::zeros((height as usize, width as usize, 4));
        self.composite_mode = CompositeMode::SourceOver;
    }

    /// Select how subsequent draws combine with existing pixels
    pub const fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.composite_mode = mode;
    }

    /// Currently active composite mode
    pub const fn composite_mode(&self) -> CompositeMode {
        self.composite_mode
    }

    /// Draw `source` scaled into the destination rectangle
    ///
    /// The source is resampled with [`scaled_to`]. Parts of the rectangle
    /// outside the surface are clipped.
    pub fn draw_image(
        &mut self,
        source: &RgbaImage,
        dest_x: i64,
        dest_y: i64,
        dest_width: u32,
        dest_height: u32,
    ) {
        if dest_width == 0 || dest_height == 0 || source.width() == 0 || source.height() == 0 {
            return;
        }

        let scaled = scaled_to(source, dest_width, dest_height);
        for (x, y, pixel) in scaled.enumerate_pixels() {
            let target_x = dest_x + i64::from(x);
            let target_y = dest_y + i64::from(y);
            if let Some((col, row)) = self.surface_index(target_x, target_y) {
                self.blend_at(col, row, premultiply(pixel.0));
            }
        }
    }

    /// Blend a flat colour into a rectangle, clipped to the surface
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + i64::from(width)).min(i64::from(self.width()));
        let y_end = (y + i64::from(height)).min(i64::from(self.height()));
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let src = color.premultiplied();
        for row in y_start..y_end {
            for col in x_start..x_end {
                self.blend_at(col as usize, row as usize, src);
            }
        }
    }

    /// Quantised pixel at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let (col, row) = self.surface_index(i64::from(x), i64::from(y))?;
        Some(unpremultiply(self.sample(col, row)))
    }

    /// Copy the surface out as an 8-bit straight-alpha image
    pub fn snapshot(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            Rgba(unpremultiply(self.sample(x as usize, y as usize)))
        })
    }

    fn surface_index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let inside = x >= 0
            && y >= 0
            && x < i64::from(self.width())
            && y < i64::from(self.height());
        inside.then_some((x as usize, y as usize))
    }

    fn sample(&self, col: usize, row: usize) -> Premultiplied {
        let mut sample = [0.0; 4];
        for (channel, value) in sample.iter_mut().enumerate() {
            *value = self.pixels.get((row, col, channel)).copied().unwrap_or(0.0);
        }
        sample
    }

    fn blend_at(&mut self, col: usize, row: usize, src: Premultiplied) {
        let blended = self.composite_mode.blend(self.sample(col, row), src);
        for (channel, value) in blended.into_iter().enumerate() {
            if let Some(slot) = self.pixels.get_mut((row, col, channel)) {
                *slot = value;
            }
        }
    }
}

/// `source` resampled to `width` x `height` with a triangle filter
///
/// Borrows the source unchanged when it already has that size.
pub fn scaled_to(source: &RgbaImage, width: u32, height: u32) -> Cow<'_, RgbaImage> {
    if source.dimensions() == (width, height) {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(imageops::resize(source, width, height, FilterType::Triangle))
    }
}
