//! Layout synthesis: atlas, animation sheet and single sprite procedures
//!
//! Each run resizes the render target for the requested layout, draws the
//! source into every slot of that layout and then applies the category's
//! variation rule. Output depends only on the request, so identical requests
//! produce byte-identical rasters.

use crate::io::configuration::{
    ATLAS_GRID, CHECKERBOARD_ALPHA, FRAME_BRIGHTEN_STEP, MOSS_ALPHA, MOSS_BAND_HEIGHT, MOSS_RGB,
    SHEET_FRAMES, TILE_SIZE, WAVE_BAND_ALPHA, WAVE_BAND_HEIGHT, WAVE_BAND_OFFSET, WAVE_BAND_STEP,
};
use crate::io::error::{PackError, Result};
use crate::policy::{LayoutKind, VariationRule, variation_rule_for};
use crate::raster::{Color, CompositeMode, RenderTarget, scaled_to};
use crate::synthesis::request::{GenerationRequest, GenerationResult, OutputRaster, SourceImage};
use tracing::debug;

/// Runs layout procedures against a reusable render target
#[derive(Debug, Default)]
pub struct LayoutSynthesizer {
    target: RenderTarget,
}

impl LayoutSynthesizer {
    /// Create a synthesizer with an empty render target
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the request's layout and attach its export name and instructions
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NoSourceImage`] if the request carries no source image
    pub fn synthesize(&mut self, request: &GenerationRequest<'_>) -> Result<GenerationResult> {
        let source = request.source.ok_or(PackError::NoSourceImage)?;
        let rule = variation_rule_for(request.category).within(request.layout);

        let (width, height) = request
            .layout
            .output_dimensions(source.width(), source.height());
        self.target.resize(width, height);

        debug!(
            category = %request.category,
            layout = %request.layout,
            ?rule,
            width,
            height,
            "synthesizing layout"
        );

        match request.layout {
            LayoutKind::Atlas => self.draw_atlas(source, rule),
            LayoutKind::Sheet => self.draw_sheet(source, rule),
            LayoutKind::Single => self.draw_single(source, rule),
        }

        Ok(GenerationResult {
            raster: OutputRaster::from_pixels(self.target.snapshot()),
            suggested_filename: request.layout.suggested_filename(),
            instructions_text: request.layout.instructions(),
            category: request.category,
            layout: request.layout,
        })
    }

    fn draw_atlas(&mut self, source: &SourceImage, rule: VariationRule) {
        let tile = scaled_to(source.pixels(), TILE_SIZE, TILE_SIZE);
        for row in 0..ATLAS_GRID {
            for col in 0..ATLAS_GRID {
                let x = i64::from(col * TILE_SIZE);
                let y = i64::from(row * TILE_SIZE);
                self.target.draw_image(&tile, x, y, TILE_SIZE, TILE_SIZE);

                if rule == VariationRule::CheckerboardShade && (row + col) % 2 == 0 {
                    self.target.fill_rect(
                        x,
                        y,
                        TILE_SIZE,
                        TILE_SIZE,
                        Color::black(CHECKERBOARD_ALPHA),
                    );
                }
            }
        }
    }

    fn draw_sheet(&mut self, source: &SourceImage, rule: VariationRule) {
        let tile = scaled_to(source.pixels(), TILE_SIZE, TILE_SIZE);
        for frame in 0..SHEET_FRAMES {
            let x = i64::from(frame * TILE_SIZE);
            self.target.draw_image(&tile, x, 0, TILE_SIZE, TILE_SIZE);

            let brighten = Color::white(frame_brightness(frame));
            self.target.fill_rect(x, 0, TILE_SIZE, TILE_SIZE, brighten);

            if rule == VariationRule::WaveBand {
                self.target.fill_rect(
                    x,
                    i64::from(wave_band_offset(frame)),
                    TILE_SIZE,
                    WAVE_BAND_HEIGHT,
                    Color::white(WAVE_BAND_ALPHA),
                );
            }
        }
    }

    fn draw_single(&mut self, source: &SourceImage, rule: VariationRule) {
        self.target
            .draw_image(source.pixels(), 0, 0, source.width(), source.height());

        if rule == VariationRule::MossBand {
            let [r, g, b] = MOSS_RGB;
            let band_top = i64::from(source.height()) - i64::from(MOSS_BAND_HEIGHT);
            self.target.set_composite_mode(CompositeMode::SourceAtop);
            self.target.fill_rect(
                0,
                band_top,
                source.width(),
                MOSS_BAND_HEIGHT,
                Color::rgba(r, g, b, MOSS_ALPHA),
            );
            self.target.set_composite_mode(CompositeMode::SourceOver);
        }
    }
}

/// Whitening opacity applied to sheet frame `frame`
pub const fn frame_brightness(frame: u32) -> f32 {
    frame as f32 * FRAME_BRIGHTEN_STEP
}

/// Top row of the wave band inside sheet frame `frame`
///
/// Grows without bound; with four frames the band ends at row 30 of 64.
pub const fn wave_band_offset(frame: u32) -> u32 {
    WAVE_BAND_OFFSET + frame * WAVE_BAND_STEP
}

/// Synthesize a request on a fresh render target
///
/// # Errors
///
/// Returns [`PackError::NoSourceImage`] if the request carries no source image
pub fn synthesize(request: &GenerationRequest<'_>) -> Result<GenerationResult> {
    LayoutSynthesizer::new().synthesize(request)
}
