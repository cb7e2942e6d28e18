//! Generation session holding the loaded image, selections and last result
//!
//! The session is the single owner of everything the tool remembers between
//! user actions. Generating takes `&mut self`, so only one generation can be
//! in flight at a time. Dropping the future returned by [`Session::generate`]
//! before it completes cancels the run and leaves the session unchanged.

use crate::io::configuration::SIMULATED_PROCESSING_DELAY_MS;
use crate::io::error::{PackError, Result};
use crate::io::image::{decode_source_image, load_source_image};
use crate::io::package::{PackNaming, write_pack};
use crate::policy::{Category, LayoutKind, default_layout_for};
use crate::synthesis::{GenerationRequest, GenerationResult, LayoutSynthesizer, SourceImage};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// State carried across load, select, generate and package actions
#[derive(Debug)]
pub struct Session {
    source: Option<SourceImage>,
    category: Category,
    layout: LayoutKind,
    processing_delay: Duration,
    synthesizer: LayoutSynthesizer,
    last_result: Option<GenerationResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Category::Terrain)
    }
}

impl Session {
    /// Start a session with `category` selected and its default layout
    ///
    /// The processing delay starts at [`SIMULATED_PROCESSING_DELAY_MS`].
    pub fn new(category: Category) -> Self {
        Self {
            source: None,
            category,
            layout: default_layout_for(category),
            processing_delay: Duration::from_millis(SIMULATED_PROCESSING_DELAY_MS),
            synthesizer: LayoutSynthesizer::new(),
            last_result: None,
        }
    }

    /// Set the simulated processing time awaited before each synthesis
    #[must_use]
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Simulated processing time awaited before each synthesis
    pub const fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Load the reference image from a file
    ///
    /// On failure the previously loaded image, if any, stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not an image
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let image = load_source_image(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            width = image.width(),
            height = image.height(),
            "source image loaded"
        );
        self.source = Some(image);
        Ok(())
    }

    /// Load the reference image from in-memory file bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not an image
    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.source = Some(decode_source_image(bytes)?);
        Ok(())
    }

    /// Replace the reference image with already decoded pixels
    pub fn set_source(&mut self, source: SourceImage) {
        self.source = Some(source);
    }

    /// Currently loaded reference image
    pub const fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Whether a generation can be started
    pub const fn can_generate(&self) -> bool {
        self.source.is_some()
    }

    /// Select a category, resetting the layout to its default
    ///
    /// Returns the category's hint for display.
    pub fn select_category(&mut self, category: Category) -> &'static str {
        self.category = category;
        self.layout = default_layout_for(category);
        debug!(%category, layout = %self.layout, "category selected");
        category.hint()
    }

    /// Force a layout regardless of the selected category
    pub fn override_layout(&mut self, layout: LayoutKind) {
        debug!(%layout, "layout overridden");
        self.layout = layout;
    }

    /// Selected category
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Selected layout
    pub const fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Request describing the current selections
    pub fn request(&self) -> GenerationRequest<'_> {
        GenerationRequest {
            source: self.source.as_ref(),
            category: self.category,
            layout: self.layout,
        }
    }

    /// Wait out the processing delay, then synthesize the current request
    ///
    /// A failed run keeps the previous result.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NoSourceImage`] if no image has been loaded
    pub async fn generate(&mut self) -> Result<&GenerationResult> {
        if self.source.is_none() {
            return Err(PackError::NoSourceImage);
        }

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let request = GenerationRequest {
            source: self.source.as_ref(),
            category: self.category,
            layout: self.layout,
        };
        let result = self.synthesizer.synthesize(&request)?;
        info!(
            category = %result.category,
            layout = %result.layout,
            width = result.raster.width(),
            height = result.raster.height(),
            "generation finished"
        );

        Ok(&*self.last_result.insert(result))
    }

    /// Result of the most recent successful generation
    pub const fn last_result(&self) -> Option<&GenerationResult> {
        self.last_result.as_ref()
    }

    /// Write the last result as a pack archive into `output_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been generated yet or writing the archive fails
    pub fn package(&self, naming: &PackNaming, output_dir: &Path) -> Result<PathBuf> {
        let result = self
            .last_result
            .as_ref()
            .ok_or(PackError::NothingGenerated)?;
        write_pack(result, naming, output_dir)
    }
}
