//! Layout synthesis engine
//!
//! Maps a source image, category and layout to a rendered output raster.

/// Run inputs and outputs
pub mod request;
/// Atlas, sheet and single procedures
pub mod synthesizer;

pub use request::{GenerationRequest, GenerationResult, OutputRaster, SourceImage};
pub use synthesizer::{LayoutSynthesizer, synthesize};
