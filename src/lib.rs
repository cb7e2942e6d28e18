//! Procedural asset packs for the Redot engine from a single reference image
//!
//! A source image and an asset category are turned into a 3x3 tile atlas, a
//! horizontal animation sheet or a processed single sprite, then zipped
//! together with import instructions.

#![forbid(unsafe_code)]

/// Input/output adapters, session state, configuration and error handling
pub mod io;
/// Category policy: default layouts and visual variation rules
pub mod policy;
/// Render target and compositing primitives
pub mod raster;
/// Layout synthesis engine
pub mod synthesis;

pub use io::error::{PackError, Result};
