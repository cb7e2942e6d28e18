//! Raster surface and compositing primitives
//!
//! This module contains:
//! - Fill colours and the source-over / source-atop operators
//! - The render target the synthesizer draws into

/// Colours and compositing operators
pub mod color;
/// Drawing surface
pub mod target;

pub use color::{Color, CompositeMode};
pub use target::{RenderTarget, scaled_to};
