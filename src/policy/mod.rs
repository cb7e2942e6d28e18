//! Category policy: pure mappings from asset category to layout and variation
//!
//! This module contains:
//! - Asset categories and their identifiers
//! - Layout kinds with export names and import instructions
//! - The per-category default layout and variation rule table

/// Asset categories
pub mod category;
/// Output layout kinds
pub mod layout;
/// Category to layout and variation mapping
pub mod variation;

pub use category::Category;
pub use layout::LayoutKind;
pub use variation::{VariationRule, default_layout_for, variation_rule_for};
