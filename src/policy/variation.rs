//! Category policy table: default layout and visual variation per category

use crate::policy::category::Category;
use crate::policy::layout::LayoutKind;

/// Category-specific modification drawn over the base layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariationRule {
    /// Darken atlas cells whose row + column is even
    CheckerboardShade,
    /// Descending white band in every sheet frame
    WaveBand,
    /// Translucent green band along the bottom edge, masked to opaque pixels
    MossBand,
    /// Base layout only
    None,
}

impl VariationRule {
    /// Layout whose procedure draws this rule, if any
    ///
    /// Each rule is tied to one procedure; under any other layout it draws nothing.
    pub const fn applies_to(self) -> Option<LayoutKind> {
        match self {
            Self::CheckerboardShade => Some(LayoutKind::Atlas),
            Self::WaveBand => Some(LayoutKind::Sheet),
            Self::MossBand => Some(LayoutKind::Single),
            Self::None => None,
        }
    }

    /// This rule if `layout` draws it, otherwise [`VariationRule::None`]
    pub fn within(self, layout: LayoutKind) -> Self {
        if self.applies_to() == Some(layout) {
            self
        } else {
            Self::None
        }
    }
}

/// Layout selected when the category is chosen
pub const fn default_layout_for(category: Category) -> LayoutKind {
    match category {
        Category::Terrain => LayoutKind::Atlas,
        Category::Structure | Category::NatureProp => LayoutKind::Single,
        Category::Liquid => LayoutKind::Sheet,
    }
}

/// Variation drawn for the category
pub const fn variation_rule_for(category: Category) -> VariationRule {
    match category {
        Category::Terrain => VariationRule::CheckerboardShade,
        Category::Structure => VariationRule::None,
        Category::Liquid => VariationRule::WaveBand,
        Category::NatureProp => VariationRule::MossBand,
    }
}
