//! Asset categories and their textual identifiers

use crate::io::error::PackError;
use std::fmt;
use std::str::FromStr;

/// Kind of asset the reference image depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ground surfaces painted with terrain autotiling
    Terrain,
    /// Houses, walls and other standalone props
    Structure,
    /// Water, lava and other animated fluids
    Liquid,
    /// Rocks, fruit and vegetation
    NatureProp,
}

impl Category {
    /// Every category in selection order
    pub const ALL: [Self; 4] = [Self::Terrain, Self::Structure, Self::Liquid, Self::NatureProp];

    /// Identifier used on the command line and in archive names
    pub const fn id(self) -> &'static str {
        match self {
            Self::Terrain => "terrain_basic",
            Self::Structure => "structure",
            Self::Liquid => "liquid",
            Self::NatureProp => "nature_prop",
        }
    }

    /// Short note describing what generation will produce for this category
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Terrain => {
                "Terrain: a 3x3 tileset will be created for terrain autotiling in Redot."
            }
            Self::Structure => "Structure: processed as a single high quality sprite.",
            Self::Liquid => {
                "Water/Lava: a horizontal sprite sheet with animation frames will be generated."
            }
            Self::NatureProp => "Nature: optimised for fruit and rock variations.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| PackError::UnknownCategory {
                value: s.to_string(),
            })
    }
}
