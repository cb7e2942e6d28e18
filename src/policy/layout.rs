//! Output layout kinds with their export names and import instructions

use crate::io::configuration::{ATLAS_GRID, SHEET_FRAMES, TILE_SIZE};
use crate::io::error::PackError;
use std::fmt;
use std::str::FromStr;

/// Arrangement of the synthesized output raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// 3x3 grid of tiles
    Atlas,
    /// Horizontal strip of animation frames
    Sheet,
    /// The processed source at its own size
    Single,
}

impl LayoutKind {
    /// Every layout kind
    pub const ALL: [Self; 3] = [Self::Atlas, Self::Sheet, Self::Single];

    /// Identifier used on the command line
    pub const fn id(self) -> &'static str {
        match self {
            Self::Atlas => "atlas",
            Self::Sheet => "sheet",
            Self::Single => "single",
        }
    }

    /// Output dimensions `(width, height)` for a source of the given size
    pub const fn output_dimensions(self, source_width: u32, source_height: u32) -> (u32, u32) {
        match self {
            Self::Atlas => (TILE_SIZE * ATLAS_GRID, TILE_SIZE * ATLAS_GRID),
            Self::Sheet => (TILE_SIZE * SHEET_FRAMES, TILE_SIZE),
            Self::Single => (source_width, source_height),
        }
    }

    /// File name the exported image is stored under
    pub const fn suggested_filename(self) -> &'static str {
        match self {
            Self::Atlas => "terrain_tileset.png",
            Self::Sheet => "liquid_animation_sheet.png",
            Self::Single => "structure_prop.png",
        }
    }

    /// Redot import steps shipped next to the image
    pub fn instructions(self) -> String {
        match self {
            Self::Atlas => format!(
                "Redot setup:\n\
                 1. Create a TileSet.\n\
                 2. Drag this image into it.\n\
                 3. Set 'Texture Region Size' to {TILE_SIZE}x{TILE_SIZE} (or your tile size).\n\
                 4. Use Terrain Sets to paint."
            ),
            Self::Sheet => format!(
                "Redot setup:\n\
                 1. Use an AnimatedSprite2D node.\n\
                 2. In SpriteFrames, add this sheet.\n\
                 3. Set Hframes: {SHEET_FRAMES}, Vframes: 1."
            ),
            Self::Single => "Redot setup:\n\
                 1. Import as Texture2D.\n\
                 2. Use it in a Sprite2D node."
                .to_string(),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutKind {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| PackError::UnsupportedLayoutKind {
                value: s.to_string(),
            })
    }
}
