//! Layout constants and runtime configuration defaults

// Layout geometry shared by atlas and sheet
/// Edge length of one atlas cell or sheet frame in pixels
pub const TILE_SIZE: u32 = 64;
/// Number of rows and columns in the atlas grid
pub const ATLAS_GRID: u32 = 3;
/// Number of horizontal frames in an animation sheet
pub const SHEET_FRAMES: u32 = 4;

// Terrain checkerboard
/// Opacity of the black shade over even atlas cells
pub const CHECKERBOARD_ALPHA: f32 = 0.1;

// Sheet brightening and liquid wave
/// Whitening opacity added per frame index
pub const FRAME_BRIGHTEN_STEP: f32 = 0.15;
/// Vertical offset of the wave band in the first frame
pub const WAVE_BAND_OFFSET: u32 = 10;
/// Downward shift of the wave band per frame
pub const WAVE_BAND_STEP: u32 = 5;
/// Height of the wave band in pixels
pub const WAVE_BAND_HEIGHT: u32 = 5;
/// Opacity of the white wave band
///
/// Fixed rather than following the frame's whitening opacity, which is zero in
/// frame 0 and would hide the band there.
pub const WAVE_BAND_ALPHA: f32 = 0.6;

// Nature prop moss
/// Height of the moss band measured from the bottom edge
pub const MOSS_BAND_HEIGHT: u32 = 20;
/// Moss colour as RGB
pub const MOSS_RGB: [u8; 3] = [50, 200, 50];
/// Opacity of the moss band
pub const MOSS_ALPHA: f32 = 0.3;

// Packaging
/// Prefix of the archive file name
pub const ARCHIVE_PREFIX: &str = "Redot";
/// Prefix of the folder inside the archive
pub const FOLDER_PREFIX: &str = "Redot_Assets";
/// Suffix appended to the archive stem
pub const ARCHIVE_SUFFIX: &str = "_Pack";
/// Name of the import instructions file inside the archive
pub const INSTRUCTIONS_FILENAME: &str = "redot_import_info.txt";

// Processing placeholder
/// Simulated processing time a new session waits before drawing
pub const SIMULATED_PROCESSING_DELAY_MS: u64 = 800;
/// Delay used by the command line unless overridden
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 0;

// Preview output
/// Delay between frames of the sheet preview GIF
pub const PREVIEW_FRAME_DELAY_MS: u32 = 150;
/// Suffix added to preview file names
pub const PREVIEW_SUFFIX: &str = "_preview";
