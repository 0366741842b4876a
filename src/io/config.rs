//! Layout constants and runtime configuration defaults

// Placement search tuning
/// Minimum candidate positions tried per word and size
pub const SEARCH_BUDGET_MIN: usize = 2_048;
/// Maximum candidate positions tried per word and size
pub const SEARCH_BUDGET_MAX: usize = 65_536;

/// Multiplier applied to the font size after an exhausted search
///
/// Shrinking always removes at least one pixel so small sizes still converge.
pub const FONT_SHRINK_FACTOR: f32 = 0.95;

/// Padding in pixels reserved around each placed glyph box
pub const DEFAULT_PADDING: u32 = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum number of words kept after ranking
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 800;

/// Default smallest allowed font size in pixels
pub const DEFAULT_MIN_FONT_SIZE: u32 = 5;

/// Default blend between rank-based and frequency-based sizing
pub const DEFAULT_RELATIVE_SCALING: f64 = 0.5;

/// Default probability of keeping a word horizontal
pub const DEFAULT_PREFER_HORIZONTAL: f64 = 0.9;

/// Default canvas background color
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

// Output settings
/// Suffix added to derived table filenames
pub const TABLE_SUFFIX: &str = "_frequencies";
