//! Rendering: glyph rasterization, colormaps, and canvas composition

/// Named palettes mapping fractions to RGB colors
pub mod colormap;
/// Colored glyph blitting over the canvas background
pub mod compositor;
/// Glyph measurement and rasterization behind the shaper seam
pub mod glyphs;

pub use colormap::Colormap;
pub use glyphs::{BlockShaper, FontShaper, TextShaper};
