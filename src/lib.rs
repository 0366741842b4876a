//! Deterministic word-cloud layout and rendering under a silhouette mask
//!
//! The crate ranks weighted words, scales them to font sizes, packs them
//! greedily onto a canvas constrained by a boolean mask, and renders the
//! result as a colored raster. Layouts are reproducible: identical inputs
//! and seed produce bit-identical placements.

#![forbid(unsafe_code)]

/// High-level generation pipeline and configuration
pub mod generator;
/// Input/output operations, export adapters, and error handling
pub mod io;
/// Mask resolution, occupancy tracking, and the placement engine
pub mod layout;
/// Glyph rasterization, colormaps, and canvas composition
pub mod render;
/// Pair parsing, frequency ranking, and font size scaling
pub mod text;

pub use generator::{CloudConfig, CloudGenerator, GeneratedCloud, RunSummary};
pub use io::error::{CloudError, Result};
