//! Spatial placement: masks, occupancy tracking, and the greedy engine
//!
//! This module contains the algorithmic core of the crate:
//! - Mask resolution from silhouette images
//! - Occupancy bookkeeping for claimed canvas cells
//! - Spiral candidate generation
//! - The descending-size first-fit placement engine

/// Greedy first-fit placement engine
pub mod engine;
/// Silhouette mask resolution and availability queries
pub mod mask;
/// Bitmap of canvas cells claimed by placed words
pub mod occupancy;
/// Outward spiral candidate position iterator
pub mod spiral;

pub use engine::{LayoutResult, Placement, PlacementEngine};
pub use mask::Mask;
pub use occupancy::OccupancyBitmap;
