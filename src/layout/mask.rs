//! Silhouette mask resolution from grayscale image bytes
//!
//! A mask marks which canvas cells glyphs may occupy. The convention follows
//! the classic word-cloud treatment of grayscale masks: full-white pixels
//! (intensity 255) are masked out, every darker pixel is available. A run
//! without a mask image uses an all-available mask.

use bitvec::prelude::{BitVec, bitvec};
use image::imageops::FilterType;

use crate::io::config::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_mask, invalid_parameter};

/// Intensity at and above which a mask pixel is considered masked out
const BLOCKED_INTENSITY: u8 = 255;

/// Boolean availability grid for one canvas
///
/// Row-major; `true` means the cell is available for placement.
#[derive(Debug, Clone)]
pub struct Mask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl Mask {
    /// Create an all-available mask of the given canvas size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the maximum
    /// canvas dimension.
    pub fn open(width: u32, height: u32) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            bits: bitvec![1; (width * height) as usize],
            width,
            height,
        })
    }

    /// Decode a grayscale mask image and threshold it to an availability grid
    ///
    /// The image is converted to single-channel intensity and resized exactly
    /// to the requested canvas size with nearest-neighbor sampling, so shape
    /// edges stay hard.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the requested dimensions are degenerate
    /// - the bytes cannot be decoded as an image
    /// - the decoded image is zero-sized
    pub fn from_image_bytes(bytes: &[u8], width: u32, height: u32) -> Result<Self> {
        validate_dimensions(width, height)?;

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| invalid_mask(&format!("failed to decode: {e}")))?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(invalid_mask(&"decoded image has a zero dimension"));
        }

        let gray = decoded.to_luma8();
        let resized = image::imageops::resize(&gray, width, height, FilterType::Nearest);

        let mut bits = bitvec![0; (width * height) as usize];
        for (x, y, pixel) in resized.enumerate_pixels() {
            let available = pixel.0.first().copied().unwrap_or(BLOCKED_INTENSITY)
                < BLOCKED_INTENSITY;
            bits.set((y * width + x) as usize, available);
        }

        Ok(Self {
            bits,
            width,
            height,
        })
    }

    /// Mask width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Test whether a single cell is available
    ///
    /// Out-of-bounds cells are reported as unavailable.
    pub fn is_available(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits
            .get((y * self.width + x) as usize)
            .as_deref()
            .copied()
            .unwrap_or(false)
    }

    /// Test whether every cell of an axis-aligned box is available
    ///
    /// A box extending past the mask bounds is unavailable.
    pub fn region_available(&self, x: u32, y: u32, box_width: u32, box_height: u32) -> bool {
        if x.saturating_add(box_width) > self.width || y.saturating_add(box_height) > self.height {
            return false;
        }
        for row in y..y + box_height {
            let start = (row * self.width + x) as usize;
            let end = start + box_width as usize;
            match self.bits.get(start..end) {
                Some(slice) if slice.all() => {}
                _ => return false,
            }
        }
        true
    }

    /// Count of available cells
    pub fn available_count(&self) -> usize {
        self.bits.count_ones()
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "canvas_size",
            &format!("{width}x{height}"),
            &"both dimensions must be at least 1",
        ));
    }
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(invalid_parameter(
            "canvas_size",
            &format!("{width}x{height}"),
            &format!("dimensions must not exceed {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(())
}
