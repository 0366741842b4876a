//! Occupancy bitmap tracking cells claimed by placed glyph boxes

use std::fmt;

use bitvec::prelude::{BitVec, bitvec};

/// Mutable boolean grid of claimed canvas cells
///
/// Owned exclusively by one placement run; cells are OR'd in as placements
/// are accepted and never cleared. Row-major, `true` = claimed.
#[derive(Debug, Clone)]
pub struct OccupancyBitmap {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl OccupancyBitmap {
    /// Create an all-free bitmap of the given canvas size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; (width * height) as usize],
            width,
            height,
        }
    }

    /// Bitmap width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Bitmap height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Test whether every cell of an axis-aligned box is still free
    ///
    /// A box extending past the bitmap bounds is not free.
    pub fn region_free(&self, x: u32, y: u32, box_width: u32, box_height: u32) -> bool {
        if x.saturating_add(box_width) > self.width || y.saturating_add(box_height) > self.height {
            return false;
        }
        for row in y..y + box_height {
            let start = (row * self.width + x) as usize;
            let end = start + box_width as usize;
            match self.bits.get(start..end) {
                Some(slice) if slice.not_any() => {}
                _ => return false,
            }
        }
        true
    }

    /// Claim every cell of an axis-aligned box
    ///
    /// Cells outside the bitmap are ignored.
    pub fn claim_region(&mut self, x: u32, y: u32, box_width: u32, box_height: u32) {
        let x_end = x.saturating_add(box_width).min(self.width);
        let y_end = y.saturating_add(box_height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.bits.set((row * self.width + col) as usize, true);
            }
        }
    }

    /// Test whether a single cell is claimed
    ///
    /// Out-of-bounds cells are reported as claimed.
    pub fn is_claimed(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.bits
            .get((y * self.width + x) as usize)
            .as_deref()
            .copied()
            .unwrap_or(true)
    }

    /// Count of claimed cells
    pub fn claimed_count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for OccupancyBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyBitmap({}x{}, {} claimed)",
            self.width,
            self.height,
            self.claimed_count()
        )
    }
}
