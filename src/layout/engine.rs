//! Greedy first-fit placement of sized words under a mask
//!
//! Words are attempted strictly in descending font-size order, ties in rank
//! order, so the most frequent words claim space first. Each word walks a
//! seeded, center-jittered spiral looking for a position whose padded glyph
//! box lies inside the canvas, covers only mask-available cells, and
//! overlaps no previously claimed cell. A word that exhausts its search
//! budget shrinks and retries; below the minimum font size it is rejected,
//! which is counted but never fatal.
//!
//! Every stochastic choice draws from one `StdRng` seeded by the
//! configuration, in a fixed order per word, so identical inputs reproduce
//! bit-identical layouts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::config::{
    FONT_SHRINK_FACTOR, SEARCH_BUDGET_MAX, SEARCH_BUDGET_MIN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::mask::Mask;
use crate::layout::occupancy::OccupancyBitmap;
use crate::layout::spiral::SpiralIter;
use crate::render::glyphs::TextShaper;
use crate::text::sizing::SizedWord;

/// Engine parameters beyond the word list and mask
#[derive(Debug, Clone, Copy)]
pub struct EngineParams {
    /// Smallest font size a word may shrink to before rejection
    pub min_font_size: u32,
    /// Probability of keeping a word horizontal, within [0, 1]
    pub prefer_horizontal: f64,
    /// Pixels of clearance reserved around each glyph box
    pub padding: u32,
    /// Seed for all stochastic choices
    pub seed: u64,
}

/// One accepted word position
///
/// Immutable after acceptance. `x`/`y` locate the top-left corner of the
/// unpadded glyph box; color is assigned later by the compositor.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The placed word
    pub word: String,
    /// Weight the word carried into ranking
    pub weight: f64,
    /// Accepted font size in pixels
    pub font_size: u32,
    /// Horizontal pixel position of the glyph box
    pub x: u32,
    /// Vertical pixel position of the glyph box
    pub y: u32,
    /// Whether the word is rotated 90 degrees (vertical)
    pub rotated: bool,
}

/// Output of one completed layout run
#[derive(Debug, Clone)]
pub struct LayoutResult {
    /// Accepted placements in acceptance (rank) order
    pub placements: Vec<Placement>,
    /// Final occupancy state of the canvas
    pub occupancy: OccupancyBitmap,
    /// Count of words rejected for lack of space
    pub rejected: usize,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// Greedy spiral-search placement engine
///
/// Owns a private occupancy bitmap and mask snapshot for the duration of
/// one run; nothing is shared between runs except the seed value itself.
/// `step` places a single word, so callers can drive progress reporting or
/// abort between words.
pub struct PlacementEngine {
    words: Vec<SizedWord>,
    next_word: usize,
    mask: Mask,
    occupancy: OccupancyBitmap,
    rng: StdRng,
    placements: Vec<Placement>,
    rejected: usize,
    size_cap: u32,
    params: EngineParams,
}

impl PlacementEngine {
    /// Create an engine over sized words and a resolved mask
    ///
    /// The word list is re-sorted by font size descending (stable, so equal
    /// sizes keep rank order); sizes produced by the scaler are already
    /// non-increasing, making this a no-op in the normal pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if `prefer_horizontal` is outside [0, 1] or
    /// `min_font_size` is zero.
    pub fn new(mut words: Vec<SizedWord>, mask: Mask, params: EngineParams) -> Result<Self> {
        if !(0.0..=1.0).contains(&params.prefer_horizontal) {
            return Err(invalid_parameter(
                "prefer_horizontal",
                &params.prefer_horizontal,
                &"must be within [0, 1]",
            ));
        }
        if params.min_font_size == 0 {
            return Err(invalid_parameter(
                "min_font_size",
                &params.min_font_size,
                &"must be at least 1",
            ));
        }

        words.sort_by(|a, b| b.font_size.cmp(&a.font_size));

        let occupancy = OccupancyBitmap::new(mask.width(), mask.height());
        let capacity = words.len();

        Ok(Self {
            words,
            next_word: 0,
            mask,
            occupancy,
            rng: StdRng::seed_from_u64(params.seed),
            placements: Vec::with_capacity(capacity),
            rejected: 0,
            size_cap: u32::MAX,
            params,
        })
    }

    /// Total number of words this run will attempt
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of words attempted so far
    pub const fn attempted(&self) -> usize {
        self.next_word
    }

    /// Attempt to place the next word
    ///
    /// Returns `true` while words remain after this attempt. Rejection of
    /// the current word still counts as a completed step.
    pub fn step(&mut self, shaper: &dyn TextShaper) -> bool {
        if let Some(word) = self.words.get(self.next_word).cloned() {
            self.next_word += 1;
            self.place_word(&word, shaper);
        }
        self.next_word < self.words.len()
    }

    /// Run all remaining words and return the layout
    pub fn run(mut self, shaper: &dyn TextShaper) -> LayoutResult {
        while self.step(shaper) {}
        self.finish()
    }

    /// Consume the engine into its result
    pub fn finish(self) -> LayoutResult {
        LayoutResult {
            placements: self.placements,
            rejected: self.rejected,
            width: self.occupancy.width(),
            height: self.occupancy.height(),
            occupancy: self.occupancy,
        }
    }

    /// State machine for one word: Sizing, then Searching with shrink-on-failure
    fn place_word(&mut self, word: &SizedWord, shaper: &dyn TextShaper) {
        // Fixed draw order per word keeps the sequence reproducible:
        // orientation, winding, then one jitter pair per size attempt.
        let rotated = self.rng.random::<f64>() >= self.params.prefer_horizontal;
        let clockwise = self.rng.random::<f64>() < 0.5;

        let mut size = word.font_size.min(self.size_cap);

        while size >= self.params.min_font_size {
            let Some(bbox) = shaper.measure(&word.entry.word, size) else {
                // Nothing to render at any size
                self.rejected += 1;
                return;
            };

            let (box_w, box_h) = if rotated {
                (bbox.height, bbox.width)
            } else {
                (bbox.width, bbox.height)
            };
            let padded_w = box_w + 2 * self.params.padding;
            let padded_h = box_h + 2 * self.params.padding;

            if let Some((x, y)) = self.search_position(padded_w, padded_h, clockwise) {
                self.occupancy.claim_region(x, y, padded_w, padded_h);
                self.placements.push(Placement {
                    word: word.entry.word.clone(),
                    weight: word.entry.weight,
                    font_size: size,
                    x: x + self.params.padding,
                    y: y + self.params.padding,
                    rotated,
                });
                self.size_cap = size;
                return;
            }

            size = shrink(size);
        }

        self.rejected += 1;
    }

    /// Spiral search for a free, mask-available box position
    fn search_position(&mut self, box_w: u32, box_h: u32, clockwise: bool) -> Option<(u32, u32)> {
        let width = self.occupancy.width();
        let height = self.occupancy.height();

        if box_w > width || box_h > height {
            return None;
        }

        // Start near the canvas center with a seeded jitter of up to a
        // quarter of each dimension, then spiral outward.
        let jitter_x = (width / 4) as i64;
        let jitter_y = (height / 4) as i64;
        let origin_x =
            (width as i64 - box_w as i64) / 2 + self.rng.random_range(-jitter_x..=jitter_x);
        let origin_y =
            (height as i64 - box_h as i64) / 2 + self.rng.random_range(-jitter_y..=jitter_y);

        let budget = ((width as usize * height as usize)
            / (box_w as usize * box_h as usize).max(1))
        .clamp(SEARCH_BUDGET_MIN, SEARCH_BUDGET_MAX);

        let origin = std::iter::once((0, 0));
        let spiral = SpiralIter::new(width, height, clockwise);

        for (dx, dy) in origin.chain(spiral).take(budget) {
            let x = origin_x + dx;
            let y = origin_y + dy;
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if x + box_w > width || y + box_h > height {
                continue;
            }
            if self.mask.region_available(x, y, box_w, box_h)
                && self.occupancy.region_free(x, y, box_w, box_h)
            {
                return Some((x, y));
            }
        }

        None
    }
}

/// Shrink a font size by the configured factor, always by at least one pixel
fn shrink(size: u32) -> u32 {
    let scaled = ((size as f32) * FONT_SHRINK_FACTOR).floor() as u32;
    scaled.min(size.saturating_sub(1))
}
