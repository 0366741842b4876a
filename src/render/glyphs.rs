//! Glyph measurement and rasterization behind the `TextShaper` seam
//!
//! The layout engine only needs pixel bounding boxes and coverage bitmaps,
//! so font handling sits behind a small trait. `FontShaper` is the
//! fontdue-backed implementation used in production; `BlockShaper` is a
//! deterministic monospace stand-in for tests and benchmarks.

use std::path::Path;

use fontdue::{Font, FontSettings, LineMetrics};

use crate::io::error::{CloudError, Result, font_error};

/// Pixel bounding box of a rendered word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    /// Box width in pixels
    pub width: u32,
    /// Box height in pixels
    pub height: u32,
}

/// Rasterized word coverage, row-major with 0-255 per pixel
#[derive(Debug, Clone)]
pub struct GlyphSprite {
    /// Sprite width in pixels
    pub width: u32,
    /// Sprite height in pixels
    pub height: u32,
    /// Coverage values, `width * height` entries
    pub coverage: Vec<u8>,
}

impl GlyphSprite {
    /// Coverage at a sprite-local position, zero outside the sprite
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Produce the sprite rotated 90 degrees clockwise
    #[must_use]
    pub fn rotated(&self) -> Self {
        let width = self.height;
        let height = self.width;
        let mut coverage = vec![0u8; (width * height) as usize];

        for y in 0..height {
            for x in 0..width {
                let value = self.coverage_at(y, self.height - 1 - x);
                if let Some(cell) = coverage.get_mut((y * width + x) as usize) {
                    *cell = value;
                }
            }
        }

        Self {
            width,
            height,
            coverage,
        }
    }
}

/// Measurement and rasterization interface consumed by the layout pipeline
///
/// Implementations must be deterministic: identical `(text, px)` inputs must
/// yield identical boxes and coverage, or layout reproducibility breaks.
pub trait TextShaper {
    /// Pixel bounding box of `text` at `px` font size, horizontal orientation
    ///
    /// Returns `None` when the text renders to an empty box.
    fn measure(&self, text: &str, px: u32) -> Option<GlyphBox>;

    /// Rasterize `text` at `px` font size into a coverage sprite
    ///
    /// Returns `None` when the text renders to an empty box.
    fn rasterize(&self, text: &str, px: u32) -> Option<GlyphSprite>;
}

/// fontdue-backed shaper over a single loaded font
pub struct FontShaper {
    font: Font,
}

impl FontShaper {
    /// Load a font from raw TTF/OTF bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a parseable font.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            CloudError::FontResource {
                path: None,
                reason: reason.to_string(),
            }
        })?;
        Ok(Self { font })
    }

    /// Load a font file from disk
    ///
    /// Surfaced before layout begins so a missing font never wastes a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed as a font.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| font_error(path, &e))?;
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|reason| font_error(path, &reason))?;
        Ok(Self { font })
    }

    fn line_metrics(&self, px: f32) -> LineMetrics {
        self.font
            .horizontal_line_metrics(px)
            .unwrap_or(LineMetrics {
                ascent: px * 0.8,
                descent: px * -0.2,
                line_gap: 0.0,
                new_line_size: px,
            })
    }
}

impl TextShaper for FontShaper {
    fn measure(&self, text: &str, px: u32) -> Option<GlyphBox> {
        let px_f = px as f32;
        let total_advance: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, px_f).advance_width)
            .sum();

        let width = total_advance.ceil() as u32;
        let height = self.line_metrics(px_f).new_line_size.ceil() as u32;
        (width > 0 && height > 0).then_some(GlyphBox { width, height })
    }

    fn rasterize(&self, text: &str, px: u32) -> Option<GlyphSprite> {
        let bbox = self.measure(text, px)?;
        let px_f = px as f32;
        let metrics = self.line_metrics(px_f);

        let mut coverage = vec![0u8; (bbox.width * bbox.height) as usize];
        let mut pen_x = 0.0f32;

        for ch in text.chars() {
            let (glyph, bitmap) = self.font.rasterize(ch, px_f);
            let left = pen_x + glyph.xmin as f32;
            let top = metrics.ascent - glyph.height as f32 - glyph.ymin as f32;

            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let value = bitmap.get(row * glyph.width + col).copied().unwrap_or(0);
                    if value == 0 {
                        continue;
                    }
                    let x = (left + col as f32).round() as i64;
                    let y = (top + row as f32).round() as i64;
                    if x < 0 || y < 0 || x >= bbox.width as i64 || y >= bbox.height as i64 {
                        continue;
                    }
                    let index = (y as u32 * bbox.width + x as u32) as usize;
                    if let Some(cell) = coverage.get_mut(index) {
                        *cell = (*cell).max(value);
                    }
                }
            }

            pen_x += glyph.advance_width;
        }

        Some(GlyphSprite {
            width: bbox.width,
            height: bbox.height,
            coverage,
        })
    }
}

/// Fixed-aspect monospace shaper with solid coverage
///
/// Every character occupies a `0.6 * px` by `px` cell at full coverage,
/// making box sizes trivially predictable. Intended for tests and benches;
/// rendering with it produces solid rectangles, not glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockShaper;

impl BlockShaper {
    fn cell_width(px: u32) -> u32 {
        ((px as f32) * 0.6).round().max(1.0) as u32
    }
}

impl TextShaper for BlockShaper {
    fn measure(&self, text: &str, px: u32) -> Option<GlyphBox> {
        let chars = text.chars().count() as u32;
        (chars > 0 && px > 0).then(|| GlyphBox {
            width: chars * Self::cell_width(px),
            height: px,
        })
    }

    fn rasterize(&self, text: &str, px: u32) -> Option<GlyphSprite> {
        let bbox = self.measure(text, px)?;
        Some(GlyphSprite {
            width: bbox.width,
            height: bbox.height,
            coverage: vec![255; (bbox.width * bbox.height) as usize],
        })
    }
}
