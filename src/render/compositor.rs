//! Canvas composition: colored glyph blitting over a background

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::layout::engine::LayoutResult;
use crate::render::colormap::Colormap;
use crate::render::glyphs::TextShaper;

/// How each placement picks its color from the colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorAssignment {
    /// Seeded uniform draw per placement, the classic word-cloud look
    #[default]
    Random,
    /// Sample by rank fraction, most frequent word at the top of the map
    ByRank,
}

/// Composition settings
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    /// Palette to sample word colors from
    pub colormap: Colormap,
    /// Color selection policy
    pub assignment: ColorAssignment,
    /// Canvas background color
    pub background: [u8; 3],
    /// Seed for the color stream, independent of the layout stream
    pub seed: u64,
}

/// Render an accepted layout into an RGB raster
///
/// The canvas is filled with the background color, then each placement is
/// rasterized through the shaper, rotated if placed vertically, colored,
/// and alpha-blended by glyph coverage. Identical layouts, shapers, and
/// options produce identical rasters.
pub fn compose(
    layout: &LayoutResult,
    shaper: &dyn TextShaper,
    options: &ComposeOptions,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, Rgb(options.background));
    let mut rng = StdRng::seed_from_u64(options.seed);
    let count = layout.placements.len();

    for (rank, placement) in layout.placements.iter().enumerate() {
        let fraction = match options.assignment {
            ColorAssignment::Random => rng.random::<f64>(),
            ColorAssignment::ByRank => {
                if count > 1 {
                    1.0 - rank as f64 / (count - 1) as f64
                } else {
                    1.0
                }
            }
        };
        let color = options.colormap.sample(fraction);

        let Some(sprite) = shaper.rasterize(&placement.word, placement.font_size) else {
            continue;
        };
        let sprite = if placement.rotated {
            sprite.rotated()
        } else {
            sprite
        };

        blit(&mut canvas, &sprite, placement.x, placement.y, color);
    }

    canvas
}

/// Alpha-blend a coverage sprite onto the canvas at a pixel position
fn blit(canvas: &mut RgbImage, sprite: &crate::render::glyphs::GlyphSprite, x: u32, y: u32, color: [u8; 3]) {
    let (canvas_w, canvas_h) = canvas.dimensions();

    for row in 0..sprite.height {
        let target_y = y + row;
        if target_y >= canvas_h {
            break;
        }
        for col in 0..sprite.width {
            let target_x = x + col;
            if target_x >= canvas_w {
                break;
            }
            let alpha = sprite.coverage_at(col, row) as u16;
            if alpha == 0 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(target_x, target_y);
            for channel in 0..3 {
                let fg = color.get(channel).copied().unwrap_or(0) as u16;
                let bg = pixel.0.get(channel).copied().unwrap_or(0) as u16;
                if let Some(out) = pixel.0.get_mut(channel) {
                    *out = ((fg * alpha + bg * (255 - alpha)) / 255) as u8;
                }
            }
        }
    }
}
