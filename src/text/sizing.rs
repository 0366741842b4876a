//! Font size scaling from rank and relative frequency
//!
//! Maps each ranked word to a target glyph size by blending a purely
//! rank-proportional law with a purely frequency-proportional law. The blend
//! weight is the `relative_scaling` parameter: 0 sizes by rank alone, 1 by
//! frequency alone.

use crate::io::error::{Result, invalid_parameter};
use crate::text::ranking::{Ranking, WordEntry};

/// A ranked word annotated with its target font size in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SizedWord {
    /// The underlying ranked entry
    pub entry: WordEntry,
    /// Target glyph size in pixels, within the configured bounds
    pub font_size: u32,
}

/// Compute target font sizes for a ranked word list
///
/// For the word at 0-based rank `i` of `n`, with `rank_frac = (n - i) / n`
/// and `freq_frac = weight / max_weight`:
///
/// `size = max * ((1 - relative_scaling) * rank_frac + relative_scaling * freq_frac)`
///
/// rounded to the nearest integer and floored at `min_font_size`. The
/// computation is fully deterministic; a single-entry ranking receives
/// exactly `max_font_size`.
///
/// # Errors
///
/// Returns an error if:
/// - `relative_scaling` is outside [0, 1]
/// - `min_font_size` is zero or exceeds `max_font_size`
pub fn scale(
    ranking: &Ranking,
    min_font_size: u32,
    max_font_size: u32,
    relative_scaling: f64,
) -> Result<Vec<SizedWord>> {
    if !(0.0..=1.0).contains(&relative_scaling) {
        return Err(invalid_parameter(
            "relative_scaling",
            &relative_scaling,
            &"must be within [0, 1]",
        ));
    }
    if min_font_size == 0 {
        return Err(invalid_parameter(
            "min_font_size",
            &min_font_size,
            &"must be at least 1",
        ));
    }
    if min_font_size > max_font_size {
        return Err(invalid_parameter(
            "min_font_size",
            &min_font_size,
            &format!("must not exceed max_font_size ({max_font_size})"),
        ));
    }

    let n = ranking.len();
    let max_weight = ranking.max_weight().unwrap_or(1.0);

    let sized = ranking
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let rank_frac = (n - i) as f64 / n as f64;
            let freq_frac = if max_weight > 0.0 {
                entry.weight / max_weight
            } else {
                1.0
            };
            let blend = (1.0 - relative_scaling) * rank_frac + relative_scaling * freq_frac;
            let size = (max_font_size as f64 * blend).round() as u32;

            SizedWord {
                entry: entry.clone(),
                font_size: size.max(min_font_size),
            }
        })
        .collect();

    Ok(sized)
}
