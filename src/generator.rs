//! High-level orchestration from raw pairs to a rendered cloud

use image::RgbImage;

use crate::io::config::{
    DEFAULT_BACKGROUND, DEFAULT_HEIGHT, DEFAULT_MAX_WORDS, DEFAULT_MIN_FONT_SIZE,
    DEFAULT_PADDING, DEFAULT_PREFER_HORIZONTAL, DEFAULT_RELATIVE_SCALING, DEFAULT_SEED,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::layout::engine::{EngineParams, LayoutResult, PlacementEngine};
use crate::layout::mask::Mask;
use crate::render::colormap::Colormap;
use crate::render::compositor::{ColorAssignment, ComposeOptions, compose};
use crate::render::glyphs::TextShaper;
use crate::text::ranking::{Ranking, rank};
use crate::text::sizing::scale;

/// Complete configuration for one generation run
///
/// Replaces ad-hoc option plumbing with one explicit struct; the generator
/// holds no other state between invocations.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Maximum number of ranked words to attempt
    pub max_words: usize,
    /// Smallest allowed font size
    pub min_font_size: u32,
    /// Largest allowed font size; `None` derives a quarter of the canvas
    /// height. An explicit value below `min_font_size` is rejected.
    pub max_font_size: Option<u32>,
    /// Blend between rank-based (0) and frequency-based (1) sizing
    pub relative_scaling: f64,
    /// Probability of keeping a word horizontal
    pub prefer_horizontal: f64,
    /// Pixels of clearance around each placed word
    pub padding: u32,
    /// Palette for word colors
    pub colormap: Colormap,
    /// Color selection policy
    pub color_assignment: ColorAssignment,
    /// Canvas background color
    pub background: [u8; 3],
    /// Optional silhouette mask image bytes; `None` means the full canvas
    pub mask_image: Option<Vec<u8>>,
    /// Seed driving every stochastic choice in the run
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_words: DEFAULT_MAX_WORDS,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: None,
            relative_scaling: DEFAULT_RELATIVE_SCALING,
            prefer_horizontal: DEFAULT_PREFER_HORIZONTAL,
            padding: DEFAULT_PADDING,
            colormap: Colormap::default(),
            color_assignment: ColorAssignment::default(),
            background: DEFAULT_BACKGROUND,
            mask_image: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl CloudConfig {
    /// Effective maximum font size after applying the canvas-derived default
    ///
    /// An explicit `max_font_size` is returned as-is so an inconsistent
    /// configuration (below `min_font_size`) surfaces as a validation error
    /// during `prepare` instead of being silently raised. Only the derived
    /// default is floored at `min_font_size`.
    pub fn effective_max_font_size(&self) -> u32 {
        self.max_font_size
            .unwrap_or_else(|| (self.height / 4).max(1).max(self.min_font_size))
    }
}

/// Input and placement diagnostics for a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Words successfully placed
    pub placed: usize,
    /// Words rejected for lack of space
    pub rejected: usize,
    /// Input pairs dropped during ranking
    pub dropped_inputs: usize,
}

/// Everything a run produces
#[derive(Debug)]
pub struct GeneratedCloud {
    /// The rendered canvas
    pub canvas: RgbImage,
    /// The ranked word list the layout was built from
    pub ranking: Ranking,
    /// Accepted placements and final occupancy
    pub layout: LayoutResult,
    /// Run diagnostics
    pub summary: RunSummary,
}

/// A ranked, sized, masked run ready to be stepped or executed
///
/// Produced by [`CloudGenerator::prepare`] so callers can drive placement
/// word by word (progress reporting, cooperative cancellation) before
/// composing. Dropping it discards the partial layout.
pub struct PreparedRun {
    /// The placement engine, positioned before the first word
    pub engine: PlacementEngine,
    /// The ranking that fed the engine
    pub ranking: Ranking,
}

/// Stateless generator binding a configuration to the pipeline
///
/// Each call owns its occupancy bitmap, mask snapshot, and random streams;
/// concurrent generators never share mutable state.
#[derive(Debug, Clone, Default)]
pub struct CloudGenerator {
    config: CloudConfig,
}

impl CloudGenerator {
    /// Create a generator for a configuration
    pub const fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// Access the configuration
    pub const fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Rank, size, and mask the input, returning a steppable run
    ///
    /// All fatal validation happens here, before any placement work.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no valid words survive ranking
    /// - the mask image cannot be decoded or the canvas size is degenerate
    /// - a configuration parameter is out of range
    pub fn prepare<S>(&self, pairs: &[(S, f64)]) -> Result<PreparedRun>
    where
        S: AsRef<str>,
    {
        let ranking = rank(pairs, self.config.max_words)?;

        let sized = scale(
            &ranking,
            self.config.min_font_size,
            self.config.effective_max_font_size(),
            self.config.relative_scaling,
        )?;

        let mask = match &self.config.mask_image {
            Some(bytes) => Mask::from_image_bytes(bytes, self.config.width, self.config.height)?,
            None => Mask::open(self.config.width, self.config.height)?,
        };

        let engine = PlacementEngine::new(
            sized,
            mask,
            EngineParams {
                min_font_size: self.config.min_font_size,
                prefer_horizontal: self.config.prefer_horizontal,
                padding: self.config.padding,
                seed: self.config.seed,
            },
        )?;

        Ok(PreparedRun { engine, ranking })
    }

    /// Render a finished layout with the configured colors and background
    pub fn compose(&self, layout: &LayoutResult, shaper: &dyn TextShaper) -> RgbImage {
        compose(
            layout,
            shaper,
            &ComposeOptions {
                colormap: self.config.colormap,
                assignment: self.config.color_assignment,
                background: self.config.background,
                seed: self.config.seed,
            },
        )
    }

    /// Run the full pipeline: rank, place, and render
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::prepare`];
    /// placement rejections are reported in the summary, never as errors.
    pub fn generate<S>(&self, pairs: &[(S, f64)], shaper: &dyn TextShaper) -> Result<GeneratedCloud>
    where
        S: AsRef<str>,
    {
        let prepared = self.prepare(pairs)?;
        let ranking = prepared.ranking;
        let layout = prepared.engine.run(shaper);
        let canvas = self.compose(&layout, shaper);

        let summary = RunSummary {
            placed: layout.placements.len(),
            rejected: layout.rejected,
            dropped_inputs: ranking.dropped,
        };

        Ok(GeneratedCloud {
            canvas,
            ranking,
            layout,
            summary,
        })
    }
}
