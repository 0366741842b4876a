//! Command-line interface: pairs file in, PNG (and optional CSV table) out

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::generator::{CloudConfig, CloudGenerator, RunSummary};
use crate::io::config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_WORDS, DEFAULT_MIN_FONT_SIZE, DEFAULT_PREFER_HORIZONTAL,
    DEFAULT_RELATIVE_SCALING, DEFAULT_SEED, DEFAULT_WIDTH, TABLE_SUFFIX,
};
use crate::io::error::{CloudError, Result, invalid_parameter};
use crate::io::export::{encode_png, encode_table};
use crate::render::colormap::Colormap;
use crate::render::glyphs::{FontShaper, TextShaper};
use crate::text::parse::parse_pairs;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Placing words [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Parser)]
#[command(name = "wordbloom")]
#[command(
    author,
    version,
    about = "Generate a masked word-cloud image from word,count pairs"
)]
/// Command-line arguments for the word-cloud generator
pub struct Cli {
    /// Input text file with one "word,count" pair per line
    #[arg(value_name = "PAIRS_FILE")]
    pub input: PathBuf,

    /// Font file (TTF/OTF) used to render words
    #[arg(short, long, value_name = "FONT_FILE")]
    pub font: PathBuf,

    /// Output PNG path (defaults next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mask image whose non-white region receives words
    #[arg(short = 'k', long, value_name = "IMAGE")]
    pub mask: Option<PathBuf>,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of words to place
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Colormap for word colors (viridis, plasma, inferno, magma, cividis)
    #[arg(short, long, default_value = "viridis", value_parser = parse_colormap)]
    pub colormap: Colormap,

    /// Background color as a hex triplet, e.g. ffffff
    #[arg(short, long, default_value = "ffffff")]
    pub background: String,

    /// Smallest font size a word may shrink to
    #[arg(long, default_value_t = DEFAULT_MIN_FONT_SIZE)]
    pub min_font_size: u32,

    /// Blend between rank-based (0) and frequency-based (1) sizing
    #[arg(long, default_value_t = DEFAULT_RELATIVE_SCALING)]
    pub relative_scaling: f64,

    /// Probability of keeping a word horizontal
    #[arg(long, default_value_t = DEFAULT_PREFER_HORIZONTAL)]
    pub prefer_horizontal: f64,

    /// Also write the ranked frequency table as CSV
    #[arg(short, long)]
    pub table: bool,

    /// Suppress progress output and diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one generation from CLI arguments
pub struct CloudProcessor {
    cli: Cli,
}

impl CloudProcessor {
    /// Create a processor from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read input, run the pipeline, and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be read or written, the font or
    /// mask is unusable, or no valid words are found.
    // Allow print for user-facing diagnostics
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let input_text =
            std::fs::read_to_string(&self.cli.input).map_err(|e| CloudError::FileSystem {
                path: self.cli.input.clone(),
                operation: "read",
                source: e,
            })?;

        let parsed = parse_pairs(&input_text);
        if !self.cli.quiet && parsed.skipped > 0 {
            eprintln!("Skipped {} malformed input line(s)", parsed.skipped);
        }

        let shaper = FontShaper::from_file(&self.cli.font)?;
        self.run_with(&parsed.pairs, &shaper)
    }

    /// Run the pipeline over already-parsed pairs with a caller-supplied shaper
    ///
    /// Lets embedders drive generation with a font loaded from bytes (or any
    /// other `TextShaper`) while keeping the CLI's output conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask is unusable, a parameter is out of
    /// range, no valid words remain, or an output cannot be written.
    #[allow(clippy::print_stderr)]
    pub fn run_with(&self, pairs: &[(String, f64)], shaper: &dyn TextShaper) -> Result<()> {
        let mask_image = match &self.cli.mask {
            Some(path) => Some(std::fs::read(path).map_err(|e| CloudError::FileSystem {
                path: path.clone(),
                operation: "read",
                source: e,
            })?),
            None => None,
        };

        let config = CloudConfig {
            width: self.cli.width,
            height: self.cli.height,
            max_words: self.cli.max_words,
            min_font_size: self.cli.min_font_size,
            relative_scaling: self.cli.relative_scaling,
            prefer_horizontal: self.cli.prefer_horizontal,
            colormap: self.cli.colormap,
            background: parse_hex_color(&self.cli.background)?,
            mask_image,
            seed: self.cli.seed,
            ..CloudConfig::default()
        };

        let generator = CloudGenerator::new(config);
        let mut prepared = generator.prepare(pairs)?;

        let bar = self.cli.should_show_progress().then(|| {
            let bar = ProgressBar::new(prepared.engine.word_count() as u64);
            bar.set_style(PLACEMENT_STYLE.clone());
            bar
        });

        loop {
            let remaining = prepared.engine.step(shaper);
            if let Some(ref bar) = bar {
                bar.set_position(prepared.engine.attempted() as u64);
            }
            if !remaining {
                break;
            }
        }
        if let Some(ref bar) = bar {
            bar.finish();
        }

        let layout = prepared.engine.finish();
        let summary = RunSummary {
            placed: layout.placements.len(),
            rejected: layout.rejected,
            dropped_inputs: prepared.ranking.dropped,
        };
        let canvas = generator.compose(&layout, shaper);

        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.cli.input));
        write_bytes(&output_path, &encode_png(&canvas)?)?;

        if self.cli.table {
            let table_path = derive_table_path(&output_path);
            write_bytes(&table_path, &encode_table(&prepared.ranking.entries)?)?;
        }

        if !self.cli.quiet {
            eprintln!(
                "Placed {} word(s), rejected {}, dropped {} input(s) -> {}",
                summary.placed,
                summary.rejected,
                summary.dropped_inputs,
                output_path.display()
            );
        }

        Ok(())
    }
}

fn parse_colormap(value: &str) -> std::result::Result<Colormap, String> {
    match value.to_ascii_lowercase().as_str() {
        "viridis" => Ok(Colormap::Viridis),
        "plasma" => Ok(Colormap::Plasma),
        "inferno" => Ok(Colormap::Inferno),
        "magma" => Ok(Colormap::Magma),
        "cividis" => Ok(Colormap::Cividis),
        other => Err(format!(
            "unknown colormap '{other}' (expected viridis, plasma, inferno, magma, or cividis)"
        )),
    }
}

/// Parse a hex color triplet with an optional leading '#'
///
/// # Errors
///
/// Returns an error if the value is not six hex digits.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let hex = value.trim_start_matches('#');
    let bad = || invalid_parameter("background", &value, &"expected six hex digits");

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let parse =
        |range: std::ops::Range<usize>| -> Result<u8> {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(bad)
        };

    Ok([parse(0..2)?, parse(2..4)?, parse(4..6)?])
}

fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!("{}.png", stem.to_string_lossy());

    input.parent().map_or_else(|| PathBuf::from(&name), |p| p.join(&name))
}

fn derive_table_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default();
    let name = format!("{}{}.csv", stem.to_string_lossy(), TABLE_SUFFIX);

    output.parent().map_or_else(|| PathBuf::from(&name), |p| p.join(&name))
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CloudError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    std::fs::write(path, bytes).map_err(|e| CloudError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
