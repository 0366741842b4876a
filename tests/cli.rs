//! Validates CLI processing error paths over real temporary files

use std::path::PathBuf;

use wordbloom::CloudError;
use wordbloom::io::cli::{Cli, CloudProcessor};
use wordbloom::io::config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_WORDS, DEFAULT_MIN_FONT_SIZE, DEFAULT_PREFER_HORIZONTAL,
    DEFAULT_RELATIVE_SCALING, DEFAULT_SEED, DEFAULT_WIDTH,
};
use wordbloom::render::{BlockShaper, Colormap};

fn cli_for(input: PathBuf, font: PathBuf) -> Cli {
    Cli {
        input,
        font,
        output: None,
        mask: None,
        seed: DEFAULT_SEED,
        max_words: DEFAULT_MAX_WORDS,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        colormap: Colormap::Viridis,
        background: "ffffff".to_string(),
        min_font_size: DEFAULT_MIN_FONT_SIZE,
        relative_scaling: DEFAULT_RELATIVE_SCALING,
        prefer_horizontal: DEFAULT_PREFER_HORIZONTAL,
        table: false,
        quiet: true,
    }
}

#[test]
fn test_successful_run_writes_png_and_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.txt");
    std::fs::write(&input, "사랑,423\n행복,389\n").unwrap();

    let mut cli = cli_for(input, dir.path().join("font.ttf"));
    cli.width = 160;
    cli.height = 160;
    cli.table = true;

    let pairs = vec![("사랑".to_string(), 423.0), ("행복".to_string(), 389.0)];
    CloudProcessor::new(cli).run_with(&pairs, &BlockShaper).unwrap();

    // Output path is derived from the input file stem
    let canvas = image::open(dir.path().join("pairs.png")).unwrap().to_rgb8();
    assert_eq!(canvas.dimensions(), (160, 160));

    let mut reader = csv::Reader::from_path(dir.path().join("pairs_frequencies.csv")).unwrap();
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(first.get(0), Some("사랑"));
    assert_eq!(first.get(1), Some("423"));
}

#[test]
fn test_explicit_output_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("cloud.png");

    let mut cli = cli_for(dir.path().join("pairs.txt"), dir.path().join("font.ttf"));
    cli.width = 120;
    cli.height = 120;
    cli.output = Some(target.clone());

    CloudProcessor::new(cli)
        .run_with(&[("word".to_string(), 3.0)], &BlockShaper)
        .unwrap();

    assert!(target.exists());
}

#[test]
fn test_missing_input_file_is_a_file_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let cli = cli_for(dir.path().join("absent.txt"), dir.path().join("font.ttf"));

    let err = CloudProcessor::new(cli).process().unwrap_err();
    assert!(matches!(err, CloudError::FileSystem { .. }));
}

#[test]
fn test_unparseable_font_is_a_font_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pairs.txt");
    let font = dir.path().join("font.ttf");
    std::fs::write(&input, "사랑,423\n행복,389\n").unwrap();
    std::fs::write(&font, b"definitely not a font").unwrap();

    let err = CloudProcessor::new(cli_for(input, font)).process().unwrap_err();
    assert!(matches!(err, CloudError::FontResource { .. }));
}
