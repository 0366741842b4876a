//! Validates the placement engine's spec-level properties: determinism,
//! ordering, non-overlap, and mask respect

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use wordbloom::layout::{Mask, Placement};
use wordbloom::render::colormap::Colormap;
use wordbloom::render::glyphs::{BlockShaper, TextShaper};
use wordbloom::{CloudConfig, CloudGenerator};

fn placement_box(placement: &Placement) -> (u32, u32, u32, u32) {
    let bbox = BlockShaper
        .measure(&placement.word, placement.font_size)
        .unwrap();
    let (w, h) = if placement.rotated {
        (bbox.height, bbox.width)
    } else {
        (bbox.width, bbox.height)
    };
    (placement.x, placement.y, w, h)
}

fn boxes_intersect(a: (u32, u32, u32, u32), b: (u32, u32, u32, u32)) -> bool {
    let (ax, ay, aw, ah) = a;
    let (bx, by, bw, bh) = b;
    ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
}

fn crowded_config() -> CloudConfig {
    CloudConfig {
        width: 160,
        height: 160,
        max_font_size: Some(64),
        min_font_size: 4,
        seed: 42,
        ..CloudConfig::default()
    }
}

fn crowded_pairs() -> Vec<(String, f64)> {
    [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet",
    ]
    .iter()
    .enumerate()
    .map(|(i, w)| ((*w).to_string(), (100 - 7 * i) as f64))
    .collect()
}

#[test]
fn test_open_roomy_canvas_places_at_least_one_word() {
    let config = CloudConfig {
        width: 400,
        height: 400,
        max_font_size: Some(40),
        ..CloudConfig::default()
    };
    let pairs = vec![
        ("alpha".to_string(), 50.0),
        ("bravo".to_string(), 40.0),
        ("charlie".to_string(), 30.0),
    ];

    let cloud = CloudGenerator::new(config)
        .generate(&pairs, &BlockShaper)
        .unwrap();
    assert!(!cloud.layout.placements.is_empty());
}

#[test]
fn test_identical_runs_are_bit_identical() {
    let generator = CloudGenerator::new(crowded_config());
    let pairs = crowded_pairs();

    let first = generator.generate(&pairs, &BlockShaper).unwrap();
    let second = generator.generate(&pairs, &BlockShaper).unwrap();

    assert_eq!(first.layout.placements, second.layout.placements);
    assert_eq!(first.layout.rejected, second.layout.rejected);
    assert_eq!(first.canvas.as_raw(), second.canvas.as_raw());
}

#[test]
fn test_accepted_font_sizes_never_increase_by_rank() {
    let cloud = CloudGenerator::new(crowded_config())
        .generate(&crowded_pairs(), &BlockShaper)
        .unwrap();

    let sizes: Vec<_> = cloud.layout.placements.iter().map(|p| p.font_size).collect();
    assert!(!sizes.is_empty());
    for pair in sizes.windows(2) {
        if let [earlier, later] = pair {
            assert!(earlier >= later, "sizes must be non-increasing: {sizes:?}");
        }
    }
}

#[test]
fn test_accepted_boxes_never_overlap() {
    let cloud = CloudGenerator::new(crowded_config())
        .generate(&crowded_pairs(), &BlockShaper)
        .unwrap();

    let boxes: Vec<_> = cloud.layout.placements.iter().map(placement_box).collect();
    for (i, a) in boxes.iter().enumerate() {
        for b in boxes.iter().skip(i + 1) {
            assert!(!boxes_intersect(*a, *b), "boxes {a:?} and {b:?} overlap");
        }
    }
}

#[test]
fn test_placements_stay_inside_the_mask() {
    // White canvas with a black 72x72 window: only the window takes words
    let mut img = GrayImage::from_pixel(128, 128, Luma([255]));
    for y in 28..100 {
        for x in 28..100 {
            img.put_pixel(x, y, Luma([0]));
        }
    }
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    let mask_bytes = buffer.into_inner();

    let config = CloudConfig {
        width: 128,
        height: 128,
        max_font_size: Some(20),
        min_font_size: 4,
        mask_image: Some(mask_bytes.clone()),
        ..CloudConfig::default()
    };

    let cloud = CloudGenerator::new(config)
        .generate(
            &[("on".to_string(), 30.0), ("in".to_string(), 20.0)],
            &BlockShaper,
        )
        .unwrap();
    assert!(!cloud.layout.placements.is_empty());

    let mask = Mask::from_image_bytes(&mask_bytes, 128, 128).unwrap();
    for placement in &cloud.layout.placements {
        let (x, y, w, h) = placement_box(placement);
        assert!(
            mask.region_available(x, y, w, h),
            "{placement:?} escapes the mask"
        );
    }
}

#[test]
fn test_too_small_mask_rejects_words_without_failing() {
    // Available window is 10x10; the smallest rendered box cannot fit
    let mut img = GrayImage::from_pixel(64, 64, Luma([255]));
    for y in 20..30 {
        for x in 20..30 {
            img.put_pixel(x, y, Luma([0]));
        }
    }
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();

    let config = CloudConfig {
        width: 64,
        height: 64,
        max_font_size: Some(32),
        min_font_size: 8,
        mask_image: Some(buffer.into_inner()),
        ..CloudConfig::default()
    };

    let pairs = vec![
        ("mountain".to_string(), 9.0),
        ("painting".to_string(), 8.0),
        ("festival".to_string(), 7.0),
    ];
    let cloud = CloudGenerator::new(config)
        .generate(&pairs, &BlockShaper)
        .unwrap();

    assert!(cloud.layout.placements.len() < pairs.len());
    assert!(cloud.summary.rejected > 0);
    assert_eq!(
        cloud.summary.placed + cloud.summary.rejected,
        cloud.ranking.len()
    );
}

#[test]
fn test_two_word_scenario_places_both_in_order() {
    let config = CloudConfig {
        width: 800,
        height: 800,
        max_words: 2,
        max_font_size: Some(96),
        seed: 42,
        ..CloudConfig::default()
    };
    let pairs = vec![("사랑".to_string(), 423.0), ("행복".to_string(), 389.0)];

    let cloud = CloudGenerator::new(config)
        .generate(&pairs, &BlockShaper)
        .unwrap();
    let placements = &cloud.layout.placements;

    assert_eq!(placements.len(), 2);
    let first = placements.first().unwrap();
    let second = placements.get(1).unwrap();
    assert_eq!(first.word, "사랑");
    assert!(first.font_size >= second.font_size);
    assert!(!boxes_intersect(placement_box(first), placement_box(second)));
}

#[test]
fn test_stepped_run_matches_one_shot_run() {
    let generator = CloudGenerator::new(crowded_config());
    let pairs = crowded_pairs();

    let mut prepared = generator.prepare(&pairs).unwrap();
    while prepared.engine.step(&BlockShaper) {}
    let stepped = prepared.engine.finish();

    let one_shot = generator.prepare(&pairs).unwrap().engine.run(&BlockShaper);

    assert_eq!(stepped.placements, one_shot.placements);
    assert_eq!(stepped.rejected, one_shot.rejected);
}

#[test]
fn test_out_of_range_prefer_horizontal_is_rejected() {
    let config = CloudConfig {
        prefer_horizontal: 1.5,
        ..CloudConfig::default()
    };
    let err = CloudGenerator::new(config)
        .generate(&[("word".to_string(), 1.0)], &BlockShaper)
        .unwrap_err();
    assert!(matches!(err, wordbloom::CloudError::InvalidParameter { .. }));
}

#[test]
fn test_explicit_max_font_below_min_is_rejected() {
    let config = CloudConfig {
        min_font_size: 10,
        max_font_size: Some(4),
        ..CloudConfig::default()
    };
    let err = CloudGenerator::new(config)
        .generate(&[("word".to_string(), 1.0)], &BlockShaper)
        .unwrap_err();
    assert!(matches!(err, wordbloom::CloudError::InvalidParameter { .. }));
}

#[test]
fn test_colormap_choice_changes_pixels_not_layout() {
    let pairs = crowded_pairs();
    let viridis = CloudGenerator::new(crowded_config())
        .generate(&pairs, &BlockShaper)
        .unwrap();
    let magma = CloudGenerator::new(CloudConfig {
        colormap: Colormap::Magma,
        ..crowded_config()
    })
    .generate(&pairs, &BlockShaper)
    .unwrap();

    assert_eq!(viridis.layout.placements, magma.layout.placements);
    assert_ne!(viridis.canvas.as_raw(), magma.canvas.as_raw());
}
