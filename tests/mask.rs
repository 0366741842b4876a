//! Validates mask resolution, thresholding, and resizing

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use wordbloom::CloudError;
use wordbloom::layout::Mask;

fn png_bytes(img: &GrayImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

#[test]
fn test_open_mask_is_fully_available() {
    let mask = Mask::open(16, 8).unwrap();
    assert_eq!(mask.width(), 16);
    assert_eq!(mask.height(), 8);
    assert_eq!(mask.available_count(), 16 * 8);
    assert!(mask.region_available(0, 0, 16, 8));
}

#[test]
fn test_white_pixels_are_masked_out() {
    let mut img = GrayImage::from_pixel(2, 2, Luma([255]));
    img.put_pixel(0, 0, Luma([0]));
    img.put_pixel(1, 1, Luma([254]));

    let mask = Mask::from_image_bytes(&png_bytes(&img), 2, 2).unwrap();

    assert!(mask.is_available(0, 0));
    assert!(mask.is_available(1, 1));
    assert!(!mask.is_available(1, 0));
    assert!(!mask.is_available(0, 1));
    assert_eq!(mask.available_count(), 2);
}

#[test]
fn test_mask_is_resized_to_canvas() {
    let img = GrayImage::from_pixel(1, 1, Luma([0]));
    let mask = Mask::from_image_bytes(&png_bytes(&img), 4, 4).unwrap();
    assert_eq!(mask.available_count(), 16);
}

#[test]
fn test_region_queries_respect_boundaries() {
    let mut img = GrayImage::from_pixel(8, 8, Luma([255]));
    for y in 2..6 {
        for x in 2..6 {
            img.put_pixel(x, y, Luma([0]));
        }
    }

    let mask = Mask::from_image_bytes(&png_bytes(&img), 8, 8).unwrap();
    assert!(mask.region_available(2, 2, 4, 4));
    assert!(!mask.region_available(1, 2, 4, 4));
    // Box spilling past the canvas edge is never available
    assert!(!mask.region_available(6, 6, 4, 4));
}

#[test]
fn test_undecodable_bytes_are_fatal() {
    let err = Mask::from_image_bytes(b"not an image", 8, 8).unwrap_err();
    assert!(matches!(err, CloudError::InvalidMaskFormat { .. }));
}

#[test]
fn test_degenerate_canvas_is_rejected() {
    assert!(matches!(
        Mask::open(0, 10).unwrap_err(),
        CloudError::InvalidParameter { .. }
    ));
    let img = GrayImage::from_pixel(2, 2, Luma([0]));
    assert!(matches!(
        Mask::from_image_bytes(&png_bytes(&img), 10, 0).unwrap_err(),
        CloudError::InvalidParameter { .. }
    ));
}
