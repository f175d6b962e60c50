//! File round trips through the `image` crate.
#![cfg(feature = "decode")]

use std::error::Error;
use std::path::Path;

use rgb::Rgb;
use tinct::{Filter, io};

fn write_png(path: &Path, w: u32, h: u32) {
    let img = image::RgbImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgb([100, 150, 200])
        } else {
            image::Rgb([0, 128, 255])
        }
    });
    img.save(path).unwrap();
}

#[test]
fn load_keeps_dimensions_and_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    write_png(&path, 5, 3);

    let bitmap = io::load(&path).unwrap();
    assert_eq!((bitmap.width(), bitmap.height()), (5, 3));
    assert_eq!(bitmap.buf()[0], Rgb::new(100, 150, 200));
    assert_eq!(bitmap.buf()[1], Rgb::new(0, 128, 255));
}

#[test]
fn load_filtered_applies_the_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    write_png(&path, 4, 4);

    let toned = io::load_filtered(&path, Filter::Sepia).unwrap();
    assert_eq!((toned.width(), toned.height()), (4, 4));
    assert_eq!(toned.buf()[0], Rgb::new(192, 171, 133));

    let gray = io::load_filtered(&path, Filter::Grayscale).unwrap();
    // 0.72 * 128 + 0.07 * 255 = 110.01
    assert_eq!(gray.buf()[1], Rgb::new(110, 110, 110));
}

#[test]
fn save_then_load_is_lossless_for_png() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.png");
    let dst = dir.path().join("out.png");
    write_png(&src, 7, 2);

    let inverted = io::load_filtered(&src, Filter::Invert).unwrap();
    io::save(&dst, inverted.as_ref()).unwrap();

    let reloaded = io::load(&dst).unwrap();
    assert_eq!(reloaded.buf(), inverted.buf());
    assert_eq!(reloaded.buf()[0], Rgb::new(155, 105, 55));
}

#[test]
fn corrupt_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

    let err = io::load(&path).unwrap_err();
    assert!(err.origin().ends_with("broken.png"));
    assert!(err.source().is_some());
    assert!(io::load_filtered(&path, Filter::Invert).is_err());
}

#[test]
fn decode_from_memory() {
    let mut encoded = Vec::new();
    image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]))
        .write_to(&mut std::io::Cursor::new(&mut encoded), image::ImageFormat::Png)
        .unwrap();

    let bitmap = io::decode(&encoded).unwrap();
    assert!(bitmap.pixels().all(|p| p == Rgb::new(10, 20, 30)));
}
