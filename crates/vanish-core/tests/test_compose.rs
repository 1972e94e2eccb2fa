#[allow(dead_code)]
mod common;

use common::{gradient_image, jpeg_source, png_source};
use vanish_core::compose::{compose, encode_mask, submit_target_size};
use vanish_core::consts::{JPEG_MIME, PNG_MIME};
use vanish_core::geometry::CanvasPoint;
use vanish_core::mask::MaskLayer;
use vanish_core::stroke::StrokeEngine;

fn paint_disc(layer: &mut MaskLayer, x: f32, y: f32, brush: f32) {
    let mut engine = StrokeEngine::new();
    engine.set_brush_size(brush);
    engine.begin(layer, CanvasPoint { x, y });
    assert!(engine.finish());
}

// ---------------------------------------------------------------------------
// Target sizing
// ---------------------------------------------------------------------------

#[test]
fn test_target_size_caps_longer_side_landscape() {
    assert_eq!(submit_target_size(4000, 2000), (1024, 512));
}

#[test]
fn test_target_size_caps_longer_side_portrait() {
    assert_eq!(submit_target_size(2000, 4000), (512, 1024));
}

#[test]
fn test_target_size_rounds_shorter_side() {
    assert_eq!(submit_target_size(3000, 2000), (1024, 683));
}

#[test]
fn test_target_size_never_upscales() {
    assert_eq!(submit_target_size(800, 600), (800, 600));
    assert_eq!(submit_target_size(1024, 1024), (1024, 1024));
    assert_eq!(submit_target_size(1, 1), (1, 1));
}

#[test]
fn test_target_size_square_above_cap() {
    assert_eq!(submit_target_size(5000, 5000), (1024, 1024));
}

// ---------------------------------------------------------------------------
// Composite encoding
// ---------------------------------------------------------------------------

#[test]
fn test_compose_png_source_stays_png() {
    let source = png_source(64, 64);
    let mut mask = MaskLayer::new(64, 64).expect("mask");
    paint_disc(&mut mask, 32.0, 32.0, 10.0);

    let payload = compose(&source, &mask).expect("compose");
    assert_eq!(payload.mime, PNG_MIME);
    assert_eq!(&payload.bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
}

#[test]
fn test_compose_jpeg_source_reencodes_as_jpeg() {
    let source = jpeg_source(64, 64);
    let mut mask = MaskLayer::new(64, 64).expect("mask");
    paint_disc(&mut mask, 32.0, 32.0, 10.0);

    let payload = compose(&source, &mask).expect("compose");
    assert_eq!(payload.mime, JPEG_MIME);
    assert_eq!(&payload.bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_compose_flattens_marks_over_photo() {
    let source = png_source(200, 200);
    let mut mask = MaskLayer::new(200, 200).expect("mask");
    paint_disc(&mut mask, 100.0, 100.0, 40.0);

    let payload = compose(&source, &mask).expect("compose");
    let composite = image::load_from_memory(&payload.bytes)
        .expect("decode composite")
        .to_rgba8();

    assert_eq!(composite.dimensions(), (200, 200));
    // Painted region is solid marker red.
    assert_eq!(composite.get_pixel(100, 100).0, [255, 0, 0, 255]);
    // Unpainted region is untouched photo; PNG round-trips exactly.
    let expected = gradient_image(200, 200);
    assert_eq!(composite.get_pixel(10, 10), expected.get_pixel(10, 10));
    assert_eq!(composite.get_pixel(190, 5), expected.get_pixel(190, 5));
}

#[test]
fn test_compose_downscales_oversized_photo_and_mask_together() {
    // Photo above the cap, mask at display resolution.
    let source = png_source(2048, 1024);
    let mut mask = MaskLayer::new(512, 256).expect("mask");
    paint_disc(&mut mask, 256.0, 128.0, 40.0);

    let payload = compose(&source, &mask).expect("compose");
    let composite = image::load_from_memory(&payload.bytes)
        .expect("decode composite")
        .to_rgba8();

    assert_eq!(composite.dimensions(), (1024, 512));
    // The disc lands at the composite's center after rescaling.
    assert_eq!(composite.get_pixel(512, 256).0, [255, 0, 0, 255]);
    assert_eq!(composite.get_pixel(10, 10).0[3], 255);
}

// ---------------------------------------------------------------------------
// Bare mask encoding
// ---------------------------------------------------------------------------

#[test]
fn test_encode_mask_is_always_png() {
    let mut mask = MaskLayer::new(64, 64).expect("mask");
    paint_disc(&mut mask, 32.0, 32.0, 10.0);

    let payload = encode_mask(&mask).expect("encode");
    assert_eq!(payload.mime, PNG_MIME);
    assert_eq!(&payload.bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);

    let decoded = image::load_from_memory(&payload.bytes)
        .expect("decode mask")
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 64));
    assert_eq!(decoded.get_pixel(32, 32).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
}
