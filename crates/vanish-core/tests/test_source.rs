#[allow(dead_code)]
mod common;

use std::io::Write;

use common::{jpeg_source, png_bytes};
use image::ImageFormat;
use vanish_core::consts::{JPEG_MIME, PNG_MIME};
use vanish_core::error::VanishError;
use vanish_core::source::SourceImage;

#[test]
fn test_from_bytes_sniffs_png() {
    let source = SourceImage::from_bytes(&png_bytes(64, 48)).expect("decode");
    assert_eq!(source.format(), ImageFormat::Png);
    assert_eq!((source.width(), source.height()), (64, 48));
    assert_eq!(source.payload_mime(), PNG_MIME);
}

#[test]
fn test_jpeg_family_maps_to_jpeg_mime() {
    let source = jpeg_source(64, 48);
    assert_eq!(source.format(), ImageFormat::Jpeg);
    assert_eq!(source.payload_mime(), JPEG_MIME);
}

#[test]
fn test_from_bytes_rejects_garbage() {
    let err = SourceImage::from_bytes(b"definitely not an image").unwrap_err();
    assert!(matches!(err, VanishError::Image(_)));
}

#[test]
fn test_from_path_reads_and_sniffs() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&png_bytes(32, 32)).expect("write fixture");

    let source = SourceImage::from_path(file.path()).expect("load from path");
    assert_eq!(source.format(), ImageFormat::Png);
    assert_eq!((source.width(), source.height()), (32, 32));
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let err = SourceImage::from_path(std::path::Path::new("/nonexistent/photo.png")).unwrap_err();
    assert!(matches!(err, VanishError::Io(_)));
}
