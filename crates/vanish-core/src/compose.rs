//! Builds the submission image: downscale the photo to the service cap,
//! flatten the painted mask on top, encode in the source's format family.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::consts::{JPEG_QUALITY, MAX_SUBMIT_DIMENSION, PNG_MIME};
use crate::error::Result;
use crate::mask::MaskLayer;
use crate::source::SourceImage;

/// An encoded image ready to embed in a service request.
#[derive(Clone, Debug)]
pub struct EncodedPayload {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl EncodedPayload {
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Dimensions the submission image will have: the longer side capped at
/// [`MAX_SUBMIT_DIMENSION`], aspect preserved, never upscaled.
pub fn submit_target_size(width: u32, height: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= MAX_SUBMIT_DIMENSION {
        return (width, height);
    }
    let scale = MAX_SUBMIT_DIMENSION as f64 / longer as f64;
    (
        ((width as f64 * scale).round() as u32).max(1),
        ((height as f64 * scale).round() as u32).max(1),
    )
}

/// Flatten photo and mask into the single image sent to the service.
///
/// The photo is resized to the submission target, the mask is scaled to the
/// same target and alpha-blended on top, and the result is encoded: PNG
/// sources stay PNG, anything else becomes JPEG at [`JPEG_QUALITY`].
pub fn compose(source: &SourceImage, mask: &MaskLayer) -> Result<EncodedPayload> {
    let (target_w, target_h) = submit_target_size(source.width(), source.height());

    let mut flattened = if (target_w, target_h) == (source.width(), source.height()) {
        source.image().to_rgba8()
    } else {
        imageops::resize(
            &source.image().to_rgba8(),
            target_w,
            target_h,
            FilterType::Lanczos3,
        )
    };

    // Nearest keeps the marks hard-edged opaque; a smoothing filter would
    // bleed half-transparent red into the surrounding pixels.
    let marks = if (mask.width(), mask.height()) == (target_w, target_h) {
        mask.image().clone()
    } else {
        imageops::resize(mask.image(), target_w, target_h, FilterType::Nearest)
    };
    imageops::overlay(&mut flattened, &marks, 0, 0);

    debug!(target_w, target_h, mime = source.payload_mime(), "composited submission image");
    let bytes = match source.format() {
        ImageFormat::Png => encode_png(&flattened)?,
        _ => encode_jpeg(&flattened)?,
    };
    Ok(EncodedPayload {
        bytes,
        mime: source.payload_mime(),
    })
}

/// Encode the bare mask on its own. Always lossless (PNG) no matter what
/// format the photo came in as.
pub fn encode_mask(mask: &MaskLayer) -> Result<EncodedPayload> {
    Ok(EncodedPayload {
        bytes: encode_png(mask.image())?,
        mime: PNG_MIME,
    })
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>> {
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(bytes)
}
