use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::consts::{JPEG_MIME, PNG_MIME};
use crate::error::{Result, VanishError};

/// The photo being edited. Immutable for the lifetime of a session; loading
/// a new photo replaces the whole session.
#[derive(Clone, Debug)]
pub struct SourceImage {
    image: DynamicImage,
    format: ImageFormat,
}

impl SourceImage {
    /// Decode a photo from raw encoded bytes, sniffing the container format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes)?;
        let image = image::load_from_memory_with_format(bytes, format)?;
        Self::new(image, format)
    }

    /// Load and decode a photo from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn new(image: DynamicImage, format: ImageFormat) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(VanishError::InvalidDimensions {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self { image, format })
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Mime type of the format family the submission payload will use:
    /// PNG stays PNG, everything else is re-encoded as JPEG.
    pub fn payload_mime(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => PNG_MIME,
            _ => JPEG_MIME,
        }
    }
}
