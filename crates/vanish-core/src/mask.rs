use std::sync::Arc;

use image::RgbaImage;

use crate::error::{Result, VanishError};

/// The transparent drawing surface the user paints removal marks onto.
/// Same pixel dimensions as the display canvas; mutated only by stroke
/// rasterization and snapshot restore.
#[derive(Clone, Debug)]
pub struct MaskLayer {
    pixels: RgbaImage,
}

impl MaskLayer {
    /// Fully transparent layer of the given canvas size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VanishError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    /// Wrap an existing RGBA buffer (e.g. a mask painted elsewhere and loaded
    /// from disk). Any pixel with nonzero alpha counts as marked.
    pub fn from_image(pixels: RgbaImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(VanishError::InvalidDimensions {
                width: pixels.width(),
                height: pixels.height(),
            });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// True when no pixel has been marked.
    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|p| p.0[3] == 0)
    }

    /// Immutable capture of the current pixel contents. Blankness is
    /// computed once here so history queries stay cheap.
    pub fn capture(&self) -> MaskSnapshot {
        MaskSnapshot {
            width: self.width(),
            height: self.height(),
            blank: self.is_blank(),
            pixels: Arc::from(self.pixels.as_raw().as_slice()),
        }
    }

    /// Replace the pixel contents with a previously captured state.
    pub fn restore(&mut self, snapshot: &MaskSnapshot) {
        self.pixels = snapshot.to_image();
    }
}

/// One history entry: the mask's pixels frozen at a point in time. Cheap to
/// clone; the buffer is shared.
#[derive(Clone, Debug)]
pub struct MaskSnapshot {
    width: u32,
    height: u32,
    blank: bool,
    pixels: Arc<[u8]>,
}

impl MaskSnapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the captured state had no marked pixel.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
            .expect("snapshot buffer matches its dimensions")
    }
}
