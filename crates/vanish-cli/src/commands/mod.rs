pub mod compose;
pub mod config;
pub mod erase;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result};
use vanish_core::mask::MaskLayer;

/// Load a mask PNG from disk. Any pixel with nonzero alpha counts as marked.
pub fn load_mask(path: &Path) -> Result<MaskLayer> {
    let image = image::open(path)
        .with_context(|| format!("Failed to read mask {}", path.display()))?
        .to_rgba8();
    Ok(MaskLayer::from_image(image)?)
}
