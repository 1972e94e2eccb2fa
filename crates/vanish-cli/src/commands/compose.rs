use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use vanish_core::compose::{compose, encode_mask};
use vanish_core::source::SourceImage;

#[derive(Args)]
pub struct ComposeArgs {
    /// Input photo (PNG or JPEG)
    pub image: PathBuf,

    /// Mask image; pixels with nonzero alpha mark the region to remove
    #[arg(short, long)]
    pub mask: PathBuf,

    /// Composite output path
    #[arg(short, long, default_value = "composite.png")]
    pub output: PathBuf,

    /// Also write the bare mask as PNG
    #[arg(long)]
    pub mask_out: Option<PathBuf>,
}

/// Produce the exact payload an erase would send, without the network call.
pub fn run(args: &ComposeArgs) -> Result<()> {
    let source = SourceImage::from_path(&args.image)?;
    let mask = super::load_mask(&args.mask)?;

    let payload = compose(&source, &mask)?;
    std::fs::write(&args.output, &payload.bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "Composite:   {} ({}, {} bytes)",
        args.output.display(),
        payload.mime,
        payload.bytes.len()
    );

    if let Some(ref path) = args.mask_out {
        let bare = encode_mask(&mask)?;
        std::fs::write(path, &bare.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Mask:        {} ({})", path.display(), bare.mime);
    }

    Ok(())
}
