use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use vanish_core::compose::submit_target_size;
use vanish_core::source::SourceImage;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = SourceImage::from_path(&args.file)?;
    let (width, height) = (source.width(), source.height());
    let (target_w, target_h) = submit_target_size(width, height);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", width, height);
    println!("Format:      {:?}", source.format());
    println!("Payload as:  {}", source.payload_mime());

    let megapixels = (width as f64 * height as f64) / 1_000_000.0;
    println!("Megapixels:  {:.1}", megapixels);

    if (target_w, target_h) == (width, height) {
        println!("Submit size: {}x{} (unchanged)", target_w, target_h);
    } else {
        println!("Submit size: {}x{} (downscaled)", target_w, target_h);
    }

    Ok(())
}
