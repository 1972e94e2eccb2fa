use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use vanish_core::compose::compose;
use vanish_core::error::VanishError;
use vanish_core::remote::{EditOutcome, EditRequest, EditService, GeminiClient, RemoteConfig};
use vanish_core::source::SourceImage;

use crate::summary::print_erase_summary;

#[derive(Args)]
pub struct EraseArgs {
    /// Input photo (PNG or JPEG)
    pub image: PathBuf,

    /// Mask image; pixels with nonzero alpha mark the region to remove
    #[arg(short, long)]
    pub mask: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "edited.png")]
    pub output: PathBuf,

    /// Service config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model to request
    #[arg(long)]
    pub model: Option<String>,

    /// Edit instruction sent alongside the image
    #[arg(long)]
    pub instruction: Option<String>,
}

pub fn run(args: &EraseArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let source = SourceImage::from_path(&args.image)?;
    let mask = super::load_mask(&args.mask)?;
    if mask.is_blank() {
        return Err(VanishError::EmptyMask.into());
    }

    let payload = compose(&source, &mask)?;
    let request = EditRequest::single(&config.instruction, payload.bytes, payload.mime);

    print_erase_summary(&args.image, &source, &config, &args.output);

    let client = GeminiClient::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Contacting edit service");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let started = Instant::now();

    let outcome = client.edit(&request);
    spinner.finish_and_clear();

    match outcome? {
        EditOutcome::Image { bytes, mime } => {
            std::fs::write(&args.output, &bytes)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            println!(
                "Edited in {:.1}s ({mime}, {} bytes)",
                started.elapsed().as_secs_f32(),
                bytes.len()
            );
            println!("Output saved to {}", args.output.display());
            Ok(())
        }
        EditOutcome::Refusal => Err(VanishError::ServiceRefusal.into()),
    }
}

/// Resolve the service config: file, then flags, then environment.
///
/// The credential always ends up in the config handed to the client; nothing
/// below this layer reads the environment.
fn resolve_config(args: &EraseArgs) -> Result<RemoteConfig> {
    let mut config = if let Some(ref path) = args.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).context("Invalid service config")?
    } else {
        RemoteConfig::default()
    };

    if let Some(ref key) = args.api_key {
        config.api_key = key.clone();
    } else if config.api_key.trim().is_empty() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = key;
        }
    }
    if let Some(ref model) = args.model {
        config.model = model.clone();
    }
    if let Some(ref instruction) = args.instruction {
        config.instruction = instruction.clone();
    }

    Ok(config)
}
