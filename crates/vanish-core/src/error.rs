use thiserror::Error;

#[derive(Error, Debug)]
pub enum VanishError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Nothing is marked for removal; paint over the object first")]
    EmptyMask,

    #[error("No API key configured for the edit service")]
    MissingCredential,

    #[error("Edit service rejected the credential: {0}")]
    Auth(String),

    #[error("Edit service returned no image (request was declined)")]
    ServiceRefusal,

    #[error("Edit service call failed: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, VanishError>;
