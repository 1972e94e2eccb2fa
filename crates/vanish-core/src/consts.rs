/// Smallest selectable brush diameter, in canvas pixels.
pub const MIN_BRUSH_SIZE: f32 = 5.0;

/// Largest selectable brush diameter, in canvas pixels.
pub const MAX_BRUSH_SIZE: f32 = 100.0;

/// Brush diameter a fresh session starts with, in canvas pixels.
pub const DEFAULT_BRUSH_SIZE: f32 = 40.0;

/// Fully opaque marker color (RGBA) painted into the mask layer. Solid red
/// keeps the marked region unambiguous for the inpainting service.
pub const MASK_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Cap on the longer side of the image submitted to the service, in pixels.
/// Larger sources are downscaled (aspect preserved); smaller ones are never
/// upscaled.
pub const MAX_SUBMIT_DIMENSION: u32 = 1024;

/// JPEG quality used when re-encoding non-PNG sources for submission.
pub const JPEG_QUALITY: u8 = 90;

/// Fraction of the viewport height the display canvas may occupy.
pub const MAX_VIEWPORT_HEIGHT_FRACTION: f32 = 0.7;

/// Mime type for losslessly encoded payloads. Masks are always sent this way.
pub const PNG_MIME: &str = "image/png";

/// Mime type for lossy-encoded composite payloads.
pub const JPEG_MIME: &str = "image/jpeg";

/// Base URL of the generative edit API. The model name and action are
/// appended per request.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for mask-guided object removal.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Instruction sent alongside the composited image. The solid red marks are
/// the removal region; see [`MASK_COLOR`].
pub const DEFAULT_INSTRUCTION: &str = "Remove the object covered by the solid red marks and \
     reconstruct the background behind it so the scene looks natural and untouched. \
     Return only the edited image.";
