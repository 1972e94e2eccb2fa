use std::cell::RefCell;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use vanish_core::error::{Result, VanishError};
use vanish_core::geometry::{CanvasPoint, ContainerSize};
use vanish_core::remote::{EditOutcome, EditRequest, EditService};
use vanish_core::session::EditSession;
use vanish_core::source::SourceImage;

/// Deterministic non-uniform test image: every pixel differs from its
/// neighbors, so compositing mistakes show up in comparisons.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

/// Encode a gradient as PNG and decode it back through the sniffing loader.
pub fn png_source(width: u32, height: u32) -> SourceImage {
    SourceImage::from_bytes(&png_bytes(width, height)).expect("decode PNG source")
}

/// Raw PNG bytes of a gradient image.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(gradient_image(width, height))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode PNG fixture");
    bytes
}

/// Same, but JPEG-encoded (to exercise the lossy format-family path).
pub fn jpeg_source(width: u32, height: u32) -> SourceImage {
    let rgb = DynamicImage::ImageRgba8(gradient_image(width, height)).to_rgb8();
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("encode JPEG fixture");
    SourceImage::from_bytes(&bytes).expect("decode JPEG source")
}

/// Container sized so the display canvas comes out exactly at the source's
/// native pixel size (width fits, height cap never binds).
pub fn native_container(width: u32, height: u32) -> ContainerSize {
    ContainerSize {
        width: width as f32,
        viewport_height: height as f32 * 10.0,
    }
}

/// Session whose canvas matches the PNG source pixel-for-pixel.
pub fn native_session(width: u32, height: u32) -> EditSession {
    EditSession::load(png_source(width, height), native_container(width, height))
        .expect("load session")
}

/// Draw one complete stroke through the session API.
pub fn draw_stroke(session: &mut EditSession, from: (f32, f32), to: (f32, f32)) {
    session.begin_stroke(CanvasPoint {
        x: from.0,
        y: from.1,
    });
    session.extend_stroke(CanvasPoint { x: to.0, y: to.1 });
    assert!(session.end_stroke(), "stroke should complete");
}

enum Script {
    Image { bytes: Vec<u8>, mime: String },
    Refusal,
    NetworkFailure(String),
}

/// Scripted stand-in for the edit service. Records every request it sees.
pub struct MockService {
    script: Script,
    requests: RefCell<Vec<EditRequest>>,
}

impl MockService {
    /// Always answers with a fixed 1x1 PNG, distinct from any test source.
    pub fn returning_image() -> Self {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 255])))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode mock result");
        Self {
            script: Script::Image {
                bytes,
                mime: "image/png".to_string(),
            },
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Always answers without an image part.
    pub fn refusing() -> Self {
        Self {
            script: Script::Refusal,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Always fails at the transport level.
    pub fn failing(message: &str) -> Self {
        Self {
            script: Script::NetworkFailure(message.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> EditRequest {
        self.requests
            .borrow()
            .last()
            .expect("at least one request recorded")
            .clone()
    }

    /// The bytes a successful script answers with.
    pub fn result_bytes(&self) -> Vec<u8> {
        match &self.script {
            Script::Image { bytes, .. } => bytes.clone(),
            _ => panic!("mock has no scripted image"),
        }
    }
}

impl EditService for MockService {
    fn edit(&self, request: &EditRequest) -> Result<EditOutcome> {
        self.requests.borrow_mut().push(request.clone());
        match &self.script {
            Script::Image { bytes, mime } => Ok(EditOutcome::Image {
                bytes: bytes.clone(),
                mime: mime.clone(),
            }),
            Script::Refusal => Ok(EditOutcome::Refusal),
            Script::NetworkFailure(message) => Err(VanishError::Network(message.clone())),
        }
    }
}
