//! Mapping between viewport (display) coordinates and canvas pixel
//! coordinates, plus the display-size computation for a loaded photo.
//!
//! The canvas keeps a fixed intrinsic pixel size after load; responsive
//! display scaling only changes the rendered rect, and the mapper resolves
//! the difference.

use crate::consts::MAX_VIEWPORT_HEIGHT_FRACTION;
use crate::error::{Result, VanishError};

/// Pointer event position in viewport pixels (mouse or first touch point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// The canvas's rendered bounding box in viewport pixels. Absent while the
/// canvas is not mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// Convert a viewport-space pointer position to canvas pixel space.
///
/// `canvas_x = (pointer.x - rect.left) * (canvas_width / rect.width)`, and
/// likewise for y. Returns `None` when the canvas is unmounted or the rect
/// is degenerate; the caller must treat that as "no position" and do nothing.
pub fn map_to_canvas(
    pointer: PointerPos,
    rect: Option<CanvasRect>,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<CanvasPoint> {
    let rect = rect?;
    if rect.width <= 0.0 || rect.height <= 0.0 || canvas_width == 0 || canvas_height == 0 {
        return None;
    }

    Some(CanvasPoint {
        x: (pointer.x - rect.left) * (canvas_width as f32 / rect.width),
        y: (pointer.y - rect.top) * (canvas_height as f32 / rect.height),
    })
}

/// Available layout space for the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    /// Width the container offers the canvas, in display pixels.
    pub width: f32,
    /// Full viewport height, in display pixels. The canvas may occupy at
    /// most [`MAX_VIEWPORT_HEIGHT_FRACTION`] of it.
    pub viewport_height: f32,
}

/// Canvas pixel dimensions derived from the container and the source photo's
/// aspect ratio. Pure function of its inputs; recomputed on load or re-layout,
/// never adjusted incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub width: u32,
    pub height: u32,
}

impl DisplayGeometry {
    /// Fit the source aspect ratio into the container: full container width,
    /// height capped at the viewport fraction. Both axes scale together, so
    /// the photo is never stretched.
    pub fn compute(container: ContainerSize, source_width: u32, source_height: u32) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(VanishError::InvalidDimensions {
                width: source_width,
                height: source_height,
            });
        }

        let aspect = source_width as f32 / source_height as f32;
        let max_height = (container.viewport_height * MAX_VIEWPORT_HEIGHT_FRACTION).max(1.0);

        let mut width = container.width.max(1.0);
        let mut height = width / aspect;
        if height > max_height {
            height = max_height;
            width = height * aspect;
        }

        Ok(Self {
            width: (width.round() as u32).max(1),
            height: (height.round() as u32).max(1),
        })
    }
}
