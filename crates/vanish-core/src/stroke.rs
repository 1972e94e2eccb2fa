//! Brush stroke rendering into the mask layer.
//!
//! One stroke lives between `begin` and `finish`; the phase enum makes a
//! second concurrent stroke unrepresentable. Rendering is incremental: each
//! pointer move paints only the newest segment, never touching what earlier
//! segments already covered.

use image::Rgba;

use crate::consts::{DEFAULT_BRUSH_SIZE, MASK_COLOR, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::geometry::CanvasPoint;
use crate::mask::MaskLayer;

#[derive(Debug, Clone, Copy, PartialEq)]
enum StrokePhase {
    Idle,
    Drawing { last: CanvasPoint },
}

/// Draws one continuous round-capped stroke as the pointer moves.
#[derive(Debug, Clone)]
pub struct StrokeEngine {
    phase: StrokePhase,
    brush_size: f32,
}

impl StrokeEngine {
    pub fn new() -> Self {
        Self {
            phase: StrokePhase::Idle,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }

    /// Brush diameter in canvas pixels.
    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    /// Set the brush diameter, clamped to the valid range. Applies to
    /// subsequent strokes (and segments) only.
    pub fn set_brush_size(&mut self, px: f32) {
        self.brush_size = px.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, StrokePhase::Drawing { .. })
    }

    /// Start a stroke and stamp its round cap at `at`. A pointer-down while
    /// a stroke is already active is ignored; the first stroke continues.
    pub fn begin(&mut self, layer: &mut MaskLayer, at: CanvasPoint) {
        if self.is_drawing() {
            return;
        }
        fill_segment(layer, at, at, self.brush_size / 2.0);
        self.phase = StrokePhase::Drawing { last: at };
    }

    /// Extend the active stroke to `to`, painting the segment from the last
    /// point. No-op while idle (a move without a preceding down).
    pub fn extend(&mut self, layer: &mut MaskLayer, to: CanvasPoint) {
        let StrokePhase::Drawing { last } = self.phase else {
            return;
        };
        fill_segment(layer, last, to, self.brush_size / 2.0);
        self.phase = StrokePhase::Drawing { last: to };
    }

    /// End the active stroke. Returns true exactly once per stroke so the
    /// caller knows to snapshot; duplicate end events (pointer-up followed
    /// by pointer-leave) return false and do nothing.
    pub fn finish(&mut self) -> bool {
        match self.phase {
            StrokePhase::Drawing { .. } => {
                self.phase = StrokePhase::Idle;
                true
            }
            StrokePhase::Idle => false,
        }
    }
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint every pixel within `radius` of the segment `a`..`b` in the marker
/// color. Distance-to-segment coverage yields round caps and joins by
/// construction; a zero-length segment degenerates to a filled disc.
fn fill_segment(layer: &mut MaskLayer, a: CanvasPoint, b: CanvasPoint, radius: f32) {
    let width = layer.width() as i32;
    let height = layer.height() as i32;

    let x0 = ((a.x.min(b.x) - radius).floor() as i32).max(0);
    let y0 = ((a.y.min(b.y) - radius).floor() as i32).max(0);
    let x1 = ((a.x.max(b.x) + radius).ceil() as i32).min(width - 1);
    let y1 = ((a.y.max(b.y) + radius).ceil() as i32).min(height - 1);

    let color = Rgba(MASK_COLOR);
    let pixels = layer.image_mut();
    for y in y0..=y1 {
        for x in x0..=x1 {
            // Sample at the pixel center for symmetric coverage.
            let d = distance_to_segment(x as f32 + 0.5, y as f32 + 0.5, a, b);
            if d <= radius {
                pixels.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn distance_to_segment(px: f32, py: f32, a: CanvasPoint, b: CanvasPoint) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f32::EPSILON {
        return ((px - a.x) * (px - a.x) + (py - a.y) * (py - a.y)).sqrt();
    }
    let t = (((px - a.x) * dx + (py - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}
