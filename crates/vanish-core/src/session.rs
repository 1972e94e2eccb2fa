//! One editing session: a loaded photo, its canvas-sized mask layer, the
//! stroke engine, and the undo/redo history, plus the submission flow.

use tracing::info;

use crate::compose;
use crate::error::{Result, VanishError};
use crate::geometry::{CanvasPoint, ContainerSize, DisplayGeometry};
use crate::history::History;
use crate::mask::MaskLayer;
use crate::remote::{EditOutcome, EditRequest, EditService};
use crate::source::SourceImage;
use crate::stroke::StrokeEngine;

/// The edited photo returned from a successful submission.
#[derive(Clone, Debug)]
pub struct EditedImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}

pub struct EditSession {
    source: SourceImage,
    geometry: DisplayGeometry,
    mask: MaskLayer,
    history: History,
    stroke: StrokeEngine,
}

impl EditSession {
    /// Start a session for a newly loaded photo: compute the display
    /// geometry, allocate a transparent mask at canvas size, seed the
    /// history baseline.
    pub fn load(source: SourceImage, container: ContainerSize) -> Result<Self> {
        let geometry = DisplayGeometry::compute(container, source.width(), source.height())?;
        let mask = MaskLayer::new(geometry.width, geometry.height)?;
        let history = History::new(&mask);
        info!(
            source_w = source.width(),
            source_h = source.height(),
            canvas_w = geometry.width,
            canvas_h = geometry.height,
            "editing session started"
        );
        Ok(Self {
            source,
            geometry,
            mask,
            history,
            stroke: StrokeEngine::new(),
        })
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn mask(&self) -> &MaskLayer {
        &self.mask
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn brush_size(&self) -> f32 {
        self.stroke.brush_size()
    }

    /// Set the brush diameter for subsequent strokes, clamped to the valid
    /// range.
    pub fn set_brush_size(&mut self, px: f32) {
        self.stroke.set_brush_size(px);
    }

    /// Re-layout the canvas. When the resulting pixel size differs, mask and
    /// history restart from an empty baseline (the old pixels belong to a
    /// canvas that no longer exists); returns whether that reset happened.
    pub fn set_display_size(&mut self, container: ContainerSize) -> Result<bool> {
        let geometry =
            DisplayGeometry::compute(container, self.source.width(), self.source.height())?;
        if geometry == self.geometry {
            return Ok(false);
        }
        self.stroke.finish();
        self.geometry = geometry;
        self.mask = MaskLayer::new(geometry.width, geometry.height)?;
        self.history = History::new(&self.mask);
        Ok(true)
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    pub fn begin_stroke(&mut self, at: CanvasPoint) {
        self.stroke.begin(&mut self.mask, at);
    }

    pub fn extend_stroke(&mut self, to: CanvasPoint) {
        self.stroke.extend(&mut self.mask, to);
    }

    /// Complete the active stroke and record exactly one history entry.
    /// Duplicate end events return false and record nothing.
    pub fn end_stroke(&mut self) -> bool {
        if self.stroke.finish() {
            self.history.record(&self.mask);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.mask)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.mask)
    }

    pub fn clear(&mut self) {
        self.stroke.finish();
        self.history.clear(&mut self.mask);
    }

    pub fn has_marks(&self) -> bool {
        self.history.has_marks()
    }

    /// Guard, composite, and build the request. No network; the GUI hands
    /// the result to its worker thread, the CLI feeds it straight into a
    /// client.
    pub fn prepare_submission(&self, instruction: &str) -> Result<EditRequest> {
        if !self.history.has_marks() {
            return Err(VanishError::EmptyMask);
        }
        let payload = compose::compose(&self.source, &self.mask)?;
        Ok(EditRequest::single(instruction, payload.bytes, payload.mime))
    }

    /// Run the submission end to end. Takes `&self`: whatever the service
    /// does, mask and history stay exactly as they were, so the user can
    /// adjust and resubmit without re-drawing.
    pub fn submit(&self, instruction: &str, client: &dyn EditService) -> Result<EditedImage> {
        let request = self.prepare_submission(instruction)?;
        info!(
            mime = request.images[0].mime,
            payload_bytes = request.images[0].bytes.len(),
            "submitting edit request"
        );
        match client.edit(&request)? {
            EditOutcome::Image { bytes, mime } => {
                info!(result_bytes = bytes.len(), %mime, "received edited image");
                Ok(EditedImage { bytes, mime })
            }
            EditOutcome::Refusal => Err(VanishError::ServiceRefusal),
        }
    }
}
