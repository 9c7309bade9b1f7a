//! Pointer handling for the brush tool

use tracing::debug;

use crate::applicator::apply_footprints;
use crate::raster::rasterize;
use crate::stroke::Segment;
use crate::target::PaintTarget;
use crate::types::PointerEvent;

use super::BrushTool;

impl BrushTool {
    /// Handle a button press
    ///
    /// Returns the number of cells committed by this event.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, target: &mut PaintTarget<'_>) -> usize {
        let segment = self.tracker.pointer_down(event);
        self.paint_segment(segment, target)
    }

    /// Handle pointer motion
    pub fn on_pointer_move(&mut self, event: &PointerEvent, target: &mut PaintTarget<'_>) -> usize {
        let segment = self.tracker.pointer_move(event);
        self.paint_segment(segment, target)
    }

    /// Handle a button release
    ///
    /// When the last button is released the stroke is committed to the
    /// undo collaborator as one unit.
    pub fn on_pointer_up(&mut self, event: &PointerEvent, target: &mut PaintTarget<'_>) -> usize {
        let segment = self.tracker.pointer_up(event);
        let committed = self.paint_segment(segment, target);

        if self.tracker.is_released() {
            if let Some(stroke) = self.tracker.end_stroke() {
                debug!(
                    "BrushTool: committing stroke ({} cells visited)",
                    stroke.visited_count()
                );
            }
            target.undo.commit_stroke();
        }

        committed
    }

    /// Abort the current stroke without committing it.
    ///
    /// Cells already written stay written; their undo records are discarded.
    pub fn cancel_stroke(&mut self, target: &mut PaintTarget<'_>) {
        if self.tracker.is_stroking() {
            target.undo.discard_stroke();
        }
        self.tracker.cancel();
    }

    /// Rasterize a segment with the current brush and commit it
    fn paint_segment(&mut self, segment: Option<Segment>, target: &mut PaintTarget<'_>) -> usize {
        let Some(segment) = segment else {
            return 0;
        };
        let Some(stroke) = self.tracker.stroke_mut() else {
            return 0;
        };

        let footprints = rasterize(&self.brush, segment.from, segment.to);
        apply_footprints(&footprints, &self.settings, stroke, target)
    }
}
