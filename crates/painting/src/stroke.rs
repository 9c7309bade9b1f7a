//! Stroke tracker
//!
//! Holds the gesture state machine (idle -> dragging -> idle) and the
//! per-stroke visited set. Each pointer event while dragging yields at most
//! one [`Segment`]; which segment depends on the buttons and shift key:
//!
//! - right only: horizontal line, the row stays on the last point's `y`
//! - right + left: vertical line, the column stays on the last point's `x`
//! - left only: freeform from the last point
//! - left + shift: point-to-point from the stroke's anchor, nothing advances

use std::collections::HashSet;

use tracing::debug;

use crate::types::{GridCoord, PointerEvent};

/// The sub-path between two pointer samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: GridCoord,
    pub to: GridCoord,
}

/// State of an in-progress stroke
#[derive(Debug, Clone)]
pub struct StrokeState {
    /// Cell where the stroke started
    pub anchor: GridCoord,
    /// End of the last committed segment
    pub last_point: GridCoord,
    /// Cells already committed this stroke
    visited: HashSet<GridCoord>,
}

impl StrokeState {
    pub fn new(anchor: GridCoord) -> Self {
        Self {
            anchor,
            last_point: anchor,
            visited: HashSet::new(),
        }
    }

    /// Mark a cell visited. Returns false if it already was.
    #[inline]
    pub fn visit(&mut self, coord: GridCoord) -> bool {
        self.visited.insert(coord)
    }

    #[inline]
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.visited.contains(&coord)
    }

    /// Number of distinct cells visited so far
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Gesture state machine for one tool instance
#[derive(Debug, Default)]
pub struct StrokeTracker {
    left_down: bool,
    right_down: bool,
    stroke: Option<StrokeState>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a button press.
    ///
    /// Starts a new stroke when no button was previously held.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Option<Segment> {
        if !self.left_down && !self.right_down {
            self.begin(event.cell);
        }
        self.set_buttons(event);
        self.next_segment(event)
    }

    /// Handle pointer motion
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<Segment> {
        self.set_buttons(event);
        if self.stroke.is_none() && event.any_pressed() {
            // Press happened off-grid; start from where the pointer entered
            self.begin(event.cell);
        }
        self.next_segment(event)
    }

    /// Handle a button release.
    ///
    /// The final segment uses the buttons held before the release. Call
    /// [`StrokeTracker::is_released`] afterwards to learn whether the stroke
    /// ended.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<Segment> {
        let segment = self.next_segment(event);
        self.set_buttons(event);
        segment
    }

    /// True when a stroke is open but no button is held any more
    pub fn is_released(&self) -> bool {
        self.stroke.is_some() && !self.left_down && !self.right_down
    }

    /// Close the current stroke, returning its state
    pub fn end_stroke(&mut self) -> Option<StrokeState> {
        let stroke = self.stroke.take();
        if let Some(ref s) = stroke {
            debug!(
                "StrokeTracker: stroke from ({}, {}) ended, {} cells visited",
                s.anchor.x,
                s.anchor.y,
                s.visited_count()
            );
        }
        stroke
    }

    /// Drop the current stroke and button state without committing
    pub fn cancel(&mut self) {
        if self.stroke.take().is_some() {
            debug!("StrokeTracker: stroke cancelled");
        }
        self.left_down = false;
        self.right_down = false;
    }

    #[inline]
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    #[inline]
    pub fn stroke(&self) -> Option<&StrokeState> {
        self.stroke.as_ref()
    }

    #[inline]
    pub fn stroke_mut(&mut self) -> Option<&mut StrokeState> {
        self.stroke.as_mut()
    }

    fn begin(&mut self, anchor: GridCoord) {
        debug!("StrokeTracker: stroke started at ({}, {})", anchor.x, anchor.y);
        self.stroke = Some(StrokeState::new(anchor));
    }

    fn set_buttons(&mut self, event: &PointerEvent) {
        self.left_down = event.left_pressed;
        self.right_down = event.right_pressed;
    }

    fn next_segment(&mut self, event: &PointerEvent) -> Option<Segment> {
        let stroke = self.stroke.as_mut()?;

        if self.right_down {
            let mut target = event.cell;
            if self.left_down {
                target.x = stroke.last_point.x;
            } else {
                target.y = stroke.last_point.y;
            }
            let segment = Segment {
                from: stroke.last_point,
                to: target,
            };
            stroke.last_point = target;
            Some(segment)
        } else if self.left_down {
            if event.shift_held {
                Some(Segment {
                    from: stroke.anchor,
                    to: event.cell,
                })
            } else {
                let segment = Segment {
                    from: stroke.last_point,
                    to: event.cell,
                };
                stroke.last_point = event.cell;
                Some(segment)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn seg(from: (i32, i32), to: (i32, i32)) -> Segment {
        Segment {
            from: IVec2::new(from.0, from.1),
            to: IVec2::new(to.0, to.1),
        }
    }

    #[test]
    fn test_down_starts_stroke_with_point_segment() {
        let mut tracker = StrokeTracker::new();
        assert!(!tracker.is_stroking());

        let segment = tracker.pointer_down(&PointerEvent::left(4, 7));
        assert!(tracker.is_stroking());
        assert_eq!(segment, Some(seg((4, 7), (4, 7))));
        assert_eq!(tracker.stroke().unwrap().anchor, IVec2::new(4, 7));
    }

    #[test]
    fn test_freeform_advances_last_point() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::left(0, 0));

        assert_eq!(tracker.pointer_move(&PointerEvent::left(2, 0)), Some(seg((0, 0), (2, 0))));
        assert_eq!(tracker.pointer_move(&PointerEvent::left(3, 4)), Some(seg((2, 0), (3, 4))));
        assert_eq!(tracker.stroke().unwrap().last_point, IVec2::new(3, 4));
    }

    #[test]
    fn test_shift_draws_from_anchor() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::left(0, 0));
        tracker.pointer_move(&PointerEvent::left(2, 0));

        let shifted = PointerEvent::left(5, 5).with_shift(true);
        assert_eq!(tracker.pointer_move(&shifted), Some(seg((0, 0), (5, 5))));

        // Adjusting the end point keeps drawing from the anchor
        let shifted = PointerEvent::left(6, 1).with_shift(true);
        assert_eq!(tracker.pointer_move(&shifted), Some(seg((0, 0), (6, 1))));

        // Neither anchor nor last point moved
        let stroke = tracker.stroke().unwrap();
        assert_eq!(stroke.anchor, IVec2::new(0, 0));
        assert_eq!(stroke.last_point, IVec2::new(2, 0));
    }

    #[test]
    fn test_right_locks_row() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::right(5, 5));

        assert_eq!(tracker.pointer_move(&PointerEvent::right(9, 8)), Some(seg((5, 5), (9, 5))));
        assert_eq!(tracker.pointer_move(&PointerEvent::right(7, 0)), Some(seg((9, 5), (7, 5))));
    }

    #[test]
    fn test_both_buttons_lock_column() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::right(5, 5));

        let both = PointerEvent {
            left_pressed: true,
            ..PointerEvent::right(8, 9)
        };
        assert_eq!(tracker.pointer_move(&both), Some(seg((5, 5), (5, 9))));
    }

    #[test]
    fn test_up_uses_previous_buttons_then_releases() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::left(1, 1));

        let segment = tracker.pointer_up(&PointerEvent::released(3, 1));
        assert_eq!(segment, Some(seg((1, 1), (3, 1))));
        assert!(tracker.is_released());

        let stroke = tracker.end_stroke().unwrap();
        assert_eq!(stroke.last_point, IVec2::new(3, 1));
        assert!(!tracker.is_stroking());
    }

    #[test]
    fn test_partial_release_keeps_stroke() {
        let mut tracker = StrokeTracker::new();
        let both = PointerEvent {
            left_pressed: true,
            ..PointerEvent::right(0, 0)
        };
        tracker.pointer_down(&both);
        tracker.pointer_up(&PointerEvent::right(0, 0));
        assert!(!tracker.is_released());

        // A second press while a button is held does not restart the stroke
        tracker.pointer_down(&both);
        assert_eq!(tracker.stroke().unwrap().anchor, IVec2::new(0, 0));
    }

    #[test]
    fn test_move_without_buttons_is_idle() {
        let mut tracker = StrokeTracker::new();
        assert_eq!(tracker.pointer_move(&PointerEvent::released(3, 3)), None);
        assert!(!tracker.is_stroking());
    }

    #[test]
    fn test_new_stroke_resets_visited() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::left(0, 0));
        assert!(tracker.stroke_mut().unwrap().visit(IVec2::new(0, 0)));
        assert!(!tracker.stroke_mut().unwrap().visit(IVec2::new(0, 0)));
        tracker.pointer_up(&PointerEvent::released(0, 0));
        tracker.end_stroke();

        tracker.pointer_down(&PointerEvent::left(0, 0));
        assert!(!tracker.stroke().unwrap().is_visited(IVec2::new(0, 0)));
    }

    #[test]
    fn test_cancel_drops_stroke() {
        let mut tracker = StrokeTracker::new();
        tracker.pointer_down(&PointerEvent::left(0, 0));
        tracker.cancel();
        assert!(!tracker.is_stroking());
        assert!(!tracker.is_released());
    }
}
