//! Collaborator contracts for the paint core.
//!
//! This module provides:
//! - [`TileGrid`] - bounds-checked cell storage
//! - [`Selection`] - per-cell paint eligibility
//! - [`UndoRecorder`] - stroke-granular history
//! - [`DirtySink`] - render cache invalidation
//! - [`PaintTarget`] - the bundle handed to the tool for one event
//!
//! Reference implementations live in [`crate::grid`], [`crate::selection`],
//! [`crate::history`] and [`crate::dirty`].

use crate::types::{Cell, GridCoord, LayerMask, PaintMode};

/// Grid storage the brush writes into.
pub trait TileGrid {
    /// Grid size in cells `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// Whether `coord` lies inside the grid
    fn valid_location(&self, coord: GridCoord) -> bool {
        let (width, height) = self.dimensions();
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < width && (coord.y as u32) < height
    }

    /// Current contents of a cell, `None` outside the grid
    fn cell(&self, coord: GridCoord) -> Option<Cell>;

    /// Paint one cell.
    ///
    /// Only layers allowed by both `mode` and `layers` are touched. With
    /// `erase` those layers are cleared instead of painted. Writes outside
    /// the grid are ignored.
    fn write_cell(&mut self, coord: GridCoord, mode: PaintMode, layers: LayerMask, erase: bool);

    /// Put back a previously captured cell (used by undo/redo)
    fn restore_cell(&mut self, coord: GridCoord, cell: Cell);
}

/// Selection mask consulted before every write.
pub trait Selection {
    fn is_paintable(&self, coord: GridCoord) -> bool;
}

/// Undo manager receiving pre-change snapshots.
pub trait UndoRecorder {
    /// Remember the state of `coord` before the stroke changes it
    fn record_pre_state(&mut self, coord: GridCoord, before: Cell);

    /// Close the current stroke as one undoable unit
    fn commit_stroke(&mut self);

    /// Forget the records of an aborted stroke
    fn discard_stroke(&mut self) {}
}

/// Render cache hook.
pub trait DirtySink {
    /// Mark a `width` x `height` cell region starting at `coord` dirty
    fn mark_dirty(&mut self, coord: GridCoord, width: u32, height: u32);
}

/// Everything a brush event touches, borrowed for the duration of one call
pub struct PaintTarget<'a> {
    pub grid: &'a mut dyn TileGrid,
    pub selection: &'a dyn Selection,
    pub undo: &'a mut dyn UndoRecorder,
    pub dirty: &'a mut dyn DirtySink,
}

impl<'a> PaintTarget<'a> {
    pub fn new(
        grid: &'a mut dyn TileGrid,
        selection: &'a dyn Selection,
        undo: &'a mut dyn UndoRecorder,
        dirty: &'a mut dyn DirtySink,
    ) -> Self {
        Self {
            grid,
            selection,
            undo,
            dirty,
        }
    }
}
