//! Stroke-granular undo history

use std::collections::VecDeque;

use gridpaint_config::{DEFAULT_UNDO_LEVELS, EditorConfig};
use tracing::debug;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::target::{TileGrid, UndoRecorder};
use crate::types::{Cell, GridCoord};

/// An undo entry containing cell snapshots captured during one stroke
#[derive(Debug, Clone, Default)]
pub struct StrokeUndo {
    /// Cells in the order they were first recorded
    pub cells: Vec<(GridCoord, Cell)>,
}

impl StrokeUndo {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Apply the snapshots to the grid, returning the cells they replaced
    fn swap_into(&self, grid: &mut dyn TileGrid) -> StrokeUndo {
        let mut replaced = Vec::with_capacity(self.cells.len());
        for &(coord, cell) in self.cells.iter().rev() {
            if let Some(current) = grid.cell(coord) {
                replaced.push((coord, current));
            }
            grid.restore_cell(coord, cell);
        }
        replaced.reverse();
        StrokeUndo { cells: replaced }
    }
}

/// Undo/redo stacks fed by [`UndoRecorder`]
#[derive(Debug)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct UndoHistory {
    /// Records for the stroke currently being painted
    pending: StrokeUndo,
    /// Undo stack (most recent at back)
    undo_stack: VecDeque<StrokeUndo>,
    redo_stack: Vec<StrokeUndo>,
    max_levels: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LEVELS)
    }
}

impl UndoHistory {
    pub fn new(max_levels: usize) -> Self {
        Self {
            pending: StrokeUndo::default(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.undo_levels)
    }

    /// Records captured for the stroke in progress
    pub fn pending(&self) -> &StrokeUndo {
        &self.pending
    }

    /// The most recently committed stroke
    pub fn last(&self) -> Option<&StrokeUndo> {
        self.undo_stack.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo levels available
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Undo the last stroke
    ///
    /// Returns true if an undo was performed, false if no undo available
    pub fn undo(&mut self, grid: &mut dyn TileGrid) -> bool {
        let Some(entry) = self.undo_stack.pop_back() else {
            debug!("Undo: no entries available");
            return false;
        };

        debug!("Undoing stroke ({} cells)", entry.len());
        let redo = entry.swap_into(grid);
        self.redo_stack.push(redo);
        true
    }

    /// Redo the last undone stroke
    pub fn redo(&mut self, grid: &mut dyn TileGrid) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            debug!("Redo: no entries available");
            return false;
        };

        debug!("Redoing stroke ({} cells)", entry.len());
        let undo = entry.swap_into(grid);
        self.undo_stack.push_back(undo);
        true
    }
}

impl UndoRecorder for UndoHistory {
    fn record_pre_state(&mut self, coord: GridCoord, before: Cell) {
        self.pending.cells.push((coord, before));
    }

    fn commit_stroke(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let entry = std::mem::take(&mut self.pending);
        debug!("Saved undo entry ({} cells)", entry.len());
        self.undo_stack.push_back(entry);
        self.redo_stack.clear();

        // Limit undo stack size
        while self.undo_stack.len() > self.max_levels {
            self.undo_stack.pop_front();
        }
    }

    fn discard_stroke(&mut self) {
        if !self.pending.is_empty() {
            debug!("Discarded {} pending undo records", self.pending.len());
            self.pending = StrokeUndo::default();
        }
    }
}
