//! Dirty chunk tracking for incremental re-rendering

use std::collections::HashSet;

use gridpaint_config::EditorConfig;
use tracing::trace;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::target::DirtySink;
use crate::types::GridCoord;

/// Chunk coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: u32,
    pub y: u32,
}

/// Tracks which fixed-size chunks of the grid need re-rendering
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DirtyRegions {
    width: u32,
    height: u32,
    chunk_size: u32,
    dirty_chunks: HashSet<ChunkCoord>,
}

impl DirtyRegions {
    /// Create a tracker for a `width` x `height` grid
    pub fn new(width: u32, height: u32, chunk_size: u32) -> Self {
        Self {
            width,
            height,
            chunk_size: chunk_size.max(1),
            dirty_chunks: HashSet::new(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.grid_width, config.grid_height, config.chunk_size)
    }

    #[inline]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Mark a rectangular cell region as dirty
    pub fn mark_region_dirty(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if w == 0 || h == 0 || x >= self.width || y >= self.height {
            return;
        }

        // Clamp to grid bounds
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        let chunk_x_start = x / self.chunk_size;
        let chunk_y_start = y / self.chunk_size;
        let chunk_x_end = (x_end - 1) / self.chunk_size;
        let chunk_y_end = (y_end - 1) / self.chunk_size;

        for cy in chunk_y_start..=chunk_y_end {
            for cx in chunk_x_start..=chunk_x_end {
                self.dirty_chunks.insert(ChunkCoord { x: cx, y: cy });
            }
        }

        trace!(
            "mark_region_dirty: ({}, {}) {}x{} -> {} dirty chunks",
            x,
            y,
            w,
            h,
            self.dirty_chunks.len()
        );
    }

    /// Get all dirty chunks and clear the dirty set
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkCoord> {
        self.dirty_chunks.drain().collect()
    }

    /// Check if any chunks are dirty
    #[inline]
    pub fn has_dirty_chunks(&self) -> bool {
        !self.dirty_chunks.is_empty()
    }

    #[inline]
    pub fn dirty_chunk_count(&self) -> usize {
        self.dirty_chunks.len()
    }

    /// Chunk containing a cell
    #[inline]
    pub fn chunk_of(&self, coord: GridCoord) -> Option<ChunkCoord> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        Some(ChunkCoord {
            x: coord.x as u32 / self.chunk_size,
            y: coord.y as u32 / self.chunk_size,
        })
    }

    /// Whether the chunk containing `coord` is dirty
    pub fn is_dirty(&self, coord: GridCoord) -> bool {
        self.chunk_of(coord)
            .is_some_and(|chunk| self.dirty_chunks.contains(&chunk))
    }
}

impl DirtySink for DirtyRegions {
    fn mark_dirty(&mut self, coord: GridCoord, width: u32, height: u32) {
        if coord.x < 0 || coord.y < 0 {
            return;
        }
        self.mark_region_dirty(coord.x as u32, coord.y as u32, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_mark_dirty_single_cell() {
        let mut regions = DirtyRegions::new(256, 256, 32);

        regions.mark_dirty(IVec2::new(0, 0), 1, 1);
        assert!(regions.has_dirty_chunks());
        assert_eq!(regions.dirty_chunk_count(), 1);

        regions.mark_dirty(IVec2::new(31, 31), 1, 1);
        assert_eq!(regions.dirty_chunk_count(), 1);

        regions.mark_dirty(IVec2::new(40, 40), 1, 1);
        assert_eq!(regions.dirty_chunk_count(), 2);

        let chunks = regions.take_dirty_chunks();
        assert_eq!(chunks.len(), 2);
        assert!(!regions.has_dirty_chunks());
    }

    #[test]
    fn test_mark_region_dirty_spans_chunks() {
        let mut regions = DirtyRegions::new(256, 256, 32);

        // Region crossing into four chunks
        regions.mark_region_dirty(20, 20, 20, 20);
        assert_eq!(regions.dirty_chunk_count(), 4);
    }

    #[test]
    fn test_mark_dirty_outside_is_ignored() {
        let mut regions = DirtyRegions::new(64, 64, 32);
        regions.mark_dirty(IVec2::new(-1, 3), 1, 1);
        regions.mark_dirty(IVec2::new(64, 0), 1, 1);
        regions.mark_region_dirty(0, 0, 0, 5);
        assert!(!regions.has_dirty_chunks());
    }

    #[test]
    fn test_from_config_uses_chunk_size() {
        let mut config = EditorConfig::new(100, 50);
        config.chunk_size = 16;
        let mut regions = DirtyRegions::from_config(&config);
        assert_eq!(regions.chunk_size(), 16);

        regions.mark_region_dirty(96, 48, 20, 20);
        assert_eq!(regions.dirty_chunk_count(), 1);
        assert!(regions.is_dirty(IVec2::new(99, 49)));
    }

    #[test]
    fn test_region_clamped_to_grid() {
        let mut regions = DirtyRegions::new(40, 40, 32);
        regions.mark_region_dirty(30, 30, 100, 100);
        assert_eq!(regions.dirty_chunk_count(), 4);
        assert!(regions.is_dirty(IVec2::new(39, 39)));
    }
}
