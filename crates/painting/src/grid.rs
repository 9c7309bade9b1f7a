//! In-memory tile+wall grid

use gridpaint_config::EditorConfig;
use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::constants::{DEFAULT_TILE_ID, DEFAULT_WALL_ID};
use crate::target::TileGrid;
use crate::types::{Cell, GridCoord, LayerMask, PaintMode};

/// Tile and wall ids the brush currently paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePicker {
    pub tile: u16,
    pub wall: u16,
}

impl Default for TilePicker {
    fn default() -> Self {
        Self {
            tile: DEFAULT_TILE_ID,
            wall: DEFAULT_WALL_ID,
        }
    }
}

/// Dense row-major grid of cells
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct TileMap {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    picker: TilePicker,
}

impl TileMap {
    /// Create an empty grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            picker: TilePicker::default(),
        }
    }

    /// Create an empty grid sized from the editor config
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.grid_width, config.grid_height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn picker(&self) -> TilePicker {
        self.picker
    }

    pub fn set_picker(&mut self, picker: TilePicker) {
        self.picker = picker;
    }

    /// Fill every cell with the same contents
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count cells matching a predicate
    pub fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(c)).count()
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.valid_location(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }
}

impl TileGrid for TileMap {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn cell(&self, coord: GridCoord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    fn write_cell(&mut self, coord: GridCoord, mode: PaintMode, layers: LayerMask, erase: bool) {
        let Some(index) = self.index(coord) else {
            return;
        };
        let picker = self.picker;
        let cell = &mut self.cells[index];

        if mode.includes_tile() && layers.tile {
            cell.tile = if erase { None } else { Some(picker.tile) };
        }
        if mode.includes_wall() && layers.wall {
            cell.wall = if erase { None } else { Some(picker.wall) };
        }
    }

    fn restore_cell(&mut self, coord: GridCoord, cell: Cell) {
        if let Some(index) = self.index(coord) {
            self.cells[index] = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_tile_map_creation() {
        let map = TileMap::new(20, 10);
        assert_eq!(map.dimensions(), (20, 10));
        assert_eq!(map.count_cells(|c| *c == Cell::default()), 200);
    }

    #[test]
    fn test_valid_location() {
        let map = TileMap::new(4, 3);
        assert!(map.valid_location(IVec2::new(0, 0)));
        assert!(map.valid_location(IVec2::new(3, 2)));
        assert!(!map.valid_location(IVec2::new(4, 0)));
        assert!(!map.valid_location(IVec2::new(0, 3)));
        assert!(!map.valid_location(IVec2::new(-1, 1)));
        assert_eq!(map.cell(IVec2::new(-1, 1)), None);
    }

    #[test]
    fn test_write_cell_respects_mode_and_mask() {
        let mut map = TileMap::new(4, 4);
        map.set_picker(TilePicker { tile: 7, wall: 3 });
        let p = IVec2::new(1, 1);

        map.write_cell(p, PaintMode::TileAndWall, LayerMask::TILE, false);
        assert_eq!(map.cell(p), Some(Cell { tile: Some(7), wall: None }));

        map.write_cell(p, PaintMode::TileOnly, LayerMask::BOTH, false);
        assert_eq!(map.cell(p).unwrap().wall, None);

        map.write_cell(p, PaintMode::WallOnly, LayerMask::BOTH, false);
        assert_eq!(map.cell(p), Some(Cell { tile: Some(7), wall: Some(3) }));

        map.write_cell(p, PaintMode::TileAndWall, LayerMask::BOTH, true);
        assert_eq!(map.cell(p), Some(Cell::default()));
    }

    #[test]
    fn test_write_outside_is_ignored() {
        let mut map = TileMap::new(2, 2);
        map.write_cell(IVec2::new(5, 5), PaintMode::TileAndWall, LayerMask::BOTH, false);
        map.restore_cell(IVec2::new(-1, 0), Cell { tile: Some(1), wall: None });
        assert_eq!(map.count_cells(|c| *c == Cell::default()), 4);
    }

    #[test]
    fn test_from_config() {
        let map = TileMap::from_config(&EditorConfig::new(16, 8));
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 8);
    }
}
