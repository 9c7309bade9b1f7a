use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single grid cell position. Valid iff `0 <= x < width` and `0 <= y < height`.
pub type GridCoord = IVec2;

/// Which layers a paint operation is allowed to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum PaintMode {
    TileOnly = 0,
    WallOnly = 1,
    #[default]
    TileAndWall = 2,
}

impl PaintMode {
    #[inline]
    pub fn includes_tile(self) -> bool {
        matches!(self, PaintMode::TileOnly | PaintMode::TileAndWall)
    }

    #[inline]
    pub fn includes_wall(self) -> bool {
        matches!(self, PaintMode::WallOnly | PaintMode::TileAndWall)
    }
}

/// Layer restriction passed explicitly with each grid write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask {
    pub tile: bool,
    pub wall: bool,
}

impl LayerMask {
    pub const TILE: Self = Self { tile: true, wall: false };
    pub const WALL: Self = Self { tile: false, wall: true };
    pub const BOTH: Self = Self { tile: true, wall: true };
}

/// Tile/wall style toggles of the paint tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub tile_active: bool,
    pub wall_active: bool,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            tile_active: true,
            wall_active: false,
        }
    }
}

impl PaintStyle {
    /// Layers enabled by the current style toggles
    pub fn mask(self) -> LayerMask {
        LayerMask {
            tile: self.tile_active,
            wall: self.wall_active,
        }
    }
}

/// Settings used for every solid-fill write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaintSettings {
    pub mode: PaintMode,
    pub erase: bool,
    pub style: PaintStyle,
}

/// Contents of one grid cell, used as the pre-change snapshot for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Cell {
    pub tile: Option<u16>,
    pub wall: Option<u16>,
}

/// A pointer sample delivered by the host, already mapped to a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Cell under the pointer
    pub cell: GridCoord,
    pub left_pressed: bool,
    pub right_pressed: bool,
    /// Either shift key held
    pub shift_held: bool,
}

impl PointerEvent {
    /// A sample with only the left button held
    pub fn left(x: i32, y: i32) -> Self {
        Self {
            cell: GridCoord::new(x, y),
            left_pressed: true,
            right_pressed: false,
            shift_held: false,
        }
    }

    /// A sample with only the right button held
    pub fn right(x: i32, y: i32) -> Self {
        Self {
            cell: GridCoord::new(x, y),
            left_pressed: false,
            right_pressed: true,
            shift_held: false,
        }
    }

    /// A sample with no button held, as delivered with the final release
    pub fn released(x: i32, y: i32) -> Self {
        Self {
            cell: GridCoord::new(x, y),
            left_pressed: false,
            right_pressed: false,
            shift_held: false,
        }
    }

    pub fn with_shift(mut self, shift_held: bool) -> Self {
        self.shift_held = shift_held;
        self
    }

    #[inline]
    pub fn any_pressed(&self) -> bool {
        self.left_pressed || self.right_pressed
    }
}
