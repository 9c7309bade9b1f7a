/// Preview fill color, RGBA (translucent blue).
pub const PREVIEW_COLOR: [u8; 4] = [0, 90, 255, 127];

/// Tile id written by a fresh picker.
pub const DEFAULT_TILE_ID: u16 = 0;

/// Wall id written by a fresh picker.
pub const DEFAULT_WALL_ID: u16 = 1;
