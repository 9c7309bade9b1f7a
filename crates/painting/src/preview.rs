//! Brush preview raster
//!
//! Renders the brush footprint into a small RGBA image the host can draw
//! under the cursor. This is a visualization aid only; painting never reads it.

use glam::IVec2;
use image::{Rgba, RgbaImage};

use crate::brush::{BrushShape, BrushSpec};
use crate::constants::PREVIEW_COLOR;
use crate::geometry::{ellipse_centered, line};
use crate::types::GridCoord;

/// Render the brush into a `(width + 1) x (height + 1)` image
pub fn render_preview(brush: &BrushSpec) -> RgbaImage {
    let width = brush.width.max(1);
    let height = brush.height.max(1);
    let mut image = RgbaImage::new(width as u32 + 1, height as u32 + 1);

    let cells: Vec<GridCoord> = match brush.effective_shape() {
        BrushShape::Square => (0..height)
            .flat_map(|y| (0..width).map(move |x| IVec2::new(x, y)))
            .collect(),
        BrushShape::SlopeLeft => line(IVec2::ZERO, IVec2::new(width, height)),
        BrushShape::SlopeRight => line(IVec2::new(0, height), IVec2::new(width, 0)),
        BrushShape::Round => {
            let half = IVec2::new(width / 2, height / 2);
            ellipse_centered(half, half)
        }
    };

    let color = Rgba(PREVIEW_COLOR);
    for cell in cells {
        if cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < image.width()
            && (cell.y as u32) < image.height()
        {
            image.put_pixel(cell.x as u32, cell.y as u32, color);
        }
    }

    image
}
