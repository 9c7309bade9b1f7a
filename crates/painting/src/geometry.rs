//! Grid geometry primitives
//!
//! Pure functions producing grid coordinates. None of them know about grid
//! bounds; out-of-range cells are dropped later by the applicator.

use std::collections::HashSet;

use glam::IVec2;

use crate::types::GridCoord;

/// Bresenham's line algorithm - every cell from `a` to `b`, inclusive.
///
/// Consecutive points differ by at most one in each axis and the result has
/// `max(|dx|, |dy|) + 1` points.
pub fn line(a: GridCoord, b: GridCoord) -> Vec<GridCoord> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut x = a.x;
    let mut y = a.y;

    loop {
        points.push(IVec2::new(x, y));

        if x == b.x && y == b.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// All cells of a `size.x` x `size.y` rectangle centered on `center`.
///
/// The rectangle starts at `center - size / 2`, so an inner rectangle shrunk
/// by `2t` on each axis always nests exactly `t` cells inside the outer one.
/// Non-positive sizes yield no cells.
pub fn rectangle_centered(center: GridCoord, size: IVec2) -> Vec<GridCoord> {
    if size.x <= 0 || size.y <= 0 {
        return Vec::new();
    }

    let origin = center - size / 2;
    let mut points = Vec::with_capacity((size.x * size.y) as usize);
    for y in origin.y..origin.y + size.y {
        for x in origin.x..origin.x + size.x {
            points.push(IVec2::new(x, y));
        }
    }
    points
}

/// Union of centered rectangles swept along the line from `start` to `end`.
///
/// Cells keep the order in which the sweep first reaches them.
pub fn rectangle_sweep(start: GridCoord, end: GridCoord, size: IVec2) -> Vec<GridCoord> {
    dedup_in_order(
        line(start, end)
            .into_iter()
            .flat_map(|point| rectangle_centered(point, size)),
    )
}

/// All cells inside the axis-aligned ellipse centered on `center`.
///
/// A zero radius collapses that axis to a line; a negative radius yields no
/// cells. The result only grows as either radius grows, so a smaller
/// ellipse with the same center is always contained in a larger one.
pub fn ellipse_centered(center: GridCoord, radii: IVec2) -> Vec<GridCoord> {
    if radii.x < 0 || radii.y < 0 {
        return Vec::new();
    }

    let rx = radii.x as f64;
    let ry = radii.y as f64;
    let mut points = Vec::new();

    for dy in -radii.y..=radii.y {
        let half = if radii.y == 0 {
            radii.x
        } else {
            let t = dy as f64 / ry;
            (rx * (1.0 - t * t).max(0.0).sqrt() + 1e-9).floor() as i32
        };

        for dx in -half..=half {
            points.push(IVec2::new(center.x + dx, center.y + dy));
        }
    }

    points
}

/// Drop repeated cells, keeping first occurrences in order
pub(crate) fn dedup_in_order(points: impl IntoIterator<Item = GridCoord>) -> Vec<GridCoord> {
    let mut seen = HashSet::new();
    points.into_iter().filter(|p| seen.insert(*p)).collect()
}
