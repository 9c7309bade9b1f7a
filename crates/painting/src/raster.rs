//! Shape rasterizer
//!
//! Turns one stroke segment into the footprints the applicator commits.
//! The brush shape is dispatched once per segment.

use std::collections::HashSet;

use glam::IVec2;
use tracing::trace;

use crate::brush::{BrushShape, BrushSpec};
use crate::geometry::{ellipse_centered, line, rectangle_centered, rectangle_sweep};
use crate::types::GridCoord;

/// Cells produced for one brush sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footprint {
    /// Every cell painted the same way
    Solid(Vec<GridCoord>),
    /// Outline: border painted, interior cleared
    Hollow {
        border: Vec<GridCoord>,
        interior: Vec<GridCoord>,
    },
}

impl Footprint {
    /// Split an outer area into border and interior.
    ///
    /// The border keeps outer order and the interior keeps inner order;
    /// together they partition `outer` exactly.
    pub fn hollow(outer: Vec<GridCoord>, inner: Vec<GridCoord>) -> Self {
        let outer_set: HashSet<GridCoord> = outer.iter().copied().collect();
        let inner_set: HashSet<GridCoord> = inner.iter().copied().collect();

        let border = outer.into_iter().filter(|p| !inner_set.contains(p)).collect();
        let interior = inner.into_iter().filter(|p| outer_set.contains(p)).collect();

        Footprint::Hollow { border, interior }
    }

    /// Number of candidate cells in this footprint
    pub fn len(&self) -> usize {
        match self {
            Footprint::Solid(cells) => cells.len(),
            Footprint::Hollow { border, interior } => border.len() + interior.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells, border before interior
    pub fn cells(&self) -> impl Iterator<Item = &GridCoord> {
        let (first, second) = match self {
            Footprint::Solid(cells) => (cells.as_slice(), [].as_slice()),
            Footprint::Hollow { border, interior } => (border.as_slice(), interior.as_slice()),
        };
        first.iter().chain(second.iter())
    }
}

/// Rasterize the segment `from -> to` with the given brush.
///
/// Footprints are returned in paint order.
pub fn rasterize(brush: &BrushSpec, from: GridCoord, to: GridCoord) -> Vec<Footprint> {
    let points = line(from, to);

    let footprints = match brush.effective_shape() {
        BrushShape::Square => rasterize_square(brush, &points),
        BrushShape::Round => points.iter().map(|&p| round_footprint(brush, p)).collect(),
        shape @ (BrushShape::SlopeLeft | BrushShape::SlopeRight) => points
            .iter()
            .map(|&p| Footprint::Solid(slope_cells(shape, brush, p)))
            .collect(),
    };

    trace!(
        "rasterize {:?} ({}, {}) -> ({}, {}): {} footprints",
        brush.effective_shape(),
        from.x,
        from.y,
        to.x,
        to.y,
        footprints.len()
    );

    footprints
}

fn rasterize_square(brush: &BrushSpec, points: &[GridCoord]) -> Vec<Footprint> {
    let size = brush.size();
    let inner_size = size - IVec2::splat(2 * brush.outline_thickness);

    // Single tap: one rectangle at the point, the only place an outline applies
    if let [point] = points {
        let outer = rectangle_centered(*point, size);
        let footprint = if brush.is_hollow() {
            Footprint::hollow(outer, rectangle_centered(*point, inner_size))
        } else {
            Footprint::Solid(outer)
        };
        return vec![footprint];
    }

    // Drag sweeps are always solid
    points
        .windows(2)
        .map(|pair| Footprint::Solid(rectangle_sweep(pair[0], pair[1], size)))
        .collect()
}

fn round_footprint(brush: &BrushSpec, point: GridCoord) -> Footprint {
    let radii = brush.half_size();
    let outer = ellipse_centered(point, radii);

    if brush.is_hollow() {
        let inner_radii = radii - IVec2::splat(2 * brush.outline_thickness);
        Footprint::hollow(outer, ellipse_centered(point, inner_radii))
    } else {
        Footprint::Solid(outer)
    }
}

/// One diagonal line through `point`, spanning the brush extents
fn slope_cells(shape: BrushShape, brush: &BrushSpec, point: GridCoord) -> Vec<GridCoord> {
    let half = brush.half_size();
    let (left, right) = match shape {
        BrushShape::SlopeRight => (
            IVec2::new(point.x - half.x, point.y + half.y),
            IVec2::new(point.x + half.x, point.y - half.y),
        ),
        _ => (
            IVec2::new(point.x - half.x, point.y - half.y),
            IVec2::new(point.x + half.x, point.y + half.y),
        ),
    };
    line(left, right)
}
