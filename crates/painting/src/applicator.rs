//! Paint applicator
//!
//! Commits rasterized footprints through the collaborators. A cell is
//! committed at most once per stroke: the first footprint that reaches it
//! wins, later ones skip it. For each committed cell the order is always
//! undo record, grid write(s), dirty notify.

use tracing::trace;

use crate::raster::Footprint;
use crate::stroke::StrokeState;
use crate::target::PaintTarget;
use crate::types::{GridCoord, LayerMask, PaintMode, PaintSettings};

/// Apply footprints in order, returning the number of cells committed
pub fn apply_footprints(
    footprints: &[Footprint],
    settings: &PaintSettings,
    stroke: &mut StrokeState,
    target: &mut PaintTarget<'_>,
) -> usize {
    footprints
        .iter()
        .map(|footprint| apply_footprint(footprint, settings, stroke, target))
        .sum()
}

/// Apply a single footprint, returning the number of cells committed
pub fn apply_footprint(
    footprint: &Footprint,
    settings: &PaintSettings,
    stroke: &mut StrokeState,
    target: &mut PaintTarget<'_>,
) -> usize {
    let committed = match footprint {
        Footprint::Solid(cells) => fill_solid(cells, settings, stroke, target),
        Footprint::Hollow { border, interior } => {
            fill_hollow(border, interior, settings, stroke, target)
        }
    };

    if committed > 0 {
        trace!("apply_footprint: {} of {} cells committed", committed, footprint.len());
    }
    committed
}

fn fill_solid(
    cells: &[GridCoord],
    settings: &PaintSettings,
    stroke: &mut StrokeState,
    target: &mut PaintTarget<'_>,
) -> usize {
    let layers = settings.style.mask();
    let mut committed = 0;

    for &coord in cells {
        if !claim(coord, stroke, target) {
            continue;
        }
        record(coord, target);
        target.grid.write_cell(coord, settings.mode, layers, settings.erase);
        target.dirty.mark_dirty(coord, 1, 1);
        committed += 1;
    }

    committed
}

/// Border gets the tile layer only; interior is cleared, then the wall is
/// re-applied when wall style is active.
fn fill_hollow(
    border: &[GridCoord],
    interior: &[GridCoord],
    settings: &PaintSettings,
    stroke: &mut StrokeState,
    target: &mut PaintTarget<'_>,
) -> usize {
    let style = settings.style;
    let mut committed = 0;

    if style.tile_active {
        for &coord in border {
            if !claim(coord, stroke, target) {
                continue;
            }
            record(coord, target);
            target
                .grid
                .write_cell(coord, PaintMode::TileAndWall, LayerMask::TILE, false);
            target.dirty.mark_dirty(coord, 1, 1);
            committed += 1;
        }
    }

    for &coord in interior {
        if !claim(coord, stroke, target) {
            continue;
        }
        record(coord, target);
        target
            .grid
            .write_cell(coord, PaintMode::TileAndWall, LayerMask::BOTH, true);
        if style.wall_active {
            target
                .grid
                .write_cell(coord, PaintMode::TileAndWall, LayerMask::WALL, false);
        }
        target.dirty.mark_dirty(coord, 1, 1);
        committed += 1;
    }

    committed
}

/// Bounds, dedup and selection checks. Marks the cell visited even when the
/// selection rejects it.
#[inline]
fn claim(coord: GridCoord, stroke: &mut StrokeState, target: &PaintTarget<'_>) -> bool {
    target.grid.valid_location(coord) && stroke.visit(coord) && target.selection.is_paintable(coord)
}

#[inline]
fn record(coord: GridCoord, target: &mut PaintTarget<'_>) {
    if let Some(before) = target.grid.cell(coord) {
        target.undo.record_pre_state(coord, before);
    }
}
