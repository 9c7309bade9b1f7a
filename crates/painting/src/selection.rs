//! Selection masks

use std::collections::HashSet;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::target::Selection;
use crate::types::GridCoord;

/// Which cells the brush may paint
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub enum SelectionMask {
    /// No active selection; everything is paintable
    #[default]
    All,
    /// Inclusive rectangle
    Rect { min: GridCoord, max: GridCoord },
    /// Arbitrary cell set
    Cells(HashSet<GridCoord>),
}

impl SelectionMask {
    /// Rectangle spanning two corners in any order
    pub fn rect(a: GridCoord, b: GridCoord) -> Self {
        SelectionMask::Rect {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl Selection for SelectionMask {
    fn is_paintable(&self, coord: GridCoord) -> bool {
        match self {
            SelectionMask::All => true,
            SelectionMask::Rect { min, max } => {
                coord.x >= min.x && coord.y >= min.y && coord.x <= max.x && coord.y <= max.y
            }
            SelectionMask::Cells(cells) => cells.contains(&coord),
        }
    }
}
