//! Brush tool
//!
//! This module connects the paint core for the host UI:
//! - Pointer events come in via `on_pointer_down`, `on_pointer_move`, `on_pointer_up`
//! - The stroke tracker turns them into segments
//! - The rasterizer expands each segment into footprints
//! - The applicator commits footprints through the [`PaintTarget`]
//!
//! The brush and paint settings are read fresh for every segment, so the
//! host may change them mid-stroke.
//!
//! [`PaintTarget`]: crate::target::PaintTarget

mod pointer;

use image::RgbaImage;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::brush::BrushSpec;
use crate::preview::render_preview;
use crate::stroke::{StrokeState, StrokeTracker};
use crate::types::PaintSettings;

/// Brush tool state owned by the host editor
#[derive(Debug, Default)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct BrushTool {
    /// Current brush
    pub brush: BrushSpec,
    /// Mode, erase flag and style toggles for solid fills
    pub settings: PaintSettings,
    /// Gesture state and visited set
    pub(crate) tracker: StrokeTracker,
}

impl BrushTool {
    pub fn new(brush: BrushSpec, settings: PaintSettings) -> Self {
        Self {
            brush,
            settings,
            tracker: StrokeTracker::new(),
        }
    }

    /// Set the brush; applies from the next segment on
    pub fn set_brush(&mut self, brush: BrushSpec) {
        self.brush = brush;
    }

    pub fn brush(&self) -> &BrushSpec {
        &self.brush
    }

    pub fn set_settings(&mut self, settings: PaintSettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.settings
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.tracker.is_stroking()
    }

    /// State of the stroke in progress, if any
    pub fn stroke(&self) -> Option<&StrokeState> {
        self.tracker.stroke()
    }

    /// Preview image of the current brush
    pub fn preview(&self) -> RgbaImage {
        render_preview(&self.brush)
    }
}
