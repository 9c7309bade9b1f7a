//! Brush description
//!
//! A [`BrushSpec`] is read fresh for every segment of a stroke, so hosts may
//! change shape or size mid-drag and the change applies to the next segment.

use glam::IVec2;
use gridpaint_config::{DEFAULT_BRUSH_HEIGHT, DEFAULT_BRUSH_WIDTH, DEFAULT_OUTLINE_THICKNESS};
use serde::{Deserialize, Serialize};

use crate::validation::{BrushError, validate_brush};

/// Brush footprint shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BrushShape {
    Square = 0,
    #[default]
    Round = 1,
    /// Diagonal line falling left to right
    SlopeLeft = 2,
    /// Diagonal line rising left to right
    SlopeRight = 3,
}

/// Brush configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSpec {
    /// Nominal shape. See [`BrushSpec::effective_shape`].
    pub shape: BrushShape,
    /// Full width in cells
    pub width: i32,
    /// Full height in cells
    pub height: i32,
    /// Paint a hollow outline instead of a solid area (square and round only)
    pub outline: bool,
    /// Border thickness used in outline mode
    pub outline_thickness: i32,
}

impl Default for BrushSpec {
    fn default() -> Self {
        Self {
            shape: BrushShape::default(),
            width: DEFAULT_BRUSH_WIDTH,
            height: DEFAULT_BRUSH_HEIGHT,
            outline: false,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
        }
    }
}

impl BrushSpec {
    /// Create a solid brush, validating its size
    pub fn new(shape: BrushShape, width: i32, height: i32) -> Result<Self, BrushError> {
        let brush = Self {
            shape,
            width,
            height,
            outline: false,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
        };
        validate_brush(&brush)?;
        Ok(brush)
    }

    /// Switch to outline mode with the given border thickness
    pub fn with_outline(mut self, thickness: i32) -> Result<Self, BrushError> {
        self.outline = true;
        self.outline_thickness = thickness;
        validate_brush(&self)?;
        Ok(self)
    }

    /// Validate the brush parameters
    pub fn validate(&self) -> Result<(), BrushError> {
        validate_brush(self)
    }

    /// Shape actually rasterized. Brushes one cell thin in either axis
    /// always paint as squares.
    pub fn effective_shape(&self) -> BrushShape {
        if self.width <= 1 || self.height <= 1 {
            BrushShape::Square
        } else {
            self.shape
        }
    }

    /// Full extents as a vector
    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Half extents (integer division)
    #[inline]
    pub fn half_size(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Outline applies only to area shapes
    pub fn is_hollow(&self) -> bool {
        self.outline
            && matches!(
                self.effective_shape(),
                BrushShape::Square | BrushShape::Round
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_spec_default() {
        let brush = BrushSpec::default();
        assert_eq!(brush.shape, BrushShape::Round);
        assert_eq!(brush.width, DEFAULT_BRUSH_WIDTH);
        assert_eq!(brush.height, DEFAULT_BRUSH_HEIGHT);
        assert!(!brush.outline);
        assert!(brush.validate().is_ok());
    }

    #[test]
    fn test_degenerate_size_is_square() {
        let thin = BrushSpec::new(BrushShape::Round, 1, 10).unwrap();
        assert_eq!(thin.effective_shape(), BrushShape::Square);

        let flat = BrushSpec::new(BrushShape::SlopeLeft, 10, 1).unwrap();
        assert_eq!(flat.effective_shape(), BrushShape::Square);

        let round = BrushSpec::new(BrushShape::Round, 2, 2).unwrap();
        assert_eq!(round.effective_shape(), BrushShape::Round);
    }

    #[test]
    fn test_outline_only_hollows_area_shapes() {
        let square = BrushSpec::new(BrushShape::Square, 5, 5)
            .unwrap()
            .with_outline(1)
            .unwrap();
        assert!(square.is_hollow());

        let slope = BrushSpec::new(BrushShape::SlopeRight, 5, 5)
            .unwrap()
            .with_outline(1)
            .unwrap();
        assert!(!slope.is_hollow());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(BrushSpec::new(BrushShape::Square, 0, 3).is_err());
        assert!(BrushSpec::new(BrushShape::Square, 3, -1).is_err());
    }

    #[test]
    fn test_brush_spec_serde() {
        let brush = BrushSpec::new(BrushShape::SlopeLeft, 6, 4).unwrap();
        let json = serde_json::to_string(&brush).unwrap();
        let back: BrushSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, brush);
    }
}
