use crate::brush::BrushSpec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrushError {
    #[error("Invalid brush size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("Invalid outline thickness: {0}")]
    InvalidOutline(i32),
}

/// Validate a brush's parameters.
///
/// Sizes of one cell are accepted; they rasterize as squares.
pub fn validate_brush(brush: &BrushSpec) -> Result<(), BrushError> {
    if brush.width < 1 || brush.height < 1 {
        return Err(BrushError::InvalidSize {
            width: brush.width,
            height: brush.height,
        });
    }

    if brush.outline_thickness < 0 {
        return Err(BrushError::InvalidOutline(brush.outline_thickness));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushShape;

    #[test]
    fn test_validate_accepts_single_cell() {
        let brush = BrushSpec {
            shape: BrushShape::Round,
            width: 1,
            height: 1,
            outline: false,
            outline_thickness: 0,
        };
        assert_eq!(validate_brush(&brush), Ok(()));
    }

    #[test]
    fn test_validate_negative_outline() {
        let brush = BrushSpec {
            outline: true,
            outline_thickness: -2,
            ..Default::default()
        };
        assert_eq!(validate_brush(&brush), Err(BrushError::InvalidOutline(-2)));
    }
}
