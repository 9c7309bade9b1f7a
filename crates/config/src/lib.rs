//! Shared configuration for gridpaint
//!
//! This crate provides the single source of truth for brush defaults,
//! grid dimensions and the bookkeeping limits shared by the painting core
//! and its host editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default brush width in cells
pub const DEFAULT_BRUSH_WIDTH: i32 = 20;

/// Default brush height in cells
pub const DEFAULT_BRUSH_HEIGHT: i32 = 20;

/// Default outline thickness in cells
pub const DEFAULT_OUTLINE_THICKNESS: i32 = 1;

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: u32 = 4200;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: u32 = 1200;

/// Default dirty-tracking chunk edge, in cells
pub const DEFAULT_CHUNK_SIZE: u32 = 32;

/// Default number of strokes kept on the undo stack
pub const DEFAULT_UNDO_LEVELS: usize = 50;

/// Errors raised while loading an [`EditorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(u32),
}

/// Editor configuration for the grid and paint bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct EditorConfig {
    /// Grid width in cells
    pub grid_width: u32,
    /// Grid height in cells
    pub grid_height: u32,
    /// Edge length of a dirty-tracking chunk
    pub chunk_size: u32,
    /// Maximum strokes kept for undo
    pub undo_levels: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            undo_levels: DEFAULT_UNDO_LEVELS,
        }
    }
}

impl EditorConfig {
    /// Create a config for a grid of the given size with default limits
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a usable grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.grid_height, DEFAULT_GRID_HEIGHT);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.undo_levels, DEFAULT_UNDO_LEVELS);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EditorConfig::from_json(r#"{ "grid_width": 64, "grid_height": 32 }"#).unwrap();
        assert_eq!(config.grid_width, 64);
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.cell_count(), 64 * 32);
    }

    #[test]
    fn test_from_json_rejects_empty_grid() {
        let err = EditorConfig::from_json(r#"{ "grid_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn test_from_json_rejects_zero_chunk() {
        let err = EditorConfig::from_json(r#"{ "chunk_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChunkSize(0)));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = EditorConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
