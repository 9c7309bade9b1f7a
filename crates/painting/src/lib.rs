//! gridpaint - brush rasterization core for grid map editors
//!
//! This crate turns pointer drags into one-write-per-cell paint strokes:
//! - [`geometry`] - Bresenham lines, rectangle, sweep and ellipse enumeration
//! - [`brush`] - Brush shape and size, with degenerate-size handling
//! - [`stroke`] - Gesture state machine and per-stroke visited set
//! - [`raster`] - Per-shape footprints for a stroke segment
//! - [`applicator`] - Dedup, selection, undo record, write, dirty notify
//! - [`tool`] - Host-facing pointer handlers
//! - [`target`] - Collaborator traits the host implements
//! - [`grid`], [`history`], [`selection`], [`dirty`] - In-memory collaborators
//! - [`preview`] - Brush preview raster

pub mod applicator;
pub mod brush;
pub mod constants;
pub mod dirty;
pub mod geometry;
pub mod grid;
pub mod history;
pub mod preview;
pub mod raster;
pub mod selection;
pub mod stroke;
pub mod target;
pub mod tool;
pub mod types;
pub mod validation;

pub use applicator::*;
pub use brush::*;
pub use constants::*;
pub use dirty::*;
pub use grid::*;
pub use history::*;
pub use preview::*;
pub use raster::*;
pub use selection::*;
pub use stroke::*;
pub use target::*;
pub use tool::*;
pub use types::*;
pub use validation::*;
