//! Whole-image transforms: rotation, scaling, stacking and blending.
//!
//! Unlike the filters in [`crate::filters`], these may change the output
//! dimensions or read source pixels from a different coordinate.
//!
//! # Coordinate System
//!
//! - `(col, row)` with origin at the top-left corner
//! - Rotation is clockwise in 90-degree steps; negative turns are
//!   counter-clockwise
//! - Scale factors multiply the source dimensions and are truncated

mod blend;
mod rotation;
mod scale;
mod stack;

pub use blend::blend_centered;
pub use rotation::{rotate_by_90, rotate_by_degrees, rotate_by_turns, rotate_quarter_turns};
pub use scale::{apply_nearest_scale, compute_scaled_dimensions};
pub use stack::stack_vertical;
