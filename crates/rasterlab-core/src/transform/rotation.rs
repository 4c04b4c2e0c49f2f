//! Lossless rotation in 90-degree steps.
//!
//! A single clockwise quarter turn maps source `(col, row)` to destination
//! `(H - 1 - row, col)` on a canvas with swapped dimensions. Half and
//! three-quarter turns are built by repeating that step.

use crate::error::{RasterError, RasterResult};
use crate::raster::Raster;
use tracing::debug;

/// Rotate an image 90 degrees clockwise.
///
/// The output is `height` wide and `width` tall.
pub fn rotate_by_90(image: &Raster) -> Raster {
    let (width, height) = image.dimensions();
    debug!(width, height, "Rotating 90 degrees clockwise");

    // Inverse mapping: destination (x, y) reads source (y, H - 1 - x)
    Raster::from_fn(height, width, |x, y| image.get_pixel(y, height - 1 - x))
}

/// Rotate clockwise by a signed number of quarter turns.
///
/// Negative values rotate counter-clockwise. Any multiple of four returns a
/// copy of the input.
pub fn rotate_quarter_turns(image: &Raster, turns: i64) -> Raster {
    let steps = turns.rem_euclid(4);
    debug!(turns, steps, "Rotating by quarter turns");

    let mut rotated = image.clone();
    for _ in 0..steps {
        rotated = rotate_by_90(&rotated);
    }
    rotated
}

/// Rotate clockwise by an angle in degrees.
///
/// # Errors
///
/// Returns [`RasterError::InvalidAngle`] if `degrees` is not a multiple of 90.
pub fn rotate_by_degrees(image: &Raster, degrees: i64) -> RasterResult<Raster> {
    if degrees % 90 != 0 {
        return Err(RasterError::InvalidAngle(degrees as f64));
    }
    Ok(rotate_quarter_turns(image, degrees.rem_euclid(360) / 90))
}

/// Rotate clockwise by `number * 90` degrees.
///
/// The angle is truncated to whole degrees before the multiple-of-90 check,
/// so `1.0` is a quarter turn, `4.0` is the identity and `0.5` (45 degrees)
/// is rejected.
///
/// # Errors
///
/// Returns [`RasterError::InvalidAngle`] if `number` is not finite or the
/// truncated angle is not a multiple of 90.
pub fn rotate_by_turns(image: &Raster, number: f64) -> RasterResult<Raster> {
    let angle = (number * 90.0).trunc();
    if !angle.is_finite() || angle.abs() > i64::MAX as f64 {
        return Err(RasterError::InvalidAngle(angle));
    }
    rotate_by_degrees(image, angle as i64)
}
