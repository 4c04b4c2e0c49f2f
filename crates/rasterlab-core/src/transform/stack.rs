//! Vertical stacking for before/after comparison.

use crate::error::{RasterError, RasterResult};
use crate::raster::{buffer_len, Raster};
use tracing::debug;

/// Stack `top` above `bottom` in a single raster twice as tall.
///
/// Rows `0..H` are copied from `top` and rows `H..2H` from `bottom`, column for
/// column. No color math is involved.
///
/// # Errors
///
/// Returns [`RasterError::DimensionMismatch`] if the two rasters differ in
/// width or height, or [`RasterError::TooLarge`] if the stacked raster
/// cannot be addressed.
pub fn stack_vertical(top: &Raster, bottom: &Raster) -> RasterResult<Raster> {
    let (width, height) = top.dimensions();
    if bottom.dimensions() != (width, height) {
        return Err(RasterError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width: bottom.width(),
            actual_height: bottom.height(),
        });
    }
    let too_large = || RasterError::TooLarge {
        width: width as u64,
        height: height as u64 * 2,
    };
    let stacked_height = height.checked_mul(2).ok_or_else(too_large)?;
    buffer_len(width, stacked_height).ok_or_else(too_large)?;
    debug!(width, height = stacked_height, "Stacking images");

    Ok(Raster::from_fn(width, stacked_height, |col, row| {
        if row < height {
            top.get_pixel(col, row)
        } else {
            bottom.get_pixel(col, row - height)
        }
    }))
}
