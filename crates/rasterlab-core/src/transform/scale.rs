//! Nearest-neighbor scaling with independent horizontal and vertical factors.
//!
//! Destination `(col, row)` samples source
//! `(floor(col / x_scale), floor(row / y_scale))`. There is no interpolation:
//! upscaling produces blocks and downscaling drops pixels.

use crate::error::{RasterError, RasterResult};
use crate::raster::{buffer_len, Raster};
use tracing::debug;

/// Compute the output dimensions for the given scale factors.
///
/// Each dimension is `trunc(factor * size)`.
///
/// # Errors
///
/// Returns [`RasterError::InvalidScaleFactor`] if either factor is not finite
/// and positive, a resulting dimension doesn't fit in a `u32`, or the output
/// buffer would overflow `usize`.
pub fn compute_scaled_dimensions(
    width: u32,
    height: u32,
    x_scale: f64,
    y_scale: f64,
) -> RasterResult<(u32, u32)> {
    let invalid = || RasterError::InvalidScaleFactor {
        x: x_scale,
        y: y_scale,
    };

    if !(x_scale.is_finite() && x_scale > 0.0 && y_scale.is_finite() && y_scale > 0.0) {
        return Err(invalid());
    }

    let new_w = (width as f64 * x_scale).trunc();
    let new_h = (height as f64 * y_scale).trunc();
    if new_w > u32::MAX as f64 || new_h > u32::MAX as f64 {
        return Err(invalid());
    }
    let (new_w, new_h) = (new_w as u32, new_h as u32);
    buffer_len(new_w, new_h).ok_or_else(invalid)?;

    Ok((new_w, new_h))
}

/// Scale an image with nearest-neighbor sampling.
///
/// # Arguments
///
/// * `image` - Source image
/// * `x_scale` - Horizontal factor (e.g. 2.0 doubles the width)
/// * `y_scale` - Vertical factor
///
/// # Errors
///
/// See [`compute_scaled_dimensions`].
pub fn apply_nearest_scale(image: &Raster, x_scale: f64, y_scale: f64) -> RasterResult<Raster> {
    let (src_w, src_h) = image.dimensions();
    let (dst_w, dst_h) = compute_scaled_dimensions(src_w, src_h, x_scale, y_scale)?;
    debug!(
        from_w = src_w,
        from_h = src_h,
        new_w = dst_w,
        new_h = dst_h,
        x_scale,
        y_scale,
        "Scaling with nearest neighbor"
    );

    Ok(Raster::from_fn(dst_w, dst_h, |col, row| {
        // Clamp against float rounding at the far edge
        let src_x = ((col as f64 / x_scale) as u32).min(src_w - 1);
        let src_y = ((row as f64 / y_scale) as u32).min(src_h - 1);
        image.get_pixel(src_x, src_y)
    }))
}
