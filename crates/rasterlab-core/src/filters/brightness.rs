//! Uniform brighten and dim.
//!
//! Both filters are unconditional linear maps applied to every channel:
//! - Brighten: `255 - (255 - c) * factor` (keeps `factor` of the distance to white)
//! - Dim: `c * factor` (keeps `factor` of the distance to black)

use crate::error::{check_unit_factor, RasterResult};
use crate::pixel::Pixel;
use crate::raster::Raster;
use tracing::debug;

/// Default brighten factor: every channel moves 20% of the way to white.
pub const DEFAULT_BRIGHTEN_FACTOR: f32 = 0.8;

/// Default dim factor: every channel moves 20% of the way to black.
pub const DEFAULT_DIM_FACTOR: f32 = 0.8;

#[inline]
pub fn brighten_pixel(pixel: Pixel, factor: f32) -> Pixel {
    pixel.scale_toward_white(factor)
}

#[inline]
pub fn dim_pixel(pixel: Pixel, factor: f32) -> Pixel {
    pixel.scale(factor)
}

/// Brighten an image.
///
/// # Errors
///
/// Returns [`RasterError::InvalidStrength`](crate::RasterError::InvalidStrength)
/// if `factor` is not within 0.0..=1.0.
pub fn apply_brighten(image: &Raster, factor: f32) -> RasterResult<Raster> {
    let factor = check_unit_factor("brighten factor", factor)?;
    debug!(
        width = image.width(),
        height = image.height(),
        factor,
        "Brightening image"
    );
    Ok(image.map_pixels(|p| brighten_pixel(p, factor)))
}

/// Dim an image.
///
/// # Errors
///
/// Returns [`RasterError::InvalidStrength`](crate::RasterError::InvalidStrength)
/// if `factor` is not within 0.0..=1.0.
pub fn apply_dim(image: &Raster, factor: f32) -> RasterResult<Raster> {
    let factor = check_unit_factor("dim factor", factor)?;
    debug!(
        width = image.width(),
        height = image.height(),
        factor,
        "Dimming image"
    );
    Ok(image.map_pixels(|p| dim_pixel(p, factor)))
}
