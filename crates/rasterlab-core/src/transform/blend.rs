//! Centered layer blending.
//!
//! A layer is positioned so its center coincides with the base image's
//! center. Where the two overlap, pixels are mixed by `opacity`; elsewhere
//! the base shows through unchanged. A layer larger than the base is cropped
//! evenly on both sides.

use crate::error::{check_unit_factor, RasterResult};
use crate::raster::Raster;
use tracing::debug;

/// Blend `layer` over the center of `base`.
///
/// Output has the base's dimensions. Inside the overlap each pixel is
/// `base * (1 - opacity) + layer * opacity`.
///
/// # Errors
///
/// Returns [`RasterError::InvalidStrength`](crate::RasterError::InvalidStrength)
/// if `opacity` is not within 0.0..=1.0.
pub fn blend_centered(base: &Raster, layer: &Raster, opacity: f32) -> RasterResult<Raster> {
    let opacity = check_unit_factor("opacity", opacity)?;
    let (width, height) = base.dimensions();
    let (layer_w, layer_h) = layer.dimensions();
    debug!(width, height, layer_w, layer_h, opacity, "Blending layer");

    // Layer origin in base coordinates; negative when the layer is larger
    let offset_x = (width as i64 - layer_w as i64) / 2;
    let offset_y = (height as i64 - layer_h as i64) / 2;

    Ok(Raster::from_fn(width, height, |col, row| {
        let base_pixel = base.get_pixel(col, row);
        let lx = col as i64 - offset_x;
        let ly = row as i64 - offset_y;
        if (0..layer_w as i64).contains(&lx) && (0..layer_h as i64).contains(&ly) {
            base_pixel.mix(layer.get_pixel(lx as u32, ly as u32), opacity)
        } else {
            base_pixel
        }
    }))
}
