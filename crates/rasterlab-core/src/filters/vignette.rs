//! Radial brightness falloff from the image center.

use crate::raster::Raster;
use tracing::debug;

/// Brightness multiplier at `(col, row)`.
///
/// Formula: `(H - d) / H` where `d` is the Euclidean distance from the pixel
/// to `(W / 2, H / 2)`. The factor is 1.0 at the center and drops linearly
/// with distance; it goes negative once `d > H`, which happens in the far
/// corners of wide images.
#[inline]
pub fn vignette_factor(col: u32, row: u32, width: u32, height: u32) -> f32 {
    let h = height as f32;
    let dx = col as f32 - width as f32 / 2.0;
    let dy = row as f32 - h / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();
    (h - distance) / h
}

/// Darken an image toward its edges.
///
/// Every channel is multiplied by [`vignette_factor`]. Negative products clamp
/// to 0 when written.
pub fn apply_vignette(image: &Raster) -> Raster {
    let (width, height) = image.dimensions();
    debug!(width, height, "Applying vignette");

    Raster::from_fn(width, height, |col, row| {
        image
            .get_pixel(col, row)
            .scale(vignette_factor(col, row, width, height))
    })
}
