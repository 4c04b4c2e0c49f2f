//! Grayscale and two-level threshold, both driven by the equal-weight channel
//! average.

use crate::pixel::Pixel;
use crate::raster::Raster;
use tracing::debug;

/// Average at or above which [`apply_threshold`] outputs white.
pub const THRESHOLD_MIDPOINT: f32 = 255.0 / 2.0;

/// Convert an image to grayscale by averaging the three channels.
pub fn apply_grayscale(image: &Raster) -> Raster {
    debug!(
        width = image.width(),
        height = image.height(),
        "Converting to grayscale"
    );
    image.map_pixels(|p| Pixel::gray(p.average()))
}

/// Map a pixel to pure black or pure white.
#[inline]
pub fn threshold_pixel(pixel: Pixel) -> Pixel {
    if pixel.average() >= THRESHOLD_MIDPOINT {
        Pixel::WHITE
    } else {
        Pixel::BLACK
    }
}

/// Binarize an image around the luminance midpoint.
pub fn apply_threshold(image: &Raster) -> Raster {
    debug!(
        width = image.width(),
        height = image.height(),
        "Applying threshold"
    );
    image.map_pixels(threshold_pixel)
}
