//! Color-dominance quantization to a five-color palette.
//!
//! Each pixel becomes white, black, or the primary color of its largest
//! channel. Rules, checked in order:
//! 1. `r + g + b >= 550` → white
//! 2. `r + g + b <= 150` → black
//! 3. `r` is the maximum → red
//! 4. `g` is the maximum → green
//! 5. otherwise → blue
//!
//! Ties therefore resolve red first, then green: a gray midtone becomes red.

use crate::pixel::Pixel;
use crate::raster::Raster;
use tracing::debug;

/// Channel sum at or above which a pixel becomes white.
pub const WHITE_SUM_THRESHOLD: f32 = 550.0;

/// Channel sum at or below which a pixel becomes black.
pub const BLACK_SUM_THRESHOLD: f32 = 150.0;

#[inline]
pub fn quantize_pixel(pixel: Pixel) -> Pixel {
    let sum = pixel.sum();
    if sum >= WHITE_SUM_THRESHOLD {
        return Pixel::WHITE;
    }
    if sum <= BLACK_SUM_THRESHOLD {
        return Pixel::BLACK;
    }

    let max = pixel.max_channel();
    if pixel.red == max {
        Pixel::RED
    } else if pixel.green == max {
        Pixel::GREEN
    } else {
        Pixel::BLUE
    }
}

/// Quantize every pixel of an image to black, white, red, green or blue.
pub fn apply_dominance_quantize(image: &Raster) -> Raster {
    debug!(
        width = image.width(),
        height = image.height(),
        "Applying dominance quantization"
    );
    image.map_pixels(quantize_pixel)
}
