//! Per-pixel color filters.
//!
//! Each filter produces a raster of the same dimensions as its input, where
//! every output pixel depends only on the input pixel at the same position
//! (and, for the vignette, on that position).
//!
//! | Filter | Rule |
//! |---|---|
//! | [`apply_vignette`] | scale by `(H - distance_to_center) / H` |
//! | [`apply_contrast_stretch`] | push light pixels up, dark pixels down |
//! | [`apply_grayscale`] | set every channel to the channel average |
//! | [`apply_threshold`] | black or white around the 127.5 midpoint |
//! | [`apply_brighten`] | move channels toward white |
//! | [`apply_dim`] | move channels toward black |
//! | [`apply_dominance_quantize`] | black, white, or the dominant primary |
//!
//! All channel math is `f32`; clamping and truncation happen once when the
//! result is written into the output raster.

mod brightness;
mod contrast;
mod grayscale;
mod quantize;
mod vignette;

pub use brightness::{
    apply_brighten, apply_dim, brighten_pixel, dim_pixel, DEFAULT_BRIGHTEN_FACTOR,
    DEFAULT_DIM_FACTOR,
};
pub use contrast::{
    apply_contrast_stretch, contrast_stretch_pixel, DARK_THRESHOLD, DEFAULT_CONTRAST_STRENGTH,
    LIGHT_THRESHOLD,
};
pub use grayscale::{apply_grayscale, apply_threshold, threshold_pixel, THRESHOLD_MIDPOINT};
pub use quantize::{
    apply_dominance_quantize, quantize_pixel, BLACK_SUM_THRESHOLD, WHITE_SUM_THRESHOLD,
};
pub use vignette::{apply_vignette, vignette_factor};
