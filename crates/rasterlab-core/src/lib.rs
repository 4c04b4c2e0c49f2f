//! Rasterlab Core - Raster transform library
//!
//! This crate provides a small set of educational image filters and
//! transforms over RGB rasters: vignette, contrast stretch, grayscale,
//! threshold, brighten/dim, color-dominance quantization, 90-degree rotation,
//! nearest-neighbor scaling, centered blending and vertical stacking.
//!
//! Every transform borrows its source immutably and returns a freshly
//! allocated [`Raster`]. Rendering the result is left to the caller (see the
//! `rasterlab-wasm` crate for the browser canvas adapter).

pub mod error;
pub mod filters;
pub mod pixel;
pub mod raster;
pub mod recipe;
pub mod transform;

pub use error::{RasterError, RasterResult};
pub use filters::{
    apply_brighten, apply_contrast_stretch, apply_dim, apply_dominance_quantize, apply_grayscale,
    apply_threshold, apply_vignette,
};
pub use pixel::Pixel;
pub use raster::Raster;
pub use recipe::{Operation, Recipe};
pub use transform::{
    apply_nearest_scale, blend_centered, rotate_by_90, rotate_by_degrees, rotate_by_turns,
    rotate_quarter_turns, stack_vertical,
};
