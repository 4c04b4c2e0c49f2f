//! Rasterlab WASM - WebAssembly bindings and canvas display adapter
//!
//! This crate exposes the rasterlab-core transforms to JavaScript/TypeScript.
//! Transforms return a [`JsRaster`]; drawing it is one `putImageData` call on
//! the host page using [`JsRaster::to_rgba`].
//!
//! # Module Structure
//!
//! - `types` - `JsRaster` wrapper and error conversion
//! - `filters` - per-pixel color filters
//! - `transform` - rotation, scaling, stacking and blending
//! - `recipe` - multi-step recipes from JS objects or JSON
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, apply_grayscale, stack_vertical } from '@rasterlab/wasm';
//!
//! await init();
//!
//! const src = ctx.getImageData(0, 0, w, h);
//! const rgb = new Uint8Array(w * h * 3);
//! for (let i = 0, j = 0; i < src.data.length; i += 4, j += 3) {
//!   rgb[j] = src.data[i]; rgb[j + 1] = src.data[i + 1]; rgb[j + 2] = src.data[i + 2];
//! }
//! const image = new JsRaster(w, h, rgb);
//! const comparison = stack_vertical(image, apply_grayscale(image));
//! ctx.putImageData(
//!   new ImageData(new Uint8ClampedArray(comparison.to_rgba()), comparison.width, comparison.height),
//!   0, 0,
//! );
//! ```

use wasm_bindgen::prelude::*;

mod filters;
mod recipe;
mod transform;
mod types;

pub use filters::{
    apply_brighten, apply_contrast_stretch, apply_dim, apply_dominance_quantize, apply_grayscale,
    apply_threshold, apply_vignette, default_brighten_factor, default_contrast_strength,
    default_dim_factor,
};
pub use recipe::{apply_recipe, apply_recipe_json, apply_recipe_stacked};
pub use transform::{
    apply_nearest_scale, blend_centered, rotate_by_90, rotate_by_turns, rotate_quarter_turns,
    stack_vertical,
};
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
