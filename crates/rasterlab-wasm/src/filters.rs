//! WASM bindings for the per-pixel color filters.
//!
//! Filters with a tunable factor take it as an argument; pass the value of
//! the matching `default_*` function to get the standard behavior.

use crate::types::{to_js_error, JsRaster};
use rasterlab_core::filters;
use wasm_bindgen::prelude::*;

/// Darken the image toward its edges.
#[wasm_bindgen]
pub fn apply_vignette(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(filters::apply_vignette(image.raster()))
}

/// Push light pixels toward white and dark pixels toward black.
///
/// # Arguments
/// * `image` - Source image
/// * `strength` - 0.0 (strongest) to 1.0 (no change); default 0.3
///
/// # Example (TypeScript)
///
/// ```typescript
/// const punchy = apply_contrast_stretch(image, default_contrast_strength());
/// ```
#[wasm_bindgen]
pub fn apply_contrast_stretch(image: &JsRaster, strength: f32) -> Result<JsRaster, JsValue> {
    filters::apply_contrast_stretch(image.raster(), strength)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Convert to grayscale by channel averaging.
#[wasm_bindgen]
pub fn apply_grayscale(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(filters::apply_grayscale(image.raster()))
}

/// Convert to pure black and white.
#[wasm_bindgen]
pub fn apply_threshold(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(filters::apply_threshold(image.raster()))
}

/// Move every channel toward white; `factor` 1.0 is no change, default 0.8.
#[wasm_bindgen]
pub fn apply_brighten(image: &JsRaster, factor: f32) -> Result<JsRaster, JsValue> {
    filters::apply_brighten(image.raster(), factor)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Move every channel toward black; `factor` 1.0 is no change, default 0.8.
#[wasm_bindgen]
pub fn apply_dim(image: &JsRaster, factor: f32) -> Result<JsRaster, JsValue> {
    filters::apply_dim(image.raster(), factor)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Quantize to black, white, red, green or blue.
#[wasm_bindgen]
pub fn apply_dominance_quantize(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(filters::apply_dominance_quantize(image.raster()))
}

/// Default strength for [`apply_contrast_stretch`] (0.3).
#[wasm_bindgen]
pub fn default_contrast_strength() -> f32 {
    filters::DEFAULT_CONTRAST_STRENGTH
}

/// Default factor for [`apply_brighten`] (0.8).
#[wasm_bindgen]
pub fn default_brighten_factor() -> f32 {
    filters::DEFAULT_BRIGHTEN_FACTOR
}

/// Default factor for [`apply_dim`] (0.8).
#[wasm_bindgen]
pub fn default_dim_factor() -> f32 {
    filters::DEFAULT_DIM_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsRaster {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsRaster::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_filters_keep_dimensions() {
        let img = test_image(10, 6);
        for result in [
            apply_vignette(&img),
            apply_contrast_stretch(&img, default_contrast_strength()).unwrap(),
            apply_grayscale(&img),
            apply_threshold(&img),
            apply_brighten(&img, default_brighten_factor()).unwrap(),
            apply_dim(&img, default_dim_factor()).unwrap(),
            apply_dominance_quantize(&img),
        ] {
            assert_eq!(result.width(), 10);
            assert_eq!(result.height(), 6);
        }
    }

    #[test]
    fn test_threshold_two_levels() {
        let result = apply_threshold(&test_image(8, 8));
        assert!(result.pixels().iter().all(|&b| b == 0 || b == 255));
    }

    #[test]
    fn test_grayscale_equal_channels() {
        let result = apply_grayscale(&test_image(8, 8));
        for chunk in result.pixels().chunks(3) {
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
        }
    }

    #[test]
    fn test_defaults_match_core() {
        assert_eq!(default_contrast_strength(), 0.3);
        assert_eq!(default_brighten_factor(), 0.8);
        assert_eq!(default_dim_factor(), 0.8);
    }
}
