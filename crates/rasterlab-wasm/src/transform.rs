//! WASM bindings for rotation, scaling, stacking and blending.

use crate::types::{to_js_error, JsRaster};
use rasterlab_core::transform;
use wasm_bindgen::prelude::*;

/// Rotate 90 degrees clockwise.
#[wasm_bindgen]
pub fn rotate_by_90(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::rotate_by_90(image.raster()))
}

/// Rotate clockwise by `number * 90` degrees.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const upsideDown = rotate_by_turns(image, 2);
/// rotate_by_turns(image, 0.5); // throws: 45 is not a multiple of 90
/// ```
#[wasm_bindgen]
pub fn rotate_by_turns(image: &JsRaster, number: f64) -> Result<JsRaster, JsValue> {
    transform::rotate_by_turns(image.raster(), number)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Rotate clockwise by a signed number of quarter turns (negative is
/// counter-clockwise).
#[wasm_bindgen]
pub fn rotate_quarter_turns(image: &JsRaster, turns: i32) -> JsRaster {
    JsRaster::from_raster(transform::rotate_quarter_turns(image.raster(), turns as i64))
}

/// Nearest-neighbor scale with independent factors.
#[wasm_bindgen]
pub fn apply_nearest_scale(
    image: &JsRaster,
    x_scale: f64,
    y_scale: f64,
) -> Result<JsRaster, JsValue> {
    transform::apply_nearest_scale(image.raster(), x_scale, y_scale)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Stack two same-sized images vertically, `top` first.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const comparison = stack_vertical(original, apply_grayscale(original));
/// ctx.putImageData(
///   new ImageData(new Uint8ClampedArray(comparison.to_rgba()), comparison.width, comparison.height),
///   0, 0,
/// );
/// ```
#[wasm_bindgen]
pub fn stack_vertical(top: &JsRaster, bottom: &JsRaster) -> Result<JsRaster, JsValue> {
    transform::stack_vertical(top.raster(), bottom.raster())
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Blend `layer` over the center of `base` with the given opacity.
#[wasm_bindgen]
pub fn blend_centered(
    base: &JsRaster,
    layer: &JsRaster,
    opacity: f32,
) -> Result<JsRaster, JsValue> {
    transform::blend_centered(base.raster(), layer.raster(), opacity)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
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
    fn test_rotation_90_degrees() {
        let img = test_image(100, 50);
        let result = rotate_by_90(&img);
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_rotate_by_turns_full_circle() {
        let img = test_image(30, 20);
        let result = rotate_by_turns(&img, 4.0).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_rotate_quarter_turns_negative() {
        let img = test_image(30, 20);
        let ccw = rotate_quarter_turns(&img, -1);
        let cw3 = rotate_quarter_turns(&img, 3);
        assert_eq!(ccw.pixels(), cw3.pixels());
    }

    #[test]
    fn test_scale() {
        let img = test_image(10, 10);
        let result = apply_nearest_scale(&img, 2.0, 0.5).unwrap();
        assert_eq!(result.width(), 20);
        assert_eq!(result.height(), 5);
    }

    #[test]
    fn test_stack() {
        let img = test_image(4, 3);
        let result = stack_vertical(&img, &img).unwrap();
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 6);
    }

    #[test]
    fn test_blend_keeps_base_dimensions() {
        let base = test_image(10, 8);
        let layer = test_image(4, 4);
        let result = blend_centered(&base, &layer, 0.5).unwrap();
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 8);
    }
}
