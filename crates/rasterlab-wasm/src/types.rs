//! WASM-compatible wrapper types for raster data.
//!
//! [`JsRaster`] is the display adapter boundary: transforms hand back a
//! `JsRaster`, and the host page calls [`JsRaster::to_rgba`] to build a canvas
//! `ImageData` and draw it.

use rasterlab_core::{Raster, RasterError};
use wasm_bindgen::prelude::*;

/// A raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `to_rgba()` copy
/// it out to a JavaScript `Uint8Array`. The generated `free()` method releases
/// a large raster early; otherwise wasm-bindgen's finalizer cleans up.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions and RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Throws if `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::from_raw(width, height, pixels)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    /// Create a black raster.
    ///
    /// # Errors
    /// Throws if the RGB buffer for these dimensions can't be addressed.
    pub fn blank(width: u32, height: u32) -> Result<JsRaster, JsValue> {
        Raster::try_new(width, height)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the RGB buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_bytes().len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_bytes().to_vec()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for
    /// `new ImageData(new Uint8ClampedArray(rgba), width, height)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.inner.to_rgba8()
    }

    /// Read one pixel as `[r, g, b]`, or an empty array if out of range.
    pub fn pixel_at(&self, col: u32, row: u32) -> Vec<u8> {
        if col >= self.inner.width() || row >= self.inner.height() {
            return Vec::new();
        }
        self.inner.get_pixel(col, row).to_rgb8().to_vec()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.inner
    }
}

/// Convert a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: RasterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
