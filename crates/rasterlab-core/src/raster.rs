//! Raster storage and the shared pixel-map pattern.
//!
//! Every transform in this crate follows the same shape: allocate a destination
//! of known size, visit every destination coordinate once, and write the pixel
//! computed from the source. [`Raster::from_fn`] and [`Raster::map_pixels`]
//! capture that shape so transforms reduce to a closure.
//!
//! # Layout
//!
//! Pixels are stored row-major as RGB bytes (3 bytes per pixel), so the buffer
//! length is always `width * height * 3`.

use crate::error::{RasterError, RasterResult};
use crate::pixel::Pixel;

/// A fixed-size 2D grid of RGB pixels.
///
/// Dimensions are set at construction and never change. Writes go through
/// [`Raster::set_pixel`], which clamps each channel to `0..=255` and truncates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a black raster with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`. Use
    /// [`Raster::try_new`] for untrusted dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; allocation_len(width, height)],
        }
    }

    /// Create a black raster, rejecting dimensions whose buffer length
    /// overflows `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::TooLarge`].
    pub fn try_new(width: u32, height: u32) -> RasterResult<Self> {
        checked_buffer_len(width, height)?;
        Ok(Self::new(width, height))
    }

    /// Create a raster with every pixel set to `fill`.
    ///
    /// # Panics
    ///
    /// Same as [`Raster::new`].
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        let rgb = fill.to_rgb8();
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(allocation_len(width, height))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an existing RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::TooLarge`] if `width * height * 3` overflows
    /// `usize`, or [`RasterError::InvalidPixelData`] if `pixels.len()` is not
    /// that length.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> RasterResult<Self> {
        let expected = checked_buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster by evaluating `f(col, row)` for every coordinate.
    ///
    /// Coordinates are visited row by row, left to right. This is the one
    /// place where destination rasters are allocated and filled.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut raster = Self::new(width, height);
        for row in 0..height {
            for col in 0..width {
                raster.set_pixel(col, row, f(col, row));
            }
        }
        raster
    }

    /// Produce a same-sized raster where each pixel is `f` of the source pixel
    /// at the same position.
    pub fn map_pixels(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        Self::from_fn(self.width, self.height, |col, row| {
            f(self.get_pixel(col, row))
        })
    }

    /// Create a raster from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Create a raster from any `image::DynamicImage`, dropping alpha.
    pub fn from_dynamic_image(img: &image::DynamicImage) -> Self {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Convert to an `image::RgbImage`.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if the raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read the pixel at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[inline]
    pub fn get_pixel(&self, col: u32, row: u32) -> Pixel {
        let idx = self.index(col, row);
        Pixel::from_rgb8([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ])
    }

    /// Write the pixel at `(col, row)`, clamping channels to `0..=255` and
    /// truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[inline]
    pub fn set_pixel(&mut self, col: u32, row: u32, pixel: Pixel) {
        let idx = self.index(col, row);
        self.pixels[idx..idx + 3].copy_from_slice(&pixel.to_rgb8());
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels
            .chunks_exact(3)
            .map(|c| Pixel::from_rgb8([c[0], c[1], c[2]]))
    }

    /// Borrow the RGB buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster and return the RGB buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA buffer with opaque alpha, in the layout a canvas `ImageData`
    /// expects.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixel_count() * 4);
        for chunk in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(chunk);
            rgba.push(255);
        }
        rgba
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        assert!(
            col < self.width && row < self.height,
            "pixel ({}, {}) out of range for {}x{} raster",
            col,
            row,
            self.width,
            self.height
        );
        (row as usize * self.width as usize + col as usize) * 3
    }
}

/// Length of the RGB buffer for a `width` x `height` raster, or `None` if it
/// overflows `usize` (a real risk on 32-bit wasm targets).
#[inline]
pub fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)
}

/// [`buffer_len`] as a [`RasterError::TooLarge`] result.
pub(crate) fn checked_buffer_len(width: u32, height: u32) -> RasterResult<usize> {
    buffer_len(width, height).ok_or(RasterError::TooLarge {
        width: width as u64,
        height: height as u64,
    })
}

fn allocation_len(width: u32, height: u32) -> usize {
    match buffer_len(width, height) {
        Some(len) => len,
        None => panic!(
            "{}x{} raster exceeds the addressable buffer size",
            width, height
        ),
    }
}
