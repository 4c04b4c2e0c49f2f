//! Three-band contrast stretch.
//!
//! Pixels are classified by their channel average:
//! - **light** (`average >= 170`): each channel keeps `strength` of its distance
//!   from white, `255 - (255 - c) * strength`
//! - **dark** (`average < 90`): each channel keeps `strength` of its value,
//!   `c * strength`
//! - **midtone**: unchanged
//!
//! Lower strength means a harder push; 1.0 is the identity.

use crate::error::{check_unit_factor, RasterResult};
use crate::pixel::Pixel;
use crate::raster::Raster;
use tracing::debug;

/// Channel average at or above which a pixel counts as light.
pub const LIGHT_THRESHOLD: f32 = 170.0;

/// Channel average below which a pixel counts as dark.
pub const DARK_THRESHOLD: f32 = 90.0;

/// Default strength.
pub const DEFAULT_CONTRAST_STRENGTH: f32 = 0.3;

/// Contrast-stretch a single pixel.
#[inline]
pub fn contrast_stretch_pixel(pixel: Pixel, strength: f32) -> Pixel {
    let average = pixel.average();
    if average >= LIGHT_THRESHOLD {
        pixel.scale_toward_white(strength)
    } else if average < DARK_THRESHOLD {
        pixel.scale(strength)
    } else {
        pixel
    }
}

/// Contrast-stretch an image.
///
/// # Errors
///
/// Returns [`RasterError::InvalidStrength`](crate::RasterError::InvalidStrength)
/// if `strength` is not within 0.0..=1.0.
pub fn apply_contrast_stretch(image: &Raster, strength: f32) -> RasterResult<Raster> {
    let strength = check_unit_factor("contrast strength", strength)?;
    debug!(
        width = image.width(),
        height = image.height(),
        strength,
        "Applying contrast stretch"
    );
    Ok(image.map_pixels(|p| contrast_stretch_pixel(p, strength)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_pixel_pushed_toward_white() {
        let p = contrast_stretch_pixel(Pixel::new(200.0, 180.0, 170.0), 0.3);
        // 255 - 55 * 0.3 = 238.5, 255 - 75 * 0.3 = 232.5, 255 - 85 * 0.3 = 229.5
        assert!((p.red - 238.5).abs() < 1e-3);
        assert!((p.green - 232.5).abs() < 1e-3);
        assert!((p.blue - 229.5).abs() < 1e-3);
    }

    #[test]
    fn test_dark_pixel_pushed_toward_black() {
        let p = contrast_stretch_pixel(Pixel::new(80.0, 60.0, 40.0), 0.3);
        assert!((p.red - 24.0).abs() < 1e-3);
        assert!((p.green - 18.0).abs() < 1e-3);
        assert!((p.blue - 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_midtone_unchanged() {
        let p = Pixel::new(120.0, 130.0, 140.0);
        assert_eq!(contrast_stretch_pixel(p, 0.3), p);
    }

    #[test]
    fn test_threshold_boundaries() {
        // average exactly 170 is light
        let light = contrast_stretch_pixel(Pixel::gray(170.0), 0.3);
        assert!(light.red > 170.0);

        // average exactly 90 is a midtone
        let mid = Pixel::gray(90.0);
        assert_eq!(contrast_stretch_pixel(mid, 0.3), mid);

        // just below 90 is dark
        let dark = contrast_stretch_pixel(Pixel::new(89.0, 90.0, 90.0), 0.3);
        assert!(dark.red < 89.0);
    }

    #[test]
    fn test_strength_one_is_identity() {
        let img = Raster::from_fn(16, 16, |col, row| {
            Pixel::new((col * 16) as f32, (row * 16) as f32, 128.0)
        });
        let result = apply_contrast_stretch(&img, 1.0).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_apply_contrast_stretch_writes_truncated_values() {
        let img = Raster::filled(2, 2, Pixel::new(200.0, 180.0, 170.0));
        let result = apply_contrast_stretch(&img, DEFAULT_CONTRAST_STRENGTH).unwrap();
        assert_eq!(result.get_pixel(1, 1), Pixel::new(238.0, 232.0, 229.0));
    }

    #[test]
    fn test_invalid_strength_rejected() {
        let img = Raster::new(2, 2);
        assert!(apply_contrast_stretch(&img, -0.5).is_err());
        assert!(apply_contrast_stretch(&img, 1.5).is_err());
        assert!(apply_contrast_stretch(&img, f32::NAN).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: light pixels never get darker and dark pixels never get lighter.
        #[test]
        fn prop_stretch_moves_away_from_midtones(
            r in 0u8..=255,
            g in 0u8..=255,
            b in 0u8..=255,
            strength in 0.0f32..=1.0,
        ) {
            let p = Pixel::from_rgb8([r, g, b]);
            let out = contrast_stretch_pixel(p, strength);

            if p.average() >= LIGHT_THRESHOLD {
                prop_assert!(out.average() >= p.average() - 1e-3);
            } else if p.average() < DARK_THRESHOLD {
                prop_assert!(out.average() <= p.average() + 1e-3);
            } else {
                prop_assert_eq!(out, p);
            }
        }
    }
}
