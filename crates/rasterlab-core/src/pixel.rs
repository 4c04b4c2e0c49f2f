//! Pixel computation type.
//!
//! A [`Pixel`] carries three `f32` channels and never validates them: filters
//! are free to produce negative, fractional or over-range values. Clamping to
//! `0..=255` happens once, when the pixel is written into a
//! [`Raster`](crate::Raster).

/// An RGB color with unclamped floating point channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pixel {
    /// Red channel (nominally 0 to 255)
    pub red: f32,
    /// Green channel (nominally 0 to 255)
    pub green: f32,
    /// Blue channel (nominally 0 to 255)
    pub blue: f32,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0.0, 0.0, 0.0);
    pub const WHITE: Pixel = Pixel::new(255.0, 255.0, 255.0);
    pub const RED: Pixel = Pixel::new(255.0, 0.0, 0.0);
    pub const GREEN: Pixel = Pixel::new(0.0, 255.0, 0.0);
    pub const BLUE: Pixel = Pixel::new(0.0, 0.0, 255.0);

    /// Create a pixel from channel values. Any value is accepted.
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray pixel with all three channels set to `value`.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Create a pixel from 8-bit channel values.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
    }

    /// Convert to 8-bit channels: clamp to 0..=255, then truncate toward zero.
    ///
    /// NaN channels become 0.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            quantize_channel(self.red),
            quantize_channel(self.green),
            quantize_channel(self.blue),
        ]
    }

    /// Sum of the three channels.
    #[inline]
    pub fn sum(self) -> f32 {
        self.red + self.green + self.blue
    }

    /// Equal-weight average of the three channels.
    #[inline]
    pub fn average(self) -> f32 {
        self.sum() / 3.0
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.red.max(self.green).max(self.blue)
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// Multiply every channel by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        self.map(|c| c * factor)
    }

    /// Keep `factor` of each channel's distance from white:
    /// `255 - (255 - c) * factor`.
    #[inline]
    pub fn scale_toward_white(self, factor: f32) -> Self {
        self.map(|c| 255.0 - (255.0 - c) * factor)
    }

    /// Linear mix: `self * (1 - amount) + other * amount`.
    #[inline]
    pub fn mix(self, other: Pixel, amount: f32) -> Self {
        let keep = 1.0 - amount;
        Self::new(
            self.red * keep + other.red * amount,
            self.green * keep + other.green * amount,
            self.blue * keep + other.blue * amount,
        )
    }
}

#[inline]
fn quantize_channel(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_does_not_clamp() {
        let p = Pixel::new(-20.0, 300.5, 12.75);
        assert_eq!(p.red, -20.0);
        assert_eq!(p.green, 300.5);
        assert_eq!(p.blue, 12.75);
    }

    #[test]
    fn test_to_rgb8_clamps_and_truncates() {
        assert_eq!(Pixel::new(-20.0, 300.5, 12.75).to_rgb8(), [0, 255, 12]);
        assert_eq!(Pixel::new(0.999, 254.999, 128.0).to_rgb8(), [0, 254, 128]);
        assert_eq!(Pixel::new(f32::NAN, 10.0, 10.0).to_rgb8(), [0, 10, 10]);
    }

    #[test]
    fn test_rgb8_roundtrip_is_exact() {
        for rgb in [[0u8, 0, 0], [255, 255, 255], [1, 128, 254]] {
            assert_eq!(Pixel::from_rgb8(rgb).to_rgb8(), rgb);
        }
    }

    #[test]
    fn test_sum_average_max() {
        let p = Pixel::new(100.0, 50.0, 10.0);
        assert_eq!(p.sum(), 160.0);
        assert!((p.average() - 53.333_332).abs() < 1e-4);
        assert_eq!(p.max_channel(), 100.0);

        let p = Pixel::new(10.0, 20.0, 30.0);
        assert_eq!(p.max_channel(), 30.0);
    }

    #[test]
    fn test_scale() {
        assert_eq!(Pixel::new(100.0, 50.0, 0.0).scale(0.5), Pixel::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn test_scale_toward_white() {
        let p = Pixel::new(255.0, 55.0, 0.0).scale_toward_white(0.5);
        assert_eq!(p, Pixel::new(255.0, 155.0, 127.5));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Pixel::new(200.0, 100.0, 0.0);
        let b = Pixel::new(0.0, 100.0, 200.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Pixel::new(100.0, 100.0, 100.0));
    }
}
