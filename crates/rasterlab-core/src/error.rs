//! Error types for raster operations.

use thiserror::Error;

/// Errors returned at the transform API boundary.
///
/// Every variant is a caller-input problem detected before any pixel is
/// written; no transform fails part-way through a pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Raw pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Two rasters that must share dimensions don't.
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// The RGB buffer for these dimensions would not fit in memory.
    #[error("Raster too large: {width}x{height} exceeds the addressable buffer size")]
    TooLarge { width: u64, height: u64 },

    /// Rotation angle is not a whole multiple of 90 degrees.
    #[error("Invalid rotation angle: {0} degrees is not a multiple of 90")]
    InvalidAngle(f64),

    /// Scale factors must be finite and positive.
    #[error("Invalid scale factor: x={x}, y={y} (both must be finite and greater than zero)")]
    InvalidScaleFactor { x: f64, y: f64 },

    /// A tunable factor is outside 0.0..=1.0.
    #[error("Invalid {name}: {value} (must be within 0.0 to 1.0)")]
    InvalidStrength { name: &'static str, value: f32 },

    /// A recipe could not be parsed.
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Validate a factor that must lie in `0.0..=1.0`.
pub(crate) fn check_unit_factor(name: &'static str, value: f32) -> RasterResult<f32> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RasterError::InvalidStrength { name, value })
    }
}
