//! Serializable transform pipelines.
//!
//! A [`Recipe`] is an ordered list of [`Operation`]s applied one after another.
//! Recipes are plain serde data, so they can be stored as JSON or passed in
//! from JavaScript.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "operations": [
//!     { "op": "contrast_stretch", "strength": 0.3 },
//!     { "op": "rotate", "turns": 1 },
//!     { "op": "scale", "x": 2.0, "y": 2.0 },
//!     { "op": "grayscale" }
//!   ]
//! }
//! ```
//!
//! Omitted parameters take their documented defaults.

use crate::error::{RasterError, RasterResult};
use crate::filters::{
    apply_brighten, apply_contrast_stretch, apply_dim, apply_dominance_quantize, apply_grayscale,
    apply_threshold, apply_vignette, DEFAULT_BRIGHTEN_FACTOR, DEFAULT_CONTRAST_STRENGTH,
    DEFAULT_DIM_FACTOR,
};
use crate::raster::Raster;
use crate::transform::{apply_nearest_scale, rotate_by_turns, stack_vertical};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single-image transform with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Radial falloff from the center.
    Vignette,
    /// Three-band contrast stretch.
    ContrastStretch {
        #[serde(default = "default_contrast_strength")]
        strength: f32,
    },
    /// Channel average grayscale.
    Grayscale,
    /// Clockwise rotation by `turns * 90` degrees.
    Rotate {
        #[serde(default = "default_turns")]
        turns: f64,
    },
    /// Nearest-neighbor scale.
    Scale {
        #[serde(default = "default_scale")]
        x: f64,
        #[serde(default = "default_scale")]
        y: f64,
    },
    /// Black/white threshold.
    Threshold,
    /// Move channels toward white.
    Brighten {
        #[serde(default = "default_brighten_factor")]
        factor: f32,
    },
    /// Move channels toward black.
    Dim {
        #[serde(default = "default_dim_factor")]
        factor: f32,
    },
    /// Black, white or dominant primary.
    DominanceQuantize,
}

fn default_contrast_strength() -> f32 {
    DEFAULT_CONTRAST_STRENGTH
}

fn default_brighten_factor() -> f32 {
    DEFAULT_BRIGHTEN_FACTOR
}

fn default_dim_factor() -> f32 {
    DEFAULT_DIM_FACTOR
}

fn default_turns() -> f64 {
    1.0
}

fn default_scale() -> f64 {
    1.0
}

impl Operation {
    /// Short name used in logs; matches the JSON `op` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Vignette => "vignette",
            Operation::ContrastStretch { .. } => "contrast_stretch",
            Operation::Grayscale => "grayscale",
            Operation::Rotate { .. } => "rotate",
            Operation::Scale { .. } => "scale",
            Operation::Threshold => "threshold",
            Operation::Brighten { .. } => "brighten",
            Operation::Dim { .. } => "dim",
            Operation::DominanceQuantize => "dominance_quantize",
        }
    }

    /// Apply this operation to `image`.
    pub fn apply(&self, image: &Raster) -> RasterResult<Raster> {
        match *self {
            Operation::Vignette => Ok(apply_vignette(image)),
            Operation::ContrastStretch { strength } => apply_contrast_stretch(image, strength),
            Operation::Grayscale => Ok(apply_grayscale(image)),
            Operation::Rotate { turns } => rotate_by_turns(image, turns),
            Operation::Scale { x, y } => apply_nearest_scale(image, x, y),
            Operation::Threshold => Ok(apply_threshold(image)),
            Operation::Brighten { factor } => apply_brighten(image, factor),
            Operation::Dim { factor } => apply_dim(image, factor),
            Operation::DominanceQuantize => Ok(apply_dominance_quantize(image)),
        }
    }
}

/// An ordered list of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub operations: Vec<Operation>,
}

impl Recipe {
    /// Create an empty recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation, builder style.
    pub fn then(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Parse a recipe from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidRecipe`] for malformed JSON, unknown
    /// operation names or mistyped parameters.
    pub fn from_json(json: &str) -> RasterResult<Self> {
        serde_json::from_str(json).map_err(|e| RasterError::InvalidRecipe(e.to_string()))
    }

    /// Serialize the recipe to JSON.
    pub fn to_json(&self) -> RasterResult<String> {
        serde_json::to_string(self).map_err(|e| RasterError::InvalidRecipe(e.to_string()))
    }

    /// Check if the recipe has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply every operation in order.
    ///
    /// An empty recipe returns a copy of the input. The first failing
    /// operation aborts the run.
    #[instrument(skip_all, fields(steps = self.operations.len(), width = image.width(), height = image.height()))]
    pub fn apply(&self, image: &Raster) -> RasterResult<Raster> {
        let mut current = image.clone();
        for (step, operation) in self.operations.iter().enumerate() {
            current = operation.apply(&current)?;
            debug!(
                step,
                op = operation.name(),
                width = current.width(),
                height = current.height(),
                "Recipe step complete"
            );
        }
        Ok(current)
    }

    /// Apply the recipe and stack the original above the result.
    ///
    /// # Errors
    ///
    /// Any operation error, or [`RasterError::DimensionMismatch`] if the recipe
    /// changed the image dimensions.
    pub fn apply_stacked(&self, image: &Raster) -> RasterResult<Raster> {
        let result = self.apply(image)?;
        stack_vertical(image, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use crate::transform::rotate_by_90;

    fn test_image(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |col, row| {
            Pixel::new((col * 20) as f32, (row * 20) as f32, 100.0)
        })
    }

    #[test]
    fn test_parse_with_defaults() {
        let recipe = Recipe::from_json(
            r#"{"operations": [
                {"op": "contrast_stretch"},
                {"op": "brighten"},
                {"op": "dim", "factor": 0.5},
                {"op": "rotate"},
                {"op": "scale", "x": 2.0},
                {"op": "dominance_quantize"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            recipe.operations,
            vec![
                Operation::ContrastStretch { strength: 0.3 },
                Operation::Brighten { factor: 0.8 },
                Operation::Dim { factor: 0.5 },
                Operation::Rotate { turns: 1.0 },
                Operation::Scale { x: 2.0, y: 1.0 },
                Operation::DominanceQuantize,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Recipe::from_json("not json"),
            Err(RasterError::InvalidRecipe(_))
        ));
        assert!(matches!(
            Recipe::from_json(r#"{"operations": [{"op": "sharpen"}]}"#),
            Err(RasterError::InvalidRecipe(_))
        ));
        assert!(matches!(
            Recipe::from_json(r#"{"operations": [{"op": "dim", "factor": "lots"}]}"#),
            Err(RasterError::InvalidRecipe(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let recipe = Recipe::new()
            .then(Operation::Vignette)
            .then(Operation::Rotate { turns: 2.0 })
            .then(Operation::Threshold);
        let json = recipe.to_json().unwrap();
        assert!(json.contains(r#""op":"vignette""#));
        assert_eq!(Recipe::from_json(&json).unwrap(), recipe);
    }

    #[test]
    fn test_empty_recipe_is_identity() {
        let img = test_image(4, 3);
        let recipe = Recipe::new();
        assert!(recipe.is_empty());
        assert_eq!(recipe.apply(&img).unwrap(), img);
    }

    #[test]
    fn test_apply_in_order() {
        let img = test_image(4, 3);
        let recipe = Recipe::new()
            .then(Operation::Rotate { turns: 1.0 })
            .then(Operation::Scale { x: 2.0, y: 1.0 })
            .then(Operation::Grayscale);
        let result = recipe.apply(&img).unwrap();

        let expected = apply_grayscale(
            &apply_nearest_scale(&rotate_by_90(&img), 2.0, 1.0).unwrap(),
        );
        assert_eq!(result, expected);
        assert_eq!(result.dimensions(), (6, 4));
    }

    #[test]
    fn test_apply_stops_at_first_error() {
        let img = test_image(4, 4);
        let recipe = Recipe::new()
            .then(Operation::Grayscale)
            .then(Operation::Rotate { turns: 0.5 })
            .then(Operation::Scale { x: 0.0, y: 0.0 });
        assert_eq!(recipe.apply(&img), Err(RasterError::InvalidAngle(45.0)));
    }

    #[test]
    fn test_apply_stacked() {
        let img = test_image(3, 2);
        let recipe = Recipe::new().then(Operation::Threshold);
        let result = recipe.apply_stacked(&img).unwrap();

        assert_eq!(result.dimensions(), (3, 4));
        assert_eq!(result.get_pixel(1, 1), img.get_pixel(1, 1));
        assert_eq!(result.get_pixel(1, 3), apply_threshold(&img).get_pixel(1, 1));
    }

    #[test]
    fn test_apply_stacked_rejects_resized_result() {
        let img = test_image(3, 2);
        let recipe = Recipe::new().then(Operation::Rotate { turns: 1.0 });
        assert!(matches!(
            recipe.apply_stacked(&img),
            Err(RasterError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_every_operation_runs() {
        let img = test_image(5, 5);
        let ops = [
            Operation::Vignette,
            Operation::ContrastStretch { strength: 0.3 },
            Operation::Grayscale,
            Operation::Rotate { turns: 3.0 },
            Operation::Scale { x: 0.5, y: 2.0 },
            Operation::Threshold,
            Operation::Brighten { factor: 0.8 },
            Operation::Dim { factor: 0.8 },
            Operation::DominanceQuantize,
        ];
        for op in ops {
            let result = op.apply(&img);
            assert!(result.is_ok(), "{} failed: {:?}", op.name(), result);
        }
    }
}
