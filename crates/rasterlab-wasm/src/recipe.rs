//! WASM bindings for recipes.
//!
//! A recipe can be passed either as a plain JavaScript object (converted with
//! serde_wasm_bindgen) or as a JSON string.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const recipe = {
//!   operations: [
//!     { op: 'contrast_stretch', strength: 0.3 },
//!     { op: 'rotate', turns: 1 },
//!   ],
//! };
//! const result = apply_recipe(image, recipe);
//! const comparison = apply_recipe_stacked(image, { operations: [{ op: 'grayscale' }] });
//! ```

use crate::types::{to_js_error, JsRaster};
use rasterlab_core::{Raster, RasterResult, Recipe};
use wasm_bindgen::prelude::*;

fn recipe_from_js(recipe: JsValue) -> Result<Recipe, JsValue> {
    serde_wasm_bindgen::from_value(recipe)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe: {}", e)))
}

fn run(result: RasterResult<Raster>) -> Result<JsRaster, JsValue> {
    result.map(JsRaster::from_raster).map_err(to_js_error)
}

/// Apply a recipe object to an image.
#[wasm_bindgen]
pub fn apply_recipe(image: &JsRaster, recipe: JsValue) -> Result<JsRaster, JsValue> {
    let recipe = recipe_from_js(recipe)?;
    run(recipe.apply(image.raster()))
}

/// Apply a recipe object and stack the original above the result.
#[wasm_bindgen]
pub fn apply_recipe_stacked(image: &JsRaster, recipe: JsValue) -> Result<JsRaster, JsValue> {
    let recipe = recipe_from_js(recipe)?;
    run(recipe.apply_stacked(image.raster()))
}

/// Apply a recipe given as a JSON string.
#[wasm_bindgen]
pub fn apply_recipe_json(image: &JsRaster, json: &str) -> Result<JsRaster, JsValue> {
    let recipe = Recipe::from_json(json).map_err(to_js_error)?;
    run(recipe.apply(image.raster()))
}
