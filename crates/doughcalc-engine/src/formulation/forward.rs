// ABOUTME: Forward calculation: baker's percentages and hydration to absolute weights
// ABOUTME: Handles dough residue, pre-ferment flour/water subtraction and batch recalculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forward pass: percentages and dough size to weights
//!
//! Total flour is `adjusted_weight * 100 / total_percentage`, where the total
//! percentage counts flour, hydration and every non-core ingredient
//! including pre-ferments. Main flour and water are what remains after the
//! pre-ferments take their share, floored at zero.

use doughcalc_core::constants::bakers::{FLOUR_PERCENTAGE, PERCENT};
use doughcalc_core::models::{Ingredient, Recipe};
use rayon::prelude::*;
use tracing::debug;

use super::preferment::with_pre_ferment_weight;
use super::Slot;

/// Derive every ingredient weight from percentages and the target dough size
///
/// `dough_residue_percentage` inflates the target to compensate for dough
/// left on bowls and tools. Flour and water receive what remains after the
/// pre-ferments' own flour and water are subtracted; their percentages are
/// normalized to 100 and the recipe hydration. Other percentages are never
/// touched. A non-positive total percentage returns the ingredients as-is.
///
/// # Example
///
/// ```rust
/// use doughcalc_core::models::Recipe;
/// use doughcalc_engine::formulation::calculate_weights;
///
/// // 4 x 250 g at 65% hydration with 2.5% salt and 0.5% yeast
/// let ingredients = calculate_weights(&Recipe::default(), 0.0);
/// let flour = ingredients.iter().find(|i| i.is_flour).map_or(0.0, |i| i.weight);
/// assert!((flour - 595.238).abs() < 0.01);
/// ```
#[must_use]
pub fn calculate_weights(recipe: &Recipe, dough_residue_percentage: f64) -> Vec<Ingredient> {
    let adjusted_weight = recipe.total_dough_weight() * (1.0 + dough_residue_percentage / PERCENT);

    let other_percentages: f64 = recipe.other_ingredients().map(|i| i.percentage).sum();
    let total_percentage = FLOUR_PERCENTAGE + recipe.hydration + other_percentages;

    if total_percentage <= 0.0 {
        debug!(total_percentage, "degenerate recipe, weights left unchanged");
        return recipe.ingredients.clone();
    }

    // Combined flour across the main dough and every pre-ferment
    let total_flour_weight = adjusted_weight * FLOUR_PERCENTAGE / total_percentage;

    let mut pre_ferment_flour = 0.0;
    let mut pre_ferment_water = 0.0;
    let mut ingredients: Vec<Ingredient> = recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            if Slot::of(ingredient) != Slot::PreFerment {
                return ingredient.clone();
            }
            let sized = with_pre_ferment_weight(
                ingredient,
                total_flour_weight * ingredient.percentage / PERCENT,
            );
            if let Some(breakdown) = sized.breakdown() {
                pre_ferment_flour += breakdown.flour;
                pre_ferment_water += breakdown.water;
            }
            sized
        })
        .collect();

    let main_flour_weight = (total_flour_weight - pre_ferment_flour).max(0.0);
    let total_water_weight = total_flour_weight * recipe.hydration / PERCENT;
    let main_water_weight = (total_water_weight - pre_ferment_water).max(0.0);

    for ingredient in &mut ingredients {
        match Slot::of(ingredient) {
            Slot::Flour => {
                ingredient.weight = main_flour_weight;
                ingredient.percentage = FLOUR_PERCENTAGE;
            }
            Slot::Water => {
                ingredient.weight = main_water_weight;
                ingredient.percentage = recipe.hydration;
            }
            Slot::Other => {
                ingredient.weight = total_flour_weight * ingredient.percentage / PERCENT;
            }
            Slot::PreFerment => {}
        }
    }

    ingredients
}

/// Copy of `recipe` with weights derived from its percentages
#[must_use]
pub fn recalculate_from_percentages(recipe: &Recipe, dough_residue_percentage: f64) -> Recipe {
    Recipe {
        ingredients: calculate_weights(recipe, dough_residue_percentage),
        ..recipe.clone()
    }
}

/// Forward pass over a whole recipe library
///
/// Used after a settings change such as a new dough residue. Recipes are
/// independent, so the work fans out over the rayon pool; output order
/// matches input order.
#[must_use]
pub fn recalculate_all(recipes: &[Recipe], dough_residue_percentage: f64) -> Vec<Recipe> {
    recipes
        .par_iter()
        .map(|recipe| recalculate_from_percentages(recipe, dough_residue_percentage))
        .collect()
}
