// ABOUTME: Reverse calculation: absolute weights to baker's percentages and hydration
// ABOUTME: Aggregates total flour and water across core slots, pre-ferments and contributing additives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reverse pass: weights to percentages and hydration

use doughcalc_core::constants::bakers::{FLOUR_PERCENTAGE, PERCENT};
use doughcalc_core::models::{HydrationContribution, Ingredient, Recipe};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::preferment::refresh_breakdown;
use super::Slot;

/// Total flour and water mass of an ingredient list, in grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MassTotals {
    /// Main flour + pre-ferment flour + flour-contributing additives
    pub flour: f64,
    /// Main water + pre-ferment water + water-contributing additives
    pub water: f64,
}

impl MassTotals {
    /// Overall hydration for these totals
    #[must_use]
    pub fn hydration(&self) -> f64 {
        calculate_hydration(self.flour, self.water)
    }
}

/// Aggregate total flour and water mass
///
/// Only the first flour and first water slot count. Pre-ferments contribute
/// their cached breakdown, so callers refresh breakdowns first when weights
/// have changed.
#[must_use]
pub fn total_flour_and_water(ingredients: &[Ingredient]) -> MassTotals {
    let mut totals = MassTotals::default();
    let mut seen_flour = false;
    let mut seen_water = false;

    for ingredient in ingredients {
        match Slot::of(ingredient) {
            Slot::Flour if !seen_flour => {
                totals.flour += ingredient.weight;
                seen_flour = true;
            }
            Slot::Water if !seen_water => {
                totals.water += ingredient.weight;
                seen_water = true;
            }
            Slot::PreFerment => {
                if let Some(breakdown) = ingredient.breakdown() {
                    totals.flour += breakdown.flour;
                    totals.water += breakdown.water;
                }
            }
            Slot::Other => match ingredient.hydration_contribution {
                HydrationContribution::Flour => totals.flour += ingredient.weight,
                HydrationContribution::Water => totals.water += ingredient.weight,
                HydrationContribution::None => {}
            },
            Slot::Flour | Slot::Water => {}
        }
    }

    totals
}

/// `water / flour * 100`, or 0 when there is no flour
#[must_use]
pub fn calculate_hydration(total_flour_weight: f64, total_water_weight: f64) -> f64 {
    if total_flour_weight > 0.0 {
        total_water_weight / total_flour_weight * PERCENT
    } else {
        0.0
    }
}

/// Express every weight as a percentage of `total_flour_weight`
///
/// The flour slot is pinned to 100. With no flour the percentages are left
/// as they were.
#[must_use]
pub fn calculate_percentages_with_total_flour(
    ingredients: &[Ingredient],
    total_flour_weight: f64,
) -> Vec<Ingredient> {
    if total_flour_weight <= 0.0 {
        debug!(total_flour_weight, "no flour mass, percentages left unchanged");
        return ingredients.to_vec();
    }

    ingredients
        .iter()
        .map(|ingredient| {
            let percentage = if Slot::of(ingredient) == Slot::Flour {
                FLOUR_PERCENTAGE
            } else {
                ingredient.weight / total_flour_weight * PERCENT
            };
            Ingredient {
                percentage,
                ..ingredient.clone()
            }
        })
        .collect()
}

/// Refresh pre-ferment breakdowns and derive percentages from weights
#[must_use]
pub fn calculate_percentages(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let refreshed: Vec<Ingredient> = ingredients.iter().map(refresh_breakdown).collect();
    let totals = total_flour_and_water(&refreshed);
    calculate_percentages_with_total_flour(&refreshed, totals.flour)
}

/// Copy of `recipe` with hydration and percentages derived from its weights
///
/// Ball count and weight per ball are left alone; in reverse mode the dough
/// size is `total_ingredient_weight`. Running this on its own output changes
/// nothing beyond floating-point noise.
///
/// # Example
///
/// ```rust
/// use doughcalc_core::models::{Ingredient, Recipe};
/// use doughcalc_engine::formulation::recalculate_from_weights;
///
/// let mut recipe = Recipe::new("Weighed", 1, 1005.0, 0.0).with_ingredients(vec![
///     Ingredient::flour("Flour"),
///     Ingredient::water("Water", 0.0),
///     Ingredient::by_weight("Salt", 15.0),
/// ]);
/// recipe.ingredients[0].weight = 600.0;
/// recipe.ingredients[1].weight = 390.0;
///
/// let result = recalculate_from_weights(&recipe);
/// assert!((result.hydration - 65.0).abs() < 1e-9);
/// assert!((result.ingredients[2].percentage - 2.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn recalculate_from_weights(recipe: &Recipe) -> Recipe {
    let refreshed: Vec<Ingredient> = recipe.ingredients.iter().map(refresh_breakdown).collect();
    let totals = total_flour_and_water(&refreshed);

    Recipe {
        hydration: totals.hydration(),
        ingredients: calculate_percentages_with_total_flour(&refreshed, totals.flour),
        ..recipe.clone()
    }
}
