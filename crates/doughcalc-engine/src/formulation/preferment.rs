// ABOUTME: Pre-ferment decomposition into flour, water and leavening
// ABOUTME: Pure helpers that rebuild a pre-ferment ingredient with a fresh breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pre-ferment breakdown helpers

use doughcalc_core::constants::bakers::PERCENT;
use doughcalc_core::models::{
    Ingredient, IngredientKind, PreFermentBreakdown, PreFermentMetadata, PreFermentType,
};
use tracing::trace;

/// Split a pre-ferment's total mass into flour, water and leavening
///
/// Hydration and yeast are both relative to the pre-ferment's own flour, so
/// `flour = weight / (1 + hydration/100 + yeast/100)`. The three parts always
/// sum back to `weight`. A non-positive ratio (only reachable with negative
/// inputs) yields the zero breakdown.
///
/// # Example
///
/// ```rust
/// use doughcalc_engine::formulation::decompose_pre_ferment;
///
/// let poolish = decompose_pre_ferment(200.1, 100.0, 0.1);
/// assert!((poolish.flour - 100.0).abs() < 1e-9);
/// assert!((poolish.leavening - 0.1).abs() < 1e-9);
/// ```
#[must_use]
pub fn decompose_pre_ferment(
    weight: f64,
    hydration: f64,
    yeast_percentage: f64,
) -> PreFermentBreakdown {
    let water_ratio = hydration / PERCENT;
    let yeast_ratio = yeast_percentage / PERCENT;
    let total_ratio = 1.0 + water_ratio + yeast_ratio;

    if total_ratio <= 0.0 {
        trace!(hydration, yeast_percentage, "non-positive pre-ferment ratio");
        return PreFermentBreakdown::default();
    }

    let flour = weight / total_ratio;
    PreFermentBreakdown {
        flour,
        water: flour * water_ratio,
        leavening: flour * yeast_ratio,
    }
}

/// Breakdown for a weight under the given metadata
#[must_use]
pub fn breakdown_for(weight: f64, metadata: &PreFermentMetadata) -> PreFermentBreakdown {
    decompose_pre_ferment(weight, metadata.hydration, metadata.yeast_percentage)
}

fn rebuilt(ingredient: &Ingredient, weight: f64, metadata: PreFermentMetadata) -> Ingredient {
    Ingredient {
        weight,
        kind: IngredientKind::PreFerment {
            metadata,
            breakdown: breakdown_for(weight, &metadata),
        },
        ..ingredient.clone()
    }
}

/// Copy of `ingredient` with its breakdown recomputed from its current weight
///
/// Regular ingredients are returned unchanged.
#[must_use]
pub fn refresh_breakdown(ingredient: &Ingredient) -> Ingredient {
    match ingredient.pre_ferment_metadata() {
        Some(metadata) => rebuilt(ingredient, ingredient.weight, *metadata),
        None => ingredient.clone(),
    }
}

/// Copy of a pre-ferment with a new total weight and matching breakdown
///
/// Regular ingredients are returned unchanged.
#[must_use]
pub fn with_pre_ferment_weight(ingredient: &Ingredient, weight: f64) -> Ingredient {
    match ingredient.pre_ferment_metadata() {
        Some(metadata) => rebuilt(ingredient, weight, *metadata),
        None => ingredient.clone(),
    }
}

/// Copy of a pre-ferment with replaced metadata and matching breakdown
///
/// Regular ingredients are returned unchanged.
#[must_use]
pub fn with_pre_ferment_metadata(ingredient: &Ingredient, metadata: PreFermentMetadata) -> Ingredient {
    if ingredient.is_pre_ferment() {
        rebuilt(ingredient, ingredient.weight, metadata)
    } else {
        ingredient.clone()
    }
}

/// Copy of a pre-ferment switched to another catalog type
///
/// Hydration resets to the type default unless the new type is `Custom`.
#[must_use]
pub fn retype_pre_ferment(ingredient: &Ingredient, kind: PreFermentType) -> Ingredient {
    match ingredient.pre_ferment_metadata() {
        Some(metadata) => rebuilt(ingredient, ingredient.weight, metadata.retyped(kind)),
        None => ingredient.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_poolish_scenario() {
        let breakdown = decompose_pre_ferment(200.1, 100.0, 0.1);
        assert_close(breakdown.flour, 100.0);
        assert_close(breakdown.water, 100.0);
        assert_close(breakdown.leavening, 0.1);
    }

    #[test]
    fn test_breakdown_sums_to_weight() {
        for &(weight, hydration, yeast) in &[
            (0.0, 100.0, 0.1),
            (1.0, 55.0, 0.0),
            (333.3, 75.0, 1.5),
            (5000.0, 200.0, 10.0),
            (42.0, 0.0, 0.0),
        ] {
            let breakdown = decompose_pre_ferment(weight, hydration, yeast);
            assert!((breakdown.total() - weight).abs() < 1e-9 * weight.max(1.0));
        }
    }

    #[test]
    fn test_non_positive_ratio_is_zero() {
        let breakdown = decompose_pre_ferment(100.0, -150.0, 0.0);
        assert_eq!(breakdown, PreFermentBreakdown::default());
    }

    #[test]
    fn test_with_weight_refreshes_breakdown() {
        let biga = Ingredient::pre_ferment("Biga", PreFermentMetadata::new(PreFermentType::Biga), 30.0);
        let sized = with_pre_ferment_weight(&biga, 155.1);

        let breakdown = sized.breakdown().copied().unwrap_or_default();
        assert_close(sized.weight, 155.1);
        assert_close(breakdown.flour, 100.0);
        assert_close(breakdown.water, 55.0);
        assert_eq!(sized.id, biga.id);
    }

    #[test]
    fn test_retype_resets_hydration_and_breakdown() {
        let poolish = with_pre_ferment_weight(
            &Ingredient::pre_ferment("Pre", PreFermentMetadata::new(PreFermentType::Poolish), 20.0),
            200.0,
        );
        let biga = retype_pre_ferment(&poolish, PreFermentType::Biga);

        let metadata = biga.pre_ferment_metadata().copied().unwrap();
        assert_eq!(metadata.kind, PreFermentType::Biga);
        assert_close(metadata.hydration, 55.0);
        assert_close(biga.breakdown().map_or(0.0, PreFermentBreakdown::total), 200.0);
    }

    #[test]
    fn test_regular_ingredient_untouched() {
        let salt = Ingredient::additive("Salt", 2.5);
        assert_eq!(with_pre_ferment_weight(&salt, 99.0), salt);
        assert_eq!(retype_pre_ferment(&salt, PreFermentType::Biga), salt);
        assert_eq!(refresh_breakdown(&salt), salt);
    }
}
