// ABOUTME: Keeps a pre-ferment percentage meaningful after its weight is edited directly
// ABOUTME: Snapshot total flour over the edited list, then rescale the pre-ferment percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pre-ferment weight edits in a percentage-driven recipe
//!
//! See [`normalize_pre_ferment_weight`] for the order of operations.

use doughcalc_core::constants::bakers::PERCENT;
use doughcalc_core::models::Ingredient;
use tracing::debug;
use uuid::Uuid;

use super::preferment::with_pre_ferment_weight;
use super::reverse::total_flour_and_water;

/// `weight / current_total_flour * 100`, or `None` without flour
#[must_use]
pub fn pre_ferment_percentage(weight: f64, current_total_flour: f64) -> Option<f64> {
    (current_total_flour > 0.0).then(|| weight / current_total_flour * PERCENT)
}

/// Set a pre-ferment's weight and re-derive its percentage
///
/// Two steps, in this order:
/// 1. the pre-ferment takes `weight` and its breakdown is refreshed
/// 2. total flour is aggregated over that list as it stands (other
///    ingredients keep their current weights) and the pre-ferment percentage
///    becomes `weight / total_flour * 100`
///
/// The forward pass the edit triggers runs afterwards, on the returned list.
/// If `id` is not a pre-ferment the list is returned unchanged; with no flour
/// the weight is applied but the percentage is kept.
#[must_use]
pub fn normalize_pre_ferment_weight(
    ingredients: &[Ingredient],
    id: Uuid,
    weight: f64,
) -> Vec<Ingredient> {
    let Some(index) = ingredients
        .iter()
        .position(|i| i.id == id && i.is_pre_ferment())
    else {
        debug!(%id, "no pre-ferment with this id, nothing to normalize");
        return ingredients.to_vec();
    };

    let mut edited = ingredients.to_vec();
    edited[index] = with_pre_ferment_weight(&edited[index], weight);

    let current_total_flour = total_flour_and_water(&edited).flour;
    if let Some(percentage) = pre_ferment_percentage(weight, current_total_flour) {
        edited[index].percentage = percentage;
    } else {
        debug!(%id, current_total_flour, "no flour mass, pre-ferment percentage kept");
    }

    edited
}

#[cfg(test)]
mod tests {
    use super::*;
    use doughcalc_core::models::{PreFermentMetadata, PreFermentType, Recipe};

    use crate::formulation::calculate_weights;

    #[test]
    fn test_percentage_uses_snapshot_total_flour() {
        let recipe = Recipe::default();
        let mut ingredients = calculate_weights(&recipe, 0.0);
        let poolish = Ingredient::pre_ferment(
            "Poolish",
            PreFermentMetadata::new(PreFermentType::Poolish),
            0.0,
        );
        let id = poolish.id;
        ingredients.push(poolish);

        let normalized = normalize_pre_ferment_weight(&ingredients, id, 200.0);
        let edited = &normalized[4];

        // 595.238 g main flour + 99.950 g poolish flour
        let flour = 1000.0 * 100.0 / 168.0 + 200.0 / 2.001;
        assert!((edited.weight - 200.0).abs() < f64::EPSILON);
        assert!((edited.percentage - 200.0 / flour * 100.0).abs() < 1e-9);
        assert!((edited.percentage - 28.769_191).abs() < 1e-5);
        assert_eq!(&normalized[..4], &ingredients[..4]);
    }

    #[test]
    fn test_unknown_or_regular_id_is_noop() {
        let ingredients = Recipe::default().ingredients;
        let salt_id = ingredients[2].id;

        assert_eq!(normalize_pre_ferment_weight(&ingredients, salt_id, 50.0), ingredients);
        assert_eq!(
            normalize_pre_ferment_weight(&ingredients, Uuid::new_v4(), 50.0),
            ingredients
        );
    }

    #[test]
    fn test_no_flour_keeps_percentage() {
        let poolish = Ingredient::pre_ferment(
            "Poolish",
            PreFermentMetadata::new(PreFermentType::Poolish),
            12.0,
        );
        let id = poolish.id;
        let normalized = normalize_pre_ferment_weight(&[poolish], id, 0.0);

        assert!((normalized[0].percentage - 12.0).abs() < f64::EPSILON);
        assert!(pre_ferment_percentage(10.0, 0.0).is_none());
    }
}
