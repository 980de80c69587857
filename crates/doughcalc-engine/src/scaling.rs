// ABOUTME: Re-size a recipe for a bake, by ball count or by multiplier
// ABOUTME: Scaling changes dough size only; percentages carry over and weights are re-derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughcalc_core::constants::limits::MIN_NUMBER_OF_BALLS;
use doughcalc_core::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::formulation::recalculate_from_percentages;

/// How to re-size a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "plan", content = "value")]
pub enum ScalePlan {
    /// Replace the ball count, keeping the weight per ball
    BallCount(u32),
    /// Multiply the weight per ball, keeping the ball count
    Multiplier(f64),
}

/// Scaled copy of `recipe` with weights re-derived by the forward pass
///
/// Ball counts below one are raised to one. A multiplier that is not a
/// positive finite number leaves the dough size as it is.
#[must_use]
pub fn scale_recipe(recipe: &Recipe, plan: ScalePlan, dough_residue_percentage: f64) -> Recipe {
    let mut scaled = recipe.clone();

    match plan {
        ScalePlan::BallCount(balls) => {
            scaled.number_of_balls = balls.max(MIN_NUMBER_OF_BALLS);
        }
        ScalePlan::Multiplier(factor) if factor.is_finite() && factor > 0.0 => {
            scaled.weight_per_ball *= factor;
        }
        ScalePlan::Multiplier(factor) => {
            debug!(factor, "ignoring non-positive scale multiplier");
        }
    }

    recalculate_from_percentages(&scaled, dough_residue_percentage)
}
