// ABOUTME: Baker's-percentage formulation: forward, reverse and pre-ferment calculations
// ABOUTME: Every function is pure: it takes values and returns new values, never mutating inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Formulation
//!
//! All percentages are relative to total flour mass, including flour held in
//! pre-ferments.
//!
//! - [`forward`]: percentages and dough size to weights
//! - [`reverse`]: weights to percentages and hydration
//! - [`preferment`]: split a pre-ferment into flour, water and leavening
//! - [`normalization`]: set a pre-ferment by weight while keeping it
//!   percentage-driven

/// Forward pass (percentages to weights)
pub mod forward;
/// Pre-ferment weight edits
pub mod normalization;
/// Pre-ferment decomposition
pub mod preferment;
/// Reverse pass (weights to percentages)
pub mod reverse;

pub use forward::{calculate_weights, recalculate_all, recalculate_from_percentages};
pub use normalization::{normalize_pre_ferment_weight, pre_ferment_percentage};
pub use preferment::{
    breakdown_for, decompose_pre_ferment, refresh_breakdown, retype_pre_ferment,
    with_pre_ferment_metadata, with_pre_ferment_weight,
};
pub use reverse::{
    calculate_hydration, calculate_percentages, calculate_percentages_with_total_flour,
    recalculate_from_weights, total_flour_and_water, MassTotals,
};

use doughcalc_core::models::Ingredient;

/// Role an ingredient plays during a calculation pass
///
/// Classification order is flour, water, pre-ferment, other; the first match
/// wins, so an ingredient wrongly flagged both flour and water is treated as
/// flour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Flour,
    Water,
    PreFerment,
    Other,
}

impl Slot {
    pub(crate) const fn of(ingredient: &Ingredient) -> Self {
        if ingredient.is_flour {
            Self::Flour
        } else if ingredient.is_water {
            Self::Water
        } else if ingredient.is_pre_ferment() {
            Self::PreFerment
        } else {
            Self::Other
        }
    }
}
