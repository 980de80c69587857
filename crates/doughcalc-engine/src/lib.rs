// ABOUTME: Stateless baker's-percentage formulation engine
// ABOUTME: Forward and reverse recipe calculation, pre-ferment decomposition, scaling and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # doughcalc Engine
//!
//! Pure functions over [`doughcalc_core::models::Recipe`] values. Nothing in
//! this crate performs I/O or holds state, and no function fails: degenerate
//! input (zero flour, non-positive total percentage) falls back to the
//! unmodified input or zero. Range clamping is the caller's job.
//!
//! All engine arithmetic is in grams and Celsius; [`conversion`] is only for
//! the presentation boundary.

/// Forward, reverse and pre-ferment calculations
pub mod formulation;

/// Grams/ounces and Celsius/Fahrenheit conversion
pub mod conversion;

/// Recipe re-sizing for a bake
pub mod scaling;

pub use formulation::{
    calculate_hydration, calculate_weights, decompose_pre_ferment, normalize_pre_ferment_weight,
    recalculate_all, recalculate_from_percentages, recalculate_from_weights,
};
pub use scaling::{scale_recipe, ScalePlan};
