// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides float comparison, ingredient lookup and recipe fixtures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::panic
)]
//! Shared test utilities for `doughcalc`

use doughcalc::models::{Ingredient, PreFermentMetadata, PreFermentType, Recipe};

/// Assert `actual` is within `tolerance` of `expected`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// First ingredient with this name
#[track_caller]
pub fn by_name<'a>(ingredients: &'a [Ingredient], name: &str) -> &'a Ingredient {
    ingredients
        .iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("no ingredient named {name}"))
}

/// Default pizza dough with a 20% poolish appended
pub fn recipe_with_poolish() -> Recipe {
    Recipe::default().with_ingredient(Ingredient::pre_ferment(
        "Poolish",
        PreFermentMetadata::new(PreFermentType::Poolish),
        20.0,
    ))
}
