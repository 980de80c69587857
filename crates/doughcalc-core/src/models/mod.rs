// ABOUTME: Core data models for dough formulation
// ABOUTME: Re-exports Ingredient, Recipe, Step, Settings and their supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain value types shared by the engine and every caller layer. All models
//! serialize with camelCase field names so persisted records keep stable keys
//! (`numberOfBalls`, `ingredientType`, `preFermentMetadata`, `subIngredients`).
//!
//! ## Core Models
//!
//! - `Ingredient`: one dough component, regular or pre-ferment
//! - `Recipe`: dough size, hydration, ingredients and steps
//! - `Step`: preparation step, opaque to the engine
//! - `Settings`: unit system and dough residue

mod ingredient;
mod recipe;
mod settings;
mod step;

pub use ingredient::{
    HydrationContribution, Ingredient, IngredientKind, PreFermentBreakdown, PreFermentMetadata,
    PreFermentType,
};
pub use recipe::Recipe;
pub use settings::{CalculatorMode, Settings, UnitSystem};
pub use step::Step;
