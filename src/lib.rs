// ABOUTME: Main library entry point for the doughcalc baker's-percentage calculator
// ABOUTME: Re-exports the core models and engine and adds the editor, config, logging and file layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # doughcalc
//!
//! A baker's-percentage dough calculator. Give it a dough size and ingredient
//! ratios and it returns weights; give it weights and it returns ratios and
//! hydration. Pre-ferments (poolish, biga, custom) are split into their own
//! flour, water and leavening and taken out of the main dough.
//!
//! ## Architecture
//!
//! - **`doughcalc-core`**: models, errors, constants, output formatting
//! - **`doughcalc-engine`**: pure formulation functions
//! - **editor**: typed edits with range clamping, run in forward or reverse mode
//! - **config** / **logging**: environment-driven settings and tracing setup
//! - **`recipe_file`**: JSON recipe documents on disk
//!
//! ## Example Usage
//!
//! ```rust
//! use doughcalc::editor::{RecipeEdit, RecipeEditor};
//! use doughcalc::models::{CalculatorMode, Recipe, Settings};
//!
//! let editor = RecipeEditor::new(CalculatorMode::Forward, Settings::default());
//! let recipe = editor.recalculate(&Recipe::default());
//! let wetter = editor.apply(&recipe, RecipeEdit::SetHydration(70.0))?;
//!
//! assert!((wetter.hydration - 70.0).abs() < f64::EPSILON);
//! # Ok::<(), doughcalc::errors::AppError>(())
//! ```

/// Environment-based configuration
pub mod config;

/// Typed recipe edits and mode-matched recalculation
pub mod editor;

/// Tracing subscriber setup and recipe log helpers
pub mod logging;

/// JSON recipe files
pub mod recipe_file;

pub use doughcalc_core::{constants, errors, formatters, models};
pub use doughcalc_engine::{conversion, formulation, scaling};
