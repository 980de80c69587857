// ABOUTME: Core types and constants for the doughcalc baker's-percentage engine
// ABOUTME: Foundation crate with error handling, recipe models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # doughcalc Core
//!
//! Foundation crate providing the shared value types for the dough formulation
//! engine. Everything here is plain data: no I/O, no clocks, no global state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit factors, pre-ferment defaults, and caller-side clamping ranges
//! - **models**: `Ingredient`, `Recipe`, `Step`, `Settings` and their enums
//! - **formatters**: Output format abstraction (JSON, TOON) and number formatting

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data models (ingredients, pre-ferments, steps, settings)
pub mod models;

/// Output format abstraction and display formatting helpers
pub mod formatters;
