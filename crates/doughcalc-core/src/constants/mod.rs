// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit factors, pre-ferment defaults, recipe defaults, and caller-side limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Nothing here is configurable at runtime; environment overrides
//! live in the configuration layer of the main crate.

/// Unit conversion and measurement constants
pub mod units {
    /// Grams in one avoirdupois ounce
    pub const GRAMS_PER_OUNCE: f64 = 28.3495;
    /// Fahrenheit degrees per Celsius degree
    pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;
    /// Fahrenheit reading at 0 °C
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;
    /// Metric weight label
    pub const GRAMS_LABEL: &str = "g";
    /// Imperial weight label
    pub const OUNCES_LABEL: &str = "oz";
    /// Metric temperature label
    pub const CELSIUS_LABEL: &str = "°C";
    /// Imperial temperature label
    pub const FAHRENHEIT_LABEL: &str = "°F";
}

/// Baker's-percentage conventions
pub mod bakers {
    /// Flour is the reference ingredient and is always 100%
    pub const FLOUR_PERCENTAGE: f64 = 100.0;
    /// Percent-to-ratio divisor
    pub const PERCENT: f64 = 100.0;
}

/// Pre-ferment catalog defaults
pub mod pre_ferment {
    /// Poolish: equal parts flour and water
    pub const POOLISH_HYDRATION: f64 = 100.0;
    /// Biga: stiff pre-ferment
    pub const BIGA_HYDRATION: f64 = 55.0;
    /// Hydration offered when a custom pre-ferment is created
    pub const CUSTOM_HYDRATION: f64 = 75.0;
    /// Default yeast percentage relative to pre-ferment flour
    pub const DEFAULT_YEAST_PERCENTAGE: f64 = 0.1;
}

/// Defaults for a freshly seeded recipe
pub mod recipe_defaults {
    /// Number of dough balls
    pub const NUMBER_OF_BALLS: u32 = 4;
    /// Grams per dough ball
    pub const WEIGHT_PER_BALL: f64 = 250.0;
    /// Overall hydration percentage
    pub const HYDRATION: f64 = 65.0;
    /// Salt percentage
    pub const SALT_PERCENTAGE: f64 = 2.5;
    /// Yeast percentage
    pub const YEAST_PERCENTAGE: f64 = 0.5;
    /// Dough left on bowls and tools, as a percentage of total dough
    pub const DOUGH_RESIDUE_PERCENTAGE: f64 = 2.0;
}

/// Caller-side clamping ranges applied before the engine is invoked
pub mod limits {
    /// Minimum number of dough balls
    pub const MIN_NUMBER_OF_BALLS: u32 = 1;
    /// Minimum grams per dough ball
    pub const MIN_WEIGHT_PER_BALL: f64 = 1.0;
    /// Lowest accepted hydration
    pub const MIN_HYDRATION: f64 = 0.0;
    /// Highest accepted hydration
    pub const MAX_HYDRATION: f64 = 200.0;
    /// Lowest accepted dough residue
    pub const MIN_DOUGH_RESIDUE: f64 = 0.0;
    /// Highest accepted dough residue
    pub const MAX_DOUGH_RESIDUE: f64 = 20.0;
    /// Lowest accepted pre-ferment yeast percentage
    pub const MIN_PRE_FERMENT_YEAST: f64 = 0.0;
    /// Highest accepted pre-ferment yeast percentage
    pub const MAX_PRE_FERMENT_YEAST: f64 = 10.0;
}

/// Service identification used by logging
pub mod service_names {
    /// Name reported in structured logs
    pub const DOUGHCALC: &str = "doughcalc";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Unit system (`metric` or `imperial`)
    pub const UNIT_SYSTEM: &str = "DOUGHCALC_UNIT_SYSTEM";
    /// Dough residue percentage
    pub const DOUGH_RESIDUE_PERCENT: &str = "DOUGHCALC_DOUGH_RESIDUE_PERCENT";
    /// CLI output format (`json`, `table`, `toon`)
    pub const OUTPUT_FORMAT: &str = "DOUGHCALC_OUTPUT_FORMAT";
}
