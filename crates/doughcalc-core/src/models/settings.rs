// ABOUTME: User settings and calculator mode consumed by the editor and presentation layer
// ABOUTME: Defines UnitSystem, Settings and CalculatorMode with parsing for configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{recipe_defaults, units};
use crate::errors::AppError;

/// Display unit system; engine arithmetic is always grams and Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UnitSystem {
    /// Grams and Celsius
    #[default]
    Metric,
    /// Ounces and Fahrenheit
    Imperial,
}

impl UnitSystem {
    /// Weight unit label
    #[must_use]
    pub const fn weight_unit(&self) -> &'static str {
        match self {
            Self::Metric => units::GRAMS_LABEL,
            Self::Imperial => units::OUNCES_LABEL,
        }
    }

    /// Temperature unit label
    #[must_use]
    pub const fn temperature_unit(&self) -> &'static str {
        match self {
            Self::Metric => units::CELSIUS_LABEL,
            Self::Imperial => units::FAHRENHEIT_LABEL,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "g" | "grams" => Ok(Self::Metric),
            "imperial" | "oz" | "ounces" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "unknown unit system '{other}' (expected metric or imperial)"
            ))),
        }
    }
}

/// Which side of a recipe is authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorMode {
    /// Percentages and hydration drive weights
    #[default]
    Forward,
    /// Weights drive percentages and hydration
    Reverse,
}

/// Presentation and calculation preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Extra dough budgeted for bowl and tool losses, in percent
    pub dough_residue_percentage: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            dough_residue_percentage: recipe_defaults::DOUGH_RESIDUE_PERCENTAGE,
        }
    }
}
