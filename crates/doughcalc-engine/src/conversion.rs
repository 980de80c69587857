// ABOUTME: Unit conversion between canonical grams/Celsius and the caller's display units
// ABOUTME: Presentation-boundary helpers; formulation arithmetic never calls these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughcalc_core::constants::units::{FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, GRAMS_PER_OUNCE};
use doughcalc_core::models::UnitSystem;

/// Grams to avoirdupois ounces
#[must_use]
pub fn grams_to_ounces(grams: f64) -> f64 {
    grams / GRAMS_PER_OUNCE
}

/// Avoirdupois ounces to grams
#[must_use]
pub fn ounces_to_grams(ounces: f64) -> f64 {
    ounces * GRAMS_PER_OUNCE
}

/// Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(FAHRENHEIT_PER_CELSIUS, FAHRENHEIT_OFFSET)
}

/// Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS
}

/// Grams expressed in the unit system's weight unit
#[must_use]
pub fn convert_weight(grams: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => grams,
        UnitSystem::Imperial => grams_to_ounces(grams),
    }
}

/// Weight typed in the unit system's unit, back to grams
#[must_use]
pub fn convert_to_grams(input: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => input,
        UnitSystem::Imperial => ounces_to_grams(input),
    }
}

/// Celsius expressed in the unit system's temperature unit
#[must_use]
pub fn display_temperature(celsius: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => celsius_to_fahrenheit(celsius),
    }
}

/// Temperature typed in the unit system's unit, back to Celsius
#[must_use]
pub fn temperature_from_input(input: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => input,
        UnitSystem::Imperial => fahrenheit_to_celsius(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ounce_scenario() {
        assert!((grams_to_ounces(28.3495) - 1.0).abs() < 1e-12);
        assert!((ounces_to_grams(1.0) - 28.3495).abs() < 1e-12);
    }

    #[test]
    fn test_weight_round_trip() {
        let mut grams = 1.0;
        while grams <= 10_000.0 {
            let back = ounces_to_grams(grams_to_ounces(grams));
            assert!((back - grams).abs() < 1e-3, "round trip drifted at {grams} g");
            grams += 7.3;
        }
    }

    #[test]
    fn test_temperature() {
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-9);
        assert!((celsius_to_fahrenheit(-40.0) + 40.0).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(75.2) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_system_helpers() {
        assert!((convert_weight(500.0, UnitSystem::Metric) - 500.0).abs() < f64::EPSILON);
        assert!((convert_weight(28.3495, UnitSystem::Imperial) - 1.0).abs() < 1e-12);
        assert!((convert_to_grams(2.0, UnitSystem::Imperial) - 56.699).abs() < 1e-9);
        assert!((display_temperature(24.0, UnitSystem::Imperial) - 75.2).abs() < 1e-9);
        assert!((temperature_from_input(24.0, UnitSystem::Metric) - 24.0).abs() < f64::EPSILON);
    }
}
