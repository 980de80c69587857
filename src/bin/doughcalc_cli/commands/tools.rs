// ABOUTME: Stand-alone calculation commands for the doughcalc CLI
// ABOUTME: Pre-ferment decomposition and unit conversion, no recipe file involved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughcalc::constants::{limits, units};
use doughcalc::conversion::{
    celsius_to_fahrenheit, convert_to_grams, fahrenheit_to_celsius, grams_to_ounces,
    ounces_to_grams,
};
use doughcalc::errors::{AppError, AppResult};
use doughcalc::formulation::breakdown_for;
use doughcalc::models::{PreFermentMetadata, PreFermentType};

use super::CommandContext;
use crate::helpers::display::{emit_breakdown, emit_conversion};
use crate::Conversion;

/// Decompose a pre-ferment weight typed in the display unit
pub fn preferment(
    ctx: &CommandContext,
    weight: f64,
    kind: PreFermentType,
    hydration: Option<f64>,
    yeast: Option<f64>,
) -> AppResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(AppError::invalid_input(format!(
            "pre-ferment weight must be a non-negative number, got {weight}"
        )));
    }

    let mut metadata = PreFermentMetadata::new(kind);
    if let Some(hydration) = hydration {
        metadata = metadata
            .with_hydration(hydration.max(limits::MIN_HYDRATION).min(limits::MAX_HYDRATION));
    }
    if let Some(yeast) = yeast {
        metadata = metadata.with_yeast_percentage(
            yeast
                .max(limits::MIN_PRE_FERMENT_YEAST)
                .min(limits::MAX_PRE_FERMENT_YEAST),
        );
    }

    let grams = convert_to_grams(weight, ctx.settings.unit_system);
    let breakdown = breakdown_for(grams, &metadata);
    emit_breakdown(ctx, &metadata, grams, &breakdown)
}

/// Run one unit conversion
pub fn convert(ctx: &CommandContext, conversion: Conversion, value: f64) -> AppResult<()> {
    let (result, from, to) = match conversion {
        Conversion::GToOz => (
            grams_to_ounces(value),
            units::GRAMS_LABEL,
            units::OUNCES_LABEL,
        ),
        Conversion::OzToG => (
            ounces_to_grams(value),
            units::OUNCES_LABEL,
            units::GRAMS_LABEL,
        ),
        Conversion::CToF => (
            celsius_to_fahrenheit(value),
            units::CELSIUS_LABEL,
            units::FAHRENHEIT_LABEL,
        ),
        Conversion::FToC => (
            fahrenheit_to_celsius(value),
            units::FAHRENHEIT_LABEL,
            units::CELSIUS_LABEL,
        ),
    };
    emit_conversion(ctx, value, from, result, to)
}
