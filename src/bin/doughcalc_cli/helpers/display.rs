// ABOUTME: Output rendering helpers for the doughcalc CLI
// ABOUTME: Aligned tables in the display unit system, or JSON/TOON documents for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughcalc::conversion::{convert_weight, display_temperature};
use doughcalc::errors::{AppError, AppResult};
use doughcalc::formatters::{
    format_output_pretty, format_percentage, format_temperature, format_weight, OutputFormat,
};
use doughcalc::models::{PreFermentBreakdown, PreFermentMetadata, Recipe, UnitSystem};
use serde::Serialize;

use crate::commands::CommandContext;

const RULE_WIDTH: usize = 48;

/// Which side of the recipe was derived, shown in the table header
#[derive(Clone, Copy)]
pub enum DisplayMode {
    Forward,
    Reverse,
}

impl DisplayMode {
    const fn label(self) -> &'static str {
        match self {
            Self::Forward => "weights from percentages",
            Self::Reverse => "percentages from weights",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreFermentReport<'a> {
    metadata: &'a PreFermentMetadata,
    weight: f64,
    breakdown: &'a PreFermentBreakdown,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionReport<'a> {
    input: f64,
    from: &'a str,
    output: f64,
    to: &'a str,
}

fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> AppResult<()> {
    let output = format_output_pretty(value, format)
        .map_err(|e| AppError::serialization(e.to_string()).with_source(e))?;
    println!("{}", output.data);
    Ok(())
}

fn weight(grams: f64, unit_system: UnitSystem) -> String {
    format_weight(convert_weight(grams, unit_system), unit_system)
}

fn print_breakdown_rows(breakdown: &PreFermentBreakdown, unit_system: UnitSystem, indent: &str) {
    println!("{indent}{:<18} {:>22}", "flour", weight(breakdown.flour, unit_system));
    println!("{indent}{:<18} {:>22}", "water", weight(breakdown.water, unit_system));
    println!(
        "{indent}{:<18} {:>22}",
        "leavening",
        weight(breakdown.leavening, unit_system)
    );
}

/// Print a recipe as a table, or as a document in JSON/TOON mode
pub fn emit_recipe(ctx: &CommandContext, recipe: &Recipe, mode: DisplayMode) -> AppResult<()> {
    if let Some(format) = ctx.format.output_format() {
        return print_structured(recipe, format);
    }

    let unit_system = ctx.settings.unit_system;

    println!("\n{} ({})", recipe.name, mode.label());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "   Dough: {} x {} = {}",
        recipe.number_of_balls,
        weight(recipe.weight_per_ball, unit_system),
        weight(recipe.total_dough_weight(), unit_system)
    );
    println!("   Hydration: {}", format_percentage(recipe.hydration));
    println!(
        "   Dough residue: {}",
        format_percentage(ctx.settings.dough_residue_percentage)
    );
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("{:<24} {:>10} {:>12}", "Ingredient", "%", "Weight");

    for ingredient in &recipe.ingredients {
        println!(
            "{:<24} {:>10} {:>12}",
            ingredient.name,
            format_percentage(ingredient.percentage),
            weight(ingredient.weight, unit_system)
        );
        if let (Some(metadata), Some(breakdown)) =
            (ingredient.pre_ferment_metadata(), ingredient.breakdown())
        {
            println!(
                "   {} at {} hydration, {} yeast",
                metadata.kind.display_name(),
                format_percentage(metadata.hydration),
                format_percentage(metadata.yeast_percentage)
            );
            print_breakdown_rows(breakdown, unit_system, "   ");
        }
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "{:<24} {:>10} {:>12}",
        "Total",
        "",
        weight(recipe.total_ingredient_weight(), unit_system)
    );

    let steps = recipe.ordered_steps();
    if !steps.is_empty() {
        println!("\nSteps");
        for (n, step) in steps.iter().enumerate() {
            let mut line = format!("{:>3}. {}", n + 1, step.description);
            if step.has_timer() {
                let minutes = step.waiting_time_minutes.unwrap_or_default();
                line.push_str(&format!(" (wait {minutes} min)"));
            }
            if let Some(celsius) = step.temperature_celsius {
                let shown = display_temperature(celsius, unit_system);
                line.push_str(&format!(" at {}", format_temperature(shown, unit_system)));
            }
            println!("{line}");
        }
    }
    Ok(())
}

/// Print a pre-ferment decomposition
pub fn emit_breakdown(
    ctx: &CommandContext,
    metadata: &PreFermentMetadata,
    grams: f64,
    breakdown: &PreFermentBreakdown,
) -> AppResult<()> {
    if let Some(format) = ctx.format.output_format() {
        let report = PreFermentReport {
            metadata,
            weight: grams,
            breakdown,
        };
        return print_structured(&report, format);
    }

    let unit_system = ctx.settings.unit_system;
    println!(
        "\n{} ({})",
        metadata.kind.display_name(),
        metadata.kind.description()
    );
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Weight: {}", weight(grams, unit_system));
    println!("   Hydration: {}", format_percentage(metadata.hydration));
    println!("   Yeast: {}", format_percentage(metadata.yeast_percentage));
    println!("{}", "-".repeat(RULE_WIDTH));
    print_breakdown_rows(breakdown, unit_system, "");
    Ok(())
}

/// Print a unit conversion
pub fn emit_conversion(
    ctx: &CommandContext,
    input: f64,
    from: &str,
    output: f64,
    to: &str,
) -> AppResult<()> {
    if let Some(format) = ctx.format.output_format() {
        let report = ConversionReport {
            input,
            from,
            output,
            to,
        };
        return print_structured(&report, format);
    }

    println!("{input} {from} = {output:.4} {to}");
    Ok(())
}
