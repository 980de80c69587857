// ABOUTME: Recipe file commands for the doughcalc CLI
// ABOUTME: Handles init, forward, reverse and scale over JSON recipe files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use doughcalc::editor::RecipeEdit;
use doughcalc::errors::{AppError, AppResult};
use doughcalc::models::{CalculatorMode, Recipe};
use doughcalc::recipe_file::{load_recipe, save_recipe};
use doughcalc::scaling::{scale_recipe, ScalePlan};
use tracing::info;

use super::CommandContext;
use crate::helpers::display::{emit_recipe, DisplayMode};

type Result<T> = AppResult<T>;

/// Flags accepted by `init`
pub struct InitOptions {
    pub name: Option<String>,
    pub balls: Option<u32>,
    pub weight_per_ball: Option<f64>,
    pub hydration: Option<f64>,
    pub force: bool,
}

/// Create a recipe file from the default dough, with optional overrides
pub fn init(ctx: &CommandContext, path: &Path, options: InitOptions) -> Result<()> {
    if path.exists() && !options.force {
        return Err(AppError::invalid_input(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .with_resource_id(path.display().to_string()));
    }

    let editor = ctx.editor(CalculatorMode::Forward);
    let mut recipe = editor.recalculate(&Recipe::default());
    if let Some(name) = options.name {
        recipe.name = name;
    }

    let edits = [
        options.balls.map(RecipeEdit::SetNumberOfBalls),
        options.weight_per_ball.map(RecipeEdit::SetWeightPerBall),
        options.hydration.map(RecipeEdit::SetHydration),
    ];
    for edit in edits.into_iter().flatten() {
        recipe = editor.apply(&recipe, edit)?;
    }

    save_recipe(path, &recipe)?;
    info!(path = %path.display(), recipe = %recipe.name, "recipe file created");
    emit_recipe(ctx, &recipe, DisplayMode::Forward)
}

/// Forward pass over a recipe file
pub fn forward(ctx: &CommandContext, path: &Path, from_weights: bool, write: bool) -> Result<()> {
    let recipe = load_recipe(path)?;

    let result = if from_weights {
        let reverse = ctx.editor(CalculatorMode::Reverse);
        let weighed = reverse.recalculate(&recipe);
        let (_, result) = reverse.switch_mode(&weighed, CalculatorMode::Forward);
        result
    } else {
        ctx.editor(CalculatorMode::Forward).recalculate(&recipe)
    };

    finish(ctx, path, &result, write, DisplayMode::Forward)
}

/// Reverse pass over a recipe file
pub fn reverse(ctx: &CommandContext, path: &Path, write: bool) -> Result<()> {
    let recipe = load_recipe(path)?;
    let result = ctx.editor(CalculatorMode::Reverse).recalculate(&recipe);
    finish(ctx, path, &result, write, DisplayMode::Reverse)
}

/// Scale a recipe file by ball count or multiplier
pub fn scale(
    ctx: &CommandContext,
    path: &Path,
    balls: Option<u32>,
    multiplier: Option<f64>,
    write: bool,
) -> Result<()> {
    let plan = match (balls, multiplier) {
        (Some(balls), _) => ScalePlan::BallCount(balls),
        (None, Some(multiplier)) => ScalePlan::Multiplier(multiplier),
        (None, None) => {
            return Err(AppError::invalid_input(
                "scale needs --balls or --multiplier",
            ))
        }
    };

    let recipe = load_recipe(path)?;
    let residue = ctx.editor(CalculatorMode::Forward).settings().dough_residue_percentage;
    let scaled = scale_recipe(&recipe, plan, residue);
    info!(?plan, balls = scaled.number_of_balls, "recipe scaled");

    finish(ctx, path, &scaled, write, DisplayMode::Forward)
}

fn finish(
    ctx: &CommandContext,
    path: &Path,
    recipe: &Recipe,
    write: bool,
    mode: DisplayMode,
) -> Result<()> {
    if write {
        save_recipe(path, recipe)?;
    }
    emit_recipe(ctx, recipe, mode)
}
