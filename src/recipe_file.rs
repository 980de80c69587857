// ABOUTME: JSON recipe documents on disk
// ABOUTME: Load and save Recipe values with storage and serialization errors mapped to AppError
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::fs;
use std::path::Path;

use doughcalc_core::errors::{AppError, AppResult};
use doughcalc_core::models::Recipe;
use tracing::debug;

use crate::logging::RecipeLogger;

/// Read a recipe from a JSON file
///
/// # Errors
///
/// - `StorageError` if the file cannot be read
/// - `SerializationError` if it is not a valid recipe document
pub fn load_recipe(path: &Path) -> AppResult<Recipe> {
    let shown = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|e| {
        RecipeLogger::log_file_operation("load", &shown, false);
        AppError::storage(format!("cannot read {shown}: {e}"))
            .with_resource_id(shown.clone())
            .with_source(e)
    })?;

    let recipe: Recipe = serde_json::from_str(&contents).map_err(|e| {
        RecipeLogger::log_file_operation("load", &shown, false);
        AppError::serialization(format!("{shown} is not a valid recipe: {e}"))
            .with_resource_id(shown.clone())
            .with_source(e)
    })?;

    debug!(path = %shown, ingredients = recipe.ingredients.len(), "recipe loaded");
    RecipeLogger::log_file_operation("load", &shown, true);
    Ok(recipe)
}

/// Write a recipe as pretty-printed JSON, replacing any existing file
///
/// # Errors
///
/// - `SerializationError` if the recipe cannot be encoded
/// - `StorageError` if the file cannot be written
pub fn save_recipe(path: &Path, recipe: &Recipe) -> AppResult<()> {
    let shown = path.display().to_string();

    let mut json = serde_json::to_string_pretty(recipe)?;
    json.push('\n');

    fs::write(path, json).map_err(|e| {
        RecipeLogger::log_file_operation("save", &shown, false);
        AppError::storage(format!("cannot write {shown}: {e}"))
            .with_resource_id(shown.clone())
            .with_source(e)
    })?;

    RecipeLogger::log_file_operation("save", &shown, true);
    Ok(())
}
