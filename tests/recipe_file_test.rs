// ABOUTME: Integration tests for recipe file persistence
// ABOUTME: Validates save/load round trips and storage/serialization error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use doughcalc::editor::RecipeEditor;
use doughcalc::errors::ErrorCode;
use doughcalc::models::{CalculatorMode, Settings, Step};
use doughcalc::recipe_file::{load_recipe, save_recipe};
use tempfile::TempDir;

mod common;

use common::recipe_with_poolish;

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pizza.json");

    let editor = RecipeEditor::new(CalculatorMode::Forward, Settings::default());
    let recipe = editor.recalculate(
        &recipe_with_poolish()
            .with_step(Step::new("Mix poolish", 0).with_waiting_time(720))
            .with_step(Step::new("Bake", 1).with_temperature(450.0)),
    );

    save_recipe(&path, &recipe).unwrap();
    let loaded = load_recipe(&path).unwrap();

    assert_eq!(loaded, recipe);
    assert!(fs::read_to_string(&path).unwrap().ends_with('\n'));
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pizza.json");
    fs::write(&path, "stale").unwrap();

    let recipe = recipe_with_poolish();
    save_recipe(&path, &recipe).unwrap();

    assert_eq!(load_recipe(&path).unwrap().id, recipe.id);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let error = load_recipe(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(
        error.context.resource_id,
        Some(path.display().to_string())
    );
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"name": "half a recipe""#).unwrap();

    let error = load_recipe(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.message.contains("broken.json"));
}

#[test]
fn test_unwritable_path_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("pizza.json");

    let error = save_recipe(&path, &recipe_with_poolish()).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_optional_fields_default_when_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(
        &path,
        r#"{
            "id": "6f1f8a4e-1c1b-4d8e-9a57-2f0c8a3b9d10",
            "numberOfBalls": 2,
            "weightPerBall": 300.0,
            "hydration": 70.0,
            "ingredients": [
                {
                    "id": "0d7f5e9a-3b2c-4a1d-8e6f-9c0b1a2d3e4f",
                    "name": "Flour",
                    "percentage": 100.0,
                    "weight": 0.0,
                    "isFlour": true,
                    "isWater": false,
                    "ingredientType": "regular"
                }
            ]
        }"#,
    )
    .unwrap();

    let recipe = load_recipe(&path).unwrap();

    assert!(recipe.name.is_empty());
    assert!(recipe.steps.is_empty());
    assert_eq!(recipe.ingredients.len(), 1);
    assert!(recipe.ingredients[0].is_flour);
}
