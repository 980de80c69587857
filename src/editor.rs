// ABOUTME: Caller-side recipe editing: typed edits, range clamping and mode-matched recalculation
// ABOUTME: Every edit takes a recipe snapshot and returns a new, fully recalculated snapshot
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Editor
//!
//! The engine never validates ranges and never decides which side of a recipe
//! is authoritative. This layer does both: it clamps user input, applies one
//! [`RecipeEdit`], then runs the forward or reverse pass for the active
//! [`CalculatorMode`].
//!
//! ## Mode rules
//!
//! - Forward only: `SetWeightPerBall`, `SetHydration`, `SetIngredientPercentage`
//! - Reverse only: `SetIngredientWeight` on a regular ingredient
//! - `SetIngredientWeight` on a pre-ferment in forward mode re-derives its
//!   percentage from the current total flour before the forward pass
//! - Everything else is accepted in both modes

use doughcalc_core::constants::bakers::PERCENT;
use doughcalc_core::constants::limits;
use doughcalc_core::errors::{AppError, AppResult};
use doughcalc_core::models::{
    CalculatorMode, HydrationContribution, Ingredient, PreFermentMetadata, PreFermentType,
    Recipe, Settings,
};
use doughcalc_engine::formulation::{
    normalize_pre_ferment_weight, pre_ferment_percentage, recalculate_from_percentages,
    recalculate_from_weights, refresh_breakdown, retype_pre_ferment, total_flour_and_water,
    with_pre_ferment_metadata,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::logging::RecipeLogger;

/// Ingredient to append to a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "seed")]
pub enum NewIngredient {
    /// Regular additive seeded by baker's percentage
    Additive {
        /// Display label
        name: String,
        /// Baker's percentage
        percentage: f64,
        /// Hydration contribution
        #[serde(default)]
        contribution: HydrationContribution,
    },
    /// Regular additive seeded by weight in grams
    AdditiveByWeight {
        /// Display label
        name: String,
        /// Grams
        weight: f64,
        /// Hydration contribution
        #[serde(default)]
        contribution: HydrationContribution,
    },
    /// Pre-ferment seeded by baker's percentage
    PreFerment {
        /// Display label
        name: String,
        /// Catalog type; hydration starts at the type default
        kind: PreFermentType,
        /// Baker's percentage
        percentage: f64,
    },
    /// Pre-ferment seeded by total weight in grams
    PreFermentByWeight {
        /// Display label
        name: String,
        /// Catalog type; hydration starts at the type default
        kind: PreFermentType,
        /// Grams
        weight: f64,
    },
}

/// One user action on a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "edit", content = "value")]
pub enum RecipeEdit {
    /// Change the ball count (min 1)
    SetNumberOfBalls(u32),
    /// Change grams per ball (min 1); forward mode only
    SetWeightPerBall(f64),
    /// Change overall hydration ([0, 200]); forward mode only
    SetHydration(f64),
    /// Change a non-flour percentage (min 0); forward mode only
    SetIngredientPercentage {
        /// Ingredient id
        id: Uuid,
        /// New baker's percentage
        percentage: f64,
    },
    /// Change an ingredient weight in grams (min 0)
    SetIngredientWeight {
        /// Ingredient id
        id: Uuid,
        /// New weight
        weight: f64,
    },
    /// Rename an ingredient
    RenameIngredient {
        /// Ingredient id
        id: Uuid,
        /// New label
        name: String,
    },
    /// Change how a non-core additive counts toward hydration
    SetHydrationContribution {
        /// Ingredient id
        id: Uuid,
        /// New contribution
        contribution: HydrationContribution,
    },
    /// Append an ingredient
    AddIngredient(NewIngredient),
    /// Remove a non-core ingredient
    RemoveIngredient(Uuid),
    /// Switch a pre-ferment to another catalog type
    SetPreFermentType {
        /// Pre-ferment id
        id: Uuid,
        /// New type
        kind: PreFermentType,
    },
    /// Change a pre-ferment's own hydration ([0, 200])
    SetPreFermentHydration {
        /// Pre-ferment id
        id: Uuid,
        /// New hydration
        hydration: f64,
    },
    /// Change a pre-ferment's yeast percentage ([0, 10])
    SetPreFermentYeast {
        /// Pre-ferment id
        id: Uuid,
        /// New yeast percentage
        yeast_percentage: f64,
    },
}

impl RecipeEdit {
    /// Short name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetNumberOfBalls(_) => "set_number_of_balls",
            Self::SetWeightPerBall(_) => "set_weight_per_ball",
            Self::SetHydration(_) => "set_hydration",
            Self::SetIngredientPercentage { .. } => "set_ingredient_percentage",
            Self::SetIngredientWeight { .. } => "set_ingredient_weight",
            Self::RenameIngredient { .. } => "rename_ingredient",
            Self::SetHydrationContribution { .. } => "set_hydration_contribution",
            Self::AddIngredient(_) => "add_ingredient",
            Self::RemoveIngredient(_) => "remove_ingredient",
            Self::SetPreFermentType { .. } => "set_pre_ferment_type",
            Self::SetPreFermentHydration { .. } => "set_pre_ferment_hydration",
            Self::SetPreFermentYeast { .. } => "set_pre_ferment_yeast",
        }
    }
}

/// NaN-safe range clamp (NaN lands on `min`)
fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

const fn mode_label(mode: CalculatorMode) -> &'static str {
    match mode {
        CalculatorMode::Forward => "forward",
        CalculatorMode::Reverse => "reverse",
    }
}

fn position_of(recipe: &Recipe, id: Uuid) -> AppResult<usize> {
    recipe
        .ingredients
        .iter()
        .position(|i| i.id == id)
        .ok_or_else(|| AppError::not_found("Ingredient").with_resource_id(id.to_string()))
}

fn pre_ferment_position(recipe: &Recipe, id: Uuid) -> AppResult<usize> {
    let index = position_of(recipe, id)?;
    if recipe.ingredients[index].is_pre_ferment() {
        Ok(index)
    } else {
        Err(AppError::invalid_input(format!(
            "'{}' is not a pre-ferment",
            recipe.ingredients[index].name
        ))
        .with_resource_id(id.to_string()))
    }
}

/// Applies edits to recipe snapshots
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecipeEditor {
    mode: CalculatorMode,
    settings: Settings,
}

impl RecipeEditor {
    /// Editor for the given mode and settings
    ///
    /// The dough residue in `settings` is clamped to its accepted range.
    #[must_use]
    pub fn new(mode: CalculatorMode, settings: Settings) -> Self {
        Self { mode, settings }.with_dough_residue(settings.dough_residue_percentage)
    }

    /// Active mode
    #[must_use]
    pub const fn mode(&self) -> CalculatorMode {
        self.mode
    }

    /// Active settings
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Copy with a new dough residue, clamped to [0, 20]
    #[must_use]
    pub fn with_dough_residue(mut self, dough_residue_percentage: f64) -> Self {
        self.settings.dough_residue_percentage = clamp_range(
            dough_residue_percentage,
            limits::MIN_DOUGH_RESIDUE,
            limits::MAX_DOUGH_RESIDUE,
        );
        self
    }

    /// Run the active mode's recalculation
    #[must_use]
    pub fn recalculate(&self, recipe: &Recipe) -> Recipe {
        let result = match self.mode {
            CalculatorMode::Forward => {
                recalculate_from_percentages(recipe, self.settings.dough_residue_percentage)
            }
            CalculatorMode::Reverse => recalculate_from_weights(recipe),
        };
        RecipeLogger::log_recalculation(
            &result.name,
            self.mode_name(),
            result.total_ingredient_weight(),
            result.hydration,
        );
        result
    }

    /// Switch mode and bring the recipe into the new mode's shape
    ///
    /// Leaving reverse mode re-derives the weight per ball so the forward pass
    /// lands on the weighed total flour. The forward pass sizes dough as
    /// `total_flour * total_percentage / 100`; with pre-ferments that exceeds
    /// the weighed total by their flour and water.
    #[must_use]
    pub fn switch_mode(&self, recipe: &Recipe, mode: CalculatorMode) -> (Self, Recipe) {
        let editor = Self { mode, ..*self };
        let leaving_reverse = self.mode == CalculatorMode::Reverse && mode == CalculatorMode::Forward;
        let mut seeded = if leaving_reverse {
            recalculate_from_weights(recipe)
        } else {
            recipe.clone()
        };

        if leaving_reverse {
            let residue_factor = 1.0 + self.settings.dough_residue_percentage / PERCENT;
            let balls = f64::from(seeded.number_of_balls.max(limits::MIN_NUMBER_OF_BALLS));
            let totals = total_flour_and_water(&seeded.ingredients);
            let others: f64 = seeded.other_ingredients().map(|i| i.weight).sum();
            let forward_mass = totals.flour + totals.water + others;
            if forward_mass > 0.0 {
                seeded.weight_per_ball =
                    (forward_mass / (balls * residue_factor)).max(limits::MIN_WEIGHT_PER_BALL);
            }
            debug!(
                weight_per_ball = seeded.weight_per_ball,
                "weight per ball derived from weighed total"
            );
        }

        let result = editor.recalculate(&seeded);
        (editor, result)
    }

    /// Apply one edit and recalculate
    ///
    /// The input recipe is never modified.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the edit names an ingredient id not in the recipe
    /// - `InvalidInput` if the edit breaks a model rule (removing or re-scaling
    ///   flour, removing water, a pre-ferment edit on a regular ingredient) or
    ///   is not accepted in the active mode
    pub fn apply(&self, recipe: &Recipe, edit: RecipeEdit) -> AppResult<Recipe> {
        let edit_name = edit.name();
        let result = self.apply_edit(recipe, edit);
        if let Err(ref error) = result {
            warn!(edit = edit_name, mode = self.mode_name(), error = %error, "edit rejected");
        } else {
            debug!(edit = edit_name, mode = self.mode_name(), "edit applied");
        }
        result
    }

    fn apply_edit(&self, recipe: &Recipe, edit: RecipeEdit) -> AppResult<Recipe> {
        let mut next = recipe.clone();

        match edit {
            RecipeEdit::SetNumberOfBalls(balls) => {
                next.number_of_balls = balls.max(limits::MIN_NUMBER_OF_BALLS);
            }
            RecipeEdit::SetWeightPerBall(weight) => {
                self.require(CalculatorMode::Forward, "weight per ball")?;
                next.weight_per_ball = weight.max(limits::MIN_WEIGHT_PER_BALL);
            }
            RecipeEdit::SetHydration(hydration) => {
                self.require(CalculatorMode::Forward, "hydration")?;
                Self::set_hydration(&mut next, hydration);
            }
            RecipeEdit::SetIngredientPercentage { id, percentage } => {
                self.require(CalculatorMode::Forward, "percentages")?;
                let index = position_of(&next, id)?;
                let (is_flour, is_water) = {
                    let ingredient = &next.ingredients[index];
                    (ingredient.is_flour, ingredient.is_water)
                };
                if is_flour {
                    return Err(AppError::invalid_input("flour is fixed at 100%")
                        .with_resource_id(id.to_string()));
                }
                if is_water {
                    Self::set_hydration(&mut next, percentage);
                } else {
                    next.ingredients[index].percentage = non_negative(percentage);
                }
            }
            RecipeEdit::SetIngredientWeight { id, weight } => {
                return self.set_ingredient_weight(next, id, non_negative(weight));
            }
            RecipeEdit::RenameIngredient { id, name } => {
                let index = position_of(&next, id)?;
                next.ingredients[index].name = name;
            }
            RecipeEdit::SetHydrationContribution { id, contribution } => {
                let index = position_of(&next, id)?;
                if next.ingredients[index].is_core() {
                    return Err(AppError::invalid_input(
                        "flour and water already count toward hydration",
                    )
                    .with_resource_id(id.to_string()));
                }
                next.ingredients[index].hydration_contribution = contribution;
            }
            RecipeEdit::AddIngredient(new_ingredient) => {
                next.ingredients.push(self.seed(&next, new_ingredient));
            }
            RecipeEdit::RemoveIngredient(id) => {
                let index = position_of(&next, id)?;
                if next.ingredients[index].is_core() {
                    return Err(AppError::invalid_input(format!(
                        "'{}' is a core ingredient and cannot be removed",
                        next.ingredients[index].name
                    ))
                    .with_resource_id(id.to_string()));
                }
                next.ingredients.remove(index);
            }
            RecipeEdit::SetPreFermentType { id, kind } => {
                let index = pre_ferment_position(&next, id)?;
                next.ingredients[index] = retype_pre_ferment(&next.ingredients[index], kind);
            }
            RecipeEdit::SetPreFermentHydration { id, hydration } => {
                let index = pre_ferment_position(&next, id)?;
                let hydration =
                    clamp_range(hydration, limits::MIN_HYDRATION, limits::MAX_HYDRATION);
                self.update_metadata(&mut next, index, |m| m.with_hydration(hydration));
            }
            RecipeEdit::SetPreFermentYeast {
                id,
                yeast_percentage,
            } => {
                let index = pre_ferment_position(&next, id)?;
                let yeast = clamp_range(
                    yeast_percentage,
                    limits::MIN_PRE_FERMENT_YEAST,
                    limits::MAX_PRE_FERMENT_YEAST,
                );
                self.update_metadata(&mut next, index, |m| m.with_yeast_percentage(yeast));
            }
        }

        Ok(self.recalculate(&next))
    }

    fn set_ingredient_weight(&self, mut next: Recipe, id: Uuid, weight: f64) -> AppResult<Recipe> {
        let index = position_of(&next, id)?;

        match self.mode {
            CalculatorMode::Reverse => {
                next.ingredients[index].weight = weight;
            }
            CalculatorMode::Forward if next.ingredients[index].is_pre_ferment() => {
                next.ingredients = normalize_pre_ferment_weight(&next.ingredients, id, weight);
            }
            CalculatorMode::Forward => {
                return Err(AppError::invalid_input(
                    "weights of regular ingredients are derived in forward mode",
                )
                .with_resource_id(id.to_string()));
            }
        }

        Ok(self.recalculate(&next))
    }

    fn set_hydration(recipe: &mut Recipe, hydration: f64) {
        recipe.hydration = clamp_range(hydration, limits::MIN_HYDRATION, limits::MAX_HYDRATION);
        if let Some(water) = recipe.ingredients.iter_mut().find(|i| i.is_water) {
            water.percentage = recipe.hydration;
        }
    }

    fn update_metadata(
        &self,
        recipe: &mut Recipe,
        index: usize,
        update: impl FnOnce(PreFermentMetadata) -> PreFermentMetadata,
    ) {
        let ingredient = &recipe.ingredients[index];
        if let Some(metadata) = ingredient.pre_ferment_metadata().copied() {
            recipe.ingredients[index] = with_pre_ferment_metadata(ingredient, update(metadata));
        } else {
            debug!(mode = self.mode_name(), "metadata update on regular ingredient ignored");
        }
    }

    /// Build a new ingredient whose unseeded side is derived from current totals
    fn seed(&self, recipe: &Recipe, new_ingredient: NewIngredient) -> Ingredient {
        let (ingredient, seeded_by_weight) = match new_ingredient {
            NewIngredient::Additive {
                name,
                percentage,
                contribution,
            } => (
                Ingredient::additive(name, non_negative(percentage))
                    .with_hydration_contribution(contribution),
                false,
            ),
            NewIngredient::AdditiveByWeight {
                name,
                weight,
                contribution,
            } => (
                Ingredient::by_weight(name, non_negative(weight))
                    .with_hydration_contribution(contribution),
                true,
            ),
            NewIngredient::PreFerment {
                name,
                kind,
                percentage,
            } => (
                Ingredient::pre_ferment(
                    name,
                    PreFermentMetadata::new(kind),
                    non_negative(percentage),
                ),
                false,
            ),
            NewIngredient::PreFermentByWeight { name, kind, weight } => {
                let mut ingredient =
                    Ingredient::pre_ferment(name, PreFermentMetadata::new(kind), 0.0);
                ingredient.weight = non_negative(weight);
                (refresh_breakdown(&ingredient), true)
            }
        };

        let mut with_new: Vec<Ingredient> = recipe.ingredients.clone();
        with_new.push(ingredient.clone());
        let current_total_flour = total_flour_and_water(&with_new).flour;

        match (self.mode, seeded_by_weight) {
            (CalculatorMode::Forward, true) => Ingredient {
                percentage: pre_ferment_percentage(ingredient.weight, current_total_flour)
                    .unwrap_or(0.0),
                ..ingredient
            },
            (CalculatorMode::Reverse, false) => {
                let weight = current_total_flour * ingredient.percentage / PERCENT;
                refresh_breakdown(&Ingredient {
                    weight,
                    ..ingredient
                })
            }
            _ => ingredient,
        }
    }

    fn require(&self, mode: CalculatorMode, what: &str) -> AppResult<()> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "{what} can only be edited in {} mode",
                mode_label(mode)
            )))
        }
    }

    const fn mode_name(&self) -> &'static str {
        mode_label(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_range_handles_nan() {
        assert!((clamp_range(f64::NAN, 0.0, 200.0)).abs() < f64::EPSILON);
        assert!((clamp_range(250.0, 0.0, 200.0) - 200.0).abs() < f64::EPSILON);
        assert!((non_negative(-3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edit_names_are_snake_case() {
        assert_eq!(RecipeEdit::SetHydration(70.0).name(), "set_hydration");
        assert_eq!(
            RecipeEdit::RemoveIngredient(Uuid::new_v4()).name(),
            "remove_ingredient"
        );
    }

    #[test]
    fn test_new_editor_clamps_residue() {
        let settings = Settings {
            dough_residue_percentage: 45.0,
            ..Settings::default()
        };
        let editor = RecipeEditor::new(CalculatorMode::Forward, settings);
        assert!((editor.settings().dough_residue_percentage - 20.0).abs() < f64::EPSILON);
    }
}
