// ABOUTME: Recipe aggregate: dough size, overall hydration, ingredients and steps
// ABOUTME: Provides read-only accessors for the core slots used by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ingredient::Ingredient;
use super::step::Step;
use crate::constants::recipe_defaults;

/// A dough recipe
///
/// In forward mode percentages are authoritative and weights derived; in
/// reverse mode the opposite. Which one applies is declared by the caller,
/// never inferred from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Number of dough balls (at least 1)
    pub number_of_balls: u32,
    /// Grams per dough ball
    pub weight_per_ball: f64,
    /// Overall hydration percentage
    pub hydration: f64,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Create a recipe with no ingredients
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        number_of_balls: u32,
        weight_per_ball: f64,
        hydration: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number_of_balls,
            weight_per_ball,
            hydration,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Add a preparation step
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// `number_of_balls * weight_per_ball`
    #[must_use]
    pub fn total_dough_weight(&self) -> f64 {
        f64::from(self.number_of_balls) * self.weight_per_ball
    }

    /// Sum of ingredient weights (pre-ferments counted once, as a whole)
    #[must_use]
    pub fn total_ingredient_weight(&self) -> f64 {
        self.ingredients.iter().map(|i| i.weight).sum()
    }

    /// First ingredient flagged as flour
    #[must_use]
    pub fn flour(&self) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.is_flour)
    }

    /// First ingredient flagged as water
    #[must_use]
    pub fn water(&self) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.is_water)
    }

    /// Every non-core ingredient, pre-ferments included
    pub fn other_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| !i.is_core())
    }

    /// Every pre-ferment ingredient
    pub fn pre_ferments(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.is_pre_ferment())
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn ingredient(&self, id: Uuid) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Steps sorted by their `order` field
    #[must_use]
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }
}

impl Default for Recipe {
    /// Four 250 g balls at 65% hydration with salt and yeast
    fn default() -> Self {
        Self::new(
            "Pizza Dough",
            recipe_defaults::NUMBER_OF_BALLS,
            recipe_defaults::WEIGHT_PER_BALL,
            recipe_defaults::HYDRATION,
        )
        .with_ingredients(vec![
            Ingredient::flour("Flour"),
            Ingredient::water("Water", recipe_defaults::HYDRATION),
            Ingredient::additive("Salt", recipe_defaults::SALT_PERCENTAGE),
            Ingredient::additive("Yeast", recipe_defaults::YEAST_PERCENTAGE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_dough_weight() {
        let recipe = Recipe::default();
        assert!((recipe.total_dough_weight() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_core_accessors() {
        let recipe = Recipe::default();
        assert_eq!(recipe.flour().map(|i| i.name.as_str()), Some("Flour"));
        assert_eq!(recipe.water().map(|i| i.name.as_str()), Some("Water"));
        assert_eq!(recipe.other_ingredients().count(), 2);
        assert_eq!(recipe.pre_ferments().count(), 0);
    }

    #[test]
    fn test_ordered_steps() {
        let recipe = Recipe::default()
            .with_step(Step::new("Bake", 2))
            .with_step(Step::new("Mix", 0))
            .with_step(Step::new("Bulk ferment", 1));
        let names: Vec<&str> = recipe
            .ordered_steps()
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(names, vec!["Mix", "Bulk ferment", "Bake"]);
    }

    #[test]
    fn test_recipe_json_uses_camel_case() {
        let json = serde_json::to_value(Recipe::default()).unwrap();
        assert_eq!(json["numberOfBalls"], 4);
        assert!(json["weightPerBall"].is_number());
        assert_eq!(json["ingredients"][0]["isFlour"], true);
    }
}
