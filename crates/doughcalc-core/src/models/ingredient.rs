// ABOUTME: Ingredient value type with core markers and the pre-ferment variant
// ABOUTME: Defines Ingredient, IngredientKind, PreFermentType, metadata and breakdown types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{bakers, pre_ferment};

/// How a non-core ingredient counts toward total flour or water mass
///
/// Lets an additive such as honey or milk participate in the hydration
/// calculation without being the canonical flour or water slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum HydrationContribution {
    /// Counts toward neither flour nor water
    #[default]
    None,
    /// Counts toward total flour mass
    Flour,
    /// Counts toward total water mass
    Water,
}

impl HydrationContribution {
    /// Label shown next to the ingredient
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "Other",
            Self::Flour => "Flour",
            Self::Water => "Water",
        }
    }
}

/// Fixed pre-ferment catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreFermentType {
    /// Liquid pre-ferment, equal parts flour and water
    Poolish,
    /// Stiff Italian pre-ferment
    Biga,
    /// Caller-chosen hydration
    Custom,
}

impl PreFermentType {
    /// Hydration offered when a pre-ferment of this type is created or retyped
    #[must_use]
    pub const fn default_hydration(&self) -> f64 {
        match self {
            Self::Poolish => pre_ferment::POOLISH_HYDRATION,
            Self::Biga => pre_ferment::BIGA_HYDRATION,
            Self::Custom => pre_ferment::CUSTOM_HYDRATION,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Poolish => "Poolish",
            Self::Biga => "Biga",
            Self::Custom => "Custom",
        }
    }

    /// One-line description of the pre-ferment style
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Poolish => "100% hydration, equal parts flour and water",
            Self::Biga => "55% hydration, stiffer pre-ferment",
            Self::Custom => "Custom hydration level",
        }
    }
}

/// Authoritative parameters of a pre-ferment
///
/// Both percentages are relative to the pre-ferment's own flour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreFermentMetadata {
    /// Catalog type
    #[serde(rename = "type")]
    pub kind: PreFermentType,
    /// Pre-ferment hydration percentage
    pub hydration: f64,
    /// Yeast percentage
    pub yeast_percentage: f64,
}

impl PreFermentMetadata {
    /// Metadata for a new pre-ferment using the catalog defaults
    #[must_use]
    pub const fn new(kind: PreFermentType) -> Self {
        Self {
            kind,
            hydration: kind.default_hydration(),
            yeast_percentage: pre_ferment::DEFAULT_YEAST_PERCENTAGE,
        }
    }

    /// Override the hydration
    #[must_use]
    pub const fn with_hydration(mut self, hydration: f64) -> Self {
        self.hydration = hydration;
        self
    }

    /// Override the yeast percentage
    #[must_use]
    pub const fn with_yeast_percentage(mut self, yeast_percentage: f64) -> Self {
        self.yeast_percentage = yeast_percentage;
        self
    }

    /// Change the catalog type
    ///
    /// Hydration resets to the new type's default unless the new type is
    /// `Custom`, in which case the current hydration is kept.
    #[must_use]
    pub const fn retyped(mut self, kind: PreFermentType) -> Self {
        self.kind = kind;
        if !matches!(kind, PreFermentType::Custom) {
            self.hydration = kind.default_hydration();
        }
        self
    }
}

/// Derived flour/water/leavening split of a pre-ferment
///
/// A cache, never edited directly: always recomputed from the owning
/// ingredient's weight and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PreFermentBreakdown {
    /// Flour in grams
    pub flour: f64,
    /// Water in grams
    pub water: f64,
    /// Yeast or starter in grams
    pub leavening: f64,
}

impl PreFermentBreakdown {
    /// Sum of the three components
    #[must_use]
    pub fn total(&self) -> f64 {
        self.flour + self.water + self.leavening
    }
}

/// Regular ingredient or pre-ferment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "ingredientType", rename_all = "camelCase")]
pub enum IngredientKind {
    /// Plain ingredient
    #[default]
    Regular,
    /// Separately fermented portion of flour, water and leavening
    PreFerment {
        /// Authoritative parameters
        #[serde(rename = "preFermentMetadata")]
        metadata: PreFermentMetadata,
        /// Derived split, recomputed on every write
        #[serde(rename = "subIngredients")]
        breakdown: PreFermentBreakdown,
    },
}

/// One dough component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Stable identity, unique within a recipe
    pub id: Uuid,
    /// Display label
    pub name: String,
    /// Baker's percentage relative to total flour
    pub percentage: f64,
    /// Absolute mass in grams
    pub weight: f64,
    /// Canonical flour slot
    pub is_flour: bool,
    /// Canonical water slot
    pub is_water: bool,
    /// Contribution toward hydration for non-core additives
    #[serde(default)]
    pub hydration_contribution: HydrationContribution,
    /// Regular or pre-ferment
    #[serde(flatten)]
    pub kind: IngredientKind,
}

impl Ingredient {
    fn base(name: impl Into<String>, percentage: f64, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            percentage,
            weight,
            is_flour: false,
            is_water: false,
            hydration_contribution: HydrationContribution::None,
            kind: IngredientKind::Regular,
        }
    }

    /// The flour slot, pinned at 100%
    #[must_use]
    pub fn flour(name: impl Into<String>) -> Self {
        Self {
            is_flour: true,
            ..Self::base(name, bakers::FLOUR_PERCENTAGE, 0.0)
        }
    }

    /// The water slot at the given hydration
    #[must_use]
    pub fn water(name: impl Into<String>, hydration: f64) -> Self {
        Self {
            is_water: true,
            ..Self::base(name, hydration, 0.0)
        }
    }

    /// A regular additive seeded by percentage
    #[must_use]
    pub fn additive(name: impl Into<String>, percentage: f64) -> Self {
        Self::base(name, percentage, 0.0)
    }

    /// A regular additive seeded by weight in grams
    #[must_use]
    pub fn by_weight(name: impl Into<String>, weight: f64) -> Self {
        Self::base(name, 0.0, weight)
    }

    /// A pre-ferment seeded by percentage
    ///
    /// Weight and breakdown start at zero and are filled in by the first
    /// recalculation.
    #[must_use]
    pub fn pre_ferment(
        name: impl Into<String>,
        metadata: PreFermentMetadata,
        percentage: f64,
    ) -> Self {
        Self {
            kind: IngredientKind::PreFerment {
                metadata,
                breakdown: PreFermentBreakdown::default(),
            },
            ..Self::base(name, percentage, 0.0)
        }
    }

    /// Set the hydration contribution
    #[must_use]
    pub const fn with_hydration_contribution(mut self, contribution: HydrationContribution) -> Self {
        self.hydration_contribution = contribution;
        self
    }

    /// Flour or water slot; core ingredients cannot be removed
    #[must_use]
    pub const fn is_core(&self) -> bool {
        self.is_flour || self.is_water
    }

    /// Whether this ingredient is a pre-ferment
    #[must_use]
    pub const fn is_pre_ferment(&self) -> bool {
        matches!(self.kind, IngredientKind::PreFerment { .. })
    }

    /// Pre-ferment parameters, if any
    #[must_use]
    pub const fn pre_ferment_metadata(&self) -> Option<&PreFermentMetadata> {
        match &self.kind {
            IngredientKind::PreFerment { metadata, .. } => Some(metadata),
            IngredientKind::Regular => None,
        }
    }

    /// Cached pre-ferment split, if any
    #[must_use]
    pub const fn breakdown(&self) -> Option<&PreFermentBreakdown> {
        match &self.kind {
            IngredientKind::PreFerment { breakdown, .. } => Some(breakdown),
            IngredientKind::Regular => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_default_hydration() {
        assert!((PreFermentMetadata::new(PreFermentType::Poolish).hydration - 100.0).abs() < f64::EPSILON);
        assert!((PreFermentMetadata::new(PreFermentType::Biga).hydration - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retype_keeps_hydration_only_for_custom() {
        let custom = PreFermentMetadata::new(PreFermentType::Poolish)
            .with_hydration(80.0)
            .retyped(PreFermentType::Custom);
        assert!((custom.hydration - 80.0).abs() < f64::EPSILON);

        let biga = custom.retyped(PreFermentType::Biga);
        assert!((biga.hydration - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_core_flags() {
        assert!(Ingredient::flour("Flour").is_core());
        assert!(Ingredient::water("Water", 65.0).is_core());
        assert!(!Ingredient::additive("Salt", 2.5).is_core());
    }

    #[test]
    fn test_regular_ingredient_has_no_pre_ferment_data() {
        let salt = Ingredient::additive("Salt", 2.5);
        assert!(!salt.is_pre_ferment());
        assert!(salt.pre_ferment_metadata().is_none());
        assert!(salt.breakdown().is_none());
    }

    #[test]
    fn test_pre_ferment_serializes_with_tag_and_metadata() {
        let poolish = Ingredient::pre_ferment(
            "Poolish",
            PreFermentMetadata::new(PreFermentType::Poolish),
            20.0,
        );
        let json = serde_json::to_value(&poolish).unwrap();

        assert_eq!(json["ingredientType"], "preFerment");
        assert_eq!(json["preFermentMetadata"]["type"], "poolish");
        assert!(json["subIngredients"]["leavening"].is_number());
        assert_eq!(json["hydrationContribution"], "none");

        let back: Ingredient = serde_json::from_value(json).unwrap();
        assert_eq!(back, poolish);
    }

    #[test]
    fn test_regular_ingredient_deserializes_without_contribution_field() {
        let json = serde_json::json!({
            "id": "6f1c1f52-9a4b-4f5e-8d4e-7a3a2a1b0c0d",
            "name": "Salt",
            "percentage": 2.5,
            "weight": 15.0,
            "isFlour": false,
            "isWater": false,
            "ingredientType": "regular"
        });
        let salt: Ingredient = serde_json::from_value(json).unwrap();
        assert_eq!(salt.hydration_contribution, HydrationContribution::None);
        assert_eq!(salt.kind, IngredientKind::Regular);
    }
}
