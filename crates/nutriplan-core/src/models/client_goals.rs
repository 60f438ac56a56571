// ABOUTME: Client-goal inputs and meal-planning constraint outputs
// ABOUTME: Builds provider search parameters and carries per-category validation findings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use serde::{Deserialize, Serialize};

use super::HealthLabelsForProvider;
use crate::constants::health_labels::search_params;

/// A client's dietary selections, as standard label keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientGoalsHealthLabels {
    /// Allergy label keys
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Dietary preference label keys
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Cuisine label keys
    #[serde(default)]
    pub cuisine_types: Vec<String>,
}

impl ClientGoalsHealthLabels {
    /// Allergies, preferences and cuisines concatenated in that order
    #[must_use]
    pub fn all_labels(&self) -> Vec<String> {
        self.allergies
            .iter()
            .chain(&self.preferences)
            .chain(&self.cuisine_types)
            .cloned()
            .collect()
    }

    /// Whether the client selected nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.preferences.is_empty() && self.cuisine_types.is_empty()
    }
}

/// Legacy free-form labels classified into buckets
pub type LegacyHealthLabels = ClientGoalsHealthLabels;

/// Provider-ready constraints for meal-plan generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanningConstraints {
    /// Target provider
    pub provider: String,
    /// Provider health-label tokens
    pub health_labels: Vec<String>,
    /// Provider cuisine-type tokens
    pub cuisine_types: Vec<String>,
    /// Same tokens as `health_labels`, kept for older request builders
    pub dietary_restrictions: Vec<String>,
    /// Same tokens as `cuisine_types`, kept for older request builders
    pub cuisine_preferences: Vec<String>,
}

impl From<HealthLabelsForProvider> for MealPlanningConstraints {
    fn from(result: HealthLabelsForProvider) -> Self {
        Self {
            dietary_restrictions: result.health_labels.clone(),
            cuisine_preferences: result.cuisine_types.clone(),
            provider: result.provider,
            health_labels: result.health_labels,
            cuisine_types: result.cuisine_types,
        }
    }
}

impl MealPlanningConstraints {
    /// Recipe search query pairs: one `health` pair per health token, one
    /// `cuisineType` pair per cuisine token
    #[must_use]
    pub fn recipe_search_params(&self) -> Vec<(&'static str, String)> {
        self.health_labels
            .iter()
            .map(|token| (search_params::HEALTH, token.clone()))
            .chain(
                self.cuisine_types
                    .iter()
                    .map(|token| (search_params::CUISINE_TYPE, token.clone())),
            )
            .collect()
    }
}

/// Per-category support check of a client's selections against one provider
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientGoalsValidation {
    /// True when every selection is supported
    pub valid: bool,
    /// Unsupported allergy keys
    pub unsupported_allergies: Vec<String>,
    /// Unsupported dietary preference keys
    pub unsupported_preferences: Vec<String>,
    /// Unsupported cuisine keys
    pub unsupported_cuisines: Vec<String>,
    /// Unsupported keys whose severity is critical; callers must not plan meals
    /// while this is non-empty
    pub critical_unsupported: Vec<String>,
    /// Human-readable warnings
    pub warnings: Vec<String>,
}

impl ClientGoalsValidation {
    /// Whether plan generation must stop
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.critical_unsupported.is_empty()
    }
}
