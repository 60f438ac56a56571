// ABOUTME: Meal-planning integration over client allergy, preference, and cuisine selections
// ABOUTME: Builds provider constraints, validates selections per category, and reports provider capabilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::collections::{HashMap, HashSet};

use futures_util::future::join_all;
use tracing::{info, warn};

use super::{HealthLabelsTransformService, LabelCatalog};
use crate::constants::health_labels::{categories, legacy, providers};
use crate::models::{
    ClientGoalsHealthLabels, ClientGoalsValidation, HealthLabelsForProvider, LegacyHealthLabels,
    MealPlanningConstraints, ProviderCapabilities, StandardLabel,
};

/// Which client selection list an unsupported label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionKind {
    Allergy,
    Preference,
    Cuisine,
    Other,
}

impl SelectionKind {
    fn from_category(category_name: &str) -> Self {
        match category_name {
            categories::ALLERGY => Self::Allergy,
            categories::DIETARY_PREFERENCE => Self::Preference,
            categories::CUISINE_TYPE => Self::Cuisine,
            _ => Self::Other,
        }
    }
}

/// Client goals to meal-planning constraints
#[derive(Clone)]
pub struct ClientGoalsIntegration {
    transform: HealthLabelsTransformService,
    catalog: LabelCatalog,
    default_provider: String,
}

impl ClientGoalsIntegration {
    /// Create the integration layer
    #[must_use]
    pub fn new(
        transform: HealthLabelsTransformService,
        catalog: LabelCatalog,
        default_provider: impl Into<String>,
    ) -> Self {
        Self {
            transform,
            catalog,
            default_provider: default_provider.into(),
        }
    }

    /// Provider used when the caller does not name one
    #[must_use]
    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }

    /// Translate allergies and preferences for a provider
    pub async fn merge_allergies_and_preferences_for_provider(
        &self,
        allergies: &[String],
        preferences: &[String],
        provider_name: &str,
    ) -> HealthLabelsForProvider {
        self.transform
            .merge_allergies_and_preferences_for_provider(allergies, preferences, provider_name)
            .await
    }

    /// Provider-ready constraints for one provider
    pub async fn convert_client_goals_to_meal_planning_constraints(
        &self,
        goals: &ClientGoalsHealthLabels,
        provider_name: &str,
    ) -> MealPlanningConstraints {
        self.transform
            .convert_mixed_labels_for_provider(
                &goals.allergies,
                &goals.preferences,
                &goals.cuisine_types,
                provider_name,
            )
            .await
            .into()
    }

    /// Constraints for the default provider
    pub async fn meal_planning_constraints(
        &self,
        goals: &ClientGoalsHealthLabels,
    ) -> MealPlanningConstraints {
        self.convert_client_goals_to_meal_planning_constraints(goals, &self.default_provider)
            .await
    }

    /// Recipe search query pairs for a provider
    pub async fn recipe_search_params(
        &self,
        goals: &ClientGoalsHealthLabels,
        provider_name: &str,
    ) -> Vec<(&'static str, String)> {
        self.convert_client_goals_to_meal_planning_constraints(goals, provider_name)
            .await
            .recipe_search_params()
    }

    /// Constraints for several providers, translated concurrently
    ///
    /// An empty provider list means `edamam` and `spoonacular`.
    pub async fn multi_provider_meal_planning_constraints(
        &self,
        goals: &ClientGoalsHealthLabels,
        provider_names: &[String],
    ) -> HashMap<String, MealPlanningConstraints> {
        let provider_names: Vec<String> = if provider_names.is_empty() {
            providers::DEFAULT_MULTI_PROVIDER
                .iter()
                .map(|name| (*name).to_owned())
                .collect()
        } else {
            provider_names.to_vec()
        };

        let constraints = join_all(provider_names.iter().map(|provider_name| {
            self.convert_client_goals_to_meal_planning_constraints(goals, provider_name)
        }))
        .await;

        provider_names.into_iter().zip(constraints).collect()
    }

    /// Check every selection against a provider and group the gaps by category
    ///
    /// Labels missing from the catalog are grouped by the list the client put them
    /// in, and an unknown allergy counts as critical.
    pub async fn validate_client_goals_for_provider(
        &self,
        goals: &ClientGoalsHealthLabels,
        provider_name: &str,
    ) -> ClientGoalsValidation {
        let validation = self
            .transform
            .validate(&goals.all_labels(), provider_name)
            .await;
        if validation.valid {
            return ClientGoalsValidation {
                valid: true,
                ..ClientGoalsValidation::default()
            };
        }

        let catalog = self.catalog.list_standard_labels().await;
        let by_key: HashMap<&str, &StandardLabel> = catalog
            .iter()
            .map(|label| (label.label_key.as_str(), label))
            .collect();

        let mut report = ClientGoalsValidation::default();
        for label_key in validation.unsupported_labels {
            let (kind, critical) = by_key.get(label_key.as_str()).map_or_else(
                || {
                    let kind = selection_kind_from_goals(goals, &label_key);
                    (kind, kind == SelectionKind::Allergy)
                },
                |label| {
                    (
                        SelectionKind::from_category(&label.category_name),
                        label.severity_level.is_blocking(),
                    )
                },
            );

            if critical {
                report.critical_unsupported.push(label_key.clone());
            }
            match kind {
                SelectionKind::Allergy => report.unsupported_allergies.push(label_key),
                SelectionKind::Preference => report.unsupported_preferences.push(label_key),
                SelectionKind::Cuisine => report.unsupported_cuisines.push(label_key),
                SelectionKind::Other => {}
            }
        }

        push_warning(
            &mut report.warnings,
            "Critical allergies",
            provider_name,
            &report.unsupported_allergies,
        );
        push_warning(
            &mut report.warnings,
            "Dietary preferences",
            provider_name,
            &report.unsupported_preferences,
        );
        push_warning(
            &mut report.warnings,
            "Cuisine types",
            provider_name,
            &report.unsupported_cuisines,
        );

        if report.is_blocking() {
            warn!(
                provider = %provider_name,
                critical = ?report.critical_unsupported,
                "Client goals contain critical labels the provider cannot honor"
            );
        }
        report
    }

    /// Supported allergy, preference and cuisine keys for a provider
    pub async fn provider_capabilities(&self, provider_name: &str) -> ProviderCapabilities {
        let supported = self
            .transform
            .supported_labels_for_provider(provider_name)
            .await;
        let supported_set: HashSet<&str> = supported.iter().map(String::as_str).collect();

        let mut capabilities = ProviderCapabilities {
            total_supported: supported.len(),
            ..ProviderCapabilities::default()
        };
        for label in self.catalog.list_standard_labels().await {
            if !supported_set.contains(label.label_key.as_str()) {
                continue;
            }
            match SelectionKind::from_category(&label.category_name) {
                SelectionKind::Allergy => capabilities.supported_allergies.push(label.label_key),
                SelectionKind::Preference => {
                    capabilities.supported_preferences.push(label.label_key);
                }
                SelectionKind::Cuisine => capabilities.supported_cuisines.push(label.label_key),
                SelectionKind::Other => {}
            }
        }

        info!(
            provider = %provider_name,
            total_supported = capabilities.total_supported,
            "Computed provider capabilities"
        );
        capabilities
    }

    /// Every catalog cuisine expressed as the provider's cuisine tokens
    pub async fn provider_supported_cuisine_tokens(&self, provider_name: &str) -> Vec<String> {
        let cuisine_keys: Vec<String> = self
            .catalog
            .cuisine_types()
            .await
            .into_iter()
            .map(|label| label.label_key)
            .collect();

        self.transform
            .convert_cuisine_preferences(&cuisine_keys, provider_name)
            .await
    }
}

fn selection_kind_from_goals(goals: &ClientGoalsHealthLabels, label_key: &str) -> SelectionKind {
    let contains = |list: &[String]| list.iter().any(|label| label == label_key);
    if contains(&goals.allergies) {
        SelectionKind::Allergy
    } else if contains(&goals.preferences) {
        SelectionKind::Preference
    } else if contains(&goals.cuisine_types) {
        SelectionKind::Cuisine
    } else {
        SelectionKind::Other
    }
}

fn push_warning(warnings: &mut Vec<String>, subject: &str, provider_name: &str, labels: &[String]) {
    if !labels.is_empty() {
        warnings.push(format!(
            "{subject} not supported by {provider_name}: {}",
            labels.join(", ")
        ));
    }
}

/// Classify free-form legacy labels into allergy, preference and cuisine lists
///
/// Labels are lowercased with underscores and spaces turned into hyphens.
/// Unrecognised labels are treated as preferences. Each list is de-duplicated
/// keeping first occurrence.
#[must_use]
pub fn convert_legacy_health_labels<S: AsRef<str>>(labels: &[S]) -> LegacyHealthLabels {
    let mut converted = LegacyHealthLabels::default();

    for label in labels {
        let normalized = label.as_ref().to_lowercase().replace(['_', ' '], "-");
        let key = normalized.as_str();
        let bucket = if legacy::ALLERGY_PATTERNS.contains(&key) {
            &mut converted.allergies
        } else if legacy::CUISINE_PATTERNS.contains(&key) {
            &mut converted.cuisine_types
        } else {
            &mut converted.preferences
        };

        if !bucket.contains(&normalized) {
            bucket.push(normalized);
        }
    }

    converted
}
