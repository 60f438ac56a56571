// ABOUTME: Default health-label catalog with Edamam and Spoonacular provider mappings
// ABOUTME: Seeds categories, standard labels, providers, and mappings into an empty database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Default catalog seeding
//!
//! Run through the `seed-health-labels` binary or call [`seed_default_catalog`]
//! after migrations. Seeding is skipped when categories already exist.

use tracing::info;
use uuid::Uuid;

use super::{HealthLabelsManager, HealthLabelsStore};
use crate::constants::health_labels::{categories, providers};
use crate::errors::{AppError, AppResult};
use crate::models::{NewCategory, NewMapping, NewProvider, NewStandardLabel, SeverityLevel};

struct CategorySeed {
    name: &'static str,
    description: &'static str,
    priority: i32,
}

struct ProviderSeed {
    name: &'static str,
    display_name: &'static str,
    api_base_url: &'static str,
    priority: i32,
}

struct LabelSeed {
    category: &'static str,
    key: &'static str,
    display_name: &'static str,
    severity: SeverityLevel,
    edamam: Option<&'static str>,
    spoonacular: Option<&'static str>,
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: categories::ALLERGY,
        description: "Food allergies and intolerances that must be excluded",
        priority: 1,
    },
    CategorySeed {
        name: categories::DIETARY_PREFERENCE,
        description: "Lifestyle and religious dietary choices",
        priority: 2,
    },
    CategorySeed {
        name: categories::CUISINE_TYPE,
        description: "Preferred cuisines",
        priority: 3,
    },
    CategorySeed {
        name: categories::NUTRITION_FOCUS,
        description: "Health-driven nutrition goals",
        priority: 4,
    },
];

const PROVIDERS: &[ProviderSeed] = &[
    ProviderSeed {
        name: providers::EDAMAM,
        display_name: "Edamam",
        api_base_url: "https://api.edamam.com",
        priority: 1,
    },
    ProviderSeed {
        name: providers::SPOONACULAR,
        display_name: "Spoonacular",
        api_base_url: "https://api.spoonacular.com",
        priority: 2,
    },
];

const fn allergy(
    key: &'static str,
    display_name: &'static str,
    edamam: Option<&'static str>,
    spoonacular: Option<&'static str>,
) -> LabelSeed {
    LabelSeed {
        category: categories::ALLERGY,
        key,
        display_name,
        severity: SeverityLevel::Critical,
        edamam,
        spoonacular,
    }
}

const fn preference(
    key: &'static str,
    display_name: &'static str,
    edamam: Option<&'static str>,
    spoonacular: Option<&'static str>,
) -> LabelSeed {
    LabelSeed {
        category: categories::DIETARY_PREFERENCE,
        key,
        display_name,
        severity: SeverityLevel::Preference,
        edamam,
        spoonacular,
    }
}

const fn cuisine(
    key: &'static str,
    display_name: &'static str,
    edamam: Option<&'static str>,
    spoonacular: Option<&'static str>,
) -> LabelSeed {
    LabelSeed {
        category: categories::CUISINE_TYPE,
        key,
        display_name,
        severity: SeverityLevel::Preference,
        edamam,
        spoonacular,
    }
}

const fn focus(key: &'static str, display_name: &'static str, edamam: &'static str) -> LabelSeed {
    LabelSeed {
        category: categories::NUTRITION_FOCUS,
        key,
        display_name,
        severity: SeverityLevel::Medium,
        edamam: Some(edamam),
        spoonacular: None,
    }
}

#[rustfmt::skip]
const LABELS: &[LabelSeed] = &[
    // Allergies
    allergy("celery-free", "Celery-Free", Some("CELERY_FREE"), None),
    allergy("crustacean-free", "Crustacean-Free", Some("CRUSTACEAN_FREE"), Some("shellfish")),
    allergy("dairy-free", "Dairy-Free", Some("DAIRY_FREE"), Some("dairy")),
    allergy("egg-free", "Egg-Free", Some("EGG_FREE"), Some("egg")),
    allergy("fish-free", "Fish-Free", Some("FISH_FREE"), Some("seafood")),
    allergy("gluten-free", "Gluten-Free", Some("GLUTEN_FREE"), Some("gluten")),
    allergy("lupine-free", "Lupine-Free", Some("LUPINE_FREE"), None),
    allergy("mollusk-free", "Mollusk-Free", Some("MOLLUSK_FREE"), None),
    allergy("mustard-free", "Mustard-Free", Some("MUSTARD_FREE"), None),
    allergy("peanut-free", "Peanut-Free", Some("PEANUT_FREE"), Some("peanut")),
    allergy("sesame-free", "Sesame-Free", Some("SESAME_FREE"), Some("sesame")),
    allergy("shellfish-free", "Shellfish-Free", Some("SHELLFISH_FREE"), Some("shellfish")),
    allergy("soy-free", "Soy-Free", Some("SOY_FREE"), Some("soy")),
    allergy("sulfite-free", "Sulfite-Free", Some("SULFITE_FREE"), Some("sulfite")),
    allergy("tree-nut-free", "Tree-Nut-Free", Some("TREE_NUT_FREE"), Some("tree nut")),
    allergy("wheat-free", "Wheat-Free", Some("WHEAT_FREE"), Some("wheat")),
    // Dietary preferences
    preference("alcohol-free", "Alcohol-Free", Some("ALCOHOL_FREE"), None),
    preference("fodmap-free", "FODMAP-Free", Some("FODMAP_FREE"), Some("low fodmap")),
    preference("keto-friendly", "Keto-Friendly", Some("KETO_FRIENDLY"), Some("ketogenic")),
    preference("kosher", "Kosher", Some("KOSHER"), None),
    preference("paleo", "Paleo", Some("PALEO"), Some("paleo")),
    preference("pescatarian", "Pescatarian", Some("PECATARIAN"), Some("pescetarian")),
    preference("pork-free", "Pork-Free", Some("PORK_FREE"), None),
    preference("red-meat-free", "Red-Meat-Free", Some("RED_MEAT_FREE"), None),
    preference("vegan", "Vegan", Some("VEGAN"), Some("vegan")),
    preference("vegetarian", "Vegetarian", Some("VEGETARIAN"), Some("vegetarian")),
    // Cuisines
    cuisine("american", "American", Some("American"), Some("American")),
    cuisine("asian", "Asian", Some("Asian"), Some("Asian")),
    cuisine("british", "British", Some("British"), Some("British")),
    cuisine("caribbean", "Caribbean", Some("Caribbean"), Some("Caribbean")),
    cuisine("central-europe", "Central European", Some("Central Europe"), Some("European")),
    cuisine("chinese", "Chinese", Some("Chinese"), Some("Chinese")),
    cuisine("eastern-europe", "Eastern European", Some("Eastern Europe"), Some("Eastern European")),
    cuisine("french", "French", Some("French"), Some("French")),
    cuisine("greek", "Greek", Some("Greek"), Some("Greek")),
    cuisine("indian", "Indian", Some("Indian"), Some("Indian")),
    cuisine("italian", "Italian", Some("Italian"), Some("Italian")),
    cuisine("japanese", "Japanese", Some("Japanese"), Some("Japanese")),
    cuisine("korean", "Korean", Some("Korean"), Some("Korean")),
    cuisine("mediterranean", "Mediterranean", Some("Mediterranean"), Some("Mediterranean")),
    cuisine("mexican", "Mexican", Some("Mexican"), Some("Mexican")),
    cuisine("middle-eastern", "Middle Eastern", Some("Middle Eastern"), Some("Middle Eastern")),
    cuisine("nordic", "Nordic", Some("Nordic"), Some("Nordic")),
    cuisine("south-american", "South American", Some("South American"), Some("Latin American")),
    cuisine("south-east-asian", "South East Asian", Some("South East Asian"), None),
    cuisine("world", "World", Some("World"), None),
    // Nutrition focus
    focus("dash", "DASH", "DASH"),
    focus("immuno-supportive", "Immuno-Supportive", "IMMUNO_SUPPORTIVE"),
    focus("kidney-friendly", "Kidney-Friendly", "KIDNEY_FRIENDLY"),
    focus("low-potassium", "Low Potassium", "LOW_POTASSIUM"),
    focus("low-sugar", "Low Sugar", "LOW_SUGAR"),
    focus("no-oil-added", "No Oil Added", "NO_OIL_ADDED"),
    focus("sugar-conscious", "Sugar-Conscious", "SUGAR_CONSCIOUS"),
];

/// Rows written by a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Categories inserted
    pub categories: usize,
    /// Standard labels inserted
    pub labels: usize,
    /// Providers inserted
    pub providers: usize,
    /// Mapping rows inserted (supported and unsupported)
    pub mappings: usize,
    /// True when the database already held a catalog
    pub skipped: bool,
}

/// Seed the default catalog into an empty database
///
/// # Errors
///
/// Returns an error if any insert fails
pub async fn seed_default_catalog(manager: &HealthLabelsManager) -> AppResult<SeedSummary> {
    if manager.count_categories().await? > 0 {
        info!("Health label catalog already present, skipping seed");
        return Ok(SeedSummary {
            skipped: true,
            ..SeedSummary::default()
        });
    }

    let mut summary = SeedSummary::default();

    for category in CATEGORIES {
        manager
            .create_category(&NewCategory {
                name: category.name.to_owned(),
                description: Some(category.description.to_owned()),
                priority: category.priority,
            })
            .await?;
        summary.categories += 1;
    }

    let mut provider_ids = Vec::with_capacity(PROVIDERS.len());
    for provider in PROVIDERS {
        let id = manager
            .create_provider(&NewProvider {
                provider_name: provider.name.to_owned(),
                display_name: provider.display_name.to_owned(),
                api_base_url: Some(provider.api_base_url.to_owned()),
                priority: provider.priority,
            })
            .await?;
        provider_ids.push((provider.name, id));
        summary.providers += 1;
    }

    for label in LABELS {
        let label_id = manager
            .create_standard_label(&NewStandardLabel {
                category_name: label.category.to_owned(),
                label_key: label.key.to_owned(),
                display_name: label.display_name.to_owned(),
                description: None,
                severity_level: label.severity,
            })
            .await?;
        summary.labels += 1;

        for (provider_name, provider_id) in &provider_ids {
            let token = match *provider_name {
                providers::EDAMAM => label.edamam,
                providers::SPOONACULAR => label.spoonacular,
                other => {
                    return Err(AppError::internal(format!(
                        "No seed vocabulary for provider {other}"
                    )))
                }
            };
            manager
                .insert_mapping(&seed_mapping(label, label_id, *provider_id, provider_name, token))
                .await?;
            summary.mappings += 1;
        }
    }

    info!(
        categories = summary.categories,
        labels = summary.labels,
        providers = summary.providers,
        mappings = summary.mappings,
        "Seeded default health label catalog"
    );
    Ok(summary)
}

fn seed_mapping(
    label: &LabelSeed,
    standard_label_id: Uuid,
    provider_id: Uuid,
    provider_name: &str,
    token: Option<&str>,
) -> NewMapping {
    token.map_or_else(
        || NewMapping {
            standard_label_id,
            provider_id,
            provider_label_key: label.key.to_owned(),
            provider_label_value: None,
            is_supported: false,
            mapping_notes: Some(format!("No {provider_name} equivalent")),
        },
        |token| NewMapping {
            standard_label_id,
            provider_id,
            provider_label_key: token.to_owned(),
            provider_label_value: None,
            is_supported: true,
            mapping_notes: None,
        },
    )
}
