// ABOUTME: Integration tests for client goals to meal-planning constraint conversion
// ABOUTME: Covers constraints, per-category validation, capabilities, multi-provider fan-out, legacy input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_fixture, labels};
use nutriplan_labels::models::ClientGoalsHealthLabels;
use nutriplan_labels::services::convert_legacy_health_labels;

fn client_goals() -> ClientGoalsHealthLabels {
    ClientGoalsHealthLabels {
        allergies: labels(&["dairy-free", "celery-free"]),
        preferences: labels(&["vegan", "keto-friendly"]),
        cuisine_types: labels(&["italian", "mediterranean"]),
    }
}

#[tokio::test]
async fn test_constraints_for_edamam() -> Result<()> {
    let fixture = create_fixture().await?;
    let constraints = fixture
        .context
        .client_goals()
        .convert_client_goals_to_meal_planning_constraints(&client_goals(), "edamam")
        .await;

    assert_eq!(constraints.provider, "edamam");
    assert_eq!(
        constraints.health_labels,
        vec!["DAIRY_FREE", "CELERY_FREE", "VEGAN", "KETO_FRIENDLY"]
    );
    assert_eq!(constraints.cuisine_types, vec!["Italian", "MEDITERRANEAN"]);
    assert_eq!(constraints.dietary_restrictions, constraints.health_labels);
    assert_eq!(constraints.cuisine_preferences, constraints.cuisine_types);
    Ok(())
}

#[tokio::test]
async fn test_default_provider_and_search_params() -> Result<()> {
    let fixture = create_fixture().await?;
    let integration = fixture.context.client_goals();
    assert_eq!(integration.default_provider(), "edamam");

    let goals = ClientGoalsHealthLabels {
        allergies: labels(&["gluten-free"]),
        preferences: Vec::new(),
        cuisine_types: labels(&["italian"]),
    };
    let constraints = integration.meal_planning_constraints(&goals).await;
    assert_eq!(constraints.provider, "edamam");

    let params = integration.recipe_search_params(&goals, "edamam").await;
    assert_eq!(
        params,
        vec![
            ("health", "GLUTEN_FREE".to_owned()),
            ("cuisineType", "Italian".to_owned())
        ]
    );

    let empty = integration
        .recipe_search_params(&ClientGoalsHealthLabels::default(), "edamam")
        .await;
    assert!(empty.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_validation_groups_unsupported_labels_by_category() -> Result<()> {
    let fixture = create_fixture().await?;
    let validation = fixture
        .context
        .client_goals()
        .validate_client_goals_for_provider(&client_goals(), "spoonacular")
        .await;

    assert!(!validation.valid);
    assert_eq!(
        validation.unsupported_allergies,
        labels(&["dairy-free", "celery-free"])
    );
    assert_eq!(
        validation.unsupported_preferences,
        labels(&["keto-friendly"])
    );
    assert_eq!(validation.unsupported_cuisines, labels(&["mediterranean"]));
    assert_eq!(
        validation.critical_unsupported,
        labels(&["dairy-free", "celery-free"])
    );
    assert!(validation.is_blocking());
    assert_eq!(
        validation.warnings,
        vec![
            "Critical allergies not supported by spoonacular: dairy-free, celery-free",
            "Dietary preferences not supported by spoonacular: keto-friendly",
            "Cuisine types not supported by spoonacular: mediterranean",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_validation_passes_when_everything_is_supported() -> Result<()> {
    let fixture = create_fixture().await?;
    let validation = fixture
        .context
        .client_goals()
        .validate_client_goals_for_provider(&client_goals(), "edamam")
        .await;

    assert!(validation.valid);
    assert!(!validation.is_blocking());
    assert!(validation.warnings.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_allergy_is_treated_as_critical() -> Result<()> {
    let fixture = create_fixture().await?;
    let goals = ClientGoalsHealthLabels {
        allergies: labels(&["lupin-free"]),
        preferences: labels(&["raw-food"]),
        cuisine_types: Vec::new(),
    };
    let validation = fixture
        .context
        .client_goals()
        .validate_client_goals_for_provider(&goals, "edamam")
        .await;

    assert_eq!(validation.unsupported_allergies, labels(&["lupin-free"]));
    assert_eq!(validation.unsupported_preferences, labels(&["raw-food"]));
    assert_eq!(validation.critical_unsupported, labels(&["lupin-free"]));
    Ok(())
}

#[tokio::test]
async fn test_provider_capabilities() -> Result<()> {
    let fixture = create_fixture().await?;
    let integration = fixture.context.client_goals();

    let spoonacular = integration.provider_capabilities("spoonacular").await;
    assert_eq!(spoonacular.supported_allergies, labels(&["gluten-free"]));
    assert_eq!(spoonacular.supported_preferences, labels(&["vegan"]));
    assert_eq!(spoonacular.supported_cuisines, labels(&["italian"]));
    assert_eq!(spoonacular.total_supported, 3);

    let edamam = integration.provider_capabilities("edamam").await;
    assert_eq!(
        edamam.supported_allergies,
        labels(&["celery-free", "dairy-free", "gluten-free"])
    );
    assert_eq!(
        edamam.supported_cuisines,
        labels(&["italian", "mediterranean"])
    );
    assert_eq!(edamam.total_supported, 7);

    let unknown = integration.provider_capabilities("unknown").await;
    assert_eq!(unknown.total_supported, 0);
    assert!(unknown.supported_allergies.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_multi_provider_constraints_default_to_known_providers() -> Result<()> {
    let fixture = create_fixture().await?;
    let integration = fixture.context.client_goals();

    let all = integration
        .multi_provider_meal_planning_constraints(&client_goals(), &[])
        .await;
    assert_eq!(all.len(), 2);
    assert_eq!(all["spoonacular"].health_labels, vec!["vegan"]);
    assert_eq!(all["spoonacular"].cuisine_types, vec!["Italian"]);
    assert_eq!(
        all["edamam"].cuisine_types,
        vec!["Italian", "MEDITERRANEAN"]
    );

    let one = integration
        .multi_provider_meal_planning_constraints(&client_goals(), &labels(&["edamam"]))
        .await;
    assert_eq!(one.len(), 1);
    assert!(one.contains_key("edamam"));
    Ok(())
}

#[tokio::test]
async fn test_multi_provider_constraints_survive_one_failing_provider() -> Result<()> {
    let fixture = create_fixture().await?;
    fixture.store.set_failing_provider(Some("edamam"));

    let all = fixture
        .context
        .client_goals()
        .multi_provider_meal_planning_constraints(&client_goals(), &[])
        .await;
    assert_eq!(all.len(), 2);
    assert!(all["edamam"].health_labels.is_empty());
    assert!(all["edamam"].cuisine_types.is_empty());
    assert_eq!(all["spoonacular"].health_labels, vec!["vegan"]);
    assert_eq!(all["spoonacular"].cuisine_types, vec!["Italian"]);
    Ok(())
}

#[tokio::test]
async fn test_provider_supported_cuisine_tokens() -> Result<()> {
    let fixture = create_fixture().await?;
    let integration = fixture.context.client_goals();

    assert_eq!(
        integration
            .provider_supported_cuisine_tokens("edamam")
            .await,
        vec!["Italian", "MEDITERRANEAN"]
    );
    assert_eq!(
        integration
            .provider_supported_cuisine_tokens("spoonacular")
            .await,
        vec!["Italian"]
    );
    Ok(())
}

#[tokio::test]
async fn test_legacy_labels_feed_constraints() -> Result<()> {
    let fixture = create_fixture().await?;
    let goals = convert_legacy_health_labels(&["Dairy_Free", "VEGAN", "Italian"]);
    assert_eq!(goals.allergies, labels(&["dairy-free"]));
    assert_eq!(goals.preferences, labels(&["vegan"]));
    assert_eq!(goals.cuisine_types, labels(&["italian"]));

    let constraints = fixture
        .context
        .client_goals()
        .convert_client_goals_to_meal_planning_constraints(&goals, "edamam")
        .await;
    assert_eq!(constraints.health_labels, vec!["DAIRY_FREE", "VEGAN"]);
    assert_eq!(constraints.cuisine_types, vec!["Italian"]);
    Ok(())
}
