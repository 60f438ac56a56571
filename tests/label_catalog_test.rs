// ABOUTME: Integration tests for the label catalog and provider registry
// ABOUTME: Verifies ordering, active-only filtering, category helpers, and degraded reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::create_fixture;
use nutriplan_labels::models::{SeverityLevel, StandardLabel};

fn keys(labels: &[StandardLabel]) -> Vec<&str> {
    labels.iter().map(|label| label.label_key.as_str()).collect()
}

#[tokio::test]
async fn test_categories_are_ordered_by_priority() -> Result<()> {
    let fixture = create_fixture().await?;
    let categories = fixture.context.catalog().list_categories().await;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["allergy", "dietary_preference", "cuisine_type"]);
    assert!(categories.iter().all(|c| c.is_active));
    Ok(())
}

#[tokio::test]
async fn test_labels_are_ordered_by_category_then_key() -> Result<()> {
    let fixture = create_fixture().await?;
    let labels = fixture.context.catalog().list_standard_labels().await;

    assert_eq!(
        keys(&labels),
        vec![
            "celery-free",
            "dairy-free",
            "gluten-free",
            "keto-friendly",
            "vegan",
            "italian",
            "mediterranean"
        ]
    );
    let dairy = labels.iter().find(|l| l.label_key == "dairy-free").unwrap();
    assert_eq!(dairy.category_name, "allergy");
    assert_eq!(dairy.severity_level, SeverityLevel::Critical);
    Ok(())
}

#[tokio::test]
async fn test_category_helpers_filter_by_name() -> Result<()> {
    let fixture = create_fixture().await?;
    let catalog = fixture.context.catalog();

    assert_eq!(
        keys(&catalog.allergies().await),
        vec!["celery-free", "dairy-free", "gluten-free"]
    );
    assert_eq!(
        keys(&catalog.dietary_preferences().await),
        vec!["keto-friendly", "vegan"]
    );
    assert_eq!(
        keys(&catalog.cuisine_types().await),
        vec!["italian", "mediterranean"]
    );
    assert!(catalog.nutrition_focus().await.is_empty());
    assert!(catalog
        .list_standard_labels_by_category("unknown")
        .await
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_inactive_rows_are_hidden() -> Result<()> {
    let fixture = create_fixture().await?;
    let catalog = fixture.context.catalog();

    fixture.manager.set_label_active("vegan", false).await?;
    assert_eq!(
        keys(&catalog.dietary_preferences().await),
        vec!["keto-friendly"]
    );

    fixture.manager.set_category_active("allergy", false).await?;
    assert!(catalog.allergies().await.is_empty());
    let categories = catalog.list_categories().await;
    assert_eq!(categories.len(), 2);
    assert!(!keys(&catalog.list_standard_labels().await).contains(&"dairy-free"));
    Ok(())
}

#[tokio::test]
async fn test_cuisine_category_id_resolves() -> Result<()> {
    let fixture = create_fixture().await?;
    let catalog = fixture.context.catalog();

    let cuisine_id = catalog.cuisine_category_id().await.unwrap();
    let cuisines = catalog.cuisine_types().await;
    assert!(cuisines.iter().all(|label| label.category_id == cuisine_id));

    fixture
        .manager
        .set_category_active("cuisine_type", false)
        .await?;
    assert!(catalog.cuisine_category_id().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_catalog_overview_groups_labels() -> Result<()> {
    let fixture = create_fixture().await?;
    let overview = fixture.context.catalog().catalog_overview().await;

    assert_eq!(overview.total_labels, 7);
    assert_eq!(overview.categories.len(), 3);
    assert_eq!(overview.categories[0].category.name, "allergy");
    assert_eq!(
        keys(&overview.categories[2].labels),
        vec!["italian", "mediterranean"]
    );

    let json = serde_json::to_value(&overview)?;
    assert_eq!(json["categories"][1]["name"], "dietary_preference");
    Ok(())
}

#[tokio::test]
async fn test_failing_store_degrades_to_empty() -> Result<()> {
    let fixture = create_fixture().await?;
    fixture.store.set_failing(true);
    let catalog = fixture.context.catalog();

    assert!(catalog.list_categories().await.is_empty());
    assert!(catalog.list_standard_labels().await.is_empty());
    assert!(catalog.cuisine_category_id().await.is_none());
    assert!(catalog.try_list_categories().await.is_err());
    assert!(fixture.context.providers().list_providers().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_provider_registry_lists_active_providers() -> Result<()> {
    let fixture = create_fixture().await?;
    let registry = fixture.context.providers();

    let names: Vec<String> = registry
        .list_providers()
        .await
        .into_iter()
        .map(|p| p.provider_name)
        .collect();
    assert_eq!(names, vec!["edamam", "spoonacular"]);

    let edamam = registry.provider("edamam").await.unwrap();
    assert_eq!(edamam.display_name, "Edamam");
    assert!(registry.provider("unknown").await.is_none());

    fixture.manager.set_provider_active("edamam", false).await?;
    assert!(!registry.is_active("edamam").await);
    assert!(registry.is_active("spoonacular").await);
    Ok(())
}
