// ABOUTME: Integration tests for the default health-label catalog seed
// ABOUTME: Verifies row counts, idempotent reseeding, and the shipped Edamam/Spoonacular vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{create_test_manager, labels};
use nutriplan_labels::config::{DatabaseConfig, DatabaseUrl, HealthLabelsConfig};
use nutriplan_labels::context::HealthLabelsContext;
use nutriplan_labels::database::seed_health_labels::{seed_default_catalog, SeedSummary};
use nutriplan_labels::database::{Database, HealthLabelsStore};

async fn seeded_context() -> Result<HealthLabelsContext> {
    let manager = create_test_manager().await?;
    seed_default_catalog(&manager).await?;
    let store: Arc<dyn HealthLabelsStore> = Arc::new(manager);
    Ok(HealthLabelsContext::new(store, &HealthLabelsConfig::for_testing()))
}

#[tokio::test]
async fn test_seed_inserts_full_catalog_once() -> Result<()> {
    let manager = create_test_manager().await?;

    let first = seed_default_catalog(&manager).await?;
    assert_eq!(
        first,
        SeedSummary {
            categories: 4,
            labels: 53,
            providers: 2,
            mappings: 106,
            skipped: false,
        }
    );

    let second = seed_default_catalog(&manager).await?;
    assert!(second.skipped);
    assert_eq!(second.labels, 0);
    Ok(())
}

#[tokio::test]
async fn test_seeded_catalog_categories_and_counts() -> Result<()> {
    let context = seeded_context().await?;
    let catalog = context.catalog();

    assert_eq!(catalog.allergies().await.len(), 16);
    assert_eq!(catalog.dietary_preferences().await.len(), 10);
    assert_eq!(catalog.cuisine_types().await.len(), 20);
    assert_eq!(catalog.nutrition_focus().await.len(), 7);
    assert!(catalog
        .allergies()
        .await
        .iter()
        .all(|label| label.severity_level.is_blocking()));
    Ok(())
}

#[tokio::test]
async fn test_seeded_vocabulary_translates() -> Result<()> {
    let context = seeded_context().await?;
    let transform = context.transform();
    let requested = labels(&["dairy-free", "vegan", "mediterranean", "low-sugar"]);

    let edamam = transform.convert(&requested, "edamam").await;
    assert_eq!(
        edamam.health_labels,
        vec!["DAIRY_FREE", "VEGAN", "LOW_SUGAR"]
    );
    assert_eq!(edamam.cuisine_types, vec!["Mediterranean"]);

    let spoonacular = transform.convert(&requested, "spoonacular").await;
    assert_eq!(spoonacular.health_labels, vec!["dairy", "vegan"]);
    assert_eq!(spoonacular.cuisine_types, vec!["Mediterranean"]);

    let validation = transform.validate(&requested, "spoonacular").await;
    assert_eq!(validation.unsupported_labels, labels(&["low-sugar"]));
    Ok(())
}

#[tokio::test]
async fn test_seeded_provider_capabilities() -> Result<()> {
    let context = seeded_context().await?;
    let integration = context.client_goals();

    let edamam = integration.provider_capabilities("edamam").await;
    assert_eq!(edamam.total_supported, 53);

    let spoonacular = integration.provider_capabilities("spoonacular").await;
    assert_eq!(spoonacular.supported_allergies.len(), 12);
    assert_eq!(spoonacular.supported_preferences.len(), 6);
    assert_eq!(spoonacular.supported_cuisines.len(), 18);
    assert_eq!(spoonacular.total_supported, 36);
    assert!(!spoonacular
        .supported_allergies
        .contains(&"celery-free".to_owned()));
    Ok(())
}

#[tokio::test]
async fn test_file_database_persists_seed_across_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: dir.path().join("nested").join("labels.db"),
        },
        ..DatabaseConfig::default()
    };

    let first = Database::new(&config).await?;
    assert!(!seed_default_catalog(&first.health_labels()).await?.skipped);
    first.pool().close().await;

    let reopened = Database::new(&config).await?;
    let summary = seed_default_catalog(&reopened.health_labels()).await?;
    assert!(summary.skipped);
    assert_eq!(reopened.health_labels().count_categories().await?, 4);
    Ok(())
}
