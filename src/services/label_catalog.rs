// ABOUTME: Read-only view of label categories and standard labels
// ABOUTME: Active-only listings ordered by priority, per-category filters, and the cuisine category lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::{degrade, with_timeout};
use crate::constants::health_labels::categories;
use crate::database::HealthLabelsStore;
use crate::errors::AppResult;
use crate::models::{CatalogOverview, Category, CategoryWithLabels, StandardLabel};

/// Catalog of label categories and their standard labels
#[derive(Clone)]
pub struct LabelCatalog {
    store: Arc<dyn HealthLabelsStore>,
    timeout: Duration,
}

impl LabelCatalog {
    /// Create a catalog over the given store
    #[must_use]
    pub fn new(store: Arc<dyn HealthLabelsStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    // ================================================================================================
    // Fallible reads
    // ================================================================================================

    /// Active categories ascending by priority
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_list_categories(&self) -> AppResult<Vec<Category>> {
        with_timeout(
            "list_categories",
            self.timeout,
            self.store.fetch_categories(),
        )
        .await
    }

    /// Active labels of active categories, by category priority then label key
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_list_standard_labels(&self) -> AppResult<Vec<StandardLabel>> {
        with_timeout(
            "list_standard_labels",
            self.timeout,
            self.store.fetch_standard_labels(None),
        )
        .await
    }

    /// Active labels of one category ordered by label key
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_list_standard_labels_by_category(
        &self,
        category_name: &str,
    ) -> AppResult<Vec<StandardLabel>> {
        with_timeout(
            "list_standard_labels_by_category",
            self.timeout,
            self.store.fetch_standard_labels(Some(category_name)),
        )
        .await
    }

    /// Id of the `cuisine_type` category, `None` when absent or inactive
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_cuisine_category_id(&self) -> AppResult<Option<Uuid>> {
        Ok(self
            .try_list_categories()
            .await?
            .into_iter()
            .find(|category| category.name == categories::CUISINE_TYPE)
            .map(|category| category.id))
    }

    /// Category id of each known label in one round trip
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_label_categories(
        &self,
        label_keys: &[String],
    ) -> AppResult<HashMap<String, Uuid>> {
        if label_keys.is_empty() {
            return Ok(HashMap::new());
        }
        with_timeout(
            "label_categories",
            self.timeout,
            self.store.fetch_label_categories(label_keys),
        )
        .await
    }

    // ================================================================================================
    // Degrading reads
    // ================================================================================================

    /// Active categories, empty on failure
    pub async fn list_categories(&self) -> Vec<Category> {
        degrade("list_categories", self.try_list_categories().await)
    }

    /// Active labels, empty on failure
    pub async fn list_standard_labels(&self) -> Vec<StandardLabel> {
        degrade(
            "list_standard_labels",
            self.try_list_standard_labels().await,
        )
    }

    /// Active labels of one category, empty on failure
    pub async fn list_standard_labels_by_category(
        &self,
        category_name: &str,
    ) -> Vec<StandardLabel> {
        degrade(
            "list_standard_labels_by_category",
            self.try_list_standard_labels_by_category(category_name)
                .await,
        )
    }

    /// Allergy labels
    pub async fn allergies(&self) -> Vec<StandardLabel> {
        self.list_standard_labels_by_category(categories::ALLERGY)
            .await
    }

    /// Dietary preference labels
    pub async fn dietary_preferences(&self) -> Vec<StandardLabel> {
        self.list_standard_labels_by_category(categories::DIETARY_PREFERENCE)
            .await
    }

    /// Cuisine labels
    pub async fn cuisine_types(&self) -> Vec<StandardLabel> {
        self.list_standard_labels_by_category(categories::CUISINE_TYPE)
            .await
    }

    /// Nutrition focus labels
    pub async fn nutrition_focus(&self) -> Vec<StandardLabel> {
        self.list_standard_labels_by_category(categories::NUTRITION_FOCUS)
            .await
    }

    /// Id of the `cuisine_type` category, `None` on failure
    pub async fn cuisine_category_id(&self) -> Option<Uuid> {
        degrade("cuisine_category_id", self.try_cuisine_category_id().await)
    }

    /// Every active category with its labels attached
    ///
    /// Categories with no active labels are listed with an empty label set.
    pub async fn catalog_overview(&self) -> CatalogOverview {
        let categories = self.list_categories().await;
        let labels = self.list_standard_labels().await;
        let total_labels = labels.len();

        let mut by_category: HashMap<Uuid, Vec<StandardLabel>> = HashMap::new();
        for label in labels {
            by_category.entry(label.category_id).or_default().push(label);
        }

        let categories = categories
            .into_iter()
            .map(|category| {
                let mut labels = by_category.remove(&category.id).unwrap_or_default();
                labels.sort_by(|a, b| a.label_key.cmp(&b.label_key));
                CategoryWithLabels { category, labels }
            })
            .collect();

        CatalogOverview {
            categories,
            total_labels,
        }
    }
}
