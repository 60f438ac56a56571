// ABOUTME: Translates standard label keys into a provider's health-label and cuisine-type tokens
// ABOUTME: Buckets by category, drops unsupported labels, validates support, and memoizes results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Translation Engine
//!
//! [`HealthLabelsTransformService::convert`] never fails: datastore errors and
//! timeouts yield an empty payload, and labels without a supported mapping are
//! omitted. Use [`HealthLabelsTransformService::validate`] to learn which labels
//! were omitted.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use super::mapping_store::is_translatable;
use super::{LabelCatalog, MappingStore};
use crate::cache::{CacheKey, TranslationCache};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{
    CacheStats, HealthLabelsForProvider, ProviderLabelFormat, ValidationResult,
};

/// Translation output plus whether any lookup degraded while producing it
struct Translation {
    result: HealthLabelsForProvider,
    degraded: bool,
}

/// Standard label to provider token translation
#[derive(Clone)]
pub struct HealthLabelsTransformService {
    catalog: LabelCatalog,
    mappings: MappingStore,
    cache: Arc<TranslationCache>,
}

impl HealthLabelsTransformService {
    /// Create a translation service
    #[must_use]
    pub const fn new(
        catalog: LabelCatalog,
        mappings: MappingStore,
        cache: Arc<TranslationCache>,
    ) -> Self {
        Self {
            catalog,
            mappings,
            cache,
        }
    }

    // ================================================================================================
    // Core translation
    // ================================================================================================

    /// Translate label keys into provider tokens
    ///
    /// Tokens keep the order of the first label that produced them. Results are
    /// cached per provider and label set; a degraded result is returned but not
    /// cached.
    pub async fn convert(&self, labels: &[String], provider_name: &str) -> HealthLabelsForProvider {
        if labels.is_empty() {
            return HealthLabelsForProvider::empty(provider_name);
        }

        let key = CacheKey::new(provider_name, labels);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(cache.key = %key, "Translation cache hit");
            return cached;
        }

        match self.translate(labels, provider_name).await {
            Ok(Translation { result, degraded }) => {
                AppLogger::log_translation(
                    provider_name,
                    labels.len(),
                    result.health_labels.len(),
                    result.cuisine_types.len(),
                );
                if !degraded {
                    self.cache.put(&key, result.clone()).await;
                }
                result
            }
            Err(e) => {
                AppLogger::log_degraded_read("convert", &e);
                HealthLabelsForProvider::empty(provider_name)
            }
        }
    }

    async fn translate(&self, labels: &[String], provider_name: &str) -> AppResult<Translation> {
        let mappings = self.mappings.try_mappings_for_provider(provider_name).await?;
        let tokens: HashMap<&str, &str> = mappings
            .iter()
            .filter(|mapping| is_translatable(mapping))
            .map(|mapping| {
                (
                    mapping.standard_label_key.as_str(),
                    mapping.provider_label_key.as_str(),
                )
            })
            .collect();

        let mut degraded = false;
        let cuisine_category_id = match self.catalog.try_cuisine_category_id().await {
            Ok(id) => id,
            Err(e) => {
                AppLogger::log_degraded_read("cuisine_category_id", &e);
                degraded = true;
                None
            }
        };

        // One category lookup for every translatable label in the request
        let label_categories = if cuisine_category_id.is_some() {
            let mut translatable: Vec<String> = labels
                .iter()
                .filter(|label| tokens.contains_key(label.as_str()))
                .cloned()
                .collect();
            translatable.sort_unstable();
            translatable.dedup();

            match self.catalog.try_label_categories(&translatable).await {
                Ok(categories) => categories,
                Err(e) => {
                    AppLogger::log_degraded_read("label_categories", &e);
                    degraded = true;
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        let mut result = HealthLabelsForProvider::empty(provider_name);
        for label in labels {
            let Some(token) = tokens.get(label.as_str()) else {
                AppLogger::log_dropped_label(provider_name, label);
                continue;
            };

            let is_cuisine = cuisine_category_id
                .is_some_and(|cuisine_id| label_categories.get(label) == Some(&cuisine_id));
            if is_cuisine {
                result.push_cuisine_type(token);
            } else {
                result.push_health_label(token);
            }
        }

        Ok(Translation { result, degraded })
    }

    /// Report which label keys the provider cannot honor
    ///
    /// Input order is preserved and duplicates are reported once. When the
    /// supported set cannot be read every label counts as unsupported.
    pub async fn validate(&self, labels: &[String], provider_name: &str) -> ValidationResult {
        let supported: HashSet<String> = self
            .mappings
            .supported_labels_for_provider(provider_name)
            .await
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        let unsupported = labels
            .iter()
            .filter(|label| !supported.contains(label.as_str()))
            .filter(|label| seen.insert(label.as_str()))
            .cloned()
            .collect();

        ValidationResult::from_unsupported(unsupported)
    }

    // ================================================================================================
    // Compositions
    // ================================================================================================

    /// Translate allergies followed by preferences
    pub async fn merge_allergies_and_preferences_for_provider(
        &self,
        allergies: &[String],
        preferences: &[String],
        provider_name: &str,
    ) -> HealthLabelsForProvider {
        let labels: Vec<String> = allergies.iter().chain(preferences).cloned().collect();
        self.convert(&labels, provider_name).await
    }

    /// Translate allergies, preferences and cuisines in one request
    pub async fn convert_mixed_labels_for_provider(
        &self,
        allergies: &[String],
        preferences: &[String],
        cuisine_types: &[String],
        provider_name: &str,
    ) -> HealthLabelsForProvider {
        let labels: Vec<String> = allergies
            .iter()
            .chain(preferences)
            .chain(cuisine_types)
            .cloned()
            .collect();
        self.convert(&labels, provider_name).await
    }

    /// Translate the same labels for several providers concurrently
    ///
    /// Each provider is translated independently; a failing provider yields an
    /// empty payload without affecting the others.
    pub async fn convert_for_multiple_providers(
        &self,
        labels: &[String],
        provider_names: &[String],
    ) -> HashMap<String, HealthLabelsForProvider> {
        let results = join_all(
            provider_names
                .iter()
                .map(|provider_name| self.convert(labels, provider_name)),
        )
        .await;

        provider_names.iter().cloned().zip(results).collect()
    }

    /// Health-label tokens only
    pub async fn convert_dietary_restrictions(
        &self,
        labels: &[String],
        provider_name: &str,
    ) -> Vec<String> {
        self.convert(labels, provider_name).await.health_labels
    }

    /// Cuisine-type tokens only
    pub async fn convert_cuisine_preferences(
        &self,
        labels: &[String],
        provider_name: &str,
    ) -> Vec<String> {
        self.convert(labels, provider_name).await.cuisine_types
    }

    /// Label keys the provider can translate
    pub async fn supported_labels_for_provider(&self, provider_name: &str) -> Vec<String> {
        self.mappings
            .supported_labels_for_provider(provider_name)
            .await
    }

    /// How one label is expressed for a provider
    pub async fn provider_label_format(
        &self,
        label_key: &str,
        provider_name: &str,
    ) -> ProviderLabelFormat {
        self.mappings
            .provider_label_format(label_key, provider_name)
            .await
    }

    // ================================================================================================
    // Cache control
    // ================================================================================================

    /// Drop every cached translation; returns how many entries were removed
    pub async fn clear_cache(&self) -> usize {
        self.cache.clear().await
    }

    /// Cache size and hit/miss counters
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}
