// ABOUTME: Standard label to provider token mappings
// ABOUTME: Active-only mapping reads, supported-label lookup, and administrative add/update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{degrade, with_timeout};
use crate::database::HealthLabelsStore;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{MappingUpdate, NewMapping, ProviderLabelFormat, ProviderMapping};

/// Whether a mapping row yields a provider token
pub(crate) fn is_translatable(mapping: &ProviderMapping) -> bool {
    mapping.is_supported && !mapping.provider_label_key.is_empty()
}

/// Mapping rows between standard labels and provider tokens
#[derive(Clone)]
pub struct MappingStore {
    store: Arc<dyn HealthLabelsStore>,
    timeout: Duration,
}

impl MappingStore {
    /// Create a mapping store over the given store
    #[must_use]
    pub fn new(store: Arc<dyn HealthLabelsStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    // ================================================================================================
    // Reads
    // ================================================================================================

    /// Mapping rows of an active provider whose label is active, ordered by label key
    ///
    /// Unknown or inactive providers yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_mappings_for_provider(
        &self,
        provider_name: &str,
    ) -> AppResult<Vec<ProviderMapping>> {
        with_timeout(
            "mappings_for_provider",
            self.timeout,
            self.store.fetch_mappings_for_provider(provider_name),
        )
        .await
    }

    /// Mapping rows for a provider, empty on failure
    pub async fn mappings_for_provider(&self, provider_name: &str) -> Vec<ProviderMapping> {
        degrade(
            "mappings_for_provider",
            self.try_mappings_for_provider(provider_name).await,
        )
    }

    /// Label keys the provider can translate
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_supported_labels_for_provider(
        &self,
        provider_name: &str,
    ) -> AppResult<Vec<String>> {
        Ok(self
            .try_mappings_for_provider(provider_name)
            .await?
            .into_iter()
            .filter(is_translatable)
            .map(|mapping| mapping.standard_label_key)
            .collect())
    }

    /// Label keys the provider can translate, empty on failure
    pub async fn supported_labels_for_provider(&self, provider_name: &str) -> Vec<String> {
        degrade(
            "supported_labels_for_provider",
            self.try_supported_labels_for_provider(provider_name).await,
        )
    }

    /// How one standard label is expressed for a provider
    pub async fn provider_label_format(
        &self,
        label_key: &str,
        provider_name: &str,
    ) -> ProviderLabelFormat {
        self.mappings_for_provider(provider_name)
            .await
            .into_iter()
            .find(|mapping| mapping.standard_label_key == label_key)
            .map_or_else(ProviderLabelFormat::not_found, |mapping| ProviderLabelFormat {
                found: true,
                supported: mapping.is_supported,
                provider_label: Some(mapping.provider_label_key),
            })
    }

    // ================================================================================================
    // Administrative writes
    // ================================================================================================

    /// Insert a mapping between an active label and an active provider
    ///
    /// Returns `Ok(false)` when the insert itself is rejected, for example when
    /// the pair is already mapped.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the label or provider does not resolve to an
    /// active row, or a datastore error if the lookups fail
    pub async fn add_mapping(
        &self,
        label_key: &str,
        provider_name: &str,
        provider_label_key: &str,
        is_supported: bool,
        mapping_notes: Option<&str>,
    ) -> AppResult<bool> {
        let standard_label_id = with_timeout(
            "find_active_label_id",
            self.timeout,
            self.store.find_active_label_id(label_key),
        )
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Standard label {label_key}")).with_resource_id(label_key)
        })?;

        let provider_id = with_timeout(
            "find_active_provider_id",
            self.timeout,
            self.store.find_active_provider_id(provider_name),
        )
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Provider {provider_name}")).with_resource_id(provider_name)
        })?;

        let mapping = NewMapping {
            standard_label_id,
            provider_id,
            provider_label_key: provider_label_key.to_owned(),
            provider_label_value: None,
            is_supported,
            mapping_notes: mapping_notes.map(ToOwned::to_owned),
        };

        let target = format!("{label_key}->{provider_name}");
        match with_timeout(
            "insert_mapping",
            self.timeout,
            self.store.insert_mapping(&mapping),
        )
        .await
        {
            Ok(id) => {
                debug!(mapping_id = %id, "Inserted provider mapping");
                AppLogger::log_mapping_change("add", &target, true);
                Ok(true)
            }
            Err(e) if e.is_already_exists() => {
                info!(mapping.target = %target, "Provider mapping already exists");
                AppLogger::log_mapping_change("add", &target, false);
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, mapping.target = %target, "Failed to insert provider mapping");
                AppLogger::log_mapping_change("add", &target, false);
                Ok(false)
            }
        }
    }

    /// Apply the present fields of `update` to one mapping row
    ///
    /// Returns false when the row does not exist or the datastore fails. Cached
    /// translations are not invalidated.
    pub async fn update_mapping(&self, mapping_id: Uuid, update: &MappingUpdate) -> bool {
        let target = mapping_id.to_string();
        let updated = match with_timeout(
            "update_mapping",
            self.timeout,
            self.store.update_mapping(mapping_id, update),
        )
        .await
        {
            Ok(rows) => rows > 0,
            Err(e) => {
                warn!(error = %e, mapping.target = %target, "Failed to update provider mapping");
                false
            }
        };
        AppLogger::log_mapping_change("update", &target, updated);
        updated
    }
}
