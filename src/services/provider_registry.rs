// ABOUTME: Registry of external food-data providers
// ABOUTME: Lists active providers by priority and resolves a provider by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::sync::Arc;
use std::time::Duration;

use super::{degrade, with_timeout};
use crate::database::HealthLabelsStore;
use crate::errors::AppResult;
use crate::models::Provider;

/// Active external providers
#[derive(Clone)]
pub struct ProviderRegistry {
    store: Arc<dyn HealthLabelsStore>,
    timeout: Duration,
}

impl ProviderRegistry {
    /// Create a registry over the given store
    #[must_use]
    pub fn new(store: Arc<dyn HealthLabelsStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Active providers ascending by priority
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore fails or times out
    pub async fn try_list_providers(&self) -> AppResult<Vec<Provider>> {
        with_timeout("list_providers", self.timeout, self.store.fetch_providers()).await
    }

    /// Active providers, empty on failure
    pub async fn list_providers(&self) -> Vec<Provider> {
        degrade("list_providers", self.try_list_providers().await)
    }

    /// The active provider with this name
    pub async fn provider(&self, provider_name: &str) -> Option<Provider> {
        self.list_providers()
            .await
            .into_iter()
            .find(|provider| provider.provider_name == provider_name)
    }

    /// Whether the provider exists and is active
    pub async fn is_active(&self, provider_name: &str) -> bool {
        self.provider(provider_name).await.is_some()
    }
}
