// ABOUTME: Health-label context wiring services over a shared store and translation cache
// ABOUTME: Constructor-injected replacement for process-wide singletons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::sync::Arc;

use tracing::info;

use crate::cache::TranslationCache;
use crate::config::HealthLabelsConfig;
use crate::database::{Database, HealthLabelsStore};
use crate::errors::AppResult;
use crate::services::{
    ClientGoalsIntegration, HealthLabelsTransformService, LabelCatalog, MappingStore,
    ProviderRegistry,
};

/// Health-label services sharing one store and one cache
///
/// # Dependencies
/// - `catalog`: categories and standard labels
/// - `providers`: active external providers
/// - `mappings`: label to provider token rows
/// - `transform`: cached translation engine
/// - `client_goals`: meal-planning integration
#[derive(Clone)]
pub struct HealthLabelsContext {
    catalog: Arc<LabelCatalog>,
    providers: Arc<ProviderRegistry>,
    mappings: Arc<MappingStore>,
    transform: Arc<HealthLabelsTransformService>,
    client_goals: Arc<ClientGoalsIntegration>,
    cache: Arc<TranslationCache>,
}

impl HealthLabelsContext {
    /// Wire every service over `store`
    ///
    /// Spawns the cache sweep task when background cleanup is enabled, which
    /// requires a running Tokio runtime.
    #[must_use]
    pub fn new(store: Arc<dyn HealthLabelsStore>, config: &HealthLabelsConfig) -> Self {
        let timeout = config.datastore_timeout();
        let cache = Arc::new(TranslationCache::new(&config.cache));

        let catalog = LabelCatalog::new(Arc::clone(&store), timeout);
        let providers = ProviderRegistry::new(Arc::clone(&store), timeout);
        let mappings = MappingStore::new(store, timeout);
        let transform = HealthLabelsTransformService::new(
            catalog.clone(),
            mappings.clone(),
            Arc::clone(&cache),
        );
        let client_goals = ClientGoalsIntegration::new(
            transform.clone(),
            catalog.clone(),
            config.default_provider.clone(),
        );

        Self {
            catalog: Arc::new(catalog),
            providers: Arc::new(providers),
            mappings: Arc::new(mappings),
            transform: Arc::new(transform),
            client_goals: Arc::new(client_goals),
            cache,
        }
    }

    /// Connect to the configured database, run migrations, and wire services
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: &HealthLabelsConfig) -> AppResult<Self> {
        let database = Database::new(&config.database).await?;
        let store: Arc<dyn HealthLabelsStore> = Arc::new(database.health_labels());
        info!(
            environment = %config.environment,
            default_provider = %config.default_provider,
            "Health label services initialized"
        );
        Ok(Self::new(store, config))
    }

    /// Get the label catalog
    #[must_use]
    pub const fn catalog(&self) -> &Arc<LabelCatalog> {
        &self.catalog
    }

    /// Get the provider registry
    #[must_use]
    pub const fn providers(&self) -> &Arc<ProviderRegistry> {
        &self.providers
    }

    /// Get the mapping store
    #[must_use]
    pub const fn mappings(&self) -> &Arc<MappingStore> {
        &self.mappings
    }

    /// Get the translation engine
    #[must_use]
    pub const fn transform(&self) -> &Arc<HealthLabelsTransformService> {
        &self.transform
    }

    /// Get the client-goals integration
    #[must_use]
    pub const fn client_goals(&self) -> &Arc<ClientGoalsIntegration> {
        &self.client_goals
    }

    /// Get the shared translation cache
    #[must_use]
    pub const fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }
}
