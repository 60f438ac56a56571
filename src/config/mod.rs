// ABOUTME: Configuration management for the health-label engine
// ABOUTME: Aggregates database, cache, datastore timeout, and provider defaults from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Configuration module
//!
//! - **Environment**: deployment mode and database location
//! - **Cache**: translation memo TTL, capacity and cleanup

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Translation cache configuration
pub mod cache;
/// Environment and database configuration
pub mod environment;

pub use cache::TranslationCacheConfig;
pub use environment::{DatabaseConfig, DatabaseUrl, Environment};

use crate::constants::{datastore, health_labels::providers};
use crate::errors::{AppError, AppResult};

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthLabelsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Translation cache settings
    pub cache: TranslationCacheConfig,
    /// Per-call datastore timeout in milliseconds
    pub datastore_timeout_ms: u64,
    /// Provider used when a caller names none
    pub default_provider: String,
}

impl Default for HealthLabelsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cache: TranslationCacheConfig::default(),
            datastore_timeout_ms: datastore::DEFAULT_TIMEOUT_MS,
            default_provider: providers::EDAMAM.to_owned(),
        }
    }
}

impl HealthLabelsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but invalid
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: env::var("ENVIRONMENT")
                .map_or_else(|_| Environment::default(), |s| Environment::from_str_or_default(&s)),
            database: DatabaseConfig::from_env()?,
            cache: TranslationCacheConfig::from_env(),
            datastore_timeout_ms: env::var("HEALTH_LABELS_DATASTORE_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(datastore::DEFAULT_TIMEOUT_MS),
            default_provider: env::var("HEALTH_LABELS_DEFAULT_PROVIDER")
                .unwrap_or_else(|_| providers::EDAMAM.to_owned()),
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            database = %config.database.url,
            cache.ttl_secs = config.cache.ttl_secs,
            cache.max_entries = config.cache.max_entries,
            datastore.timeout_ms = config.datastore_timeout_ms,
            default_provider = %config.default_provider,
            "Health label configuration loaded"
        );
        Ok(config)
    }

    /// Reject values the engine cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout, zero TTL, or blank default provider
    pub fn validate(&self) -> AppResult<()> {
        if self.datastore_timeout_ms == 0 {
            return Err(AppError::config(
                "HEALTH_LABELS_DATASTORE_TIMEOUT_MS must be greater than zero",
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(AppError::config("HEALTH_LABELS_CACHE_TTL_SECS must be greater than zero"));
        }
        if self.default_provider.trim().is_empty() {
            return Err(AppError::config("HEALTH_LABELS_DEFAULT_PROVIDER must not be blank"));
        }
        Ok(())
    }

    /// Per-call datastore timeout
    #[must_use]
    pub const fn datastore_timeout(&self) -> Duration {
        Duration::from_millis(self.datastore_timeout_ms)
    }

    /// In-memory configuration for tests and local tooling
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                max_connections: 1,
            },
            cache: TranslationCacheConfig {
                enable_background_cleanup: false,
                ..TranslationCacheConfig::default()
            },
            ..Self::default()
        }
    }
}
