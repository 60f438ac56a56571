// ABOUTME: Database management for health-label reference data
// ABOUTME: Defines the HealthLabelsStore seam, the SQLite pool wrapper, and schema migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Database Management
//!
//! Reference data lives in four tables: categories, standard labels, providers,
//! and provider mappings. The engine reads them through [`HealthLabelsStore`];
//! only mapping administration writes.

mod health_labels;
/// Default catalog shipped with the engine
pub mod seed_health_labels;

pub use health_labels::HealthLabelsManager;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Category, MappingUpdate, NewMapping, Provider, ProviderMapping, StandardLabel,
};

/// Read/write access to health-label reference data
///
/// Implemented by [`HealthLabelsManager`] for `SQLite`; tests wrap it to count
/// round trips or inject failures.
#[async_trait]
pub trait HealthLabelsStore: Send + Sync {
    /// Active categories ascending by priority
    async fn fetch_categories(&self) -> AppResult<Vec<Category>>;

    /// Active labels of active categories ordered by category priority then label key,
    /// optionally restricted to one category name
    async fn fetch_standard_labels(&self, category_name: Option<&str>)
        -> AppResult<Vec<StandardLabel>>;

    /// Active providers ascending by priority
    async fn fetch_providers(&self) -> AppResult<Vec<Provider>>;

    /// Mapping rows of an active provider whose label and category are active, ordered by label key
    async fn fetch_mappings_for_provider(
        &self,
        provider_name: &str,
    ) -> AppResult<Vec<ProviderMapping>>;

    /// Category id for each known label key in one round trip
    async fn fetch_label_categories(&self, label_keys: &[String])
        -> AppResult<HashMap<String, Uuid>>;

    /// Id of an active label
    async fn find_active_label_id(&self, label_key: &str) -> AppResult<Option<Uuid>>;

    /// Id of an active provider
    async fn find_active_provider_id(&self, provider_name: &str) -> AppResult<Option<Uuid>>;

    /// Insert one mapping row and return its id
    async fn insert_mapping(&self, mapping: &NewMapping) -> AppResult<Uuid>;

    /// Apply a partial update; returns the number of rows changed
    async fn update_mapping(&self, mapping_id: Uuid, update: &MappingUpdate) -> AppResult<u64>;
}

/// `SQLite` connection pool for reference data
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = match &config.url {
            // A single connection keeps every query on the same in-memory database
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&config.url.to_connection_string())
                .await,
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path)?;
                SqlitePoolOptions::new()
                    .max_connections(config.max_connections.max(1))
                    .connect(&format!("{}?mode=rwc", config.url.to_connection_string()))
                    .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.url)))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %config.url, "Health label database ready");
        Ok(db)
    }

    /// Wrap an existing pool without running migrations
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Manager for health-label tables
    #[must_use]
    pub fn health_labels(&self) -> HealthLabelsManager {
        HealthLabelsManager::new(self.pool.clone())
    }

    /// Create reference tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        debug!(statements = MIGRATIONS.len(), "Health label migrations applied");
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })
        }
        _ => Ok(()),
    }
}

const MIGRATIONS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS health_labels_categories (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT,
        priority INTEGER NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS health_labels_standard (
        id TEXT PRIMARY KEY,
        category_id TEXT NOT NULL REFERENCES health_labels_categories(id) ON DELETE CASCADE,
        label_key TEXT NOT NULL UNIQUE,
        display_name TEXT NOT NULL,
        description TEXT,
        severity_level TEXT NOT NULL DEFAULT 'medium'
            CHECK (severity_level IN ('critical', 'high', 'medium', 'preference')),
        is_active BOOLEAN NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS food_database_providers (
        id TEXT PRIMARY KEY,
        provider_name TEXT NOT NULL UNIQUE,
        display_name TEXT NOT NULL,
        api_base_url TEXT,
        is_active BOOLEAN NOT NULL DEFAULT 1,
        priority INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS health_labels_provider_mapping (
        id TEXT PRIMARY KEY,
        standard_label_id TEXT NOT NULL REFERENCES health_labels_standard(id) ON DELETE CASCADE,
        provider_id TEXT NOT NULL REFERENCES food_database_providers(id) ON DELETE CASCADE,
        provider_label_key TEXT NOT NULL,
        provider_label_value TEXT,
        is_supported BOOLEAN NOT NULL DEFAULT 1,
        mapping_notes TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        UNIQUE(standard_label_id, provider_id)
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_health_labels_standard_category ON health_labels_standard(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_provider_mapping_provider ON health_labels_provider_mapping(provider_id)",
    "CREATE INDEX IF NOT EXISTS idx_provider_mapping_label ON health_labels_provider_mapping(standard_label_id)",
];
