// ABOUTME: SQLite operations for health-label categories, labels, providers, and mappings
// ABOUTME: Implements HealthLabelsStore plus administrative inserts used by seeding and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::HealthLabelsStore;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Category, MappingUpdate, NewCategory, NewMapping, NewProvider, NewStandardLabel, Provider,
    ProviderMapping, SeverityLevel, StandardLabel,
};

/// Health-label reference data manager
#[derive(Clone)]
pub struct HealthLabelsManager {
    pool: SqlitePool,
}

impl HealthLabelsManager {
    /// Create a new health-label manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Administrative inserts
    // ========================================================================

    /// Insert a category
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a duplicate name, or an error if
    /// database operation fails
    pub async fn create_category(&self, category: &NewCategory) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            r"
            INSERT INTO health_labels_categories (id, name, description, priority, is_active, created_at)
            VALUES ($1, $2, $3, $4, 1, $5)
            ",
        )
        .bind(id.to_string())
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.priority)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(&category.name))?;

        Ok(id)
    }

    /// Insert a standard label under an existing category
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the category does not exist,
    /// `ResourceAlreadyExists` for a duplicate key, or an error if database
    /// operation fails
    pub async fn create_standard_label(&self, label: &NewStandardLabel) -> AppResult<Uuid> {
        let category_id: Option<String> =
            sqlx::query_scalar("SELECT id FROM health_labels_categories WHERE name = $1")
                .bind(&label.category_name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to look up category: {e}")))?;
        let category_id = category_id.ok_or_else(|| {
            AppError::not_found(format!("Category '{}'", label.category_name))
                .with_resource_id(&label.category_name)
        })?;

        let id = Uuid::new_v4();
        sqlx::query(
            r"
            INSERT INTO health_labels_standard
                (id, category_id, label_key, display_name, description, severity_level, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 1, $7)
            ",
        )
        .bind(id.to_string())
        .bind(category_id)
        .bind(&label.label_key)
        .bind(&label.display_name)
        .bind(&label.description)
        .bind(label.severity_level.as_str())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(&label.label_key))?;

        Ok(id)
    }

    /// Insert a provider
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a duplicate name, or an error if
    /// database operation fails
    pub async fn create_provider(&self, provider: &NewProvider) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            r"
            INSERT INTO food_database_providers
                (id, provider_name, display_name, api_base_url, is_active, priority, created_at)
            VALUES ($1, $2, $3, $4, 1, $5, $6)
            ",
        )
        .bind(id.to_string())
        .bind(&provider.provider_name)
        .bind(&provider.display_name)
        .bind(&provider.api_base_url)
        .bind(provider.priority)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(&provider.provider_name))?;

        Ok(id)
    }

    /// Activate or deactivate a category
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn set_category_active(&self, name: &str, is_active: bool) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE health_labels_categories SET is_active = $1 WHERE name = $2")
                .bind(is_active)
                .bind(name)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to update category: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    /// Activate or deactivate a standard label
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn set_label_active(&self, label_key: &str, is_active: bool) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE health_labels_standard SET is_active = $1 WHERE label_key = $2")
                .bind(is_active)
                .bind(label_key)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to update label: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    /// Activate or deactivate a provider
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn set_provider_active(
        &self,
        provider_name: &str,
        is_active: bool,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE food_database_providers SET is_active = $1 WHERE provider_name = $2",
        )
        .bind(is_active)
        .bind(provider_name)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update provider: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of rows in a reference table, used by seeding to skip populated databases
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count_categories(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM health_labels_categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count categories: {e}")))
    }
}

#[async_trait]
impl HealthLabelsStore for HealthLabelsManager {
    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, priority, is_active
            FROM health_labels_categories
            WHERE is_active = 1
            ORDER BY priority ASC, name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch categories: {e}")))?;

        rows.iter().map(row_to_category).collect()
    }

    async fn fetch_standard_labels(
        &self,
        category_name: Option<&str>,
    ) -> AppResult<Vec<StandardLabel>> {
        let rows = sqlx::query(
            r"
            SELECT s.id, s.category_id, c.name AS category_name, s.label_key, s.display_name,
                   s.description, s.severity_level, s.is_active
            FROM health_labels_standard s
            JOIN health_labels_categories c ON c.id = s.category_id
            WHERE s.is_active = 1
              AND c.is_active = 1
              AND ($1 IS NULL OR c.name = $1)
            ORDER BY c.priority ASC, s.label_key ASC
            ",
        )
        .bind(category_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch standard labels: {e}")))?;

        rows.iter().map(row_to_standard_label).collect()
    }

    async fn fetch_providers(&self) -> AppResult<Vec<Provider>> {
        let rows = sqlx::query(
            r"
            SELECT id, provider_name, display_name, api_base_url, is_active, priority
            FROM food_database_providers
            WHERE is_active = 1
            ORDER BY priority ASC, provider_name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch providers: {e}")))?;

        rows.iter().map(row_to_provider).collect()
    }

    async fn fetch_mappings_for_provider(
        &self,
        provider_name: &str,
    ) -> AppResult<Vec<ProviderMapping>> {
        let rows = sqlx::query(
            r"
            SELECT m.id, m.standard_label_id, s.label_key AS standard_label_key,
                   m.provider_id, p.provider_name, m.provider_label_key, m.provider_label_value,
                   m.is_supported, m.mapping_notes, m.created_at, m.updated_at
            FROM health_labels_provider_mapping m
            JOIN health_labels_standard s ON s.id = m.standard_label_id
            JOIN health_labels_categories c ON c.id = s.category_id
            JOIN food_database_providers p ON p.id = m.provider_id
            WHERE p.provider_name = $1
              AND p.is_active = 1
              AND s.is_active = 1
              AND c.is_active = 1
            ORDER BY s.label_key ASC
            ",
        )
        .bind(provider_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!(
                "Failed to fetch mappings for provider {provider_name}: {e}"
            ))
        })?;

        rows.iter().map(row_to_mapping).collect()
    }

    async fn fetch_label_categories(
        &self,
        label_keys: &[String],
    ) -> AppResult<HashMap<String, Uuid>> {
        if label_keys.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = (1..=label_keys.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "SELECT label_key, category_id FROM health_labels_standard WHERE label_key IN ({placeholders})"
        );

        let mut sql_query = sqlx::query(&query);
        for key in label_keys {
            sql_query = sql_query.bind(key);
        }

        let rows = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch label categories: {e}")))?;

        rows.iter()
            .map(|row| {
                let key: String = row.get("label_key");
                Ok((key, parse_uuid(row, "category_id")?))
            })
            .collect()
    }

    async fn find_active_label_id(&self, label_key: &str) -> AppResult<Option<Uuid>> {
        let id: Option<String> = sqlx::query_scalar(
            r"
            SELECT s.id
            FROM health_labels_standard s
            JOIN health_labels_categories c ON c.id = s.category_id
            WHERE s.label_key = $1 AND s.is_active = 1 AND c.is_active = 1
            ",
        )
        .bind(label_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up standard label: {e}")))?;

        id.map(|s| parse_uuid_str(&s)).transpose()
    }

    async fn find_active_provider_id(&self, provider_name: &str) -> AppResult<Option<Uuid>> {
        let id: Option<String> = sqlx::query_scalar(
            "SELECT id FROM food_database_providers WHERE provider_name = $1 AND is_active = 1",
        )
        .bind(provider_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up provider: {e}")))?;

        id.map(|s| parse_uuid_str(&s)).transpose()
    }

    async fn insert_mapping(&self, mapping: &NewMapping) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r"
            INSERT INTO health_labels_provider_mapping
                (id, standard_label_id, provider_id, provider_label_key, provider_label_value,
                 is_supported, mapping_notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ",
        )
        .bind(id.to_string())
        .bind(mapping.standard_label_id.to_string())
        .bind(mapping.provider_id.to_string())
        .bind(&mapping.provider_label_key)
        .bind(&mapping.provider_label_value)
        .bind(mapping.is_supported)
        .bind(&mapping.mapping_notes)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(mapping.standard_label_id.to_string()))?;

        Ok(id)
    }

    async fn update_mapping(&self, mapping_id: Uuid, update: &MappingUpdate) -> AppResult<u64> {
        // Placeholders are numbered in the order values are bound below
        let mut assignments = vec!["updated_at = $1".to_owned()];
        let mut next = 2;
        let label_key = update.effective_label_key();
        if label_key.is_some() {
            assignments.push(format!("provider_label_key = ${next}"));
            next += 1;
        }
        if update.provider_label_value.is_some() {
            assignments.push(format!("provider_label_value = ${next}"));
            next += 1;
        }
        if update.is_supported.is_some() {
            assignments.push(format!("is_supported = ${next}"));
            next += 1;
        }
        if update.mapping_notes.is_some() {
            assignments.push(format!("mapping_notes = ${next}"));
            next += 1;
        }

        let query = format!(
            "UPDATE health_labels_provider_mapping SET {} WHERE id = ${next}",
            assignments.join(", ")
        );

        let mut sql_query = sqlx::query(&query).bind(Utc::now().to_rfc3339());
        if let Some(key) = label_key {
            sql_query = sql_query.bind(key);
        }
        if let Some(value) = &update.provider_label_value {
            sql_query = sql_query.bind(value);
        }
        if let Some(is_supported) = update.is_supported {
            sql_query = sql_query.bind(is_supported);
        }
        if let Some(notes) = &update.mapping_notes {
            sql_query = sql_query.bind(notes);
        }

        let result = sql_query
            .bind(mapping_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update mapping: {e}")))?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// Row conversion
// ============================================================================

fn parse_uuid_str(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::internal(format!("Invalid UUID '{value}': {e}")))
}

fn parse_uuid(row: &SqliteRow, column: &str) -> AppResult<Uuid> {
    let value: String = row.get(column);
    parse_uuid_str(&value)
}

fn parse_timestamp(row: &SqliteRow, column: &str) -> AppResult<DateTime<Utc>> {
    let value: String = row.get(column);
    Ok(DateTime::parse_from_rfc3339(&value)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc))
}

fn row_to_category(row: &SqliteRow) -> AppResult<Category> {
    let priority: i64 = row.get("priority");
    Ok(Category {
        id: parse_uuid(row, "id")?,
        name: row.get("name"),
        description: row.get("description"),
        priority: i32::try_from(priority).unwrap_or(i32::MAX),
        is_active: row.get("is_active"),
    })
}

fn row_to_standard_label(row: &SqliteRow) -> AppResult<StandardLabel> {
    let severity: String = row.get("severity_level");
    Ok(StandardLabel {
        id: parse_uuid(row, "id")?,
        category_id: parse_uuid(row, "category_id")?,
        category_name: row.get("category_name"),
        label_key: row.get("label_key"),
        display_name: row.get("display_name"),
        description: row.get("description"),
        severity_level: SeverityLevel::from_str_lossy(&severity),
        is_active: row.get("is_active"),
    })
}

fn row_to_provider(row: &SqliteRow) -> AppResult<Provider> {
    let priority: i64 = row.get("priority");
    Ok(Provider {
        id: parse_uuid(row, "id")?,
        provider_name: row.get("provider_name"),
        display_name: row.get("display_name"),
        api_base_url: row.get("api_base_url"),
        is_active: row.get("is_active"),
        priority: i32::try_from(priority).unwrap_or(i32::MAX),
    })
}

fn row_to_mapping(row: &SqliteRow) -> AppResult<ProviderMapping> {
    Ok(ProviderMapping {
        id: parse_uuid(row, "id")?,
        standard_label_id: parse_uuid(row, "standard_label_id")?,
        standard_label_key: row.get("standard_label_key"),
        provider_id: parse_uuid(row, "provider_id")?,
        provider_name: row.get("provider_name"),
        provider_label_key: row.get("provider_label_key"),
        provider_label_value: row.get("provider_label_value"),
        is_supported: row.get("is_supported"),
        mapping_notes: row.get("mapping_notes"),
        created_at: parse_timestamp(row, "created_at")?,
        updated_at: parse_timestamp(row, "updated_at")?,
    })
}
