// ABOUTME: Reference data models for the label catalog, provider registry, and mapping store
// ABOUTME: Category, StandardLabel, SeverityLevel, Provider, ProviderMapping and write payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How safety-sensitive a label is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    /// Allergens; an unsupported critical label must block plan generation
    Critical,
    /// Strong intolerances
    High,
    /// Health-driven restrictions
    #[default]
    Medium,
    /// Lifestyle choices
    Preference,
}

impl SeverityLevel {
    /// Convert to the stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Preference => "preference",
        }
    }

    /// Parse from the stored string form, falling back to `Medium`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "preference" => Self::Preference,
            _ => Self::Medium,
        }
    }

    /// Whether an unsupported label of this severity must stop plan generation
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Label category (allergy, `dietary_preference`, `cuisine_type`, `nutrition_focus`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Internal identifier
    pub id: Uuid,
    /// Stable category name
    pub name: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listing order, ascending
    pub priority: i32,
    /// Inactive categories hide their labels from every catalog query
    pub is_active: bool,
}

/// A standard label in the internal vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandardLabel {
    /// Internal identifier, never exposed to clients
    pub id: Uuid,
    /// Owning category
    pub category_id: Uuid,
    /// Owning category name
    pub category_name: String,
    /// Stable identifier crossing the system boundary (e.g. `dairy-free`)
    pub label_key: String,
    /// Display name for UIs
    pub display_name: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Safety classification
    pub severity_level: SeverityLevel,
    /// Whether the label is active
    pub is_active: bool,
}

/// External food-data provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    /// Internal identifier
    pub id: Uuid,
    /// Unique provider name (e.g. `edamam`)
    pub provider_name: String,
    /// Display name
    pub display_name: String,
    /// Base URL of the provider API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Whether the provider is active
    pub is_active: bool,
    /// Listing order, ascending
    pub priority: i32,
}

/// Mapping from one standard label to one provider token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderMapping {
    /// Internal identifier
    pub id: Uuid,
    /// Mapped standard label
    pub standard_label_id: Uuid,
    /// Label key of the mapped standard label
    pub standard_label_key: String,
    /// Target provider
    pub provider_id: Uuid,
    /// Target provider name
    pub provider_name: String,
    /// Provider token (e.g. `DAIRY_FREE`)
    pub provider_label_key: String,
    /// Optional provider-side value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_label_value: Option<String>,
    /// Unsupported rows exist for bookkeeping only
    pub is_supported: bool,
    /// Free-text notes for administrators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_notes: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Category to insert
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Stable category name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Listing order
    pub priority: i32,
}

/// Standard label to insert under an existing category
#[derive(Debug, Clone)]
pub struct NewStandardLabel {
    /// Owning category name
    pub category_name: String,
    /// Stable label key
    pub label_key: String,
    /// Display name
    pub display_name: String,
    /// Description
    pub description: Option<String>,
    /// Safety classification
    pub severity_level: SeverityLevel,
}

/// Provider to insert
#[derive(Debug, Clone)]
pub struct NewProvider {
    /// Unique provider name
    pub provider_name: String,
    /// Display name
    pub display_name: String,
    /// Base URL of the provider API
    pub api_base_url: Option<String>,
    /// Listing order
    pub priority: i32,
}

/// Mapping row to insert once label and provider ids are resolved
#[derive(Debug, Clone)]
pub struct NewMapping {
    /// Resolved standard label id
    pub standard_label_id: Uuid,
    /// Resolved provider id
    pub provider_id: Uuid,
    /// Provider token
    pub provider_label_key: String,
    /// Optional provider-side value
    pub provider_label_value: Option<String>,
    /// Whether the provider honors the label
    pub is_supported: bool,
    /// Free-text notes
    pub mapping_notes: Option<String>,
}

/// Partial mapping update; `None` fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingUpdate {
    /// New provider token; blank strings are ignored
    #[serde(default)]
    pub provider_label_key: Option<String>,
    /// New provider-side value
    #[serde(default)]
    pub provider_label_value: Option<String>,
    /// New supported flag
    #[serde(default)]
    pub is_supported: Option<bool>,
    /// New notes
    #[serde(default)]
    pub mapping_notes: Option<String>,
}

impl MappingUpdate {
    /// Provider token to apply, skipping blank values
    #[must_use]
    pub fn effective_label_key(&self) -> Option<&str> {
        self.provider_label_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Whether the update would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_label_key().is_none()
            && self.provider_label_value.is_none()
            && self.is_supported.is_none()
            && self.mapping_notes.is_none()
    }
}

/// Category with its active labels attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithLabels {
    /// The category
    #[serde(flatten)]
    pub category: Category,
    /// Active labels of the category, ordered by label key
    pub labels: Vec<StandardLabel>,
}

/// Full catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogOverview {
    /// Active categories ordered by priority
    pub categories: Vec<CategoryWithLabels>,
    /// Number of labels across all categories
    pub total_labels: usize,
}
