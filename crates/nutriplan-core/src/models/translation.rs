// ABOUTME: Translation engine outputs consumed by recipe-provider clients and UI layers
// ABOUTME: HealthLabelsForProvider, ValidationResult, ProviderCapabilities, cache statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use serde::{Deserialize, Serialize};

/// Provider payload split into health-label and cuisine-type tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthLabelsForProvider {
    /// Provider the tokens belong to
    pub provider: String,
    /// Provider tokens for every non-cuisine label
    pub health_labels: Vec<String>,
    /// Provider tokens for cuisine labels
    pub cuisine_types: Vec<String>,
}

impl HealthLabelsForProvider {
    /// Empty payload for a provider
    #[must_use]
    pub fn empty(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            health_labels: Vec::new(),
            cuisine_types: Vec::new(),
        }
    }

    /// Append a health-label token unless already present
    pub fn push_health_label(&mut self, token: &str) {
        if !self.health_labels.iter().any(|t| t == token) {
            self.health_labels.push(token.to_owned());
        }
    }

    /// Append a cuisine-type token unless already present
    pub fn push_cuisine_type(&mut self, token: &str) {
        if !self.cuisine_types.iter().any(|t| t == token) {
            self.cuisine_types.push(token.to_owned());
        }
    }

    /// Whether neither bucket holds a token
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.health_labels.is_empty() && self.cuisine_types.is_empty()
    }
}

/// Support check for a set of label keys against one provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when every requested label is supported
    pub valid: bool,
    /// Requested label keys the provider cannot honor
    pub unsupported_labels: Vec<String>,
}

impl ValidationResult {
    /// Build from the unsupported label list
    #[must_use]
    pub fn from_unsupported(unsupported_labels: Vec<String>) -> Self {
        Self {
            valid: unsupported_labels.is_empty(),
            unsupported_labels,
        }
    }
}

/// Label keys a provider supports, split by catalog category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCapabilities {
    /// Supported allergy label keys
    pub supported_allergies: Vec<String>,
    /// Supported dietary preference label keys
    pub supported_preferences: Vec<String>,
    /// Supported cuisine label keys
    pub supported_cuisines: Vec<String>,
    /// Number of supported label keys across every category
    pub total_supported: usize,
}

/// Provider token lookup for one label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLabelFormat {
    /// Whether a mapping row exists
    pub found: bool,
    /// Provider token, when a mapping exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_label: Option<String>,
    /// Whether the mapping is supported
    pub supported: bool,
}

impl ProviderLabelFormat {
    /// Result for a label without a mapping row
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            found: false,
            provider_label: None,
            supported: false,
        }
    }
}

/// Translation cache statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently held, expired ones included until evicted
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that missed or found an expired entry
    pub misses: u64,
    /// `hits / (hits + misses)`, zero before the first lookup
    pub hit_rate: f64,
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
}
