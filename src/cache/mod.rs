// ABOUTME: Translation result cache keyed by provider and sorted label set
// ABOUTME: Structured cache key plus the in-memory LRU/TTL implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

/// In-memory cache implementation
pub mod memory;

pub use memory::TranslationCache;

use std::fmt;

use crate::constants::cache::{KEY_LABEL_SEPARATOR, KEY_PROVIDER_SEPARATOR};

/// Cache key for one translation request
///
/// Label order and duplicates do not affect the key, so `["b", "a", "a"]` and
/// `["a", "b"]` share an entry for the same provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Provider name
    pub provider: String,
    /// Sorted, de-duplicated label keys
    pub labels: Vec<String>,
}

impl CacheKey {
    /// Create a new cache key
    #[must_use]
    pub fn new(provider: &str, labels: &[String]) -> Self {
        let mut labels = labels.to_vec();
        labels.sort_unstable();
        labels.dedup();
        Self {
            provider: provider.to_owned(),
            labels,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_PROVIDER_SEPARATOR}", self.provider)?;
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, "{KEY_LABEL_SEPARATOR}")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}
