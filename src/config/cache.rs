// ABOUTME: Translation cache configuration loaded from the environment
// ABOUTME: TTL, capacity, and background cleanup settings for the in-memory memo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::cache;

/// Translation cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationCacheConfig {
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
    /// Maximum number of entries
    pub max_entries: usize,
    /// Background sweep interval in seconds
    pub cleanup_interval_secs: u64,
    /// Run the background sweep (disable in tests without a runtime)
    pub enable_background_cleanup: bool,
}

impl Default for TranslationCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: cache::DEFAULT_TRANSLATION_TTL_SECS,
            max_entries: cache::DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval_secs: cache::DEFAULT_CLEANUP_INTERVAL_SECS,
            enable_background_cleanup: true,
        }
    }
}

impl TranslationCacheConfig {
    /// Load cache configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("HEALTH_LABELS_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(cache::DEFAULT_TRANSLATION_TTL_SECS),
            max_entries: env::var("HEALTH_LABELS_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(cache::DEFAULT_CACHE_MAX_ENTRIES),
            cleanup_interval_secs: env::var("HEALTH_LABELS_CACHE_CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(cache::DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: env::var("HEALTH_LABELS_CACHE_BACKGROUND_CLEANUP")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Entry time-to-live
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Background sweep interval
    #[must_use]
    pub const fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}
