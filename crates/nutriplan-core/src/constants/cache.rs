// ABOUTME: Cache-related constants for TTL, capacity, and cleanup intervals
// ABOUTME: Defaults for the in-memory provider translation cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

/// Translation result TTL (5 minutes)
pub const DEFAULT_TRANSLATION_TTL_SECS: u64 = 300;

/// Default maximum cache entries for in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Separator between the provider and the joined label keys
pub const KEY_PROVIDER_SEPARATOR: char = ':';

/// Separator between label keys inside a cache key
pub const KEY_LABEL_SEPARATOR: char = ',';
