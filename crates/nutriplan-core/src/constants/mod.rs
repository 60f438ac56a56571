// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for categories, providers, and the translation cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Translation cache constants (TTL, capacity, cleanup)
pub mod cache;
/// Category names, provider names, and legacy label vocabularies
pub mod health_labels;

/// Datastore access defaults
pub mod datastore {
    /// Default per-call timeout for catalog/mapping lookups in milliseconds
    pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
    /// Default SQLite connection string
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/nutriplan.db";
    /// Default maximum pool connections
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
}

/// Service identification used by logging
pub mod service {
    /// Default service name reported in structured logs
    pub const SERVICE_NAME: &str = "nutriplan-labels";
}
