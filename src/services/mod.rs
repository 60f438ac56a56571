// ABOUTME: Domain service layer for the health-label engine
// ABOUTME: Catalog, registry, mapping store, translation, and client-goals services over HealthLabelsStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Domain service layer
//!
//! Services hold an `Arc<dyn HealthLabelsStore>` and a datastore deadline. Every
//! read has a `try_*` form returning [`AppResult`] and a soft form that logs the
//! failure and returns an empty value.

/// Meal-planning integration over client goal selections
pub mod client_goals;

/// Standard label to provider token translation with result caching
pub mod health_labels_transform;

/// Read-only catalog of categories and standard labels
pub mod label_catalog;

/// Provider mapping reads and administrative writes
pub mod mapping_store;

/// Known external food-data providers
pub mod provider_registry;

pub use client_goals::{convert_legacy_health_labels, ClientGoalsIntegration};
pub use health_labels_transform::HealthLabelsTransformService;
pub use label_catalog::LabelCatalog;
pub use mapping_store::MappingStore;
pub use provider_registry::ProviderRegistry;

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Run a datastore call under a deadline
///
/// # Errors
///
/// Returns the call's own error, or a timeout error once `deadline` elapses
pub(crate) async fn with_timeout<T, F>(
    operation: &str,
    deadline: Duration,
    call: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    timeout(deadline, call)
        .await
        .unwrap_or_else(|_| Err(AppError::timeout(operation, deadline.as_millis())))
}

/// Log a failed read and fall back to the empty value
pub(crate) fn degrade<T: Default>(operation: &str, result: AppResult<T>) -> T {
    result.unwrap_or_else(|e| {
        AppLogger::log_degraded_read(operation, &e);
        T::default()
    })
}
