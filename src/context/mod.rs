// ABOUTME: Dependency injection context for the health-label engine
// ABOUTME: Builds catalog, registry, mapping store, cache, and translation services once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Dependency injection context
//!
//! Every service shares one [`HealthLabelsStore`](crate::database::HealthLabelsStore)
//! and one translation cache. Build the context at startup and hand clones to callers.

pub mod health_labels;

pub use health_labels::HealthLabelsContext;
