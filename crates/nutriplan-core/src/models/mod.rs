// ABOUTME: Core data models for health-label standardization and provider translation
// ABOUTME: Re-exports catalog, provider, mapping, translation, and client-goal structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Data Models
//!
//! Reference data (categories, standard labels, providers, mappings) is
//! administrator-managed and read by the translation engine. Translation
//! results are derived per request and never persisted.
//!
//! ## Core Models
//!
//! - `Category`, `StandardLabel`, `SeverityLevel`: the internal label vocabulary
//! - `Provider`, `ProviderMapping`: external providers and their tokens
//! - `HealthLabelsForProvider`, `ValidationResult`: translation outputs
//! - `MealPlanningConstraints`, `ClientGoalsValidation`: client-goal compositions

mod catalog;
mod client_goals;
mod translation;

pub use catalog::{
    CatalogOverview, Category, CategoryWithLabels, MappingUpdate, NewCategory, NewMapping,
    NewProvider, NewStandardLabel, Provider, ProviderMapping, SeverityLevel, StandardLabel,
};

pub use translation::{
    CacheStats, HealthLabelsForProvider, ProviderCapabilities, ProviderLabelFormat,
    ValidationResult,
};

pub use client_goals::{
    ClientGoalsHealthLabels, ClientGoalsValidation, LegacyHealthLabels, MealPlanningConstraints,
};
