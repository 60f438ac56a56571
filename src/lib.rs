// ABOUTME: Main library entry point for the NutriPlan health-label engine
// ABOUTME: Standardizes dietary labels and translates them into recipe-provider vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![deny(unsafe_code)]

//! # `NutriPlan` Health Labels
//!
//! One internal vocabulary of dietary labels (allergies, dietary preferences,
//! cuisines, nutrition focus) and its translation into the tokens each external
//! recipe provider understands.
//!
//! ## Architecture
//!
//! - **Label Catalog**: categories and standard labels
//! - **Provider Registry**: active external providers
//! - **Mapping Store**: standard label to provider token rows
//! - **Translation Engine**: cached label translation and validation
//! - **Client Goals**: meal-planning constraints from client selections
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan_labels::config::HealthLabelsConfig;
//! use nutriplan_labels::context::HealthLabelsContext;
//! use nutriplan_labels::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = HealthLabelsConfig::from_env()?;
//!     let context = HealthLabelsContext::from_config(&config).await?;
//!
//!     let labels = vec!["dairy-free".to_owned(), "mediterranean".to_owned()];
//!     let result = context.transform().convert(&labels, "edamam").await;
//!     println!("health={:?} cuisine={:?}", result.health_labels, result.cuisine_types);
//!     Ok(())
//! }
//! ```

/// Translation result cache
pub mod cache;

/// Configuration management
pub mod config;

/// Dependency injection context
pub mod context;

/// Reference-data persistence
pub mod database;

/// Structured logging
pub mod logging;

/// Domain services
pub mod services;

// Re-export shared types from the core crate so `crate::errors` etc. resolve
pub use nutriplan_core::constants;
pub use nutriplan_core::errors;
pub use nutriplan_core::models;
