// ABOUTME: Core types and constants for the NutriPlan health-label platform
// ABOUTME: Foundation crate with error handling, label models, and catalog constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![deny(unsafe_code)]

//! # NutriPlan Core
//!
//! Foundation crate providing shared types and constants for the NutriPlan
//! health-label translation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Category names, provider names, cache defaults
//! - **models**: Catalog, provider, mapping, and translation result types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Health-label data models (categories, labels, providers, mappings, results)
pub mod models;
