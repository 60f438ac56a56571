// ABOUTME: Unified error handling with standard error codes
// ABOUTME: Defines AppError, ErrorCode, AppResult and the conversion from storage errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Unified Error Handling System
//!
//! Standard error codes and the [`AppError`] type shared by the health-label
//! engine and its tools.
//!
//! Read paths in the engine never propagate these errors to meal-planning callers;
//! they are logged and degraded to empty results. Administrative writes
//! (`add_mapping`) are the only operations that return `ResourceNotFound`.

use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Resource Management (4000-4999)
    /// Referenced category, label, provider or mapping does not exist or is inactive
    ResourceNotFound = 4000,
    /// A row with the same unique key already exists
    ResourceAlreadyExists = 4001,
    /// The resource is temporarily unavailable
    ResourceUnavailable = 4003,

    // Datastore (5000-5999)
    /// The datastore did not answer within the configured timeout
    DatastoreTimeout = 5004,

    // Configuration (6000-6999)
    /// Configuration error encountered
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// An internal error occurred
    InternalError = 9000,
    /// Database operation failed
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ResourceUnavailable => "The resource is temporarily unavailable",
            Self::DatastoreTimeout => "The datastore did not respond in time",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Label key, provider name, or operation the error refers to
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Unique key conflict
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Resource temporarily unavailable
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }

    /// Datastore timeout for the named operation
    #[must_use]
    pub fn timeout(operation: impl Into<String>, timeout_ms: u128) -> Self {
        let operation = operation.into();
        Self::new(
            ErrorCode::DatastoreTimeout,
            format!("{operation} timed out after {timeout_ms}ms"),
        )
        .with_resource_id(operation)
    }

    /// Whether this error is a missing-resource error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::ResourceNotFound
    }

    /// Whether this error is a unique key conflict
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.code == ErrorCode::ResourceAlreadyExists
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                Self::already_exists(format!("Row ({})", db_error.message()))
            }
            sqlx::Error::PoolTimedOut => Self::unavailable("Database connection pool timed out"),
            other => Self::database(other.to_string()).with_source(other),
        }
    }
}
