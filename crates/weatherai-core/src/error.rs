//! Centralized error types for Weather AI.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Catalog(e) => e.user_message(),
            AppError::Navigation(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Configuration IO error: {0}")]
    Io(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration file not found. Check the path.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Io(_) => "Configuration file could not be read or written.",
        }
    }
}

/// Geography catalog errors (dataset loading, lookups).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("City not found: {city} in {country}")]
    CityNotFound { country: String, city: String },
}

impl CatalogError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::DatasetUnavailable(_) => {
                "Location data could not be loaded. Check your settings."
            }
            CatalogError::CountryNotFound(_) => "Country not found. Check the name and try again.",
            CatalogError::CityNotFound { .. } => "City not found. Check the name and try again.",
        }
    }
}

/// Navigation/route errors.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No page for path: {0}")]
    NotFound(String),

    #[error("Malformed path: {0}")]
    Malformed(String),
}

impl NavigationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NavigationError::NotFound(_) => "That page does not exist.",
            NavigationError::Malformed(_) => "That link is malformed.",
        }
    }
}
