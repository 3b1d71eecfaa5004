// ABOUTME: Unified error type and error codes for the weekly report pipeline
// ABOUTME: Maps generation, configuration, rendering, and storage failures onto one AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every stage of the report pipeline returns [`AppResult`]. Nothing is retried or
//! recovered: an error travels unchanged to the binary, which prints the chain and
//! exits non-zero.

use plotters::drawing::DrawingAreaErrorKind;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the report pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input that cannot be processed (zero days, mismatched series)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A numeric range whose bounds are inverted or empty
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Environment variable or flag could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Rendering (7000-7999)
    /// The plotting backend failed while drawing a chart
    #[serde(rename = "RENDER_ERROR")]
    RenderError = 7000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Writing or encoding an output file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::RenderError => "Chart rendering failed",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
        }
    }
}

/// Unified error type for the report pipeline
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its permitted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Plotting backend failure
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RenderError, message)
    }

    /// Output file failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

impl From<png::EncodingError> for AppError {
    fn from(error: png::EncodingError) -> Self {
        Self::storage(format!("PNG encoding failed: {error}"))
    }
}

// Backend error types borrow the canvas, so only the rendered message is kept.
impl<E> From<DrawingAreaErrorKind<E>> for AppError
where
    E: StdError + Send + Sync,
{
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Self::render(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::out_of_range("steps: 12000 >= 3500");
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(
            error.to_string(),
            "The provided value is outside the acceptable range: steps: 12000 >= 3500"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let error = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::RenderError).unwrap();
        assert_eq!(json, "\"RENDER_ERROR\"");
    }
}
