//! # Error Types
//!
//! This module defines error types used throughout the zpl-label library.
//!
//! Coordinates are never a source of errors: a coordinate that is not a
//! usable number is treated as `0` (see [`crate::units::lenient`]).

use thiserror::Error;

/// Main error type for zpl-label operations
#[derive(Debug, Error)]
pub enum ZplError {
    /// Printer resolution must be a positive number of dots per inch
    #[error("Invalid resolution: {0} dpi (must be greater than zero)")]
    InvalidResolution(u32),

    /// A label dimension that cannot be negative was negative
    #[error("Negative dimension: {name} = {value}")]
    NegativeDimension { name: &'static str, value: f64 },

    /// Templates are stored on the printer by name, so the name is required
    #[error("Template name is missing or blank")]
    BlankTemplateName,

    /// A document field that cannot be used in its context
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// JSON document parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
