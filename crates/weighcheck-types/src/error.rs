//! Error types for weighcheck

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Structural defects in a vehicle or axle configuration.
///
/// These are rejected before any limit is evaluated; an over-limit vehicle is
/// never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Vehicle has no axles")]
    NoAxles,

    #[error("Expected {expected} axle weights for {expected} axles, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("Expected {expected} axle spacings for {axle_count} axles, got {actual}")]
    SpacingCountMismatch {
        axle_count: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Axle {index} has invalid weight {weight}")]
    InvalidAxleWeight { index: usize, weight: f64 },

    #[error("Spacing after axle {index} must be positive, got {spacing}")]
    InvalidSpacing { index: usize, spacing: f64 },

    #[error("Gross weight must be a non-negative number, got {0}")]
    InvalidGrossWeight(f64),

    #[error("Total length must be a non-negative number, got {0}")]
    InvalidTotalLength(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid weigh ticket in row {row}: {message}")]
    TicketParse { row: usize, message: String },

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
