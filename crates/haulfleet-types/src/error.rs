//! Error types for haulfleet

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

/// Input records that break the input provider contract
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must be a finite non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Duplicate truck label: {0}")]
    DuplicateTruck(String),

    #[error("Unknown truck field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("Expected field=value, got {0:?}")]
    MalformedAssignment(String),
}

/// Failures of the haul-cycle productivity estimator
#[derive(Debug, Error, PartialEq)]
pub enum ProductivityError {
    #[error("Speed must be greater than zero, got {speed_kmh} km/h")]
    InvalidSpeed { speed_kmh: f64 },

    #[error("Total cycle time is zero; hourly productivity is undefined")]
    ZeroCycleTime,

    #[error("Truck capacity and fill factor must both be positive (capacity {capacity_tons} t, fill factor {fill_factor_pct}%)")]
    InvalidPayload {
        capacity_tons: f64,
        fill_factor_pct: f64,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Productivity error: {0}")]
    Productivity(#[from] ProductivityError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("TOML loader error: {0}")]
    TomlLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Truck not found: {0}")]
    TruckNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
