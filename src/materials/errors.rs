/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for dielectric providers

use thiserror::Error;

/// Errors from dielectric providers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("Wavelength {wavelength} is outside the data range [{min}, {max}]")]
    OutOfRange { wavelength: f64, min: f64, max: f64 },

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Invalid dielectric table: {0}")]
    InvalidTable(String),
}

/// Result type for material lookups
pub type Result<T> = std::result::Result<T, MaterialError>;
