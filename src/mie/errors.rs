/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the Mie module

use crate::bessel::BesselError;
use crate::materials::MaterialError;
use thiserror::Error;

/// Result type for Mie calculations
pub type Result<T> = std::result::Result<T, MieError>;

/// Mie-specific errors
#[derive(Error, Debug)]
pub enum MieError {
    /// Error from the Bessel backend
    #[error("Special function error: {0}")]
    Bessel(#[from] BesselError),

    /// Error from a dielectric provider
    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    /// Input vectors or tables have incompatible shapes
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Input violates a precondition of the pipeline
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
