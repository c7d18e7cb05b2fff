/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the special-function module

use num_complex::Complex64;
use thiserror::Error;

/// Errors reported by a cylindrical Bessel backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BesselError {
    /// The backend rejected the request or failed to converge
    #[error("{function} evaluation failed for order {order} at z = {argument}: {reason}")]
    Evaluation {
        /// Function family, e.g. "J" or "H1"
        function: &'static str,
        /// Starting order of the requested sequence
        order: f64,
        /// Complex argument
        argument: Complex64,
        /// Backend message
        reason: String,
    },

    /// The backend returned fewer orders than requested
    #[error("{function} returned {actual} orders, expected {expected}")]
    ShortSequence {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A specialized Result type for special-function evaluation
pub type Result<T> = std::result::Result<T, BesselError>;
