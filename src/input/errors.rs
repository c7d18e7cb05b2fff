/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for simulation input

use crate::materials::MaterialError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading a simulation description
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
