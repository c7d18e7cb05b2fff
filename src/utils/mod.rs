/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the Mie pipeline
//!
//! This module provides numerical helpers and unit conversions used throughout the crate.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod math;

pub use conversions::{ev_to_nm, nm_to_ev};
pub use errors::{Result, UtilsError};
pub use math::{complex_div, interpolate_table, linspace};
