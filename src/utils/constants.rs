/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in optical calculations

/// Planck constant times speed of light in eV·nm
pub const HC_EV_NM: f64 = 1239.841_984;

/// Refractive index of vacuum
pub const VACUUM_INDEX: f64 = 1.0;

/// Refractive index of water in the visible range
pub const WATER_INDEX: f64 = 1.33;
