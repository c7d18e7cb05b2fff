/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit conversion utilities

use super::constants;

/// Convert a photon energy in eV to a vacuum wavelength in nm
pub fn ev_to_nm(ev: f64) -> f64 {
    constants::HC_EV_NM / ev
}

/// Convert a vacuum wavelength in nm to a photon energy in eV
pub fn nm_to_ev(nm: f64) -> f64 {
    constants::HC_EV_NM / nm
}
