/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Dielectric functions of sphere materials
//!
//! The Mie pipeline consumes permittivities only. Measured data for real
//! materials belongs to external sources; the providers here cover constant
//! dielectrics, Drude metals and user-supplied tables.

pub mod errors;

pub use errors::{MaterialError, Result};

use crate::utils::constants::WATER_INDEX;
use crate::utils::conversions::ev_to_nm;
use crate::utils::math::interpolate_table;
use num_complex::Complex64;

/// Provides a wavelength-dependent complex permittivity
pub trait DielectricFunction: Send + Sync {
    /// Human-readable name of the material
    fn name(&self) -> &str;

    /// Complex permittivity ε(λ)
    fn permittivity(&self, wavelength: f64) -> Result<Complex64>;

    /// Permittivities for a wavelength grid, in order
    fn permittivities(&self, wavelengths: &[f64]) -> Result<Vec<Complex64>> {
        wavelengths
            .iter()
            .map(|&wl| self.permittivity(wl))
            .collect()
    }

    /// Complex refractive index n + ik = sqrt(ε)
    fn refractive_index(&self, wavelength: f64) -> Result<Complex64> {
        Ok(self.permittivity(wavelength)?.sqrt())
    }
}

/// Wavelength-independent permittivity
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDielectric {
    name: String,
    epsilon: Complex64,
}

impl ConstantDielectric {
    pub fn new(name: impl Into<String>, epsilon: Complex64) -> Self {
        Self {
            name: name.into(),
            epsilon,
        }
    }

    /// Material with a real refractive index n, ε = n²
    pub fn from_index(name: impl Into<String>, index: f64) -> Self {
        Self::new(name, Complex64::new(index * index, 0.0))
    }
}

impl DielectricFunction for ConstantDielectric {
    fn name(&self) -> &str {
        &self.name
    }

    fn permittivity(&self, _wavelength: f64) -> Result<Complex64> {
        Ok(self.epsilon)
    }
}

/// Free-electron (Drude) metal
///
/// ε(λ) = ε∞ - (λ/λp)² / (1 + i·λ/λγ), where λp and λγ are the wavelengths
/// matching the plasma and damping frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct DrudeMetal {
    name: String,
    epsilon_inf: f64,
    plasma_wavelength: f64,
    damping_wavelength: f64,
}

impl DrudeMetal {
    /// Create a Drude metal from characteristic wavelengths
    ///
    /// # Arguments
    ///
    /// * `name` - Material name
    /// * `epsilon_inf` - High-frequency permittivity
    /// * `plasma_wavelength` - Wavelength of the plasma frequency
    /// * `damping_wavelength` - Wavelength of the damping rate
    pub fn new(
        name: impl Into<String>,
        epsilon_inf: f64,
        plasma_wavelength: f64,
        damping_wavelength: f64,
    ) -> Self {
        Self {
            name: name.into(),
            epsilon_inf,
            plasma_wavelength,
            damping_wavelength,
        }
    }

    /// Create a Drude metal from energies in eV; wavelengths are then in nm
    pub fn from_ev(name: impl Into<String>, epsilon_inf: f64, plasma_ev: f64, damping_ev: f64) -> Self {
        Self::new(name, epsilon_inf, ev_to_nm(plasma_ev), ev_to_nm(damping_ev))
    }

    /// Gold, wavelengths in nm
    pub fn gold() -> Self {
        Self::from_ev("Au (Drude)", 9.84, 9.01, 0.072)
    }

    /// Silver, wavelengths in nm
    pub fn silver() -> Self {
        Self::from_ev("Ag (Drude)", 3.7, 8.9, 0.021)
    }
}

impl DielectricFunction for DrudeMetal {
    fn name(&self) -> &str {
        &self.name
    }

    fn permittivity(&self, wavelength: f64) -> Result<Complex64> {
        let ratio = wavelength / self.plasma_wavelength;
        let damping = Complex64::new(1.0, wavelength / self.damping_wavelength);
        Ok(self.epsilon_inf - ratio * ratio / damping)
    }
}

/// Tabulated permittivity with linear interpolation in wavelength
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDielectric {
    name: String,
    wavelengths: Vec<f64>,
    eps_real: Vec<f64>,
    eps_imag: Vec<f64>,
}

impl TabulatedDielectric {
    /// Construct from tabulated data
    ///
    /// # Arguments
    ///
    /// * `name` - Material name
    /// * `wavelengths` - Strictly increasing wavelengths
    /// * `eps_real` - Real part of ε at each wavelength
    /// * `eps_imag` - Imaginary part of ε at each wavelength
    pub fn new(
        name: impl Into<String>,
        wavelengths: Vec<f64>,
        eps_real: Vec<f64>,
        eps_imag: Vec<f64>,
    ) -> Result<Self> {
        if wavelengths.is_empty() {
            return Err(MaterialError::InvalidTable("table is empty".to_string()));
        }
        if wavelengths.len() != eps_real.len() || wavelengths.len() != eps_imag.len() {
            return Err(MaterialError::InvalidTable(format!(
                "{} wavelengths, {} real and {} imaginary values",
                wavelengths.len(),
                eps_real.len(),
                eps_imag.len()
            )));
        }
        if wavelengths.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MaterialError::InvalidTable(
                "wavelengths must be strictly increasing".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            wavelengths,
            eps_real,
            eps_imag,
        })
    }

    /// Construct from (wavelength, ε) rows
    pub fn from_rows(name: impl Into<String>, rows: &[(f64, Complex64)]) -> Result<Self> {
        let wavelengths = rows.iter().map(|(wl, _)| *wl).collect();
        let eps_real = rows.iter().map(|(_, eps)| eps.re).collect();
        let eps_imag = rows.iter().map(|(_, eps)| eps.im).collect();
        Self::new(name, wavelengths, eps_real, eps_imag)
    }

    /// Wavelength range covered by the table
    pub fn wavelength_range(&self) -> (f64, f64) {
        // Non-empty by construction
        (
            self.wavelengths[0],
            self.wavelengths[self.wavelengths.len() - 1],
        )
    }
}

impl DielectricFunction for TabulatedDielectric {
    fn name(&self) -> &str {
        &self.name
    }

    fn permittivity(&self, wavelength: f64) -> Result<Complex64> {
        let (min, max) = self.wavelength_range();
        if !(min..=max).contains(&wavelength) {
            return Err(MaterialError::OutOfRange {
                wavelength,
                min,
                max,
            });
        }

        let re = interpolate_table(wavelength, &self.wavelengths, &self.eps_real)
            .map_err(|e| MaterialError::InvalidTable(e.to_string()))?;
        let im = interpolate_table(wavelength, &self.wavelengths, &self.eps_imag)
            .map_err(|e| MaterialError::InvalidTable(e.to_string()))?;
        Ok(Complex64::new(re, im))
    }
}

/// Look up a built-in material by name
///
/// Known names: `gold`/`au`, `silver`/`ag`, `water`, `silica`/`sio2`.
pub fn by_name(name: &str) -> Result<Box<dyn DielectricFunction>> {
    match name.to_ascii_lowercase().as_str() {
        "gold" | "au" => Ok(Box::new(DrudeMetal::gold())),
        "silver" | "ag" => Ok(Box::new(DrudeMetal::silver())),
        "water" => Ok(Box::new(ConstantDielectric::from_index("water", WATER_INDEX))),
        "silica" | "sio2" => Ok(Box::new(ConstantDielectric::from_index("silica", 1.45))),
        _ => Err(MaterialError::NotFound(name.to_string())),
    }
}
