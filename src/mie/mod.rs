/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mie theory for homogeneous spheres
//!
//! Extinction, scattering and absorption spectra of a homogeneous sphere in a
//! non-absorbing medium, computed from the classical Mie series.
//!
//! The pipeline runs strictly in this order:
//!
//! 1. size parameter x = 2π·n_medium·r/λ and relative index s = sqrt(ε)/n_medium
//! 2. truncation order, either supplied or derived from max(x)
//! 3. Riccati-Bessel tables ([`riccati`])
//! 4. coefficients Γ, Δ, A, B ([`susceptibility`])
//! 5. efficiencies, optionally scaled to cross-sections ([`efficiency`])
//!
//! # Reference
//! Bohren & Huffman, *Absorption and Scattering of Light by Small Particles* (1983).

pub mod efficiency;
pub mod errors;
pub mod riccati;
pub mod susceptibility;

pub use efficiency::{efficiencies, to_cross_sections, ABSORPTION, EXTINCTION, SCATTERING};
pub use errors::{MieError, Result};
pub use riccati::{riccati_first, riccati_third, RiccatiTable};
pub use susceptibility::{susceptibility, Susceptibility};

use crate::bessel::{AmosBessel, CylindricalBessel};
use crate::materials::DielectricFunction;
use crate::utils::constants::VACUUM_INDEX;
use log::{debug, warn};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Quantity held by the extinction/scattering/absorption fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Dimensionless efficiency factors Q
    Efficiency,
    /// Physical cross-sections Q·π·r², in squared length units of the radius
    CrossSection,
}

/// Options for a spectrum calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MieOptions {
    /// Refractive index of the surrounding medium
    pub medium: f64,
    /// Truncation order; derived from the largest size parameter when `None`
    pub nmax: Option<usize>,
    /// Return efficiencies (true) or cross-sections (false)
    pub as_efficiency: bool,
    /// Reject non-physical radius, medium or wavelengths before computing
    pub strict: bool,
    /// Log a warning for coefficient denominators smaller than this magnitude
    pub resonance_threshold: Option<f64>,
}

impl Default for MieOptions {
    fn default() -> Self {
        Self {
            medium: VACUUM_INDEX,
            nmax: None,
            as_efficiency: true,
            strict: false,
            resonance_threshold: None,
        }
    }
}

impl MieOptions {
    /// Options for a sphere in the given medium
    pub fn in_medium(medium: f64) -> Self {
        Self {
            medium,
            ..Self::default()
        }
    }

    /// Set a fixed truncation order
    pub fn with_nmax(mut self, nmax: usize) -> Self {
        self.nmax = Some(nmax);
        self
    }

    /// Return cross-sections instead of efficiencies
    pub fn cross_sections(mut self) -> Self {
        self.as_efficiency = false;
        self
    }

    /// Enable physical precondition checks
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Quantity reported by records computed with these options
    pub fn quantity(&self) -> Quantity {
        if self.as_efficiency {
            Quantity::Efficiency
        } else {
            Quantity::CrossSection
        }
    }
}

/// Optical response at one wavelength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalRecord {
    pub wavelength: f64,
    pub extinction: f64,
    pub scattering: f64,
    pub absorption: f64,
}

/// Result of a spectrum calculation
///
/// Records follow the order of the input wavelengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MieSpectrum {
    /// What the record fields hold
    pub quantity: Quantity,
    /// Truncation order used for every sample
    pub nmax: usize,
    /// One record per input wavelength
    pub records: Vec<OpticalRecord>,
}

impl MieSpectrum {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the spectrum holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Wavelength column
    pub fn wavelengths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.wavelength).collect()
    }

    /// Extinction column
    pub fn extinction(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.extinction).collect()
    }

    /// Scattering column
    pub fn scattering(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.scattering).collect()
    }

    /// Absorption column
    pub fn absorption(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.absorption).collect()
    }

    /// Record with the largest extinction, ignoring NaN entries
    pub fn extinction_peak(&self) -> Option<&OpticalRecord> {
        self.records
            .iter()
            .filter(|r| !r.extinction.is_nan())
            .max_by(|a, b| a.extinction.total_cmp(&b.extinction))
    }
}

/// Standard truncation heuristic ceil(2 + x + 4·x^(1/3)) at the largest x
pub fn default_nmax(x: &[f64]) -> usize {
    let x_max = x.iter().copied().fold(0.0_f64, f64::max);
    let nmax = (2.0 + x_max + 4.0 * x_max.cbrt()).ceil();
    if nmax.is_finite() && nmax >= 1.0 {
        nmax as usize
    } else {
        1
    }
}

/// Size parameters 2π·n_medium·r/λ
pub fn size_parameters(wavelength: &[f64], radius: f64, medium: f64) -> Vec<f64> {
    wavelength
        .iter()
        .map(|&wl| 2.0 * PI / wl * medium * radius)
        .collect()
}

/// Relative refractive indices sqrt(ε)/n_medium
pub fn relative_indices(epsilon: &[Complex64], medium: f64) -> Vec<Complex64> {
    epsilon.iter().map(|eps| eps.sqrt() / medium).collect()
}

/// Mie calculator over a cylindrical Bessel backend
#[derive(Debug, Clone, Default)]
pub struct MieCalculator<B = AmosBessel> {
    bessel: B,
}

impl MieCalculator<AmosBessel> {
    /// Calculator using the Amos backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: CylindricalBessel> MieCalculator<B> {
    /// Calculator using a custom backend
    pub fn with_backend(bessel: B) -> Self {
        Self { bessel }
    }

    /// Backend used for special functions
    pub fn backend(&self) -> &B {
        &self.bessel
    }

    /// Compute a spectrum from tabulated permittivities
    ///
    /// # Arguments
    ///
    /// * `wavelength` - Vacuum wavelengths, same unit as `radius`
    /// * `epsilon` - Complex permittivity of the sphere at each wavelength
    /// * `radius` - Sphere radius
    /// * `options` - Medium, truncation order and output options
    ///
    /// # Returns
    ///
    /// One record per wavelength, in input order
    pub fn cross_sections(
        &self,
        wavelength: &[f64],
        epsilon: &[Complex64],
        radius: f64,
        options: &MieOptions,
    ) -> Result<MieSpectrum> {
        validate(wavelength, epsilon, radius, options)?;

        let s = relative_indices(epsilon, options.medium);
        let x = size_parameters(wavelength, radius, options.medium);
        // The default order depends on every x, so it is fixed only now
        let nmax = match options.nmax {
            Some(nmax) => nmax,
            None => default_nmax(&x),
        };
        debug!(
            "Mie spectrum: {} wavelengths, radius {}, medium {}, nmax {}",
            wavelength.len(),
            radius,
            options.medium,
            nmax
        );

        let coefficients = susceptibility(&self.bessel, nmax, &s, &x)?;
        if let Some(threshold) = options.resonance_threshold {
            for message in resonance_warnings(wavelength, &coefficients, threshold) {
                warn!("{}", message);
            }
        }

        let mut table = efficiencies(&x, &coefficients)?;
        if !options.as_efficiency {
            table = to_cross_sections(&table, radius);
        }

        let records = wavelength
            .iter()
            .zip(table.rows())
            .map(|(&wl, row)| OpticalRecord {
                wavelength: wl,
                extinction: row[EXTINCTION],
                scattering: row[SCATTERING],
                absorption: row[ABSORPTION],
            })
            .collect();

        Ok(MieSpectrum {
            quantity: options.quantity(),
            nmax,
            records,
        })
    }

    /// Compute a spectrum for a material
    ///
    /// Permittivities are looked up from `material` before the Mie pipeline runs.
    pub fn spectrum(
        &self,
        material: &dyn DielectricFunction,
        wavelength: &[f64],
        radius: f64,
        options: &MieOptions,
    ) -> Result<MieSpectrum> {
        let epsilon = material.permittivities(wavelength)?;
        debug!("Loaded {} permittivities for {}", epsilon.len(), material.name());
        self.cross_sections(wavelength, &epsilon, radius, options)
    }
}

/// Compute a spectrum with the default Bessel backend
///
/// See [`MieCalculator::cross_sections`].
pub fn cross_sections(
    wavelength: &[f64],
    epsilon: &[Complex64],
    radius: f64,
    options: &MieOptions,
) -> Result<MieSpectrum> {
    MieCalculator::new().cross_sections(wavelength, epsilon, radius, options)
}

fn validate(
    wavelength: &[f64],
    epsilon: &[Complex64],
    radius: f64,
    options: &MieOptions,
) -> Result<()> {
    if wavelength.is_empty() {
        return Err(MieError::InvalidInput("no wavelengths given".to_string()));
    }
    if wavelength.len() != epsilon.len() {
        return Err(MieError::DimensionMismatch(format!(
            "{} wavelengths but {} permittivities",
            wavelength.len(),
            epsilon.len()
        )));
    }
    if options.nmax == Some(0) {
        return Err(MieError::InvalidInput(
            "truncation order must be at least 1".to_string(),
        ));
    }

    if !options.strict {
        return Ok(());
    }

    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MieError::InvalidInput(format!(
            "radius must be positive and finite: {}",
            radius
        )));
    }
    if !(options.medium > 0.0 && options.medium.is_finite()) {
        return Err(MieError::InvalidInput(format!(
            "medium index must be positive and finite: {}",
            options.medium
        )));
    }
    if let Some(&wl) = wavelength.iter().find(|&&wl| !(wl > 0.0 && wl.is_finite())) {
        return Err(MieError::InvalidInput(format!(
            "wavelengths must be positive and finite: {}",
            wl
        )));
    }
    if let Some(eps) = epsilon.iter().find(|eps| !eps.is_finite()) {
        return Err(MieError::InvalidInput(format!(
            "permittivity must be finite: {}",
            eps
        )));
    }
    Ok(())
}

/// One message per sample whose A or B denominators fall below `threshold`
fn resonance_warnings(
    wavelength: &[f64],
    coefficients: &Susceptibility,
    threshold: f64,
) -> Vec<String> {
    coefficients
        .resonant_orders(threshold)
        .into_iter()
        .map(|(sample, orders)| {
            let orders = orders
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Near-singular Mie denominator at wavelength {} (orders {})",
                wavelength[sample], orders
            )
        })
        .collect()
}
