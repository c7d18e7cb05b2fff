/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Simulation configuration

use super::errors::{InputError, Result};
use crate::materials::{
    by_name, ConstantDielectric, DielectricFunction, DrudeMetal, TabulatedDielectric,
};
use crate::mie::MieOptions;
use crate::utils::math::linspace;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wavelengths to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WavelengthGrid {
    /// Evenly spaced grid including both end points
    Range { start: f64, stop: f64, points: usize },
    /// Explicit list, evaluated in the given order
    List(Vec<f64>),
}

impl WavelengthGrid {
    /// Expand into a wavelength vector
    pub fn values(&self) -> Vec<f64> {
        match self {
            WavelengthGrid::Range {
                start,
                stop,
                points,
            } => linspace(*start, *stop, *points),
            WavelengthGrid::List(values) => values.clone(),
        }
    }
}

/// Sphere material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialSpec {
    /// Fixed complex permittivity
    Constant { epsilon_re: f64, epsilon_im: f64 },
    /// Fixed real refractive index
    Index { index: f64 },
    /// Drude metal with energies in eV; wavelengths are in nm
    Drude {
        epsilon_inf: f64,
        plasma_ev: f64,
        damping_ev: f64,
    },
    /// Built-in material, see [`crate::materials::by_name`]
    Named { name: String },
    /// Rows of [wavelength, Re ε, Im ε]
    Table { rows: Vec<[f64; 3]> },
}

impl MaterialSpec {
    /// Build the dielectric provider
    pub fn build(&self) -> Result<Box<dyn DielectricFunction>> {
        let material: Box<dyn DielectricFunction> = match self {
            MaterialSpec::Constant {
                epsilon_re,
                epsilon_im,
            } => Box::new(ConstantDielectric::new(
                "constant",
                Complex64::new(*epsilon_re, *epsilon_im),
            )),
            MaterialSpec::Index { index } => {
                Box::new(ConstantDielectric::from_index("constant", *index))
            }
            MaterialSpec::Drude {
                epsilon_inf,
                plasma_ev,
                damping_ev,
            } => Box::new(DrudeMetal::from_ev(
                "drude",
                *epsilon_inf,
                *plasma_ev,
                *damping_ev,
            )),
            MaterialSpec::Named { name } => by_name(name)?,
            MaterialSpec::Table { rows } => {
                let rows: Vec<(f64, Complex64)> = rows
                    .iter()
                    .map(|row| (row[0], Complex64::new(row[1], row[2])))
                    .collect();
                Box::new(TabulatedDielectric::from_rows("table", &rows)?)
            }
        };
        Ok(material)
    }
}

/// Complete description of a spectrum calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub wavelengths: WavelengthGrid,
    pub material: MaterialSpec,
    /// Sphere radius, same length unit as the wavelengths
    pub radius: f64,
    #[serde(default)]
    pub options: MieOptions,
}

impl SimulationConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check that the description can be run
    pub fn validate(&self) -> Result<()> {
        let wavelengths = self.wavelengths.values();
        if wavelengths.is_empty() {
            return Err(InputError::InvalidConfig(
                "wavelength grid is empty".to_string(),
            ));
        }
        if wavelengths.iter().any(|&wl| !(wl > 0.0 && wl.is_finite())) {
            return Err(InputError::InvalidConfig(
                "wavelengths must be positive".to_string(),
            ));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(InputError::InvalidConfig(format!(
                "radius must be positive: {}",
                self.radius
            )));
        }
        if !(self.options.medium > 0.0 && self.options.medium.is_finite()) {
            return Err(InputError::InvalidConfig(format!(
                "medium index must be positive: {}",
                self.options.medium
            )));
        }
        if self.options.nmax == Some(0) {
            return Err(InputError::InvalidConfig(
                "nmax must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Expanded wavelength grid
    pub fn wavelengths(&self) -> Vec<f64> {
        self.wavelengths.values()
    }
}
