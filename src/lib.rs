/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # mie-rs
//!
//! Far-field optical response of a homogeneous sphere from classical Mie theory.
//!
//! Given wavelengths, the sphere permittivity at each wavelength, the radius and
//! the refractive index of the surrounding medium, the crate returns extinction,
//! scattering and absorption either as efficiencies or as cross-sections.
//!
//! ```no_run
//! use mie_rs::mie::{cross_sections, MieOptions};
//! use num_complex::Complex64;
//!
//! let wavelengths = [500.0, 550.0, 600.0];
//! let epsilon = [Complex64::new(-2.8, 3.1), Complex64::new(-5.4, 2.3), Complex64::new(-9.6, 1.7)];
//! let spectrum = cross_sections(&wavelengths, &epsilon, 20.0, &MieOptions::in_medium(1.33))?;
//! for record in &spectrum.records {
//!     println!("{} {}", record.wavelength, record.extinction);
//! }
//! # Ok::<(), mie_rs::mie::MieError>(())
//! ```

pub mod bessel;
pub mod cli;
pub mod input;
pub mod materials;
pub mod mie;
pub mod utils;

pub use mie::{cross_sections, MieCalculator, MieOptions, MieSpectrum, OpticalRecord, Quantity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
