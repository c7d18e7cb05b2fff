/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Cylindrical Bessel functions of complex argument
//!
//! The Mie pipeline needs J_ν(z) and H^(1)_ν(z) for half-integer ν and complex z.
//! These are delegated to a [`CylindricalBessel`] backend. The default backend,
//! [`AmosBessel`], wraps the `complex-bessel` port of Amos' TOMS 644 routines.

pub mod errors;

pub use errors::{BesselError, Result};

use complex_bessel::Scaling;
use log::trace;
use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;

/// Bessel function family requested from a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BesselKind {
    /// Bessel function of the first kind, J
    FirstKind,
    /// Hankel function of the first kind, H^(1) = J + iY
    HankelFirst,
}

impl BesselKind {
    fn label(self) -> &'static str {
        match self {
            BesselKind::FirstKind => "J",
            BesselKind::HankelFirst => "H1",
        }
    }
}

/// A source of cylindrical Bessel and Hankel function values
///
/// Implementations return `count` consecutive orders ν, ν+1, ..., ν+count-1
/// for a single complex argument.
pub trait CylindricalBessel: Send + Sync {
    /// J_{ν+k}(z) for k = 0..count
    fn bessel_j(&self, nu: f64, z: Complex64, count: usize) -> Result<Vec<Complex64>>;

    /// H^(1)_{ν+k}(z) for k = 0..count
    fn hankel1(&self, nu: f64, z: Complex64, count: usize) -> Result<Vec<Complex64>>;

    /// Evaluate a full (argument × order) table
    ///
    /// # Arguments
    ///
    /// * `kind` - Function family
    /// * `nu` - Starting order
    /// * `z` - Argument vector, one row per entry
    /// * `count` - Number of consecutive orders, one column per order
    ///
    /// # Returns
    ///
    /// A `z.len() × count` table. Rows are evaluated in parallel.
    fn table(
        &self,
        kind: BesselKind,
        nu: f64,
        z: &[Complex64],
        count: usize,
    ) -> Result<Array2<Complex64>> {
        if count == 0 {
            return Err(BesselError::InvalidParameter(
                "at least one order must be requested".to_string(),
            ));
        }

        let rows = z
            .par_iter()
            .map(|&zi| {
                let values = match kind {
                    BesselKind::FirstKind => self.bessel_j(nu, zi, count)?,
                    BesselKind::HankelFirst => self.hankel1(nu, zi, count)?,
                };
                if values.len() < count {
                    return Err(BesselError::ShortSequence {
                        function: kind.label(),
                        expected: count,
                        actual: values.len(),
                    });
                }
                Ok(values)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut table = Array2::zeros((z.len(), count));
        for (mut row, values) in table.rows_mut().into_iter().zip(rows) {
            for (dst, value) in row.iter_mut().zip(values) {
                *dst = value;
            }
        }
        Ok(table)
    }
}

/// Backend using the `complex-bessel` crate (Amos algorithm 644)
#[derive(Debug, Clone, Copy, Default)]
pub struct AmosBessel;

impl AmosBessel {
    /// Create a new backend
    pub fn new() -> Self {
        Self
    }
}

impl CylindricalBessel for AmosBessel {
    /// J is evaluated one order at a time. `besselj_seq` loses every order to
    /// roundoff once `count` is large compared with |z|, while still reporting
    /// a normal status.
    fn bessel_j(&self, nu: f64, z: Complex64, count: usize) -> Result<Vec<Complex64>> {
        (0..count)
            .map(|k| {
                let order = nu + k as f64;
                complex_bessel::besselj(order, z).map_err(|err| BesselError::Evaluation {
                    function: "J",
                    order,
                    argument: z,
                    reason: err.to_string(),
                })
            })
            .collect()
    }

    fn hankel1(&self, nu: f64, z: Complex64, count: usize) -> Result<Vec<Complex64>> {
        let result = complex_bessel::hankel1_seq(nu, z, count, Scaling::Unscaled).map_err(
            |err| BesselError::Evaluation {
                function: "H1",
                order: nu,
                argument: z,
                reason: err.to_string(),
            },
        )?;
        if result.underflow_count > 0 {
            trace!(
                "H1_{}(z = {}): {} leading orders underflowed to zero",
                nu,
                z,
                result.underflow_count
            );
        }
        Ok(result.values)
    }
}
