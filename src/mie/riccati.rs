/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Riccati-Bessel functions and their derivatives
//!
//! ψ_n(ρ) = ρ·j_n(ρ) and ξ_n(ρ) = ρ·h^(1)_n(ρ) are built from the cylindrical
//! functions through f_n(ρ) = sqrt(πρ/2)·C_{n+1/2}(ρ). Orders 0..=nmax are
//! requested in one batched call per sample; order 0 only feeds the derivative
//! recurrence f'_n = f_{n-1} - n·f_n/ρ and is not returned.
//!
//! ρ must be non-zero. At ρ = 0 the recurrence divides by zero and the
//! resulting NaN is propagated; the Hankel backend rejects ρ = 0 outright.

use super::errors::{MieError, Result};
use crate::bessel::{BesselKind, CylindricalBessel};
use ndarray::{s, Array2};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Function values and derivatives for orders 1..=nmax
///
/// Both tables have one row per argument and `nmax` columns; column `k` holds
/// order `k + 1`.
#[derive(Debug, Clone)]
pub struct RiccatiTable {
    /// f_n(ρ)
    pub values: Array2<Complex64>,
    /// f'_n(ρ)
    pub derivatives: Array2<Complex64>,
}

impl RiccatiTable {
    /// Number of argument samples
    pub fn samples(&self) -> usize {
        self.values.nrows()
    }

    /// Truncation order
    pub fn nmax(&self) -> usize {
        self.values.ncols()
    }
}

/// Riccati-Bessel function of the first kind ψ_n and its derivative
///
/// # Arguments
///
/// * `bessel` - Cylindrical Bessel backend
/// * `rho` - Non-empty argument vector
/// * `nmax` - Highest order returned, at least 1
pub fn riccati_first<B>(bessel: &B, rho: &[Complex64], nmax: usize) -> Result<RiccatiTable>
where
    B: CylindricalBessel + ?Sized,
{
    riccati(bessel, BesselKind::FirstKind, rho, nmax)
}

/// Riccati-Bessel function of the third kind ξ_n and its derivative
///
/// Uses the outgoing Hankel function H^(1). The argument is complex even for
/// real size parameters; see [`to_complex`].
pub fn riccati_third<B>(bessel: &B, rho: &[Complex64], nmax: usize) -> Result<RiccatiTable>
where
    B: CylindricalBessel + ?Sized,
{
    riccati(bessel, BesselKind::HankelFirst, rho, nmax)
}

/// Promote a real argument vector to the complex domain
pub fn to_complex(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
}

fn riccati<B>(bessel: &B, kind: BesselKind, rho: &[Complex64], nmax: usize) -> Result<RiccatiTable>
where
    B: CylindricalBessel + ?Sized,
{
    if rho.is_empty() {
        return Err(MieError::InvalidInput(
            "Riccati-Bessel argument vector is empty".to_string(),
        ));
    }
    if nmax == 0 {
        return Err(MieError::InvalidInput(
            "truncation order must be at least 1".to_string(),
        ));
    }

    // Orders 1/2 ..= nmax + 1/2, i.e. n = 0..=nmax
    let mut scaled = bessel.table(kind, 0.5, rho, nmax + 1)?;
    for (mut row, &r) in scaled.rows_mut().into_iter().zip(rho) {
        let prefactor = (PI * r / 2.0).sqrt();
        row.mapv_inplace(|c| prefactor * c);
    }

    let values = scaled.slice(s![.., 1..]).to_owned();
    let derivatives = Array2::from_shape_fn((rho.len(), nmax), |(i, k)| {
        let n = (k + 1) as f64;
        scaled[(i, k)] - n * scaled[(i, k + 1)] / rho[i]
    });

    Ok(RiccatiTable {
        values,
        derivatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bessel::AmosBessel;
    use approx::assert_relative_eq;

    // ψ_1(ρ) = sin ρ/ρ - cos ρ, ψ_1'(ρ) = sin ρ - ψ_1(ρ)/ρ
    fn psi_1(rho: Complex64) -> (Complex64, Complex64) {
        let psi = rho.sin() / rho - rho.cos();
        (psi, rho.sin() - psi / rho)
    }

    // ξ_1(ρ) = (-i/ρ - 1)·e^{iρ}
    fn xi_1(rho: Complex64) -> Complex64 {
        let i = Complex64::i();
        (-i / rho - 1.0) * (i * rho).exp()
    }

    #[test]
    fn test_first_kind_order_one() {
        let rho = vec![Complex64::new(0.8, 0.0), Complex64::new(2.5, 0.3)];
        let table = riccati_first(&AmosBessel, &rho, 3).unwrap();
        assert_eq!(table.values.dim(), (2, 3));
        assert_eq!(table.derivatives.dim(), (2, 3));

        for (i, &r) in rho.iter().enumerate() {
            let (psi, dpsi) = psi_1(r);
            assert_relative_eq!(table.values[(i, 0)].re, psi.re, epsilon = 1e-12);
            assert_relative_eq!(table.values[(i, 0)].im, psi.im, epsilon = 1e-12);
            assert_relative_eq!(table.derivatives[(i, 0)].re, dpsi.re, epsilon = 1e-12);
            assert_relative_eq!(table.derivatives[(i, 0)].im, dpsi.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_third_kind_order_one() {
        let rho = to_complex(&[1.3]);
        let table = riccati_third(&AmosBessel, &rho, 2).unwrap();
        let expected = xi_1(rho[0]);
        assert_relative_eq!(table.values[(0, 0)].re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(table.values[(0, 0)].im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_real_part_of_xi_is_psi() {
        let rho = to_complex(&[1.7, 6.0]);
        let psi = riccati_first(&AmosBessel, &rho, 4).unwrap();
        let xi = riccati_third(&AmosBessel, &rho, 4).unwrap();
        for i in 0..2 {
            for k in 0..4 {
                let scale = psi.values[(i, k)].norm();
                assert!((xi.values[(i, k)].re - psi.values[(i, k)].re).abs() / scale < 1e-9);
                let dscale = psi.derivatives[(i, k)].norm();
                assert!(
                    (xi.derivatives[(i, k)].re - psi.derivatives[(i, k)].re).abs() / dscale
                        < 1e-9
                );
            }
        }
    }

    #[test]
    fn test_rejects_empty_and_zero_order() {
        assert!(matches!(
            riccati_first(&AmosBessel, &[], 4),
            Err(MieError::InvalidInput(_))
        ));
        assert!(matches!(
            riccati_first(&AmosBessel, &to_complex(&[1.0]), 0),
            Err(MieError::InvalidInput(_))
        ));
    }
}
