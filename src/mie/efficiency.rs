/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Efficiency factors and cross-sections
//!
//! Reduces the coefficient series over orders into Qext, Qsca and Qabs.

use super::errors::{MieError, Result};
use super::susceptibility::Susceptibility;
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Column holding the extinction quantity
pub const EXTINCTION: usize = 0;
/// Column holding the scattering quantity
pub const SCATTERING: usize = 1;
/// Column holding the absorption quantity
pub const ABSORPTION: usize = 2;

/// Order weights 2n + 1 for n = 1..=nmax
pub fn order_weights(nmax: usize) -> Array1<f64> {
    Array1::from_iter((1..=nmax).map(|n| (2 * n + 1) as f64))
}

/// Sum the coefficient series into efficiencies
///
/// # Arguments
///
/// * `x` - Size parameter per sample
/// * `coefficients` - Output of [`super::susceptibility::susceptibility`]
///
/// # Returns
///
/// A (samples × 3) matrix with columns [`EXTINCTION`], [`SCATTERING`] and
/// [`ABSORPTION`]. Absorption is Qext - Qsca.
pub fn efficiencies(x: &[f64], coefficients: &Susceptibility) -> Result<Array2<f64>> {
    if x.len() != coefficients.samples() {
        return Err(MieError::DimensionMismatch(format!(
            "{} size parameters for {} coefficient rows",
            x.len(),
            coefficients.samples()
        )));
    }

    let weights = order_weights(coefficients.nmax());

    let scattering_power =
        coefficients.gamma.mapv(|g| g.norm_sqr()) + coefficients.delta.mapv(|d| d.norm_sqr());
    let real_sum = coefficients.gamma.mapv(|g| g.re) + coefficients.delta.mapv(|d| d.re);

    let sca_series = scattering_power.dot(&weights);
    let ext_series = real_sum.dot(&weights);

    let mut result = Array2::zeros((x.len(), 3));
    for (i, &xi) in x.iter().enumerate() {
        let prefactor = 2.0 / (xi * xi);
        let q_sca = prefactor * sca_series[i];
        let q_ext = -prefactor * ext_series[i];
        result[(i, EXTINCTION)] = q_ext;
        result[(i, SCATTERING)] = q_sca;
        result[(i, ABSORPTION)] = q_ext - q_sca;
    }
    Ok(result)
}

/// Geometric cross-section π·r² of a sphere
pub fn geometric_cross_section(radius: f64) -> f64 {
    PI * radius * radius
}

/// Rescale efficiencies into physical cross-sections
pub fn to_cross_sections(efficiencies: &Array2<f64>, radius: f64) -> Array2<f64> {
    efficiencies * geometric_cross_section(radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bessel::AmosBessel;
    use crate::mie::susceptibility::susceptibility;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_order_weights() {
        assert_eq!(order_weights(3).to_vec(), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_absorption_is_difference() {
        let s = vec![Complex64::new(0.2, 3.1), Complex64::new(1.6, 0.02)];
        let x = [0.8, 2.4];
        let chi = susceptibility(&AmosBessel, 12, &s, &x).unwrap();
        let q = efficiencies(&x, &chi).unwrap();
        assert_eq!(q.dim(), (2, 3));
        for i in 0..2 {
            assert_eq!(q[(i, ABSORPTION)], q[(i, EXTINCTION)] - q[(i, SCATTERING)]);
        }
    }

    #[test]
    fn test_rayleigh_scattering_efficiency() {
        // Qsca ≈ (8/3)·x⁴·|(m²-1)/(m²+2)|² for x ≪ 1
        let m = Complex64::new(1.5, 0.0);
        let x = [0.01];
        let chi = susceptibility(&AmosBessel, 4, &[m], &x).unwrap();
        let q = efficiencies(&x, &chi).unwrap();
        let m2 = m * m;
        let expected = 8.0 / 3.0 * x[0].powi(4) * ((m2 - 1.0) / (m2 + 2.0)).norm_sqr();
        assert_relative_eq!(q[(0, SCATTERING)], expected, max_relative = 1e-3);
    }

    #[test]
    fn test_cross_section_scaling() {
        let q = ndarray::array![[2.0, 1.5, 0.5]];
        let c = to_cross_sections(&q, 2.0);
        assert_relative_eq!(c[(0, EXTINCTION)], 8.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(c[(0, ABSORPTION)], 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_row_count_mismatch() {
        let s = vec![Complex64::new(1.3, 0.0)];
        let chi = susceptibility(&AmosBessel, 3, &s, &[1.0]).unwrap();
        assert!(efficiencies(&[1.0, 2.0], &chi).is_err());
    }
}
