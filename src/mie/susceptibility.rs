/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mie susceptibility coefficients
//!
//! Combines Riccati-Bessel functions at the size parameter x and at z = s·x
//! into the scattering coefficients Γ, Δ and the internal-field coefficients
//! A, B. With a_n, b_n in the Bohren & Huffman convention, Γ = -b_n and
//! Δ = -a_n.

use super::errors::{MieError, Result};
use super::riccati::{riccati_first, riccati_third, to_complex};
use crate::bessel::CylindricalBessel;
use crate::utils::math::complex_div;
use log::debug;
use ndarray::{Array2, Zip};
use num_complex::Complex64;

/// Coefficient tables, one row per sample and one column per order
#[derive(Debug, Clone)]
pub struct Susceptibility {
    /// Γ = G_num / A_den
    pub gamma: Array2<Complex64>,
    /// Δ = D_num / B_den
    pub delta: Array2<Complex64>,
    /// A = i·s / A_den
    pub a: Array2<Complex64>,
    /// B = i·s / B_den
    pub b: Array2<Complex64>,
    a_denominator: Array2<Complex64>,
    b_denominator: Array2<Complex64>,
}

impl Susceptibility {
    /// Number of samples
    pub fn samples(&self) -> usize {
        self.gamma.nrows()
    }

    /// Truncation order
    pub fn nmax(&self) -> usize {
        self.gamma.ncols()
    }

    /// Entries whose A or B denominator magnitude falls below `threshold`
    ///
    /// Returns (sample index, order) pairs, order counted from 1. Such entries
    /// sit at or near a resonance of the series and may hold inf/NaN.
    pub fn near_singular(&self, threshold: f64) -> Vec<(usize, usize)> {
        let mut hits = Vec::new();
        for ((i, k), den) in self.a_denominator.indexed_iter() {
            let other = self.b_denominator[(i, k)];
            if den.norm() < threshold || other.norm() < threshold {
                hits.push((i, k + 1));
            }
        }
        hits
    }

    /// Near-singular orders grouped by sample, in sample order
    pub fn resonant_orders(&self, threshold: f64) -> Vec<(usize, Vec<usize>)> {
        let mut grouped: Vec<(usize, Vec<usize>)> = Vec::new();
        for (sample, order) in self.near_singular(threshold) {
            match grouped.last_mut() {
                Some((last, orders)) if *last == sample => orders.push(order),
                _ => grouped.push((sample, vec![order])),
            }
        }
        grouped
    }
}

/// Replicate one value per sample across `nmax` order columns
pub fn tile_columns(values: &[Complex64], nmax: usize) -> Array2<Complex64> {
    Array2::from_shape_fn((values.len(), nmax), |(i, _)| values[i])
}

/// Assemble the Mie coefficients
///
/// # Arguments
///
/// * `bessel` - Cylindrical Bessel backend
/// * `nmax` - Truncation order
/// * `s` - Relative refractive index per sample
/// * `x` - Size parameter per sample, same length as `s`
///
/// # Returns
///
/// Γ, Δ, A and B as (samples × nmax) tables. Zero denominators propagate as
/// inf/NaN.
pub fn susceptibility<B>(
    bessel: &B,
    nmax: usize,
    s: &[Complex64],
    x: &[f64],
) -> Result<Susceptibility>
where
    B: CylindricalBessel + ?Sized,
{
    if s.len() != x.len() {
        return Err(MieError::DimensionMismatch(format!(
            "{} relative indices for {} size parameters",
            s.len(),
            x.len()
        )));
    }

    let x_complex = to_complex(x);
    let z: Vec<Complex64> = s.iter().zip(x).map(|(&si, &xi)| si * xi).collect();

    debug!("Evaluating Riccati-Bessel tables for {} samples, nmax = {}", x.len(), nmax);
    let psi_x = riccati_first(bessel, &x_complex, nmax)?;
    let xi_x = riccati_third(bessel, &x_complex, nmax)?;
    let psi_z = riccati_first(bessel, &z, nmax)?;

    let s_tile = tile_columns(s, nmax);

    let g_num = &s_tile * &psi_x.values * &psi_z.derivatives - &psi_z.values * &psi_x.derivatives;
    let d_num = &psi_x.values * &psi_z.derivatives - &s_tile * &psi_z.values * &psi_x.derivatives;
    let a_den = &psi_z.values * &xi_x.derivatives - &s_tile * &xi_x.values * &psi_z.derivatives;
    let b_den = &s_tile * &psi_z.values * &xi_x.derivatives - &xi_x.values * &psi_z.derivatives;

    let i_s = s_tile.mapv(|si| Complex64::i() * si);

    let gamma = Zip::from(&g_num)
        .and(&a_den)
        .map_collect(|&num, &den| complex_div(num, den));
    let delta = Zip::from(&d_num)
        .and(&b_den)
        .map_collect(|&num, &den| complex_div(num, den));
    let a = Zip::from(&i_s)
        .and(&a_den)
        .map_collect(|&num, &den| complex_div(num, den));
    let b = Zip::from(&i_s)
        .and(&b_den)
        .map_collect(|&num, &den| complex_div(num, den));

    Ok(Susceptibility {
        gamma,
        delta,
        a,
        b,
        a_denominator: a_den,
        b_denominator: b_den,
    })
}
