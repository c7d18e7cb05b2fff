/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mathematical utility functions
//!
//! Complex division, grid generation and table interpolation.

use super::errors::{Result, UtilsError};
use num_complex::Complex64;

/// Complex division using Smith's scaling
///
/// Avoids the intermediate overflow of the textbook formula
/// (a+bi)(c-di)/(c²+d²) when |c| or |d| is very large or very small.
/// A zero denominator yields NaN/inf components.
///
/// # Arguments
///
/// * `numerator` - Dividend
/// * `denominator` - Divisor
///
/// # Returns
///
/// numerator / denominator
pub fn complex_div(numerator: Complex64, denominator: Complex64) -> Complex64 {
    let (a, b) = (numerator.re, numerator.im);
    let (c, d) = (denominator.re, denominator.im);

    if c.abs() >= d.abs() {
        let r = d / c;
        let t = c + d * r;
        Complex64::new((a + b * r) / t, (b - a * r) / t)
    } else {
        let r = c / d;
        let t = c * r + d;
        Complex64::new((a * r + b) / t, (b * r - a) / t)
    }
}

/// Evenly spaced points over a closed interval
///
/// # Arguments
///
/// * `start` - First point
/// * `stop` - Last point
/// * `points` - Number of points; a single point returns `[start]`
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Linear interpolation between two points
pub fn linear_interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() < 1e-12 {
        return y0;
    }

    let t = (x - x0) / (x1 - x0);
    y0 * (1.0 - t) + y1 * t
}

/// Linear interpolation on a tabulated function
///
/// # Arguments
///
/// * `x` - The x-coordinate at which to interpolate
/// * `x_values` - Array of x coordinates (must be sorted in ascending order)
/// * `y_values` - Array of corresponding y coordinates
///
/// # Returns
///
/// The interpolated value, or an error when the table is malformed or `x`
/// lies outside it
pub fn interpolate_table(x: f64, x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    if x_values.len() != y_values.len() {
        return Err(UtilsError::Generic(
            "x_values and y_values must have the same length".to_string(),
        ));
    }

    let (first, last) = match (x_values.first(), x_values.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return Err(UtilsError::Generic(
                "Empty arrays provided for interpolation".to_string(),
            ))
        }
    };

    if x < first || x > last {
        return Err(UtilsError::Math(format!(
            "{} is outside the table range [{}, {}]",
            x, first, last
        )));
    }

    if x_values.len() == 1 {
        return Ok(y_values[0]);
    }

    // First index whose abscissa is >= x, clamped so idx - 1 stays valid
    let idx = x_values
        .partition_point(|&value| value < x)
        .clamp(1, x_values.len() - 1);

    Ok(linear_interpolate(
        x,
        x_values[idx - 1],
        y_values[idx - 1],
        x_values[idx],
        y_values[idx],
    ))
}
