/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use mie_rs::materials::{
    by_name, DielectricFunction, DrudeMetal, MaterialError, TabulatedDielectric,
};
use num_complex::Complex64;
use rstest::rstest;

fn gold_table() -> TabulatedDielectric {
    // Johnson & Christy gold, coarse sampling
    TabulatedDielectric::new(
        "Au",
        vec![400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0],
        vec![-1.66, -1.95, -2.83, -5.42, -9.64, -14.05, -18.47],
        vec![5.29, 4.01, 3.07, 2.26, 1.66, 1.36, 1.18],
    )
    .unwrap()
}

#[test]
fn test_tabulated_interpolation() {
    let gold = gold_table();
    let eps = gold.permittivity(525.0).unwrap();
    assert_relative_eq!(eps.re, (-2.83 - 5.42) / 2.0, epsilon = 1e-12);
    assert_relative_eq!(eps.im, (3.07 + 2.26) / 2.0, epsilon = 1e-12);

    let node = gold.permittivity(600.0).unwrap();
    assert_relative_eq!(node.re, -9.64, epsilon = 1e-12);
}

#[rstest]
#[case(399.0)]
#[case(700.5)]
fn test_tabulated_out_of_range(#[case] wavelength: f64) {
    let gold = gold_table();
    match gold.permittivity(wavelength) {
        Err(MaterialError::OutOfRange { min, max, .. }) => {
            assert_eq!(min, 400.0);
            assert_eq!(max, 700.0);
        }
        other => panic!("expected out-of-range error, got {:?}", other),
    }
}

#[test]
fn test_permittivities_keep_order() {
    let gold = gold_table();
    let eps = gold.permittivities(&[650.0, 400.0]).unwrap();
    assert_eq!(eps.len(), 2);
    assert_relative_eq!(eps[0].re, -14.05, epsilon = 1e-12);
    assert_relative_eq!(eps[1].re, -1.66, epsilon = 1e-12);

    assert!(gold.permittivities(&[500.0, 900.0]).is_err());
}

#[test]
fn test_refractive_index_squares_to_permittivity() {
    let silver = DrudeMetal::silver();
    let n = silver.refractive_index(450.0).unwrap();
    let eps = silver.permittivity(450.0).unwrap();
    assert!((n * n - eps).norm() < 1e-12);
    assert!(n.im > 0.0);
}

#[test]
fn test_from_rows_matches_new() {
    let rows = [
        (400.0, Complex64::new(-1.66, 5.29)),
        (450.0, Complex64::new(-1.95, 4.01)),
    ];
    let table = TabulatedDielectric::from_rows("Au", &rows).unwrap();
    assert_eq!(table.wavelength_range(), (400.0, 450.0));
    assert_relative_eq!(table.permittivity(425.0).unwrap().im, 4.65, epsilon = 1e-12);
}

#[rstest]
#[case("gold")]
#[case("AG")]
#[case("water")]
#[case("sio2")]
fn test_builtin_materials(#[case] name: &str) {
    let material = by_name(name).unwrap();
    assert!(material.permittivity(550.0).unwrap().norm() > 0.0);
}
