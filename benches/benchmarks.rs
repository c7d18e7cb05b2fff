/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mie_rs::bessel::AmosBessel;
use mie_rs::materials::{DielectricFunction, DrudeMetal};
use mie_rs::mie::riccati::{riccati_first, riccati_third, to_complex};
use mie_rs::mie::{cross_sections, MieOptions};
use mie_rs::utils::linspace;

fn riccati_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Riccati-Bessel");
    let rho = to_complex(&linspace(0.1, 10.0, 200));

    group.bench_function("riccati_first_200x20", |b| {
        b.iter(|| riccati_first(&AmosBessel, black_box(&rho), 20).unwrap())
    });

    group.bench_function("riccati_third_200x20", |b| {
        b.iter(|| riccati_third(&AmosBessel, black_box(&rho), 20).unwrap())
    });

    group.finish();
}

fn spectrum_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mie Spectrum");
    let gold = DrudeMetal::gold();
    let wavelengths = linspace(400.0, 800.0, 401);
    let epsilon = gold.permittivities(&wavelengths).unwrap();
    let options = MieOptions::in_medium(1.33);

    for radius in [10.0, 50.0, 200.0] {
        group.bench_function(format!("gold_r{}nm_401pts", radius), |b| {
            b.iter(|| {
                cross_sections(
                    black_box(&wavelengths),
                    black_box(&epsilon),
                    radius,
                    &options,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, riccati_benchmark, spectrum_benchmark);
criterion_main!(benches);
