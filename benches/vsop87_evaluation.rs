use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meeus::constants::{Accuracy, J2000, JULIAN_CENTURY};
use meeus::equinox::equinoxes_and_solstices;
use meeus::sun::sun_apparent_equatorial_coordinates;
use meeus::vsop87::{heliocentric_coordinates, Planet};

fn random_epochs(rng: &mut StdRng, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|_| J2000 + rng.random_range(-20.0..20.0) * JULIAN_CENTURY)
        .collect()
}

/// One full VSOP87 evaluation per planet.
fn bench_planets(c: &mut Criterion) {
    let mut group = c.benchmark_group("vsop87/heliocentric_coordinates");
    for planet in Planet::ALL {
        let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
        group.bench_function(planet.to_string(), |b| {
            b.iter_batched(
                || random_epochs(&mut rng, 100),
                |epochs| {
                    for jde in epochs {
                        black_box(heliocentric_coordinates(black_box(jde), planet));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// Apparent Sun with both theories, to compare their cost.
fn bench_sun(c: &mut Criterion) {
    let mut group = c.benchmark_group("sun/apparent_equatorial");
    for accuracy in [Accuracy::Low, Accuracy::High] {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        group.bench_function(accuracy.to_string(), |b| {
            b.iter_batched(
                || random_epochs(&mut rng, 100),
                |epochs| {
                    for jde in epochs {
                        let _ = black_box(sun_apparent_equatorial_coordinates(jde, accuracy));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_equinoxes(c: &mut Criterion) {
    c.bench_function("equinox/high_accuracy_2024", |b| {
        b.iter(|| black_box(equinoxes_and_solstices(black_box(2024), Accuracy::High)).ok())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(30);
    targets = bench_planets, bench_sun, bench_equinoxes
);
criterion_main!(benches);
