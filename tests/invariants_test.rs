//! Properties that must hold over the whole input domain, checked on seeded random samples.
mod common;

use approx::assert_abs_diff_eq;
use meeus::constants::{Accuracy, GREGORIAN_START_JD, J2000, JULIAN_CENTURY};
use meeus::dynamical::{delta_t, jd_to_jde, jde_to_jd};
use meeus::equinox::{equinoxes_and_solstices, Season};
use meeus::kepler::eccentric_anomaly;
use meeus::numeric::reduce_angle;
use meeus::ref_system::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
    horizontal_to_equatorial, Frame, SphericalCoordinates,
};
use meeus::sidereal::{apparent_sidereal_time, mean_sidereal_time};
use meeus::sun::sun_apparent_ecliptic_coordinates;
use meeus::time::{date_to_julian_day, julian_day_to_date, CalendarDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{angular_separation_deg, date, signed_difference_deg};

const SAMPLES: usize = 2_000;

#[test]
fn test_calendar_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..SAMPLES {
        let (year, month, day) = (
            rng.random_range(-4000..4000),
            rng.random_range(1..=12),
            rng.random_range(1..=28),
        );
        let Ok(d) = CalendarDate::new(
            year,
            month,
            day,
            rng.random_range(0..24),
            rng.random_range(0..60),
            rng.random_range(0.0..60.0),
        ) else {
            assert_eq!((year, month), (1582, 10), "{year}-{month}-{day} rejected");
            assert!((5..=14).contains(&day));
            continue;
        };
        let jd = date_to_julian_day(&d).unwrap();
        let back = julian_day_to_date(jd).unwrap();

        assert_eq!(
            (back.year(), back.month(), back.day()),
            (d.year(), d.month(), d.day()),
            "{d} -> {jd} -> {back}"
        );
        assert_abs_diff_eq!(back.fractional_day(), d.fractional_day(), epsilon = 1e-8);
        assert_abs_diff_eq!(date_to_julian_day(&back).unwrap(), jd, epsilon = 1e-8);
    }
}

#[test]
fn test_calendar_reform_is_contiguous() {
    let last_julian = date_to_julian_day(&date(1582, 10, 4, 0, 0, 0.0)).unwrap();
    let first_gregorian = date_to_julian_day(&date(1582, 10, 15, 0, 0, 0.0)).unwrap();
    assert_eq!(first_gregorian, GREGORIAN_START_JD);
    assert_eq!(first_gregorian - last_julian, 1.0);

    let back = julian_day_to_date(GREGORIAN_START_JD - 0.5).unwrap();
    assert_eq!((back.month(), back.day(), back.hour()), (10, 4, 12));
}

#[test]
fn test_reduce_angle_range() {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    for _ in 0..SAMPLES {
        let x = rng.random_range(-1e7..1e7);
        for modulus in [360.0, 86_400.0, std::f64::consts::TAU] {
            let r = reduce_angle(x, modulus);
            assert!((0.0..modulus).contains(&r), "{x} mod {modulus} = {r}");
        }
    }
}

#[test]
fn test_kepler_residual() {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    for _ in 0..SAMPLES {
        let m = rng.random_range(-720.0..720.0);
        let e = rng.random_range(0.0..0.99);

        let big_e = eccentric_anomaly(m, e).to_radians();
        let m_back = (big_e - e * big_e.sin()).to_degrees();
        assert!(
            angular_separation_deg(m_back, m) < 1e-6,
            "M = {m}, e = {e}, E = {}",
            big_e.to_degrees()
        );
    }
}

#[test]
fn test_rotations_are_inverse() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let lon = rng.random_range(0.0..360.0);
        let lat = rng.random_range(-89.0..89.0);
        let eps = rng.random_range(22.0..24.5);

        let ecl = SphericalCoordinates::new(lon, lat, 1.0, Frame::EclipticOfDate);
        let back = equatorial_to_ecliptic(&ecliptic_to_equatorial(&ecl, eps), eps);
        assert!(angular_separation_deg(back.lon, lon) < 1e-9);
        assert_abs_diff_eq!(back.lat, lat, epsilon = 1e-9);

        let phi = rng.random_range(-89.0..89.0);
        let hor = equatorial_to_horizontal(lon, lat, phi);
        assert!((0.0..360.0).contains(&hor.lon));
        let (h, delta) = horizontal_to_equatorial(&hor, phi);
        assert!(angular_separation_deg(h, lon) < 1e-9);
        assert_abs_diff_eq!(delta, lat, epsilon = 1e-9);
    }
}

#[test]
fn test_dynamical_time_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let jd = rng.random_range(0.0..J2000 + 10.0 * JULIAN_CENTURY);
        let jde = jd_to_jde(jd);
        assert!(delta_t(jde).is_finite());
        // first-order inverse: within a few seconds across the ΔT segment joins
        assert_abs_diff_eq!(jde_to_jd(jde), jd, epsilon = 1e-4);
    }
}

#[test]
fn test_equation_of_the_equinoxes_is_small() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..200 {
        let jd = rng.random_range(J2000 - 50.0 * JULIAN_CENTURY..J2000 + 50.0 * JULIAN_CENTURY);
        let mean = mean_sidereal_time(jd);
        let apparent = apparent_sidereal_time(jd).unwrap();
        assert!((0.0..86_400.0).contains(&apparent));

        let mut diff = (apparent - mean).abs();
        diff = diff.min(86_400.0 - diff);
        assert!(diff < 1.3, "JD {jd}: {diff} s");
    }
}

#[test]
fn test_seasons_are_ordered() {
    let mut rng = StdRng::seed_from_u64(1962);
    for _ in 0..20 {
        let year = rng.random_range(-1000..3000);
        let events = equinoxes_and_solstices(year, Accuracy::High).unwrap();

        for pair in Season::ALL.windows(2) {
            let gap = events.get(pair[1]) - events.get(pair[0]);
            assert!((87.0..96.0).contains(&gap), "{year}: {pair:?} {gap} days");
        }
        let sun = sun_apparent_ecliptic_coordinates(events.september_equinox);
        assert!(signed_difference_deg(sun.lon, 180.0).abs() < 1e-4);
    }
}
