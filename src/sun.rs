//! # Geocentric position of the Sun
//!
//! Two independent theories:
//! - **Low accuracy** (Meeus ch. 25, 0.01°): geometric mean longitude, mean anomaly and
//!   equation of the centre, see [`sun_parameters`].
//! - **High accuracy**: the Sun is seen from the Earth, so its geocentric ecliptic position is
//!   the heliocentric VSOP87D position of the Earth turned by 180°, in the FK5 frame.
//!
//! Apparent positions add the nutation in longitude and the annual aberration.
use crate::constants::{Accuracy, ArcSec, AstronomicalUnit, Degree, JulianEphemerisDay};
use crate::earth_orientation::{mean_obliquity, nutation_in_longitude, true_obliquity};
use crate::meeus_errors::MeeusError;
use crate::numeric::{
    arcsec_to_deg, centuries_since_j2000, cosd, millennia_since_j2000, polynomial, reduce_angle,
    sind,
};
use crate::ref_system::{ecliptic_to_equatorial, Frame, SphericalCoordinates};
use crate::vsop87::{corrected_coordinates, Planet};

/// Low accuracy solar elements at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunParameters {
    /// True geometric longitude ☉, degrees, not reduced
    pub true_longitude: Degree,
    /// True anomaly ν, degrees, not reduced
    pub true_anomaly: Degree,
    /// Earth–Sun distance
    pub radius: AstronomicalUnit,
}

/// Solar elements from the low accuracy theory (Meeus 25.2 – 25.5).
pub fn sun_parameters(jde: JulianEphemerisDay) -> SunParameters {
    let t = centuries_since_j2000(jde);

    let l0 = polynomial(&[280.46646, 36000.76983, 0.0003032], t);
    let m = polynomial(&[357.52911, 35999.05029, -0.0001537], t);
    let e = polynomial(&[0.016708634, -0.000042037, -0.0000001267], t);

    let center = polynomial(&[1.914602, -0.004817, -0.000014], t) * sind(m)
        + (0.019993 - 0.000101 * t) * sind(2.0 * m)
        + 0.000289 * sind(3.0 * m);

    let true_anomaly = m + center;
    SunParameters {
        true_longitude: l0 + center,
        true_anomaly,
        radius: 1.000001018 * (1.0 - e * e) / (1.0 + e * cosd(true_anomaly)),
    }
}

// -------------------------------------------------------------------------------------------------
// Variation of the Sun's longitude, Meeus 25.11
// (amplitude ″, phase °, rate °/millennium), one table per power of τ
// -------------------------------------------------------------------------------------------------

const ABERRATION_TAU0: [[f64; 3]; 14] = [
    [118.568, 87.5287, 359993.7286],
    [2.476, 85.0561, 719987.4571],
    [1.376, 27.8502, 4452671.1152],
    [0.119, 73.1375, 450368.8564],
    [0.114, 337.2264, 329644.6718],
    [0.086, 222.5400, 659289.3436],
    [0.078, 162.8136, 9224659.7915],
    [0.054, 82.5823, 1079981.1857],
    [0.052, 171.5189, 225184.4282],
    [0.034, 30.3214, 4092677.3866],
    [0.033, 119.8105, 337181.4711],
    [0.023, 247.5418, 299295.6151],
    [0.023, 325.1526, 315559.5560],
    [0.021, 155.1241, 675553.2846],
];

const ABERRATION_TAU1: [[f64; 3]; 3] = [
    [7.311, 333.4515, 359993.7286],
    [0.305, 330.9814, 719987.4571],
    [0.010, 328.5170, 1079981.1857],
];

const ABERRATION_TAU2: [[f64; 3]; 3] = [
    [0.309, 241.4518, 359993.7286],
    [0.021, 205.0482, 719987.4571],
    [0.004, 297.8610, 4452671.1152],
];

const ABERRATION_TAU3: [[f64; 3]; 1] = [[0.010, 154.7066, 359993.7286]];

fn periodic_sum(rows: &[[f64; 3]], tau: f64) -> f64 {
    rows.iter().map(|&[a, b, c]| a * sind(b + c * tau)).sum()
}

/// Correction for annual aberration of the Sun's longitude, in arcseconds.
///
/// Arguments
/// ---------
/// * `jde`: instant in dynamical time.
/// * `radius`: Earth–Sun distance in AU.
/// * `accuracy`: [`Accuracy::High`] evaluates the daily variation of the longitude
///   `Δλ` (Meeus 25.11) and returns `−0.005775518·R·Δλ`; [`Accuracy::Low`] returns
///   `−20.4898″ / R` (Meeus 25.10).
pub fn aberration_correction(
    jde: JulianEphemerisDay,
    radius: AstronomicalUnit,
    accuracy: Accuracy,
) -> ArcSec {
    match accuracy {
        Accuracy::Low => -20.4898 / radius,
        Accuracy::High => {
            let tau = millennia_since_j2000(jde);
            let variation = polynomial(
                &[
                    3548.193 + periodic_sum(&ABERRATION_TAU0, tau),
                    periodic_sum(&ABERRATION_TAU1, tau),
                    periodic_sum(&ABERRATION_TAU2, tau),
                    periodic_sum(&ABERRATION_TAU3, tau),
                ],
                tau,
            );
            -0.005775518 * radius * variation
        }
    }
}

/// Geometric ecliptic coordinates of the Sun, FK5 frame, mean equinox of date.
///
/// Longitude in `[0, 360)`, latitude in degrees, distance in AU.
pub fn sun_mean_ecliptic_coordinates(jde: JulianEphemerisDay) -> SphericalCoordinates {
    let earth = corrected_coordinates(jde, Planet::Earth);
    SphericalCoordinates::new(
        reduce_angle(earth.lon + 180.0, 360.0),
        -earth.lat,
        earth.distance,
        Frame::EclipticOfDate,
    )
}

/// Apparent ecliptic coordinates of the Sun: the geometric position corrected for nutation
/// and aberration, both from the full series.
pub fn sun_apparent_ecliptic_coordinates(jde: JulianEphemerisDay) -> SphericalCoordinates {
    let mean = sun_mean_ecliptic_coordinates(jde);
    let correction = nutation_in_longitude(jde, Accuracy::High)
        + aberration_correction(jde, mean.distance, Accuracy::High);
    SphericalCoordinates {
        lon: reduce_angle(mean.lon + arcsec_to_deg(correction), 360.0),
        ..mean
    }
}

/// Mean geocentric equatorial coordinates of the Sun.
///
/// Arguments
/// ---------
/// * `jde`: instant in dynamical time.
/// * `accuracy`: [`Accuracy::Low`] projects the true longitude of [`sun_parameters`] with the
///   IAU mean obliquity; [`Accuracy::High`] projects [`sun_mean_ecliptic_coordinates`] with the
///   Laskar mean obliquity.
///
/// Returns
/// --------
/// * Right ascension in `[0, 360)`, declination, distance; or the obliquity range error.
pub fn sun_mean_equatorial_coordinates(
    jde: JulianEphemerisDay,
    accuracy: Accuracy,
) -> Result<SphericalCoordinates, MeeusError> {
    let epsilon = arcsec_to_deg(mean_obliquity(jde, accuracy)?);
    let ecliptic = match accuracy {
        Accuracy::Low => {
            let params = sun_parameters(jde);
            SphericalCoordinates::new(
                params.true_longitude,
                0.0,
                params.radius,
                Frame::EclipticOfDate,
            )
        }
        Accuracy::High => sun_mean_ecliptic_coordinates(jde),
    };
    Ok(ecliptic_to_equatorial(&ecliptic, epsilon))
}

/// Apparent geocentric equatorial coordinates of the Sun.
///
/// Arguments
/// ---------
/// * `jde`: instant in dynamical time.
/// * `accuracy`:
///   - [`Accuracy::Low`]: Meeus 25.8 and 25.6, the apparent longitude
///     `☉ − 0.00569° − 0.00478°·sin Ω` and the obliquity corrected by `+0.00256°·cos Ω`.
///   - [`Accuracy::High`]: [`sun_apparent_ecliptic_coordinates`] with the true obliquity.
///
/// Returns
/// --------
/// * Right ascension in `[0, 360)`, declination, distance; or the obliquity range error.
///
/// See also
/// ------------
/// * [`sun_mean_equatorial_coordinates`]
/// * [`crate::equation_time::equation_of_time`] – built on the high accuracy branch.
pub fn sun_apparent_equatorial_coordinates(
    jde: JulianEphemerisDay,
    accuracy: Accuracy,
) -> Result<SphericalCoordinates, MeeusError> {
    match accuracy {
        Accuracy::Low => {
            let params = sun_parameters(jde);
            let omega = 125.04 - 1934.136 * centuries_since_j2000(jde);
            let lambda = params.true_longitude - 0.00569 - 0.00478 * sind(omega);
            let epsilon =
                arcsec_to_deg(mean_obliquity(jde, Accuracy::Low)?) + 0.00256 * cosd(omega);
            let ecliptic =
                SphericalCoordinates::new(lambda, 0.0, params.radius, Frame::EclipticOfDate);
            Ok(ecliptic_to_equatorial(&ecliptic, epsilon))
        }
        Accuracy::High => {
            let epsilon = arcsec_to_deg(true_obliquity(jde, Accuracy::High)?);
            Ok(ecliptic_to_equatorial(
                &sun_apparent_ecliptic_coordinates(jde),
                epsilon,
            ))
        }
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// 1992-10-13 0h TD, Meeus examples 25.a and 25.b
    const JDE_25: f64 = 2448908.5;

    #[test]
    fn test_sun_parameters() {
        let p = sun_parameters(JDE_25);
        assert_abs_diff_eq!(reduce_angle(p.true_longitude, 360.0), 199.90988, epsilon = 1e-5);
        assert_abs_diff_eq!(p.radius, 0.99766, epsilon = 1e-5);
    }

    #[test]
    fn test_low_accuracy_apparent_position() {
        let sun = sun_apparent_equatorial_coordinates(JDE_25, Accuracy::Low).unwrap();
        assert_eq!(sun.frame, Frame::Equatorial);
        assert_abs_diff_eq!(sun.lon, 198.38083, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.lat, -7.78507, epsilon = 1e-5);
    }

    #[test]
    fn test_high_accuracy_ecliptic_position() {
        let mean = sun_mean_ecliptic_coordinates(JDE_25);
        assert_abs_diff_eq!(mean.lon, 199.907347, epsilon = 1e-5);
        assert_abs_diff_eq!(mean.distance, 0.99760775, epsilon = 1e-6);

        let apparent = sun_apparent_ecliptic_coordinates(JDE_25);
        assert_abs_diff_eq!(apparent.lon, 199.906063, epsilon = 1e-5);
        assert_abs_diff_eq!(apparent.lat, 0.0002, epsilon = 1e-4);
    }

    #[test]
    fn test_high_accuracy_apparent_position() {
        let sun = sun_apparent_equatorial_coordinates(JDE_25, Accuracy::High).unwrap();
        assert_abs_diff_eq!(sun.lon, 198.378121, epsilon = 1e-4);
        assert_abs_diff_eq!(sun.lat, -7.783817, epsilon = 1e-4);
    }

    #[test]
    fn test_both_theories_agree() {
        for jde in [2415020.5, 2440000.5, JDE_25, 2460000.5, 2470000.5] {
            let low = sun_apparent_equatorial_coordinates(jde, Accuracy::Low).unwrap();
            let high = sun_apparent_equatorial_coordinates(jde, Accuracy::High).unwrap();
            assert_abs_diff_eq!(low.lon, high.lon, epsilon = 0.01);
            assert_abs_diff_eq!(low.lat, high.lat, epsilon = 0.01);

            let low = sun_mean_equatorial_coordinates(jde, Accuracy::Low).unwrap();
            let high = sun_mean_equatorial_coordinates(jde, Accuracy::High).unwrap();
            assert_abs_diff_eq!(low.lon, high.lon, epsilon = 0.01);
            assert_abs_diff_eq!(low.lat, high.lat, epsilon = 0.01);
        }
    }

    #[test]
    fn test_aberration() {
        assert_abs_diff_eq!(
            aberration_correction(JDE_25, 1.0, Accuracy::Low),
            -20.4898,
            epsilon = 1e-12
        );
        let high = aberration_correction(JDE_25, 0.99760775, Accuracy::High);
        let low = aberration_correction(JDE_25, 0.99760775, Accuracy::Low);
        assert_abs_diff_eq!(high, low, epsilon = 0.5);
    }

    #[test]
    fn test_obliquity_range_is_propagated() {
        let far = crate::constants::J2000 + 150.0 * 36525.0;
        assert!(matches!(
            sun_apparent_equatorial_coordinates(far, Accuracy::High),
            Err(MeeusError::OutOfRange(_))
        ));
        assert!(sun_apparent_equatorial_coordinates(far, Accuracy::Low).is_ok());
    }
}
