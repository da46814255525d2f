//! # Numeric kernel
//!
//! Polynomial evaluation, time scaling, range reduction and the unit conversions shared by
//! every other module. All functions here are total: they have no error path.
//!
//! Angles follow the book conventions: degrees unless stated otherwise, sidereal time and
//! hour angles in **seconds of time** (1 s = 15″).

use crate::constants::{
    ArcSec, Degree, JulianDay, TimeSecond, ARCSEC_PER_DEGREE, J2000, JULIAN_CENTURY, RADEG,
    SECONDS_OF_TIME_PER_DEGREE,
};

/// Evaluate `Σ coefficients[i]·x^i` using Horner's scheme.
///
/// Arguments
/// ---------
/// * `coefficients`: ordered from the constant term up to the highest degree.
/// * `x`: the polynomial variable.
///
/// Returns
/// --------
/// * The polynomial value, `0.0` for an empty coefficient slice.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| acc * x + coefficient)
}

/// Julian centuries elapsed since J2000.0: `(jd − 2451545.0) / 36525`.
pub fn centuries_since_j2000(jd: JulianDay) -> f64 {
    (jd - J2000) / JULIAN_CENTURY
}

/// Julian millennia elapsed since J2000.0, the `τ` variable of VSOP87.
pub fn millennia_since_j2000(jd: JulianDay) -> f64 {
    centuries_since_j2000(jd) / 10.0
}

/// Floored modulo: the result always lies in `[0, modulus)`, negative inputs included.
///
/// ```
/// use meeus::numeric::reduce_angle;
/// assert_eq!(reduce_angle(-30.0, 360.0), 330.0);
/// assert_eq!(reduce_angle(725.0, 360.0), 5.0);
/// ```
pub fn reduce_angle(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    // rem_euclid may round up to the modulus itself for tiny negative inputs
    if r >= modulus {
        0.0
    } else {
        r
    }
}

// -------------------------------------------------------------------------------------------------
// Trigonometry in degrees
// -------------------------------------------------------------------------------------------------

#[inline]
pub fn sind(x: Degree) -> f64 {
    (x * RADEG).sin()
}

#[inline]
pub fn cosd(x: Degree) -> f64 {
    (x * RADEG).cos()
}

#[inline]
pub fn tand(x: Degree) -> f64 {
    (x * RADEG).tan()
}

#[inline]
pub fn atan2d(y: f64, x: f64) -> Degree {
    y.atan2(x).to_degrees()
}

#[inline]
pub fn asind(x: f64) -> Degree {
    x.asin().to_degrees()
}

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Hours, minutes, seconds → seconds of time.
pub fn hms_to_seconds(hours: f64, minutes: f64, seconds: f64) -> TimeSecond {
    hours * 3600.0 + minutes * 60.0 + seconds
}

/// Hours, minutes, seconds → degrees (1h = 15°).
pub fn hms_to_deg(hours: f64, minutes: f64, seconds: f64) -> Degree {
    hms_to_seconds(hours, minutes, seconds) / SECONDS_OF_TIME_PER_DEGREE
}

/// Degrees, arcminutes, arcseconds → degrees.
///
/// For negative angles every component must carry the sign, e.g. `dms_to_deg(-6.0, -43.0, -11.61)`.
pub fn dms_to_deg(degrees: f64, minutes: f64, seconds: f64) -> Degree {
    degrees + minutes / 60.0 + seconds / ARCSEC_PER_DEGREE
}

/// Degrees, arcminutes, arcseconds → arcseconds.
pub fn dms_to_arcsec(degrees: f64, minutes: f64, seconds: f64) -> ArcSec {
    degrees * ARCSEC_PER_DEGREE + minutes * 60.0 + seconds
}

pub fn deg_to_arcsec(degrees: Degree) -> ArcSec {
    degrees * ARCSEC_PER_DEGREE
}

pub fn arcsec_to_deg(arcsec: ArcSec) -> Degree {
    arcsec / ARCSEC_PER_DEGREE
}

pub fn deg_to_time_seconds(degrees: Degree) -> TimeSecond {
    degrees * SECONDS_OF_TIME_PER_DEGREE
}

pub fn time_seconds_to_deg(seconds: TimeSecond) -> Degree {
    seconds / SECONDS_OF_TIME_PER_DEGREE
}

pub fn arcsec_to_time_seconds(arcsec: ArcSec) -> TimeSecond {
    arcsec / 15.0
}

pub fn time_seconds_to_arcsec(seconds: TimeSecond) -> ArcSec {
    seconds * 15.0
}

/// Split a count of seconds into `(hours, minutes, seconds)`.
///
/// The same split turns arcseconds into `(degrees, arcminutes, arcseconds)`.
/// Components keep the sign of the input.
pub fn seconds_to_hms(seconds: f64) -> (i64, i64, f64) {
    let h = (seconds / 3600.0).trunc() as i64;
    let m = ((seconds % 3600.0) / 60.0).trunc() as i64;
    (h, m, seconds % 60.0)
}

/// Round `value` to `digits` decimal places.
pub fn fround(value: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (value * m).round() / m
}

#[cfg(test)]
mod numeric_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 3.0), 0.0);
        assert_eq!(polynomial(&[2.0], 3.0), 2.0);
        // 1 + 2x + 3x² at x = 2
        assert_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }

    #[test]
    fn test_centuries() {
        assert_eq!(centuries_since_j2000(J2000), 0.0);
        assert_eq!(centuries_since_j2000(J2000 + JULIAN_CENTURY), 1.0);
        assert_eq!(millennia_since_j2000(J2000 - 10.0 * JULIAN_CENTURY), -1.0);
    }

    #[test]
    fn test_reduce_angle() {
        assert_eq!(reduce_angle(0.0, 360.0), 0.0);
        assert_eq!(reduce_angle(360.0, 360.0), 0.0);
        assert_eq!(reduce_angle(-360.0, 360.0), 0.0);
        assert_eq!(reduce_angle(-1.0, 360.0), 359.0);
        assert_eq!(reduce_angle(86_401.0, 86_400.0), 1.0);
        let r = reduce_angle(-1e-18, 360.0);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(hms_to_deg(23.0, 9.0, 16.641), 347.3193375, epsilon = 1e-10);
        assert_relative_eq!(hms_to_deg(5.0, 8.0, 15.7), 77.065416666, epsilon = 1e-8);
        assert_relative_eq!(
            dms_to_deg(-6.0, -43.0, -11.61),
            -6.719891666,
            epsilon = 1e-8
        );
        assert_relative_eq!(dms_to_arcsec(23.0, 26.0, 21.448), 84381.448, epsilon = 1e-9);
        assert_eq!(arcsec_to_deg(deg_to_arcsec(12.5)), 12.5);
        assert_eq!(deg_to_time_seconds(15.0), 3600.0);
        assert_eq!(time_seconds_to_deg(3600.0), 15.0);
        assert_eq!(arcsec_to_time_seconds(15.0), 1.0);
        assert_eq!(time_seconds_to_arcsec(1.0), 15.0);
    }

    #[test]
    fn test_seconds_to_hms() {
        let (h, m, s) = seconds_to_hms(hms_to_seconds(13.0, 10.0, 46.3668));
        assert_eq!((h, m), (13, 10));
        assert_relative_eq!(s, 46.3668, epsilon = 1e-9);

        let (d, m, s) = seconds_to_hms(84381.448);
        assert_eq!((d, m), (23, 26));
        assert_relative_eq!(s, 21.448, epsilon = 1e-9);
    }

    #[test]
    fn test_fround() {
        assert_eq!(fround(2436116.3118055, 2), 2436116.31);
        assert_eq!(fround(-3.78793, 3), -3.788);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert_relative_eq!(sind(30.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(cosd(60.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(tand(45.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(atan2d(1.0, 1.0), 45.0, epsilon = 1e-12);
        assert_relative_eq!(asind(0.5), 30.0, epsilon = 1e-12);
    }
}
