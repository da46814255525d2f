//! # Dynamical time
//!
//! ΔT = TD − UT, from the Espenak & Meeus piecewise polynomials (NASA Five Millennium Canon of
//! Solar Eclipses, §2.7), and the JD ↔ JDE conversions built on it.
//!
//! The polynomial is chosen from the calendar year of the instant and evaluated on the decimal
//! year `y = year + (month − 0.5) / 12`. Outside the tabulated span the boundary parabola
//! `−20 + 32·u²` extrapolates; no input is rejected.
use crate::constants::{JulianDay, JulianEphemerisDay, TimeSecond, SECONDS_PER_DAY};
use crate::numeric::polynomial;
use crate::time::calendar_parts;

/// Long-term parabola, `u` in centuries from 1820.
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds of time at the given instant.
///
/// Arguments
/// ---------
/// * `jde`: day number used to pick the calendar year. Either a JD or a JDE may be passed,
///   the difference is negligible at this level.
///
/// Returns
/// --------
/// * ΔT in seconds.
pub fn delta_t(jde: JulianEphemerisDay) -> TimeSecond {
    let (year, month, _) = calendar_parts(jde);
    let y = year as f64 + (month as f64 - 0.5) / 12.0;

    match year {
        i64::MIN..=-501 => long_term(y),
        -500..=499 => polynomial(
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
            y / 100.0,
        ),
        500..=1599 => polynomial(
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
            (y - 1000.0) / 100.0,
        ),
        1600..=1699 => polynomial(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], y - 1600.0),
        1700..=1799 => polynomial(
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
            y - 1700.0,
        ),
        1800..=1859 => polynomial(
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
            y - 1800.0,
        ),
        1860..=1899 => polynomial(
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
            y - 1860.0,
        ),
        1900..=1919 => polynomial(
            &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
            y - 1900.0,
        ),
        1920..=1940 => polynomial(&[21.2, 0.84493, -0.0761, 0.0020936], y - 1920.0),
        1941..=1960 => polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], y - 1950.0),
        1961..=1985 => polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], y - 1975.0),
        1986..=2004 => polynomial(
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
            y - 2000.0,
        ),
        2005..=2049 => polynomial(&[62.92, 0.32217, 0.005589], y - 2000.0),
        2050..=2149 => long_term(y) - 0.5628 * (2150.0 - y),
        _ => long_term(y),
    }
}

/// Universal Time → dynamical time: `JDE = JD + ΔT / 86400`.
pub fn jd_to_jde(jd: JulianDay) -> JulianEphemerisDay {
    jd + delta_t(jd) / SECONDS_PER_DAY
}

/// Dynamical time → Universal Time: `JD = JDE − ΔT / 86400`.
///
/// ΔT is evaluated at the JDE itself, a first-order approximation of the inverse of
/// [`jd_to_jde`].
pub fn jde_to_jd(jde: JulianEphemerisDay) -> JulianDay {
    jde - delta_t(jde) / SECONDS_PER_DAY
}

#[cfg(test)]
mod dynamical_test {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_delta_t_worked_examples() {
        // 1977-02-18 03:37:40 TD
        assert_abs_diff_eq!(delta_t(2443192.651), 47.687, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_t(J2000), 63.874, epsilon = 1e-3);
    }

    #[test]
    fn test_delta_t_extrapolation() {
        assert_abs_diff_eq!(delta_t(0.0), 136512.7, epsilon = 0.1);
        // 2100-01-01
        assert_abs_diff_eq!(delta_t(2488069.5), 202.84, epsilon = 0.01);
        // 2200-01-01
        assert_abs_diff_eq!(delta_t(2524593.5), 442.18, epsilon = 0.01);
        assert!(delta_t(-1e6).is_finite());
    }

    #[test]
    fn test_delta_t_piecewise_continuity() {
        // neighbouring polynomials agree to a few seconds at the interval edges
        for year in [1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1961.0, 1986.0, 2005.0] {
            let jd = J2000 + (year - 2000.0) * 365.25;
            let before = delta_t(jd - 20.0);
            let after = delta_t(jd + 20.0);
            assert!((before - after).abs() < 5.0, "jump at {year}: {before} vs {after}");
        }
    }

    #[test]
    fn test_jd_jde_conversion() {
        let jde = jd_to_jde(J2000);
        assert_abs_diff_eq!((jde - J2000) * SECONDS_PER_DAY, 63.874, epsilon = 1e-3);
        assert_abs_diff_eq!(jde_to_jd(jde), J2000, epsilon = 1e-9);
    }
}
