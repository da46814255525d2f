//! # Sidereal time at Greenwich
//!
//! Mean and apparent sidereal time, expressed in **seconds of time** in `[0, 86400)`.
use serde::{Deserialize, Serialize};

use crate::constants::{Accuracy, JulianDay, TimeSecond, SECONDS_PER_DAY};
use crate::dynamical::jd_to_jde;
use crate::earth_orientation::{nutation_in_longitude, true_obliquity};
use crate::meeus_errors::MeeusError;
use crate::numeric::{
    arcsec_to_deg, centuries_since_j2000, cosd, deg_to_time_seconds, hms_to_seconds, polynomial,
    reduce_angle,
};

/// Which sidereal time to use when turning a right ascension into an hour angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiderealKind {
    /// Referred to the mean equinox of date
    Mean,
    /// Referred to the true equinox of date (corrected for nutation)
    Apparent,
}

/// Meeus 12.2, valid at 0h UT only.
fn mean_sidereal_time_0h(jd: JulianDay) -> TimeSecond {
    let t = centuries_since_j2000(jd);
    reduce_angle(
        polynomial(
            &[
                hms_to_seconds(6.0, 41.0, 50.54841),
                8640184.812866,
                0.093104,
                -0.0000062,
            ],
            t,
        ),
        SECONDS_PER_DAY,
    )
}

/// Meeus 12.4, valid for any instant. Degrees.
fn mean_sidereal_time_any(jd: JulianDay) -> f64 {
    let t = centuries_since_j2000(jd);
    reduce_angle(
        280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * t * t
            - t * t * t / 38_710_000.0,
        360.0,
    )
}

/// Mean sidereal time at Greenwich, in seconds of time.
///
/// The 0h UT expression is used when the Julian Day falls exactly on midnight
/// (`jd − ⌊jd⌋ == 0.5`), the general expression otherwise.
pub fn mean_sidereal_time(jd: JulianDay) -> TimeSecond {
    if jd - jd.trunc() == 0.5 {
        mean_sidereal_time_0h(jd)
    } else {
        deg_to_time_seconds(mean_sidereal_time_any(jd))
    }
}

/// Apparent sidereal time at Greenwich, in seconds of time.
///
/// Arguments
/// ---------
/// * `jd`: instant in Universal Time.
///
/// Returns
/// --------
/// * Mean sidereal time plus the equation of the equinoxes `Δψ·cos ε / 15`, where the nutation
///   and the true obliquity are evaluated in dynamical time at `jd_to_jde(jd)`.
/// * [`MeeusError::OutOfRange`] when the obliquity model is outside its validity window.
pub fn apparent_sidereal_time(jd: JulianDay) -> Result<TimeSecond, MeeusError> {
    let jde = jd_to_jde(jd);
    let dpsi = nutation_in_longitude(jde, Accuracy::High);
    let epsilon = true_obliquity(jde, Accuracy::High)?;
    let correction = dpsi * cosd(arcsec_to_deg(epsilon)) / 15.0;
    Ok(reduce_angle(
        mean_sidereal_time(jd) + correction,
        SECONDS_PER_DAY,
    ))
}

/// Mean or apparent sidereal time depending on `kind`.
pub fn sidereal_time(jd: JulianDay, kind: SiderealKind) -> Result<TimeSecond, MeeusError> {
    match kind {
        SiderealKind::Mean => Ok(mean_sidereal_time(jd)),
        SiderealKind::Apparent => apparent_sidereal_time(jd),
    }
}

#[cfg(test)]
mod sidereal_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_sidereal_time_at_0h() {
        // Meeus example 12.a, 1987-04-10 0h UT
        let theta = mean_sidereal_time(2446895.5);
        assert_abs_diff_eq!(theta, hms_to_seconds(13.0, 10.0, 46.3668), epsilon = 1e-4);
    }

    #[test]
    fn test_apparent_sidereal_time_at_0h() {
        let theta = apparent_sidereal_time(2446895.5).unwrap();
        assert_abs_diff_eq!(theta, hms_to_seconds(13.0, 10.0, 46.1351), epsilon = 1e-3);
    }

    #[test]
    fn test_sidereal_time_any_instant() {
        // Meeus example 12.b, 1987-04-10 19:21:00 UT
        let jd = 2446896.30625;
        assert_abs_diff_eq!(
            sidereal_time(jd, SiderealKind::Mean).unwrap(),
            hms_to_seconds(8.0, 34.0, 57.0896),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            sidereal_time(jd, SiderealKind::Apparent).unwrap(),
            hms_to_seconds(8.0, 34.0, 56.853),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_both_expressions_agree() {
        // at midnight the general expression matches 12.2
        let jd = 2446895.5;
        let general = deg_to_time_seconds(mean_sidereal_time_any(jd));
        assert_abs_diff_eq!(general, mean_sidereal_time(jd), epsilon = 1e-3);
    }
}
