//! # Coordinate transforms
//!
//! Conversions between the ecliptic, equatorial and horizontal frames. Every transform is a
//! single rotation of the unit direction vector, built with [`nalgebra::Rotation3`]:
//!
//! | From → To               | Axis | Angle     |
//! |-------------------------|------|-----------|
//! | ecliptic → equatorial   | x    | `+ε`      |
//! | equatorial → ecliptic   | x    | `−ε`      |
//! | hour angle → horizontal | y    | `φ − 90°` |
//! | horizontal → hour angle | y    | `90° − φ` |
//!
//! Horizontal azimuths follow the astronomical convention: measured westward from the
//! **south**. Angles are in degrees.
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, JulianDay, RADEG};
use crate::meeus_errors::MeeusError;
use crate::numeric::{reduce_angle, time_seconds_to_deg};
use crate::sidereal::{sidereal_time, SiderealKind};

/// Reference frame of a [`SphericalCoordinates`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Geocentric, ecliptic and equinox of date: (λ, β)
    EclipticOfDate,
    /// Geocentric equatorial: (α, δ)
    Equatorial,
    /// Local horizon: (azimuth from south, altitude)
    Horizontal,
    /// Heliocentric ecliptic: (L, B)
    HeliocentricEcliptic,
}

/// Two angles and a distance, tagged with the frame they are expressed in.
///
/// `lon` is the angle measured in the fundamental plane (λ, α, A or L), `lat` the angle out of
/// it (β, δ, h or B). `distance` is in AU, `0.0` when meaningless (horizontal frame).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoordinates {
    pub lon: Degree,
    pub lat: Degree,
    pub distance: AstronomicalUnit,
    pub frame: Frame,
}

impl SphericalCoordinates {
    pub fn new(lon: Degree, lat: Degree, distance: AstronomicalUnit, frame: Frame) -> Self {
        SphericalCoordinates {
            lon,
            lat,
            distance,
            frame,
        }
    }
}

fn unit_vector(lon: Degree, lat: Degree) -> Vector3<f64> {
    let (sin_lon, cos_lon) = (lon * RADEG).sin_cos();
    let (sin_lat, cos_lat) = (lat * RADEG).sin_cos();
    Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Back to `(lon ∈ [0, 360), lat ∈ [-90, 90])`.
fn spherical_angles(v: &Vector3<f64>) -> (Degree, Degree) {
    let lon = reduce_angle(v.y.atan2(v.x).to_degrees(), 360.0);
    let lat = v.z.clamp(-1.0, 1.0).asin().to_degrees();
    (lon, lat)
}

fn rotate(
    lon: Degree,
    lat: Degree,
    axis: &nalgebra::Unit<Vector3<f64>>,
    angle: Degree,
) -> (Degree, Degree) {
    let rot = Rotation3::from_axis_angle(axis, angle * RADEG);
    spherical_angles(&(rot * unit_vector(lon, lat)))
}

/// Ecliptic (λ, β) → equatorial (α, δ).
///
/// Arguments
/// ---------
/// * `ecliptic`: geocentric ecliptic coordinates, degrees.
/// * `obliquity`: obliquity of the ecliptic in degrees; use the true obliquity for apparent
///   positions and the mean one for mean positions.
///
/// Returns
/// --------
/// * Equatorial coordinates, right ascension in `[0, 360)` degrees, same distance.
pub fn ecliptic_to_equatorial(
    ecliptic: &SphericalCoordinates,
    obliquity: Degree,
) -> SphericalCoordinates {
    let (alpha, delta) = rotate(ecliptic.lon, ecliptic.lat, &Vector3::x_axis(), obliquity);
    SphericalCoordinates::new(alpha, delta, ecliptic.distance, Frame::Equatorial)
}

/// Equatorial (α, δ) → ecliptic of date (λ, β).
pub fn equatorial_to_ecliptic(
    equatorial: &SphericalCoordinates,
    obliquity: Degree,
) -> SphericalCoordinates {
    let (lambda, beta) = rotate(equatorial.lon, equatorial.lat, &Vector3::x_axis(), -obliquity);
    SphericalCoordinates::new(lambda, beta, equatorial.distance, Frame::EclipticOfDate)
}

/// Local hour angle and declination → horizontal coordinates.
///
/// Arguments
/// ---------
/// * `hour_angle`: local hour angle `H`, degrees, positive westward.
/// * `declination`: `δ`, degrees.
/// * `latitude`: observer geographic latitude `φ`, degrees.
///
/// Returns
/// --------
/// * Horizontal coordinates: azimuth from south in `[0, 360)`, altitude in degrees.
pub fn equatorial_to_horizontal(
    hour_angle: Degree,
    declination: Degree,
    latitude: Degree,
) -> SphericalCoordinates {
    let (azimuth, altitude) = rotate(hour_angle, declination, &Vector3::y_axis(), latitude - 90.0);
    SphericalCoordinates::new(azimuth, altitude, 0.0, Frame::Horizontal)
}

/// Horizontal coordinates → `(hour angle, declination)`, both in degrees.
pub fn horizontal_to_equatorial(
    horizontal: &SphericalCoordinates,
    latitude: Degree,
) -> (Degree, Degree) {
    rotate(horizontal.lon, horizontal.lat, &Vector3::y_axis(), 90.0 - latitude)
}

/// Local hour angle of a body, in `[0, 360)` degrees.
///
/// Arguments
/// ---------
/// * `jd`: instant in Universal Time.
/// * `longitude`: observer longitude in degrees, **positive west** of Greenwich.
/// * `right_ascension`: body right ascension in degrees.
/// * `kind`: pass [`SiderealKind::Apparent`] when `right_ascension` is an apparent position
///   (affected by nutation), [`SiderealKind::Mean`] otherwise.
///
/// Returns
/// --------
/// * `H = reduce(θ − L − α, 360)`, or the error raised while computing apparent sidereal time.
pub fn local_hour_angle(
    jd: JulianDay,
    longitude: Degree,
    right_ascension: Degree,
    kind: SiderealKind,
) -> Result<Degree, MeeusError> {
    let theta = time_seconds_to_deg(sidereal_time(jd, kind)?);
    Ok(reduce_angle(theta - longitude - right_ascension, 360.0))
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::numeric::{dms_to_deg, hms_to_deg};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equatorial_to_ecliptic() {
        // Meeus example 13.a, Pollux
        let pollux = SphericalCoordinates::new(116.328942, 28.026183, 0.0, Frame::Equatorial);
        let ecl = equatorial_to_ecliptic(&pollux, 23.4392911);
        assert_eq!(ecl.frame, Frame::EclipticOfDate);
        assert_abs_diff_eq!(ecl.lon, 113.215630, epsilon = 1e-6);
        assert_abs_diff_eq!(ecl.lat, 6.684170, epsilon = 1e-6);

        let back = ecliptic_to_equatorial(&ecl, 23.4392911);
        assert_abs_diff_eq!(back.lon, pollux.lon, epsilon = 1e-9);
        assert_abs_diff_eq!(back.lat, pollux.lat, epsilon = 1e-9);
    }

    #[test]
    fn test_equatorial_to_horizontal() {
        // Meeus example 13.b, Venus seen from Washington
        let hor = equatorial_to_horizontal(
            64.352133,
            dms_to_deg(-6.0, -43.0, -11.61),
            dms_to_deg(38.0, 55.0, 17.0),
        );
        assert_eq!(hor.frame, Frame::Horizontal);
        assert_abs_diff_eq!(hor.lon, 68.0337, epsilon = 1e-4);
        assert_abs_diff_eq!(hor.lat, 15.1249, epsilon = 1e-4);

        let (h, delta) = horizontal_to_equatorial(&hor, dms_to_deg(38.0, 55.0, 17.0));
        assert_abs_diff_eq!(h, 64.352133, epsilon = 1e-9);
        assert_abs_diff_eq!(delta, dms_to_deg(-6.0, -43.0, -11.61), epsilon = 1e-9);
    }

    #[test]
    fn test_zenith_and_meridian() {
        // a body on the meridian at the observer's latitude is at the zenith
        let hor = equatorial_to_horizontal(0.0, 45.0, 45.0);
        assert_abs_diff_eq!(hor.lat, 90.0, epsilon = 1e-9);

        // on the meridian south of the zenith: azimuth 0 (south)
        let hor = equatorial_to_horizontal(0.0, 10.0, 45.0);
        assert!(hor.lon.min(360.0 - hor.lon) < 1e-9);
        assert_abs_diff_eq!(hor.lat, 55.0, epsilon = 1e-9);
    }

    #[test]
    fn test_local_hour_angle() {
        // 1987-04-10 19:21:00 UT, Washington
        let jd = 2446896.30625;
        let h = local_hour_angle(
            jd,
            hms_to_deg(5.0, 8.0, 15.7),
            hms_to_deg(23.0, 9.0, 16.641),
            SiderealKind::Apparent,
        )
        .unwrap();
        assert_abs_diff_eq!(h, 64.352133, epsilon = 1e-5);

        let mean = local_hour_angle(jd, 0.0, 0.0, SiderealKind::Mean).unwrap();
        assert!((0.0..360.0).contains(&mean));
    }
}
