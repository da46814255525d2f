//! # Observer sites
//!
//! A geographic location on the Earth and the topocentric quantities computed for it.
//!
//! Longitudes are stored **east positive**, the geodetic convention. The formulae of the
//! coordinate transforms count longitudes positive **west** of Greenwich; the conversion is
//! done by [`Observer::west_longitude`].
use serde::{Deserialize, Serialize};

use crate::constants::{Accuracy, Degree, JulianDay};
use crate::dynamical::jd_to_jde;
use crate::meeus_errors::MeeusError;
use crate::numeric::reduce_angle;
use crate::ref_system::{equatorial_to_horizontal, local_hour_angle, SphericalCoordinates};
use crate::refraction::{refraction_true_to_apparent, ZenithCorrection};
use crate::sidereal::SiderealKind;
use crate::sun::sun_apparent_equatorial_coordinates;
use crate::time::{current_julian_day, Clock};

/// A site on the Earth's surface.
///
/// Units
/// -----
/// * `longitude`: degrees, east positive, in `(-180, 180]` after construction.
/// * `latitude`: degrees, north positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub longitude: Degree,
    pub latitude: Degree,
    pub name: Option<String>,
}

impl Observer {
    /// Create an observer from its geographic coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `longitude`: degrees east of Greenwich, any finite value (wrapped into `(-180, 180]`).
    /// * `latitude`: degrees in `[-90, 90]`.
    /// * `name`: optional site name.
    ///
    /// Errors
    /// ----------
    /// * [`MeeusError::OutOfRange`] for a non-finite longitude or a latitude outside `[-90, 90]`.
    pub fn new(
        longitude: Degree,
        latitude: Degree,
        name: Option<String>,
    ) -> Result<Observer, MeeusError> {
        if !longitude.is_finite() {
            return Err(MeeusError::OutOfRange(format!("longitude {longitude}")));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(MeeusError::OutOfRange(format!("latitude {latitude}")));
        }
        let wrapped = reduce_angle(longitude, 360.0);
        Ok(Observer {
            longitude: if wrapped > 180.0 { wrapped - 360.0 } else { wrapped },
            latitude,
            name,
        })
    }

    /// Longitude counted positive west of Greenwich.
    pub fn west_longitude(&self) -> Degree {
        -self.longitude
    }

    /// Local hour angle of a body of right ascension `right_ascension` (degrees).
    pub fn hour_angle(
        &self,
        jd: JulianDay,
        right_ascension: Degree,
        kind: SiderealKind,
    ) -> Result<Degree, MeeusError> {
        local_hour_angle(jd, self.west_longitude(), right_ascension, kind)
    }

    /// Position of the Sun in the observer's sky, as it would be measured.
    ///
    /// The apparent geocentric equatorial position of the Sun is evaluated at `jd_to_jde(jd)`,
    /// turned into a local hour angle with the apparent sidereal time, projected on the local
    /// horizon, and the altitude is finally raised by the atmospheric refraction
    /// (zenith corrected Sæmundsson formula).
    ///
    /// Arguments
    /// ---------
    /// * `jd`: instant in Universal Time.
    /// * `accuracy`: solar theory; [`Accuracy::Low`] is well below the refraction uncertainty.
    ///
    /// Returns
    /// --------
    /// * Horizontal coordinates: azimuth from south in `[0, 360)`, refracted altitude.
    pub fn sun_position(
        &self,
        jd: JulianDay,
        accuracy: Accuracy,
    ) -> Result<SphericalCoordinates, MeeusError> {
        let sun = sun_apparent_equatorial_coordinates(jd_to_jde(jd), accuracy)?;
        let h = self.hour_angle(jd, sun.lon, SiderealKind::Apparent)?;
        let mut horizontal = equatorial_to_horizontal(h, sun.lat, self.latitude);
        horizontal.lat +=
            refraction_true_to_apparent(horizontal.lat, ZenithCorrection::Corrected) / 60.0;
        Ok(horizontal)
    }

    /// [`Observer::sun_position`] at the instant reported by `clock`.
    pub fn sun_position_now(
        &self,
        clock: &impl Clock,
        accuracy: Accuracy,
    ) -> Result<SphericalCoordinates, MeeusError> {
        self.sun_position(current_julian_day(clock)?, accuracy)
    }
}

#[cfg(test)]
mod observers_test {
    use super::*;
    use crate::ref_system::Frame;
    use crate::time::{CalendarDate, FixedClock};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_observer() {
        let o = Observer::new(-77.065415, 38.921389, Some("Washington".into())).unwrap();
        assert_abs_diff_eq!(o.west_longitude(), 77.065415, epsilon = 1e-12);

        let o = Observer::new(270.0, 0.0, None).unwrap();
        assert_abs_diff_eq!(o.longitude, -90.0, epsilon = 1e-12);

        assert!(Observer::new(0.0, 91.0, None).is_err());
        assert!(Observer::new(f64::NAN, 0.0, None).is_err());
        assert!(Observer::new(0.0, f64::NAN, None).is_err());
    }

    #[test]
    fn test_hour_angle_matches_meeus_13b() {
        // Meeus example 13.b: Venus from the US Naval Observatory, 1987-04-10 19:21 UT
        let longitude = -crate::numeric::hms_to_deg(5.0, 8.0, 15.7);
        let o = Observer::new(longitude, 38.921389, None).unwrap();
        let h = o
            .hour_angle(
                2446896.30625,
                crate::numeric::hms_to_deg(23.0, 9.0, 16.641),
                SiderealKind::Apparent,
            )
            .unwrap();
        assert_abs_diff_eq!(h, 64.352133, epsilon = 1e-5);
    }

    #[test]
    fn test_sun_at_noon_on_solstice() {
        // Greenwich, 2000-06-21 12:00 UT
        let greenwich = Observer::new(0.0, 51.4769, Some("Greenwich".into())).unwrap();
        let noon = CalendarDate::new(2000, 6, 21, 12, 0, 0.0).unwrap();
        let sun = greenwich
            .sun_position_now(&FixedClock(noon), Accuracy::High)
            .unwrap();
        assert_eq!(sun.frame, Frame::Horizontal);
        assert_abs_diff_eq!(sun.lat, 90.0 - 51.4769 + 23.439, epsilon = 0.05);
        assert!(sun.lon.min(360.0 - sun.lon) < 2.0, "azimuth {}", sun.lon);
    }

    #[test]
    fn test_refraction_lifts_the_sun() {
        let o = Observer::new(2.35, 48.85, None).unwrap();
        let jd = 2451545.0;
        let low = o.sun_position(jd, Accuracy::Low).unwrap();
        let high = o.sun_position(jd, Accuracy::High).unwrap();
        assert_abs_diff_eq!(low.lat, high.lat, epsilon = 0.02);
        assert_abs_diff_eq!(low.lon, high.lon, epsilon = 0.05);
    }
}
