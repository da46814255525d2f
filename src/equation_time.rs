//! # Equation of time
//!
//! Difference between apparent and mean solar time, Meeus 28.3:
//!
//! ```text
//! E = L0 − 0.0057183° − α + Δψ·cos ε
//! ```
//!
//! where `L0` is the Sun's mean longitude, `α` its apparent right ascension, `Δψ` the nutation
//! in longitude and `ε` the true obliquity, all from the high accuracy models.
use crate::constants::{Accuracy, Degree, JulianEphemerisDay};
use crate::earth_orientation::{nutation_in_longitude, true_obliquity};
use crate::meeus_errors::MeeusError;
use crate::numeric::{arcsec_to_deg, cosd, millennia_since_j2000, polynomial, reduce_angle};
use crate::sun::sun_apparent_equatorial_coordinates;

/// Equation of time in degrees, reduced to `[0, 360)`.
///
/// Negative values (apparent Sun behind the mean Sun) therefore come out just below 360°;
/// see [`equation_of_time_minutes`] for the signed value.
pub fn equation_of_time(jde: JulianEphemerisDay) -> Result<Degree, MeeusError> {
    let tau = millennia_since_j2000(jde);
    let l0 = polynomial(
        &[
            280.4664567,
            360007.6982779,
            0.03032028,
            1.0 / 49931.0,
            -1.0 / 15300.0,
            -1.0 / 2000000.0,
        ],
        tau,
    );

    let alpha = sun_apparent_equatorial_coordinates(jde, Accuracy::High)?.lon;
    let dpsi = arcsec_to_deg(nutation_in_longitude(jde, Accuracy::High));
    let epsilon = arcsec_to_deg(true_obliquity(jde, Accuracy::High)?);

    Ok(reduce_angle(
        l0 - 0.0057183 - alpha + dpsi * cosd(epsilon),
        360.0,
    ))
}

/// Signed equation of time in minutes of time (1° = 4 min).
pub fn equation_of_time_minutes(jde: JulianEphemerisDay) -> Result<f64, MeeusError> {
    let e = equation_of_time(jde)?;
    let signed = if e > 180.0 { e - 360.0 } else { e };
    Ok(signed * 4.0)
}
