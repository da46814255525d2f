//! # VSOP87D planetary theory
//!
//! Heliocentric ecliptic coordinates of the eight major planets, referred to the mean dynamical
//! ecliptic and equinox of date, evaluated from compiled-in periodic series.
//!
//! Each coordinate is a sum `Σ_k τ^k · S_k(τ)` where `τ` is measured in Julian millennia from
//! J2000.0 and every `S_k` is a sum of `A·cos(B + C·τ)` terms. The per-planet data modules hold
//! the series with amplitudes stored in units of 1e-8 radian (L, B) or 1e-8 AU (R). They are
//! rewritten from the raw `VSOP87D.*` files by `cargo run --example vsop87_gen`; the header of each
//! module states whether it holds the abridged or the complete series.
//!
//! ## Entry points
//! - [`heliocentric_coordinates`]: raw dynamical-frame values (radians, longitude not reduced).
//! - [`corrected_coordinates`]: same values converted to the FK5 frame, in degrees.
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, JulianEphemerisDay, Radian};
use crate::numeric::{
    arcsec_to_deg, centuries_since_j2000, cosd, millennia_since_j2000, reduce_angle, sind, tand,
};
use crate::ref_system::{Frame, SphericalCoordinates};

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

/// One periodic term `a·cos(b + c·τ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Series of one planet, indexed by coordinate then by power of `τ`.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSeries {
    pub longitude: &'static [&'static [Term]],
    pub latitude: &'static [&'static [Term]],
    pub radius: &'static [&'static [Term]],
}

const AMPLITUDE_SCALE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn series(self) -> &'static PlanetSeries {
        match self {
            Planet::Mercury => &mercury::MERCURY,
            Planet::Venus => &venus::VENUS,
            Planet::Earth => &earth::EARTH,
            Planet::Mars => &mars::MARS,
            Planet::Jupiter => &jupiter::JUPITER,
            Planet::Saturn => &saturn::SATURN,
            Planet::Uranus => &uranus::URANUS,
            Planet::Neptune => &neptune::NEPTUNE,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        };
        write!(f, "{name}")
    }
}

/// Evaluate one coordinate: `Σ_k τ^k · Σ_i a_i·cos(b_i + c_i·τ)`.
fn evaluate(series: &[&[Term]], tau: f64) -> f64 {
    let value = series
        .iter()
        .rev()
        .fold(0.0, |acc, terms| acc * tau + series_sum(terms, tau));
    value * AMPLITUDE_SCALE
}

fn series_sum(terms: &[Term], tau: f64) -> f64 {
    terms.iter().map(|t| t.a * (t.b + t.c * tau).cos()).sum()
}

/// Heliocentric coordinates of a planet in the dynamical frame of date.
///
/// Arguments
/// ---------
/// * `jde`: instant in dynamical time.
/// * `planet`: the body to evaluate.
///
/// Returns
/// --------
/// * `(L, B, R)`: longitude and latitude in radians, radius vector in AU.
///   The longitude is **not** reduced, callers wrap it when needed.
///
/// See also
/// ------------
/// * [`corrected_coordinates`] – FK5 frame, degrees.
pub fn heliocentric_coordinates(
    jde: JulianEphemerisDay,
    planet: Planet,
) -> (Radian, Radian, AstronomicalUnit) {
    let tau = millennia_since_j2000(jde);
    let series = planet.series();
    (
        evaluate(series.longitude, tau),
        evaluate(series.latitude, tau),
        evaluate(series.radius, tau),
    )
}

/// Heliocentric coordinates converted to the FK5 frame.
///
/// The longitude is reduced to `[0, 360)` degrees, the latitude is in degrees and the radius
/// vector is carried through unchanged.
pub fn corrected_coordinates(jde: JulianEphemerisDay, planet: Planet) -> SphericalCoordinates {
    let (l, b, r) = heliocentric_coordinates(jde, planet);
    let (longitude, latitude) = fk5_correction(jde, l.to_degrees(), b.to_degrees());
    SphericalCoordinates::new(longitude, latitude, r, Frame::HeliocentricEcliptic)
}

/// Convert a VSOP87 longitude/latitude pair (degrees) to FK5.
pub(crate) fn fk5_correction(jde: JulianEphemerisDay, l: f64, b: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jde);
    let lp = l - 1.397 * t - 0.00031 * t * t;
    let (sin_lp, cos_lp) = (sind(lp), cosd(lp));

    let dl = arcsec_to_deg(-0.09033 + 0.03916 * (cos_lp + sin_lp) * tand(b));
    let db = arcsec_to_deg(0.03916 * (cos_lp - sin_lp));
    (reduce_angle(l + dl, 360.0), b + db)
}
