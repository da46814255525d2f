//! # Equinoxes and solstices
//!
//! Instants (JDE) at which the apparent geocentric longitude of the Sun is a multiple of 90°
//! (Meeus ch. 27).
//!
//! 1. A mean instant is read from one of two sets of quartic polynomials, in `year / 1000` for
//!    years before 1000 and in `(year − 2000) / 1000` otherwise.
//! 2. It is then corrected:
//!    - [`Accuracy::Low`]: the 24 periodic terms of table 27.C (about a minute),
//!    - [`Accuracy::High`]: fixed-point refinement `JDE += 58·sin(target − λ☉)` on the apparent
//!      longitude of the Sun, bounded by [`EquinoxParams`].
//!
//! Running out of iterations is reported as [`MeeusError::NonConvergence`].
use std::cmp::Ordering::Greater;

use itertools::{FoldWhile, Itertools};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{Accuracy, Degree, JulianEphemerisDay, SECONDS_PER_DAY};
use crate::meeus_errors::MeeusError;
use crate::numeric::{centuries_since_j2000, cosd, polynomial, sind};
use crate::sun::sun_apparent_ecliptic_coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::MarchEquinox,
        Season::JuneSolstice,
        Season::SeptemberEquinox,
        Season::DecemberSolstice,
    ];

    /// Apparent solar longitude reached at the event.
    pub fn target_longitude(self) -> Degree {
        match self {
            Season::MarchEquinox => 0.0,
            Season::JuneSolstice => 90.0,
            Season::SeptemberEquinox => 180.0,
            Season::DecemberSolstice => 270.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The four events of one year, as JDE.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquinoxesSolstices {
    pub march_equinox: JulianEphemerisDay,
    pub june_solstice: JulianEphemerisDay,
    pub september_equinox: JulianEphemerisDay,
    pub december_solstice: JulianEphemerisDay,
}

impl EquinoxesSolstices {
    fn from_array([march, june, september, december]: [JulianEphemerisDay; 4]) -> Self {
        EquinoxesSolstices {
            march_equinox: march,
            june_solstice: june,
            september_equinox: september,
            december_solstice: december,
        }
    }

    pub fn get(&self, season: Season) -> JulianEphemerisDay {
        match season {
            Season::MarchEquinox => self.march_equinox,
            Season::JuneSolstice => self.june_solstice,
            Season::SeptemberEquinox => self.september_equinox,
            Season::DecemberSolstice => self.december_solstice,
        }
    }
}

/// Settings of the high accuracy refinement.
///
/// Defaults
/// --------
/// * `max_iterations`: 20
/// * `tolerance_days`: 0.5 s of time (`1 / 172800` day)
///
/// Use [`EquinoxParams::builder`] to change them; the builder rejects a zero iteration budget
/// and a tolerance that is not strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquinoxParams {
    pub max_iterations: usize,
    pub tolerance_days: f64,
}

impl EquinoxParams {
    pub fn builder() -> EquinoxParamsBuilder {
        EquinoxParamsBuilder::new()
    }
}

impl Default for EquinoxParams {
    fn default() -> Self {
        EquinoxParams {
            max_iterations: 20,
            tolerance_days: 0.5 / SECONDS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EquinoxParamsBuilder {
    params: EquinoxParams,
}

impl Default for EquinoxParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EquinoxParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: EquinoxParams::default(),
        }
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }

    pub fn tolerance_days(mut self, v: f64) -> Self {
        self.params.tolerance_days = v;
        self
    }

    /// Tolerance given in seconds of time.
    pub fn tolerance_seconds(mut self, v: f64) -> Self {
        self.params.tolerance_days = v / SECONDS_PER_DAY;
        self
    }

    pub fn build(self) -> Result<EquinoxParams, MeeusError> {
        let p = &self.params;
        if p.max_iterations == 0 {
            return Err(MeeusError::InvalidParameter(
                "max_iterations must be >= 1".into(),
            ));
        }
        if p.tolerance_days.partial_cmp(&0.0) != Some(Greater) || !p.tolerance_days.is_finite() {
            return Err(MeeusError::InvalidParameter(
                "tolerance_days must be finite and > 0".into(),
            ));
        }
        Ok(self.params)
    }
}

// -------------------------------------------------------------------------------------------------
// Mean instants, Meeus tables 27.A and 27.B
// -------------------------------------------------------------------------------------------------

const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1721139.29189, 365242.13740, 0.06134, 0.00111, -0.00071],
    [1721233.25401, 365241.72562, -0.05323, 0.00907, 0.00025],
    [1721325.70455, 365242.49558, -0.11677, -0.00297, 0.00074],
    [1721414.39987, 365242.88257, -0.00769, -0.00933, -0.00006],
];

const MEAN_FROM_1000: [[f64; 5]; 4] = [
    [2451623.80984, 365242.37404, 0.05169, -0.00411, -0.00057],
    [2451716.56767, 365241.62603, 0.00325, 0.00888, -0.00030],
    [2451810.21715, 365242.01767, -0.11575, 0.00337, 0.00078],
    [2451900.05952, 365242.74049, -0.06223, -0.00823, 0.00032],
];

// -------------------------------------------------------------------------------------------------
// Periodic terms, Meeus table 27.C (A, B °, C °/century)
// -------------------------------------------------------------------------------------------------

const PERIODIC_TERMS: [[f64; 3]; 24] = [
    [485.0, 324.96, 1934.136],
    [203.0, 337.23, 32964.467],
    [199.0, 342.08, 20.186],
    [182.0, 27.85, 445267.112],
    [156.0, 73.14, 45036.886],
    [136.0, 171.52, 22518.443],
    [77.0, 222.54, 65928.934],
    [74.0, 296.72, 3034.906],
    [70.0, 243.58, 9037.513],
    [58.0, 119.81, 33718.147],
    [52.0, 297.17, 150.678],
    [50.0, 21.02, 2281.226],
    [45.0, 247.54, 29929.562],
    [44.0, 325.15, 31555.956],
    [29.0, 60.93, 4443.417],
    [18.0, 155.12, 67555.328],
    [17.0, 288.79, 4562.452],
    [16.0, 198.04, 62894.029],
    [14.0, 199.76, 31436.921],
    [12.0, 95.39, 14577.848],
    [12.0, 287.11, 31931.756],
    [12.0, 320.81, 34777.259],
    [9.0, 227.73, 1222.114],
    [8.0, 15.45, 16859.074],
];

/// Mean instants (JDE) of the four events of `year`, before any periodic correction.
pub fn mean_equinox_solstice(year: i32) -> EquinoxesSolstices {
    let (table, y) = if year < 1000 {
        (&MEAN_BEFORE_1000, year as f64 / 1000.0)
    } else {
        (&MEAN_FROM_1000, (year as f64 - 2000.0) / 1000.0)
    };
    EquinoxesSolstices::from_array(Season::ALL.map(|s| polynomial(&table[s.index()], y)))
}

/// Table 27.C correction of a mean instant.
fn periodic_correction(mean_jde: JulianEphemerisDay) -> JulianEphemerisDay {
    let t = centuries_since_j2000(mean_jde);
    let w = 35999.373 * t - 2.47;
    let dl = 1.0 + 0.0334 * cosd(w) + 0.0007 * cosd(2.0 * w);
    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&[a, b, c]| a * cosd(b + c * t))
        .sum();
    mean_jde + 0.00001 * s / dl
}

/// Refine a first guess until the Sun reaches the target longitude of `season`.
///
/// Arguments
/// ---------
/// * `jde`: first guess.
/// * `season`: event being searched for.
/// * `params`: iteration budget and tolerance.
///
/// Returns
/// --------
/// * The refined JDE, or [`MeeusError::NonConvergence`] with the last correction applied.
pub fn refine_event(
    jde: JulianEphemerisDay,
    season: Season,
    params: &EquinoxParams,
) -> Result<JulianEphemerisDay, MeeusError> {
    let target = season.target_longitude();

    let (jde, correction, iterations) = (1..=params.max_iterations)
        .fold_while((jde, f64::INFINITY, 0), |(jde, _, _), iteration| {
            let lambda = sun_apparent_ecliptic_coordinates(jde).lon;
            let correction = 58.0 * sind(target - lambda);
            trace!("{season:?} step {iteration}: JDE {jde:.6} λ {lambda:.6}° Δ {correction:.3e} d");

            let state = (jde + correction, correction, iteration);
            if correction.abs() < params.tolerance_days {
                FoldWhile::Done(state)
            } else {
                FoldWhile::Continue(state)
            }
        })
        .into_inner();

    if correction.abs() < params.tolerance_days {
        debug!("{season:?} converged to JDE {jde:.6} after {iterations} iterations");
        Ok(jde)
    } else {
        warn!("{season:?} stopped after {iterations} iterations, last correction {correction:e} d");
        Err(MeeusError::NonConvergence {
            iterations,
            residual: correction.abs(),
        })
    }
}

/// Instants of the equinoxes and solstices of `year` with the default [`EquinoxParams`].
///
/// See also
/// ------------
/// * [`equinoxes_and_solstices_with_params`]
/// * [`mean_equinox_solstice`]
pub fn equinoxes_and_solstices(
    year: i32,
    accuracy: Accuracy,
) -> Result<EquinoxesSolstices, MeeusError> {
    equinoxes_and_solstices_with_params(year, accuracy, &EquinoxParams::default())
}

/// Instants (JDE) of the equinoxes and solstices of `year`.
///
/// Arguments
/// ---------
/// * `year`: astronomical year.
/// * `accuracy`: [`Accuracy::Low`] applies the periodic terms of table 27.C to the mean
///   instants; [`Accuracy::High`] refines them on the apparent longitude of the Sun.
/// * `params`: iteration settings, only read on the high accuracy path.
///
/// Returns
/// --------
/// * The four instants, or [`MeeusError::NonConvergence`] from the first event that could not
///   be refined.
pub fn equinoxes_and_solstices_with_params(
    year: i32,
    accuracy: Accuracy,
    params: &EquinoxParams,
) -> Result<EquinoxesSolstices, MeeusError> {
    let mean = mean_equinox_solstice(year);
    let [march, june, september, december] = Season::ALL.map(|season| match accuracy {
        Accuracy::Low => Ok(periodic_correction(mean.get(season))),
        Accuracy::High => refine_event(mean.get(season), season, params),
    });
    Ok(EquinoxesSolstices::from_array([
        march?,
        june?,
        september?,
        december?,
    ]))
}

#[cfg(test)]
mod equinox_test {
    use super::*;
    use crate::numeric::reduce_angle;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_instants() {
        // Meeus example 27.a
        let mean = mean_equinox_solstice(1962);
        assert_abs_diff_eq!(mean.june_solstice, 2437837.38589, epsilon = 1e-5);

        let mean = mean_equinox_solstice(2000);
        assert_eq!(mean.march_equinox, 2451623.80984);
        assert_eq!(mean.december_solstice, 2451900.05952);
    }

    #[test]
    fn test_low_accuracy() {
        let events = equinoxes_and_solstices(1962, Accuracy::Low).unwrap();
        assert_abs_diff_eq!(events.june_solstice, 2437837.39245, epsilon = 1e-5);
    }

    #[test]
    fn test_high_accuracy() {
        let events = equinoxes_and_solstices(1962, Accuracy::High).unwrap();
        assert_abs_diff_eq!(events.june_solstice, 2437837.392131, epsilon = 1e-5);

        let low = equinoxes_and_solstices(1962, Accuracy::Low).unwrap();
        for season in Season::ALL {
            // the periodic terms are good to about a minute
            assert_abs_diff_eq!(events.get(season), low.get(season), epsilon = 0.002);
        }
    }

    #[test]
    fn test_sun_reaches_target_longitude() {
        for year in [-1000, 500, 2000, 3000] {
            let events = equinoxes_and_solstices(year, Accuracy::High).unwrap();
            for season in Season::ALL {
                let lambda = sun_apparent_ecliptic_coordinates(events.get(season)).lon;
                let offset =
                    reduce_angle(lambda - season.target_longitude() + 180.0, 360.0) - 180.0;
                assert!(offset.abs() < 1e-4, "{year} {season:?}: λ = {lambda}");
            }
        }
    }

    #[test]
    fn test_december_solstice_before_1000() {
        let mean = mean_equinox_solstice(500);
        assert_abs_diff_eq!(mean.december_solstice, 1904035.8380625, epsilon = 1e-6);
        let events = equinoxes_and_solstices(500, Accuracy::High).unwrap();
        assert_abs_diff_eq!(events.december_solstice, 1904035.83405, epsilon = 1e-4);
    }

    #[test]
    fn test_june_solstice_before_1000() {
        let mean = mean_equinox_solstice(999);
        assert_abs_diff_eq!(mean.june_solstice, 2086109.69407, epsilon = 1e-5);

        // the year 1000 boundary switches tables, both agree to within a few minutes
        let before = mean_equinox_solstice(999).june_solstice + 365.2422;
        assert_abs_diff_eq!(before, mean_equinox_solstice(1000).june_solstice, epsilon = 0.01);
    }

    #[test]
    fn test_iteration_budget() {
        let params = EquinoxParams::builder().max_iterations(1).build().unwrap();
        let err = equinoxes_and_solstices_with_params(1962, Accuracy::High, &params).unwrap_err();
        match err {
            MeeusError::NonConvergence {
                iterations,
                residual,
            } => {
                assert_eq!(iterations, 1);
                assert!(residual > params.tolerance_days);
            }
            other => panic!("unexpected error {other:?}"),
        }

        // the low accuracy path ignores the budget
        assert!(equinoxes_and_solstices_with_params(1962, Accuracy::Low, &params).is_ok());
    }

    #[test]
    fn test_params_builder() {
        let p = EquinoxParams::builder()
            .max_iterations(5)
            .tolerance_seconds(1.0)
            .build()
            .unwrap();
        assert_eq!(p.max_iterations, 5);
        assert_abs_diff_eq!(p.tolerance_days, 1.0 / 86400.0, epsilon = 1e-15);

        assert_eq!(EquinoxParams::builder().build().unwrap(), EquinoxParams::default());
        assert!(matches!(
            EquinoxParams::builder().max_iterations(0).build(),
            Err(MeeusError::InvalidParameter(_))
        ));
        assert!(EquinoxParams::builder().tolerance_days(0.0).build().is_err());
        assert!(EquinoxParams::builder().tolerance_days(-1.0).build().is_err());
        assert!(EquinoxParams::builder().tolerance_days(f64::NAN).build().is_err());
        assert!(EquinoxParams::builder()
            .tolerance_days(f64::INFINITY)
            .build()
            .is_err());
    }
}
