use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::constants::{Degree, DPI};
use crate::numeric::reduce_angle;

/// Number of halvings of the bisection step, enough to exhaust `f64` precision.
const BISECTION_STEPS: usize = 40;

/// Solve Kepler's equation `M = E − e·sin E` for the eccentric anomaly.
///
/// Uses the binary search of R. Sinnott (Sky & Telescope, 1985), Meeus 30.3: the mean anomaly
/// is folded into `[0°, 180°]`, then a fixed number of steps moves `E` towards the side where
/// `E − e·sin E` matches `M`, halving the step each time.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: `M` in degrees, any value.
/// * `eccentricity`: `e` in `[0, 1)`.
///
/// Returns
/// --------
/// * `E` in degrees. When `M mod 360 > 180°` the result is returned negative, in `[−180°, 0°)`,
///   rather than reduced to `[0°, 360°)`.
///
/// Remarks
/// -------
/// * Runs in constant time and never fails. Accuracy is about 1e-12 rad for every `e < 1`,
///   including the near-parabolic orbits where Newton iterations struggle.
pub fn eccentric_anomaly(mean_anomaly: Degree, eccentricity: f64) -> Degree {
    let mut m = reduce_angle(mean_anomaly, 360.0).to_radians();
    let sign = if m > PI {
        m = DPI - m;
        -1.0
    } else {
        1.0
    };

    let mut e0 = FRAC_PI_2;
    let mut step = FRAC_PI_4;
    for _ in 0..BISECTION_STEPS {
        let m1 = e0 - eccentricity * e0.sin();
        e0 += step.copysign(m - m1);
        step /= 2.0;
    }
    (e0 * sign).to_degrees()
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn residual(m: Degree, e: f64) -> f64 {
        let big_e = eccentric_anomaly(m, e).to_radians();
        let m_back = (big_e - e * big_e.sin()).to_degrees();
        let diff = reduce_angle(m_back - m, 360.0);
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_meeus_example() {
        assert_abs_diff_eq!(eccentric_anomaly(5.0, 0.1), 5.554589, epsilon = 1e-6);
        assert_abs_diff_eq!(eccentric_anomaly(5.0, 0.1), 5.5545892538, epsilon = 1e-9);
    }

    #[test]
    fn test_circular_orbit() {
        for m in [0.0, 10.0, 90.0, 179.0] {
            assert_abs_diff_eq!(eccentric_anomaly(m, 0.0), m, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_second_half_is_negative() {
        let e = eccentric_anomaly(355.0, 0.1);
        assert!(e < 0.0);
        assert_abs_diff_eq!(e, -5.5545892538, epsilon = 1e-9);
        assert_abs_diff_eq!(eccentric_anomaly(-5.0, 0.1), e, epsilon = 1e-12);
    }

    #[test]
    fn test_high_eccentricity() {
        // Meeus example 30.b style: e = 0.99, M = 5°
        for (m, e) in [(5.0, 0.99), (0.5, 0.999), (120.0, 0.95), (270.0, 0.9)] {
            assert!(residual(m, e) < 1e-6, "M = {m}, e = {e}");
        }
    }
}
