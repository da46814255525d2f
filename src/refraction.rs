//! # Atmospheric refraction
//!
//! Sæmundsson (16.4) and Bennett (16.3) formulae for a pressure of 1010 mbar and 10 °C.
//! Altitudes are in degrees, refraction is returned in **minutes of arc**.
use serde::{Deserialize, Serialize};

use crate::constants::{ArcMin, Degree};
use crate::numeric::tand;

/// Whether to shift the formulae so that refraction vanishes at the zenith.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZenithCorrection {
    /// Formula as published
    #[default]
    Uncorrected,
    /// Constant offset added so that the refraction is exactly 0 at h = 90°
    Corrected,
}

/// Refraction to **add** to a true (airless, computed) altitude to get the apparent one.
///
/// Arguments
/// ---------
/// * `altitude`: true altitude `h`, degrees.
/// * `correction`: [`ZenithCorrection::Corrected`] adds 0.0019279′.
///
/// Returns
/// --------
/// * `R = 1.02′ / tan(h + 10.3 / (h + 5.11))`, arcminutes.
pub fn refraction_true_to_apparent(altitude: Degree, correction: ZenithCorrection) -> ArcMin {
    let r = 1.02 / tand(altitude + 10.3 / (altitude + 5.11));
    match correction {
        ZenithCorrection::Uncorrected => r,
        ZenithCorrection::Corrected => r + 0.0019279,
    }
}

/// Refraction to **subtract** from an apparent (observed) altitude to get the true one.
///
/// `R = 1′ / tan(h0 + 7.31 / (h0 + 4.4))`, plus 0.0013515′ when corrected at the zenith.
pub fn refraction_apparent_to_true(altitude: Degree, correction: ZenithCorrection) -> ArcMin {
    let r = 1.0 / tand(altitude + 7.31 / (altitude + 4.4));
    match correction {
        ZenithCorrection::Uncorrected => r,
        ZenithCorrection::Corrected => r + 0.0013515,
    }
}

#[cfg(test)]
mod refraction_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_lower_limb() {
        // Meeus example 16.a: lower limb seen at 0°30′
        let r = refraction_apparent_to_true(0.5, ZenithCorrection::Uncorrected);
        assert_abs_diff_eq!(r, 28.75371, epsilon = 1e-4);
        let true_lower = 0.5 - r / 60.0;
        assert_abs_diff_eq!(true_lower * 60.0, 1.24629, epsilon = 1e-4);

        // upper limb, 32′ higher
        let r_upper = refraction_true_to_apparent(
            (true_lower * 60.0 + 32.0) / 60.0,
            ZenithCorrection::Uncorrected,
        );
        assert_abs_diff_eq!(r_upper, 24.61811, epsilon = 1e-4);
        // the disc looks flattened
        let apparent_diameter = 32.0 + r_upper - r;
        assert_abs_diff_eq!(apparent_diameter / 32.0, 0.87076, epsilon = 1e-4);
    }

    #[test]
    fn test_zenith_correction() {
        assert_abs_diff_eq!(
            refraction_true_to_apparent(90.0, ZenithCorrection::Corrected),
            0.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            refraction_apparent_to_true(90.0, ZenithCorrection::Corrected),
            0.0,
            epsilon = 1e-6
        );
        assert!(refraction_true_to_apparent(90.0, ZenithCorrection::Uncorrected) < 0.0);
    }

    #[test]
    fn test_formulae_are_consistent() {
        for h0 in [1.0_f64, 5.0, 15.0, 45.0] {
            let r = refraction_apparent_to_true(h0, ZenithCorrection::Uncorrected);
            let back = refraction_true_to_apparent(h0 - r / 60.0, ZenithCorrection::Uncorrected);
            assert_abs_diff_eq!(back, r, epsilon = 0.1);
        }
    }
}
