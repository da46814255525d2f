//! End-to-end reproductions of the worked examples of Meeus, *Astronomical Algorithms*
//! (2nd edition), driven from the public API only.
mod common;

use approx::assert_abs_diff_eq;
use meeus::constants::Accuracy;
use meeus::conversion::{parse_dms, parse_hms, Dms, Hms};
use meeus::dynamical::{delta_t, jd_to_jde};
use meeus::earth_orientation::{mean_obliquity, nutation, true_obliquity};
use meeus::equation_time::{equation_of_time, equation_of_time_minutes};
use meeus::equinox::{equinoxes_and_solstices, Season};
use meeus::kepler::eccentric_anomaly;
use meeus::observers::Observer;
use meeus::ref_system::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
    horizontal_to_equatorial, Frame, SphericalCoordinates,
};
use meeus::refraction::{refraction_apparent_to_true, refraction_true_to_apparent, ZenithCorrection};
use meeus::sidereal::{apparent_sidereal_time, mean_sidereal_time, SiderealKind};
use meeus::sun::sun_apparent_equatorial_coordinates;
use meeus::time::{
    date_to_julian_day, day_of_week, day_of_year, julian_day_to_date, CalendarDate, FixedClock,
};

use crate::common::{angular_separation_deg, date};

#[test]
fn test_julian_day_examples() {
    // 7.a: launch of Sputnik 1
    let sputnik = date(1957, 10, 4, 19, 26, 24.0);
    assert_abs_diff_eq!(date_to_julian_day(&sputnik).unwrap(), 2436116.31, epsilon = 1e-6);

    // 7.b: Julian calendar
    let jd = date_to_julian_day(&date(333, 1, 27, 12, 0, 0.0)).unwrap();
    assert_eq!(jd, 1842713.0);

    // 7.c
    let back = julian_day_to_date(2436116.31).unwrap();
    assert_eq!((back.year(), back.month(), back.day()), (1957, 10, 4));
    assert_abs_diff_eq!(back.fractional_day(), 0.81, epsilon = 1e-6);

    let back = julian_day_to_date(1842713.0).unwrap();
    assert_eq!((back.year(), back.month(), back.day()), (333, 1, 27));
    assert_eq!(back.hour(), 12);

    // 7.e, 7.f, 7.g
    assert_eq!(day_of_week(&CalendarDate::ymd(1954, 6, 30).unwrap()).unwrap(), 3);
    assert_eq!(day_of_year(&CalendarDate::ymd(1978, 11, 14).unwrap()), 318);
    assert_eq!(day_of_year(&CalendarDate::ymd(1988, 4, 22).unwrap()), 113);
}

#[test]
fn test_dynamical_time_example() {
    // 10.a: 1977-02-18 3h37m40s TD
    let jde = date_to_julian_day(&date(1977, 2, 18, 3, 37, 40.0)).unwrap();
    assert_abs_diff_eq!(delta_t(jde), 47.687, epsilon = 0.01);
    assert!(jd_to_jde(jde) > jde);
}

#[test]
fn test_sidereal_time_examples() {
    // 12.a
    let jd = date_to_julian_day(&date(1987, 4, 10, 0, 0, 0.0)).unwrap();
    assert_eq!(Hms::from_seconds(mean_sidereal_time(jd)).to_string(), "13h10m46.3668s");
    let apparent = Hms::from_seconds(apparent_sidereal_time(jd).unwrap());
    assert_eq!((apparent.hours, apparent.minutes), (13, 10));
    assert_abs_diff_eq!(apparent.seconds, 46.1351, epsilon = 1e-3);

    // 12.b
    let jd = date_to_julian_day(&date(1987, 4, 10, 19, 21, 0.0)).unwrap();
    let mean = Hms::from_seconds(mean_sidereal_time(jd));
    assert_eq!((mean.hours, mean.minutes), (8, 34));
    assert_abs_diff_eq!(mean.seconds, 57.0896, epsilon = 1e-3);
}

#[test]
fn test_coordinate_transform_examples() {
    // 13.a: Pollux
    let alpha = parse_hms("7h45m18.946s").unwrap();
    let delta = parse_dms("+28°01'34.26\"").unwrap();
    let pollux = SphericalCoordinates::new(alpha, delta, 1.0, Frame::Equatorial);
    let ecliptic = equatorial_to_ecliptic(&pollux, 23.4392911);
    assert_abs_diff_eq!(ecliptic.lon, 113.215630, epsilon = 1e-6);
    assert_abs_diff_eq!(ecliptic.lat, 6.684170, epsilon = 1e-6);

    let back = ecliptic_to_equatorial(&ecliptic, 23.4392911);
    assert_abs_diff_eq!(back.lon, alpha, epsilon = 1e-9);
    assert_abs_diff_eq!(back.lat, delta, epsilon = 1e-9);
    assert_eq!(back.distance, 1.0);
}

#[test]
fn test_venus_from_washington() {
    // 13.b: Venus from the US Naval Observatory, 1987-04-10 19h21m UT
    // longitude given as 5h08m15.7s west, the rounded 77°03'56" is off by 0.5"
    let usno = Observer::new(
        -parse_hms("5h08m15.7s").unwrap(),
        parse_dms("38 55 17").unwrap(),
        Some("USNO".into()),
    )
    .unwrap();
    let alpha = parse_hms("23 09 16.641").unwrap();
    let delta = parse_dms("-6 43 11.61").unwrap();
    let jd = date_to_julian_day(&date(1987, 4, 10, 19, 21, 0.0)).unwrap();

    let h = usno.hour_angle(jd, alpha, SiderealKind::Apparent).unwrap();
    assert_abs_diff_eq!(h, 64.352133, epsilon = 1e-4);

    let horizontal = equatorial_to_horizontal(h, delta, usno.latitude);
    assert_abs_diff_eq!(horizontal.lon, 68.0337, epsilon = 1e-4);
    assert_abs_diff_eq!(horizontal.lat, 15.1249, epsilon = 1e-4);

    let (h_back, delta_back) = horizontal_to_equatorial(&horizontal, usno.latitude);
    assert_abs_diff_eq!(h_back, h, epsilon = 1e-9);
    assert_abs_diff_eq!(delta_back, delta, epsilon = 1e-9);
}

#[test]
fn test_refraction_examples() {
    // 16.a: apparent altitude 0°30' of the Sun's lower limb
    let r = refraction_apparent_to_true(0.5, ZenithCorrection::Uncorrected);
    assert_abs_diff_eq!(r, 28.754, epsilon = 0.01);

    let corrected = refraction_true_to_apparent(0.5 - r / 60.0, ZenithCorrection::Corrected);
    assert_abs_diff_eq!(corrected, r, epsilon = 0.1);
}

#[test]
fn test_nutation_and_obliquity_example() {
    // 22.a: 1987-04-10 0h TD
    let jde = date_to_julian_day(&date(1987, 4, 10, 0, 0, 0.0)).unwrap();
    let (dpsi, deps) = nutation(jde, Accuracy::High);
    assert_abs_diff_eq!(dpsi, -3.788, epsilon = 1e-3);
    assert_abs_diff_eq!(deps, 9.443, epsilon = 1e-3);

    let eps0 = Dms::from_arcsec(mean_obliquity(jde, Accuracy::High).unwrap());
    assert_eq!((eps0.degrees, eps0.minutes), (23, 26));
    assert_abs_diff_eq!(eps0.seconds, 27.407, epsilon = 1e-3);

    let eps = Dms::from_arcsec(true_obliquity(jde, Accuracy::High).unwrap());
    assert_abs_diff_eq!(eps.seconds, 36.850, epsilon = 1e-3);
}

#[test]
fn test_solar_coordinates_example() {
    // 25.a: 1992-10-13 0h TD
    let jde = date_to_julian_day(&date(1992, 10, 13, 0, 0, 0.0)).unwrap();
    let sun = sun_apparent_equatorial_coordinates(jde, Accuracy::Low).unwrap();
    assert_abs_diff_eq!(sun.lon, 198.38083, epsilon = 1e-5);
    assert_abs_diff_eq!(sun.lat, -7.78507, epsilon = 1e-5);

    // 25.b, VSOP87 theory
    let sun = sun_apparent_equatorial_coordinates(jde, Accuracy::High).unwrap();
    assert!(Hms::from_degrees(sun.lon).to_string().starts_with("13h13m30."));
    assert_abs_diff_eq!(sun.lat, -7.783817, epsilon = 1e-4);
}

#[test]
fn test_equinox_example() {
    // 27.a: June solstice 1962, 1962-06-21 21h25m08s TD
    let low = equinoxes_and_solstices(1962, Accuracy::Low).unwrap();
    let solstice = julian_day_to_date(low.get(Season::JuneSolstice)).unwrap();
    assert_eq!((solstice.month(), solstice.day(), solstice.hour()), (6, 21, 21));
    assert_eq!(solstice.minute(), 25);
    assert_abs_diff_eq!(solstice.second(), 8.0, epsilon = 1.0);

    // the iterated instant lies within a minute of the tabulated one
    let high = equinoxes_and_solstices(1962, Accuracy::High).unwrap();
    assert_abs_diff_eq!(high.june_solstice, low.june_solstice, epsilon = 1e-3);
}

#[test]
fn test_equation_of_time_example() {
    // 28.a: 1992-10-13 0h TD
    let jde = date_to_julian_day(&date(1992, 10, 13, 0, 0, 0.0)).unwrap();
    assert_abs_diff_eq!(equation_of_time(jde).unwrap(), 3.427351, epsilon = 1e-4);

    let e = Hms::from_seconds(equation_of_time_minutes(jde).unwrap() * 60.0);
    assert_eq!((e.hours, e.minutes), (0, 13));
    assert_abs_diff_eq!(e.seconds, 42.6, epsilon = 0.1);
}

#[test]
fn test_kepler_example() {
    // 30.a
    assert_abs_diff_eq!(eccentric_anomaly(5.0, 0.1), 5.554589, epsilon = 1e-6);
}

#[test]
fn test_sun_from_a_fixed_clock() {
    let greenwich = Observer::new(0.0, 51.4769, Some("Greenwich".into())).unwrap();
    let clock = FixedClock(date(2000, 3, 20, 12, 0, 0.0));

    let low = greenwich.sun_position_now(&clock, Accuracy::Low).unwrap();
    let high = greenwich.sun_position_now(&clock, Accuracy::High).unwrap();
    assert_eq!(high.frame, Frame::Horizontal);
    assert!(angular_separation_deg(low.lon, high.lon) < 0.05);
    assert_abs_diff_eq!(low.lat, high.lat, epsilon = 0.02);

    // near the equinox the noon Sun stands at the colatitude, plus refraction
    assert_abs_diff_eq!(high.lat, 90.0 - 51.4769, epsilon = 0.5);
}
