#![allow(dead_code)]

use std::f64::consts::{PI, TAU};

use meeus::time::CalendarDate;

/// Smallest absolute difference between two angles in radians.
pub fn angular_separation_rad(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

/// Smallest absolute difference between two angles in degrees.
pub fn angular_separation_deg(a: f64, b: f64) -> f64 {
    angular_separation_rad(a.to_radians(), b.to_radians()).to_degrees()
}

pub fn date(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> CalendarDate {
    CalendarDate::new(year, month, day, hour, minute, second).unwrap()
}

/// Signed difference `a - b` of two angles in degrees, folded into `(-180, 180]`.
pub fn signed_difference_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).to_radians().rem_euclid(TAU);
    (if d > PI { d - TAU } else { d }).to_degrees()
}
