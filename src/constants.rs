//! # Constants and type definitions for meeus
//!
//! This module centralizes the **astronomical constants**, **conversion factors** and **common
//! type definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Epochs and time spans (J2000.0, Julian century, Julian millennium)
//! - Unit conversions (degrees ↔ radians, arcseconds, seconds of time)
//! - Core type aliases used across the crate
//! - The [`Accuracy`] selector threaded through every two-tier computation

use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------
// Epochs and time spans
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;

/// First Julian Day of the Gregorian calendar (1582-10-15 00:00)
pub const GREGORIAN_START_JD: f64 = 2_299_160.5;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Arcseconds in one degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Seconds of time per degree of rotation (86400 s / 360°)
pub const SECONDS_OF_TIME_PER_DEGREE: f64 = 240.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in arcminutes
pub type ArcMin = f64;
/// Angle in radians
pub type Radian = f64;
/// Duration or angle expressed in seconds of time (1 s = 15″)
pub type TimeSecond = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Day, Universal Time
pub type JulianDay = f64;
/// Julian Day, dynamical (terrestrial) time
pub type JulianEphemerisDay = f64;

// -------------------------------------------------------------------------------------------------
// Model selection
// -------------------------------------------------------------------------------------------------

/// Which of the two independent numerical models to evaluate.
///
/// The low and high accuracy paths are separate theories, each with its own accuracy
/// contract (e.g. nutation in longitude to 0.5″ vs 0.001″). They are never mixed inside
/// one computation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accuracy {
    /// Short closed-form expressions
    Low,
    /// Full periodic series
    High,
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accuracy::Low => write!(f, "low"),
            Accuracy::High => write!(f, "high"),
        }
    }
}
