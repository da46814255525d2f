//! Positional astronomy after J. Meeus, *Astronomical Algorithms* (2nd ed.).
//!
//! Calendar and Julian Day conversions, dynamical time, nutation and obliquity, VSOP87D
//! planetary positions, the Sun, sidereal time, coordinate transforms, equinoxes and
//! solstices, Kepler's equation, equation of time and refraction.
//!
//! ```
//! use meeus::constants::Accuracy;
//! use meeus::earth_orientation::nutation_in_longitude;
//! use meeus::time::{date_to_julian_day, CalendarDate};
//!
//! let date = CalendarDate::ymd(1987, 4, 10).unwrap();
//! let jde = date_to_julian_day(&date).unwrap();
//! let dpsi = nutation_in_longitude(jde, Accuracy::High);
//! assert!((dpsi + 3.788).abs() < 1e-3);
//! ```
pub mod constants;
pub mod conversion;
pub mod dynamical;
pub mod earth_orientation;
pub mod equation_time;
pub mod equinox;
pub mod kepler;
pub mod meeus_errors;
pub mod numeric;
pub mod observers;
pub mod ref_system;
pub mod refraction;
pub mod sidereal;
pub mod sun;
pub mod time;
pub mod vsop87;

pub use constants::Accuracy;
pub use meeus_errors::MeeusError;
