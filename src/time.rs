//! # Calendar dates and Julian Day
//!
//! Conversions between civil calendar dates and the continuous Julian Day count (Meeus ch. 7).
//!
//! Dates on or after **1582-10-15** are read in the Gregorian calendar, earlier dates in the
//! proleptic Julian calendar; the cutover is fixed. Julian Day 0 is −4712-01-01 12:00
//! (astronomical year numbering), and no date before it is accepted.
//!
//! The kernel never reads the system clock by itself: the current instant is obtained through
//! a [`Clock`] supplied by the caller ([`SystemClock`] in production, [`FixedClock`] in tests).
use hifitime::Epoch;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{JulianDay, SECONDS_PER_DAY};
use crate::meeus_errors::MeeusError;

/// Immutable civil date and time of day.
///
/// Build it with [`CalendarDate::new`] or [`CalendarDate::ymd`], which validate every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = MeeusError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        CalendarDate::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl CalendarDate {
    /// Create a validated calendar date.
    ///
    /// Arguments
    /// ---------
    /// * `year`: astronomical year (1 BCE is year 0).
    /// * `month`: 1–12.
    /// * `day`: 1 up to the length of the month, Julian leap rule up to 1582. 1582-10-05…14 do
    ///   not exist.
    /// * `hour`, `minute`: 0–23 and 0–59.
    /// * `second`: fractional seconds in `[0, 60)`.
    ///
    /// Returns
    /// --------
    /// * The date, or [`MeeusError::OutOfRange`] naming the offending field.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, MeeusError> {
        if !(1..=12).contains(&month) {
            return Err(MeeusError::OutOfRange(format!("month {month}")));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(MeeusError::OutOfRange(format!(
                "day {day} of {year}-{month:02}"
            )));
        }
        if (year, month) == (1582, 10) && (5..=14).contains(&day) {
            return Err(MeeusError::OutOfRange(format!(
                "1582-10-{day:02} was dropped by the Gregorian reform"
            )));
        }
        if hour > 23 {
            return Err(MeeusError::OutOfRange(format!("hour {hour}")));
        }
        if minute > 59 {
            return Err(MeeusError::OutOfRange(format!("minute {minute}")));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(MeeusError::OutOfRange(format!("second {second}")));
        }
        Ok(CalendarDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the given day.
    pub fn ymd(year: i32, month: u8, day: u8) -> Result<Self, MeeusError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Day of the month with the time of day as its fractional part.
    pub fn fractional_day(&self) -> f64 {
        let seconds = self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second;
        self.day as f64 + seconds / SECONDS_PER_DAY
    }

    pub fn to_julian_day(&self) -> Result<JulianDay, MeeusError> {
        date_to_julian_day(self)
    }

    pub fn from_julian_day(jd: JulianDay) -> Result<Self, MeeusError> {
        julian_day_to_date(jd)
    }

    pub fn day_of_year(&self) -> u16 {
        day_of_year(self)
    }

    /// Sunday = 0 … Saturday = 6.
    pub fn day_of_week(&self) -> Result<u8, MeeusError> {
        day_of_week(self)
    }

    /// UTC epoch for a Gregorian date.
    ///
    /// Dates before the Gregorian cutover are rejected with [`MeeusError::OutOfRange`]
    /// because [`Epoch`] only knows the Gregorian calendar.
    pub fn to_epoch(&self) -> Result<Epoch, MeeusError> {
        if !is_gregorian(self) {
            return Err(MeeusError::OutOfRange(format!(
                "{self} precedes the Gregorian calendar"
            )));
        }
        let whole = self.second.trunc();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        Epoch::maybe_from_gregorian_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole as u8,
            nanos,
        )
        .map_err(|e| MeeusError::OutOfRange(format!("{self}: {e}")))
    }

    pub fn from_epoch(epoch: &Epoch) -> Result<Self, MeeusError> {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        Self::new(
            year,
            month,
            day,
            hour,
            minute,
            second as f64 + nanos as f64 * 1e-9,
        )
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Leap year test, Julian rule up to 1582 and Gregorian rule afterwards.
pub fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// True when the date falls on or after the Gregorian reform (1582-10-15).
pub fn is_gregorian(date: &CalendarDate) -> bool {
    (date.year, date.month, date.day) >= (1582, 10, 15)
}

/// Calendar date → Julian Day.
///
/// Arguments
/// ---------
/// * `date`: civil date; Gregorian from 1582-10-15, Julian before.
///
/// Returns
/// --------
/// * The Julian Day, or [`MeeusError::OutOfRange`] when the date precedes JD 0.
///
/// See also
/// ------------
/// * [`julian_day_to_date`] – inverse conversion.
pub fn date_to_julian_day(date: &CalendarDate) -> Result<JulianDay, MeeusError> {
    let (y, m) = if date.month <= 2 {
        (date.year as f64 - 1.0, date.month as f64 + 12.0)
    } else {
        (date.year as f64, date.month as f64)
    };

    let correction = if is_gregorian(date) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
        + date.fractional_day()
        + correction
        - 1524.5;

    if jd < 0.0 {
        debug!("Rejecting {date}: before Julian Day 0");
        return Err(MeeusError::OutOfRange(format!(
            "date {date} precedes Julian Day 0"
        )));
    }
    Ok(jd)
}

/// Year, month and fractional day of a Julian Day.
///
/// Total over the reals so dynamical time can be evaluated for any instant, even before JD 0.
pub(crate) fn calendar_parts(jd: JulianDay) -> (i64, u8, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i64, month as u8, day)
}

/// Julian Day → calendar date.
///
/// Returns [`MeeusError::OutOfRange`] for negative or non-finite Julian Days.
pub fn julian_day_to_date(jd: JulianDay) -> Result<CalendarDate, MeeusError> {
    if !jd.is_finite() || jd < 0.0 {
        debug!("Rejecting Julian Day {jd}");
        return Err(MeeusError::OutOfRange(format!("julian day {jd}")));
    }
    let (year, month, day) = calendar_parts(jd);

    let whole_day = day.floor();
    // keep the time of day strictly below 24h
    let seconds = ((day - whole_day) * SECONDS_PER_DAY).min(SECONDS_PER_DAY - 1e-6);
    let hour = (seconds / 3600.0).floor();
    let minute = ((seconds - hour * 3600.0) / 60.0).floor();
    let second = seconds - hour * 3600.0 - minute * 60.0;

    CalendarDate::new(
        year as i32,
        month,
        whole_day as u8,
        hour as u8,
        minute as u8,
        second,
    )
}

/// Day of the week, Sunday = 0 … Saturday = 6.
pub fn day_of_week(date: &CalendarDate) -> Result<u8, MeeusError> {
    let jd = date_to_julian_day(date)?;
    Ok(((jd + 1.5).floor() as i64).rem_euclid(7) as u8)
}

/// Ordinal day in the year, 1 for January 1st.
pub fn day_of_year(date: &CalendarDate) -> u16 {
    let k = if is_leap_year(date.year) { 1 } else { 2 };
    let m = date.month as i32;
    (275 * m / 9 - k * ((m + 9) / 12) + date.day as i32 - 30) as u16
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Result<CalendarDate, MeeusError>;
}

/// Reads UTC from the operating system through [`Epoch::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<CalendarDate, MeeusError> {
        let epoch = Epoch::now().map_err(|e| MeeusError::ClockUnavailable(e.to_string()))?;
        CalendarDate::from_epoch(&epoch)
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn now(&self) -> Result<CalendarDate, MeeusError> {
        Ok(self.0)
    }
}

/// Julian Day of the instant reported by `clock`.
pub fn current_julian_day(clock: &impl Clock) -> Result<JulianDay, MeeusError> {
    date_to_julian_day(&clock.now()?)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::numeric::fround;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: f64) -> CalendarDate {
        CalendarDate::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_date_to_julian_day() {
        let jd = date_to_julian_day(&date(1957, 10, 4, 19, 29, 0.0)).unwrap();
        assert_eq!(fround(jd, 2), 2436116.31);

        assert_eq!(
            date_to_julian_day(&date(333, 1, 27, 12, 0, 0.0)).unwrap(),
            1842713.0
        );
        assert_eq!(
            date_to_julian_day(&date(2000, 1, 1, 12, 0, 0.0)).unwrap(),
            2451545.0
        );
        assert_eq!(
            date_to_julian_day(&date(-4712, 1, 1, 12, 0, 0.0)).unwrap(),
            0.0
        );
        assert_eq!(
            date_to_julian_day(&CalendarDate::ymd(1910, 4, 20).unwrap()).unwrap(),
            2418781.5
        );
        assert_eq!(
            date_to_julian_day(&CalendarDate::ymd(1986, 2, 9).unwrap()).unwrap(),
            2446470.5
        );
    }

    #[test]
    fn test_before_julian_day_zero() {
        let err = date_to_julian_day(&date(-4712, 1, 1, 11, 59, 0.0)).unwrap_err();
        assert!(matches!(err, MeeusError::OutOfRange(_)));
        let err = date_to_julian_day(&CalendarDate::ymd(-5000, 6, 1).unwrap()).unwrap_err();
        assert!(matches!(err, MeeusError::OutOfRange(_)));
    }

    #[test]
    fn test_gregorian_cutover() {
        let julian = date_to_julian_day(&CalendarDate::ymd(1582, 10, 4).unwrap()).unwrap();
        let gregorian = date_to_julian_day(&CalendarDate::ymd(1582, 10, 15).unwrap()).unwrap();
        assert_eq!(julian, 2299159.5);
        assert_eq!(gregorian - julian, 1.0);
        assert!(!is_gregorian(&CalendarDate::ymd(1582, 10, 4).unwrap()));
        assert!(is_gregorian(&CalendarDate::ymd(1582, 10, 15).unwrap()));
    }

    #[test]
    fn test_reform_gap_is_rejected() {
        for day in 5..=14 {
            let err = CalendarDate::ymd(1582, 10, day).unwrap_err();
            assert!(matches!(err, MeeusError::OutOfRange(_)), "1582-10-{day}");
        }
        assert!(CalendarDate::new(1582, 10, 4, 23, 59, 59.9).is_ok());
        assert!(CalendarDate::ymd(1582, 10, 15).is_ok());
        assert!(CalendarDate::ymd(1583, 10, 10).is_ok());
    }

    #[test]
    fn test_julian_day_to_date() {
        let d = julian_day_to_date(2436116.31).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1957, 10, 4));
        assert_eq!((d.hour(), d.minute()), (19, 26));

        let d = julian_day_to_date(1842713.0).unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (333, 1, 27, 12));

        let d = julian_day_to_date(2299160.5).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1582, 10, 15));
        let d = julian_day_to_date(2299159.5).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1582, 10, 4));

        let d = julian_day_to_date(0.0).unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (-4712, 1, 1, 12));
    }

    #[test]
    fn test_negative_julian_day() {
        assert!(matches!(
            julian_day_to_date(-0.5),
            Err(MeeusError::OutOfRange(_))
        ));
        assert!(julian_day_to_date(f64::NAN).is_err());
    }

    #[test]
    fn test_round_trip() {
        let d = date(1987, 4, 10, 19, 21, 0.0);
        let back = julian_day_to_date(date_to_julian_day(&d).unwrap()).unwrap();
        assert_eq!(
            (back.year(), back.month(), back.day(), back.hour()),
            (1987, 4, 10, 19)
        );
        let seconds = back.minute() as f64 * 60.0 + back.second();
        assert_abs_diff_eq!(seconds, 21.0 * 60.0, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_fields() {
        assert!(CalendarDate::new(2000, 13, 1, 0, 0, 0.0).is_err());
        assert!(CalendarDate::new(2000, 0, 1, 0, 0, 0.0).is_err());
        assert!(CalendarDate::new(2001, 2, 29, 0, 0, 0.0).is_err());
        assert!(CalendarDate::new(2000, 2, 29, 0, 0, 0.0).is_ok());
        assert!(CalendarDate::new(1900, 2, 29, 0, 0, 0.0).is_err());
        // Julian rule
        assert!(CalendarDate::new(1500, 2, 29, 0, 0, 0.0).is_ok());
        assert!(CalendarDate::new(2000, 1, 1, 24, 0, 0.0).is_err());
        assert!(CalendarDate::new(2000, 1, 1, 0, 60, 0.0).is_err());
        assert!(CalendarDate::new(2000, 1, 1, 0, 0, 60.0).is_err());
        assert!(CalendarDate::new(2000, 1, 1, 0, 0, -1.0).is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(900));
        assert!(is_leap_year(1236));
        assert!(!is_leap_year(750));
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(1700));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn test_day_of_week_and_year() {
        assert_eq!(day_of_week(&CalendarDate::ymd(1954, 6, 30).unwrap()).unwrap(), 3);
        assert_eq!(day_of_week(&date(2000, 1, 1, 18, 0, 0.0)).unwrap(), 6);
        assert_eq!(CalendarDate::ymd(2024, 3, 20).unwrap().day_of_week().unwrap(), 3);
        assert_eq!(day_of_year(&CalendarDate::ymd(1978, 11, 14).unwrap()), 318);
        assert_eq!(CalendarDate::ymd(1988, 4, 22).unwrap().day_of_year(), 113);
        assert_eq!(day_of_year(&CalendarDate::ymd(2001, 1, 1).unwrap()), 1);
        assert_eq!(day_of_year(&CalendarDate::ymd(2000, 12, 31).unwrap()), 366);
    }

    #[test]
    fn test_epoch_interop() {
        let d = date(2021, 1, 1, 6, 30, 15.5);
        let epoch = d.to_epoch().unwrap();
        assert_abs_diff_eq!(
            epoch.to_jde_utc_days(),
            date_to_julian_day(&d).unwrap(),
            epsilon = 1e-7
        );

        let back = CalendarDate::from_epoch(&epoch).unwrap();
        assert_eq!((back.hour(), back.minute()), (6, 30));
        assert_abs_diff_eq!(back.second(), 15.5, epsilon = 1e-6);

        assert!(CalendarDate::ymd(1500, 1, 1).unwrap().to_epoch().is_err());
    }

    #[test]
    fn test_clocks() {
        let fixed = FixedClock(CalendarDate::ymd(1986, 2, 9).unwrap());
        assert_eq!(current_julian_day(&fixed).unwrap(), 2446470.5);

        let now = current_julian_day(&SystemClock).unwrap();
        // any run of this test happens after 2020
        assert!(now > 2458849.5);
    }
}
