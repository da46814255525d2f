//! # Sexagesimal values
//!
//! Hours–minutes–seconds and degrees–arcminutes–arcseconds, parsed from and formatted to
//! strings. Accepted inputs:
//!
//! | Kind | Forms                                     |
//! |------|-------------------------------------------|
//! | HMS  | `13h10m46.3668s`, `13 10 46.3668`          |
//! | DMS  | `-7°47'01.74"`, `-7d47'01.74`, `-7 47 01.74` |
//!
//! The sign is read from the leading `+`/`-` so that `-0 30 14.2` stays negative.
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{ArcSec, Degree, TimeSecond};
use crate::meeus_errors::MeeusError;
use crate::numeric::{
    deg_to_arcsec, deg_to_time_seconds, dms_to_deg, fround, hms_to_deg, hms_to_seconds,
    seconds_to_hms,
};

static HMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-])?(\d+)(?:h\s*|\s+)(\d+)(?:m\s*|\s+)(\d+(?:\.\d*)?)s?\s*$")
        .expect("valid HMS regex")
});

static DMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([+-])?(\d+)(?:[°d]\s*|\s+)(\d+)(?:['′]\s*|\s+)(\d+(?:\.\d*)?)["″]?\s*$"#)
        .expect("valid DMS regex")
});

/// Sign, whole units, whole minutes and fractional seconds of a sexagesimal string.
fn parse_fields(re: &Regex, input: &str) -> Result<(f64, f64, f64, f64), MeeusError> {
    let invalid = || MeeusError::InvalidSexagesimal(input.to_string());
    let caps = re.captures(input).ok_or_else(invalid)?;

    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -1.0,
        _ => 1.0,
    };
    let field = |i: usize| -> Result<f64, MeeusError> {
        caps.get(i)
            .ok_or_else(invalid)?
            .as_str()
            .parse::<f64>()
            .map_err(|_| invalid())
    };
    let (units, minutes, seconds) = (field(2)?, field(3)?, field(4)?);
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(invalid());
    }
    Ok((sign, units, minutes, seconds))
}

/// Parse an hours–minutes–seconds string into degrees (1h = 15°).
pub fn parse_hms(input: &str) -> Result<Degree, MeeusError> {
    let (sign, h, m, s) = parse_fields(&HMS_REGEX, input)?;
    Ok(sign * hms_to_deg(h, m, s))
}

/// Parse a degrees–arcminutes–arcseconds string into degrees.
pub fn parse_dms(input: &str) -> Result<Degree, MeeusError> {
    let (sign, d, m, s) = parse_fields(&DMS_REGEX, input)?;
    Ok(sign * dms_to_deg(d, m, s))
}

/// An angle or a duration split into hours, minutes and seconds of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl Hms {
    pub fn from_seconds(seconds: TimeSecond) -> Self {
        let (hours, minutes, seconds_part) = seconds_to_hms(seconds.abs());
        Hms {
            negative: seconds < 0.0,
            hours,
            minutes,
            seconds: seconds_part,
        }
    }

    pub fn from_degrees(degrees: Degree) -> Self {
        Self::from_seconds(deg_to_time_seconds(degrees))
    }

    pub fn to_seconds(&self) -> TimeSecond {
        let s = hms_to_seconds(self.hours as f64, self.minutes as f64, self.seconds);
        if self.negative {
            -s
        } else {
            s
        }
    }

    pub fn to_degrees(&self) -> Degree {
        let d = hms_to_deg(self.hours as f64, self.minutes as f64, self.seconds);
        if self.negative {
            -d
        } else {
            d
        }
    }
}

/// Round `total` to the printed precision before splitting it, so the seconds never read 60.
fn rounded_split(negative: bool, total: f64, digits: i32) -> (&'static str, i64, i64, f64) {
    let total = fround(total.abs(), digits);
    let sign = if negative && total > 0.0 { "-" } else { "" };
    let (units, minutes, seconds) = seconds_to_hms(total);
    (sign, units, minutes, seconds)
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (sign, hours, minutes, seconds) = rounded_split(self.negative, self.to_seconds(), 4);
        write!(f, "{sign}{hours}h{minutes:02}m{seconds:07.4}s")
    }
}

/// An angle split into degrees, arcminutes and arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl Dms {
    pub fn from_arcsec(arcsec: ArcSec) -> Self {
        let (degrees, minutes, seconds) = seconds_to_hms(arcsec.abs());
        Dms {
            negative: arcsec < 0.0,
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn from_degrees(degrees: Degree) -> Self {
        Self::from_arcsec(deg_to_arcsec(degrees))
    }

    pub fn to_degrees(&self) -> Degree {
        let d = dms_to_deg(self.degrees as f64, self.minutes as f64, self.seconds);
        if self.negative {
            -d
        } else {
            d
        }
    }

    pub fn to_arcsec(&self) -> ArcSec {
        deg_to_arcsec(self.to_degrees())
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (sign, degrees, minutes, seconds) = rounded_split(self.negative, self.to_arcsec(), 3);
        write!(f, "{sign}{degrees}°{minutes:02}'{seconds:06.3}\"")
    }
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_hms() {
        let expected = hms_to_deg(13.0, 10.0, 46.3668);
        assert_abs_diff_eq!(parse_hms("13h10m46.3668s").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_hms("13 10 46.3668").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_hms(" 13h 10m 46.3668s ").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_hms("22 52 23.37").unwrap(), 343.097375, epsilon = 1e-9);
        assert_eq!(parse_hms("23 09 16").unwrap(), hms_to_deg(23.0, 9.0, 16.0));
    }

    #[test]
    fn test_parse_dms() {
        let expected = -dms_to_deg(7.0, 47.0, 1.74);
        assert_abs_diff_eq!(parse_dms("-7°47'01.74\"").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_dms("-7 47 01.74").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_dms("-7d47'01.74").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(parse_dms("+13 55 42.7").unwrap(), 13.928527777, epsilon = 1e-8);
        assert_abs_diff_eq!(parse_dms("-00 30 14.2").unwrap(), -0.503944444, epsilon = 1e-8);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "1 2", "1 2 3.4.5", "13h61m00s", "12 30 60", "abc", "1°2'"] {
            assert!(
                matches!(parse_dms(bad), Err(MeeusError::InvalidSexagesimal(_))),
                "{bad}"
            );
        }
        assert!(parse_hms("13h10m").is_err());
        assert!(parse_hms("13h 10m 75s").is_err());
    }

    #[test]
    fn test_hms_value() {
        let hms = Hms::from_seconds(hms_to_seconds(13.0, 10.0, 46.3668));
        assert_eq!((hms.hours, hms.minutes), (13, 10));
        assert_abs_diff_eq!(hms.seconds, 46.3668, epsilon = 1e-9);
        assert_eq!(hms.to_string(), "13h10m46.3668s");

        let hms = Hms::from_degrees(347.3193375);
        assert_eq!(hms.to_string(), "23h09m16.6410s");
        assert_abs_diff_eq!(hms.to_degrees(), 347.3193375, epsilon = 1e-10);

        let negative = Hms::from_seconds(-90.5);
        assert!(negative.negative);
        assert_eq!(negative.to_string(), "-0h01m30.5000s");
        assert_abs_diff_eq!(negative.to_seconds(), -90.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dms_value() {
        let dms = Dms::from_arcsec(84381.448);
        assert_eq!((dms.degrees, dms.minutes), (23, 26));
        assert_eq!(dms.to_string(), "23°26'21.448\"");

        let dms = Dms::from_degrees(-6.719891666666667);
        assert!(dms.negative);
        assert_eq!(dms.to_string(), "-6°43'11.610\"");
        assert_abs_diff_eq!(dms.to_degrees(), -6.719891666666667, epsilon = 1e-12);
        assert_abs_diff_eq!(dms.to_arcsec(), -24191.61, epsilon = 1e-8);
    }

    #[test]
    fn test_display_carries_rounded_seconds() {
        assert_eq!(Hms::from_seconds(59.99996).to_string(), "0h01m00.0000s");
        assert_eq!(Hms::from_seconds(3599.99999).to_string(), "1h00m00.0000s");
        assert_eq!(Hms::from_seconds(-7199.99996).to_string(), "-2h00m00.0000s");
        assert_eq!(Hms::from_seconds(-0.00001).to_string(), "0h00m00.0000s");

        assert_eq!(Dms::from_arcsec(59.9996).to_string(), "0°01'00.000\"");
        assert_eq!(Dms::from_degrees(29.99999999).to_string(), "30°00'00.000\"");
        assert_eq!(Dms::from_arcsec(-3599.9999).to_string(), "-1°00'00.000\"");

        // the stored fields keep full precision
        assert_abs_diff_eq!(Hms::from_seconds(59.99996).seconds, 59.99996, epsilon = 1e-9);
    }
}
