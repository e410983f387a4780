//! ISO-8601 durations as Graph sends them (`PT1H30M`, `P1D`, `-PT0.5S`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The input is not an ISO-8601 duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO-8601 duration '{0}'")]
pub struct DurationParseError(pub String);

/// A calendar-aware ISO-8601 duration.
///
/// Components are kept as written rather than normalized, since a month or a
/// year has no fixed length. Only seconds may carry a fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Fractional second, in nanoseconds.
    pub nanos: u32,
}

impl IsoDuration {
    /// A duration of whole hours, minutes and seconds.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    pub fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && !self.has_time()
    }

    fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanos != 0
    }
}

/// Split `part` into `(number, unit)` pairs, e.g. `"1H30M"` into
/// `[("1", 'H'), ("30", 'M')]`.
fn components(part: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, ch) in part.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            continue;
        }
        let number = &part[start..idx];
        if number.is_empty() {
            return None;
        }
        out.push((number, ch));
        start = idx + ch.len_utf8();
    }
    // trailing digits without a unit
    if start != part.len() {
        return None;
    }
    Some(out)
}

fn whole(number: &str) -> Option<u32> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Seconds with an optional `.` or `,` fraction, truncated to nanoseconds.
fn seconds_and_nanos(number: &str) -> Option<(u32, u32)> {
    let Some(split) = number.find(['.', ',']) else {
        return Some((whole(number)?, 0));
    };
    let (secs, fraction) = (&number[..split], &number[split + 1..]);
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: String = fraction.chars().take(9).collect();
    let nanos = format!("{digits:0<9}").parse().ok()?;
    Some((whole(secs)?, nanos))
}

impl FromStr for IsoDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DurationParseError(s.to_owned());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('P').ok_or_else(err)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((_, "")) => return Err(err()),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut out = Self {
            negative,
            ..Self::default()
        };
        let mut any = false;

        let mut next = 0;
        for (number, unit) in components(date_part).ok_or_else(err)? {
            let idx = "YMWD".find(unit).filter(|i| *i >= next).ok_or_else(err)?;
            next = idx + 1;
            let value = whole(number).ok_or_else(err)?;
            match unit {
                'Y' => out.years = value,
                'M' => out.months = value,
                'W' => out.weeks = value,
                _ => out.days = value,
            }
            any = true;
        }

        if let Some(time_part) = time_part {
            let mut next = 0;
            for (number, unit) in components(time_part).ok_or_else(err)? {
                let idx = "HMS".find(unit).filter(|i| *i >= next).ok_or_else(err)?;
                next = idx + 1;
                match unit {
                    'H' => out.hours = whole(number).ok_or_else(err)?,
                    'M' => out.minutes = whole(number).ok_or_else(err)?,
                    _ => {
                        let (secs, nanos) = seconds_and_nanos(number).ok_or_else(err)?;
                        out.seconds = secs;
                        out.nanos = nanos;
                    }
                }
                any = true;
            }
        }

        if !any {
            return Err(err());
        }
        Ok(out)
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        if !self.has_time() {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || self.nanos != 0 {
            write!(f, "{}", self.seconds)?;
            if self.nanos != 0 {
                let fraction = format!("{:09}", self.nanos);
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl Serialize for IsoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_time_components() {
        let d: IsoDuration = "PT1H30M".parse().unwrap();
        assert_eq!(d, IsoDuration::from_hms(1, 30, 0));
    }

    #[test]
    fn parses_date_and_time_components() {
        let d: IsoDuration = "P1Y2M3W4DT5H6M7S".parse().unwrap();
        assert_eq!(
            (d.years, d.months, d.weeks, d.days, d.hours, d.minutes, d.seconds),
            (1, 2, 3, 4, 5, 6, 7)
        );
    }

    #[test]
    fn minutes_and_months_are_told_apart_by_t() {
        let months: IsoDuration = "P2M".parse().unwrap();
        let minutes: IsoDuration = "PT2M".parse().unwrap();
        assert_eq!(months.months, 2);
        assert_eq!(minutes.minutes, 2);
    }

    #[test]
    fn fractional_seconds() {
        let d: IsoDuration = "-PT0,25S".parse().unwrap();
        assert!(d.negative);
        assert_eq!(d.nanos, 250_000_000);
        assert_eq!(d.to_string(), "-PT0.25S");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "P", "PT", "1D", "P1", "PT1.5H", "P1D1Y", "P1H", "PT1S2M", "P1DD", "P-1D"] {
            let err = bad.parse::<IsoDuration>().unwrap_err();
            assert_eq!(err.0, bad);
        }
    }

    #[test]
    fn rejects_overflowing_components() {
        assert!("P99999999999D".parse::<IsoDuration>().is_err());
    }

    #[test]
    fn zero_formats_as_pt0s() {
        assert_eq!(IsoDuration::default().to_string(), "PT0S");
        assert_eq!("P0D".parse::<IsoDuration>().unwrap().to_string(), "PT0S");
    }

    #[test]
    fn display_omits_zero_components() {
        assert_eq!(IsoDuration::days(1).to_string(), "P1D");
        assert_eq!(IsoDuration::from_hms(0, 0, 45).to_string(), "PT45S");
    }

    #[test]
    fn serde_uses_string_form() {
        let d = IsoDuration::from_hms(2, 0, 0);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"PT2H\"");
        let back: IsoDuration = serde_json::from_str("\"PT2H\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<IsoDuration>("\"2 hours\"").is_err());
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(
            negative in any::<bool>(),
            years in 0u32..10_000,
            months in 0u32..100,
            weeks in 0u32..100,
            days in 0u32..1_000,
            hours in 0u32..1_000,
            minutes in 0u32..1_000,
            seconds in 0u32..100_000,
            nanos in 0u32..1_000_000_000,
        ) {
            let d = IsoDuration { negative, years, months, weeks, days, hours, minutes, seconds, nanos };
            let back: IsoDuration = d.to_string().parse().unwrap();
            prop_assert_eq!(back, d);
        }
    }
}
