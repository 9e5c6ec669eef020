use crate::time::error::Error;
use core::str::FromStr;
use std::convert::TryFrom;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex = Regex::new(
        r"^(?P<value>\d+)(?P<unit>ns|us|ms|s|m|h|d){1}$"
    )
    .expect("Regex compilation error");
}

pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, PartialEq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX.captures(s.trim()).ok_or_else(|| {
            Error::Syntax(format!("'{}' is not a duration, expected e.g. 250ms or 1s", s))
        })?;
        let value = caps["value"]
            .parse()
            .map_err(|_| Error::Syntax(format!("Duration value of '{}' is too large", s)))?;
        let unit = caps["unit"].parse::<TimeUnit>()?;
        Ok(Self { value, unit })
    }
}

impl TryFrom<DurationUnit> for Duration {
    type Error = Error;

    fn try_from(unit: DurationUnit) -> Result<Self, Self::Error> {
        let seconds = |factor: u64| {
            unit.value
                .checked_mul(factor)
                .map(Duration::from_secs)
                .ok_or_else(|| Error::Syntax(format!("Duration value {} is too large", unit.value)))
        };
        match unit.unit {
            TimeUnit::Nanosecond => Ok(Duration::from_nanos(unit.value)),
            TimeUnit::Microsecond => Ok(Duration::from_micros(unit.value)),
            TimeUnit::Millisecond => Ok(Duration::from_millis(unit.value)),
            TimeUnit::Second => Ok(Duration::from_secs(unit.value)),
            TimeUnit::Minute => seconds(60),
            TimeUnit::Hour => seconds(60 * 60),
            TimeUnit::Day => seconds(60 * 60 * 24),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanosecond" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanosecond),
            "us" | "microsecond" | "micros" | "microseconds" => Ok(TimeUnit::Microsecond),
            "ms" | "millisecond" | "millis" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "second" | "secs" | "seconds" => Ok(TimeUnit::Second),
            "m" | "minute" | "mins" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(Error::UnitNotSupported(format!("Unit '{}' not supported", s))),
        }
    }
}

/// Parses the pause inserted between two TestRail calls, e.g. `250ms`.
pub fn parse_delay(value: &str) -> Result<Duration, Error> {
    value.parse::<DurationUnit>().and_then(Duration::try_from)
}
