use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Sampling interval for intraday time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Min1,
    Min5,
    Min15,
    Min30,
    Min60,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::Min1 => "1min",
                Interval::Min5 => "5min",
                Interval::Min15 => "15min",
                Interval::Min30 => "30min",
                Interval::Min60 => "60min",
            }
        )
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Interval::Min1),
            "5min" => Ok(Interval::Min5),
            "15min" => Ok(Interval::Min15),
            "30min" => Ok(Interval::Min30),
            "60min" => Ok(Interval::Min60),
            _ => Err(Error::InvalidInput(format!(
                "unknown interval '{s}'. Valid intervals: 1min, 5min, 15min, 30min, 60min"
            ))),
        }
    }
}

/// Amount of data returned for a series: the latest 100 points or the full
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSize {
    #[default]
    Compact,
    Full,
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputSize::Compact => "compact",
                OutputSize::Full => "full",
            }
        )
    }
}

impl FromStr for OutputSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(Error::InvalidInput(format!(
                "unknown output size '{s}'. Valid sizes: compact, full"
            ))),
        }
    }
}

/// Reporting frequency for historical price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Wire value of the `function` parameter for this frequency,
    /// e.g. `TIME_SERIES_DAILY`.
    pub fn function(&self) -> String {
        format!("TIME_SERIES_{self}")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Frequency::Daily => "DAILY",
                Frequency::Weekly => "WEEKLY",
                Frequency::Monthly => "MONTHLY",
            }
        )
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(Error::InvalidInput(format!(
                "unknown frequency '{s}'. Valid frequencies: DAILY, WEEKLY, MONTHLY"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_accepts_every_member() {
        let members = [
            ("1min", Interval::Min1),
            ("5min", Interval::Min5),
            ("15min", Interval::Min15),
            ("30min", Interval::Min30),
            ("60min", Interval::Min60),
        ];
        for (s, expected) in members {
            assert_eq!(s.parse::<Interval>().unwrap(), expected);
            assert_eq!(expected.to_string(), s);
        }
    }

    #[test]
    fn interval_rejects_everything_else() {
        for s in ["2min", "90min", "1MIN", "daily", "", "5 min"] {
            assert!(s.parse::<Interval>().is_err(), "accepted '{s}'");
        }
    }

    #[test]
    fn output_size_enumeration_is_closed() {
        assert_eq!("compact".parse::<OutputSize>().unwrap(), OutputSize::Compact);
        assert_eq!("full".parse::<OutputSize>().unwrap(), OutputSize::Full);
        for s in ["Compact", "FULL", "all", ""] {
            assert!(s.parse::<OutputSize>().is_err(), "accepted '{s}'");
        }
        assert_eq!(OutputSize::default(), OutputSize::Compact);
    }

    #[test]
    fn frequency_enumeration_is_closed() {
        let members = [
            ("DAILY", Frequency::Daily),
            ("WEEKLY", Frequency::Weekly),
            ("MONTHLY", Frequency::Monthly),
        ];
        for (s, expected) in members {
            assert_eq!(s.parse::<Frequency>().unwrap(), expected);
            assert_eq!(expected.to_string(), s);
        }
        for s in ["daily", "HOURLY", "YEARLY", ""] {
            assert!(s.parse::<Frequency>().is_err(), "accepted '{s}'");
        }
    }

    #[test]
    fn frequency_derives_function_name() {
        assert_eq!(Frequency::Daily.function(), "TIME_SERIES_DAILY");
        assert_eq!(Frequency::Weekly.function(), "TIME_SERIES_WEEKLY");
        assert_eq!(Frequency::Monthly.function(), "TIME_SERIES_MONTHLY");
    }
}
