use std::fmt;
use std::str::FromStr;

use crate::Error;

use super::Interval;

/// Technical indicator functions the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Sma,
    Ema,
    Vwap,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Indicator::Sma => "SMA",
                Indicator::Ema => "EMA",
                Indicator::Vwap => "VWAP",
            }
        )
    }
}

impl FromStr for Indicator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMA" => Ok(Indicator::Sma),
            "EMA" => Ok(Indicator::Ema),
            "VWAP" => Ok(Indicator::Vwap),
            _ => Err(Error::InvalidInput(format!(
                "unknown indicator '{s}'. Valid indicators: SMA, EMA, VWAP"
            ))),
        }
    }
}

/// Interval accepted by indicator operations: any intraday interval, or a
/// daily/weekly/monthly frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorInterval {
    Intraday(Interval),
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for IndicatorInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorInterval::Intraday(interval) => interval.fmt(f),
            IndicatorInterval::Daily => write!(f, "daily"),
            IndicatorInterval::Weekly => write!(f, "weekly"),
            IndicatorInterval::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for IndicatorInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(IndicatorInterval::Daily),
            "weekly" => Ok(IndicatorInterval::Weekly),
            "monthly" => Ok(IndicatorInterval::Monthly),
            other => other
                .parse::<Interval>()
                .map(IndicatorInterval::Intraday)
                .map_err(|_| {
                    Error::InvalidInput(format!(
                        "unknown indicator interval '{s}'. Valid intervals: \
                         1min, 5min, 15min, 30min, 60min, daily, weekly, monthly"
                    ))
                }),
        }
    }
}

/// Price series an indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    Close,
    Open,
    High,
    Low,
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SeriesType::Close => "close",
                SeriesType::Open => "open",
                SeriesType::High => "high",
                SeriesType::Low => "low",
            }
        )
    }
}

impl FromStr for SeriesType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close" => Ok(SeriesType::Close),
            "open" => Ok(SeriesType::Open),
            "high" => Ok(SeriesType::High),
            "low" => Ok(SeriesType::Low),
            _ => Err(Error::InvalidInput(format!(
                "unknown series type '{s}'. Valid series types: close, open, high, low"
            ))),
        }
    }
}
