//! Closed enumerations for the API's parameter contract.
//!
//! Every enumerated argument is a typed value with a `Display` impl for the
//! wire spelling and a strict `FromStr` that rejects anything outside the
//! set, so invalid parameters never reach the network.

mod series;
pub use self::series::{Frequency, Interval, OutputSize};

mod indicator;
pub use self::indicator::{Indicator, IndicatorInterval, SeriesType};

mod datatype;
pub use self::datatype::Datatype;
