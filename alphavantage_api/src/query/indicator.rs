use url::Url;

use crate::types::{Datatype, Indicator, IndicatorInterval, SeriesType};
use crate::{validation, Error};

use super::common::Query;

/// Query for a technical indicator operation. The indicator name is the
/// wire `function` value.
#[derive(Debug, Clone)]
pub struct IndicatorQuery {
    pub indicator: Indicator,
    pub symbol: String,
    pub interval: IndicatorInterval,
    /// Number of data points per indicator value. Must be positive;
    /// zero is rejected in [`Query::validate`].
    pub time_period: u32,
    pub series_type: SeriesType,
    pub datatype: Datatype,
}

impl IndicatorQuery {
    pub fn new(
        indicator: Indicator,
        symbol: &str,
        interval: IndicatorInterval,
        time_period: u32,
        series_type: SeriesType,
    ) -> Self {
        Self {
            indicator,
            symbol: symbol.to_string(),
            interval,
            time_period,
            series_type,
            datatype: Datatype::default(),
        }
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }
}

impl Query for IndicatorQuery {
    fn function(&self) -> String {
        self.indicator.to_string()
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_symbol(&self.symbol)?;
        if self.time_period == 0 {
            return Err(Error::InvalidInput(
                "time_period must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", &self.function());
        url.query_pairs_mut().append_pair("symbol", &self.symbol);
        url.query_pairs_mut()
            .append_pair("interval", &self.interval.to_string());
        url.query_pairs_mut()
            .append_pair("time_period", &self.time_period.to_string());
        url.query_pairs_mut()
            .append_pair("series_type", &self.series_type.to_string());
        url.query_pairs_mut()
            .append_pair("datatype", &self.datatype.to_string());
        url
    }
}
