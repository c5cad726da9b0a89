use url::Url;

use crate::types::{Datatype, Frequency, Interval, OutputSize};
use crate::{validation, Error};

use super::common::Query;

/// Query for the `TIME_SERIES_INTRADAY` operation.
///
/// The response is always JSON; the interval also names the series entry
/// in the payload.
#[derive(Debug, Clone)]
pub struct IntradayQuery {
    pub symbol: String,
    pub interval: Interval,
    pub output_size: OutputSize,
}

impl IntradayQuery {
    pub fn new(symbol: &str, interval: Interval) -> Self {
        Self {
            symbol: symbol.to_string(),
            interval,
            output_size: OutputSize::default(),
        }
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }
}

impl Query for IntradayQuery {
    fn function(&self) -> String {
        "TIME_SERIES_INTRADAY".to_string()
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_symbol(&self.symbol)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", &self.function());
        url.query_pairs_mut().append_pair("symbol", &self.symbol);
        url.query_pairs_mut()
            .append_pair("interval", &self.interval.to_string());
        url.query_pairs_mut()
            .append_pair("outputsize", &self.output_size.to_string());
        url
    }
}

/// Query for the daily/weekly/monthly `TIME_SERIES_*` operations. The
/// `function` value is derived from the frequency.
#[derive(Debug, Clone)]
pub struct HistoricalQuery {
    pub symbol: String,
    pub freq: Frequency,
    pub datatype: Datatype,
}

impl HistoricalQuery {
    pub fn new(symbol: &str, freq: Frequency) -> Self {
        Self {
            symbol: symbol.to_string(),
            freq,
            datatype: Datatype::default(),
        }
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }
}

impl Query for HistoricalQuery {
    fn function(&self) -> String {
        self.freq.function()
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_symbol(&self.symbol)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", &self.function());
        url.query_pairs_mut().append_pair("symbol", &self.symbol);
        url.query_pairs_mut()
            .append_pair("datatype", &self.datatype.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_function_follows_frequency() {
        let query = HistoricalQuery::new("IBM", Frequency::Daily);
        assert_eq!(query.function(), "TIME_SERIES_DAILY");

        let query = HistoricalQuery::new("IBM", Frequency::Weekly);
        assert_eq!(query.function(), "TIME_SERIES_WEEKLY");

        let query = HistoricalQuery::new("IBM", Frequency::Monthly);
        assert_eq!(query.function(), "TIME_SERIES_MONTHLY");
    }
}
