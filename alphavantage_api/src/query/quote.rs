use url::Url;

use crate::types::Datatype;
use crate::{validation, Error};

use super::common::Query;

/// Query for the `GLOBAL_QUOTE` operation: latest price and volume for one
/// symbol.
#[derive(Debug, Clone)]
pub struct QuoteQuery {
    pub symbol: String,
    pub datatype: Datatype,
}

impl QuoteQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            datatype: Datatype::default(),
        }
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }
}

impl Query for QuoteQuery {
    fn function(&self) -> String {
        "GLOBAL_QUOTE".to_string()
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
