use url::Url;

use crate::{validation, Error};

use super::common::Query;

/// Query for the `SYMBOL_SEARCH` operation: free-text lookup of symbols
/// and company names.
#[derive(Debug, Clone)]
pub struct SymbolSearchQuery {
    pub keywords: String,
}

impl SymbolSearchQuery {
    pub fn new(keywords: &str) -> Self {
        Self {
            keywords: keywords.to_string(),
        }
    }
}

impl Query for SymbolSearchQuery {
    fn function(&self) -> String {
        "SYMBOL_SEARCH".to_string()
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_keywords(&self.keywords)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", &self.function());
        url.query_pairs_mut()
            .append_pair("keywords", &self.keywords);
        url
    }
}
