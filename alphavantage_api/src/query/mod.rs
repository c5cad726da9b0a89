mod common;
pub use self::common::Query;

mod search;
pub use self::search::SymbolSearchQuery;

mod time_series;
pub use self::time_series::{HistoricalQuery, IntradayQuery};

mod quote;
pub use self::quote::QuoteQuery;

mod indicator;
pub use self::indicator::IndicatorQuery;
