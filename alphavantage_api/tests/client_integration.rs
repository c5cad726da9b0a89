use alphavantage_api::types::{
    Datatype, Frequency, Indicator, IndicatorInterval, Interval, SeriesType,
};
use alphavantage_api::{
    Client, Config, Error, HistoricalQuery, IndicatorQuery, IntradayQuery, QuoteQuery,
    SymbolSearchQuery,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(Config::new("test-key").with_base_url(&server.uri())).unwrap()
}

#[tokio::test]
async fn symbol_search_shapes_matches() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "bestMatches": [
            {"1. symbol": "VOD", "2. name": "Vodafone Group Plc", "3. type": "Equity"},
            {"1. symbol": "VOD.LON", "2. name": "Vodafone Group Plc", "3. type": "Equity"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "SYMBOL_SEARCH"))
        .and(query_param("keywords", "vodafone"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let table = client_for(&server)
        .symbol_search(&SymbolSearchQuery::new("vodafone"))
        .await
        .unwrap();

    assert_eq!(table.columns, vec!["symbol", "name", "type"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].values[0], "VOD");
    assert_eq!(table.rows[1].values[0], "VOD.LON");
}

#[tokio::test]
async fn intraday_prices_transpose_per_timestamp() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Meta Data": {
            "1. Information": "Intraday (5min) open, high, low, close prices and volume",
            "2. Symbol": "VOD"
        },
        "Time Series (5min)": {
            "2024-01-02 10:00:00": {
                "1. open": "10.00", "2. high": "10.20", "3. low": "9.90",
                "4. close": "10.10", "5. volume": "1200"
            },
            "2024-01-02 10:05:00": {
                "1. open": "10.10", "2. high": "10.30", "3. low": "10.00",
                "4. close": "10.25", "5. volume": "900"
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_INTRADAY"))
        .and(query_param("symbol", "VOD"))
        .and(query_param("interval", "5min"))
        .and(query_param("outputsize", "compact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let table = client_for(&server)
        .intraday_prices(&IntradayQuery::new("VOD", Interval::Min5))
        .await
        .unwrap();

    assert_eq!(table.columns, vec!["open", "high", "low", "close", "volume"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].key.as_deref(), Some("2024-01-02 10:00:00"));
    assert_eq!(table.rows[0].values[3], "10.10");
}

#[tokio::test]
async fn historical_prices_csv_indexed_by_timestamp() {
    let server = MockServer::start().await;
    let body = "timestamp,open,high,low,close,volume\n\
                2024-01-03,160.10,162.00,159.80,161.50,4100200\n\
                2024-01-02,158.90,160.50,158.20,160.10,3900100\n";

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_DAILY"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("datatype", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let table = client_for(&server)
        .historical_prices(&HistoricalQuery::new("IBM", Frequency::Daily).with_datatype(Datatype::Csv))
        .await
        .unwrap();

    assert_eq!(table.index.as_deref(), Some("timestamp"));
    assert_eq!(table.columns, vec!["open", "high", "low", "close", "volume"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].key.as_deref(), Some("2024-01-03"));
    assert_eq!(table.rows[1].values[3], "160.10");
}

#[tokio::test]
async fn current_quote_json_indexed_by_symbol() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Global Quote": {
            "1. symbol": "IBM",
            "2. open": "152.00",
            "3. price": "150.00",
            "4. volume": "3500000"
        }
    });

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("datatype", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let table = client_for(&server)
        .current_quote(&QuoteQuery::new("IBM"))
        .await
        .unwrap();

    assert_eq!(table.index.as_deref(), Some("symbol"));
    assert_eq!(table.columns, vec!["open", "price", "volume"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].key.as_deref(), Some("IBM"));
}

#[tokio::test]
async fn current_quote_csv_indexed_by_symbol() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("datatype", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("symbol,price\nIBM,150.00\n"))
        .mount(&server)
        .await;

    let table = client_for(&server)
        .current_quote(&QuoteQuery::new("IBM").with_datatype(Datatype::Csv))
        .await
        .unwrap();

    assert_eq!(table.index.as_deref(), Some("symbol"));
    assert_eq!(table.columns, vec!["price"]);
    assert_eq!(table.rows[0].key.as_deref(), Some("IBM"));
    assert_eq!(table.rows[0].values, vec!["150.00"]);
}

#[tokio::test]
async fn technical_indicator_labels_pass_through() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Meta Data": {
            "1: Symbol": "IBM",
            "2: Indicator": "Simple Moving Average (SMA)"
        },
        "Technical Analysis: SMA": {
            "2024-01-05": {"SMA": "147.20"},
            "2024-01-04": {"SMA": "146.80"}
        }
    });

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "SMA"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("interval", "weekly"))
        .and(query_param("time_period", "10"))
        .and(query_param("series_type", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let query = IndicatorQuery::new(
        Indicator::Sma,
        "IBM",
        IndicatorInterval::Weekly,
        10,
        SeriesType::Open,
    );
    let table = client_for(&server).technical_indicator(&query).await.unwrap();

    assert_eq!(table.columns, vec!["SMA"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].key.as_deref(), Some("2024-01-05"));
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .symbol_search(&SymbolSearchQuery::new("tesco"))
        .await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_surfaces_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .intraday_prices(&IntradayQuery::new("VOD", Interval::Min5))
        .await;
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[tokio::test]
async fn error_message_payload_surfaces_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Error Message": "Invalid API call. Please retry or visit the documentation."
    });

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .current_quote(&QuoteQuery::new("NOSUCH"))
        .await;
    assert!(matches!(result, Err(Error::Api(_))));
}

#[tokio::test]
async fn invalid_input_fails_before_any_request() {
    let server = MockServer::start().await;

    // expect(0): the server must never be hit for an invalid query.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let query = IndicatorQuery::new(
        Indicator::Sma,
        "IBM",
        IndicatorInterval::Daily,
        0,
        SeriesType::Close,
    );
    let result = client_for(&server).technical_indicator(&query).await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let result = client_for(&server)
        .intraday_prices(&IntradayQuery::new("   ", Interval::Min5))
        .await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}
