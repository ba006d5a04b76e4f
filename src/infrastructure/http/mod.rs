//! REST clients for the two backend endpoints feeding one fetch cycle.

pub mod news_api_client;
pub mod stock_api_client;

pub use news_api_client::NewsApiClient;
pub use stock_api_client::StockApiClient;

/// Backend base URL; the API is the thin local aggregation service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
