use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    BarValidationService, DateKey, OHLCV, Price, PriceBar, Symbol, Volume,
};
use crate::{log_info, log_warn};
use gloo_net::http::Request;
use serde::Deserialize;

/// Monthly OHLCV payload of the /stock endpoint
#[derive(Debug, Deserialize)]
struct StockResponse {
    symbol: String,
    data: Vec<BarDto>,
}

#[derive(Debug, Deserialize)]
struct BarDto {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl BarDto {
    fn to_domain_bar(&self) -> PriceBar {
        PriceBar::new(
            DateKey::from(self.date.as_str()),
            OHLCV::new(
                Price::from(self.open),
                Price::from(self.high),
                Price::from(self.low),
                Price::from(self.close),
                Volume::from(self.volume),
            ),
        )
    }
}

/// REST client for the monthly stock-data endpoint
#[derive(Clone)]
pub struct StockApiClient {
    base_url: String,
    validator: BarValidationService,
}

impl StockApiClient {
    pub fn new() -> Self {
        Self::with_base_url(super::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), validator: BarValidationService::new() }
    }

    pub fn stock_url(&self, symbol: &Symbol) -> String {
        format!("{}/stock?symbol={}", self.base_url, symbol.value())
    }

    /// Fetches the monthly bars for one symbol, newest-first as delivered.
    pub async fn fetch_monthly_bars(&self, symbol: &Symbol) -> NetworkResult<Vec<PriceBar>> {
        let url = self.stock_url(symbol);
        log_info!(LogComponent::Infrastructure("StockAPI"), "📈 Fetching monthly bars from: {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch stock data: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!("HTTP error: {}", response.status())));
        }

        let payload: StockResponse = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse stock JSON: {e:?}")))?;

        if payload.symbol.to_uppercase() != symbol.value() {
            log_warn!(
                LogComponent::Infrastructure("StockAPI"),
                "Response symbol {} does not match requested {}",
                payload.symbol,
                symbol.value()
            );
        }

        let bars: Vec<PriceBar> = payload.data.iter().map(BarDto::to_domain_bar).collect();

        // Inconsistent bars are worth a warning, not a dropped delivery.
        if let Err(e) = self.validator.validate_bars(&bars) {
            log_warn!(LogComponent::Infrastructure("StockAPI"), "{e}");
        }

        log_info!(
            LogComponent::Infrastructure("StockAPI"),
            "✅ Loaded {} monthly bars for {}",
            bars.len(),
            symbol.value()
        );

        Ok(bars)
    }
}

impl Default for StockApiClient {
    fn default() -> Self {
        Self::new()
    }
}
