use crate::domain::chart::{ChartSeries, SeriesAligner};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceBar, Symbol};
use crate::domain::news::NewsItem;
use crate::infrastructure::http::{NewsApiClient, StockApiClient};
use crate::{log_error, log_info};
use futures::join;

/// Session context of one fetch cycle
///
/// Explicit request state instead of ambient globals: the pipeline only ever
/// works with the symbol and generation of the cycle it was handed, and a
/// cycle that lost the generation race is discarded on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCycle {
    pub symbol: Symbol,
    pub generation: u64,
}

impl FetchCycle {
    pub fn new(symbol: Symbol, generation: u64) -> Self {
        Self { symbol, generation }
    }

    /// True when a newer cycle has been issued since this one started.
    pub fn is_stale(&self, latest_generation: u64) -> bool {
        self.generation < latest_generation
    }
}

/// Everything one completed fetch cycle produces
///
/// `bars` keeps the received newest-first order for the table; the two chart
/// series are ascending. Replaced wholesale on the next cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSnapshot {
    pub cycle: FetchCycle,
    pub bars: Vec<PriceBar>,
    pub news: Vec<NewsItem>,
    pub price_series: ChartSeries,
    pub comparison_series: ChartSeries,
}

/// Builds the snapshot from already-fetched inputs. Pure: borrows nothing
/// beyond the call and never mutates its inputs.
pub fn build_snapshot(cycle: FetchCycle, bars: Vec<PriceBar>, news: Vec<NewsItem>) -> SymbolSnapshot {
    let aligner = SeriesAligner::new();
    let price_series = aligner.price_series(&cycle.symbol, &bars);
    let comparison_series = aligner.comparison_series(&bars, &news);
    SymbolSnapshot { cycle, bars, news, price_series, comparison_series }
}

/// Application service orchestrating one symbol's fetch cycle
pub struct SymbolDataService {
    stock_client: StockApiClient,
    news_client: NewsApiClient,
}

impl SymbolDataService {
    pub fn new() -> Self {
        Self { stock_client: StockApiClient::new(), news_client: NewsApiClient::new() }
    }

    pub fn with_clients(stock_client: StockApiClient, news_client: NewsApiClient) -> Self {
        Self { stock_client, news_client }
    }

    /// Issues the two independent fetches concurrently, then runs the
    /// alignment pipeline once both have resolved.
    ///
    /// A failed fetch degrades to an empty input sequence: the downstream
    /// chart for that input is simply omitted, nothing aborts.
    pub async fn load(&self, cycle: FetchCycle) -> SymbolSnapshot {
        log_info!(
            LogComponent::Application("SymbolData"),
            "Loading cycle {} for {}",
            cycle.generation,
            cycle.symbol.value()
        );

        let (bars, news) = join!(
            self.stock_client.fetch_monthly_bars(&cycle.symbol),
            self.news_client.fetch_company_news(&cycle.symbol),
        );

        let bars = bars.unwrap_or_else(|e| {
            log_error!(
                LogComponent::Application("SymbolData"),
                "Stock fetch failed, continuing with empty bars: {e}"
            );
            Vec::new()
        });
        let news = news.unwrap_or_else(|e| {
            log_error!(
                LogComponent::Application("SymbolData"),
                "News fetch failed, continuing with empty news: {e}"
            );
            Vec::new()
        });

        build_snapshot(cycle, bars, news)
    }
}

impl Default for SymbolDataService {
    fn default() -> Self {
        Self::new()
    }
}
