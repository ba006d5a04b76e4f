use crate::domain::chart::{ChartSeries, Dataset, LineStyle};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceBar, PriceChangeCalculator, Symbol};
use crate::domain::news::NewsItem;
use crate::log_debug;

/// Reverses one delivered sequence into ascending chronological order.
///
/// The upstream source emits newest-first; time-series charts read
/// left-to-right as time-ascending, so every sequence derived from a delivery
/// is flipped independently before charting. Applying it twice restores the
/// source order.
pub fn reverse_to_ascending<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// Domain service aligning the two independently fetched sequences of one
/// fetch cycle into chart-ready, chronologically ascending series
pub struct SeriesAligner {
    calculator: PriceChangeCalculator,
}

impl SeriesAligner {
    pub fn new() -> Self {
        Self { calculator: PriceChangeCalculator::new() }
    }

    /// Price series for the closing-price chart: one point per bar, dates
    /// and closes each reversed to ascending order. Empty bars yield the
    /// empty series, the valid "no data" state.
    pub fn price_series(&self, symbol: &Symbol, bars: &[PriceBar]) -> ChartSeries {
        if bars.is_empty() {
            return ChartSeries::empty();
        }

        let labels: Vec<_> = bars.iter().map(|bar| bar.date.clone()).collect();
        let closes: Vec<_> = bars.iter().map(|bar| Some(bar.ohlcv.close.value())).collect();

        ChartSeries::new(
            reverse_to_ascending(&labels),
            vec![Dataset::new(
                format!("{} Closing Prices", symbol.value()),
                reverse_to_ascending(&closes),
                LineStyle::close_price(),
            )],
        )
    }

    /// Comparison series: sentiment polarity and percent price change as two
    /// datasets over one shared date-label axis.
    ///
    /// News items carry no date key in the available payload, so item k is
    /// paired with bar k by sequence position. Sequences of different length
    /// are silently truncated to the overlapping prefix of the source order
    /// before any reversal, so position i of every reversed output still
    /// refers to the same source bar. Either input being empty yields the
    /// empty series.
    pub fn comparison_series(&self, bars: &[PriceBar], news: &[NewsItem]) -> ChartSeries {
        let overlap = bars.len().min(news.len());
        if overlap == 0 {
            return ChartSeries::empty();
        }
        if bars.len() != news.len() {
            log_debug!(
                LogComponent::Domain("SeriesAligner"),
                "Truncating to {} shared points ({} bars, {} news items)",
                overlap,
                bars.len(),
                news.len()
            );
        }

        let bars = &bars[..overlap];
        let news = &news[..overlap];

        let labels: Vec<_> = bars.iter().map(|bar| bar.date.clone()).collect();
        let changes = self.calculator.percent_changes(bars);
        let polarities: Vec<_> = news.iter().map(|item| Some(item.polarity.value())).collect();

        ChartSeries::new(
            reverse_to_ascending(&labels),
            vec![
                Dataset::new(
                    "Sentiment Score".to_string(),
                    reverse_to_ascending(&polarities),
                    LineStyle::sentiment(),
                ),
                Dataset::new(
                    "Price Change (%)".to_string(),
                    reverse_to_ascending(&changes),
                    LineStyle::percent_change(),
                ),
            ],
        )
    }
}

impl Default for SeriesAligner {
    fn default() -> Self {
        Self::new()
    }
}
